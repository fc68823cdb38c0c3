//! Small datasets shared by tests, here and downstream (`test-support` feature).

use serde_json::{Value, json};
use tesserae_tokens_schema::Dataset;

/// Parses a dataset from an inline JSON value.
pub fn dataset(value: Value) -> Dataset {
    serde_json::from_value(value).expect("fixture dataset must parse")
}

/// Three collections with cross-collection aliases.
///
/// - `Primitives` (`Default`): `grey/100`, `grey/900`, `Grey/legacy`,
///   `surface-dark-base` (0.1 grey), `spacing/base` (4).
/// - `Theme` (`Light` default, `Dark`): `surface`, `text/primary`,
///   `border/greyed` (two-hop alias in Light), `overlay` (no Dark value),
///   `broken-alias` (Light points at an unknown id), `label/font` (string),
///   `focus-ring/visible` (boolean).
/// - `Density` (`Compact`, `Comfortable` default): `gap`, `button/surface`
///   (aliases `surface` in both modes).
pub fn theme_dataset() -> Dataset {
    dataset(json!({
        "collections": [
            {
                "id": "c-prim",
                "name": "Primitives",
                "defaultModeId": "m-prim",
                "modes": [{ "modeId": "m-prim", "name": "Default" }],
                "variables": [
                    {
                        "id": "v-grey-100", "name": "grey/100",
                        "variableCollectionId": "c-prim", "resolvedType": "COLOR",
                        "valuesByMode": { "m-prim": { "r": 0.94, "g": 0.94, "b": 0.94, "a": 1 } }
                    },
                    {
                        "id": "v-grey-900", "name": "grey/900",
                        "variableCollectionId": "c-prim", "resolvedType": "COLOR",
                        "valuesByMode": { "m-prim": { "r": 0.2, "g": 0.2, "b": 0.2, "a": 1 } }
                    },
                    {
                        "id": "v-grey-legacy", "name": "Grey/legacy",
                        "variableCollectionId": "c-prim", "resolvedType": "COLOR",
                        "valuesByMode": { "m-prim": { "r": 0.5, "g": 0.5, "b": 0.5, "a": 1 } }
                    },
                    {
                        "id": "v-surface-dark-base", "name": "surface-dark-base",
                        "variableCollectionId": "c-prim", "resolvedType": "COLOR",
                        "valuesByMode": { "m-prim": { "r": 0.1, "g": 0.1, "b": 0.1, "a": 1 } }
                    },
                    {
                        "id": "v-spacing", "name": "spacing/base",
                        "variableCollectionId": "c-prim", "resolvedType": "FLOAT",
                        "valuesByMode": { "m-prim": 4 }
                    }
                ]
            },
            {
                "id": "c-theme",
                "name": "Theme",
                "defaultModeId": "m-light",
                "modes": [
                    { "modeId": "m-light", "name": "Light" },
                    { "modeId": "m-dark", "name": "Dark" }
                ],
                "variables": [
                    {
                        "id": "v-surface", "name": "surface",
                        "variableCollectionId": "c-theme", "resolvedType": "COLOR",
                        "valuesByMode": {
                            "m-light": { "r": 1, "g": 1, "b": 1, "a": 1 },
                            "m-dark": { "type": "VARIABLE_ALIAS", "id": "v-surface-dark-base" }
                        }
                    },
                    {
                        "id": "v-text", "name": "text/primary",
                        "variableCollectionId": "c-theme", "resolvedType": "COLOR",
                        "valuesByMode": {
                            "m-light": { "alias": "v-grey-900" },
                            "m-dark": { "alias": "v-grey-100" }
                        }
                    },
                    {
                        "id": "v-border", "name": "border/greyed",
                        "variableCollectionId": "c-theme", "resolvedType": "COLOR",
                        "valuesByMode": {
                            "m-light": { "alias": "v-text" },
                            "m-dark": { "r": 0, "g": 0, "b": 1, "a": 0.5 }
                        }
                    },
                    {
                        "id": "v-overlay", "name": "overlay",
                        "variableCollectionId": "c-theme", "resolvedType": "COLOR",
                        "valuesByMode": { "m-light": { "r": 0, "g": 0, "b": 0, "a": 0.25 } }
                    },
                    {
                        "id": "v-broken", "name": "broken-alias",
                        "variableCollectionId": "c-theme", "resolvedType": "COLOR",
                        "valuesByMode": {
                            "m-light": { "alias": "v-does-not-exist" },
                            "m-dark": { "alias": "v-surface" }
                        }
                    },
                    {
                        "id": "v-label-font", "name": "label/font",
                        "variableCollectionId": "c-theme", "resolvedType": "STRING",
                        "valuesByMode": { "m-light": "Inter", "m-dark": "Inter Display" }
                    },
                    {
                        "id": "v-focus", "name": "focus-ring/visible",
                        "variableCollectionId": "c-theme", "resolvedType": "BOOLEAN",
                        "valuesByMode": { "m-light": true, "m-dark": false }
                    }
                ]
            },
            {
                "id": "c-density",
                "name": "Density",
                "defaultModeId": "m-comfortable",
                "modes": [
                    { "modeId": "m-compact", "name": "Compact" },
                    { "modeId": "m-comfortable", "name": "Comfortable" }
                ],
                "variables": [
                    {
                        "id": "v-gap", "name": "gap",
                        "variableCollectionId": "c-density", "resolvedType": "FLOAT",
                        "valuesByMode": {
                            "m-compact": { "alias": "v-spacing" },
                            "m-comfortable": 8
                        }
                    },
                    {
                        "id": "v-button-surface", "name": "button/surface",
                        "variableCollectionId": "c-density", "resolvedType": "COLOR",
                        "valuesByMode": {
                            "m-compact": { "alias": "v-surface" },
                            "m-comfortable": { "alias": "v-surface" }
                        }
                    }
                ]
            }
        ]
    }))
}

/// Aliases that loop: `a -> b -> c -> a`, plus `self` pointing at itself and
/// `entry` leading into the loop.
pub fn cyclic_dataset() -> Dataset {
    dataset(json!({
        "collections": [{
            "id": "c", "name": "Loops", "defaultModeId": "m",
            "modes": [{ "modeId": "m", "name": "Default" }],
            "variables": [
                { "id": "a", "name": "a", "variableCollectionId": "c",
                  "resolvedType": "COLOR", "valuesByMode": { "m": { "alias": "b" } } },
                { "id": "b", "name": "b", "variableCollectionId": "c",
                  "resolvedType": "COLOR", "valuesByMode": { "m": { "alias": "c" } } },
                { "id": "c", "name": "c", "variableCollectionId": "c",
                  "resolvedType": "COLOR", "valuesByMode": { "m": { "alias": "a" } } },
                { "id": "self", "name": "self", "variableCollectionId": "c",
                  "resolvedType": "COLOR", "valuesByMode": { "m": { "alias": "self" } } },
                { "id": "entry", "name": "entry", "variableCollectionId": "c",
                  "resolvedType": "COLOR", "valuesByMode": { "m": { "alias": "b" } } }
            ]
        }]
    }))
}

/// A dataset the builder accepts as-is even though it breaks the model's
/// invariants: a duplicated variable id and name, a dangling collection
/// reference, and a default mode id that names no mode.
pub fn malformed_dataset() -> Dataset {
    dataset(json!({
        "collections": [
            {
                "id": "c-one", "name": "One", "defaultModeId": "m-one",
                "modes": [{ "modeId": "m-one", "name": "Default" }],
                "variables": [
                    { "id": "dup", "name": "first", "variableCollectionId": "c-one",
                      "resolvedType": "FLOAT", "valuesByMode": { "m-one": 1 } },
                    { "id": "orphan", "name": "orphan", "variableCollectionId": "c-ghost",
                      "resolvedType": "FLOAT", "valuesByMode": { "m-one": 2 } },
                    { "id": "shadowed", "name": "twin", "variableCollectionId": "c-one",
                      "resolvedType": "FLOAT", "valuesByMode": { "m-one": 10 } },
                    { "id": "shadowing", "name": "twin", "variableCollectionId": "c-one",
                      "resolvedType": "FLOAT", "valuesByMode": { "m-one": 20 } },
                    { "id": "dup", "name": "second", "variableCollectionId": "c-one",
                      "resolvedType": "FLOAT", "valuesByMode": { "m-one": 3 } }
                ]
            },
            {
                "id": "c-two", "name": "Two", "defaultModeId": "m-missing",
                "modes": [{ "modeId": "m-two", "name": "Only" }],
                "variables": [
                    { "id": "lost", "name": "lost", "variableCollectionId": "c-two",
                      "resolvedType": "FLOAT", "valuesByMode": { "m-two": 5 } }
                ]
            }
        ]
    }))
}
