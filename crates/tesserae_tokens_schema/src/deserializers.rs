use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;
use smallvec::SmallVec;

use crate::{Mode, RawValue, Rgba, VariableAlias};

pub fn de_modes<'de, D>(deserializer: D) -> Result<SmallVec<[Mode; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = SmallVec::deserialize(deserializer)?;

    if value.is_empty() {
        return Err(D::Error::custom(
            "at least one mode needs to be provided for a collection.",
        ));
    }

    Ok(value)
}

pub fn de_values_by_mode<'de, D>(deserializer: D) -> Result<IndexMap<String, RawValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = IndexMap::<String, Value>::deserialize(deserializer)?;

    Ok(entries
        .into_iter()
        .filter_map(|(mode_id, value)| {
            RawValue::deserialize(value)
                .ok()
                .map(|value| (mode_id, value))
        })
        .collect())
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match RawValueRepr::deserialize(deserializer)? {
            RawValueRepr::Alias(AliasRepr::Tagged { id, .. })
            | RawValueRepr::Alias(AliasRepr::Short { alias: id }) => {
                RawValue::Alias(VariableAlias::new(id))
            }
            RawValueRepr::Color(color) => RawValue::Color(color),
            RawValueRepr::Boolean(boolean) => RawValue::Boolean(boolean),
            RawValueRepr::Number(number) => RawValue::Number(number),
            RawValueRepr::String(string) => RawValue::String(string),
        };

        Ok(value)
    }
}

// Variant order matters: aliases are objects too, so they are tried before colors.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValueRepr {
    Alias(AliasRepr),
    Color(Rgba),
    Boolean(bool),
    Number(f64),
    String(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AliasRepr {
    Tagged {
        #[serde(rename = "type")]
        _kind: AliasTag,
        id: String,
    },
    Short {
        alias: String,
    },
}

#[derive(Deserialize)]
enum AliasTag {
    #[serde(rename = "VARIABLE_ALIAS")]
    VariableAlias,
}
