use indexmap::IndexMap;
use tracing::warn;

use super::{ModeSelection, ResolveError, ResolvedValue, VariableIndex};

impl VariableIndex {
    /// Resolves every variable name under one request, in dataset order.
    ///
    /// When several variables share a name only the first is resolved, matching
    /// [`get_by_name`](Self::get_by_name).
    pub fn resolve_all(
        &self,
        requested: &ModeSelection,
    ) -> IndexMap<&str, Result<ResolvedValue, ResolveError>> {
        let modes = self.resolve_modes(requested);
        let mut resolved = IndexMap::with_capacity(self.len());

        for variable in self.variables() {
            resolved
                .entry(variable.name.as_str())
                .or_insert_with(|| self.resolve_with_modes(&variable.id, &modes));
        }

        resolved
    }

    /// Renders the resolved variables as CSS custom properties on `:root`.
    ///
    /// Variables that fail to resolve are left out.
    pub fn css_custom_properties(&self, requested: &ModeSelection) -> String {
        let mut css = String::from(":root {\n");

        for (name, value) in self.resolve_all(requested) {
            match value {
                Ok(value) => {
                    css.push_str(&format!("  --{}: {value};\n", css_property_name(name)));
                }
                Err(error) => {
                    warn!(target: "tesserae_tokens::export", name, %error, "skipping variable");
                }
            }
        }

        css.push_str("}\n");
        css
    }
}

/// Lowercases `name` and replaces anything outside `[a-z0-9_-]` with `-`.
pub fn css_property_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' | '_' => c,
            'A'..='Z' => c.to_ascii_lowercase(),
            _ => '-',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::{
        ResolveErrorKind,
        fixtures::{malformed_dataset, theme_dataset},
    };

    #[test]
    fn test_css_property_name() {
        assert_eq!(css_property_name("grey/100"), "grey-100");
        assert_eq!(css_property_name("Surface Primary"), "surface-primary");
        assert_eq!(css_property_name("focus-ring/visible"), "focus-ring-visible");
    }

    #[test]
    fn test_resolve_all_keeps_failures_per_variable() {
        let index = VariableIndex::from(theme_dataset());
        let resolved = index.resolve_all(&ModeSelection::from([("Theme", "Dark")]));

        assert_eq!(resolved.len(), index.len());
        assert_eq!(
            resolved["surface"],
            Ok(ResolvedValue::Color("rgb(26, 26, 26)".into()))
        );
        assert_eq!(
            resolved["overlay"].as_ref().map_err(ResolveError::kind),
            Err(ResolveErrorKind::MissingValue)
        );
    }

    #[test]
    fn test_resolve_all_takes_first_of_shared_names() {
        let index = VariableIndex::from(malformed_dataset());
        let resolved = index.resolve_all(&ModeSelection::new());

        assert_eq!(resolved["twin"], Ok(ResolvedValue::Number(10.)));
    }

    #[test]
    fn test_css_custom_properties() {
        let index = VariableIndex::from(theme_dataset());
        let css = index.css_custom_properties(&ModeSelection::new());

        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        assert!(css.contains("  --surface: rgb(255, 255, 255);\n"));
        assert!(css.contains("  --spacing-base: 4;\n"));
        assert!(css.contains("  --label-font: Inter;\n"));
        assert!(css.contains("  --overlay: rgba(0, 0, 0, 0.25);\n"));
        assert!(
            !css.contains("--broken-alias"),
            "Unresolvable variables should be skipped"
        );
    }
}
