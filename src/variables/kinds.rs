#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

use super::ModeSelection;

/// Light and dark variants of the `Theme` collection.
///
/// Use `selection()` to get the mode request widgets pass when resolving.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[func(pub fn mode_name(&self) -> &'static str)]
pub enum ThemeVariantKind {
    /// Dark surfaces with light text.
    #[assoc(mode_name = "Dark")]
    Dark,
    /// Light surfaces with dark text.
    #[assoc(mode_name = "Light")]
    Light,
}

impl ThemeVariantKind {
    /// Name of the collection the variants select a mode in.
    pub const COLLECTION: &'static str = "Theme";

    pub fn selection(self) -> ModeSelection {
        ModeSelection::new().with(Self::COLLECTION, self.mode_name())
    }
}

impl From<ThemeVariantKind> for ModeSelection {
    fn from(kind: ThemeVariantKind) -> Self {
        kind.selection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::{ResolvedValue, VariableIndex, fixtures::theme_dataset};

    #[test]
    fn test_theme_variant_kind_mode_names() {
        assert_eq!(ThemeVariantKind::Dark.mode_name(), "Dark");
        assert_eq!(ThemeVariantKind::Light.mode_name(), "Light");
    }

    #[test]
    fn test_theme_variant_kind_selection() {
        let selection: ModeSelection = ThemeVariantKind::Dark.into();
        assert_eq!(selection.get("Theme"), Some("Dark"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_theme_variant_kind_resolves() {
        let index = VariableIndex::from(theme_dataset());

        assert_eq!(
            index.get_by_name("text/primary", &ThemeVariantKind::Light.selection()),
            Ok(ResolvedValue::Color("rgb(51, 51, 51)".into()))
        );
        assert_eq!(
            index.get_by_name("text/primary", &ThemeVariantKind::Dark.selection()),
            Ok(ResolvedValue::Color("rgb(240, 240, 240)".into()))
        );
    }
}
