use std::borrow::Cow;

use anyhow::Result;
use rust_embed::RustEmbed;

use crate::assets::assets::DatasetProvider;

/// Datasets bundled with the crate, embedded from `tokens/`.
#[derive(RustEmbed)]
#[folder = "tokens/"]
#[include = "**/*.json"]
#[exclude = "*.DS_Store"]
pub struct TokenAssets;

impl DatasetProvider for TokenAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|f| f.data)
    }

    fn list(&self, path: &str) -> Result<Vec<String>> {
        Ok(TokenAssets::iter()
            .filter(|p| p.starts_with(path))
            .map(Cow::into_owned)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        DirectoryDatasets,
        variables::{ModeSelection, ResolvedValue, ThemeVariantKind},
    };

    #[test]
    fn test_bundled_datasets_are_listed() {
        let datasets = crate::datasets![TokenAssets];
        assert!(datasets.list("").unwrap().contains(&"default.json".to_string()));
    }

    #[test]
    fn test_bundled_default_matches_builtin() {
        let datasets = crate::datasets![TokenAssets];
        let dataset = datasets.load_dataset("default.json").unwrap();
        assert_eq!(&dataset, crate::builtin_dataset());
    }

    #[test]
    fn test_bundled_default_resolves_theme_tokens() {
        let index = crate::datasets![TokenAssets].load_index("default.json").unwrap();

        assert_eq!(
            index.get_by_name("surface/primary", &ModeSelection::new()),
            Ok(ResolvedValue::Color("rgb(255, 255, 255)".into()))
        );
        assert_eq!(
            index.get_by_name("surface/primary", &ThemeVariantKind::Dark.selection()),
            Ok(ResolvedValue::Color("rgb(25, 25, 25)".into()))
        );
        assert_eq!(
            index.get_by_name("modal/backdrop", &ModeSelection::new()),
            Ok(ResolvedValue::Color("rgba(0, 0, 0, 0.5)".into()))
        );
        assert_eq!(
            index.get_by_name("button/radius", &ModeSelection::new()),
            Ok(ResolvedValue::Number(8.))
        );
    }

    #[test]
    fn test_embedded_assets_take_precedence() {
        let datasets = crate::datasets![TokenAssets, DirectoryDatasets::new("/nonexistent")];
        assert!(datasets.load("default.json").unwrap().is_some());
    }
}
