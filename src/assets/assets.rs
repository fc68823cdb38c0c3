use std::{
    borrow::Cow,
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use smallvec::SmallVec;
use tracing::debug;

use crate::variables::{Dataset, VariableIndex};

/// An ordered chain of dataset sources. The first provider holding a path wins.
pub struct Datasets<const N: usize> {
    providers: SmallVec<[Box<dyn DatasetProvider>; N]>,
}

impl<const N: usize> Datasets<N> {
    pub fn new(providers: [Box<dyn DatasetProvider>; N]) -> Datasets<N> {
        Self {
            providers: SmallVec::from(providers),
        }
    }

    /// Raw bytes of the dataset at `path`, or `None` for an empty path.
    pub fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        for provider in &self.providers {
            let dataset = provider.get(path);

            if dataset.is_some() {
                return Ok(dataset);
            }
        }

        Err(anyhow!("could not find dataset at path \"{path}\""))
    }

    pub fn list(&self, path: &str) -> Result<Vec<String>> {
        Ok(self
            .providers
            .iter()
            .flat_map(|datasets| datasets.list(path).into_iter())
            .flatten()
            .collect())
    }

    pub fn load_dataset(&self, path: &str) -> Result<Dataset> {
        let bytes = self
            .load(path)?
            .ok_or_else(|| anyhow!("dataset path is empty"))?;

        let dataset = Dataset::from_slice(&bytes)
            .with_context(|| format!("could not parse dataset at path \"{path}\""))?;

        debug!(
            target: "tesserae_tokens::assets",
            path,
            collections = dataset.collections.len(),
            "loaded dataset"
        );

        Ok(dataset)
    }

    pub fn load_index(&self, path: &str) -> Result<VariableIndex> {
        self.load_dataset(path).map(VariableIndex::from)
    }
}

#[macro_export]
macro_rules! datasets {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::Datasets::new([
            $( Box::new($item) ),*
        ])
    };
}

pub trait DatasetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Result<Vec<String>>;
}

/// Datasets stored as `.json` files directly inside a directory.
pub struct DirectoryDatasets {
    root: PathBuf,
}

impl DirectoryDatasets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DatasetProvider for DirectoryDatasets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        // Only plain relative paths, never escaping the root.
        let relative = Path::new(path);
        if !relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
        {
            return None;
        }

        fs::read(self.root.join(relative)).ok().map(Cow::Owned)
    }

    fn list(&self, path: &str) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("could not read dataset directory {:?}", self.root))?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.starts_with(path))
            .collect();
        names.sort();

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::{ModeSelection, ResolvedValue};

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(name: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "tesserae-tokens-{name}-{}",
                std::process::id()
            ));
            fs::create_dir_all(&path).unwrap();
            Self(path)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    const SMALL_DATASET: &str = r#"{
        "collections": [{
            "id": "c", "name": "Theme", "defaultModeId": "l",
            "modes": [{ "modeId": "l", "name": "Light" }, { "modeId": "d", "name": "Dark" }],
            "variables": [{
                "id": "v", "name": "surface", "variableCollectionId": "c",
                "resolvedType": "COLOR",
                "valuesByMode": { "l": { "r": 1, "g": 1, "b": 1 }, "d": { "r": 0, "g": 0, "b": 0 } }
            }]
        }]
    }"#;

    #[test]
    fn test_directory_datasets_load_and_list() {
        let dir = TempDir::new("load");
        fs::write(dir.0.join("brand.json"), SMALL_DATASET).unwrap();
        fs::write(dir.0.join("notes.txt"), "ignored").unwrap();

        let datasets = datasets![DirectoryDatasets::new(&dir.0)];

        assert_eq!(datasets.list("").unwrap(), ["brand.json"]);

        let index = datasets.load_index("brand.json").unwrap();
        assert_eq!(
            index.get_by_name("surface", &ModeSelection::from([("Theme", "Dark")])),
            Ok(ResolvedValue::Color("rgb(0, 0, 0)".into()))
        );
    }

    #[test]
    fn test_missing_dataset_is_an_error() {
        let dir = TempDir::new("missing");
        let datasets = datasets![DirectoryDatasets::new(&dir.0)];

        let error = datasets.load("absent.json").unwrap_err();
        assert!(error.to_string().contains("absent.json"));
    }

    #[test]
    fn test_empty_path_loads_nothing() {
        let dir = TempDir::new("empty");
        let datasets = datasets![DirectoryDatasets::new(&dir.0)];

        assert!(datasets.load("").unwrap().is_none());
        assert!(datasets.load_dataset("").is_err());
    }

    #[test]
    fn test_paths_cannot_escape_the_root() {
        let dir = TempDir::new("escape");
        let provider = DirectoryDatasets::new(dir.0.join("nested"));
        fs::write(dir.0.join("outside.json"), SMALL_DATASET).unwrap();

        assert!(provider.get("../outside.json").is_none());
    }

    #[test]
    fn test_invalid_dataset_reports_path() {
        let dir = TempDir::new("invalid");
        fs::write(dir.0.join("broken.json"), "{ \"collections\": 3 }").unwrap();
        let datasets = datasets![DirectoryDatasets::new(&dir.0)];

        let error = datasets.load_dataset("broken.json").unwrap_err();
        assert!(format!("{error:#}").contains("broken.json"));
    }
}
