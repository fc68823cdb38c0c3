use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::VariableIndex;

/// A partial request of mode names, keyed by collection name.
///
/// Collections left out, or given a mode name they don't have, fall back to
/// their default mode when resolved against an index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModeSelection(IndexMap<String, String>);

impl ModeSelection {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn with(mut self, collection: impl Into<String>, mode: impl Into<String>) -> Self {
        self.insert(collection, mode);
        self
    }

    /// Requests `mode` for `collection`, returning the previously requested mode name.
    pub fn insert(
        &mut self,
        collection: impl Into<String>,
        mode: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(collection.into(), mode.into())
    }

    pub fn get(&self, collection: &str) -> Option<&str> {
        self.0.get(collection).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ModeSelection {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(collection, mode)| (collection.into(), mode.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for ModeSelection {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// A mode id for every collection in an index, keyed by collection name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedModes<'a>(IndexMap<&'a str, &'a str>);

impl<'a> ResolvedModes<'a> {
    pub fn get(&self, collection_name: &str) -> Option<&'a str> {
        self.0.get(collection_name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl VariableIndex {
    /// Completes a mode request over every known collection.
    ///
    /// The result covers collections the request never names, since an alias
    /// chain can cross into any of them.
    pub fn resolve_modes(&self, requested: &ModeSelection) -> ResolvedModes<'_> {
        let modes = self
            .modes
            .iter()
            .filter_map(|(collection_name, table)| {
                let requested_mode = requested.get(collection_name);

                let mode_id = match requested_mode.and_then(|mode| table.get(mode)) {
                    Some(mode_id) => mode_id.as_str(),
                    None => {
                        if let Some(mode) = requested_mode {
                            debug!(
                                target: "tesserae_tokens::modes",
                                collection = %collection_name,
                                mode,
                                "unknown mode, falling back to the default"
                            );
                        }
                        self.default_mode_id(collection_name)?
                    }
                };

                Some((collection_name.as_str(), mode_id))
            })
            .collect();

        ResolvedModes(modes)
    }

    fn default_mode_id(&self, collection_name: &str) -> Option<&str> {
        self.collection_by_name(collection_name)
            .map(|collection| collection.default_mode_id.as_str())
    }
}
