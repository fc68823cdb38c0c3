use indexmap::IndexMap;
use tesserae_tokens_schema::{Collection, Dataset, Variable};
use tracing::{debug, warn};

/// Mode name to mode id, for a single collection.
pub type ModeTable = IndexMap<String, String>;

/// Immutable lookup structures over a [`Dataset`].
///
/// Built once, then shared read-only by every resolution and query. All maps
/// keep dataset order, so "first match" scans are deterministic.
///
/// Nothing is validated beyond what lookups need. Duplicate ids replace the
/// earlier entry in place, and dangling references only surface when a
/// resolution walks into them.
#[derive(Debug, Clone, Default)]
pub struct VariableIndex {
    pub(super) variables: IndexMap<String, Variable>,
    /// Collections without their embedded variables.
    pub(super) collections: IndexMap<String, Collection>,
    /// Collection name to its mode table.
    pub(super) modes: IndexMap<String, ModeTable>,
    /// Collection name to collection id.
    pub(super) collection_ids: IndexMap<String, String>,
}

impl VariableIndex {
    pub fn build(dataset: &Dataset) -> Self {
        Self::from(dataset.clone())
    }

    fn from_collections(collections: impl IntoIterator<Item = Collection>) -> Self {
        let mut index = Self::default();

        for mut collection in collections {
            for variable in collection.variables.drain(..) {
                index.insert_variable(variable);
            }

            let table: ModeTable = collection
                .modes
                .iter()
                .map(|mode| (mode.name.clone(), mode.mode_id.clone()))
                .collect();

            if let Some(previous) = index
                .collection_ids
                .insert(collection.name.clone(), collection.id.clone())
                && previous != collection.id
            {
                warn!(
                    target: "tesserae_tokens::index",
                    name = %collection.name,
                    shadowed = %previous,
                    "duplicate collection name, the later collection wins name lookups"
                );
            }

            index.modes.insert(collection.name.clone(), table);

            if let Some(previous) = index.collections.insert(collection.id.clone(), collection) {
                warn!(
                    target: "tesserae_tokens::index",
                    id = %previous.id,
                    "duplicate collection id, keeping the later definition"
                );
            }
        }

        debug!(
            target: "tesserae_tokens::index",
            collections = index.collections.len(),
            variables = index.variables.len(),
            "built variable index"
        );

        index
    }

    fn insert_variable(&mut self, variable: Variable) {
        if let Some(previous) = self.variables.insert(variable.id.clone(), variable) {
            warn!(
                target: "tesserae_tokens::index",
                id = %previous.id,
                "duplicate variable id, keeping the later definition"
            );
        }
    }

    pub fn variable(&self, id: &str) -> Option<&Variable> {
        self.variables.get(id)
    }

    /// Looks up a collection by id. The returned collection has no embedded variables.
    pub fn collection(&self, id: &str) -> Option<&Collection> {
        self.collections.get(id)
    }

    pub fn collection_by_name(&self, name: &str) -> Option<&Collection> {
        self.collection(self.collection_id(name)?)
    }

    pub fn collection_id(&self, name: &str) -> Option<&str> {
        self.collection_ids.get(name).map(String::as_str)
    }

    pub fn mode_table(&self, collection_name: &str) -> Option<&ModeTable> {
        self.modes.get(collection_name)
    }

    /// Every variable, in dataset order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    /// Every collection, in dataset order.
    pub fn collections(&self) -> impl Iterator<Item = &Collection> {
        self.collections.values()
    }

    /// Number of distinct variable ids.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl From<Dataset> for VariableIndex {
    fn from(dataset: Dataset) -> Self {
        Self::from_collections(dataset.collections)
    }
}

impl FromIterator<Collection> for VariableIndex {
    fn from_iter<T: IntoIterator<Item = Collection>>(iter: T) -> Self {
        Self::from_collections(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::fixtures::{malformed_dataset, theme_dataset};

    #[test]
    fn test_build_indexes_every_variable_and_collection() {
        let dataset = theme_dataset();
        let index = VariableIndex::build(&dataset);

        assert_eq!(index.len(), dataset.variables().count());
        assert_eq!(index.collections().count(), 3);
        assert!(index.variable("v-surface").is_some());
        assert!(index.collection("c-theme").is_some());
    }

    #[test]
    fn test_collections_are_stored_without_variables() {
        let index = VariableIndex::from(theme_dataset());
        assert!(
            index.collections().all(|c| c.variables.is_empty()),
            "Variables should live only in the variable map"
        );
    }

    #[test]
    fn test_mode_tables_by_collection_name() {
        let index = VariableIndex::from(theme_dataset());

        let table = index.mode_table("Theme").unwrap();
        assert_eq!(table.get("Light").map(String::as_str), Some("m-light"));
        assert_eq!(table.get("Dark").map(String::as_str), Some("m-dark"));
        assert_eq!(index.collection_id("Density"), Some("c-density"));
        assert_eq!(
            index.collection_by_name("Primitives").map(|c| c.id.as_str()),
            Some("c-prim")
        );
        assert!(index.mode_table("Unknown").is_none());
    }

    #[test]
    fn test_variables_keep_dataset_order() {
        let dataset = theme_dataset();
        let index = VariableIndex::from(dataset.clone());

        let expected: Vec<&str> = dataset.variables().map(|v| v.id.as_str()).collect();
        let actual: Vec<&str> = index.variables().map(|v| v.id.as_str()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_duplicate_ids_keep_first_position_and_last_value() {
        let index = VariableIndex::from(malformed_dataset());

        let dup = index.variable("dup").unwrap();
        assert_eq!(dup.name, "second", "Later definition should win");
        assert_eq!(
            index.variables().next().map(|v| v.id.as_str()),
            Some("dup"),
            "Replaced entry should keep its original position"
        );
    }

    #[test]
    fn test_dangling_references_are_accepted() {
        let index = VariableIndex::from(malformed_dataset());

        let orphan = index.variable("orphan").unwrap();
        assert!(index.collection(&orphan.variable_collection_id).is_none());
    }

    #[test]
    fn test_collected_collections_match_dataset_build() {
        let dataset = theme_dataset();
        let built = VariableIndex::build(&dataset);
        let collected: VariableIndex = dataset.collections.into_iter().collect();

        let ids = |index: &VariableIndex| -> Vec<String> {
            index.variables().map(|v| v.id.clone()).collect()
        };
        assert_eq!(ids(&collected), ids(&built));
        assert_eq!(collected.collections().count(), built.collections().count());
        assert_eq!(collected.collection_id("Theme"), Some("c-theme"));
    }

    #[test]
    fn test_empty_dataset() {
        let index = VariableIndex::from(Dataset::default());
        assert!(index.is_empty());
        assert_eq!(index.collections().count(), 0);
    }
}
