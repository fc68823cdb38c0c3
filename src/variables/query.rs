use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;
use tesserae_tokens_schema::ResolvedType;
use tracing::debug;

use super::{ModeSelection, ResolveError, ResolvedValue, VariableIndex};

/// Metadata about a variable, without its values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableSummary<'a> {
    pub name: &'a str,
    pub id: &'a str,
    #[serde(rename = "type")]
    pub resolved_type: ResolvedType,
    /// `None` when the variable points at a collection that doesn't exist.
    pub collection_name: Option<&'a str>,
}

/// What a mode picker needs to know about a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary<'a> {
    pub modes: SmallVec<[&'a str; 2]>,
    /// `None` when the default mode id names none of the collection's modes.
    pub default_mode: Option<&'a str>,
    pub id: &'a str,
}

// Name and pattern lookups are linear scans. Token sets are small enough that
// a secondary name index hasn't been worth it.
impl VariableIndex {
    /// Resolves the first variable, in dataset order, named exactly `name`.
    pub fn get_by_name(
        &self,
        name: &str,
        requested: &ModeSelection,
    ) -> Result<ResolvedValue, ResolveError> {
        let Some(variable) = self.variables().find(|variable| variable.name == name) else {
            debug!(target: "tesserae_tokens::query", name, "no variable with this name");
            return Err(ResolveError::NameNotFound {
                name: name.to_owned(),
            });
        };

        self.resolve_variable(&variable.id, requested)
    }

    /// Lists every variable whose name contains `pattern` (case-sensitive).
    pub fn find_by_pattern(&self, pattern: &str) -> Vec<VariableSummary<'_>> {
        self.variables()
            .filter(|variable| variable.name.contains(pattern))
            .map(|variable| VariableSummary {
                name: &variable.name,
                id: &variable.id,
                resolved_type: variable.resolved_type,
                collection_name: self
                    .collection(&variable.variable_collection_id)
                    .map(|collection| collection.name.as_str()),
            })
            .collect()
    }

    /// Describes every collection by name: its mode names, default mode and id.
    pub fn list_collections(&self) -> IndexMap<&str, CollectionSummary<'_>> {
        self.modes
            .iter()
            .filter_map(|(collection_name, table)| {
                let collection = self.collection_by_name(collection_name)?;

                let summary = CollectionSummary {
                    modes: table.keys().map(String::as_str).collect(),
                    default_mode: collection.default_mode().map(|mode| mode.name.as_str()),
                    id: &collection.id,
                };

                Some((collection_name.as_str(), summary))
            })
            .collect()
    }
}
