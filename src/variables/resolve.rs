use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;
use tesserae_tokens_schema::{RawValue, ResolvedType};
use tracing::{trace, warn};

use super::{ModeSelection, ResolveError, ResolvedModes, VariableIndex};
use crate::utils::rgba_to_css;

/// The terminal value of a variable, with colors formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    /// A CSS color string, `rgb(..)` or `rgba(..)`.
    Color(String),
    Number(f64),
    String(String),
    Boolean(bool),
}

impl ResolvedValue {
    /// The declared type this value's shape corresponds to.
    pub fn resolved_type(&self) -> ResolvedType {
        match self {
            Self::Color(_) => ResolvedType::Color,
            Self::Number(_) => ResolvedType::Number,
            Self::String(_) => ResolvedType::String,
            Self::Boolean(_) => ResolvedType::Boolean,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Color(string) | Self::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(string) | Self::String(string) => f.write_str(string),
            Self::Number(number) => write!(f, "{number}"),
            Self::Boolean(boolean) => write!(f, "{boolean}"),
        }
    }
}

impl VariableIndex {
    /// Resolves a variable to its terminal value under `requested`.
    ///
    /// Aliases are followed with the same mode request at every hop, so the
    /// caller's selection governs the whole chain. Any failing hop fails the
    /// whole request.
    pub fn resolve_variable(
        &self,
        variable_id: &str,
        requested: &ModeSelection,
    ) -> Result<ResolvedValue, ResolveError> {
        let modes = self.resolve_modes(requested);
        self.resolve_with_modes(variable_id, &modes)
    }

    /// Like [`resolve_variable`](Self::resolve_variable), with the mode
    /// assignment already computed. Useful when resolving many variables
    /// under one request.
    pub fn resolve_with_modes<'a>(
        &'a self,
        variable_id: &'a str,
        modes: &ResolvedModes<'a>,
    ) -> Result<ResolvedValue, ResolveError> {
        let mut visited: IndexSet<&str> = IndexSet::new();
        let mut current = variable_id;

        loop {
            if !visited.insert(current) {
                let chain = visited
                    .iter()
                    .chain([&current])
                    .map(|id| id.to_string())
                    .collect();
                return Err(ResolveError::CyclicAlias { chain });
            }

            let variable = self
                .variable(current)
                .ok_or_else(|| ResolveError::VariableNotFound {
                    id: current.to_owned(),
                })?;

            let collection = self
                .collection(&variable.variable_collection_id)
                .ok_or_else(|| ResolveError::CollectionNotFound {
                    variable_id: variable.id.clone(),
                    collection_id: variable.variable_collection_id.clone(),
                })?;

            let mode_id = modes
                .get(&collection.name)
                .unwrap_or(collection.default_mode_id.as_str());

            let value = variable
                .value(mode_id)
                .ok_or_else(|| ResolveError::MissingValue {
                    variable_id: variable.id.clone(),
                    collection: collection.name.clone(),
                    mode_id: mode_id.to_owned(),
                })?;

            let resolved = match value {
                RawValue::Alias(alias) => {
                    trace!(
                        target: "tesserae_tokens::resolve",
                        from = %variable.id,
                        to = %alias.id,
                        mode_id,
                        "following alias"
                    );
                    current = alias.id.as_str();
                    continue;
                }
                RawValue::Color(color) => ResolvedValue::Color(rgba_to_css(color)),
                RawValue::Number(number) => ResolvedValue::Number(*number),
                RawValue::String(string) => ResolvedValue::String(string.clone()),
                RawValue::Boolean(boolean) => ResolvedValue::Boolean(*boolean),
            };

            // The literal's shape decides the result; a disagreeing declaration is only reported.
            if resolved.resolved_type() != variable.resolved_type {
                warn!(
                    target: "tesserae_tokens::resolve",
                    variable_id = %variable.id,
                    declared = %variable.resolved_type,
                    found = %resolved.resolved_type(),
                    "literal does not match the declared type"
                );
            }

            return Ok(resolved);
        }
    }
}
