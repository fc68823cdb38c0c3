use thiserror::Error;

/// Why a single resolution request failed.
///
/// Failures are local to the request that produced them; the index is never
/// affected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("variable `{id}` not found")]
    VariableNotFound { id: String },
    #[error("no variable named `{name}`")]
    NameNotFound { name: String },
    #[error("collection `{collection_id}` of variable `{variable_id}` not found")]
    CollectionNotFound {
        variable_id: String,
        collection_id: String,
    },
    #[error("no value for variable `{variable_id}` in mode `{mode_id}` of collection `{collection}`")]
    MissingValue {
        variable_id: String,
        collection: String,
        mode_id: String,
    },
    #[error("alias cycle: {}", chain.join(" -> "))]
    CyclicAlias { chain: Vec<String> },
}

/// Coarse classification of a [`ResolveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveErrorKind {
    /// Unknown variable id or name, or a dangling collection reference.
    NotFound,
    /// The variable exists but holds no value for the resolved mode.
    MissingValue,
    /// An alias chain revisits a variable.
    CyclicAlias,
}

impl ResolveError {
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            Self::VariableNotFound { .. }
            | Self::NameNotFound { .. }
            | Self::CollectionNotFound { .. } => ResolveErrorKind::NotFound,
            Self::MissingValue { .. } => ResolveErrorKind::MissingValue,
            Self::CyclicAlias { .. } => ResolveErrorKind::CyclicAlias,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ResolveErrorKind::NotFound
    }
}
