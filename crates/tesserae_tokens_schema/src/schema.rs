use std::{fmt, fs, io::Read, path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};
use smallvec::SmallVec;

use super::deserializers::{de_modes, de_values_by_mode};
use crate::DatasetError;

/// Tag used by design-tool exports to mark a value as a reference.
pub const VARIABLE_ALIAS: &str = "VARIABLE_ALIAS";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Dataset {
    pub collections: Vec<Collection>,
}

impl Dataset {
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Dataset, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Dataset, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
        let path = path.as_ref();

        let bytes = fs::read(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_slice(&bytes).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Iterates every variable in document order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.collections
            .iter()
            .flat_map(|collection| collection.variables.iter())
    }
}

impl FromStr for Dataset {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

/// A named group of variables sharing one set of modes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub default_mode_id: String,
    #[serde(deserialize_with = "de_modes")]
    pub modes: SmallVec<[Mode; 2]>,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl Collection {
    pub fn mode(&self, mode_id: &str) -> Option<&Mode> {
        self.modes.iter().find(|mode| mode.mode_id == mode_id)
    }

    pub fn mode_by_name(&self, name: &str) -> Option<&Mode> {
        self.modes.iter().find(|mode| mode.name == name)
    }

    /// The mode referenced by `default_mode_id`, if it is one of this collection's modes.
    pub fn default_mode(&self) -> Option<&Mode> {
        self.mode(&self.default_mode_id)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub mode_id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    pub name: String,
    pub variable_collection_id: String,
    pub resolved_type: ResolvedType,
    /// Entries whose value has no recognizable shape are dropped, so only that
    /// mode of this variable is affected.
    #[serde(default, deserialize_with = "de_values_by_mode")]
    pub values_by_mode: IndexMap<String, RawValue>,
}

impl Variable {
    pub fn value(&self, mode_id: &str) -> Option<&RawValue> {
        self.values_by_mode.get(mode_id)
    }
}

/// The type every value of a variable resolves to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResolvedType {
    #[serde(alias = "Color")]
    Color,
    #[serde(rename = "FLOAT", alias = "NUMBER", alias = "Number")]
    Number,
    #[serde(alias = "String")]
    String,
    #[serde(alias = "Boolean")]
    Boolean,
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Color => "Color",
            Self::Number => "Number",
            Self::String => "String",
            Self::Boolean => "Boolean",
        })
    }
}

/// A value as stored for one mode: a literal or a reference to another variable.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawValue {
    Alias(VariableAlias),
    Color(Rgba),
    Boolean(bool),
    Number(f64),
    String(String),
}

impl RawValue {
    pub fn as_alias(&self) -> Option<&VariableAlias> {
        match self {
            Self::Alias(alias) => Some(alias),
            _ => None,
        }
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, Self::Alias(_))
    }
}

impl From<Rgba> for RawValue {
    fn from(color: Rgba) -> Self {
        Self::Color(color)
    }
}

impl From<VariableAlias> for RawValue {
    fn from(alias: VariableAlias) -> Self {
        Self::Alias(alias)
    }
}

/// Reference to another variable by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableAlias {
    pub id: String,
}

impl VariableAlias {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Serialize for VariableAlias {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("VariableAlias", 2)?;
        state.serialize_field("type", VARIABLE_ALIAS)?;
        state.serialize_field("id", &self.id)?;
        state.end()
    }
}

/// A color with channels normalized to `0.0..=1.0`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.
}
