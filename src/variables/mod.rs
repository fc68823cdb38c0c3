//! Resolution of design variables across collections and modes.
//!
//! Build a [`VariableIndex`] once from a [`Dataset`], then resolve variables
//! by id or name under a [`ModeSelection`]. Collections the selection leaves
//! out resolve under their default mode, and aliases are followed across
//! collections until a literal is reached.

pub use tesserae_tokens_schema::{
    Collection, Dataset, DatasetError, Mode, RawValue, ResolvedType, Rgba, Variable, VariableAlias,
};

mod index;
pub use index::*;

mod modes;
pub use modes::*;

mod resolve;
pub use resolve::*;

mod query;
pub use query::*;

mod export;
pub use export::css_property_name;

mod error;
pub use error::*;

mod kinds;
pub use kinds::*;

#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;
