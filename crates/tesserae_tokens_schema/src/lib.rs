//! Serde model of a design-variable export.
//!
//! A [`Dataset`] is a list of [`Collection`]s, each owning its [`Mode`]s and
//! the [`Variable`]s whose values vary across those modes. Values are either
//! literals or aliases pointing at another variable by id.

mod schema;
pub use schema::*;

mod deserializers;

mod error;
pub use error::*;
