use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a roster aggregate.
///
/// Ids are opaque strings: seed records carry short numeric codes
/// (`"1234"`), records created at runtime carry a UUID v4.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id for display and for keyed lists
    fn as_string(&self) -> String;

    /// Build an id from its textual form
    fn from_string(s: &str) -> Result<Self, String>;
}
