#[macro_use]
mod macros;

mod error;
pub use error::Error;

pub mod collection;
pub use collection::{Indexes, InvalidRecordPolicy};

pub mod index_field;
pub use index_field::{IndexField, IndexType};

pub mod index_model;
pub use index_model::{
    Cardinality, IndexKind, IndexModel, IndexProperty, ModelOptions, NormalizedIndex,
};

pub mod stats;

mod truthy;

pub mod warning;
pub use warning::{Warning, WarningCode};

/// A raw index descriptor, as returned by the index-listing command.
///
/// Attribute order is preserved (`serde_json` is built with `preserve_order`),
/// which keeps the field order of `key` intact.
pub type RawIndex = serde_json::Map<String, serde_json::Value>;

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
