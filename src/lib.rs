#[macro_use]
mod macros;

mod engine;

mod error;
pub use error::Error;

pub mod json;
pub use json::nest_json;

pub mod mapping;
pub use mapping::Mapping;

mod nest;
pub use nest::{nest, MappingArg};

pub mod record;
pub use record::{AttrObject, Container, PropertyMap, Record, ResultShape};

mod row;
pub use row::{Row, Table};

pub mod value;
pub use value::Value;

/// A Result type alias that uses rownest's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
