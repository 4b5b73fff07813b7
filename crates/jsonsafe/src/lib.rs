#![doc = include_str!("../README.md")]

pub mod error;
pub mod normalize;
pub mod number;
pub mod options;
pub mod value;

#[cfg(feature = "serde")]
pub mod ser;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "json")]
pub mod tagged;

pub use crate::error::{Error, Result};
pub use crate::normalize::normalize;
pub use crate::options::Options;
pub use crate::value::{Number, Value};

#[cfg(feature = "json")]
pub use crate::json::{to_json, to_string, to_string_pretty, to_writer};
#[cfg(feature = "json")]
pub use crate::tagged::{from_tagged_reader, from_tagged_str, from_tagged_value};
