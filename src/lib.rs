//! Immutable, copy-on-write query parameters for
//! `application/x-www-form-urlencoded` bodies and URL query strings.
//!
//! ```
//! use qparams::QueryParams;
//!
//! let params = QueryParams::parse("?a=1&b=2&a=3");
//! let next = params.append("c", "x y").delete("b", None);
//!
//! assert_eq!(params.get_all("a").map(<[String]>::len), Some(2));
//! assert_eq!(next.to_string(), "a=1&a=3&c=x%20y");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod codec;
mod error;
mod options;
mod param_map;
mod parser;
mod query_params;
mod update;
mod value;

// Public API
pub use codec::{ParameterCodec, StrictCodec, UrlCodec};
pub use error::ParamsError;
pub use options::ParamsOptions;
pub use query_params::QueryParams;
pub use value::ParamValue;

pub type Result<T> = core::result::Result<T, ParamsError>;
