/// Compatibility layer for `std`/`no_std`
#[cfg(feature = "std")]
pub use std::{
    rc::Rc,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(not(feature = "std"))]
pub use alloc::{
    rc::Rc,
    string::{String, ToString},
    vec::Vec,
};
