use crate::compat::{String, ToString, Vec};

/// A construction-time parameter value: one scalar or an ordered sequence.
///
/// Values are stringified when the `ParamValue` is built, so later
/// comparisons (for example in `delete`) are always string comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Scalar(String),
    Sequence(Vec<String>),
}

impl ParamValue {
    /// The stringified values in order (a scalar is a one-element list).
    pub fn into_values(self) -> Vec<String> {
        match self {
            Self::Scalar(value) => Vec::from([value]),
            Self::Sequence(values) => values,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Scalar(value.clone())
    }
}

macro_rules! scalar_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl<T: core::fmt::Display> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: core::fmt::Display> From<&[T]> for ParamValue {
    fn from(values: &[T]) -> Self {
        Self::Sequence(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: core::fmt::Display, const N: usize> From<[T; N]> for ParamValue {
    fn from(values: [T; N]) -> Self {
        Self::Sequence(values.iter().map(ToString::to_string).collect())
    }
}
