use crate::compat::String;
use crate::param_map::ParamMap;

/// Kind of a recorded mutation, carrying its stringified value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Append(String),
    Set(String),
    /// Remove one occurrence of the value, or the whole key when `None`
    Delete(Option<String>),
}

/// One mutation recorded against a store but not yet applied.
/// The value is stringified when the update is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub param: String,
    pub op: Op,
}

impl Update {
    pub fn append(param: String, value: String) -> Self {
        Self {
            param,
            op: Op::Append(value),
        }
    }

    pub fn set(param: String, value: String) -> Self {
        Self {
            param,
            op: Op::Set(value),
        }
    }

    pub fn delete(param: String, value: Option<String>) -> Self {
        Self {
            param,
            op: Op::Delete(value),
        }
    }

    /// Apply this update to a map being materialized.
    ///
    /// `Set` appends exactly like `Append`; it does not clear values already
    /// present for the parameter.
    pub fn apply(self, map: &mut ParamMap) {
        match self.op {
            Op::Append(value) | Op::Set(value) => map.append(&self.param, value),
            Op::Delete(Some(value)) => map.remove_value(&self.param, &value),
            Op::Delete(None) => map.remove(&self.param),
        }
    }
}
