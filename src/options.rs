use crate::codec::{ParameterCodec, UrlCodec};
use crate::compat::{String, Vec};
use crate::value::ParamValue;

/// Construction options for a [`QueryParams`](crate::QueryParams) store.
///
/// At most one of [`query`](Self::query) and [`object`](Self::object) may
/// be set; supplying both makes [`QueryParams::with_options`](crate::QueryParams::with_options) fail.
/// Neither produces an empty store.
#[derive(Debug, Clone)]
pub struct ParamsOptions<C = UrlCodec> {
    pub(crate) query: Option<String>,
    pub(crate) object: Option<Vec<(String, ParamValue)>>,
    pub(crate) codec: C,
}

impl ParamsOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ParamsOptions {
    fn default() -> Self {
        Self {
            query: None,
            object: None,
            codec: UrlCodec,
        }
    }
}

impl<C: ParameterCodec> ParamsOptions<C> {
    /// Source the store from a raw query string.
    #[must_use]
    pub fn query(mut self, raw: impl Into<String>) -> Self {
        self.query = Some(raw.into());
        self
    }

    /// Source the store from `(name, value)` entries.
    #[must_use]
    pub fn object<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.object = Some(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Replace the codec used for parsing and serialization.
    pub fn codec<D: ParameterCodec>(self, codec: D) -> ParamsOptions<D> {
        ParamsOptions {
            query: self.query,
            object: self.object,
            codec,
        }
    }
}
