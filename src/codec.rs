use crate::character_sets::{COMPONENT_SET, FORM_COMPONENT_SET};
use crate::compat::{String, ToString};
use percent_encoding::{AsciiSet, percent_decode_str, utf8_percent_encode};

/// Escaping strategy used to parse and serialize parameter names and values.
///
/// A store keeps the codec it was constructed with for its whole lifetime,
/// and every store derived from it shares the same codec. Implementations
/// must invert their own encoding: `decode_value(&encode_value(s)) == s`.
pub trait ParameterCodec {
    /// Encode a parameter name for the wire.
    fn encode_key(&self, key: &str) -> String;

    /// Encode a parameter value for the wire.
    fn encode_value(&self, value: &str) -> String;

    /// Decode a parameter name read from the wire.
    fn decode_key(&self, key: &str) -> String;

    /// Decode a parameter value read from the wire.
    fn decode_value(&self, value: &str) -> String;
}

/// Default codec for `application/x-www-form-urlencoded` bodies.
///
/// Encodes like `encodeURIComponent` but leaves `@ : $ , ; = ? /` literal so
/// sub-delimiters stay legible for routers. Decoding accepts any escape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlCodec;

impl ParameterCodec for UrlCodec {
    fn encode_key(&self, key: &str) -> String {
        percent_encode(key, FORM_COMPONENT_SET)
    }

    fn encode_value(&self, value: &str) -> String {
        percent_encode(value, FORM_COMPONENT_SET)
    }

    fn decode_key(&self, key: &str) -> String {
        percent_decode(key)
    }

    fn decode_value(&self, value: &str) -> String {
        percent_decode(value)
    }
}

/// Codec that escapes every byte outside the unreserved set, delimiters
/// included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictCodec;

impl ParameterCodec for StrictCodec {
    fn encode_key(&self, key: &str) -> String {
        percent_encode(key, COMPONENT_SET)
    }

    fn encode_value(&self, value: &str) -> String {
        percent_encode(value, COMPONENT_SET)
    }

    fn decode_key(&self, key: &str) -> String {
        percent_decode(key)
    }

    fn decode_value(&self, value: &str) -> String {
        percent_decode(value)
    }
}

/// Percent-encode a string using the provided encode set
fn percent_encode(input: &str, encode_set: &'static AsciiSet) -> String {
    utf8_percent_encode(input, encode_set).to_string()
}

/// Decode percent-encoded string.
/// Malformed escapes pass through verbatim and invalid UTF-8 is replaced,
/// so decoding never fails. `+` is left as is.
fn percent_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}
