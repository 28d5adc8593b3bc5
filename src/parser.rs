use crate::codec::ParameterCodec;
use crate::compat::String;
use crate::param_map::ParamMap;

/// Parse a raw query string (with or without leading `?`) into a map.
///
/// Empty segments are skipped. A segment without `=` is a key with an empty
/// value; otherwise the key ends at the first `=` and the rest, further `=`
/// included, is the value. Repeated keys accumulate in encounter order.
pub fn parse_query<C: ParameterCodec + ?Sized>(raw: &str, codec: &C) -> ParamMap {
    let query = raw.strip_prefix('?').unwrap_or(raw);
    let mut map = ParamMap::new();

    for segment in query.split('&').filter(|segment| !segment.is_empty()) {
        let (key, value) = match memchr::memchr(b'=', segment.as_bytes()) {
            Some(eq) => (
                codec.decode_key(&segment[..eq]),
                codec.decode_value(&segment[eq + 1..]),
            ),
            None => (codec.decode_key(segment), String::new()),
        };
        map.append(&key, value);
    }

    map
}
