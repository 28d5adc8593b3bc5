use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Component percent-encode set, matching `encodeURIComponent`.
/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )` is escaped.
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Form component set: `COMPONENT_SET` minus the delimiters `@ : $ , ; = ? /`,
/// which are safe to leave literal inside a form body.
/// Encoding with this set is the same as encoding with `COMPONENT_SET`
/// and then unescaping `%40 %3A %24 %2C %3B %3D %3F %2F`.
pub const FORM_COMPONENT_SET: &AsciiSet = &COMPONENT_SET
    .remove(b'@')
    .remove(b':')
    .remove(b'$')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b'?')
    .remove(b'/');
