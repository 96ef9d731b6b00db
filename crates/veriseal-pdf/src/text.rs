use std::borrow::Cow;

/// Decode raw file bytes as lossy UTF-8.
///
/// PDF binary stream data is not valid UTF-8, but the dictionary syntax
/// around it is ASCII-compatible; replacing invalid sequences with U+FFFD
/// keeps every marker scannable without ever rejecting a file.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Decode at most `max_bytes` of input.
///
/// The scanning passes are linear in text length, so adversarially large
/// files get truncated here before any pattern work runs. `max_bytes == 0`
/// means unbounded.
pub fn decode_text_bounded(bytes: &[u8], max_bytes: usize) -> Cow<'_, str> {
    if max_bytes > 0 && bytes.len() > max_bytes {
        String::from_utf8_lossy(&bytes[..max_bytes])
    } else {
        String::from_utf8_lossy(bytes)
    }
}
