/// Decodes one raw input line into text.
///
/// Bytes that are not valid UTF-8 become U+FFFD, so a damaged line still
/// reaches the evaluator and fails there as an ordinary operand or command
/// error. A trailing `\n` or `\r\n` is removed.
///
/// # Example
/// ```
/// use chaincalc::frontend::input::decode_line;
///
/// assert_eq!(decode_line(b"add 1 2\r\n"), "add 1 2");
/// assert_eq!(decode_line(b"add \xff 2"), "add \u{FFFD} 2");
/// ```
#[must_use]
pub fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim_end_matches(['\n', '\r'])
                                  .to_string()
}
