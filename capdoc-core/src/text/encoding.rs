/// Escapes a string for use inside a PDF literal string `( ... )`.
///
/// Backslashes are escaped before parentheses so that the backslashes
/// introduced for parentheses are not doubled.
pub fn escape_pdf_string(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Encodes text as Latin-1 (ISO 8859-1) bytes for a content stream.
///
/// Characters above U+00FF have no single-byte form and become `?`.
pub fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| u8::try_from(u32::from(ch)).unwrap_or(b'?'))
        .collect()
}
