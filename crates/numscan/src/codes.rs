//! Character classification shared with the outer tokenizer.
//!
//! The scanner compares input against these named characters instead of bare
//! literals so that the terminator set lives in one place.

/// Leading sign of a negative literal, or a negative exponent sign.
pub const MINUS: char = '-';
/// Explicit positive exponent sign.
pub const PLUS: char = '+';
/// Decimal point.
pub const DOT: char = '.';
/// Lowercase exponent marker.
pub const EXP_LOWER: char = 'e';
/// Uppercase exponent marker.
pub const EXP_UPPER: char = 'E';
/// Element separator; terminates a value.
pub const COMMA: char = ',';
/// Closing object brace; terminates a value.
pub const RIGHT_BRACE: char = '}';
/// Closing array bracket; terminates a value.
pub const RIGHT_BRACKET: char = ']';
/// Plain space; terminates a value.
pub const SPACE: char = ' ';
/// Carriage return; terminates a value.
pub const CR: char = '\r';
/// Line feed; terminates a value.
pub const LF: char = '\n';

/// Decimal value of `c`, or `None` when `c` is not an ASCII digit.
#[must_use]
pub fn digit(c: char) -> Option<u32> {
    c.to_digit(10)
}

/// Whether `c` ends a numeric value without being part of it.
#[must_use]
pub fn is_end_of_value(c: char) -> bool {
    matches!(c, COMMA | RIGHT_BRACE | RIGHT_BRACKET | SPACE | CR | LF)
}
