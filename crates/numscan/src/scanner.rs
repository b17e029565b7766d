//! The incremental numeric-literal state machine.
//!
//! One scanner handles one literal at a time: `reset` seeds it with the first
//! character, `advance` consumes one character per call until it reports the
//! terminator, and `value` rebuilds the number. State is reused across
//! literals rather than reallocated; the captured text only grows its buffer
//! when a literal is longer than any seen before.

use alloc::string::String;

use crate::{codes, error::MalformedNumber};

/// Ceilings for the arithmetic rebuild. Beyond fourteen fractional digits or
/// a decimal exponent outside the double-precision range, repeated
/// multiply/divide accumulation drifts, so `value` re-parses the captured
/// text instead.
const MAX_ARITHMETIC_DIVISOR: u64 = 10_000_000_000_000;
const MAX_ARITHMETIC_EXPONENT: u64 = 323;

/// Sub-state of the literal being scanned. Only ever moves forward within
/// one literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Integer,
    Fraction,
    ExponentSign,
    ExponentDigits,
}

/// Sign slot of an optional scientific-notation exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExpSign {
    None,
    Positive,
    Negative,
}

/// How `value` should rebuild the number from scanner state.
enum Rebuild {
    /// The accumulated parts are exact enough for closed-form arithmetic.
    Arithmetic,
    /// Accumulation would have lost precision; re-parse the captured text.
    Reparse,
}

/// Incremental scanner for one numeric literal at a time.
///
/// The surrounding tokenizer decides that a literal starts (a digit or `-` in
/// value position), hands that first character to [`reset`], then feeds every
/// following character through [`advance`] until it returns `Ok(true)` at a
/// terminator. [`value`] then yields the number. The same instance is reused
/// for the next literal with another `reset`; a scan that failed leaves the
/// scanner ready for that as well.
///
/// Not synchronized: each concurrently scanning tokenizer needs its own
/// instance.
///
/// [`reset`]: NumberScanner::reset
/// [`advance`]: NumberScanner::advance
/// [`value`]: NumberScanner::value
#[derive(Debug, Clone)]
pub struct NumberScanner {
    mode: Mode,
    negative: bool,
    whole: f64,
    fraction: f64,
    /// `10^k` for `k` fractional digits seen; saturating, but saturation only
    /// occurs far past `MAX_ARITHMETIC_DIVISOR`, where `raw` is authoritative.
    divisor: u64,
    exp_sign: ExpSign,
    exponent: u64,
    /// Verbatim capture of the literal, excluding the terminator. Backs the
    /// reparse path in `value`.
    raw: String,
}

impl NumberScanner {
    /// Creates a scanner with no literal in progress. Call [`reset`] before
    /// the first [`advance`].
    ///
    /// [`reset`]: NumberScanner::reset
    /// [`advance`]: NumberScanner::advance
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::Integer,
            negative: false,
            whole: 0.0,
            fraction: 0.0,
            divisor: 1,
            exp_sign: ExpSign::None,
            exponent: 0,
            raw: String::new(),
        }
    }

    /// Begins a new literal whose first character is `first`.
    ///
    /// The caller has already classified `first` as a digit or minus sign;
    /// this is not re-validated.
    pub fn reset(&mut self, first: char) {
        debug_assert!(
            first == codes::MINUS || codes::digit(first).is_some(),
            "literal must start with a digit or '-'"
        );

        self.mode = Mode::Integer;
        if first == codes::MINUS {
            self.negative = true;
            self.whole = 0.0;
        } else {
            self.negative = false;
            self.whole = codes::digit(first).map_or(0.0, f64::from);
        }
        self.fraction = 0.0;
        self.divisor = 1;
        self.exp_sign = ExpSign::None;
        self.exponent = 0;
        self.raw.clear();
        self.raw.push(first);
    }

    /// Feeds the character at byte offset `pos` of `src` into the literal.
    ///
    /// `Ok(false)` means the character belongs to the literal and the caller
    /// should advance again with the next position. `Ok(true)` means the
    /// character is a terminator: the literal ended just before it, the
    /// terminator was not consumed, and [`value`] is now stable.
    ///
    /// # Errors
    ///
    /// [`MalformedNumber`] when the character is invalid for the current
    /// mode, or when `pos` is past the end of `src`.
    ///
    /// [`value`]: NumberScanner::value
    pub fn advance(&mut self, src: &str, pos: usize) -> Result<bool, MalformedNumber> {
        let Some(c) = src.get(pos..).and_then(|rest| rest.chars().next()) else {
            return Err(MalformedNumber::new(src, pos));
        };

        match self.mode {
            Mode::Integer => {
                if let Some(d) = codes::digit(c) {
                    self.whole = self.whole * 10.0 + f64::from(d);
                } else if c == codes::DOT {
                    self.mode = Mode::Fraction;
                } else if matches!(c, codes::EXP_LOWER | codes::EXP_UPPER) {
                    self.mode = Mode::ExponentSign;
                } else if codes::is_end_of_value(c) {
                    return Ok(true);
                } else {
                    return Err(MalformedNumber::new(src, pos));
                }
            }
            Mode::Fraction => {
                if let Some(d) = codes::digit(c) {
                    self.fraction = self.fraction * 10.0 + f64::from(d);
                    self.divisor = self.divisor.saturating_mul(10);
                } else if matches!(c, codes::EXP_LOWER | codes::EXP_UPPER) {
                    self.mode = Mode::ExponentSign;
                } else if codes::is_end_of_value(c) {
                    return Ok(true);
                } else {
                    // Covers a second '.' and anything else foreign to the
                    // grammar.
                    return Err(MalformedNumber::new(src, pos));
                }
            }
            Mode::ExponentSign => {
                if c == codes::MINUS {
                    self.exp_sign = ExpSign::Negative;
                } else if c == codes::PLUS {
                    self.exp_sign = ExpSign::Positive;
                } else if let Some(d) = codes::digit(c) {
                    // A digit directly after `e` implies a positive exponent.
                    self.exp_sign = ExpSign::Positive;
                    self.exponent = u64::from(d);
                } else {
                    return Err(MalformedNumber::new(src, pos));
                }
                self.mode = Mode::ExponentDigits;
            }
            Mode::ExponentDigits => {
                if let Some(d) = codes::digit(c) {
                    self.exponent = self.exponent.saturating_mul(10).saturating_add(u64::from(d));
                } else if codes::is_end_of_value(c) {
                    return Ok(true);
                } else {
                    return Err(MalformedNumber::new(src, pos));
                }
            }
        }

        self.raw.push(c);
        Ok(false)
    }

    /// The numeric value of the literal completed by the last [`advance`].
    ///
    /// [`advance`]: NumberScanner::advance
    #[must_use]
    pub fn value(&self) -> f64 {
        match self.rebuild() {
            Rebuild::Arithmetic => {
                #[allow(clippy::cast_precision_loss)]
                let mut val = self.whole + self.fraction / self.divisor as f64;
                if self.negative {
                    val = -val;
                }
                // A single `10^e` is already infinite for e >= 309, while the
                // scaled result may still be representable (subnormals, or
                // values just under f64::MAX). Split the scale so neither
                // factor overflows on its own.
                let (head, tail) = (self.exponent / 2, self.exponent - self.exponent / 2);
                match self.exp_sign {
                    ExpSign::None => val,
                    ExpSign::Positive => val * pow10(head) * pow10(tail),
                    ExpSign::Negative => val / pow10(head) / pow10(tail),
                }
            }
            // Digitless literals such as `-e400` scan cleanly but do not
            // parse; the original tokenizer yielded NaN for them rather than
            // an error, so the fallback does too.
            Rebuild::Reparse => self.raw.parse().unwrap_or(f64::NAN),
        }
    }

    fn rebuild(&self) -> Rebuild {
        if self.divisor > MAX_ARITHMETIC_DIVISOR || self.exponent > MAX_ARITHMETIC_EXPONENT {
            Rebuild::Reparse
        } else {
            Rebuild::Arithmetic
        }
    }

    #[cfg(test)]
    pub(crate) fn captured(&self) -> &str {
        &self.raw
    }
}

impl Default for NumberScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// `10^n` by binary exponentiation (`core` has no `powi`). Exact through
/// `10^22`; past that the handful of ULPs of drift stays within what the
/// arithmetic path's exponent ceiling tolerates.
fn pow10(mut n: u64) -> f64 {
    let mut scale = 1.0_f64;
    let mut base = 10.0_f64;
    while n > 0 {
        if n & 1 == 1 {
            scale *= base;
        }
        base *= base;
        n >>= 1;
    }
    scale
}
