//! An incremental, character-at-a-time numeric-literal scanner.
//!
//! `numscan` is the number-lexing core of a streaming tokenizer: the caller
//! feeds one character per call and never buffers or re-slices the literal
//! itself. The scanner accumulates sign, integer part, fraction, and exponent
//! as it goes, reports exactly where the literal ends, and rebuilds the value
//! either by closed-form arithmetic or, when accumulation would lose
//! precision, by re-parsing the verbatim captured text.
//!
//! # Example
//!
//! ```
//! use numscan::NumberScanner;
//!
//! let src = "-12.5e+3,";
//! let mut scanner = NumberScanner::new();
//! scanner.reset('-');
//!
//! let mut pos = 1;
//! while !scanner.advance(src, pos)? {
//!     pos += 1;
//! }
//!
//! assert_eq!(scanner.value(), -12500.0);
//! # Ok::<(), numscan::MalformedNumber>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod codes;
mod error;
mod scanner;

#[cfg(test)]
mod tests;

pub use error::MalformedNumber;
pub use scanner::NumberScanner;
