//! The scanner's single failure channel.

use alloc::string::String;

use thiserror::Error;

/// How much surrounding text the diagnostic keeps on each side of the
/// offending offset. Large documents stay out of the message.
const SNIPPET_CONTEXT: usize = 24;

/// Raised when [`advance`] meets a character that is invalid for the
/// scanner's current mode, e.g. a second decimal point or a bare `e`.
///
/// The rendered message embeds the byte offset and a window of the source
/// text around it, so it can be surfaced to users as-is.
///
/// [`advance`]: crate::NumberScanner::advance
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedNumber {
    /// A character was found that no rule of the current mode accepts.
    #[error("malformed number: unexpected character {found:?} at offset {offset} in `{snippet}`")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// Byte offset of `found` within the scanned source.
        offset: usize,
        /// Window of the source text around `offset`.
        snippet: String,
    },
    /// The scanner was advanced to a position past the end of the source.
    #[error("malformed number: unexpected end of input at offset {offset} in `{snippet}`")]
    UnexpectedEndOfInput {
        /// Byte offset just past the scanned source.
        offset: usize,
        /// Window of the end of the source text.
        snippet: String,
    },
}

impl MalformedNumber {
    pub(crate) fn new(src: &str, offset: usize) -> Self {
        let snippet = snippet_around(src, offset);
        match src.get(offset..).and_then(|rest| rest.chars().next()) {
            Some(found) => Self::UnexpectedCharacter {
                found,
                offset,
                snippet,
            },
            None => Self::UnexpectedEndOfInput { offset, snippet },
        }
    }

    /// Byte offset of the offending position within the scanned source.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { offset, .. }
            | Self::UnexpectedEndOfInput { offset, .. } => *offset,
        }
    }
}

fn snippet_around(src: &str, offset: usize) -> String {
    let offset = offset.min(src.len());
    let mut start = offset.saturating_sub(SNIPPET_CONTEXT);
    while start > 0 && !src.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (offset + SNIPPET_CONTEXT).min(src.len());
    while end < src.len() && !src.is_char_boundary(end) {
        end += 1;
    }
    src[start..end].into()
}
