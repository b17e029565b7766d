use crate::{MalformedNumber, NumberScanner};

mod scan_good;

/// Drives a fresh scanner over `src`, which must hold exactly one literal
/// followed by its terminator.
fn scan(src: &str) -> Result<f64, MalformedNumber> {
    let mut scanner = NumberScanner::new();
    scan_with(&mut scanner, src)
}

/// Like [`scan`], but reuses the caller's scanner instance.
fn scan_with(scanner: &mut NumberScanner, src: &str) -> Result<f64, MalformedNumber> {
    let mut chars = src.char_indices();
    let (_, first) = chars.next().expect("empty literal");
    scanner.reset(first);
    for (pos, _) in chars {
        if scanner.advance(src, pos)? {
            return Ok(scanner.value());
        }
    }
    panic!("literal in {src:?} never terminated");
}
