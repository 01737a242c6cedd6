use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

/// Decode raw bytes using statistical encoding detection.
///
/// The sniffed encoding is accepted only above `confidence_threshold`;
/// anything weaker falls back to UTF-8. Decoding is lossy: undecodable
/// bytes become replacement characters rather than errors.
pub fn decode(raw: &[u8], confidence_threshold: f32) -> (String, &'static Encoding) {
    let encoding = detect(raw, confidence_threshold);
    let (content, had_errors) = encoding.decode_without_bom_handling(raw);
    let content = content.into_owned();
    if had_errors {
        debug!(encoding = encoding.name(), "lossy decode substituted bytes");
    }
    (content, encoding)
}

fn detect(raw: &[u8], confidence_threshold: f32) -> &'static Encoding {
    let (charset, confidence, _) = chardet::detect(raw);
    if confidence > confidence_threshold {
        let label = chardet::charset2encoding(&charset);
        Encoding::for_label(label.as_bytes()).unwrap_or(UTF_8)
    } else {
        UTF_8
    }
}

/// Byte length of `text` when re-encoded in `encoding`.
#[must_use]
pub fn encoded_len(text: &str, encoding: &'static Encoding) -> usize {
    if encoding == UTF_8 {
        text.len()
    } else {
        encoding.encode(text).0.len()
    }
}

/// Extract the window of `content` whose characters *start* within
/// `[offset, offset + length)`, positions measured in encoded bytes.
///
/// Because membership is decided by each character's starting position,
/// consecutive non-overlapping windows tile the document exactly and no
/// multi-byte character is ever split.
#[must_use]
pub fn byte_window(
    content: &str,
    encoding: &'static Encoding,
    offset: usize,
    length: usize,
) -> String {
    let end = offset.saturating_add(length);
    let mut pos = 0usize;
    let mut out = String::new();

    for ch in content.chars() {
        if pos >= end {
            break;
        }
        if pos >= offset {
            out.push(ch);
        }
        pos += char_width(ch, encoding);
    }

    out
}

fn char_width(ch: char, encoding: &'static Encoding) -> usize {
    if encoding == UTF_8 {
        ch.len_utf8()
    } else {
        let mut buf = [0u8; 4];
        encoding.encode(ch.encode_utf8(&mut buf)).0.len()
    }
}

#[cfg(test)]
#[path = "encoding_tests.rs"]
mod tests;
