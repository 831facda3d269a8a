//! Decodes board pages, which are not always served as UTF-8.
//!
//! Precedence: `Content-Type` charset, then a `<meta>` declaration in the
//! first bytes of the document, then statistical detection.

use std::sync::LazyLock;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use regex::bytes::Regex;

/// How far into the document a `<meta>` charset declaration is looked for.
const META_SCAN_BYTES: usize = 4096;

static HEADER_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([A-Za-z0-9_:.\-]+)"#)
        .unwrap_or_else(|err| panic!("header charset: {err}"))
});
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?([A-Za-z0-9_:.\-]+)"#)
        .unwrap_or_else(|err| panic!("meta charset: {err}"))
});

/// Decodes an HTML body, replacing undecodable sequences.
pub fn decode_html(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(|value| label_encoding(&HEADER_CHARSET, value.as_bytes()))
        .or_else(|| {
            let head = &body[..body.len().min(META_SCAN_BYTES)];
            label_encoding(&META_CHARSET, head)
        })
        .unwrap_or_else(|| detect(body));

    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        tracing::debug!(encoding = used.name(), "body had undecodable bytes");
    }
    text.into_owned()
}

fn label_encoding(pattern: &Regex, haystack: &[u8]) -> Option<&'static Encoding> {
    let label = pattern.captures(haystack)?.get(1)?.as_bytes();
    let encoding = Encoding::for_label(label);
    if encoding.is_none() {
        tracing::debug!(label = %String::from_utf8_lossy(label), "unknown charset label");
    }
    encoding
}

fn detect(body: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    tracing::debug!(encoding = encoding.name(), "detected charset");
    encoding
}
