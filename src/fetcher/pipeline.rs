use crate::fetcher::types::{Charset, PageResponse};
use bytes::Bytes;
use chrono::Utc;
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::{StatusCode, header::HeaderMap};
use std::sync::LazyLock;
use tracing::{debug, warn};
use url::Url;

/// How much of the body is scanned for `<meta>` declarations.
const META_SCAN_BYTES: usize = 4096;
/// How much of the body is fed to the statistical detector.
const DETECT_SCAN_BYTES: usize = 64 * 1024;

static CHARSET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid charset regex")
});

static META_CHARSET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#)
        .expect("valid meta charset regex")
});

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#)
        .expect("valid http-equiv regex")
});

pub fn process_response(
    url_final: Url,
    status: StatusCode,
    headers: HeaderMap,
    body_bytes: Bytes,
    content_type: &str,
) -> PageResponse {
    let charset = detect_charset(content_type, &body_bytes);
    let body_utf8 = decode_to_utf8(&body_bytes, &charset);

    PageResponse {
        url_final,
        status,
        headers,
        body_raw: body_bytes,
        body_utf8,
        charset,
        fetched_at: Utc::now(),
    }
}

/// Picks the document encoding.
///
/// A declared charset (header first, then `<meta>`) is trusted unless it is the
/// generic single-byte default, which servers and libraries emit when they know
/// nothing. In that case, or when nothing is declared, the bytes decide.
fn detect_charset(content_type: &str, body_bytes: &[u8]) -> Charset {
    let head = String::from_utf8_lossy(&body_bytes[..body_bytes.len().min(META_SCAN_BYTES)]);

    let declared = declared_encoding(&CHARSET_REGEX, content_type)
        .or_else(|| declared_encoding(&META_CHARSET_REGEX, &head))
        .or_else(|| declared_encoding(&META_HTTP_EQUIV_REGEX, &head));

    match declared {
        Some(encoding) if encoding != encoding_rs::WINDOWS_1252 => {
            debug!(charset = encoding.name(), "using declared charset");
            Charset::from_encoding(encoding)
        }
        _ => {
            let mut detector = chardetng::EncodingDetector::new();
            let sample = &body_bytes[..body_bytes.len().min(DETECT_SCAN_BYTES)];
            detector.feed(sample, sample.len() == body_bytes.len());
            let detected = detector.guess(None, true);
            debug!(charset = detected.name(), "inferred charset from content");
            Charset::from_encoding(detected)
        }
    }
}

fn declared_encoding(regex: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}

fn decode_to_utf8(body_bytes: &[u8], charset: &Charset) -> String {
    let encoding = charset.encoding();
    let (decoded, used, had_errors) = encoding.decode(body_bytes);

    if had_errors {
        warn!(
            charset = used.name(),
            "malformed byte sequences replaced while decoding page"
        );
    }

    decoded.into_owned()
}
