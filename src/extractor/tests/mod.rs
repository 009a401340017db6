use std::fs;
use std::sync::Arc;
use url::Url;

use crate::extractor::{
    ContentFallback, ExtractionError, ExtractionPolicy, Extractor, reject::MIN_DESCRIPTION_CHARS,
    text::char_len,
};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

fn url(raw: &str) -> Url {
    Url::parse(raw).unwrap()
}

/// Fallback that returns a fixed text, for exercising the fallback branch.
struct FixedFallback(Option<String>);

impl ContentFallback for FixedFallback {
    fn extract(&self, _html: &str, _url: &Url) -> Option<String> {
        self.0.clone()
    }
}

fn with_fixed_fallback(text: Option<&str>) -> Extractor {
    Extractor::new(ExtractionPolicy::FirstMatch)
        .with_fallback(Some(Arc::new(FixedFallback(text.map(str::to_string)))))
}

#[test]
fn test_extract_rakuten_item() {
    let html = fixture("rakuten_item.html");
    let extractor = Extractor::new(ExtractionPolicy::FirstMatch);

    let description = extractor
        .extract(&html, &url("https://item.rakuten.co.jp/organic-shop/towel-2set/"))
        .unwrap();

    assert!(description.starts_with("オーガニックコットン バスタオル 2枚セット\n"));
    assert!(description.contains("ふんわり柔らかなバスタオルです。\n吸水性に優れ"));
    assert!(description.contains("綿100%（オーガニックコットン）"));
    assert!(!description.contains("★★★★★"));
    assert!(!description.contains("旧バナー"));
    assert!(!description.contains("配送について"));
    assert!(!description.contains("ログイン"));
}

#[test]
fn test_rakuten_two_hundred_chars_without_review() {
    let body = "上".repeat(100) + &"質".repeat(100);
    let html = format!(
        r#"<html><body>
        <div id="itemDesc">
          <p>{}</p>
          <p>{}</p>
          <div class="review">このレビューは説明文に含まれてはいけません。星5つ！</div>
        </div>
        </body></html>"#,
        &body[..body.len() / 2],
        &body[body.len() / 2..]
    );
    let extractor = Extractor::new(ExtractionPolicy::FirstMatch);

    let description = extractor
        .extract(&html, &url("https://item.rakuten.co.jp/shop/item/"))
        .unwrap();

    assert_eq!(description, format!("{}\n{}", "上".repeat(100), "質".repeat(100)));
    assert_eq!(char_len(&description.replace('\n', "")), 200);
    assert!(!description.contains("レビュー"));
}

#[test]
fn test_generic_rules_for_unknown_host() {
    let html = fixture("generic_product.html");
    let extractor = Extractor::new(ExtractionPolicy::FirstMatch);

    let description = extractor
        .extract(&html, &url("https://goods.example.com/walnut-organizer"))
        .unwrap();

    assert_eq!(
        description,
        "A solid walnut organizer with three compartments for pens, cards and your phone.\n\
         Finished with natural oil and felt pads so it never scratches your desk."
    );
}

#[test]
fn test_longest_policy_prefers_bigger_block() {
    let html = fixture("generic_product.html");
    let extractor = Extractor::new(ExtractionPolicy::Longest);

    let description = extractor
        .extract(&html, &url("https://goods.example.com/walnut-organizer"))
        .unwrap();

    // <main> wraps the heading and the description; reviews were excluded
    assert!(description.starts_with("Walnut Desk Organizer\nA solid walnut organizer"));
    assert!(!description.contains("Great organizer"));
    assert!(!description.contains("Free shipping"));
}

#[test]
fn test_first_match_follows_selector_order_not_document_order() {
    let long_a = "Selector two text that is long enough to pass the threshold easily, padded out here.";
    let long_b = "Selector one text, also comfortably past eighty characters so it qualifies as well.";
    let html = format!(
        r#"<html><body>
        <div id="item_description">{long_a}</div>
        <div id="itemDesc">{long_b}</div>
        </body></html>"#
    );
    let extractor = Extractor::new(ExtractionPolicy::FirstMatch);

    let description = extractor
        .extract(&html, &url("https://item.rakuten.co.jp/shop/item/"))
        .unwrap();

    assert_eq!(description, long_b);
}

#[test]
fn test_short_candidates_are_skipped() {
    let long = "This second block is the real description and it is well over the eighty character limit.";
    let html = format!(
        r#"<html><body>
        <div class="item_desc">Too short.</div>
        <div class="item_desc">{long}</div>
        </body></html>"#
    );
    let extractor = Extractor::new(ExtractionPolicy::FirstMatch);

    let description = extractor
        .extract(&html, &url("https://item.rakuten.co.jp/shop/item/"))
        .unwrap();

    assert_eq!(description, long);
}

#[test]
fn test_candidate_at_threshold_is_rejected() {
    let exactly = "x".repeat(MIN_DESCRIPTION_CHARS);
    let html = format!(r#"<html><body><div id="itemDesc">{exactly}</div></body></html>"#);
    let extractor = Extractor::new(ExtractionPolicy::FirstMatch);

    let result = extractor.extract(&html, &url("https://item.rakuten.co.jp/shop/item/"));

    assert!(matches!(result, Err(ExtractionError::NoDescription)));
}

#[test]
fn test_unknown_host_without_matches_is_extraction_error() {
    let html = "<html><head><title>Nothing</title></head><body><div>tiny</div></body></html>";
    let extractor = Extractor::new(ExtractionPolicy::FirstMatch);

    let result = extractor.extract(html, &url("https://unknown.example.org/p/1"));

    assert!(matches!(result, Err(ExtractionError::NoDescription)));
}

#[test]
fn test_fallback_used_when_selectors_fail() {
    let text = format!("  Fallback\u{3000}content\r\n\r\n{}  ", "word ".repeat(20));
    let extractor = with_fixed_fallback(Some(&text));

    let description = extractor
        .extract("<html><body><p>nothing</p></body></html>", &url("https://x.example/"))
        .unwrap();

    assert!(description.starts_with("Fallback content\nword word"));
    assert!(!description.ends_with(' '));
}

#[test]
fn test_fallback_accepts_exactly_threshold_length() {
    let text = "y".repeat(MIN_DESCRIPTION_CHARS);
    let extractor = with_fixed_fallback(Some(&text));

    let description = extractor
        .extract("<html><body></body></html>", &url("https://x.example/"))
        .unwrap();

    assert_eq!(description, text);
}

#[test]
fn test_short_fallback_output_is_rejected() {
    let extractor = with_fixed_fallback(Some("short fallback"));

    let result = extractor.extract("<html><body></body></html>", &url("https://x.example/"));

    assert!(matches!(result, Err(ExtractionError::NoDescription)));
}

#[test]
fn test_fallback_not_consulted_when_selector_matches() {
    let long = "Selector content that is definitely longer than the eighty character minimum threshold.";
    let html = format!(r#"<html><body><div id="itemDesc">{long}</div></body></html>"#);
    let extractor = with_fixed_fallback(Some(&"fallback ".repeat(30)));

    let description = extractor
        .extract(&html, &url("https://item.rakuten.co.jp/shop/item/"))
        .unwrap();

    assert_eq!(description, long);
}

#[test]
fn test_excluded_region_is_not_a_candidate() {
    // the only long block sits inside an excluded region
    let long = "Shipping policy text that is long enough to qualify if it were not stripped beforehand.";
    let html = format!(
        r#"<html><body><div id="shipping"><div id="itemDesc">{long}</div></div></body></html>"#
    );
    let extractor = Extractor::new(ExtractionPolicy::FirstMatch);

    let result = extractor.extract(&html, &url("https://item.rakuten.co.jp/shop/item/"));

    assert!(matches!(result, Err(ExtractionError::NoDescription)));
}

#[test]
fn test_malformed_html() {
    let html = format!(
        "<html><head><title>Broken</title><body><div id=\"itemDesc\"><p>Unclosed tags {}<div>More content",
        "and more words ".repeat(6)
    );
    let extractor = Extractor::new(ExtractionPolicy::FirstMatch);

    let description = extractor
        .extract(&html, &url("https://item.rakuten.co.jp/shop/item/"))
        .unwrap();

    assert!(description.starts_with("Unclosed tags and more words"));
    assert!(description.ends_with("More content"));
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(
            html in ".*",
            host in "[a-z]{1,12}\\.(com|co\\.jp)",
        ) {
            let extractor = Extractor::new(ExtractionPolicy::Longest);
            let _ = extractor.extract(&html, &url(&format!("https://{host}/item")));
        }

        #[test]
        fn test_extract_never_returns_short_text(
            body in "[a-zA-Z \\n\u{3000}]{0,200}",
        ) {
            let html = format!(r#"<html><body><div id="itemDesc">{body}</div></body></html>"#);
            let extractor = Extractor::new(ExtractionPolicy::FirstMatch);
            if let Ok(description) =
                extractor.extract(&html, &url("https://item.rakuten.co.jp/shop/item/"))
            {
                prop_assert!(char_len(&description) > MIN_DESCRIPTION_CHARS);
            }
        }

        #[test]
        fn test_normalize_is_idempotent(text in "(?s).{0,300}") {
            let once = crate::extractor::text::normalize_whitespace(&text);
            prop_assert_eq!(crate::extractor::text::normalize_whitespace(&once), once);
        }
    }
}
