#![no_main]

use libfuzzer_sys::fuzz_target;
use url::Url;

use sell_copy::copywriter::{CopyOptions, render};
use sell_copy::extractor::{ExtractionPolicy, Extractor};

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);

    for raw in [
        "https://item.rakuten.co.jp/shop/item/",
        "https://unknown.example.com/p/1",
    ] {
        let url = Url::parse(raw).unwrap();
        for policy in [ExtractionPolicy::FirstMatch, ExtractionPolicy::Longest] {
            // Neither extraction nor rendering may panic on arbitrary markup
            if let Ok(description) = Extractor::new(policy).extract(&html, &url) {
                assert!(description.chars().count() > 80);
                let _ = render(&description, &CopyOptions::default());
            }
        }
    }
});
