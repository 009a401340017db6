use scraper::Selector;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::warn;
use url::Url;

/// Key of the rule set used for hosts without a dedicated entry.
pub const GENERIC_HOST: &str = "generic";

/// Where to look for the product description on one site, and what to cut
/// away before looking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRuleSet {
    pub host: &'static str,
    pub include: &'static [&'static str],
    pub exclude: &'static [&'static str],
}

static SITE_RULES: [DomainRuleSet; 3] = [
    DomainRuleSet {
        host: "item.rakuten.co.jp",
        include: &[
            "#itemDesc",
            "#item_description",
            "#productDetail",
            "#rakutenLimitedId_itemDescription",
            "div.item_desc",
            "div#description",
            "div.product-detail",
            "div#itemDetail",
        ],
        exclude: &[
            "#review-area",
            ".review",
            "#shop-info",
            "#shipping",
            "#payment",
            "#privacy",
            "#attention",
            ".product-review",
            "#voice",
        ],
    },
    DomainRuleSet {
        host: "www.amazon.co.jp",
        include: &[
            "#productDescription",
            "#bookDescription_feature_div",
            "#feature-bullets",
            "#aplus",
        ],
        exclude: &[
            "#customerReviews",
            "#reviewsMedley",
            "#cm-cr-dp-review-list",
            "#shippingMessageInsideBuyBox_feature_div",
            "#returnPolicyFeature_feature_div",
            "#sims-consolidated-1_feature_div",
        ],
    },
    DomainRuleSet {
        host: "store.shopping.yahoo.co.jp",
        include: &[
            "#itm_cat",
            ".mdItemDescription",
            "#itemInfo",
            ".ItemDescription",
        ],
        exclude: &[
            "#review",
            ".mdReview",
            ".mdShipping",
            "#shpInfo",
            ".mdStoreInfo",
        ],
    },
];

static GENERIC_RULES: DomainRuleSet = DomainRuleSet {
    host: GENERIC_HOST,
    include: &[
        "[itemprop='description']",
        "#productDescription",
        "#product-description",
        ".product-description",
        "#description",
        ".description",
        "article",
        "main",
    ],
    exclude: &[
        "header",
        "footer",
        "nav",
        "aside",
        "#reviews",
        ".reviews",
        ".review",
        ".shipping",
        ".policy",
    ],
};

static RULES: LazyLock<HashMap<&'static str, &'static DomainRuleSet>> = LazyLock::new(|| {
    SITE_RULES
        .iter()
        .chain(std::iter::once(&GENERIC_RULES))
        .map(|rules| (rules.host, rules))
        .collect()
});

/// `host[:port]` as it appears in the URL; default ports are not spelled out.
pub fn authority(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Rule set for the URL's authority, or the generic set.
///
/// Matching is exact: `rakuten.co.jp` or `sub.item.rakuten.co.jp` do not
/// pick up the `item.rakuten.co.jp` rules.
pub fn resolve(url: &Url) -> &'static DomainRuleSet {
    authority(url)
        .map(|authority| for_host(&authority))
        .unwrap_or_else(generic)
}

pub fn for_host(authority: &str) -> &'static DomainRuleSet {
    RULES.get(authority).copied().unwrap_or(&GENERIC_RULES)
}

pub fn generic() -> &'static DomainRuleSet {
    &GENERIC_RULES
}

pub(crate) fn parse_selector(raw: &str) -> Option<Selector> {
    match Selector::parse(raw) {
        Ok(selector) => Some(selector),
        Err(err) => {
            warn!(selector = raw, error = %err, "skipping unparsable selector");
            None
        }
    }
}
