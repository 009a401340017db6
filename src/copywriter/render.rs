use std::fmt;

use crate::copywriter::profiles::{self, ToneProfile};

/// Titles are hard-cut to this many characters.
pub const TITLE_MAX_CHARS: usize = 60;

pub const FEATURES_HEADING: &str = "特徴";

/// Feature bullets shared by every tone and platform.
pub const FEATURES: [&str; 3] = [
    "こだわりの仕立てで日常使いに最適",
    "贈り物・ギフトにも喜ばれる定番",
    "シーンを選ばず使えるバランスの良さ",
];

/// Rendering choices for one piece of copy.
#[derive(Debug, Clone, Copy)]
pub struct CopyOptions<'a> {
    pub tone: &'a str,
    pub platform: &'a str,
    pub brand: Option<&'a str>,
    pub price: Option<&'a str>,
}

impl Default for CopyOptions<'_> {
    fn default() -> Self {
        Self {
            tone: profiles::DEFAULT_TONE,
            platform: profiles::DEFAULT_PLATFORM,
            brand: None,
            price: None,
        }
    }
}

/// A rendered marketing blurb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesCopy {
    pub title: String,
    pub tagline: String,
    pub body: String,
    pub features: [&'static str; 3],
    pub call_to_action: &'static str,
}

impl SalesCopy {
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SalesCopy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f, "**{}**", self.tagline)?;
        writeln!(f)?;
        writeln!(f, "{}", self.body)?;
        writeln!(f)?;
        writeln!(f, "## {FEATURES_HEADING}")?;
        for feature in &self.features {
            writeln!(f, "- {feature}")?;
        }
        writeln!(f)?;
        writeln!(f, "**{}**", self.call_to_action)
    }
}

/// Renders `description` into sales copy. Never fails: unknown tone or
/// platform ids use the defaults.
pub fn render(description: &str, options: &CopyOptions<'_>) -> SalesCopy {
    let tone = profiles::tone(options.tone);
    let platform = profiles::platform(options.platform);
    let title = title_of(description);

    SalesCopy {
        tagline: tagline(&title, tone),
        body: body(&title, tone, present(options.brand), present(options.price)),
        features: FEATURES,
        call_to_action: platform.cta,
        title,
    }
}

/// First line of the description, cut at [`TITLE_MAX_CHARS`] characters.
pub fn title_of(description: &str) -> String {
    description
        .split('\n')
        .next()
        .unwrap_or_default()
        .chars()
        .take(TITLE_MAX_CHARS)
        .collect()
}

fn tagline(title: &str, tone: &ToneProfile) -> String {
    format!("{title} — {}{}", tone.headline(), tone.emphasis)
}

fn body(title: &str, tone: &ToneProfile, brand: Option<&str>, price: Option<&str>) -> String {
    let mut body = format!("{title}は、{}仕上がりで、{}。", tone.quality(), tone.effect());
    if let Some(brand) = brand {
        body.push_str(&format!("{brand}ならではのこだわりが詰まっています。"));
    }
    if let Some(price) = price {
        body.push_str(&format!("価格は{price}です。"));
    }
    body
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
