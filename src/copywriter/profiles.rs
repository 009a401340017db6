/// Tone used when the requested one is unknown.
pub const DEFAULT_TONE: &str = "standard";
/// Platform used when the requested one is unknown.
pub const DEFAULT_PLATFORM: &str = "base";

/// Phrasing for one register of copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneProfile {
    pub id: &'static str,
    /// Headline, body-quality and body-effect adjectives, in that order.
    pub adjectives: [&'static str; 3],
    pub emphasis: &'static str,
}

impl ToneProfile {
    pub fn headline(&self) -> &'static str {
        self.adjectives[0]
    }

    pub fn quality(&self) -> &'static str {
        self.adjectives[1]
    }

    pub fn effect(&self) -> &'static str {
        self.adjectives[2]
    }
}

/// Call-to-action for one selling surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    pub id: &'static str,
    pub cta: &'static str,
}

static TONES: [ToneProfile; 4] = [
    ToneProfile {
        id: DEFAULT_TONE,
        adjectives: ["使いやすい", "丁寧な", "毎日の暮らしに寄り添います"],
        emphasis: "定番アイテム。",
    },
    ToneProfile {
        id: "premium",
        adjectives: ["上質で洗練された", "上質で洗練された", "日常を特別に彩ります"],
        emphasis: "一品。",
    },
    ToneProfile {
        id: "casual",
        adjectives: ["気軽に使える", "ほどよくこだわった", "毎日をちょっと楽しくします"],
        emphasis: "アイテム！",
    },
    ToneProfile {
        id: "gift",
        adjectives: [
            "贈って喜ばれる",
            "心のこもった",
            "大切な人との時間をあたたかく演出します",
        ],
        emphasis: "ギフトに最適な一品。",
    },
];

static PLATFORMS: [PlatformProfile; 5] = [
    PlatformProfile {
        id: DEFAULT_PLATFORM,
        cta: "今すぐカートに入れる",
    },
    PlatformProfile {
        id: "shopify",
        cta: "Add to Cart",
    },
    PlatformProfile {
        id: "rakuten",
        cta: "楽天市場で今すぐ購入する",
    },
    PlatformProfile {
        id: "amazon",
        cta: "Amazonで今すぐ購入する",
    },
    PlatformProfile {
        id: "stores",
        cta: "STORESで今すぐ購入する",
    },
];

/// Tone by id; unknown ids get the standard tone.
pub fn tone(id: &str) -> &'static ToneProfile {
    TONES
        .iter()
        .find(|tone| tone.id == id)
        .unwrap_or(&TONES[0])
}

/// Platform by id; unknown ids get the base platform.
pub fn platform(id: &str) -> &'static PlatformProfile {
    PLATFORMS
        .iter()
        .find(|platform| platform.id == id)
        .unwrap_or(&PLATFORMS[0])
}
