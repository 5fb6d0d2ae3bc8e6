//! Winning pattern registry.
//!
//! A compiled-in table mapping exact 5-symbol sequences to their reward
//! and theme metadata. Adding a pattern is a data change only. Several
//! sequences share a reward, so lookups are many-to-one by design.

/// The jackpot sequence.
pub const PRIMARY_PATTERN: &str = "スガシカオ";

/// First two symbols of the primary pattern; a result that misses every
/// pattern but starts with this prefix counts as a near miss.
pub const NEAR_MISS_PREFIX: &str = "スガ";

/// What a winning pattern rewards the player with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardKind {
    /// A platform video, identified by its video ID
    Video,
    /// A static image, identified by path
    Image,
}

impl RewardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
        }
    }
}

/// A winning sequence and its associated reward/theme metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternEntry {
    /// Exact 5-symbol sequence, drawn from alphabet permutations
    pub sequence: &'static str,

    /// Message shown when this pattern hits
    pub display_name: &'static str,

    /// Reward media kind
    pub reward_kind: RewardKind,

    /// Video ID or image path, depending on kind
    pub reward_source: &'static str,

    /// Opaque theme token for the rendering layer
    pub theme_tag: &'static str,

    /// Opaque background token for the rendering layer
    pub background_tag: &'static str,
}

impl PatternEntry {
    /// Whether this is the jackpot pattern.
    pub fn is_primary(&self) -> bool {
        self.sequence == PRIMARY_PATTERN
    }

    /// Reward view consumed by the rendering layer.
    pub fn reward_to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": self.reward_kind.as_str(),
            "source": self.reward_source,
            "name": self.display_name,
        })
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "sequence": self.sequence,
            "name": self.display_name,
            "reward": self.reward_to_json(),
            "theme": self.theme_tag,
            "background": self.background_tag,
        })
    }
}

/// All winning patterns.
pub static PATTERNS: [PatternEntry; 12] = [
    PatternEntry {
        sequence: "スガシカオ",
        display_name: "おめでとう！スガシカオだね！",
        reward_kind: RewardKind::Video,
        reward_source: "Aw3l547PNP4",
        theme_tag: "success-theme",
        background_tag: "bg-success-light",
    },
    PatternEntry {
        sequence: "カシスガオ",
        display_name: "カシス顔",
        reward_kind: RewardKind::Image,
        reward_source: "/kashisugao.png",
        theme_tag: "special-theme",
        background_tag: "bg-special-light",
    },
    PatternEntry {
        sequence: "オカシガス",
        display_name: "お菓子ガス",
        reward_kind: RewardKind::Image,
        reward_source: "/okashigasu.png",
        theme_tag: "special-theme",
        background_tag: "bg-special-light",
    },
    PatternEntry {
        sequence: "ガスオカシ",
        display_name: "ガスお菓子",
        reward_kind: RewardKind::Image,
        reward_source: "/okashigasu.png",
        theme_tag: "special-theme",
        background_tag: "bg-special-light",
    },
    PatternEntry {
        sequence: "オスシガカ",
        display_name: "お寿司画家",
        reward_kind: RewardKind::Image,
        reward_source: "/osushigaka.png",
        theme_tag: "special-theme",
        background_tag: "bg-special-light",
    },
    PatternEntry {
        sequence: "シカガオス",
        display_name: "鹿が押忍！",
        reward_kind: RewardKind::Image,
        reward_source: "/shikagaosu.png",
        theme_tag: "special-theme",
        background_tag: "bg-special-light",
    },
    PatternEntry {
        sequence: "カオガスシ",
        display_name: "顔が寿司",
        reward_kind: RewardKind::Image,
        reward_source: "/kaogasushi.png",
        theme_tag: "special-theme",
        background_tag: "bg-special-light",
    },
    PatternEntry {
        sequence: "スシガカオ",
        display_name: "寿司が顔",
        reward_kind: RewardKind::Image,
        reward_source: "/kaogasushi.png",
        theme_tag: "special-theme",
        background_tag: "bg-special-light",
    },
    PatternEntry {
        sequence: "カオスシガ",
        display_name: "カオス滋賀",
        reward_kind: RewardKind::Image,
        reward_source: "/kaosushiga.png",
        theme_tag: "special-theme",
        background_tag: "bg-special-light",
    },
    PatternEntry {
        sequence: "シガカオス",
        display_name: "滋賀カオス",
        reward_kind: RewardKind::Image,
        reward_source: "/kaosushiga.png",
        theme_tag: "special-theme",
        background_tag: "bg-special-light",
    },
    PatternEntry {
        sequence: "カスガオシ",
        display_name: "春日推し",
        reward_kind: RewardKind::Image,
        reward_source: "/kasugaoshi.png",
        theme_tag: "special-theme",
        background_tag: "bg-special-light",
    },
    PatternEntry {
        sequence: "オシカスガ",
        display_name: "推し春日",
        reward_kind: RewardKind::Image,
        reward_source: "/kasugaoshi.png",
        theme_tag: "special-theme",
        background_tag: "bg-special-light",
    },
];

/// Look up a result sequence, exact match only.
pub fn lookup(sequence: &str) -> Option<&'static PatternEntry> {
    PATTERNS.iter().find(|entry| entry.sequence == sequence)
}
