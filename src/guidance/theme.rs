//! Keyword-based theme classification.
//!
//! Free text is mapped onto exactly one [`ThemeCategory`] by counting how many
//! of each category's keywords occur as substrings of the lower-cased input.
//! The keyword table is ordered: on equal counts the category declared first
//! wins, which keeps classification reproducible.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One discrete emotional or topical bucket for a piece of user input.
///
/// Declaration order matters: it is the tie-break order of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeCategory {
    FearAnxiety,
    AngerFrustration,
    DoubtUncertainty,
    AttachmentLettingGo,
    Forgiveness,
    LifePurpose,
    LoveRelationships,
    LossGrief,
    GratitudeJoy,
    PeaceTranquility,
    /// Used whenever no keyword matches.
    SelfReflectionGrowth,
}

impl ThemeCategory {
    /// Every category, in declaration order.
    pub const ALL: [ThemeCategory; 11] = [
        ThemeCategory::FearAnxiety,
        ThemeCategory::AngerFrustration,
        ThemeCategory::DoubtUncertainty,
        ThemeCategory::AttachmentLettingGo,
        ThemeCategory::Forgiveness,
        ThemeCategory::LifePurpose,
        ThemeCategory::LoveRelationships,
        ThemeCategory::LossGrief,
        ThemeCategory::GratitudeJoy,
        ThemeCategory::PeaceTranquility,
        ThemeCategory::SelfReflectionGrowth,
    ];

    /// The category returned when nothing matches.
    pub const DEFAULT: ThemeCategory = ThemeCategory::SelfReflectionGrowth;

    /// Human-readable label, e.g. `"Fear & Anxiety"`.
    pub fn label(self) -> &'static str {
        match self {
            ThemeCategory::FearAnxiety => "Fear & Anxiety",
            ThemeCategory::AngerFrustration => "Anger & Frustration",
            ThemeCategory::DoubtUncertainty => "Doubt & Uncertainty",
            ThemeCategory::AttachmentLettingGo => "Attachment & Letting Go",
            ThemeCategory::Forgiveness => "Forgiveness",
            ThemeCategory::LifePurpose => "Life Purpose",
            ThemeCategory::LoveRelationships => "Love & Relationships",
            ThemeCategory::LossGrief => "Loss & Grief",
            ThemeCategory::GratitudeJoy => "Gratitude & Joy",
            ThemeCategory::PeaceTranquility => "Peace & Tranquility",
            ThemeCategory::SelfReflectionGrowth => "Self-Reflection & Growth",
        }
    }

    /// Looks a category up by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// Keywords that count towards this category. Empty for the default.
    pub fn keywords(self) -> &'static [&'static str] {
        THEME_KEYWORDS
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

impl fmt::Display for ThemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered keyword table. Iteration order is the tie-break order.
const THEME_KEYWORDS: &[(ThemeCategory, &[&str])] = &[
    (
        ThemeCategory::FearAnxiety,
        &[
            "fear", "afraid", "anxious", "worried", "scared", "panic", "nervous", "terrified",
            "overwhelmed", "stress", "tension", "dread", "apprehensive", "uneasy", "restless",
        ],
    ),
    (
        ThemeCategory::AngerFrustration,
        &[
            "angry", "mad", "frustrated", "furious", "irritated", "annoyed", "rage", "bitter",
            "resentful", "hostile", "aggravated", "livid", "outraged", "indignant",
        ],
    ),
    (
        ThemeCategory::DoubtUncertainty,
        &[
            "doubt", "uncertain", "confused", "lost", "unclear", "questioning", "unsure",
            "hesitant", "conflicted", "torn", "indecisive", "puzzled", "perplexed",
        ],
    ),
    (
        ThemeCategory::AttachmentLettingGo,
        &[
            "attachment", "letting go", "control", "clinging", "possessive", "dependent",
            "obsessed", "fixated", "can't let go", "holding on", "release", "surrender",
        ],
    ),
    (
        ThemeCategory::Forgiveness,
        &[
            "forgive", "hurt", "betrayed", "wronged", "resentment", "grudge", "bitter",
            "unforgiving", "revenge", "payback", "wounded", "betrayal", "injustice",
        ],
    ),
    (
        ThemeCategory::LifePurpose,
        &[
            "purpose", "meaning", "direction", "calling", "mission", "destiny", "path", "lost",
            "aimless", "pointless", "empty", "unfulfilled", "searching", "seeking",
        ],
    ),
    (
        ThemeCategory::LoveRelationships,
        &[
            "love", "relationship", "partner", "family", "friend", "connection", "lonely",
            "heartbreak", "romance", "marriage", "dating", "breakup", "divorce", "rejection",
        ],
    ),
    (
        ThemeCategory::LossGrief,
        &[
            "loss", "grief", "death", "died", "passed away", "mourning", "bereaved", "miss",
            "gone", "departed", "funeral", "cemetery", "memorial", "goodbye",
        ],
    ),
    (
        ThemeCategory::GratitudeJoy,
        &[
            "grateful", "thankful", "blessed", "joy", "happy", "celebration", "appreciate",
            "abundance", "gift", "miracle", "wonderful", "amazing", "beautiful",
        ],
    ),
    (
        ThemeCategory::PeaceTranquility,
        &[
            "peace", "calm", "serene", "tranquil", "quiet", "still", "meditation", "mindful",
            "centered", "balanced", "harmony", "zen", "peaceful",
        ],
    ),
];

/// Counts keyword hits per category, in table order.
///
/// Each keyword contributes at most one, however often it repeats. Matching is
/// a literal substring test on the lower-cased input; punctuation is kept.
pub fn score(input: &str) -> Vec<(ThemeCategory, usize)> {
    let lowered = input.to_lowercase();
    THEME_KEYWORDS
        .iter()
        .map(|(category, keywords)| {
            let hits = keywords.iter().filter(|k| lowered.contains(*k)).count();
            (*category, hits)
        })
        .collect()
}

/// Maps free text to exactly one theme category.
///
/// The strictly highest score wins and the first-declared category wins a tie.
/// When every category scores zero the default category is returned.
///
/// # Examples
///
/// ```
/// use soulscript::guidance::{classify, ThemeCategory};
///
/// assert_eq!(
///     classify("I am so anxious and scared about tomorrow"),
///     ThemeCategory::FearAnxiety
/// );
/// assert_eq!(classify(""), ThemeCategory::SelfReflectionGrowth);
/// ```
pub fn classify(input: &str) -> ThemeCategory {
    let mut best = ThemeCategory::DEFAULT;
    let mut best_hits = 0;

    for (category, hits) in score(input) {
        if hits > best_hits {
            best = category;
            best_hits = hits;
        }
    }

    debug!(theme = %best, hits = best_hits, "classified input");
    best
}
