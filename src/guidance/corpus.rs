//! The compiled-in verse corpus.

use serde::Serialize;
use std::fmt;

/// Scripture a verse is cited from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tradition {
    BhagavadGita,
    Bible,
}

impl fmt::Display for Tradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tradition::BhagavadGita => f.write_str("Bhagavad Gita"),
            Tradition::Bible => f.write_str("Bible"),
        }
    }
}

/// One quotation in the corpus.
///
/// `citation` is unique across the corpus and keys the canned elaborations in
/// [`crate::guidance::wisdom`]. `theme_keywords` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseRecord {
    pub text: &'static str,
    pub citation: &'static str,
    pub tradition: Tradition,
    pub context: &'static str,
    pub theme_keywords: &'static [&'static str],
}

const CORPUS: &[VerseRecord] = &[
    VerseRecord {
        text: "You have a right to perform your prescribed duty, but you are not entitled to the fruits of your actions. Never consider yourself the cause of the results of your activities, and never be attached to not doing your duty.",
        citation: "Bhagavad Gita 2:47",
        tradition: Tradition::BhagavadGita,
        context: "Krishna's teaching on selfless action",
        theme_keywords: &["duty", "attachment", "purpose", "work", "stress", "pressure"],
    },
    VerseRecord {
        text: "For the soul there is neither birth nor death. It is not slain when the body is slain.",
        citation: "Bhagavad Gita 2:20",
        tradition: Tradition::BhagavadGita,
        context: "The eternal nature of the soul",
        theme_keywords: &["death", "fear", "eternity", "soul", "loss", "grief", "mortality"],
    },
    VerseRecord {
        text: "The mind is restless and difficult to restrain, but it is subdued by practice and by detachment.",
        citation: "Bhagavad Gita 6:35",
        tradition: Tradition::BhagavadGita,
        context: "Arjuna's struggle with mental control",
        theme_keywords: &["anxiety", "meditation", "practice", "mind", "worry", "restless", "peace"],
    },
    VerseRecord {
        text: "A person is said to be elevated in yoga when, having renounced all material desires, he neither acts for sense gratification nor engages in fruitive activities.",
        citation: "Bhagavad Gita 6:4",
        tradition: Tradition::BhagavadGita,
        context: "The path to inner peace",
        theme_keywords: &["self-control", "meditation", "peace", "mind", "desires", "contentment"],
    },
    VerseRecord {
        text: "When meditation is mastered, the mind is unwavering like the flame of a lamp in a windless place.",
        citation: "Bhagavad Gita 6:19",
        tradition: Tradition::BhagavadGita,
        context: "The fruits of spiritual practice",
        theme_keywords: &["meditation", "focus", "peace", "stillness", "concentration"],
    },
    VerseRecord {
        text: "Those who are free from anger and all material desires, who are self-realized, self-disciplined and constantly endeavoring for perfection, are assured of liberation in the Supreme.",
        citation: "Bhagavad Gita 5:26",
        tradition: Tradition::BhagavadGita,
        context: "The qualities of the liberated soul",
        theme_keywords: &["anger", "freedom", "self-discipline", "liberation", "perfection"],
    },
    VerseRecord {
        text: "One who sees inaction in action, and action in inaction, is intelligent among men.",
        citation: "Bhagavad Gita 4:18",
        tradition: Tradition::BhagavadGita,
        context: "The nature of true action",
        theme_keywords: &["wisdom", "understanding", "action", "intelligence", "perception"],
    },
    VerseRecord {
        text: "Whatever happened, happened for the good. Whatever is happening, is happening for the good. Whatever will happen, will also happen for the good.",
        citation: "Bhagavad Gita 2:11",
        tradition: Tradition::BhagavadGita,
        context: "Krishna's teaching on divine providence",
        theme_keywords: &["acceptance", "trust", "divine plan", "surrender", "faith"],
    },
    VerseRecord {
        text: "Therefore do not worry about tomorrow, for tomorrow will worry about itself. Each day has enough trouble of its own.",
        citation: "Matthew 6:34",
        tradition: Tradition::Bible,
        context: "Jesus teaching about divine provision",
        theme_keywords: &["anxiety", "worry", "trust", "present", "future", "stress"],
    },
    VerseRecord {
        text: "Be still, and know that I am God; I will be exalted among the nations, I will be exalted in the earth.",
        citation: "Psalm 46:10",
        tradition: Tradition::Bible,
        context: "God's call to inner stillness",
        theme_keywords: &["peace", "stillness", "trust", "faith", "meditation", "quiet"],
    },
    VerseRecord {
        text: "Love is patient, love is kind. It does not envy, it does not boast, it is not proud. It does not dishonor others, it is not self-seeking, it is not easily angered, it keeps no record of wrongs.",
        citation: "1 Corinthians 13:4-5",
        tradition: Tradition::Bible,
        context: "Paul's definition of divine love",
        theme_keywords: &["love", "patience", "kindness", "relationships", "forgiveness", "humility"],
    },
    VerseRecord {
        text: "Cast all your anxiety on him because he cares for you.",
        citation: "1 Peter 5:7",
        tradition: Tradition::Bible,
        context: "Peter's encouragement to believers",
        theme_keywords: &["anxiety", "trust", "care", "worry", "burden", "support"],
    },
    VerseRecord {
        text: "And we know that in all things God works for the good of those who love him, who have been called according to his purpose.",
        citation: "Romans 8:28",
        tradition: Tradition::Bible,
        context: "Paul's teaching on divine purpose",
        theme_keywords: &["purpose", "trust", "divine plan", "good", "calling", "meaning"],
    },
    VerseRecord {
        text: "Come to me, all you who are weary and burdened, and I will give you rest.",
        citation: "Matthew 11:28",
        tradition: Tradition::Bible,
        context: "Jesus' invitation to the weary",
        theme_keywords: &["rest", "burden", "weariness", "comfort", "peace", "relief"],
    },
    VerseRecord {
        text: "The Lord your God is with you, the Mighty Warrior who saves. He will take great delight in you; in his love he will no longer rebuke you, but will rejoice over you with singing.",
        citation: "Zephaniah 3:17",
        tradition: Tradition::Bible,
        context: "God's delight in His people",
        theme_keywords: &["love", "joy", "presence", "delight", "celebration", "worth"],
    },
    VerseRecord {
        text: "For I know the plans I have for you, declares the Lord, plans to prosper you and not to harm you, to give you hope and a future.",
        citation: "Jeremiah 29:11",
        tradition: Tradition::Bible,
        context: "God's promise to His people",
        theme_keywords: &["hope", "future", "plans", "prosperity", "trust", "purpose"],
    },
];

/// Every verse, Gita first then Bible, in a fixed order.
pub fn all_verses() -> &'static [VerseRecord] {
    CORPUS
}

/// Finds a verse by its citation.
pub fn find_by_citation(citation: &str) -> Option<&'static VerseRecord> {
    CORPUS.iter().find(|v| v.citation == citation)
}
