//! Meaning, affirmation and full-entry composition.
//!
//! Meaning text comes from a lookup table: each theme owns an ordered list of
//! variants, each variant guarded by trigger keywords. The first variant whose
//! triggers occur in the input wins; a variant with no triggers always
//! matches and closes every list.

use super::corpus::{Tradition, VerseRecord};
use super::entry::{local_date_for, next_timestamp_ms, GuidanceEntry, GuidanceOrigin, Theme};
use super::selector::select_verse_with;
use super::theme::{classify, ThemeCategory};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

struct MeaningVariant {
    triggers: &'static [&'static str],
    render: fn(Tradition) -> String,
}

impl MeaningVariant {
    fn matches(&self, lowered_input: &str) -> bool {
        self.triggers.is_empty() || self.triggers.iter().any(|t| lowered_input.contains(t))
    }
}

fn pick(tradition: Tradition, gita: &'static str, bible: &'static str) -> &'static str {
    match tradition {
        Tradition::BhagavadGita => gita,
        Tradition::Bible => bible,
    }
}

const FEAR_VARIANTS: &[MeaningVariant] = &[
    MeaningVariant {
        triggers: &["future", "tomorrow"],
        render: |t| {
            format!(
                "I can feel the weight of your worry about what's coming. {} that our minds love to create elaborate stories about futures that may never happen. Right now, in this moment, you have everything you need. Your anxiety is trying to protect you, but it's working overtime. {} that peace comes from anchoring ourselves in the present, where life actually happens.",
                pick(t, "Krishna understood", "Jesus knew"),
                pick(t, "The Gita teaches us", "This verse reminds us"),
            )
        },
    },
    MeaningVariant {
        triggers: &["work", "job"],
        render: |t| {
            format!(
                "Work stress can feel overwhelming, like you're carrying the weight of the world. But here's what I want you to remember: your worth isn't measured by your productivity or achievements. {} that we can give our best effort while releasing attachment to outcomes. You are enough, exactly as you are, regardless of what happens at work.",
                pick(t, "Krishna taught Arjuna", "Jesus taught his disciples"),
            )
        },
    },
    MeaningVariant {
        triggers: &[],
        render: |t| {
            format!(
                "Your fears are so understandable - they show how much you care about your life and the people in it. {} that courage isn't the absence of fear; it's moving forward with love despite the fear. You're braver than you know, and you don't have to face this alone.",
                pick(t, "The ancient sages knew", "The scriptures teach"),
            )
        },
    },
];

const ANGER_VARIANTS: &[MeaningVariant] = &[
    MeaningVariant {
        triggers: &["unfair", "injustice"],
        render: |t| {
            format!(
                "I hear the righteous anger in your heart - you're seeing injustice and it's stirring something deep within you. This isn't bad anger; this is your soul recognizing that something precious is being violated. {} that we can channel this fire into purposeful action rather than destructive reaction. Your anger can become a force for positive change.",
                pick(t, "Krishna taught", "The scriptures show us"),
            )
        },
    },
    MeaningVariant {
        triggers: &[],
        render: |t| {
            format!(
                "That burning feeling in your chest - I understand it completely. Anger often masks deeper feelings like hurt, disappointment, or fear. {} that true strength comes not from suppressing these feelings, but from understanding their message and choosing our response consciously. You have the power to transform this energy into something healing.",
                pick(t, "The Gita teaches", "This wisdom reminds us"),
            )
        },
    },
];

const DOUBT_VARIANTS: &[MeaningVariant] = &[MeaningVariant {
    triggers: &[],
    render: |t| {
        format!(
            "The fog of uncertainty can feel so disorienting, can't it? You're standing at a crossroads, and every path seems unclear. But here's what I've learned: doubt often visits the most thoughtful souls. {}. Your questioning shows wisdom, not weakness. Sometimes the most profound answers come not through thinking harder, but through trusting the process of your unfolding.",
            pick(
                t,
                "Even Arjuna faced this on the battlefield",
                "Even the disciples struggled with uncertainty"
            ),
        )
    },
}];

const LOSS_VARIANTS: &[MeaningVariant] = &[MeaningVariant {
    triggers: &[],
    render: |t| {
        format!(
            "Oh, precious soul, I can feel the depth of your loss. Grief is love with nowhere to go, and it's one of the most sacred human experiences. {} doesn't minimize your pain - it honors the eternal nature of love itself. What you're mourning isn't truly gone; it's transformed. The love you shared lives on in the eternal part of you.",
            pick(t, "Krishna's teaching about the eternal soul", "This verse"),
        )
    },
}];

const GENERIC_VARIANTS: &[MeaningVariant] = &[MeaningVariant {
    triggers: &[],
    render: |t| {
        format!(
            "I see you, dear soul, in this moment of reflection. Your willingness to pause and seek wisdom shows such beautiful self-awareness. {} speak directly to your heart today, offering guidance that has comforted countless souls throughout the ages. Trust that this wisdom is meant for you, right now, in this exact moment of your journey.",
            pick(t, "The ancient teachings of the Gita", "These sacred words"),
        )
    },
}];

fn meaning_variants(theme: ThemeCategory) -> &'static [MeaningVariant] {
    match theme {
        ThemeCategory::FearAnxiety => FEAR_VARIANTS,
        ThemeCategory::AngerFrustration => ANGER_VARIANTS,
        ThemeCategory::DoubtUncertainty => DOUBT_VARIANTS,
        ThemeCategory::LossGrief => LOSS_VARIANTS,
        _ => GENERIC_VARIANTS,
    }
}

/// Explains what `verse` means for someone writing `input` under `theme`.
pub fn compose_meaning(theme: ThemeCategory, input: &str, verse: &VerseRecord) -> String {
    let lowered = input.to_lowercase();
    let variant = meaning_variants(theme)
        .iter()
        .find(|v| v.matches(&lowered))
        .unwrap_or(&GENERIC_VARIANTS[0]);
    (variant.render)(verse.tradition)
}

fn affirmations_for(theme: ThemeCategory) -> Option<&'static [&'static str]> {
    let list: &'static [&'static str] = match theme {
        ThemeCategory::FearAnxiety => &[
            "I am safe in this moment, and this moment is all I have",
            "My breath is my anchor to peace and presence",
            "I trust the process of life unfolding perfectly",
            "Divine love surrounds me and protects me always",
            "I choose faith over fear, love over worry",
        ],
        ThemeCategory::AngerFrustration => &[
            "I transform my fire into wisdom and compassion",
            "I respond from my highest self, not my wounded self",
            "My anger teaches me what I value most deeply",
            "I choose understanding over judgment",
            "Peace flows through me like a gentle river",
        ],
        ThemeCategory::DoubtUncertainty => &[
            "I trust that clarity comes in divine timing",
            "My path unfolds perfectly, one step at a time",
            "I am guided by wisdom greater than my understanding",
            "Uncertainty is where miracles are born",
            "I embrace the mystery of my beautiful becoming",
        ],
        ThemeCategory::AttachmentLettingGo => &[
            "I love freely without grasping or controlling",
            "I trust the flow of life to bring what serves my highest good",
            "My open hands receive more than my closed fists",
            "I release with love and trust divine timing",
            "Freedom comes through loving without attachment",
        ],
        ThemeCategory::Forgiveness => &[
            "I choose my peace over past pain",
            "Forgiveness sets my heart free to love again",
            "I release resentment and embrace healing",
            "Love flows through me, washing away all hurt",
            "I am worthy of love, especially my own",
        ],
        ThemeCategory::LifePurpose => &[
            "My purpose unfolds through every act of love",
            "I am exactly where I need to be in my journey",
            "My unique gifts are needed in this world",
            "Every step I take serves my highest calling",
            "I trust that my life has profound meaning",
        ],
        ThemeCategory::LoveRelationships => &[
            "I give and receive love with an open heart",
            "I am worthy of deep, authentic love",
            "Love flows through me and returns multiplied",
            "I attract relationships that honor my soul",
            "My heart is safe to love and be loved",
        ],
        ThemeCategory::LossGrief => &[
            "Love never dies, it only transforms",
            "I carry my loved ones in my heart forever",
            "Grief is love honoring what was precious",
            "I am held by love even in my sorrow",
            "Healing happens in its own perfect time",
        ],
        ThemeCategory::GratitudeJoy => &[
            "My grateful heart attracts endless blessings",
            "Joy is my natural state of being",
            "I celebrate the miracle of this moment",
            "Abundance flows to me and through me",
            "I am a blessing in this world",
        ],
        ThemeCategory::PeaceTranquility => PEACE_AFFIRMATIONS,
        ThemeCategory::SelfReflectionGrowth => return None,
    };
    Some(list)
}

const PEACE_AFFIRMATIONS: &[&str] = &[
    "Peace is my birthright and my choice",
    "I am connected to the stillness within",
    "Calm flows through me like a gentle stream",
    "I find sanctuary in the silence of my soul",
    "Serenity is always available to me",
];

/// Picks an affirmation for `theme` with the thread-local RNG.
pub fn compose_affirmation(theme: ThemeCategory, input: &str) -> String {
    compose_affirmation_with(theme, input, &mut rand::thread_rng())
}

/// Picks an affirmation for `theme` uniformly with `rng`.
///
/// Themes without a dedicated list use the Peace & Tranquility affirmations.
/// `input` is accepted for signature parity with [`compose_meaning`].
pub fn compose_affirmation_with<R: Rng + ?Sized>(
    theme: ThemeCategory,
    _input: &str,
    rng: &mut R,
) -> String {
    let list = affirmations_for(theme).unwrap_or(PEACE_AFFIRMATIONS);
    list.choose(rng)
        .copied()
        .unwrap_or(PEACE_AFFIRMATIONS[0])
        .to_string()
}

/// Builds a complete guidance entry for one submission with the thread-local RNG.
///
/// # Examples
///
/// ```
/// use soulscript::guidance::{compose_guidance_entry, ThemeCategory};
///
/// let entry = compose_guidance_entry("I am so anxious and scared about tomorrow");
/// assert_eq!(entry.theme.category(), Some(ThemeCategory::FearAnxiety));
/// assert!(!entry.meaning_text.is_empty());
/// ```
pub fn compose_guidance_entry(input: &str) -> GuidanceEntry {
    compose_guidance_entry_with(input, &mut rand::thread_rng())
}

/// Builds a complete guidance entry: classify, select a verse, compose the
/// meaning and affirmation, then stamp a fresh id and timestamp.
pub fn compose_guidance_entry_with<R: Rng + ?Sized>(input: &str, rng: &mut R) -> GuidanceEntry {
    let theme = classify(input);
    let verse = select_verse_with(theme, input, rng);
    let meaning_text = compose_meaning(theme, input, verse);
    let affirmation_text = compose_affirmation_with(theme, input, rng);

    let created_at_epoch_ms = next_timestamp_ms();
    let entry = GuidanceEntry {
        id: Uuid::new_v4().to_string(),
        created_at_epoch_ms,
        date: local_date_for(created_at_epoch_ms),
        input_text: input.to_string(),
        theme: Theme::Category(theme),
        verse_text: verse.text.to_string(),
        citation: verse.citation.to_string(),
        meaning_text,
        affirmation_text,
        origin: GuidanceOrigin::Local,
        mood: None,
        is_venting: None,
    };

    debug!(id = %entry.id, citation = verse.citation, "composed local guidance");
    info!(theme = %theme, "local guidance ready");
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::corpus::{all_verses, find_by_citation};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn gita() -> &'static VerseRecord {
        find_by_citation("Bhagavad Gita 2:47").unwrap()
    }

    fn bible() -> &'static VerseRecord {
        find_by_citation("Matthew 6:34").unwrap()
    }

    #[test]
    fn test_meaning_never_empty() {
        for theme in ThemeCategory::ALL {
            for verse in all_verses() {
                for input in ["", "tomorrow at work", "this is unfair"] {
                    assert!(!compose_meaning(theme, input, verse).is_empty());
                }
            }
        }
    }

    #[test]
    fn test_fear_meaning_variants_follow_input() {
        let future = compose_meaning(ThemeCategory::FearAnxiety, "Tomorrow scares me", bible());
        assert!(future.contains("what's coming"));
        assert!(future.contains("Jesus knew"));

        let work = compose_meaning(ThemeCategory::FearAnxiety, "my job", gita());
        assert!(work.contains("Work stress"));
        assert!(work.contains("Krishna taught Arjuna"));

        let general = compose_meaning(ThemeCategory::FearAnxiety, "spiders", gita());
        assert!(general.contains("The ancient sages knew"));
    }

    #[test]
    fn test_future_variant_precedes_work_variant() {
        let both = compose_meaning(ThemeCategory::FearAnxiety, "work tomorrow", bible());
        assert!(both.contains("what's coming"));
    }

    #[test]
    fn test_anger_injustice_variant() {
        let text = compose_meaning(ThemeCategory::AngerFrustration, "It is so unfair", gita());
        assert!(text.contains("righteous anger"));
        assert!(text.contains("Krishna taught"));
    }

    #[test]
    fn test_generic_meaning_for_untabled_theme() {
        let text = compose_meaning(ThemeCategory::GratitudeJoy, "thank you", bible());
        assert!(text.contains("These sacred words"));
    }

    #[test]
    fn test_affirmation_comes_from_theme_list() {
        let mut rng = StdRng::seed_from_u64(11);
        let list = affirmations_for(ThemeCategory::LossGrief).unwrap();
        for _ in 0..20 {
            let text = compose_affirmation_with(ThemeCategory::LossGrief, "", &mut rng);
            assert!(list.contains(&text.as_str()));
        }
    }

    #[test]
    fn test_affirmation_falls_back_to_peace() {
        let mut rng = StdRng::seed_from_u64(5);
        let text = compose_affirmation_with(ThemeCategory::SelfReflectionGrowth, "", &mut rng);
        assert!(PEACE_AFFIRMATIONS.contains(&text.as_str()));
    }

    #[test]
    fn test_every_dedicated_list_has_five() {
        for theme in ThemeCategory::ALL {
            if let Some(list) = affirmations_for(theme) {
                assert_eq!(list.len(), 5, "{}", theme);
            }
        }
    }

    #[test]
    fn test_entries_get_distinct_ids_and_increasing_timestamps() {
        let mut rng = StdRng::seed_from_u64(9);
        let first = compose_guidance_entry_with("same words", &mut rng);
        let second = compose_guidance_entry_with("same words", &mut rng);
        assert_ne!(first.id, second.id);
        assert!(second.created_at_epoch_ms > first.created_at_epoch_ms);
        assert_eq!(first.origin, GuidanceOrigin::Local);
    }

    #[test]
    fn test_seeded_entries_are_reproducible() {
        let a = compose_guidance_entry_with("I feel calm", &mut StdRng::seed_from_u64(21));
        let b = compose_guidance_entry_with("I feel calm", &mut StdRng::seed_from_u64(21));
        assert_eq!(a.citation, b.citation);
        assert_eq!(a.affirmation_text, b.affirmation_text);
        assert_eq!(a.meaning_text, b.meaning_text);
    }
}
