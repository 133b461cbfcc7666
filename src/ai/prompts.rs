//! Prompt builders for the remote collaborator.
//!
//! Each builder produces the full text sent to the model, including the JSON
//! shape the answer must take. The shapes match the structs in
//! [`super::response`].

use crate::constants::{MILLIS_PER_DAY, PROMPT_RECENT_JOURNEY, PROMPT_RECENT_REFLECTIONS};
use crate::guidance::GuidanceEntry;
use chrono::{DateTime, Local, TimeZone, Timelike};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Situations a random wisdom verse is chosen for.
pub const WISDOM_CONTEXTS: &[&str] = &[
    "when you're feeling stuck",
    "for those 'what am I doing with my life' moments",
    "when you need a perspective shift",
    "for when everything feels chaotic",
    "when you're questioning everything",
    "for those overwhelming days",
    "when you need some clarity",
    "for moments of doubt",
    "when you're feeling lost",
    "for those breakthrough moments",
    "when you need courage",
    "for finding your center",
];

/// Themes a random wisdom verse focuses on.
pub const WISDOM_FOCUSES: &[&str] = &[
    "inner peace",
    "letting go",
    "finding purpose",
    "dealing with change",
    "self-acceptance",
    "courage",
    "patience",
    "trust",
    "wisdom",
    "love",
    "growth",
    "resilience",
];

const WISDOM_SEED_RANGE: u32 = 1000;
const NEUTRAL_MOOD: &str = "neutral";

/// Where in the day the user is writing from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeContext {
    /// Weekday name, e.g. "Monday".
    pub day: String,
    /// Clock time, e.g. "9:05 PM".
    pub time: String,
    /// "morning", "afternoon" or "evening".
    pub time_of_day: &'static str,
}

impl TimeContext {
    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    pub fn at<Tz: TimeZone>(moment: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let time_of_day = match moment.hour() {
            0..=11 => "morning",
            12..=16 => "afternoon",
            _ => "evening",
        };
        TimeContext {
            day: moment.format("%A").to_string(),
            time: moment.format("%-I:%M %p").to_string(),
            time_of_day,
        }
    }
}

/// Random variation injected into the wisdom prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WisdomSeed {
    pub context: &'static str,
    pub focus: &'static str,
    pub seed: u32,
}

impl WisdomSeed {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        WisdomSeed {
            context: WISDOM_CONTEXTS.choose(rng).copied().unwrap_or(WISDOM_CONTEXTS[0]),
            focus: WISDOM_FOCUSES.choose(rng).copied().unwrap_or(WISDOM_FOCUSES[0]),
            seed: rng.gen_range(0..WISDOM_SEED_RANGE),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecentPattern<'a> {
    theme: &'a str,
    mood: &'a str,
    created_at_epoch_ms: i64,
}

fn tail(history: &[GuidanceEntry], n: usize) -> &[GuidanceEntry] {
    &history[history.len().saturating_sub(n)..]
}

fn mood_of(entry: &GuidanceEntry) -> &str {
    entry.mood.as_deref().unwrap_or(NEUTRAL_MOOD)
}

/// Prompt asking for a personal reflection on `input`.
///
/// The last few entries of `history` are summarized as recent patterns.
pub fn reflection_prompt(input: &str, history: &[GuidanceEntry], time: &TimeContext) -> String {
    let recent: Vec<RecentPattern> = tail(history, PROMPT_RECENT_REFLECTIONS)
        .iter()
        .map(|entry| RecentPattern {
            theme: entry.theme.label(),
            mood: mood_of(entry),
            created_at_epoch_ms: entry.created_at_epoch_ms,
        })
        .collect();
    let patterns = if recent.is_empty() {
        "First time here".to_string()
    } else {
        serde_json::to_string(&recent).unwrap_or_else(|_| "First time here".to_string())
    };

    format!(
        r#"You are SoulScript - think of yourself as that one friend who actually listens and somehow always knows what to say. You're wise but not preachy, spiritual but not cheesy, and you get that life is messy.

Your vibe:
- You talk like a real person, not a self-help book
- You notice patterns but don't make people feel bad about them
- You use metaphors that actually make sense
- You validate feelings before offering wisdom
- You're honest about when things are hard while still finding hope
- You explain ancient wisdom like you're translating for a friend

Context: It's {time_of_day} on {day} at {time}.
Their recent patterns: {patterns}

Read their input and respond with ONLY valid JSON (no markdown, no extra text):
{{
  "theme": "What you're really picking up on (be specific and relatable)",
  "verse": "An actual line from the Bhagavad Gita or Bible that fits their situation - use the exact text from the book",
  "source": "Book chapter:verse",
  "meaning": "What this could mean for them today, in their own language and about their own situation. No spiritual platitudes.",
  "affirmation": "Something they can actually believe, not generic fluff",
  "isVenting": true/false,
  "mood": "their actual emotional state"
}}

Make it feel like someone who really sees them is responding.

User input: "{input}""#,
        time_of_day = time.time_of_day,
        day = time.day,
        time = time.time,
        patterns = patterns,
        input = input,
    )
}

/// Prompt asking for a fresh verse of wisdom.
pub fn wisdom_prompt(time_of_day: &str, seed: &WisdomSeed) -> String {
    format!(
        r#"You're SoulScript, sharing some random wisdom like a friend who reads way too much but somehow makes it relevant to real life.

It's {time_of_day} - find a verse that's perfect {context}, focusing on themes around {focus}.

Random seed: {seed} (use this to vary your selection)

Pick from these sources and make sure to vary your choice:
- Bhagavad Gita (chapters 1-18, various verses)
- Bible (Psalms, Proverbs, Matthew, John, Romans, Corinthians, etc.)

Explain it in a "let me tell you what I learned" way, not a "let me preach at you" way.

Respond with ONLY valid JSON (no markdown, no extra text):
{{
  "verse": "The actual exact verse from the Bhagavad Gita or Bible - pick something different each time",
  "source": "Book chapter:verse",
  "meaning": "What this could mean for them today. Use analogies or stories, whatever makes it click. No spiritual jargon.",
  "reflectionQuestion": "A question specific to the verse and context that opens a new way of seeing"
}}"#,
        time_of_day = time_of_day,
        context = seed.context,
        focus = seed.focus,
        seed = seed.seed,
    )
}

/// Prompt asking for guidance on a named life challenge.
pub fn challenge_prompt(challenge: &str) -> String {
    format!(
        r#"You're SoulScript, and someone just told you they're dealing with "{challenge}".

You're that friend who's been through things and always knows what to say without making it weird or preachy.

Find a verse from the Bhagavad Gita or Bible that actually helps with this specific thing, then explain it like you're talking to someone you care about who's having a rough time.

Respond with ONLY valid JSON (no markdown, no extra text):
{{
  "challenge": "{challenge}",
  "verse": "An actual exact verse from the Bhagavad Gita or Bible that relates to their situation",
  "source": "Book chapter:verse",
  "guidance": "Acknowledge that this is hard, validate their feelings, then share how this ancient wisdom applies to their life.",
  "action": "One small thing they can actually do today that won't feel overwhelming"
}}

Be the friend they need right now."#,
        challenge = challenge,
    )
}

/// Prompt asking for a journey analysis over a non-empty `history`.
///
/// `now_ms` is the current time; the span is measured from the oldest entry.
pub fn journey_prompt(history: &[GuidanceEntry], now_ms: i64) -> String {
    let recent = tail(history, PROMPT_RECENT_JOURNEY);
    let themes: Vec<&str> = recent.iter().map(|e| e.theme.label()).collect();
    let moods: Vec<&str> = recent.iter().map(mood_of).collect();

    let oldest = history
        .iter()
        .map(|e| e.created_at_epoch_ms)
        .min()
        .unwrap_or(now_ms);
    let span_ms = now_ms.saturating_sub(oldest).max(0);
    let days = ((span_ms + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY).max(1);

    format!(
        r#"You're SoulScript, and you've been watching someone's journey for {days} days through {count} reflections. You notice patterns and growth that people can't see in themselves.

Recent themes: {themes}
Recent moods: {moods}

Respond like someone who's been paying attention and genuinely cares with ONLY valid JSON (no markdown, no extra text):
{{
  "patterns": "What patterns do you see? Be specific but kind. Point out what they might not notice about themselves.",
  "growth": "How have they grown? Celebrate the real progress, even if it's subtle.",
  "focus": "What's one thing that might help them keep growing? Make it doable, not overwhelming."
}}

Talk to them like you've been watching their journey and you're proud of how far they've come."#,
        days = days,
        count = history.len(),
        themes = themes.join(", "),
        moods = moods.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::{compose_guidance_entry, Theme, ThemeCategory};
    use chrono::{FixedOffset, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_time_context_buckets() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let morning = tz.with_ymd_and_hms(2024, 3, 4, 9, 5, 0).unwrap();
        let afternoon = tz.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();
        let evening = tz.with_ymd_and_hms(2024, 3, 4, 17, 0, 0).unwrap();

        let ctx = TimeContext::at(&morning);
        assert_eq!(ctx.time_of_day, "morning");
        assert_eq!(ctx.day, "Monday");
        assert_eq!(ctx.time, "9:05 AM");
        assert_eq!(TimeContext::at(&afternoon).time_of_day, "afternoon");
        assert_eq!(TimeContext::at(&evening).time_of_day, "evening");
    }

    #[test]
    fn test_reflection_prompt_first_time() {
        let time = TimeContext {
            day: "Friday".to_string(),
            time: "8:00 PM".to_string(),
            time_of_day: "evening",
        };
        let prompt = reflection_prompt("I feel stuck", &[], &time);
        assert!(prompt.contains("First time here"));
        assert!(prompt.contains("It's evening on Friday at 8:00 PM"));
        assert!(prompt.contains("User input: \"I feel stuck\""));
        assert!(prompt.contains("\"isVenting\""));
    }

    #[test]
    fn test_reflection_prompt_summarizes_last_five() {
        let mut history = Vec::new();
        for _ in 0..6 {
            history.push(compose_guidance_entry("I am angry"));
        }
        history[0].theme = Theme::Category(ThemeCategory::LossGrief);
        let time = TimeContext::now();
        let prompt = reflection_prompt("hello", &history, &time);
        assert!(!prompt.contains("Loss & Grief"));
        assert_eq!(prompt.matches("\"mood\":\"neutral\"").count(), 5);
    }

    #[test]
    fn test_wisdom_seed_is_reproducible() {
        let a = WisdomSeed::random(&mut StdRng::seed_from_u64(5));
        let b = WisdomSeed::random(&mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
        assert!(a.seed < 1000);

        let prompt = wisdom_prompt("morning", &a);
        assert!(prompt.contains(a.context));
        assert!(prompt.contains(a.focus));
        assert!(prompt.contains("\"reflectionQuestion\""));
    }

    #[test]
    fn test_challenge_prompt_names_challenge() {
        let prompt = challenge_prompt("Loss & Grief");
        assert!(prompt.contains("dealing with \"Loss & Grief\""));
        assert!(prompt.contains("\"challenge\": \"Loss & Grief\""));
    }

    #[test]
    fn test_journey_prompt_counts_days() {
        let mut entry = compose_guidance_entry("I am afraid");
        entry.created_at_epoch_ms = 0;
        entry.mood = Some("anxious".to_string());
        let prompt = journey_prompt(&[entry], 2 * MILLIS_PER_DAY + 1);
        assert!(prompt.contains("for 3 days through 1 reflections"));
        assert!(prompt.contains("Recent moods: anxious"));
        assert!(prompt.contains("Recent themes: Fear & Anxiety"));
    }
}
