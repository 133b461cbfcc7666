//! Plain-text rendering of command results for the terminal.

use crate::guidance::{ChallengeGuidance, GuidanceEntry, JourneyAnalysis, Theme, WisdomVerse};

pub fn render_entry(entry: &GuidanceEntry) -> String {
    format!(
        "Theme: {}\n\n\"{}\"\n  - {}\n\nWhat this could mean for you today:\n{}\n\nAffirmation: {}",
        entry.theme, entry.verse_text, entry.citation, entry.meaning_text, entry.affirmation_text
    )
}

/// Gentle notice for a theme the recent history keeps returning to.
pub fn render_recurring_theme(theme: &Theme) -> String {
    format!(
        "I notice you've been working through \"{}\" lately. That's totally normal - sometimes our souls need to process things in layers.",
        theme
    )
}

pub fn render_wisdom(wisdom: &WisdomVerse) -> String {
    format!(
        "\"{}\"\n  - {}\n\n{}\n\nReflect: {}",
        wisdom.verse, wisdom.source, wisdom.meaning, wisdom.reflection_question
    )
}

pub fn render_challenge(guidance: &ChallengeGuidance) -> String {
    format!(
        "{}\n\n\"{}\"\n  - {}\n\n{}\n\nToday: {}",
        guidance.challenge, guidance.verse, guidance.source, guidance.guidance, guidance.action
    )
}

pub fn render_journey(analysis: &JourneyAnalysis) -> String {
    format!(
        "Patterns\n{}\n\nGrowth\n{}\n\nFocus\n{}",
        analysis.patterns, analysis.growth, analysis.focus
    )
}

/// One line per entry, oldest first. Mood and venting show when the remote
/// collaborator recorded them.
pub fn render_history(entries: &[GuidanceEntry]) -> String {
    if entries.is_empty() {
        return "No reflections yet. Start with: soulscript reflect <what's on your heart>"
            .to_string();
    }
    entries
        .iter()
        .map(|e| {
            format!(
                "{}  {:<24}  {}  ({}){}",
                e.date,
                e.theme.label(),
                e.citation,
                input_preview(&e.input_text),
                feeling_tags(e)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn feeling_tags(entry: &GuidanceEntry) -> String {
    let mut tags = Vec::new();
    if let Some(mood) = entry.mood.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
        tags.push(format!("mood: {}", mood));
    }
    if entry.is_venting == Some(true) {
        tags.push("venting".to_string());
    }
    if tags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", tags.join(", "))
    }
}

fn input_preview(input: &str) -> String {
    const MAX_CHARS: usize = 40;
    if input.chars().count() <= MAX_CHARS {
        input.to_string()
    } else {
        let cut: String = input.chars().take(MAX_CHARS).collect();
        format!("{}...", cut.trim_end())
    }
}
