//! Narrative analysis over accumulated guidance entries.

use super::entry::{GuidanceEntry, Theme};
use crate::constants::{
    JOURNEY_GROWTH_AWAKENING, JOURNEY_GROWTH_DEEP, JOURNEY_INTEGRATION_MIN_ENTRIES,
    JOURNEY_LISTED_THEMES, JOURNEY_RECENT_WINDOW, JOURNEY_STUCK_MIN_ENTRIES,
    JOURNEY_VARIED_THEME_THRESHOLD, MILLIS_PER_DAY, RECURRING_THEME_MIN_ENTRIES,
    RECURRING_THEME_MIN_MATCHES,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Three-part summary of a user's journey. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyAnalysis {
    pub patterns: String,
    pub growth: String,
    pub focus: String,
}

const BEGINNING_PATTERNS: &str = "Your spiritual journey is just beginning, and what a beautiful step you've taken by creating space for reflection. Every great journey starts with a single step, and yours starts here.";
const BEGINNING_GROWTH: &str = "The very fact that you're here, seeking wisdom and wanting to understand yourself more deeply, shows incredible self-awareness and courage. This is already profound growth.";
const BEGINNING_FOCUS: &str = "Begin gently. Notice your thoughts and feelings without judgment. Like a loving friend observing a child at play, simply watch what arises in your heart and mind with curiosity and compassion.";

/// Statistics the narratives are built from.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyStats {
    /// Distinct themes in first-appearance order.
    pub unique_themes: Vec<Theme>,
    /// Most frequent theme; the first encountered wins a tie.
    pub most_common_theme: Theme,
    /// Whole days covered by the history, at least 1.
    pub time_span_days: i64,
    pub total_entries: usize,
    /// True when the recent window is long enough and entirely the dominant theme.
    pub stuck_in_pattern: bool,
}

impl JourneyStats {
    /// Computes statistics for a non-empty history. Returns `None` when empty.
    pub fn from_history(history: &[GuidanceEntry]) -> Option<Self> {
        if history.is_empty() {
            return None;
        }

        let mut counts: Vec<(&Theme, usize)> = Vec::new();
        for entry in history {
            match counts.iter_mut().find(|(theme, _)| **theme == entry.theme) {
                Some((_, count)) => *count += 1,
                None => counts.push((&entry.theme, 1)),
            }
        }

        let mut most_common = counts[0];
        for candidate in counts.iter().skip(1) {
            if candidate.1 > most_common.1 {
                most_common = *candidate;
            }
        }
        let most_common_theme = most_common.0.clone();

        // Span from the extreme timestamps so out-of-order input still yields
        // a sensible, positive day count.
        let (min_ms, max_ms) = history.iter().fold((i64::MAX, i64::MIN), |(lo, hi), e| {
            (lo.min(e.created_at_epoch_ms), hi.max(e.created_at_epoch_ms))
        });
        let span_ms = max_ms.saturating_sub(min_ms);
        let time_span_days = ceil_days(span_ms).max(1);

        let window_start = history.len().saturating_sub(JOURNEY_RECENT_WINDOW);
        let recent = &history[window_start..];
        let stuck_in_pattern = recent.len() >= JOURNEY_STUCK_MIN_ENTRIES
            && recent.iter().all(|e| e.theme == most_common_theme);

        Some(JourneyStats {
            unique_themes: counts.into_iter().map(|(theme, _)| theme.clone()).collect(),
            most_common_theme,
            time_span_days,
            total_entries: history.len(),
            stuck_in_pattern,
        })
    }
}

fn ceil_days(span_ms: i64) -> i64 {
    if span_ms <= 0 {
        return 0;
    }
    span_ms / MILLIS_PER_DAY + i64::from(span_ms % MILLIS_PER_DAY != 0)
}

fn patterns_text(stats: &JourneyStats) -> String {
    let dominant = &stats.most_common_theme;
    if stats.unique_themes.len() > JOURNEY_VARIED_THEME_THRESHOLD {
        let listed: Vec<&str> = stats
            .unique_themes
            .iter()
            .take(JOURNEY_LISTED_THEMES)
            .map(Theme::label)
            .collect();
        let others = if stats.unique_themes.len() > JOURNEY_LISTED_THEMES {
            ", and others"
        } else {
            ""
        };
        format!(
            "Over {} days, I've watched you courageously explore {} different aspects of your inner world: {}{}. Your soul keeps returning to {}, which tells me this area is ready for deep healing and transformation. This isn't a problem to solve - it's a gift to unwrap slowly.",
            stats.time_span_days,
            stats.unique_themes.len(),
            listed.join(", "),
            others,
            dominant
        )
    } else {
        format!(
            "You've been consistently working with {}, and I'm struck by your dedication to understanding this part of yourself. This focused attention shows you're ready to go deeper, to really transform this area of your life. Your persistence is beautiful.",
            dominant
        )
    }
}

fn growth_text(stats: &JourneyStats) -> String {
    if stats.total_entries >= JOURNEY_GROWTH_DEEP {
        format!(
            "Through {} reflections over {} days, I've witnessed something beautiful: your growing willingness to meet yourself with honesty and compassion. You're not just collecting insights - you're actually changing. The way you approach your challenges has evolved, becoming more gentle, more wise. This is real spiritual growth.",
            stats.total_entries, stats.time_span_days
        )
    } else if stats.total_entries >= JOURNEY_GROWTH_AWAKENING {
        format!(
            "In these {} entries, I see a soul awakening to its own wisdom. You're learning to pause, to seek guidance, to trust that your struggles have meaning. Each reflection is like a prayer, and prayers always change the one who prays.",
            stats.total_entries
        )
    } else {
        format!(
            "These {} early reflections show such courage. You're building a practice of self-awareness that will serve you for a lifetime. Every time you pause to reflect rather than just react, you're choosing growth over habit, wisdom over impulse.",
            stats.total_entries
        )
    }
}

fn focus_text(stats: &JourneyStats) -> String {
    if stats.stuck_in_pattern {
        format!(
            "I notice you've been working intensively with {} lately. This suggests you're in a deep healing process. Consider exploring how this theme shows up in different areas of your life - your relationships, your work, your dreams. Sometimes the same lesson appears in many disguises.",
            stats.most_common_theme
        )
    } else if stats.total_entries >= JOURNEY_INTEGRATION_MIN_ENTRIES {
        "You've built a beautiful foundation of self-awareness. This week, I invite you to focus on integration: How can you live the wisdom you've been receiving? What small daily practice could help you embody these insights more fully?".to_string()
    } else {
        "Continue following your heart's guidance about what needs attention. Your soul knows what it needs to process and heal. Trust the wisdom of your own unfolding, and remember that every reflection is a step toward greater freedom and peace.".to_string()
    }
}

/// The fixed narrative for a journey with no entries yet.
pub fn beginning_journey() -> JourneyAnalysis {
    JourneyAnalysis {
        patterns: BEGINNING_PATTERNS.to_string(),
        growth: BEGINNING_GROWTH.to_string(),
        focus: BEGINNING_FOCUS.to_string(),
    }
}

/// Summarizes patterns, growth and a suggested focus across `history`.
///
/// `history` is expected oldest first. Out-of-order input never panics; it
/// only shifts which theme wins a frequency tie and which entries count as
/// recent.
///
/// # Examples
///
/// ```
/// use soulscript::guidance::analyze_journey;
///
/// let analysis = analyze_journey(&[]);
/// assert!(analysis.patterns.contains("just beginning"));
/// ```
pub fn analyze_journey(history: &[GuidanceEntry]) -> JourneyAnalysis {
    let Some(stats) = JourneyStats::from_history(history) else {
        return beginning_journey();
    };

    debug!(
        entries = stats.total_entries,
        unique_themes = stats.unique_themes.len(),
        dominant = %stats.most_common_theme,
        days = stats.time_span_days,
        stuck = stats.stuck_in_pattern,
        "analyzed journey"
    );

    JourneyAnalysis {
        patterns: patterns_text(&stats),
        growth: growth_text(&stats),
        focus: focus_text(&stats),
    }
}

/// The theme the user keeps coming back to, if any.
///
/// Looks at the last five entries: when there are at least three and the
/// oldest of them shares its theme with at least one other, that theme recurs.
pub fn recurring_theme(history: &[GuidanceEntry]) -> Option<&Theme> {
    let recent = &history[history.len().saturating_sub(JOURNEY_RECENT_WINDOW)..];
    if recent.len() < RECURRING_THEME_MIN_ENTRIES {
        return None;
    }
    let first = &recent[0].theme;
    let matches = recent.iter().filter(|e| e.theme == *first).count();
    (matches >= RECURRING_THEME_MIN_MATCHES).then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::entry::GuidanceOrigin;
    use crate::guidance::theme::ThemeCategory;
    use chrono::NaiveDate;

    const DAY: i64 = MILLIS_PER_DAY;

    fn entry(theme: ThemeCategory, at_ms: i64) -> GuidanceEntry {
        GuidanceEntry {
            id: format!("id-{}", at_ms),
            created_at_epoch_ms: at_ms,
            date: NaiveDate::default(),
            input_text: String::new(),
            theme: Theme::Category(theme),
            verse_text: String::new(),
            citation: String::new(),
            meaning_text: String::new(),
            affirmation_text: String::new(),
            origin: GuidanceOrigin::Local,
            mood: None,
            is_venting: None,
        }
    }

    #[test]
    fn test_empty_history_is_fixed() {
        let a = analyze_journey(&[]);
        let b = analyze_journey(&[]);
        assert_eq!(a, b);
        assert_eq!(a, beginning_journey());
        assert!(!a.patterns.is_empty() && !a.growth.is_empty() && !a.focus.is_empty());
    }

    #[test]
    fn test_most_common_theme_by_count() {
        let history = vec![
            entry(ThemeCategory::FearAnxiety, 0),
            entry(ThemeCategory::FearAnxiety, DAY),
            entry(ThemeCategory::DoubtUncertainty, 2 * DAY),
        ];
        let stats = JourneyStats::from_history(&history).unwrap();
        assert_eq!(
            stats.most_common_theme,
            Theme::Category(ThemeCategory::FearAnxiety)
        );
    }

    #[test]
    fn test_most_common_theme_tie_goes_to_first() {
        let history = vec![
            entry(ThemeCategory::FearAnxiety, 0),
            entry(ThemeCategory::DoubtUncertainty, DAY),
        ];
        let stats = JourneyStats::from_history(&history).unwrap();
        assert_eq!(
            stats.most_common_theme,
            Theme::Category(ThemeCategory::FearAnxiety)
        );
    }

    #[test]
    fn test_time_span_rounds_up_and_is_at_least_one() {
        let same_moment = vec![entry(ThemeCategory::FearAnxiety, 5), entry(ThemeCategory::FearAnxiety, 5)];
        assert_eq!(JourneyStats::from_history(&same_moment).unwrap().time_span_days, 1);

        let just_over_two_days = vec![
            entry(ThemeCategory::FearAnxiety, 0),
            entry(ThemeCategory::FearAnxiety, 2 * DAY + 1),
        ];
        assert_eq!(
            JourneyStats::from_history(&just_over_two_days)
                .unwrap()
                .time_span_days,
            3
        );
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        let history = vec![
            entry(ThemeCategory::FearAnxiety, i64::MIN),
            entry(ThemeCategory::LossGrief, i64::MAX),
        ];
        let stats = JourneyStats::from_history(&history).unwrap();
        assert_eq!(stats.time_span_days, i64::MAX / DAY + 1);

        let analysis = analyze_journey(&history);
        assert!(analysis.patterns.starts_with("You've been consistently working with"));
        assert!(analysis.growth.starts_with("These 2 early reflections"));
    }

    #[test]
    fn test_recurring_theme_needs_three_entries_and_a_repeat_of_the_oldest() {
        let two = vec![
            entry(ThemeCategory::LossGrief, 0),
            entry(ThemeCategory::LossGrief, DAY),
        ];
        assert_eq!(recurring_theme(&two), None);

        let mut history = vec![
            entry(ThemeCategory::FearAnxiety, 0),
            entry(ThemeCategory::LossGrief, DAY),
            entry(ThemeCategory::GratitudeJoy, 2 * DAY),
        ];
        assert_eq!(recurring_theme(&history), None);

        history.push(entry(ThemeCategory::FearAnxiety, 3 * DAY));
        assert_eq!(
            recurring_theme(&history),
            Some(&Theme::Category(ThemeCategory::FearAnxiety))
        );

        // Only the last five count; the oldest Fear entry drops out of the window.
        history.push(entry(ThemeCategory::PeaceTranquility, 4 * DAY));
        history.push(entry(ThemeCategory::Forgiveness, 5 * DAY));
        assert_eq!(recurring_theme(&history), None);
    }

    #[test]
    fn test_varied_patterns_list_three_themes_and_others() {
        let history = vec![
            entry(ThemeCategory::FearAnxiety, 0),
            entry(ThemeCategory::LossGrief, DAY),
            entry(ThemeCategory::GratitudeJoy, 2 * DAY),
            entry(ThemeCategory::Forgiveness, 3 * DAY),
            entry(ThemeCategory::LossGrief, 4 * DAY),
        ];
        let analysis = analyze_journey(&history);
        assert!(analysis.patterns.contains("4 different aspects"));
        assert!(analysis
            .patterns
            .contains("Fear & Anxiety, Loss & Grief, Gratitude & Joy, and others"));
        assert!(analysis.patterns.contains("keeps returning to Loss & Grief"));
    }

    #[test]
    fn test_focused_patterns_name_only_dominant_theme() {
        let history = vec![
            entry(ThemeCategory::PeaceTranquility, 0),
            entry(ThemeCategory::GratitudeJoy, DAY),
        ];
        let analysis = analyze_journey(&history);
        assert!(analysis
            .patterns
            .starts_with("You've been consistently working with Peace & Tranquility"));
    }

    #[test]
    fn test_growth_tiers() {
        let make = |n: usize| -> Vec<GuidanceEntry> {
            (0..n)
                .map(|i| entry(ThemeCategory::FearAnxiety, i as i64 * DAY))
                .collect()
        };
        assert!(analyze_journey(&make(10)).growth.starts_with("Through 10 reflections"));
        assert!(analyze_journey(&make(5)).growth.starts_with("In these 5 entries"));
        assert!(analyze_journey(&make(2)).growth.starts_with("These 2 early reflections"));
    }

    #[test]
    fn test_stuck_pattern_flips_when_last_theme_changes() {
        let mut history = vec![
            entry(ThemeCategory::FearAnxiety, 0),
            entry(ThemeCategory::FearAnxiety, DAY),
            entry(ThemeCategory::FearAnxiety, 2 * DAY),
        ];
        let stuck = analyze_journey(&history);
        assert!(stuck.focus.contains("working intensively with Fear & Anxiety"));

        history[2] = entry(ThemeCategory::AngerFrustration, 2 * DAY);
        let unstuck = analyze_journey(&history);
        assert!(!unstuck.focus.contains("working intensively"));
        assert!(unstuck.focus.starts_with("Continue following"));
    }

    #[test]
    fn test_integration_focus_after_seven_entries() {
        let themes = [
            ThemeCategory::FearAnxiety,
            ThemeCategory::LossGrief,
            ThemeCategory::FearAnxiety,
            ThemeCategory::GratitudeJoy,
            ThemeCategory::FearAnxiety,
            ThemeCategory::LossGrief,
            ThemeCategory::PeaceTranquility,
        ];
        let history: Vec<_> = themes
            .iter()
            .enumerate()
            .map(|(i, t)| entry(*t, i as i64 * DAY))
            .collect();
        let analysis = analyze_journey(&history);
        assert!(analysis.focus.contains("integration"));
    }

    #[test]
    fn test_out_of_order_history_is_well_formed() {
        let history = vec![
            entry(ThemeCategory::LossGrief, 10 * DAY),
            entry(ThemeCategory::FearAnxiety, 0),
            entry(ThemeCategory::DoubtUncertainty, 3 * DAY),
            entry(ThemeCategory::LossGrief, -4 * DAY),
        ];
        let analysis = analyze_journey(&history);
        assert!(!analysis.patterns.is_empty());
        assert!(!analysis.growth.is_empty());
        assert!(!analysis.focus.is_empty());
        assert!(analysis.patterns.contains("Over 14 days"));
    }

    #[test]
    fn test_freeform_themes_are_counted() {
        let mut remote = entry(ThemeCategory::FearAnxiety, 0);
        remote.theme = Theme::Freeform("Life being life".to_string());
        let history = vec![remote.clone(), remote, entry(ThemeCategory::LossGrief, DAY)];
        let analysis = analyze_journey(&history);
        assert!(analysis.patterns.contains("Life being life"));
    }
}
