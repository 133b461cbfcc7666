//! Verse selection for a classified theme.

use super::corpus::{all_verses, VerseRecord};
use super::theme::ThemeCategory;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Picks one corpus verse for `theme`, preferring verses grounded in the input.
///
/// Uses the thread-local RNG for the random fallbacks; see
/// [`select_verse_with`] for an injectable source.
pub fn select_verse(theme: ThemeCategory, input: &str) -> &'static VerseRecord {
    select_verse_with(theme, input, &mut rand::thread_rng())
}

/// Picks one corpus verse for `theme` using `rng` for random choices.
///
/// 1. Candidates are verses with a keyword that contains, or is contained in,
///    the lower-cased theme label.
/// 2. The first candidate (corpus order) with a keyword (declaration order)
///    occurring in the lower-cased input wins.
/// 3. Otherwise a uniformly random candidate, or a uniformly random corpus
///    verse when there are no candidates.
pub fn select_verse_with<R: Rng + ?Sized>(
    theme: ThemeCategory,
    input: &str,
    rng: &mut R,
) -> &'static VerseRecord {
    let theme_label = theme.label().to_lowercase();
    let lowered = input.to_lowercase();

    let candidates: Vec<&'static VerseRecord> = all_verses()
        .iter()
        .filter(|verse| {
            verse
                .theme_keywords
                .iter()
                .any(|k| theme_label.contains(k) || k.contains(theme_label.as_str()))
        })
        .collect();

    if let Some(verse) = candidates.iter().copied().find(|verse| {
        verse
            .theme_keywords
            .iter()
            .any(|k| lowered.contains(k))
    }) {
        debug!(citation = verse.citation, "verse grounded in input keyword");
        return verse;
    }

    let verse = match candidates.choose(rng) {
        Some(verse) => *verse,
        None => all_verses()
            .choose(rng)
            .unwrap_or(&all_verses()[0]),
    };
    debug!(
        citation = verse.citation,
        candidates = candidates.len(),
        "verse chosen at random"
    );
    verse
}
