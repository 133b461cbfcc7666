//! Local guidance engine.
//!
//! Everything in this module is pure and synchronous: it classifies free text
//! into a theme, picks a verse from the compiled-in corpus, composes a meaning
//! and an affirmation, and summarizes a history of entries into a journey
//! narrative. Callers own all state; persistence lives in [`crate::store`].
//!
//! Randomized operations come in two forms: a convenience function using the
//! thread-local RNG, and a `*_with` variant taking any [`rand::Rng`].

pub mod challenge;
pub mod compose;
pub mod corpus;
pub mod entry;
pub mod journey;
pub mod selector;
pub mod theme;
pub mod wisdom;

pub use challenge::{challenge_guidance, challenge_guidance_by_name, ChallengeGuidance, ChallengeId};
pub use compose::{
    compose_affirmation, compose_affirmation_with, compose_guidance_entry,
    compose_guidance_entry_with, compose_meaning,
};
pub use corpus::{all_verses, find_by_citation, Tradition, VerseRecord};
pub use entry::{GuidanceEntry, GuidanceOrigin, Theme};
pub use journey::{analyze_journey, recurring_theme, JourneyAnalysis};
pub use selector::{select_verse, select_verse_with};
pub use theme::{classify, score, ThemeCategory};
pub use wisdom::{random_wisdom, random_wisdom_with, WisdomVerse};
