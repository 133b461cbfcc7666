//! Random verse of wisdom with a short elaboration and a question to sit with.

use super::corpus::{all_verses, VerseRecord};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A verse offered on its own, outside of a reflection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WisdomVerse {
    pub verse: String,
    pub source: String,
    pub meaning: String,
    pub reflection_question: String,
}

const GENERIC_MEANING: &str = "This ancient wisdom speaks to the timeless struggles and joys of the human heart. These words have comforted, challenged, and inspired countless souls throughout history, and they're here for you today.";
const GENERIC_QUESTION: &str =
    "How might this wisdom transform your perspective on a current challenge in your life?";

/// Elaboration and question keyed by citation.
const ELABORATIONS: &[(&str, &str, &str)] = &[
    (
        "Bhagavad Gita 2:47",
        "This is perhaps one of the most liberating teachings ever given. Krishna is telling us that we can pour our hearts into our work, our relationships, our dreams - and then release our grip on the outcomes. It's not about not caring; it's about caring so deeply that we trust the process. When you do your best and let go of the rest, you find a peace that no external result can disturb.",
        "What outcome are you gripping too tightly right now? How might your life change if you focused on giving your best effort while releasing attachment to the results?",
    ),
    (
        "Bhagavad Gita 2:20",
        "This profound truth touches the deepest part of our being. You are not just your body, your thoughts, or your circumstances. You are an eternal soul having a temporary human experience. Understanding this doesn't make loss less painful, but it reminds us that love, consciousness, and the essence of who we are transcends physical existence.",
        "How does remembering your eternal nature change the way you approach today's challenges? What would you do differently if you truly believed your essence is indestructible?",
    ),
    (
        "Bhagavad Gita 6:35",
        "Arjuna was expressing what we all feel - that the mind seems to have a mind of its own! Krishna's response is so compassionate: yes, it's difficult, but it's possible. Every time you notice your mind wandering and gently bring it back, you're building spiritual muscle. Be patient with yourself in this practice.",
        "What small, consistent practice could you begin today to create more peace in your mind? How might your life transform if you were the master of your thoughts rather than their victim?",
    ),
    (
        "Matthew 6:34",
        "Jesus understood human psychology perfectly. Our minds love to time-travel - replaying yesterday's mistakes or rehearsing tomorrow's disasters. But life only happens in the present moment. This isn't about being irresponsible; it's about trusting that you have everything you need for today's challenges.",
        "What future worry are you carrying today that you could release by focusing on the present moment? What gifts might you discover if you fully inhabited this day?",
    ),
    (
        "Psalm 46:10",
        "In our noisy, busy world, this verse is like a gentle hand on your shoulder, inviting you to pause. 'Be still' doesn't just mean stop moving - it means stop striving, stop trying to figure everything out, stop carrying burdens that aren't yours. In that stillness, you remember who you really are.",
        "When was the last time you sat in complete silence without trying to solve anything? What might emerge if you created more space for stillness in your life?",
    ),
    (
        "1 Corinthians 13:4-5",
        "Paul isn't just describing romantic love here - he's painting a picture of divine love, the kind that transforms everything it touches. This is love as a spiritual practice, love as a way of being in the world. When we love like this, we become channels of healing for everyone we meet.",
        "How can you practice this kind of love in your relationships today? What would change if you approached one difficult person in your life with this level of patience and kindness?",
    ),
];

/// Builds the wisdom record for a specific corpus verse.
pub fn wisdom_for(verse: &VerseRecord) -> WisdomVerse {
    let (meaning, question) = ELABORATIONS
        .iter()
        .find(|(citation, _, _)| *citation == verse.citation)
        .map(|(_, meaning, question)| (*meaning, *question))
        .unwrap_or((GENERIC_MEANING, GENERIC_QUESTION));

    WisdomVerse {
        verse: verse.text.to_string(),
        source: verse.citation.to_string(),
        meaning: meaning.to_string(),
        reflection_question: question.to_string(),
    }
}

/// A uniformly random corpus verse with its elaboration.
pub fn random_wisdom() -> WisdomVerse {
    random_wisdom_with(&mut rand::thread_rng())
}

/// Like [`random_wisdom`], drawing from `rng`.
pub fn random_wisdom_with<R: Rng + ?Sized>(rng: &mut R) -> WisdomVerse {
    let verses = all_verses();
    let verse = verses.choose(rng).unwrap_or(&verses[0]);
    wisdom_for(verse)
}
