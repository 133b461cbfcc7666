//! Fixed guidance for a small set of named life challenges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a life challenge, as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChallengeId {
    Fear,
    Anger,
    Doubt,
    Attachment,
    Forgiveness,
    Purpose,
    Love,
    Loss,
}

impl ChallengeId {
    pub const ALL: [ChallengeId; 8] = [
        ChallengeId::Fear,
        ChallengeId::Anger,
        ChallengeId::Doubt,
        ChallengeId::Attachment,
        ChallengeId::Forgiveness,
        ChallengeId::Purpose,
        ChallengeId::Love,
        ChallengeId::Loss,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeId::Fear => "fear",
            ChallengeId::Anger => "anger",
            ChallengeId::Doubt => "doubt",
            ChallengeId::Attachment => "attachment",
            ChallengeId::Forgiveness => "forgiveness",
            ChallengeId::Purpose => "purpose",
            ChallengeId::Love => "love",
            ChallengeId::Loss => "loss",
        }
    }
}

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a challenge id is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChallenge(pub String);

impl fmt::Display for UnknownChallenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = ChallengeId::ALL.iter().map(ChallengeId::as_str).collect();
        write!(
            f,
            "unknown challenge '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownChallenge {}

impl FromStr for ChallengeId {
    type Err = UnknownChallenge;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ChallengeId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| UnknownChallenge(s.to_string()))
    }
}

/// Guidance shown for one life challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeGuidance {
    pub challenge: String,
    pub verse: String,
    pub source: String,
    pub guidance: String,
    pub action: String,
}

struct ChallengeText {
    challenge: &'static str,
    verse: &'static str,
    source: &'static str,
    guidance: &'static str,
    action: &'static str,
}

fn text_for(id: ChallengeId) -> ChallengeText {
    match id {
        ChallengeId::Fear => ChallengeText {
            challenge: "Fear & Anxiety",
            verse: "Therefore do not worry about tomorrow, for tomorrow will worry about itself. Each day has enough trouble of its own.",
            source: "Matthew 6:34",
            guidance: "I understand how overwhelming fear can feel - like a storm cloud that follows you everywhere. But here's what I've learned from walking with many souls through their darkest valleys: fear is often our mind's way of trying to protect us from imaginary futures. Jesus knew this about human nature when he spoke these words. He wasn't dismissing your concerns; he was offering you a lifeline. Today, right now, you have everything you need. Your breath, your heartbeat, this moment - these are gifts. When anxiety whispers 'what if,' try whispering back 'what is.' What is real right now? You are safe in this moment. You are loved. You are enough.",
            action: "Place your hand on your heart and feel it beating. Say aloud: 'In this moment, I am safe. In this moment, I am loved.' Repeat this whenever fear visits you today.",
        },
        ChallengeId::Anger => ChallengeText {
            challenge: "Anger & Frustration",
            verse: "Those who are free from anger and all material desires, who are self-realized, self-disciplined and constantly endeavoring for perfection, are assured of liberation in the Supreme.",
            source: "Bhagavad Gita 5:26",
            guidance: "Your anger is not your enemy - it's a messenger. It's telling you that something precious to you feels threatened or violated. I see the fire in your heart, and I want you to know that feeling angry doesn't make you a bad person. Even Krishna acknowledged that anger is part of the human experience. The wisdom here isn't about never feeling angry; it's about not letting anger possess you. When you feel that familiar heat rising, pause and ask: 'What am I really protecting here?' Often, beneath anger lies hurt, fear, or a deep love for justice. Honor that. Then choose how to respond from your highest self, not your wounded self.",
            action: "When anger arises today, take three deep breaths and ask: 'What is my anger trying to protect?' Write down the answer, then choose one loving action you can take instead of reacting.",
        },
        ChallengeId::Doubt => ChallengeText {
            challenge: "Doubt & Uncertainty",
            verse: "Be still, and know that I am God; I will be exalted among the nations, I will be exalted in the earth.",
            source: "Psalm 46:10",
            guidance: "Oh, sweet soul, I feel the weight of your uncertainty. Doubt can feel like walking through fog - you can't see where you're going, and every step feels uncertain. But here's a secret I've learned: doubt often visits the most thoughtful hearts. You doubt because you care deeply about making the right choices. The psalmist knew this feeling too, which is why he wrote about being still. In our noisy world, we think we need to figure everything out immediately. But sometimes, the most profound answers come not through thinking harder, but through creating space for wisdom to emerge. Your path will become clear, one step at a time. Trust the process of your unfolding.",
            action: "Sit quietly for 5 minutes today without trying to solve anything. Simply breathe and repeat: 'I trust that clarity will come.' Notice what arises in the silence.",
        },
        ChallengeId::Attachment => ChallengeText {
            challenge: "Attachment & Letting Go",
            verse: "You have a right to perform your prescribed duty, but you are not entitled to the fruits of your actions. Never consider yourself the cause of the results of your activities, and never be attached to not doing your duty.",
            source: "Bhagavad Gita 2:47",
            guidance: "I see you holding on so tightly to something or someone, and I understand why. When we love deeply, when we care passionately, letting go feels like betrayal. But Krishna's wisdom here is like a gentle hand on your shoulder, saying: 'You can love fully without grasping.' Think of how the sun gives its light freely, without demanding that every flower bloom perfectly. Your love, your effort, your care - these are gifts you give to the world. The outcomes? They're not yours to control, and that's actually a relief. You can pour your heart into your relationships, your work, your dreams, and then trust that the universe knows what it's doing with your offerings.",
            action: "Write down one thing you're holding too tightly. Then write: 'I offer this with love and trust the outcome.' Place this note somewhere you'll see it daily.",
        },
        ChallengeId::Forgiveness => ChallengeText {
            challenge: "Forgiveness",
            verse: "Love is patient, love is kind. It does not envy, it does not boast, it is not proud. It does not dishonor others, it is not self-seeking, it is not easily angered, it keeps no record of wrongs.",
            source: "1 Corinthians 13:4-5",
            guidance: "Forgiveness is perhaps the most misunderstood gift we can give ourselves. I want you to know that forgiveness doesn't mean what happened was okay. It doesn't mean you have to trust someone who hurt you again. Forgiveness is you saying: 'I refuse to let this pain define my heart.' Paul's words about love keeping no record of wrongs - this is about your freedom, not theirs. When you forgive, you're not excusing their behavior; you're choosing to write a new story for your life. One where you're the author of your peace, not a victim of their actions. This process takes time, and that's okay. Healing happens in layers, like an onion. Be patient with yourself.",
            action: "Think of someone you need to forgive (including yourself). Write them a letter you'll never send, expressing all your feelings. Then write: 'I choose my peace over this pain.'",
        },
        ChallengeId::Purpose => ChallengeText {
            challenge: "Life Purpose",
            verse: "For I know the plans I have for you, declares the Lord, plans to prosper you and not to harm you, to give you hope and a future.",
            source: "Jeremiah 29:11",
            guidance: "Beautiful soul, I see you searching for your purpose like someone looking for stars in daylight. But here's what I've discovered: your purpose isn't hiding from you. It's woven into every act of kindness you've ever shown, every moment you've chosen love over fear, every time you've helped someone feel less alone. God's plans for you aren't some mysterious puzzle you need to solve; they're unfolding in every choice you make to bring more light into the world. Your purpose might not look like what you expected - it might be quieter, more ordinary, more beautiful than you imagined. Trust that your life has meaning simply because you're here, breathing, caring, growing.",
            action: "List three ways you've made someone's day better recently, no matter how small. This is your purpose in action. Look for one more opportunity today.",
        },
        ChallengeId::Love => ChallengeText {
            challenge: "Love & Relationships",
            verse: "The Lord your God is with you, the Mighty Warrior who saves. He will take great delight in you; in his love he will no longer rebuke you, but will rejoice over you with singing.",
            source: "Zephaniah 3:17",
            guidance: "Love can feel like the most wonderful and terrifying thing in the world, can't it? Your heart is so tender, so open, and sometimes that feels dangerous. But I want you to know something beautiful: you are already so deeply loved that the Creator of the universe sings over you. Yes, sings! Like a parent delighting in their child's first steps. This love isn't something you have to earn or prove you're worthy of. It just is. When you know this love in your bones, it changes how you love others. You stop trying to get love and start giving it freely. You stop fearing rejection because you know your worth isn't determined by whether someone chooses you back.",
            action: "Look in the mirror today and say: 'I am deeply loved and worthy of love.' Then share that love with someone else through a kind word or gesture.",
        },
        ChallengeId::Loss => ChallengeText {
            challenge: "Loss & Grief",
            verse: "For the soul there is neither birth nor death. It is not slain when the body is slain.",
            source: "Bhagavad Gita 2:20",
            guidance: "Oh, precious heart, I feel the depth of your grief. Loss can feel like a part of your soul has been torn away, leaving a wound that throbs with every breath. Krishna's words here aren't meant to minimize your pain - they're meant to remind you that love is eternal. What you're grieving isn't gone; it's transformed. The love you shared, the memories you created, the way they changed you - these live on in the eternal part of you. Grief is love with nowhere to go, and it's holy. Let yourself feel it fully. Cry when you need to. Rage when you need to. And know that healing doesn't mean forgetting - it means learning to carry your love in a new way.",
            action: "Create a small ritual to honor what you've lost - light a candle, write a letter, or simply sit quietly and remember with gratitude. Let your grief be a prayer.",
        },
    }
}

/// The fixed guidance record for `id`.
pub fn challenge_guidance(id: ChallengeId) -> ChallengeGuidance {
    let text = text_for(id);
    ChallengeGuidance {
        challenge: text.challenge.to_string(),
        verse: text.verse.to_string(),
        source: text.source.to_string(),
        guidance: text.guidance.to_string(),
        action: text.action.to_string(),
    }
}

/// Looks up guidance by id string, using fear guidance for unknown ids.
pub fn challenge_guidance_by_name(name: &str) -> ChallengeGuidance {
    challenge_guidance(name.parse().unwrap_or(ChallengeId::Fear))
}
