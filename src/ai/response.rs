//! Typed parsing of model answers.
//!
//! The model is asked for bare JSON but often wraps it in prose or code
//! fences, so the outermost `{...}` is sliced out first. The slice is then
//! deserialized into the expected shape and its required fields are checked.

use super::gemini::GenerationOptions;
use crate::errors::ParseError;
use crate::guidance::entry::{local_date_for, next_timestamp_ms};
use crate::guidance::{ChallengeGuidance, GuidanceEntry, GuidanceOrigin, JourneyAnalysis, Theme, WisdomVerse};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

/// A reflection generated by the model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionResult {
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub verse: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub affirmation: String,
    #[serde(default)]
    pub is_venting: Option<bool>,
    #[serde(default)]
    pub mood: Option<String>,
}

impl ReflectionResult {
    /// Turns the model's reflection into a history entry for `input`.
    pub fn into_entry(self, input: &str) -> GuidanceEntry {
        let created_at_epoch_ms = next_timestamp_ms();
        GuidanceEntry {
            id: Uuid::new_v4().to_string(),
            created_at_epoch_ms,
            date: local_date_for(created_at_epoch_ms),
            input_text: input.to_string(),
            theme: Theme::from(self.theme),
            verse_text: self.verse,
            citation: self.source,
            meaning_text: self.meaning,
            affirmation_text: self.affirmation,
            origin: GuidanceOrigin::Remote,
            mood: self.mood.filter(|m| !m.trim().is_empty()),
            is_venting: self.is_venting,
        }
    }
}

/// A wisdom verse chosen by the model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WisdomResult {
    #[serde(default)]
    pub verse: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub reflection_question: String,
}

impl From<WisdomResult> for WisdomVerse {
    fn from(result: WisdomResult) -> Self {
        WisdomVerse {
            verse: result.verse,
            source: result.source,
            meaning: result.meaning,
            reflection_question: result.reflection_question,
        }
    }
}

/// Challenge guidance written by the model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResult {
    /// May be empty; callers fill in the challenge they asked about.
    #[serde(default)]
    pub challenge: String,
    #[serde(default)]
    pub verse: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub guidance: String,
    #[serde(default)]
    pub action: String,
}

impl ChallengeResult {
    pub fn into_guidance(self, asked: &str) -> ChallengeGuidance {
        let challenge = if self.challenge.trim().is_empty() {
            asked.to_string()
        } else {
            self.challenge
        };
        ChallengeGuidance {
            challenge,
            verse: self.verse,
            source: self.source,
            guidance: self.guidance,
            action: self.action,
        }
    }
}

/// A journey analysis written by the model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JourneyResult {
    #[serde(default)]
    pub patterns: String,
    #[serde(default)]
    pub growth: String,
    #[serde(default)]
    pub focus: String,
}

impl From<JourneyResult> for JourneyAnalysis {
    fn from(result: JourneyResult) -> Self {
        JourneyAnalysis {
            patterns: result.patterns,
            growth: result.growth,
            focus: result.focus,
        }
    }
}

/// Which answer shape a call site expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteKind {
    Reflection,
    Wisdom,
    Challenge,
    Journey,
}

impl RemoteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RemoteKind::Reflection => "reflection",
            RemoteKind::Wisdom => "wisdom",
            RemoteKind::Challenge => "challenge",
            RemoteKind::Journey => "journey",
        }
    }

    /// Sampling used for this kind of call. Wisdom is sampled more loosely
    /// so repeated requests vary.
    pub fn generation_options(self) -> GenerationOptions {
        match self {
            RemoteKind::Wisdom => GenerationOptions::creative(),
            _ => GenerationOptions::default(),
        }
    }
}

/// Any parsed model answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteResult {
    Reflection(ReflectionResult),
    Wisdom(WisdomResult),
    Challenge(ChallengeResult),
    Journey(JourneyResult),
}

impl RemoteResult {
    pub fn kind(&self) -> RemoteKind {
        match self {
            RemoteResult::Reflection(_) => RemoteKind::Reflection,
            RemoteResult::Wisdom(_) => RemoteKind::Wisdom,
            RemoteResult::Challenge(_) => RemoteKind::Challenge,
            RemoteResult::Journey(_) => RemoteKind::Journey,
        }
    }

    fn wrong_kind(&self, expected: RemoteKind) -> ParseError {
        ParseError::WrongKind {
            expected: expected.as_str(),
            found: self.kind().as_str(),
        }
    }

    pub fn into_reflection(self) -> Result<ReflectionResult, ParseError> {
        match self {
            RemoteResult::Reflection(result) => Ok(result),
            other => Err(other.wrong_kind(RemoteKind::Reflection)),
        }
    }

    pub fn into_wisdom(self) -> Result<WisdomResult, ParseError> {
        match self {
            RemoteResult::Wisdom(result) => Ok(result),
            other => Err(other.wrong_kind(RemoteKind::Wisdom)),
        }
    }

    pub fn into_challenge(self) -> Result<ChallengeResult, ParseError> {
        match self {
            RemoteResult::Challenge(result) => Ok(result),
            other => Err(other.wrong_kind(RemoteKind::Challenge)),
        }
    }

    pub fn into_journey(self) -> Result<JourneyResult, ParseError> {
        match self {
            RemoteResult::Journey(result) => Ok(result),
            other => Err(other.wrong_kind(RemoteKind::Journey)),
        }
    }
}

/// An answer shape with required fields.
pub trait RemoteShape: DeserializeOwned {
    /// Fields that must be non-blank, with their JSON names.
    fn required(&self) -> Vec<(&'static str, &str)>;
}

impl RemoteShape for ReflectionResult {
    fn required(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("verse", self.verse.as_str()),
            ("source", self.source.as_str()),
            ("meaning", self.meaning.as_str()),
            ("affirmation", self.affirmation.as_str()),
        ]
    }
}

impl RemoteShape for WisdomResult {
    fn required(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("verse", self.verse.as_str()),
            ("source", self.source.as_str()),
            ("meaning", self.meaning.as_str()),
            ("reflectionQuestion", self.reflection_question.as_str()),
        ]
    }
}

impl RemoteShape for ChallengeResult {
    fn required(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("verse", self.verse.as_str()),
            ("source", self.source.as_str()),
            ("guidance", self.guidance.as_str()),
            ("action", self.action.as_str()),
        ]
    }
}

impl RemoteShape for JourneyResult {
    fn required(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("patterns", self.patterns.as_str()),
            ("growth", self.growth.as_str()),
            ("focus", self.focus.as_str()),
        ]
    }
}

/// Slices from the first `{` to the last `}` in `text`.
pub fn extract_json(text: &str) -> Result<&str, ParseError> {
    let start = text.find('{').ok_or(ParseError::NoJson)?;
    let end = text.rfind('}').ok_or(ParseError::NoJson)?;
    if end < start {
        return Err(ParseError::NoJson);
    }
    Ok(&text[start..=end])
}

/// Parses `text` into the shape `T` and checks its required fields.
///
/// # Errors
///
/// - `ParseError::NoJson` if there is no `{...}` in the text
/// - `ParseError::Malformed` if the JSON does not fit `T`
/// - `ParseError::MissingField` if a required field is blank
pub fn parse_response<T: RemoteShape>(text: &str) -> Result<T, ParseError> {
    let json = extract_json(text)?;
    let parsed: T = serde_json::from_str(json).map_err(ParseError::Malformed)?;
    if let Some((field, _)) = parsed
        .required()
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
    {
        return Err(ParseError::MissingField(field));
    }
    Ok(parsed)
}

/// Parses `text` into the tagged result for `kind`.
pub fn parse_remote(kind: RemoteKind, text: &str) -> Result<RemoteResult, ParseError> {
    Ok(match kind {
        RemoteKind::Reflection => RemoteResult::Reflection(parse_response(text)?),
        RemoteKind::Wisdom => RemoteResult::Wisdom(parse_response(text)?),
        RemoteKind::Challenge => RemoteResult::Challenge(parse_response(text)?),
        RemoteKind::Journey => RemoteResult::Journey(parse_response(text)?),
    })
}
