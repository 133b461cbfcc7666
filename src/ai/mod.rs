//! Remote guidance through the Gemini generative language API.
//!
//! This module is the optional collaborator around the local guidance
//! engine. Every call here can fail; operations in [`crate::ops`] substitute
//! the local engine when they do.
//!
//! # Module Structure
//!
//! - `gemini`: blocking HTTP client for `generateContent`
//! - `prompts`: prompt builders for reflection, wisdom, challenge and journey
//! - `response`: typed parsing and validation of model answers
//!
//! # Example
//!
//! ```no_run
//! use soulscript::ai::{GeminiClient, GenerationOptions};
//!
//! let client = GeminiClient::new(
//!     "https://generativelanguage.googleapis.com",
//!     "my-key",
//!     "gemini-1.5-flash",
//! )?;
//! let text = client.generate("Say hello", GenerationOptions::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod gemini;
pub mod prompts;
pub mod response;

pub use gemini::{GeminiClient, GenerationOptions};
pub use prompts::{challenge_prompt, journey_prompt, reflection_prompt, wisdom_prompt, TimeContext, WisdomSeed};
pub use response::{
    parse_remote, parse_response, ChallengeResult, JourneyResult, ReflectionResult, RemoteKind,
    RemoteResult, WisdomResult,
};
