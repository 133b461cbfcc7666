/*!
# SoulScript

SoulScript is a reflective journaling tool. You write a few words about what is
on your heart; it classifies them into a spiritual theme, picks a verse from the
Bhagavad Gita or the Bible, and answers with a short meaning and an
affirmation. Over time it summarizes your saved reflections into a journey
narrative.

## Core Features

- Local, deterministic theme classification over a fixed keyword table
- Verse selection grounded in the words you used
- Composed meaning and affirmation for each reflection
- Journey analysis across the saved history
- Random wisdom and guidance for named life challenges
- Optional remote guidance through the Gemini API, with local fallback

## Architecture

- `guidance`: the local engine (pure, synchronous, no state)
- `store`: persistence of the reflection history
- `ai`: the optional Gemini collaborator
- `ops`: one operation per command, combining the above
- `cli`, `config`, `logging`, `errors`, `constants`: application plumbing

## Usage Example

```rust,no_run
use soulscript::ops::{self, GuidanceContext};
use soulscript::Config;

fn main() -> soulscript::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let mut ctx = GuidanceContext::from_config(&config, true)?;
    let outcome = ops::reflect("I am anxious about tomorrow", &mut ctx)?;
    println!("{}", outcome.entry.verse_text);
    Ok(())
}
```
*/

/// Gemini client, prompts and response parsing
pub mod ai;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Local guidance engine
pub mod guidance;
/// Tracing subscriber setup
pub mod logging;
/// User-facing operations
pub mod ops;
/// Reflection history persistence
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use guidance::{analyze_journey, classify, compose_guidance_entry, select_verse};
