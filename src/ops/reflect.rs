//! Compose guidance for a journaling submission and record it.

use super::context::{GuidanceContext, RemoteAttempt};
use crate::ai::{reflection_prompt, RemoteKind, TimeContext};
use crate::errors::{AppError, AppResult};
use crate::guidance::{compose_guidance_entry_with, recurring_theme, GuidanceEntry, Theme};
use tracing::{debug, info};

/// The saved entry and, when the remote call failed, why.
#[derive(Debug, Clone)]
pub struct ReflectOutcome {
    pub entry: GuidanceEntry,
    pub fallback_reason: Option<String>,
    /// A theme the recent history keeps returning to, counting the new entry.
    pub recurring_theme: Option<Theme>,
}

/// Generates guidance for `input` and appends it to the history.
///
/// # Flow
///
/// 1. Trim the input and reject it if nothing is left
/// 2. Ask the remote collaborator, if enabled, with recent history as context
/// 3. Compose locally when remote is off or fails
/// 4. Append the entry to the history store
/// 5. Note a theme the recent history keeps returning to
///
/// # Errors
///
/// Returns an error if:
/// - The input is empty or whitespace
/// - The history cannot be loaded or saved
pub fn reflect(input: &str, ctx: &mut GuidanceContext) -> AppResult<ReflectOutcome> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AppError::Input(
            "Nothing to reflect on. Please share a few words about what's on your heart."
                .to_string(),
        ));
    }

    info!("Generating reflection ({} chars)", input.len());

    let mut history = ctx.store().load()?;

    let attempt = ctx.attempt_remote("reflection", |client| {
        let prompt = reflection_prompt(input, &history, &TimeContext::now());
        let result = client.request(RemoteKind::Reflection, &prompt)?.into_reflection()?;
        Ok(result.into_entry(input))
    });

    let (entry, fallback_reason) = match attempt {
        RemoteAttempt::Succeeded(entry) => (entry, None),
        RemoteAttempt::Disabled => (compose_guidance_entry_with(input, ctx.rng()), None),
        RemoteAttempt::Failed(reason) => {
            (compose_guidance_entry_with(input, ctx.rng()), Some(reason))
        }
    };

    debug!(id = %entry.id, theme = %entry.theme, origin = ?entry.origin, "composed entry");
    ctx.store().append(entry.clone())?;

    info!("Saved reflection {}", entry.id);
    history.push(entry.clone());
    let recurring_theme = recurring_theme(&history).cloned();
    if let Some(theme) = &recurring_theme {
        debug!(%theme, "recurring theme in recent history");
    }

    Ok(ReflectOutcome {
        entry,
        fallback_reason,
        recurring_theme,
    })
}
