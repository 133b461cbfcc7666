//! Summarize the saved history into a journey narrative.

use super::context::{GuidanceContext, RemoteAttempt};
use super::GuidanceOutcome;
use crate::ai::{journey_prompt, RemoteKind};
use crate::errors::AppResult;
use crate::guidance::entry::next_timestamp_ms;
use crate::guidance::{analyze_journey, JourneyAnalysis};
use tracing::info;

/// Analyzes the whole saved history.
///
/// An empty history always gets the local "just beginning" narrative; the
/// remote collaborator is only asked when there is something to look at.
///
/// # Errors
///
/// Returns an error if the history cannot be loaded.
pub fn journey(ctx: &mut GuidanceContext) -> AppResult<GuidanceOutcome<JourneyAnalysis>> {
    let history = ctx.store().load()?;
    info!("Analyzing journey over {} entries", history.len());

    if history.is_empty() {
        return Ok(GuidanceOutcome::new(analyze_journey(&history)));
    }

    let attempt = ctx.attempt_remote("journey analysis", |client| {
        let prompt = journey_prompt(&history, next_timestamp_ms());
        let result = client.request(RemoteKind::Journey, &prompt)?.into_journey()?;
        Ok(JourneyAnalysis::from(result))
    });

    Ok(GuidanceOutcome::resolve(attempt, || analyze_journey(&history)))
}
