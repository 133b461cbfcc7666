//! Guidance for a named life challenge.

use super::context::GuidanceContext;
use super::GuidanceOutcome;
use crate::ai::{challenge_prompt, RemoteKind};
use crate::errors::AppResult;
use crate::guidance::{challenge_guidance, ChallengeGuidance, ChallengeId};
use tracing::info;

/// Returns guidance for `id`, remote when enabled and the fixed record otherwise.
pub fn challenge(
    id: ChallengeId,
    ctx: &mut GuidanceContext,
) -> AppResult<GuidanceOutcome<ChallengeGuidance>> {
    let local = challenge_guidance(id);
    info!("Fetching guidance for challenge: {}", id);

    let attempt = ctx.attempt_remote("challenge guidance", |client| {
        let prompt = challenge_prompt(&local.challenge);
        let result = client.request(RemoteKind::Challenge, &prompt)?.into_challenge()?;
        Ok(result.into_guidance(&local.challenge))
    });

    Ok(GuidanceOutcome::resolve(attempt, || local))
}
