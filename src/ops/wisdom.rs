//! Offer a verse of wisdom outside of a reflection.

use super::context::{GuidanceContext, RemoteAttempt};
use super::GuidanceOutcome;
use crate::ai::{wisdom_prompt, RemoteKind, TimeContext, WisdomSeed};
use crate::errors::AppResult;
use crate::guidance::{random_wisdom_with, WisdomVerse};
use tracing::info;

/// Returns a random verse with an elaboration and a reflection question.
///
/// The remote collaborator is sampled with higher temperature and a random
/// context and focus so repeated calls vary.
pub fn wisdom(ctx: &mut GuidanceContext) -> AppResult<GuidanceOutcome<WisdomVerse>> {
    info!("Fetching random wisdom");

    let attempt = if ctx.remote_enabled() {
        let seed = WisdomSeed::random(ctx.rng());
        ctx.attempt_remote("wisdom", |client| {
            let prompt = wisdom_prompt(TimeContext::now().time_of_day, &seed);
            let result = client.request(RemoteKind::Wisdom, &prompt)?.into_wisdom()?;
            Ok(WisdomVerse::from(result))
        })
    } else {
        RemoteAttempt::Disabled
    };

    Ok(GuidanceOutcome::resolve(attempt, || random_wisdom_with(ctx.rng())))
}
