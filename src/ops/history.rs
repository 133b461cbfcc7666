//! Read back saved entries.

use super::context::GuidanceContext;
use crate::errors::AppResult;
use crate::guidance::GuidanceEntry;
use tracing::debug;

/// Returns the `limit` most recent entries, oldest first.
pub fn history(ctx: &GuidanceContext, limit: usize) -> AppResult<Vec<GuidanceEntry>> {
    let mut entries = ctx.store().load()?;
    let skip = entries.len().saturating_sub(limit);
    debug!("Showing {} of {} entries", entries.len() - skip, entries.len());
    entries.drain(..skip);
    Ok(entries)
}
