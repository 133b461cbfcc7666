#![allow(dead_code)]

use assert_cmd::Command;
use soulscript::guidance::{GuidanceEntry, GuidanceOrigin, Theme, ThemeCategory};
use std::path::Path;

/// Creates a `Command` for the `soulscript` binary with a clean environment
/// whose history lives in `data_dir`. No API key is set, so guidance is local.
pub fn base_soulscript_command(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("soulscript").expect("soulscript binary not built");
    configure_soulscript_command(&mut cmd, data_dir);
    cmd
}

/// Applies the standard isolated environment to an existing `Command`.
pub fn configure_soulscript_command(cmd: &mut Command, data_dir: &Path) {
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    if let Ok(tmpdir) = std::env::var("TMPDIR") {
        cmd.env("TMPDIR", tmpdir);
    }
    cmd.env("HOME", data_dir)
        .env("SOULSCRIPT_DIR", data_dir)
        .env("SOULSCRIPT_SEED", "7")
        .env("RUST_LOG", "warn");
}

/// A minimal local entry with the given theme and timestamp.
pub fn entry_with_theme(theme: ThemeCategory, created_at_epoch_ms: i64) -> GuidanceEntry {
    GuidanceEntry {
        id: format!("test-{}", created_at_epoch_ms),
        created_at_epoch_ms,
        date: soulscript::guidance::entry::local_date_for(created_at_epoch_ms),
        input_text: "test input".to_string(),
        theme: Theme::Category(theme),
        verse_text: "Be still".to_string(),
        citation: "Psalm 46:10".to_string(),
        meaning_text: "meaning".to_string(),
        affirmation_text: "affirmation".to_string(),
        origin: GuidanceOrigin::Local,
        mood: None,
        is_venting: None,
    }
}
