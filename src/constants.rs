//! Constants used throughout the application.
//!
//! This module contains all constants used in the SoulScript application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "soulscript";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Reflective journaling with verse-based spiritual guidance";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Default number of entries shown by `history`.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

// Configuration Keys & Environment Variables
/// Environment variable for the SoulScript data directory.
pub const ENV_VAR_SOULSCRIPT_DIR: &str = "SOULSCRIPT_DIR";
/// Environment variable holding the Gemini API key.
pub const ENV_VAR_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
/// Environment variable overriding the Gemini model name.
pub const ENV_VAR_SOULSCRIPT_MODEL: &str = "SOULSCRIPT_MODEL";
/// Environment variable overriding the Gemini API base URL.
pub const ENV_VAR_SOULSCRIPT_API_URL: &str = "SOULSCRIPT_API_URL";
/// Environment variable holding an optional RNG seed.
pub const ENV_VAR_SOULSCRIPT_SEED: &str = "SOULSCRIPT_SEED";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for SoulScript data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".soulscript";

// Remote Guidance
/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
/// Timeout for a single remote generation request.
pub const REMOTE_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Number of past entries summarised in the reflection prompt.
pub const PROMPT_RECENT_REFLECTIONS: usize = 5;
/// Number of past entries summarised in the journey prompt.
pub const PROMPT_RECENT_JOURNEY: usize = 10;

// File System Parameters
/// File name of the persisted reflection history.
pub const HISTORY_FILE_NAME: &str = "reflections.json";
/// File name of the advisory lock guarding the history file.
pub const HISTORY_LOCK_FILE_NAME: &str = ".reflections.lock";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Journey Analysis
/// Number of most recent entries inspected for a stuck pattern.
pub const JOURNEY_RECENT_WINDOW: usize = 5;
/// Minimum recent-window length for the deep-pattern narrative.
pub const JOURNEY_STUCK_MIN_ENTRIES: usize = 3;
/// Unique-theme count above which the history counts as varied.
pub const JOURNEY_VARIED_THEME_THRESHOLD: usize = 2;
/// Number of unique themes named in the varied narrative.
pub const JOURNEY_LISTED_THEMES: usize = 3;
/// Entry count for the deepest growth tier.
pub const JOURNEY_GROWTH_DEEP: usize = 10;
/// Entry count for the middle growth tier.
pub const JOURNEY_GROWTH_AWAKENING: usize = 5;
/// Entry count from which the integration focus is suggested.
pub const JOURNEY_INTEGRATION_MIN_ENTRIES: usize = 7;
/// Minimum recent-window length before a recurring theme is pointed out.
pub const RECURRING_THEME_MIN_ENTRIES: usize = 3;
/// Recent entries that must share the window's first theme for it to recur.
pub const RECURRING_THEME_MIN_MATCHES: usize = 2;
/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "soulscript";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
