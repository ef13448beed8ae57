//! Centralized constants for the Akyl Jer workspace.
//!
//! Default values shared by the client, the terminal portal and the CLI.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Base URL used when neither the environment nor a flag provides one.
///
/// Matches the port the portal backend listens on in development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Environment Variables
// =============================================================================

/// Backend base URL.
pub const ENV_BASE_URL: &str = "AKYLJER_API_BASE_URL";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "AKYLJER_TIMEOUT";

/// Color theme name.
pub const ENV_THEME: &str = "AKYLJER_THEME";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval for animations in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Lifetime of informational and success toasts in seconds.
pub const DEFAULT_TOAST_TTL_SECS: u64 = 5;

/// Lifetime of error toasts in seconds.
pub const DEFAULT_ERROR_TOAST_TTL_SECS: u64 = 10;

/// Default directory for TUI log files.
pub const DEFAULT_LOG_DIR: &str = "logs";
