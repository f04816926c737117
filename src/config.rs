//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner seeded into the scrollback at startup and restored on clear.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Greeting line shown under the banner.
pub const WELCOME_TEXT: &str = "Type 'help' to see the list of available commands.";

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page title.
pub const APP_NAME: &str = "webterm";

/// Username part of the prompt.
pub const PS1_USERNAME: &str = "anon";

/// Hostname part of the prompt.
pub const PS1_HOSTNAME: &str = "webterm";

/// The prompt string rendered before the input line and echoed entries.
pub fn prompt() -> String {
    format!("{}@{}:~", PS1_USERNAME, PS1_HOSTNAME)
}

// =============================================================================
// Social Links (used by the github/twitter commands)
// =============================================================================

pub mod social {
    /// GitHub account opened by the `github` command.
    pub const GITHUB: &str = "webterm";
    /// Twitter account opened by the `twitter` command.
    pub const TWITTER: &str = "webterm";
}

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of scrollback entries to keep.
pub const MAX_SCROLLBACK: usize = 1000;

/// Maximum number of recallable submitted commands to keep.
pub const MAX_COMMAND_LOG: usize = 100;

/// Bounded handler execution time in milliseconds; a handler still pending
/// after this produces a "command timed out" line.
pub const COMMAND_TIMEOUT_MS: i32 = 10_000;
