//! The built-in command set.
//!
//! These are ordinary registry handlers; the engine knows nothing about
//! them beyond the [`CommandRegistry`] contract. Handlers that open
//! external pages go through [`crate::utils::dom`] and fail with
//! [`CommandError::NoWindow`] outside a browsing context.

use crate::config::{PS1_USERNAME, social};
use crate::core::error::CommandError;
use crate::core::registry::{CommandOutput, CommandRegistry, Handler, handler};
use crate::utils::dom;

/// Build the default registry: `clear`, `date`, `echo`, `github`, `google`,
/// `help`, `twitter`, `whoami`.
pub fn default_registry() -> CommandRegistry {
    let mut entries: Vec<(&'static str, Handler)> = vec![
        ("clear", handler(|_| async { Ok(CommandOutput::Clear) })),
        ("date", handler(date)),
        ("echo", handler(echo)),
        ("github", handler(github)),
        ("google", handler(google)),
        ("twitter", handler(twitter)),
        ("whoami", handler(whoami)),
    ];

    // `help` lists every name, itself included, so the listing is fixed
    // before the closure is built.
    let mut names: Vec<&'static str> = entries.iter().map(|(name, _)| *name).collect();
    names.push("help");
    names.sort_unstable();
    let listing = format!("available commands: {}", names.join(", "));
    entries.push((
        "help",
        handler(move |_| {
            let listing = listing.clone();
            async move { Ok(CommandOutput::Text(listing)) }
        }),
    ));

    CommandRegistry::new(entries)
}

async fn echo(args: Vec<String>) -> Result<CommandOutput, CommandError> {
    Ok(CommandOutput::Text(args.join(" ")))
}

async fn whoami(_args: Vec<String>) -> Result<CommandOutput, CommandError> {
    Ok(CommandOutput::text(PS1_USERNAME))
}

async fn date(_args: Vec<String>) -> Result<CommandOutput, CommandError> {
    let now: String = js_sys::Date::new_0().to_string().into();
    Ok(CommandOutput::Text(now))
}

async fn github(_args: Vec<String>) -> Result<CommandOutput, CommandError> {
    dom::open_external(&format!("https://github.com/{}/", social::GITHUB))?;
    Ok(CommandOutput::text("Opening github..."))
}

async fn twitter(_args: Vec<String>) -> Result<CommandOutput, CommandError> {
    dom::open_external(&format!("https://twitter.com/{}/", social::TWITTER))?;
    Ok(CommandOutput::text("Opening twitter..."))
}

async fn google(args: Vec<String>) -> Result<CommandOutput, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingOperand("search query"));
    }
    let query = args.join(" ");
    dom::open_external(&format!("https://google.com/search?q={query}"))?;
    Ok(CommandOutput::Text(format!("Searching google for {query}...")))
}
