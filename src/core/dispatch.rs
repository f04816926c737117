//! Command dispatch: the echo → resolve → settle protocol.
//!
//! Each submission moves through three phases:
//!
//! 1. **Echo** — the trimmed text is appended to the scrollback as a command
//!    echo, carrying the validity of its first token at submission time. An
//!    empty submission echoes a blank line and skips resolution entirely.
//! 2. **Resolve** — the first whitespace token, lower-cased, selects either
//!    the built-in clear action or a registry handler; anything else is an
//!    unknown command. Handler failures are caught here and turned into
//!    visible error lines; they never take the session down.
//! 3. **Settle** — the trimmed text is recorded for recall (including
//!    `clear`, which stays recallable) and the recall cursor resets. The
//!    input buffer was already snapshotted and cleared at submission time.
//!
//! [`submit`] drives all three phases for a single submission. The browser
//! layer reuses [`resolve`]/[`apply`] so it can race the handler against a
//! timeout between the phases.

use crate::core::registry::{CommandOutput, CommandRegistry, Handler};
use crate::core::session::Session;

/// The screen-clear control command, handled before registry lookup.
pub const CLEAR_COMMAND: &str = "clear";

/// Whether `name` would execute if submitted: the built-in clear or any
/// registered command. Pure query; also used for live input highlighting.
pub fn is_executable(name: &str, registry: &CommandRegistry) -> bool {
    let name = name.to_lowercase();
    name == CLEAR_COMMAND || registry.has(&name)
}

/// Outcome of the resolve phase.
pub enum Resolution {
    /// Empty submission; nothing to execute.
    Blank,
    /// The built-in clear action.
    Clear,
    /// A registry handler to invoke with its argument tokens.
    Invoke {
        name: String,
        handler: Handler,
        args: Vec<String>,
    },
    /// The command name resolved nowhere.
    NotFound(String),
}

/// How a handler invocation ended.
pub enum HandlerVerdict {
    /// The handler completed with output.
    Output(CommandOutput),
    /// The handler failed; the message becomes a `command error:` line.
    Failed(String),
    /// The handler was still pending when the timeout elapsed.
    TimedOut,
}

/// Echo phase: append the command echo and return the trimmed text.
pub fn echo(session: &mut Session, registry: &CommandRegistry, raw: &str) -> String {
    let trimmed = raw.trim().to_string();
    let valid = !trimmed.is_empty()
        && trimmed
            .split_whitespace()
            .next()
            .is_some_and(|name| is_executable(name, registry));
    session.push_echo(&trimmed, valid);
    trimmed
}

/// Resolve phase: tokenize and pick what to execute.
///
/// Taking the handler by value out of the immutable registry makes the
/// check-then-invoke gap of a shared mutable command table impossible; a
/// name either resolves to a callable handler here or it is `NotFound`.
pub fn resolve(trimmed: &str, registry: &CommandRegistry) -> Resolution {
    let mut tokens = trimmed.split_whitespace();
    let Some(first) = tokens.next() else {
        return Resolution::Blank;
    };

    let name = first.to_lowercase();
    if name == CLEAR_COMMAND {
        return Resolution::Clear;
    }

    match registry.get(&name) {
        Some(handler) => Resolution::Invoke {
            name,
            handler,
            args: tokens.map(str::to_string).collect(),
        },
        None => Resolution::NotFound(name),
    }
}

/// Reconcile a handler verdict into the scrollback.
pub fn apply(session: &mut Session, verdict: HandlerVerdict) {
    match verdict {
        HandlerVerdict::Output(CommandOutput::Text(text)) => session.push_output(&text),
        HandlerVerdict::Output(CommandOutput::Clear) => session.reset_screen(),
        HandlerVerdict::Failed(message) => {
            session.push_error(format!("command error: {message}"));
        }
        HandlerVerdict::TimedOut => session.push_error("command timed out"),
    }
}

/// The unknown-command line, with a hint toward `help`.
pub fn not_found_message(name: &str) -> String {
    format!("command not found: {name}. Try 'help' to get started.")
}

/// Run one full submission through echo → resolve → settle.
///
/// The handler is awaited without a timeout here; the browser layer adds
/// the bounded race on top of [`resolve`] and [`apply`].
pub async fn submit(session: &mut Session, registry: &CommandRegistry, raw: &str) {
    let trimmed = echo(session, registry, raw);

    match resolve(&trimmed, registry) {
        Resolution::Blank => {}
        Resolution::Clear => session.reset_screen(),
        Resolution::NotFound(name) => session.push_error(not_found_message(&name)),
        Resolution::Invoke { handler, args, .. } => {
            let verdict = match handler(args).await {
                Ok(output) => HandlerVerdict::Output(output),
                Err(e) => HandlerVerdict::Failed(e.to_string()),
            };
            apply(session, verdict);
        }
    }

    session.settle(&trimmed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CommandError;
    use crate::core::registry::handler;
    use crate::models::EntryData;

    fn test_registry() -> CommandRegistry {
        CommandRegistry::new([
            (
                "echo",
                handler(|args| async move { Ok(CommandOutput::Text(args.join(" "))) }),
            ),
            (
                "boom",
                handler(|_| async { Err(CommandError::failed("boom")) }),
            ),
            ("clear", handler(|_| async { Ok(CommandOutput::Clear) })),
            (
                "wipe",
                // A non-"clear" command that requests the clear action.
                handler(|_| async { Ok(CommandOutput::Clear) }),
            ),
        ])
    }

    fn test_session() -> Session {
        Session::with_banner(vec![EntryData::Text("banner".to_string())])
    }

    fn texts(session: &Session) -> Vec<EntryData> {
        session.entries().into_iter().map(|e| e.data).collect()
    }

    #[tokio::test]
    async fn test_submission_shape() {
        let registry = test_registry();
        let mut session = test_session();

        submit(&mut session, &registry, "  echo hello world  ").await;

        let entries = texts(&session);
        // banner + exactly one echo + exactly one output
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[1],
            EntryData::Command {
                prompt: session.prompt().to_string(),
                text: "echo hello world".to_string(),
                valid: true,
            }
        );
        assert_eq!(entries[2], EntryData::Text("hello world".to_string()));
        assert_eq!(
            session.command_log().to_vec(),
            vec!["echo hello world".to_string()]
        );
    }

    #[tokio::test]
    async fn test_empty_submission_echoes_blank_only() {
        let registry = test_registry();
        let mut session = test_session();

        submit(&mut session, &registry, "   ").await;

        let entries = texts(&session);
        assert_eq!(entries.len(), 2);
        assert!(matches!(
            &entries[1],
            EntryData::Command { text, .. } if text.is_empty()
        ));
        // An empty submission is never recorded for recall.
        assert!(session.command_log().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let registry = test_registry();
        let mut session = test_session();

        submit(&mut session, &registry, "frobnicate now").await;

        let entries = texts(&session);
        assert!(matches!(
            &entries[1],
            EntryData::Command { valid: false, .. }
        ));
        assert_eq!(
            entries[2],
            EntryData::Error(
                "command not found: frobnicate. Try 'help' to get started.".to_string()
            )
        );
        // The failed submission still settles.
        assert_eq!(
            session.command_log().to_vec(),
            vec!["frobnicate now".to_string()]
        );
    }

    #[tokio::test]
    async fn test_failing_handler_is_caught() {
        let registry = test_registry();
        let mut session = test_session();

        submit(&mut session, &registry, "boom").await;
        let entries = texts(&session);
        assert_eq!(entries[2], EntryData::Error("command error: boom".to_string()));

        // The session stays usable for the next submission.
        submit(&mut session, &registry, "echo ok").await;
        let entries = texts(&session);
        assert_eq!(entries[4], EntryData::Text("ok".to_string()));
    }

    #[tokio::test]
    async fn test_clear_restores_banner_and_is_recallable() {
        let registry = test_registry();
        let mut session = test_session();

        submit(&mut session, &registry, "echo one").await;
        submit(&mut session, &registry, "echo two").await;
        submit(&mut session, &registry, "clear").await;

        // Exactly the banner again, no matter how much came before.
        let entries = texts(&session);
        assert_eq!(entries, vec![EntryData::Text("banner".to_string())]);

        // "clear" itself lands in the recall log.
        assert_eq!(
            session.command_log().to_vec(),
            vec![
                "echo one".to_string(),
                "echo two".to_string(),
                "clear".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_out_of_band_clear_preserves_typed_input() {
        let registry = test_registry();
        let mut session = test_session();
        session.set_input("echo draft");

        // Ctrl+L submits the literal "clear" without snapshotting the
        // buffer; the half-typed line survives the screen reset.
        submit(&mut session, &registry, "clear").await;

        assert_eq!(session.input(), "echo draft");
        assert_eq!(texts(&session), vec![EntryData::Text("banner".to_string())]);
        assert_eq!(session.command_log().to_vec(), vec!["clear".to_string()]);
    }

    #[tokio::test]
    async fn test_clear_is_case_folded() {
        let registry = test_registry();
        let mut session = test_session();

        submit(&mut session, &registry, "CLEAR").await;
        assert_eq!(texts(&session), vec![EntryData::Text("banner".to_string())]);
    }

    #[tokio::test]
    async fn test_handler_requesting_clear_action() {
        let registry = test_registry();
        let mut session = test_session();

        submit(&mut session, &registry, "echo noise").await;
        submit(&mut session, &registry, "wipe").await;

        assert_eq!(texts(&session), vec![EntryData::Text("banner".to_string())]);
    }

    #[tokio::test]
    async fn test_command_token_is_case_folded_args_are_not() {
        let registry = test_registry();
        let mut session = test_session();

        submit(&mut session, &registry, "ECHO Hello").await;
        let entries = texts(&session);
        assert!(matches!(&entries[1], EntryData::Command { valid: true, .. }));
        assert_eq!(entries[2], EntryData::Text("Hello".to_string()));
    }

    #[tokio::test]
    async fn test_timeout_verdict_settles_normally() {
        let registry = test_registry();
        let mut session = test_session();

        // What the browser layer does when the race is lost.
        let trimmed = echo(&mut session, &registry, "echo slow");
        assert!(matches!(
            resolve(&trimmed, &registry),
            Resolution::Invoke { .. }
        ));
        apply(&mut session, HandlerVerdict::TimedOut);
        session.settle(&trimmed);

        let entries = texts(&session);
        assert_eq!(entries[2], EntryData::Error("command timed out".to_string()));
        assert_eq!(session.command_log().to_vec(), vec!["echo slow".to_string()]);
    }

    #[test]
    fn test_is_executable() {
        let registry = test_registry();
        assert!(is_executable("echo", &registry));
        assert!(is_executable("ECHO", &registry));
        assert!(is_executable("clear", &registry));
        assert!(is_executable("Clear", &registry));
        assert!(!is_executable("frobnicate", &registry));
    }

    #[test]
    fn test_resolve_blank() {
        let registry = test_registry();
        assert!(matches!(resolve("", &registry), Resolution::Blank));
    }
}
