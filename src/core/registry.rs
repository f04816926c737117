//! Immutable command registry mapping names to async handlers.
//!
//! The registry is constructed once at session start and injected into the
//! engine; there is no dynamic registration or removal. Lookup is
//! case-sensitive (names are stored lowercase; the dispatcher lower-cases
//! the extracted command token before lookup).

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::error::CommandError;

/// What a handler produced.
///
/// The clear action is a dedicated variant rather than a reserved output
/// string, so a handler can legitimately print the word "clear".
/// Serializable so the browser layer can round-trip it through a JS promise
/// when racing against a timeout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CommandOutput {
    /// Text to append to the scrollback (may contain newlines).
    Text(String),
    /// The caller must clear the screen instead of displaying output.
    Clear,
}

impl CommandOutput {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

/// Boxed future returned by a command handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<CommandOutput, CommandError>>>>;

/// An async command handler: argument tokens in, tagged output out.
///
/// `Rc` rather than `Arc`: handlers run on the single-threaded WASM event
/// loop and may close over browser resources.
pub type Handler = Rc<dyn Fn(Vec<String>) -> HandlerFuture>;

/// Wrap an async function as a [`Handler`].
pub fn handler<F, Fut>(f: F) -> Handler
where
    F: Fn(Vec<String>) -> Fut + 'static,
    Fut: Future<Output = Result<CommandOutput, CommandError>> + 'static,
{
    Rc::new(move |args| Box::pin(f(args)))
}

/// Fixed mapping from command name to handler.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    handlers: BTreeMap<String, Handler>,
}

impl CommandRegistry {
    /// Build a registry from (name, handler) pairs.
    ///
    /// Names are stored as given; by convention they are lowercase so the
    /// dispatcher's case-folded lookup resolves them.
    pub fn new(entries: impl IntoIterator<Item = (&'static str, Handler)>) -> Self {
        let handlers = entries
            .into_iter()
            .map(|(name, h)| (name.to_string(), h))
            .collect();
        Self { handlers }
    }

    /// Whether `name` resolves to a handler. Case-sensitive.
    pub fn has(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Look up the handler for `name`. Case-sensitive.
    pub fn get(&self, name: &str) -> Option<Handler> {
        self.handlers.get(name).cloned()
    }

    /// All registered names, sorted. Used by `help` and completion.
    pub fn names(&self) -> Vec<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_registry() -> CommandRegistry {
        CommandRegistry::new([
            ("echo", handler(|args| async move {
                Ok(CommandOutput::Text(args.join(" ")))
            })),
            ("clear", handler(|_| async { Ok(CommandOutput::Clear) })),
        ])
    }

    #[test]
    fn test_has_and_get() {
        let reg = echo_registry();
        assert!(reg.has("echo"));
        assert!(reg.get("echo").is_some());
        assert!(!reg.has("missing"));
        assert!(reg.get("missing").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let reg = echo_registry();
        assert!(!reg.has("ECHO"));
        assert!(reg.get("Echo").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let reg = echo_registry();
        assert_eq!(reg.names(), vec!["clear", "echo"]);
        assert_eq!(reg.len(), 2);
        assert!(!reg.is_empty());
    }

    #[tokio::test]
    async fn test_handler_invocation() {
        let reg = echo_registry();
        let h = reg.get("echo").unwrap();
        let out = h(vec!["hello".into(), "world".into()]).await.unwrap();
        assert_eq!(out, CommandOutput::Text("hello world".to_string()));
    }
}
