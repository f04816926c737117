//! Root application module.
//!
//! Contains the App component and [`AppContext`], the reactive wrapper
//! around the engine [`Session`] following Leptos conventions. The engine
//! itself lives in [`crate::core`]; this layer adds signals, the submission
//! queue, and the handler timeout.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Terminal;
use crate::config::COMMAND_TIMEOUT_MS;
use crate::core::{
    CommandRegistry, HandlerVerdict, RecallDirection, Resolution, Session, SubmissionQueue,
    completion, default_registry, dispatch,
};
use crate::utils::run_with_timeout;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; child components reach it
/// with `use_context::<AppContext>()`. `Copy` because all fields are arena
/// handles.
///
/// Submissions are queued: Enter snapshots the input buffer into a FIFO and
/// a single drain task processes entries strictly in submission order, each
/// fully settled before the next one resolves. A new Enter while a command
/// is still pending therefore never races the session state.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The engine state (scrollback, command log, recall cursor, input).
    pub session: RwSignal<Session>,
    /// Injected command set, immutable for the session. Handlers are `Rc`,
    /// so the registry lives in thread-local storage.
    registry: StoredValue<CommandRegistry, LocalStorage>,
    /// Snapshotted submissions awaiting dispatch, drained in FIFO order.
    queue: StoredValue<SubmissionQueue>,
}

impl AppContext {
    /// Context with the built-in command set.
    pub fn new() -> Self {
        Self::with_registry(default_registry())
    }

    /// Context with an injected command set.
    pub fn with_registry(registry: CommandRegistry) -> Self {
        Self {
            session: RwSignal::new(Session::new()),
            registry: StoredValue::new_local(registry),
            queue: StoredValue::new(SubmissionQueue::new()),
        }
    }

    /// Live validity of a command name, for input highlighting.
    pub fn is_executable(&self, name: &str) -> bool {
        self.registry
            .with_value(|registry| dispatch::is_executable(name, registry))
    }

    /// Mirror the input widget's current text into the session.
    pub fn set_input(&self, text: String) {
        self.session.update(|s| s.set_input(text));
    }

    /// Step command recall; returns the new buffer or `None` for a
    /// boundary no-op.
    pub fn recall(&self, direction: RecallDirection) -> Option<String> {
        self.session
            .try_update(|s| s.recall(direction))
            .flatten()
    }

    /// Tab completion; rewrites the buffer on a unique candidate and
    /// returns the completed text.
    pub fn complete(&self) -> Option<String> {
        let buffer = self.session.with_untracked(|s| s.input().to_string());
        let completed = self
            .registry
            .with_value(|registry| completion::complete(&buffer, &registry.names()))?;
        self.session.update(|s| s.set_input(completed.clone()));
        Some(completed)
    }

    /// Ghost-text suffix for the current buffer.
    pub fn hint(&self, buffer: &str) -> Option<String> {
        self.registry
            .with_value(|registry| completion::hint(buffer, &registry.names()))
    }

    /// Submit the current input buffer.
    ///
    /// Snapshots and clears the buffer immediately, then enqueues the text;
    /// the drain task dispatches queued submissions one at a time.
    pub fn submit(&self) {
        let raw = self
            .session
            .try_update(|s| s.take_input())
            .unwrap_or_default();
        self.submit_text(raw);
    }

    /// Submit a literal command string without touching the input buffer.
    ///
    /// Out-of-band submissions like Ctrl+L's `clear` go through here so the
    /// user's in-progress text survives the screen reset.
    pub fn submit_text(&self, raw: String) {
        let start = self
            .queue
            .try_update_value(|queue| queue.enqueue(raw))
            .unwrap_or(false);
        if !start {
            return;
        }

        let ctx = *self;
        spawn_local(async move {
            while let Some(raw) = ctx.queue.try_update_value(SubmissionQueue::next).flatten() {
                ctx.process(raw).await;
            }
        });
    }

    /// One submission through echo → resolve → settle, with the handler
    /// raced against the configured timeout.
    async fn process(self, raw: String) {
        let registry = self.registry.with_value(CommandRegistry::clone);

        let trimmed = self
            .session
            .try_update(|s| dispatch::echo(s, &registry, &raw))
            .unwrap_or_default();

        match dispatch::resolve(&trimmed, &registry) {
            Resolution::Blank => {}
            Resolution::Clear => self.session.update(|s| s.reset_screen()),
            Resolution::NotFound(name) => self
                .session
                .update(|s| s.push_error(dispatch::not_found_message(&name))),
            Resolution::Invoke { name, handler, args } => {
                let verdict = run_with_timeout(handler(args), COMMAND_TIMEOUT_MS).await;
                if let HandlerVerdict::Failed(message) = &verdict {
                    web_sys::console::error_1(
                        &format!("command '{name}' failed: {message}").into(),
                    );
                }
                self.session.update(|s| dispatch::apply(s, verdict));
            }
        }

        self.session.update(|s| s.settle(&trimmed));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="crash">
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            }
        }>
            <Terminal />
        </ErrorBoundary>
    }
}
