//! Bounded handler execution via `Promise.race`.
//!
//! The engine defines no cancellation for handlers, so a hung handler would
//! otherwise leave the submission queue stalled forever. The browser layer
//! races every invocation against a timeout promise; the loser keeps
//! running detached but its result is discarded.

use js_sys::{Array, Promise};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, future_to_promise};

use crate::core::{HandlerFuture, HandlerVerdict};
use crate::utils::dom;

/// Race a handler future against a timeout of `timeout_ms` milliseconds.
///
/// The handler result is round-tripped through a JS promise (serialized
/// with `serde-wasm-bindgen`) so `Promise.race` can arbitrate: the timeout
/// promise resolves to `undefined`, which no serialized [`CommandOutput`]
/// ever is, and a handler `Err` becomes a promise rejection.
///
/// [`CommandOutput`]: crate::core::CommandOutput
pub async fn run_with_timeout(future: HandlerFuture, timeout_ms: i32) -> HandlerVerdict {
    let Some(window) = dom::window() else {
        return HandlerVerdict::Failed("browser window not available".to_string());
    };

    let handler_promise = future_to_promise(async move {
        match future.await {
            Ok(output) => {
                serde_wasm_bindgen::to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
            }
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    });

    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let contenders = Array::new();
    contenders.push(&handler_promise);
    contenders.push(&timeout_promise);

    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(value) if value.is_undefined() => HandlerVerdict::TimedOut,
        Ok(value) => match serde_wasm_bindgen::from_value(value) {
            Ok(output) => HandlerVerdict::Output(output),
            Err(e) => HandlerVerdict::Failed(e.to_string()),
        },
        Err(e) => HandlerVerdict::Failed(
            e.as_string().unwrap_or_else(|| "unknown error".to_string()),
        ),
    }
}
