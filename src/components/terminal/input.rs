//! Terminal input component with completion, recall, and live validity
//! highlighting.
//!
//! The buffer itself lives in the engine session; this component mirrors it
//! through `value`/`on_change` and translates keyboard events into engine
//! callbacks. The visible text is a styled overlay; the real `<input>` is
//! transparent on top of it.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::core::RecallDirection;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Split off the first token, preserving whitespace in the remainder so the
/// overlay stays aligned with the real input text.
fn split_first_token(text: &str) -> (String, String) {
    match text.find(char::is_whitespace) {
        Some(idx) => (text[..idx].to_string(), text[idx..].to_string()),
        None => (text.to_string(), String::new()),
    }
}

#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    on_submit: Callback<()>,
    on_submit_text: Callback<String>,
    on_recall: Callback<RecallDirection, Option<String>>,
    on_complete: Callback<(), Option<String>>,
    on_hint: Callback<String, Option<String>>,
    is_valid: Callback<String, bool>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    // Recall and completion rewrite the whole buffer; park the caret at the end
    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            on_submit.run(());
        }
        "Tab" => {
            ev.prevent_default();
            if on_complete.run(()).is_some() {
                move_cursor_to_end();
            }
        }
        "ArrowUp" => {
            ev.prevent_default();
            if on_recall.run(RecallDirection::Back).is_some() {
                move_cursor_to_end();
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            if on_recall.run(RecallDirection::Forward).is_some() {
                move_cursor_to_end();
            }
        }
        "c" if ev.ctrl_key() => {
            // Abandon the current line
            on_change.run(String::new());
        }
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            // Out-of-band clear; the in-progress text stays in the buffer.
            on_submit_text.run("clear".to_string());
        }
        _ => {}
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        on_change.run(input.value());
    };

    // First token and remainder, for validity coloring
    let parts = Memo::new(move |_| split_first_token(&value.get()));
    let head_class = Memo::new(move |_| {
        let (head, _) = parts.get();
        if head.is_empty() || is_valid.run(head) {
            css::commandValid.to_string()
        } else {
            css::commandInvalid.to_string()
        }
    });

    // Ghost-text hint shown after the typed text, recomputed per keystroke
    let hint = Memo::new(move |_| {
        let buffer = value.get();
        if buffer.is_empty() {
            None
        } else {
            on_hint.run(buffer)
        }
    });

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::prompt>{prompt}</span>
                <span class=css::separator>"$ "</span>
                <div class=css::field>
                    <div class=css::ghostOverlay>
                        <span class=move || head_class.get()>
                            {move || parts.get().0}
                        </span>
                        <span class=css::args>{move || parts.get().1}</span>
                        <span class=css::ghostHint>
                            {move || hint.get().unwrap_or_default()}
                        </span>
                    </div>
                    <input
                        node_ref=input_ref
                        type="text"
                        class=css::input
                        autocomplete="off"
                        spellcheck="false"
                        prop:value=value
                        on:input=handle_input
                        on:keydown=handle_keydown
                    />
                </div>
            </div>
        </div>
    }
}
