//! Rendering for a single scrollback entry.

use leptos::prelude::*;

use crate::models::{EntryData, HistoryEntry};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

fn split_first_token(text: &str) -> (String, String) {
    match text.find(char::is_whitespace) {
        Some(idx) => (text[..idx].to_string(), text[idx..].to_string()),
        None => (text.to_string(), String::new()),
    }
}

#[component]
pub fn Output(entry: HistoryEntry) -> impl IntoView {
    match entry.data {
        EntryData::Command {
            prompt,
            text,
            valid,
        } => {
            let (head, tail) = split_first_token(&text);
            let head_class = if valid {
                css::commandValid
            } else {
                css::commandInvalid
            };
            view! {
                <div class=css::command>
                    <span class=css::prompt>{prompt}</span>
                    <span class=css::separator>"$ "</span>
                    <span class=head_class>{head}</span>
                    <span class=css::args>{tail}</span>
                </div>
            }
            .into_any()
        }
        EntryData::Text(text) => view! { <div class=css::line>{text}</div> }.into_any(),
        EntryData::Error(text) => {
            view! { <div class=format!("{} {}", css::line, css::error)>{text}</div> }.into_any()
        }
        EntryData::Ascii(text) => view! { <pre class=css::ascii>{text}</pre> }.into_any(),
        EntryData::Empty => view! { <div class=css::lineEmpty></div> }.into_any(),
    }
}
