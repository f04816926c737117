//! Top-level terminal view: scrollback pane plus the input line.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::core::RecallDirection;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry in view whenever the session changes
    Effect::new(move || {
        ctx.session.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let prompt = Signal::derive(move || ctx.session.with(|s| s.prompt().to_string()));
    let value = Signal::derive(move || ctx.session.with(|s| s.input().to_string()));

    let on_change = Callback::new(move |text: String| ctx.set_input(text));
    let on_submit = Callback::new(move |()| ctx.submit());
    let on_submit_text = Callback::new(move |raw: String| ctx.submit_text(raw));
    let on_recall = Callback::new(move |direction: RecallDirection| ctx.recall(direction));
    let on_complete = Callback::new(move |()| ctx.complete());
    let on_hint = Callback::new(move |buffer: String| ctx.hint(&buffer));
    let is_valid = Callback::new(move |name: String| ctx.is_executable(&name));

    view! {
        <div class=css::container on:click=move |_| dom::focus_terminal_input()>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || ctx.session.with(|s| s.entries())
                    key=|entry| entry.id
                    children=|entry| view! { <Output entry=entry /> }
                />
            </div>
            <Input
                prompt=prompt
                value=value
                on_change=on_change
                on_submit=on_submit
                on_submit_text=on_submit_text
                on_recall=on_recall
                on_complete=on_complete
                on_hint=on_hint
                is_valid=is_valid
            />
        </div>
    }
}
