//! Presence checkbox paired with a stat input.
//!
//! The input is disabled whenever the box is unchecked. Unchecking keeps
//! whatever was typed so re-checking restores it.

use leptos::prelude::*;

use cards::{EditorSession, StatKind};

#[cfg(test)]
#[path = "stat_input_test.rs"]
mod stat_input_test;

fn input_type(kind: StatKind) -> &'static str {
    if kind.is_numeric() { "number" } else { "text" }
}

fn input_class(enabled: bool) -> &'static str {
    if enabled {
        "card-form__input"
    } else {
        "card-form__input card-form__input--disabled"
    }
}

#[component]
pub fn StatInput(kind: StatKind) -> impl IntoView {
    let session = expect_context::<RwSignal<EditorSession>>();
    let enabled = move || session.with(|s| s.form().stat(kind).enabled());

    view! {
        <div class="card-form__row card-form__row--stat">
            <input
                id=kind.checkbox_id()
                type="checkbox"
                prop:checked=move || session.with(|s| s.form().stat(kind).checked)
                on:change=move |ev| session.update(|s| s.toggle_stat(kind, event_target_checked(&ev)))
            />
            <label class="card-form__label" for=kind.checkbox_id()>{kind.label()}</label>
            <input
                id=kind.input_id()
                class=move || input_class(enabled())
                type=input_type(kind)
                min=kind.is_numeric().then_some("0")
                disabled=move || !enabled()
                prop:value=move || session.with(|s| s.form().stat(kind).value.clone())
                on:input=move |ev| session.update(|s| s.edit_stat(kind, event_target_value(&ev)))
            />
        </div>
    }
}
