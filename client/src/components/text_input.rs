//! Labelled text input bound to one form field.

use leptos::prelude::*;

use cards::{EditorSession, TextField, join_list};

#[cfg(test)]
#[path = "text_input_test.rs"]
mod text_input_test;

/// Accepted values shown under a field with a closed vocabulary. Fields
/// backed by a `<datalist>` already suggest their values.
fn hint_text(field: TextField, has_list: bool) -> Option<String> {
    if has_list {
        return None;
    }
    field.vocabulary().map(|values| format!("one or more of {}", join_list(values)))
}

/// Text input for `field`. `list` names an optional `<datalist>` with
/// suggested values.
#[component]
pub fn TextInput(field: TextField, #[prop(optional)] list: Option<&'static str>) -> impl IntoView {
    let session = expect_context::<RwSignal<EditorSession>>();
    let hint = hint_text(field, list.is_some());

    view! {
        <label class="card-form__row">
            <span class="card-form__label">{field.label()}</span>
            <input
                id=field.element_id()
                class="card-form__input"
                type="text"
                list=list
                prop:value=move || session.with(|s| s.form().text(field).to_owned())
                on:input=move |ev| session.update(|s| s.edit_text(field, event_target_value(&ev)))
            />
            {hint.map(|text| view! { <span class="card-form__hint">{text}</span> })}
        </label>
    }
}
