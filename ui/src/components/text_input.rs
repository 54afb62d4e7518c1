use leptos::prelude::*;
use portal_core::{Field, FormState};

const CONTROL_CLASS: &str =
    "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-teal-500 focus:border-teal-500";

/// Labelled text control bound to one form field. Every keystroke goes
/// through [`FormState::set`], which re-validates that field.
#[component]
pub fn TextInput(
    form: RwSignal<FormState>,
    field: Field,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = field.wire_key();
    let value = move || form.with(|f| f.value(field).to_string());
    let error = move || form.with(|f| f.error(field).map(str::to_string));
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));

    let control = if multiline {
        view! {
            <textarea id=id rows="4" class=CONTROL_CLASS prop:value=value on:input=on_input></textarea>
        }
        .into_any()
    } else {
        view! {
            <input id=id type=input_type class=CONTROL_CLASS prop:value=value on:input=on_input/>
        }
        .into_any()
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-700 mb-1">{field.label()}</label>
            {control}
            <Show when=move || error().is_some()>
                <p class="mt-1 text-sm text-red-600">{move || error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
