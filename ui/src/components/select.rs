use leptos::prelude::*;
use portal_core::{CandidatesApi, DropdownRow, Field, FormState, OptionsLoader};

use crate::api::GlooCandidatesApi;

/// Level dropdown. Options are fetched the first time the list opens and
/// never again for the lifetime of the form.
#[component]
pub fn LevelSelect(form: RwSignal<FormState>) -> impl IntoView {
    let loader = RwSignal::new(OptionsLoader::new());
    let (open, set_open) = signal(false);

    let toggle = move |_| {
        let opening = !open.get_untracked();
        set_open.set(opening);
        if opening && loader.try_update(OptionsLoader::begin_open).unwrap_or(false) {
            wasm_bindgen_futures::spawn_local(async move {
                let result = GlooCandidatesApi.fetch_levels().await;
                if let Err(e) = &result {
                    log::warn!("could not load levels: {}", e);
                }
                loader.try_update(|l| l.resolve(result));
            });
        }
    };

    let selected = move || form.with(|f| f.value(Field::Level).to_string());
    let error = move || form.with(|f| f.error(Field::Level).map(str::to_string));

    let rows = move || {
        loader
            .with(|l| l.state().rows())
            .into_iter()
            .map(|row| match row {
                DropdownRow::Spinner => view! {
                    <li class="px-3 py-2 flex justify-center">
                        <div class="w-5 h-5 border-2 border-teal-500 border-t-transparent rounded-full animate-spin"></div>
                    </li>
                }
                .into_any(),
                DropdownRow::Error(message) => view! {
                    <li class="px-3 py-2 text-sm text-red-600">{message}</li>
                }
                .into_any(),
                DropdownRow::Option(option) => {
                    let value = option.value;
                    view! {
                        <li
                            class="px-3 py-2 cursor-pointer hover:bg-gray-100"
                            on:click=move |_| {
                                form.update(|f| f.set(Field::Level, value.clone()));
                                set_open.set(false);
                            }
                        >
                            {option.label}
                        </li>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    view! {
        <div class="relative">
            <label class="block text-sm font-medium text-gray-700 mb-1">{Field::Level.label()}</label>
            <button
                type="button"
                class="w-full px-3 py-2 border border-gray-300 rounded-lg text-left bg-white"
                on:click=toggle
            >
                {move || {
                    let value = selected();
                    if value.is_empty() { "Select level".to_string() } else { value }
                }}
            </button>
            <Show when=move || open.get()>
                <ul class="absolute z-10 mt-1 w-full bg-white border border-gray-200 rounded-lg shadow">
                    {rows}
                </ul>
            </Show>
            <Show when=move || error().is_some()>
                <p class="mt-1 text-sm text-red-600">{move || error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
