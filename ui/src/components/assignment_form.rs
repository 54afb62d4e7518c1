use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use portal_core::confirmation::CONFIRMATION_ROUTE;
use portal_core::{Field, FormState, SubmissionOrchestrator};

use super::select::LevelSelect;
use super::text_input::TextInput;
use crate::api::GlooCandidatesApi;
use crate::storage::LocalStorage;

#[component]
pub fn AssignmentForm() -> impl IntoView {
    let form = RwSignal::new(FormState::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(values) = form.try_update(FormState::begin_submit).flatten() else {
            return;
        };

        let navigate = navigate.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let to_confirmation = move || navigate(CONFIRMATION_ROUTE, Default::default());
            let outcome = SubmissionOrchestrator::new(&GlooCandidatesApi, &LocalStorage, &to_confirmation)
                .submit(&values)
                .await;
            // The form is gone once we have navigated away
            form.try_update(|f| f.finish_submit(&outcome));
        });
    };

    let submit_errors = move || form.with(|f| f.submit_errors().to_vec());

    view! {
        <form on:submit=on_submit class="bg-white rounded-lg shadow p-6">
            <div class="space-y-6">
                <TextInput form=form field=Field::Name/>
                <TextInput form=form field=Field::Email input_type="email"/>
                <TextInput form=form field=Field::Description multiline=true/>
                <TextInput form=form field=Field::RepoUrl input_type="url"/>
                <LevelSelect form=form/>

                <Show when=move || !submit_errors().is_empty()>
                    <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded">
                        {move || {
                            submit_errors()
                                .into_iter()
                                .map(|message| view! { <p>{message}</p> })
                                .collect_view()
                        }}
                    </div>
                </Show>

                <button
                    type="submit"
                    class="px-4 py-2 bg-teal-600 text-white rounded-lg hover:bg-teal-700 disabled:opacity-50"
                    disabled=move || !form.with(FormState::can_submit)
                >
                    {move || if form.with(FormState::is_submitting) { "Submitting..." } else { "Submit" }}
                </button>
            </div>
        </form>
    }
}
