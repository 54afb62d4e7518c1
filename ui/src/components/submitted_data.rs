use leptos::prelude::*;
use leptos_router::components::A;
use portal_core::confirmation::FILLED_SUBHEADING;
use portal_core::{read_confirmation, ConfirmationView};

use crate::storage::LocalStorage;

/// Confirmation page. Reads the stored record once, when the route mounts.
#[component]
pub fn SubmittedData() -> impl IntoView {
    let confirmation = read_confirmation(&LocalStorage);
    let filled = matches!(confirmation, ConfirmationView::Filled(_));
    let lines = confirmation.lines();

    view! {
        <div class="bg-white rounded-lg shadow p-6 space-y-4">
            <h2 class="text-2xl font-bold">{confirmation.heading()}</h2>
            {filled.then(|| view! {
                <p class="text-gray-700">{FILLED_SUBHEADING}</p>
                <ul class="space-y-1">
                    {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
            })}
            <A href=confirmation.link_href() attr:class="text-teal-600 hover:underline">
                {confirmation.link_label()}
            </A>
        </div>
    }
}
