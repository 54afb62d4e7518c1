use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

mod api;
mod components;
mod storage;

use components::assignment_form::AssignmentForm;
use components::submitted_data::SubmittedData;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="min-h-screen bg-gray-100 py-10">
                <div class="max-w-2xl mx-auto">
                    <Routes fallback=|| "Not found.">
                        <Route path=path!("/") view=Home/>
                        <Route path=path!("/thank-you") view=SubmittedData/>
                    </Routes>
                </div>
            </main>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <h1 class="text-3xl font-bold mb-6">"Assignment Submission Portal"</h1>
        <AssignmentForm/>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // portal-core logs through `tracing`, which falls back to `log` here
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
