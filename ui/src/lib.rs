use leptos::prelude::*;

mod api;
mod components;
mod state;
mod types;

use components::request_panel::RequestPanel;
use components::response_panel::ResponsePanel;
use components::sidebar::Sidebar;
use components::test_cases_bar::TestCasesBar;
use state::Store;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new();
    provide_context(store);
    store.refresh();

    view! {
        <div class="flex h-screen bg-gray-100">
            <Sidebar />

            // Main Content
            <div class="flex-1 flex flex-col overflow-hidden">
                <TestCasesBar />
                {move || store.error.get().map(|e| view! {
                    <div class="mx-4 mt-3 p-3 bg-red-100 border border-red-400 text-red-700 rounded text-sm">
                        {e}
                    </div>
                })}
                <div class="flex-1 grid grid-cols-1 lg:grid-cols-2 gap-4 p-4 overflow-hidden">
                    <RequestPanel />
                    <ResponsePanel />
                </div>
            </div>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
