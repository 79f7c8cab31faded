use leptos::prelude::*;

use crate::api;
use crate::state::use_store;
use crate::types::{Action, TestCase};

/// Saved presets for the selected endpoint.
#[component]
pub fn TestCasesBar() -> impl IntoView {
    let store = use_store();
    let endpoint_id = Memo::new(move |_| {
        store
            .session
            .with(|s| s.selected_endpoint.as_ref().map(|e| e.id.clone()))
    });
    let test_cases = LocalResource::new(move || {
        let id = endpoint_id.get();
        async move {
            match id {
                Some(id) => api::list_test_cases(&id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    view! {
        <div class="bg-white border-b px-4 py-2 flex items-center gap-2 min-h-12">
            <span class="text-sm font-medium text-gray-500">"Test cases:"</span>
            {move || match test_cases.get() {
                Some(Ok(cases)) if !cases.is_empty() => cases
                    .into_iter()
                    .map(|case| view! { <TestCaseChip test_case=case /> })
                    .collect_view()
                    .into_any(),
                Some(Err(e)) => view! {
                    <span class="text-sm text-red-500">{e}</span>
                }.into_any(),
                _ => view! {
                    <span class="text-sm text-gray-400">"No test cases for this endpoint"</span>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn TestCaseChip(test_case: TestCase) -> impl IntoView {
    let store = use_store();
    let id = test_case.id.clone();
    let is_selected = {
        let id = id.clone();
        move || {
            store
                .session
                .with(|s| s.selected_test_case.as_ref().is_some_and(|t| t.id == id))
        }
    };

    view! {
        <button
            class=move || format!(
                "flex items-center gap-1 px-3 py-1 rounded-full border text-sm transition-colors {}",
                if is_selected() { "border-blue-500 bg-blue-50" } else { "border-gray-200 hover:bg-gray-50" }
            )
            on:click=move |_| store.dispatch(Action::SelectTestCase { id: id.clone() })
        >
            <span class=format!("px-1 rounded text-xs font-mono {}", test_case.method.badge_class())>
                {test_case.method.as_str()}
            </span>
            {test_case.name}
        </button>
    }
}
