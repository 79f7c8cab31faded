use leptos::prelude::*;

use crate::api;
use crate::state::use_store;
use crate::types::{Action, Endpoint, EndpointGroup};

/// Label for a category heading; only the initial fits the collapsed rail.
pub fn category_label(category: &str, collapsed: bool) -> String {
    if collapsed {
        category.chars().next().map(String::from).unwrap_or_default()
    } else {
        category.to_string()
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_store();
    let groups = LocalResource::new(|| async move { api::list_endpoints().await });
    let (collapsed, set_collapsed) = signal(false);

    view! {
        <div class=move || format!(
            "{} bg-gray-800 text-white p-4 flex flex-col overflow-y-auto transition-all",
            if collapsed.get() { "w-16" } else { "w-64" }
        )>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold" class:hidden=move || collapsed.get()>"API Explorer"</h1>
                <button
                    class="text-gray-400 hover:text-white px-1"
                    title=move || if collapsed.get() { "Expand sidebar" } else { "Collapse sidebar" }
                    on:click=move |_| set_collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </div>
            <nav class="space-y-4 flex-1">
                <Suspense fallback=move || view! { <div class="text-gray-400">"Loading..."</div> }>
                    {move || match groups.get() {
                        Some(Ok(groups)) => groups
                            .into_iter()
                            .map(|group| view! { <CategoryGroup group=group collapsed=collapsed.into() /> })
                            .collect_view()
                            .into_any(),
                        Some(Err(e)) => view! {
                            <div class="text-red-300 text-sm">{format!("Failed to load endpoints: {}", e)}</div>
                        }.into_any(),
                        None => view! { <span /> }.into_any(),
                    }}
                </Suspense>
            </nav>
            <button
                class="mt-4 text-xs text-gray-400 hover:text-white text-left"
                class:hidden=move || collapsed.get()
                on:click=move |_| store.dispatch(Action::ClearSelection)
            >
                "Clear selection"
            </button>
        </div>
    }
}

#[component]
fn CategoryGroup(group: EndpointGroup, collapsed: Signal<bool>) -> impl IntoView {
    let category = group.category;
    let title = category.clone();

    view! {
        <div>
            <h2
                class="text-xs font-semibold uppercase tracking-wide text-gray-400 mb-1"
                class:text-center=move || collapsed.get()
                title=title
            >
                {move || category_label(&category, collapsed.get())}
            </h2>
            <div class="space-y-1">
                {group
                    .endpoints
                    .into_iter()
                    .map(|endpoint| view! { <EndpointLink endpoint=endpoint collapsed=collapsed /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn EndpointLink(endpoint: Endpoint, collapsed: Signal<bool>) -> impl IntoView {
    let store = use_store();
    let id = endpoint.id.clone();
    let is_selected = {
        let id = id.clone();
        move || {
            store
                .session
                .with(|s| s.selected_endpoint.as_ref().is_some_and(|e| e.id == id))
        }
    };
    let title = format!("{} {}", endpoint.name, endpoint.path);
    let dot = if endpoint.has_path_param() {
        "bg-yellow-400"
    } else {
        "bg-green-400"
    };

    view! {
        <button
            class=move || format!(
                "w-full flex items-center gap-2 p-2 rounded text-left text-sm transition-colors {} {}",
                if is_selected() { "bg-gray-700" } else { "hover:bg-gray-700" },
                if collapsed.get() { "justify-center" } else { "" }
            )
            title=title
            on:click=move |_| store.dispatch(Action::SelectEndpoint { id: id.clone() })
        >
            <span class=format!("w-2 h-2 rounded-full {}", dot)></span>
            <span class="flex-1 truncate" class:hidden=move || collapsed.get()>{endpoint.name}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_collapses_to_initial() {
        assert_eq!(category_label("Orders", false), "Orders");
        assert_eq!(category_label("Orders", true), "O");
        assert_eq!(category_label("", true), "");
    }
}
