use leptos::prelude::*;

use crate::state::use_store;
use crate::types::{format_size, ResponseView, Stage};

#[derive(Clone, Copy, PartialEq, Eq)]
enum ResponseTab {
    Body,
    Headers,
}

#[component]
pub fn ResponsePanel() -> impl IntoView {
    let store = use_store();
    let stage = Memo::new(move |_| store.session.with(|s| s.stage));
    let response = Memo::new(move |_| store.session.with(|s| s.response.clone()));

    view! {
        <div class="bg-white rounded-lg shadow flex flex-col overflow-hidden">
            <div class="p-4 border-b">
                <h2 class="text-lg font-semibold text-gray-700">"Response"</h2>
            </div>
            {move || match stage.get() {
                Stage::NoSelection => view! {
                    <Placeholder text="Select an endpoint to get started" />
                }.into_any(),
                Stage::Selected => view! {
                    <Placeholder text="Send the request to see the response" />
                }.into_any(),
                Stage::Pending => view! {
                    <div class="flex-1 flex flex-col items-center justify-center gap-3 text-gray-500">
                        <div class="w-8 h-8 border-4 border-blue-200 border-t-blue-600 rounded-full animate-spin"></div>
                        "Sending request..."
                    </div>
                }.into_any(),
                Stage::Available => match response.get() {
                    Some(response) => view! { <ResponseDetails response=response /> }.into_any(),
                    None => view! { <Placeholder text="No response" /> }.into_any(),
                },
            }}
        </div>
    }
}

#[component]
fn Placeholder(text: &'static str) -> impl IntoView {
    view! {
        <div class="flex-1 flex items-center justify-center text-gray-400">{text}</div>
    }
}

#[component]
fn ResponseDetails(response: ResponseView) -> impl IntoView {
    let (tab, set_tab) = signal(ResponseTab::Body);
    let header_count = response.headers.len();

    let body_view = match (response.body_html.clone(), response.body_error.clone()) {
        (Some(html), _) => view! {
            <pre class="json-viewer text-sm font-mono whitespace-pre" inner_html=html />
        }.into_any(),
        (None, error) => view! {
            <div class="text-red-500 text-sm">{error.unwrap_or_else(|| "Invalid JSON".to_string())}</div>
        }.into_any(),
    };

    let headers = response.headers.clone();

    view! {
        <div class="flex-1 flex flex-col overflow-hidden">
            <div class="px-4 py-2 border-b flex items-center gap-4 text-sm">
                <span class=format!("px-2 py-1 rounded font-semibold {}", response.status_class.badge_class())>
                    {format!("{} {}", response.status, response.status_text)}
                </span>
                <span class="text-gray-500">"Time: "<span class="font-mono">{format!("{} ms", response.response_time)}</span></span>
                <span class="text-gray-500">"Size: "<span class="font-mono">{format_size(response.body_size)}</span></span>
            </div>

            <div class="flex border-b text-sm">
                <TabButton label="Body".to_string() active=Signal::derive(move || tab.get() == ResponseTab::Body)
                    on_click=Callback::new(move |_| set_tab.set(ResponseTab::Body)) />
                <TabButton label=format!("Headers ({})", header_count) active=Signal::derive(move || tab.get() == ResponseTab::Headers)
                    on_click=Callback::new(move |_| set_tab.set(ResponseTab::Headers)) />
            </div>

            <div class="p-4 flex-1 overflow-auto">
                <div class:hidden=move || tab.get() != ResponseTab::Body>{body_view}</div>
                <div class:hidden=move || tab.get() != ResponseTab::Headers>
                    <table class="w-full text-sm font-mono">
                        <tbody>
                            {headers
                                .into_iter()
                                .map(|(key, value)| view! {
                                    <tr class="border-b">
                                        <td class="py-1 pr-4 text-gray-500">{key}</td>
                                        <td class="py-1">{value}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TabButton(label: String, active: Signal<bool>, on_click: Callback<()>) -> impl IntoView {
    view! {
        <button
            class=move || format!(
                "px-4 py-2 {}",
                if active.get() {
                    "border-b-2 border-blue-600 text-blue-600 font-medium"
                } else {
                    "text-gray-500 hover:text-gray-700"
                }
            )
            on:click=move |_| on_click.run(())
        >
            {label}
        </button>
    }
}
