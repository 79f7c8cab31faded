use leptos::prelude::*;

use super::key_value_editor::KeyValueEditor;
use crate::state::use_store;
use crate::types::{Action, HttpMethod};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RequestTab {
    Params,
    Headers,
    Body,
}

impl RequestTab {
    /// Tab to show after switching to `method`.
    pub fn for_method(method: HttpMethod) -> Self {
        if method.has_body() {
            RequestTab::Body
        } else {
            RequestTab::Params
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RequestTab::Params => "Params",
            RequestTab::Headers => "Headers",
            RequestTab::Body => "Body",
        }
    }
}

#[component]
pub fn RequestPanel() -> impl IntoView {
    let store = use_store();
    let (tab, set_tab) = signal(RequestTab::Params);

    let request = Memo::new(move |_| store.session.with(|s| s.request.clone()));
    let endpoint = Memo::new(move |_| store.session.with(|s| s.selected_endpoint.clone()));
    let loading = Memo::new(move |_| store.session.with(|s| s.loading));

    // Local edit buffer; committed on blur, send and format.
    let (body_text, set_body_text) = signal(String::new());
    let committed_body = Memo::new(move |_| request.with(|r| r.body.clone()));
    Effect::new(move |_| set_body_text.set(committed_body.get()));

    let pending_body = move || {
        let text = body_text.get_untracked();
        (text != committed_body.get_untracked()).then_some(Action::SetBody { body: text })
    };

    let on_method_change = move |ev: leptos::ev::Event| {
        if let Some(method) = HttpMethod::parse(&event_target_value(&ev)) {
            set_tab.set(RequestTab::for_method(method));
            store.dispatch(Action::SetMethod { method });
        }
    };

    let on_send = move |_| {
        let actions: Vec<Action> = pending_body().into_iter().collect();
        store.run(actions, true);
    };

    let on_format = move |_| {
        let mut actions: Vec<Action> = pending_body().into_iter().collect();
        actions.push(Action::FormatBody);
        store.run(actions, false);
    };

    let on_body_change = move |_| {
        if let Some(action) = pending_body() {
            store.dispatch(action);
        }
    };

    view! {
        <div class="bg-white rounded-lg shadow flex flex-col overflow-hidden">
            <div class="p-4 border-b flex items-center gap-2">
                <select
                    class=move || format!(
                        "px-2 py-2 rounded font-mono text-sm font-semibold {}",
                        request.with(|r| r.method.badge_class())
                    )
                    on:change=on_method_change
                    prop:value=move || request.with(|r| r.method.as_str())
                >
                    {HttpMethod::ALL
                        .into_iter()
                        .map(|m| view! { <option value=m.as_str()>{m.as_str()}</option> })
                        .collect_view()}
                </select>
                <div class="flex-1 px-3 py-2 bg-gray-50 border rounded font-mono text-sm truncate">
                    {move || match endpoint.get() {
                        Some(e) => request.with(|r| r.url_preview(&e.path)),
                        None => "Select an endpoint".to_string(),
                    }}
                </div>
                <button
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded font-semibold disabled:opacity-50"
                    disabled=move || loading.get() || endpoint.with(|e| e.is_none())
                    on:click=on_send
                >
                    {move || if loading.get() { "Sending..." } else { "Send" }}
                </button>
            </div>

            <div class="flex border-b text-sm">
                {[RequestTab::Params, RequestTab::Headers, RequestTab::Body]
                    .into_iter()
                    .map(|t| view! {
                        <button
                            class=move || format!(
                                "px-4 py-2 {}",
                                if tab.get() == t {
                                    "border-b-2 border-blue-600 text-blue-600 font-medium"
                                } else {
                                    "text-gray-500 hover:text-gray-700"
                                }
                            )
                            on:click=move |_| set_tab.set(t)
                        >
                            {t.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="p-4 flex-1 overflow-y-auto">
                {move || match tab.get() {
                    RequestTab::Params => view! {
                        <KeyValueEditor
                            entries=Signal::derive(move || request.with(|r| r.query_params.clone()))
                            key_placeholder="Parameter"
                            value_placeholder="Value"
                            on_add=Callback::new(move |(key, value)| {
                                store.dispatch(Action::AddQueryParam { key, value })
                            })
                            on_remove=Callback::new(move |key| {
                                store.dispatch(Action::RemoveQueryParam { key })
                            })
                        />
                    }.into_any(),
                    RequestTab::Headers => view! {
                        <KeyValueEditor
                            entries=Signal::derive(move || request.with(|r| r.headers.clone()))
                            key_placeholder="Header"
                            value_placeholder="Value"
                            require_value=true
                            on_add=Callback::new(move |(key, value)| {
                                store.dispatch(Action::AddHeader { key, value })
                            })
                            on_remove=Callback::new(move |key| {
                                store.dispatch(Action::RemoveHeader { key })
                            })
                        />
                    }.into_any(),
                    RequestTab::Body => view! {
                        <div class="flex flex-col gap-2 h-full">
                            <div class="flex justify-end">
                                <button
                                    type="button"
                                    class="text-xs px-2 py-1 bg-gray-100 hover:bg-gray-200 text-gray-600 rounded"
                                    on:click=on_format
                                >
                                    "Format JSON"
                                </button>
                            </div>
                            <textarea
                                class="flex-1 min-h-64 p-2 border rounded font-mono text-sm"
                                spellcheck="false"
                                placeholder="Request body (JSON)"
                                prop:value=move || body_text.get()
                                on:input=move |ev| set_body_text.set(event_target_value(&ev))
                                on:change=on_body_change
                            />
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_follows_method() {
        assert_eq!(RequestTab::for_method(HttpMethod::Post), RequestTab::Body);
        assert_eq!(RequestTab::for_method(HttpMethod::Patch), RequestTab::Body);
        assert_eq!(RequestTab::for_method(HttpMethod::Get), RequestTab::Params);
        assert_eq!(RequestTab::for_method(HttpMethod::Delete), RequestTab::Params);
    }
}
