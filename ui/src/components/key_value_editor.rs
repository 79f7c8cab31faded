use leptos::prelude::*;

use crate::types::KeyValues;

/// Whether a pending entry may be added: the key must be non-blank, and the
/// value too when `require_value` is set.
pub fn can_add(key: &str, value: &str, require_value: bool) -> bool {
    !key.trim().is_empty() && (!require_value || !value.trim().is_empty())
}

/// Editable list of key/value pairs used for headers and query params.
#[component]
pub fn KeyValueEditor(
    #[prop(into)] entries: Signal<KeyValues>,
    key_placeholder: &'static str,
    value_placeholder: &'static str,
    #[prop(default = false)] require_value: bool,
    on_add: Callback<(String, String)>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let (new_key, set_new_key) = signal(String::new());
    let (new_value, set_new_value) = signal(String::new());

    let addable = move || can_add(&new_key.get(), &new_value.get(), require_value);
    let add = move || {
        if !addable() {
            return;
        }
        on_add.run((new_key.get_untracked(), new_value.get_untracked()));
        set_new_key.set(String::new());
        set_new_value.set(String::new());
    };

    view! {
        <div class="space-y-2">
            {move || {
                let rows = entries.get();
                if rows.is_empty() {
                    view! { <p class="text-sm text-gray-400">"None"</p> }.into_any()
                } else {
                    rows.into_iter()
                        .map(|(key, value)| {
                            let key_for_remove = key.clone();
                            view! {
                                <div class="flex items-center gap-2 text-sm font-mono">
                                    <span class="flex-1 px-2 py-1 bg-gray-50 rounded">{key}</span>
                                    <span class="flex-1 px-2 py-1 bg-gray-50 rounded">{value}</span>
                                    <button
                                        type="button"
                                        class="px-2 text-red-500 hover:text-red-700"
                                        title="Remove"
                                        on:click=move |_| on_remove.run(key_for_remove.clone())
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
            <div class="flex items-center gap-2">
                <input
                    type="text"
                    class="flex-1 px-2 py-1 border rounded text-sm"
                    placeholder=key_placeholder
                    prop:value=move || new_key.get()
                    on:input=move |ev| set_new_key.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    class="flex-1 px-2 py-1 border rounded text-sm"
                    placeholder=value_placeholder
                    prop:value=move || new_value.get()
                    on:input=move |ev| set_new_value.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            add();
                        }
                    }
                />
                <button
                    type="button"
                    class="px-3 py-1 bg-gray-100 hover:bg-gray-200 text-gray-700 rounded text-sm disabled:opacity-50"
                    disabled=move || !addable()
                    on:click=move |_| add()
                >
                    "Add"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_needs_key_and_value() {
        assert!(can_add("Accept", "application/json", true));
        assert!(!can_add("Accept", "  ", true));
        assert!(!can_add(" ", "x", true));
    }

    #[test]
    fn test_param_needs_only_key() {
        assert!(can_add("page", "", false));
        assert!(!can_add("", "1", false));
    }
}
