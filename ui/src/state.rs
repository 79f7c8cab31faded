//! Client-side mirror of the server session
//!
//! The server owns the session; every change goes through the actions API and
//! the returned snapshot replaces the local copy.

use leptos::prelude::*;

use crate::api;
use crate::types::{Action, SessionView, Stage};

#[derive(Clone, Copy)]
pub struct Store {
    pub session: RwSignal<SessionView>,
    pub error: RwSignal<Option<String>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionView::default()),
            error: RwSignal::new(None),
        }
    }

    /// Fetch the current snapshot, e.g. after a page reload.
    pub fn refresh(&self) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::get_session().await {
                Ok(view) => store.session.set(view),
                Err(e) => store.fail(e),
            }
        });
    }

    pub fn dispatch(&self, action: Action) {
        self.run(vec![action], false);
    }

    /// Apply `actions` in order, then optionally send the resulting request.
    pub fn run(&self, actions: Vec<Action>, send: bool) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            for action in actions {
                log::debug!("Applying {:?}", action);
                match api::apply_action(&action).await {
                    Ok(view) => store.session.set(view),
                    Err(e) => return store.fail(e),
                }
            }
            store.error.set(None);
            if send {
                store.send_now().await;
            }
        });
    }

    async fn send_now(&self) {
        let has_endpoint = self.session.with_untracked(|s| s.selected_endpoint.is_some());
        if !has_endpoint {
            return;
        }
        self.session.update(|s| {
            s.stage = Stage::Pending;
            s.loading = true;
            s.response = None;
        });
        match api::send_request().await {
            Ok(view) => self.session.set(view),
            Err(e) => {
                self.fail(e);
                self.refresh();
            }
        }
    }

    fn fail(&self, message: String) {
        log::error!("API call failed: {}", message);
        self.error.set(Some(message));
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_store() -> Store {
    use_context::<Store>().unwrap_or_default()
}
