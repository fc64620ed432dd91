//! Application Context
//!
//! Shared state provided via Leptos Context API.

use dog_api::DogClient;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Session flag and service client provided to every view
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Client for the dog service (cheap to clone)
    pub client: StoredValue<DogClient>,
    /// Whether the last login succeeded - read
    pub logged_in: ReadSignal<bool>,
    /// Whether the last login succeeded - write
    set_logged_in: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(client: DogClient, logged_in: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            client: StoredValue::new(client),
            logged_in: logged_in.0,
            set_logged_in: logged_in.1,
        }
    }

    /// Owned handle to the client for use inside `spawn_local`
    pub fn client(&self) -> DogClient {
        self.client.get_value()
    }

    /// Flip to the search view after a successful login
    pub fn mark_logged_in(&self) {
        self.set_logged_in.set(true);
    }

    /// Invalidate the remote session, then return to the login form
    /// whatever the outcome.
    pub fn logout(&self) {
        let client = self.client();
        let set_logged_in = self.set_logged_in;
        spawn_local(async move {
            if let Err(e) = client.logout().await {
                log::debug!("Logout request failed: {}", e);
            }
            set_logged_in.set(false);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
