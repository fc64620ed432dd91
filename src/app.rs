//! Dog Match App
//!
//! Session gate: login form until a login succeeds, then the search page.

use dog_api::DogClient;
use leptos::prelude::*;

use crate::components::{DogSearchPage, LoginPage};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Held in memory only, a reload starts logged out
    let logged_in = signal(false);

    let ctx = AppContext::new(DogClient::new(config.api), logged_in);
    provide_context(ctx);

    view! {
        <Show
            when=move || ctx.logged_in.get()
            fallback=|| view! { <LoginPage /> }
        >
            <DogSearchPage />
        </Show>
    }
}
