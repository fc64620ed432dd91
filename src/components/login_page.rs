//! Login Page Component
//!
//! Name/email form that opens a session with the dog service.

use dog_api::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

const LOGIN_FAILED: &str = "Login failed. Please check your info.";
const NETWORK_ERROR: &str = "Network error.";

/// Message shown under the form for a failed login
fn login_error_message(err: &ApiError) -> &'static str {
    if err.is_transport() {
        NETWORK_ERROR
    } else {
        LOGIN_FAILED
    }
}

/// Both fields are required
fn can_submit(name: &str, email: &str) -> bool {
    !name.is_empty() && !email.is_empty()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());
        let name = name.get_untracked();
        let email = email.get_untracked();
        if !can_submit(&name, &email) {
            return;
        }

        let client = ctx.client();
        spawn_local(async move {
            match client.login(&name, &email).await {
                Ok(()) => ctx.mark_logged_in(),
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    set_error.set(login_error_message(&e).to_string());
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Login to Fetch"</h2>
                <form on:submit=on_submit>
                    <label class="field">
                        <span>"Name"</span>
                        <input
                            type="text"
                            required=true
                            autofocus=true
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="primary-btn">"Login"</button>
                    <Show when=move || !error.get().is_empty()>
                        <p class="error-text">{move || error.get()}</p>
                    </Show>
                </form>
            </div>
        </div>
    }
}
