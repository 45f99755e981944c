//! Signup page. Registration does not sign in; success sends the visitor to
//! `/login`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::NewAccount;
use crate::state::context::use_session;
use crate::util::auth::install_authed_redirect;

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

pub(crate) const MISSING_FIELDS: &str = "Please fill in all fields";
pub(crate) const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub(crate) const PASSWORD_TOO_SHORT: &str = "Password should be at least 6 characters";
pub(crate) const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Check the form and build the registration payload (default role set).
pub(crate) fn validate_signup_input(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<NewAccount, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    if !email.contains('@') {
        return Err(INVALID_EMAIL);
    }
    Ok(NewAccount::new(username, email, password))
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    install_authed_redirect(session, navigate.clone());

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.pending() {
            return;
        }
        let account = match validate_signup_input(&username.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(account) => account,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.signup(account).await {
                    Ok(_) => navigate("/login", leptos_router::NavigateOptions::default()),
                    Err(msg) => {
                        let _ = error.try_set(msg);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (account, &navigate);
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=label
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an Account"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    {field("Username", "text", username)}
                    {field("Email", "email", email)}
                    {field("Password", "password", password)}
                    {field("Confirm password", "password", confirm)}
                    <button class="auth-button" type="submit" disabled=move || session.pending()>
                        {move || if session.pending() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? " <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
