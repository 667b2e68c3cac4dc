use contracts::shared::validation::{validate_email, validate_password};
use contracts::system::auth::gate::{post_login_target, REDIRECT_PARAM};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::system::auth::api;
use crate::system::auth::context::use_session;

fn check_credentials(email: &str, password: &str) -> Result<(), String> {
    validate_email(email).map_err(|e| e.to_string())?;
    validate_password(password).map_err(|e| e.to_string())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let navigate = use_navigate();
    let query = use_query_map();
    let target = move || post_login_target(query.read().get(REDIRECT_PARAM).as_deref());

    // Already signed in: skip the form
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if session.is_active() {
                navigate(&target(), Default::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if let Err(e) = check_credentials(&email_val, &password_val) {
            set_error_message.set(Some(e));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) if !response.token.is_empty() => {
                    session.sign_in(response);
                    set_is_loading.set(false);
                }
                Ok(response) => {
                    set_error_message.set(Some(if response.message.is_empty() {
                        "Login failed".to_string()
                    } else {
                        response.message
                    }));
                    set_is_loading.set(false);
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    set_error_message.set(Some(e.to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Store Admin"</h1>
                <h2>"Sign in to your account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit novalidate>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_credentials() {
        assert!(check_credentials("admin@shop.io", "secret1").is_ok());
        assert_eq!(
            check_credentials("admin@shop", "secret1").unwrap_err(),
            "Valid email is required"
        );
        assert_eq!(
            check_credentials("admin@shop.io", "abc").unwrap_err(),
            "Password must be at least 6 characters"
        );
    }
}
