use contracts::shared::validation::password_strength;
use leptos::prelude::*;

/// Bar under a password input; hidden while the password is empty
#[component]
pub fn PasswordStrengthMeter(#[prop(into)] password: Signal<String>) -> impl IntoView {
    view! {
        {move || password_strength(&password.get()).map(|strength| view! {
            <div class=format!("password-strength {}", strength.css_class())>
                <div class="password-strength__track">
                    <div
                        class="password-strength__bar"
                        style=format!("width: {}%;", strength.level())
                    ></div>
                </div>
                <span class="password-strength__label">
                    "Password strength: " {strength.label()}
                </span>
            </div>
        })}
    }
}
