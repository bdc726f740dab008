//! Login page with a credentials form feeding the session store.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::AuthGateway;
use crate::net::types::{Credentials, Role};
use crate::routes;
use crate::state::session::{self, SessionState};

/// Login page — on success navigates to the signed-in role's home page.
/// A failed attempt surfaces the service's message and leaves any prior
/// session untouched.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let gateway = expect_context::<AuthGateway>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if email.get().trim().is_empty() || password.get().is_empty() {
            return;
        }
        let credentials = Credentials {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };

        pending.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session::login(session, &gateway, &credentials).await {
                Ok(identity) => {
                    let target = match identity.role {
                        Role::Patient => routes::PATIENT,
                        Role::Doctor => routes::DOCTOR,
                    };
                    navigate(target, NavigateOptions::default());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="login-page">
            <h1>"Sign in"</h1>
            <form class="login-page__form" on:submit=submit>
                <label class="form__label">
                    "Email"
                    <input
                        class="form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Password"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    error.get().map(|msg| view! { <p class="form__error">{msg}</p> })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="login-page__hint">
                "No account yet? "
                <a href=routes::REGISTER_PATIENT>"Register as patient"</a>
                " or "
                <a href=routes::REGISTER_DOCTOR>"as doctor"</a>
                "."
            </p>
        </div>
    }
}
