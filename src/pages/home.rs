//! Public landing page with role-aware shortcuts.

use leptos::prelude::*;

use crate::routes;
use crate::state::session::SessionState;

/// Home page — the redirect target for wrong-role navigation, so it
/// must render something sensible for every session state.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let shortcuts = move || {
        let state = session.get();
        if state.loading {
            return view! { <p class="home-page__hint">"Checking your session..."</p> }.into_any();
        }
        if state.is_patient() {
            return view! {
                <a class="btn btn--primary" href=routes::PATIENT>
                    "My appointments"
                </a>
            }
            .into_any();
        }
        if state.is_doctor() {
            return view! {
                <a class="btn btn--primary" href=routes::DOCTOR>
                    "My schedule"
                </a>
            }
            .into_any();
        }
        view! {
            <div class="home-page__actions">
                <a class="btn btn--primary" href=routes::LOGIN>
                    "Sign in"
                </a>
                <a class="btn" href=routes::REGISTER_PATIENT>
                    "Register as patient"
                </a>
                <a class="btn" href=routes::REGISTER_DOCTOR>
                    "Register as doctor"
                </a>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="home-page">
            <h1>"MedBook"</h1>
            <p class="home-page__tagline">"Book and manage medical appointments"</p>
            {shortcuts}
        </div>
    }
}
