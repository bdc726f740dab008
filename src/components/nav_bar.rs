//! Top navigation bar with session-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::AuthGateway;
use crate::routes;
use crate::state::session::{self, SessionState};

/// Navigation bar shown on every page.
///
/// Reacts to the shared session signal: role links appear for the
/// signed-in role, and the sign-out button tears the session down and
/// returns to the landing page.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let gateway = expect_context::<AuthGateway>();
    let navigate = use_navigate();

    let role_link = move || {
        let state = session.get();
        if state.is_patient() {
            Some(view! { <a class="nav-bar__link" href=routes::PATIENT>"My appointments"</a> })
        } else if state.is_doctor() {
            Some(view! { <a class="nav-bar__link" href=routes::DOCTOR>"My schedule"</a> })
        } else {
            None
        }
    };

    let account = move || {
        let state = session.get();
        match state.identity {
            Some(identity) => {
                let navigate = navigate.clone();
                let on_logout = move |_| {
                    session::logout(session, &gateway);
                    navigate(routes::HOME, NavigateOptions::default());
                };
                view! {
                    <span class="nav-bar__account">
                        <span class="nav-bar__user">{identity.name}</span>
                        <button class="btn nav-bar__logout" on:click=on_logout>
                            "Sign out"
                        </button>
                    </span>
                }
                .into_any()
            }
            None => view! { <a class="nav-bar__link" href=routes::LOGIN>"Sign in"</a> }.into_any(),
        }
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href=routes::HOME>
                "MedBook"
            </a>
            {role_link}
            <span class="nav-bar__spacer"></span>
            {account}
        </nav>
    }
}
