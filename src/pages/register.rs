//! Registration pages for the two account types.
//!
//! Registration never signs the new user in; both pages hand off to the
//! login page on success so the session always starts from a real login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::AuthGateway;
use crate::net::types::{DoctorRegistration, PatientRegistration};
use crate::routes;

/// Patient registration form.
#[component]
pub fn RegisterPatientPage() -> impl IntoView {
    let gateway = expect_context::<AuthGateway>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() || email.get().trim().is_empty() || password.get().is_empty()
        {
            error.set(Some("name, email and password are required".to_owned()));
            return;
        }
        let data = PatientRegistration {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            phone: phone.get().trim().to_owned(),
        };

        pending.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match gateway.register_patient(&data).await {
                Ok(_) => navigate(routes::LOGIN, NavigateOptions::default()),
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="register-page">
            <h1>"Register as patient"</h1>
            <form class="register-page__form" on:submit=submit>
                <TextField label="Name" kind="text" value=name/>
                <TextField label="Email" kind="email" value=email/>
                <TextField label="Password" kind="password" value=password/>
                <TextField label="Phone" kind="tel" value=phone/>
                {move || {
                    error.get().map(|msg| view! { <p class="form__error">{msg}</p> })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
        </div>
    }
}

/// Doctor registration form.
#[component]
pub fn RegisterDoctorPage() -> impl IntoView {
    let gateway = expect_context::<AuthGateway>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let specialty = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty()
            || email.get().trim().is_empty()
            || password.get().is_empty()
            || specialty.get().trim().is_empty()
        {
            error.set(Some("all fields are required".to_owned()));
            return;
        }
        let data = DoctorRegistration {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            specialty: specialty.get().trim().to_owned(),
        };

        pending.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match gateway.register_doctor(&data).await {
                Ok(_) => navigate(routes::LOGIN, NavigateOptions::default()),
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="register-page">
            <h1>"Register as doctor"</h1>
            <form class="register-page__form" on:submit=submit>
                <TextField label="Name" kind="text" value=name/>
                <TextField label="Email" kind="email" value=email/>
                <TextField label="Password" kind="password" value=password/>
                <TextField label="Specialty" kind="text" value=specialty/>
                {move || {
                    error.get().map(|msg| view! { <p class="form__error">{msg}</p> })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
        </div>
    }
}

/// Labeled input bound to a string signal.
#[component]
fn TextField(label: &'static str, kind: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            <input
                class="form__input"
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
