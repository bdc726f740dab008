//! Doctor workspace: publish slots, reschedule them, review bookings.

use leptos::prelude::*;

use crate::net::schedule;
use crate::net::types::{NewSlot, SlotUpdate};
use crate::state::session::SessionState;

/// Doctor page. Reached only through the guard with a fresh
/// `Doctor`-role check; the session context supplies the doctor id.
#[component]
pub fn DoctorPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let doctor_id = move || session.get().identity.map(|identity| identity.id);

    let slots = LocalResource::new(move || {
        let id = doctor_id();
        async move {
            match id {
                Some(id) => schedule::doctor_appointments(&id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let patients = LocalResource::new(|| schedule::list_patients());

    let new_time = RwSignal::new(String::new());
    let move_time = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let publish = move |_| {
        let starts_at = new_time.get().trim().to_owned();
        let Some(id) = doctor_id() else { return };
        if starts_at.is_empty() {
            return;
        }
        error.set(None);
        leptos::task::spawn_local(async move {
            let batch = [NewSlot { doctor_id: id, starts_at }];
            match schedule::create_slots(&batch).await {
                Ok(_) => {
                    new_time.set(String::new());
                    slots.refetch();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let reschedule = move |slot_id: String| {
        let starts_at = move_time.get().trim().to_owned();
        if starts_at.is_empty() {
            return;
        }
        error.set(None);
        leptos::task::spawn_local(async move {
            match schedule::update_slot(&slot_id, &SlotUpdate { starts_at }).await {
                Ok(_) => slots.refetch(),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="doctor-page">
            <h1>"My schedule"</h1>
            {move || {
                error.get().map(|msg| view! { <p class="form__error">{msg}</p> })
            }}

            <section class="doctor-page__publish">
                <h2>"Publish a slot"</h2>
                <input
                    class="form__input"
                    type="datetime-local"
                    prop:value=move || new_time.get()
                    on:input=move |ev| new_time.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=publish>
                    "Publish"
                </button>
            </section>

            <section class="doctor-page__slots">
                <h2>"Slots"</h2>
                <input
                    class="form__input"
                    type="datetime-local"
                    prop:value=move || move_time.get()
                    on:input=move |ev| move_time.set(event_target_value(&ev))
                />
                <Suspense fallback=move || view! { <p>"Loading slots..."</p> }>
                    <ul>
                        {move || {
                            slots.get().map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p class="doctor-page__empty">"No slots published"</p> }
                                        .into_any()
                                }
                                Ok(list) => list
                                    .into_iter()
                                    .map(|slot| {
                                        let slot_id = slot.id.clone();
                                        let status = if slot.is_booked() { "booked" } else { "free" };
                                        view! {
                                            <li class="doctor-page__slot">
                                                <span>{slot.starts_at.clone()}</span>
                                                <span class="doctor-page__slot-status">{status}</span>
                                                <button
                                                    class="btn"
                                                    on:click=move |_| reschedule(slot_id.clone())
                                                >
                                                    "Move here"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any(),
                                Err(err) => {
                                    view! { <p class="form__error">{err.to_string()}</p> }.into_any()
                                }
                            })
                        }}
                    </ul>
                </Suspense>
            </section>

            <section class="doctor-page__patients">
                <h2>"Registered patients"</h2>
                <Suspense fallback=move || view! { <p>"Loading patients..."</p> }>
                    <ul>
                        {move || {
                            patients.get().map(|result| match result {
                                Ok(list) => list
                                    .into_iter()
                                    .map(|patient| {
                                        view! {
                                            <li class="doctor-page__patient">
                                                {patient.name} " · " {patient.email}
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any(),
                                Err(err) => {
                                    view! { <p class="form__error">{err.to_string()}</p> }.into_any()
                                }
                            })
                        }}
                    </ul>
                </Suspense>
            </section>
        </div>
    }
}
