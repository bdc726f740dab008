//! Patient workspace: browse doctors, book free slots, review bookings.

use leptos::prelude::*;

use crate::net::schedule;
use crate::net::types::Slot;
use crate::state::session::SessionState;

/// Patient page. Reached only through the guard with a fresh
/// `Patient`-role check; the session context supplies the patient id.
#[component]
pub fn PatientPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let patient_id = move || session.get().identity.map(|identity| identity.id);

    let doctors = LocalResource::new(|| schedule::list_doctors());
    let selected = RwSignal::new(None::<String>);

    // Re-fetches whenever another doctor is selected.
    let slots = LocalResource::new(move || {
        let doctor = selected.get();
        async move {
            match doctor {
                Some(id) => schedule::doctor_appointments(&id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let appointments = LocalResource::new(move || {
        let id = patient_id();
        async move {
            match id {
                Some(id) => schedule::patient_appointments(&id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let booking_error = RwSignal::new(None::<String>);

    let book = move |slot_id: String| {
        booking_error.set(None);
        leptos::task::spawn_local(async move {
            match schedule::book_slot(&slot_id).await {
                Ok(_) => {
                    slots.refetch();
                    appointments.refetch();
                }
                Err(err) => booking_error.set(Some(err.to_string())),
            }
        });
    };

    let free_slots = move |list: Vec<Slot>| {
        let free: Vec<Slot> = list.into_iter().filter(|slot| !slot.is_booked()).collect();
        if free.is_empty() {
            return view! { <p class="patient-page__empty">"No free slots"</p> }.into_any();
        }
        free.into_iter()
            .map(|slot| {
                let slot_id = slot.id.clone();
                view! {
                    <li class="patient-page__slot">
                        <span>{slot.starts_at.clone()}</span>
                        <button class="btn btn--primary" on:click=move |_| book(slot_id.clone())>
                            "Book"
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="patient-page">
            <h1>"Find a doctor"</h1>

            <section class="patient-page__doctors">
                <Suspense fallback=move || view! { <p>"Loading doctors..."</p> }>
                    {move || {
                        doctors.get().map(|result| match result {
                            Ok(list) => list
                                .into_iter()
                                .map(|doctor| {
                                    let id = doctor.id.clone();
                                    let is_selected = {
                                        let id = id.clone();
                                        move || selected.get().as_deref() == Some(id.as_str())
                                    };
                                    view! {
                                        <button
                                            class="patient-page__doctor"
                                            class=("patient-page__doctor--selected", is_selected)
                                            on:click=move |_| selected.set(Some(id.clone()))
                                        >
                                            <span class="patient-page__doctor-name">{doctor.name}</span>
                                            <span class="patient-page__doctor-specialty">{doctor.specialty}</span>
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any(),
                            Err(err) => {
                                view! { <p class="form__error">{err.to_string()}</p> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>

            <section class="patient-page__slots">
                <h2>"Free slots"</h2>
                {move || {
                    booking_error.get().map(|msg| view! { <p class="form__error">{msg}</p> })
                }}
                <Suspense fallback=move || view! { <p>"Loading slots..."</p> }>
                    <ul>
                        {move || {
                            slots.get().map(|result| match result {
                                Ok(list) => free_slots(list),
                                Err(err) => {
                                    view! { <p class="form__error">{err.to_string()}</p> }.into_any()
                                }
                            })
                        }}
                    </ul>
                </Suspense>
            </section>

            <section class="patient-page__appointments">
                <h2>"My appointments"</h2>
                <Suspense fallback=move || view! { <p>"Loading appointments..."</p> }>
                    <ul>
                        {move || {
                            appointments.get().map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p class="patient-page__empty">"Nothing booked yet"</p> }
                                        .into_any()
                                }
                                Ok(list) => list
                                    .into_iter()
                                    .map(|slot| {
                                        view! {
                                            <li class="patient-page__appointment">{slot.starts_at}</li>
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
