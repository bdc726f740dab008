//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::guard::Guarded;
use crate::net::auth::AuthGateway;
use crate::pages::doctor::DoctorPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::patient::PatientPage;
use crate::pages::register::{RegisterDoctorPage, RegisterPatientPage};
use crate::routes;
use crate::state::session::{self, SessionState};

/// Root application component.
///
/// Creates the one session signal and the auth gateway, provides both
/// via context, and wires the route table to pages. The guarded routes
/// wrap their page in [`Guarded`] with the meta from the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Created once here; lives for the whole page session.
    let session = RwSignal::new(SessionState::default());
    let gateway = AuthGateway::new();
    provide_context(session);
    provide_context(gateway);

    // Resolve the session from any token a previous visit left behind.
    leptos::task::spawn_local(async move {
        session::refresh(session, &gateway).await;
    });

    view! {
        <Title text="MedBook"/>

        <Router>
            <NavBar/>
            <main class="app__main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=(StaticSegment("register"), StaticSegment("patient"))
                        view=RegisterPatientPage
                    />
                    <Route
                        path=(StaticSegment("register"), StaticSegment("doctor"))
                        view=RegisterDoctorPage
                    />
                    <Route
                        path=StaticSegment("patient")
                        view=|| {
                            view! {
                                <Guarded meta=routes::meta_for(routes::PATIENT)>
                                    <PatientPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("doctor")
                        view=|| {
                            view! {
                                <Guarded meta=routes::meta_for(routes::DOCTOR)>
                                    <DoctorPage/>
                                </Guarded>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
