//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::{GuestRoute, ProtectedRoute};
use crate::components::main_layout::MainLayout;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage, question_create::QuestionCreatePage,
    register::RegisterPage,
};
use crate::state::{auth, ui::UiState};

/// Root application component.
///
/// Provides the session and UI contexts and sets up client-side routing.
/// The session starts from the stored token; protected routes verify it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(auth::initial_state());
    let ui = RwSignal::new(UiState::restore());
    provide_context(session);
    provide_context(ui);

    view! {
        <Title text="GradNote"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <GuestRoute><LoginPage/></GuestRoute> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <GuestRoute><RegisterPage/></GuestRoute> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <MainLayout>
                                    <DashboardPage/>
                                </MainLayout>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("questions"), StaticSegment("new"))
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <MainLayout>
                                    <QuestionCreatePage/>
                                </MainLayout>
                            </ProtectedRoute>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
