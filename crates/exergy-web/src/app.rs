//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{ToastContext, Toaster};
use crate::pages::{HomePage, NotFoundPage, SolutionsPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(ToastContext::new());

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/solutions") view=SolutionsPage />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}
