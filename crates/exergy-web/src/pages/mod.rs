//! Page Components

mod home;
mod solutions;

pub use home::HomePage;
pub use solutions::SolutionsPage;

use leptos::prelude::*;

use exergy_core::site::Route;

/// Shown for any path the router does not know
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <a href=Route::Home.path() class="btn btn-outline">"← Home"</a>
        </section>
    }
}
