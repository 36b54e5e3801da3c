//! Solutions Page
//!
//! Placeholder until the solutions catalogue is written.

use leptos::prelude::*;

use exergy_core::site::Route;

use crate::components::PageShell;

#[component]
pub fn SolutionsPage() -> impl IntoView {
    view! {
        <PageShell route=Route::Solutions>
            <section class="placeholder">
                <div class="placeholder-icon" aria-hidden="true">"⛑"</div>
                <h1>"Solutions"</h1>
                <p>
                    "We're working on it! This site is currently under construction. Please check back soon."
                </p>
                <a href=Route::Home.path() class="btn btn-outline">"← Home"</a>
            </section>
        </PageShell>
    }
}
