//! UI Components
//!
//! The shell shared by every page: navigation bar, mobile menu, footer and
//! the toast stack.

use exergy_core::notice::TOAST_DURATION;
use exergy_core::site::{
    self, COMPANY_NAME, COPYRIGHT, FOOTER_COLUMNS, LEGAL_LINKS, LINKEDIN_URL, LOGO_SRC, NAV_LINKS,
    NavLink, Route,
};
use exergy_core::{Notice, Toasts};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::browser::{scroll_to_contact, set_document_title};
use crate::contact::ContactSection;

/// Handle to the toast stack, provided by `App`
#[derive(Clone, Copy)]
pub struct ToastContext(RwSignal<Toasts>);

impl ToastContext {
    pub fn new() -> Self {
        Self(RwSignal::new(Toasts::new()))
    }

    /// Show a notice and schedule its removal
    pub fn show(self, notice: Notice) {
        let Some(id) = self.0.try_update(|toasts| toasts.push(notice)) else {
            return;
        };
        set_timeout(move || self.dismiss(id), TOAST_DURATION);
    }

    pub fn dismiss(self, id: u64) {
        self.0.update(|toasts| {
            toasts.dismiss(id);
        });
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Common page frame: navigation, page body, contact section, footer
#[component]
pub fn PageShell(route: Route, children: Children) -> impl IntoView {
    set_document_title(route.title());

    view! {
        <div class="page">
            <Navigation />
            {children()}
            <ContactSection />
            <Footer />
        </div>
    }
}

fn contact_click(ev: &MouseEvent) {
    ev.prevent_default();
    scroll_to_contact();
}

#[component]
pub fn Navigation() -> impl IntoView {
    let pathname = use_location().pathname;
    let (menu_open, set_menu_open) = signal(false);

    let link_class = move |link: NavLink, base: &'static str| {
        move || {
            if pathname.with(|p| link.is_active(p)) {
                format!("{base} active")
            } else {
                base.to_string()
            }
        }
    };

    view! {
        <nav class="site-nav">
            <div class="nav-inner">
                <a href=Route::Home.path() class="brand">
                    <img src=LOGO_SRC alt="Exergy Logo" class="brand-logo" />
                    <span class="brand-name">{COMPANY_NAME}</span>
                </a>

                <div class="nav-links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class=link_class(link, "nav-link")>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="nav-actions">
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="nav-linkedin"
                        aria-label="LinkedIn"
                    >
                        "in"
                    </a>
                    <button
                        class="btn btn-primary nav-contact"
                        on:click=move |ev| contact_click(&ev)
                    >
                        "Contact Us"
                    </button>
                    <button
                        class="menu-toggle"
                        aria-label="Open menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>
            </div>
        </nav>

        <Show when=move || menu_open.get()>
            <div class="mobile-menu">
                <button
                    class="menu-close"
                    aria-label="Close menu"
                    on:click=move |_| set_menu_open.set(false)
                >
                    "✕"
                </button>
                {NAV_LINKS
                    .into_iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                class=link_class(link, "mobile-link")
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
                <hr class="mobile-divider" />
                <a
                    href=LINKEDIN_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="mobile-link"
                    on:click=move |_| set_menu_open.set(false)
                >
                    "LinkedIn"
                </a>
                <button
                    class="btn btn-primary"
                    on:click=move |ev| {
                        contact_click(&ev);
                        set_menu_open.set(false);
                    }
                >
                    "Contact Us"
                </button>
            </div>
        </Show>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <a href=Route::Home.path() class="brand">
                        <img src=LOGO_SRC alt="Exergy Logo" class="brand-logo" />
                        <span class="brand-name">{COMPANY_NAME}</span>
                    </a>
                    <p>{site::TAGLINE}</p>
                </div>
                {FOOTER_COLUMNS
                    .into_iter()
                    .map(|column| {
                        view! {
                            <div class="footer-column">
                                <h4>{column.heading}</h4>
                                <ul>
                                    {column
                                        .links
                                        .iter()
                                        .map(|label| view! { <li><a href="#">{*label}</a></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="footer-bottom">
                <p>{COPYRIGHT}</p>
                <div class="footer-legal">
                    {LEGAL_LINKS
                        .into_iter()
                        .map(|label| view! { <a href="#">{label}</a> })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}

/// Stack of transient notices in the corner of the screen
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<ToastContext>();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.0.with(Toasts::to_vec)
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast toast-{}", toast.notice.kind.as_str());
                    view! {
                        <li class=class role="status">
                            <span>{toast.notice.message}</span>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
