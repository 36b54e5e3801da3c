//! # exergy-core
//!
//! Contact form handling and shared site content for the Exergy marketing site.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        ContactForm                            │
//! │  ┌──────────────────┐  ┌─────────────┐  ┌──────────────────┐  │
//! │  │ ContactSubmission│  │ SubmitState │  │   EmailRelay     │  │
//! │  │   (validation)   │──│ Idle/Sending│──│   (Strategy)     │  │
//! │  └──────────────────┘  └─────────────┘  └──────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//!                            Notice ──▶ Toasts
//! ```
//!
//! The `EmailRelay` trait keeps the form independent of the hosted relay, so
//! tests drive it with an in-memory double and the browser uses `EmailJsRelay`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use exergy_core::{ContactForm, EmailJsRelay, Field, RelayConfig};
//!
//! let relay = EmailJsRelay::new(RelayConfig::embedded())?;
//! let mut form = ContactForm::new();
//! form.set(Field::Name, "Ada");
//! // ...
//! let notice = form.submit(&relay).await?;
//! ```

pub mod config;
pub mod contact;
pub mod error;
pub mod form;
pub mod notice;
pub mod relay;
pub mod site;

pub use config::RelayConfig;
pub use contact::{ContactSubmission, Field, ValidationError};
pub use error::{ContactError, Result};
pub use form::{ContactForm, SubmitState};
pub use notice::{Notice, NoticeKind, Toast, Toasts};
pub use relay::{EmailJsRelay, EmailRelay, RelayStatus};
pub use site::Route;
