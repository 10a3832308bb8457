//! # Trainer Client
//!
//! Leptos front end for a trainer collection served at `/api/v1/trainer`.
//!
//! The page lists every trainer as an editable row plus one blank row for
//! creating a new one. Each button maps to one request:
//!
//! | Button | Request | Success |
//! |--------|---------|---------|
//! | add    | `POST` record | `201` |
//! | update | `PUT` `{original, replacement}` | `200` |
//! | delete | `DELETE` record | `204` |
//!
//! Any success triggers a fresh `GET` of the whole list, which replaces the
//! [`Originals`](trainer_common::Originals) snapshot and re-renders every row.
//! Rows are identified by position only; a server that reorders its list
//! between a render and a click makes that click target the wrong record.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use leptos::prelude::*;
//! use trainer_client::{BrowserNotifier, ClientConfig, TrainerList, TrainerProvider, XhrBackend};
//!
//! fn main() {
//!     leptos::mount::mount_to_body(|| view! {
//!         <TrainerProvider
//!             config=ClientConfig::default()
//!             backend=Arc::new(XhrBackend)
//!             notifier=Arc::new(BrowserNotifier)
//!         >
//!             <TrainerList />
//!         </TrainerProvider>
//!     });
//! }
//! ```

// Module declarations
mod browser;
mod components;
mod config;
mod context;
mod error;
mod handlers;
mod hooks;
mod logging;
mod provider;
mod render;
mod transport;

#[cfg(test)]
mod testing;

// Re-exports
pub use browser::{click_target, config_text, BrowserNotifier, DomFields, XhrBackend};
pub use components::{TrainerList, TrainerRow};
pub use config::{ClientConfig, LogLevel, CONFIG_ELEMENT_ID};
pub use context::TrainerContext;
pub use error::{ClientError, Result};
pub use handlers::{parse_age, read_trainer, row_index, ClickTarget, FieldSource, Handlers};
pub use hooks::{use_originals, use_trainer_context};
pub use logging::init_logging;
pub use provider::TrainerProvider;
pub use render::{control_id, field_id, render_rows, Control, Field, RowView, CREATE_ROW};
pub use transport::{
    unexpected_alert, ApiRequest, HttpBackend, HttpResponse, ListSink, Method, Notifier,
    Operation, Outcome, ResponseCallback, TrainerApi, BAD_REQUEST_ALERT,
};

// Re-export the shared wire types for convenience
pub use trainer_common::{status, Originals, Trainer, UpdateRequest, BASE_PATH};
