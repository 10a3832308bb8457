use std::sync::Arc;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::context::TrainerContext;
use crate::transport::{HttpBackend, Notifier};

/// Provider component that builds the [`TrainerContext`] and issues the first list.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use trainer_client::{BrowserNotifier, ClientConfig, TrainerList, TrainerProvider, XhrBackend};
///
/// #[component]
/// pub fn App() -> impl IntoView {
///     view! {
///         <TrainerProvider
///             config=ClientConfig::default()
///             backend=Arc::new(XhrBackend)
///             notifier=Arc::new(BrowserNotifier)
///         >
///             <TrainerList />
///         </TrainerProvider>
///     }
/// }
/// ```
#[component]
pub fn TrainerProvider(
    /// Where the collection lives
    config: ClientConfig,
    /// Puts requests on the wire
    backend: Arc<dyn HttpBackend>,
    /// Shows alerts and diagnostics
    notifier: Arc<dyn Notifier>,
    /// Whether to list on mount (default: true)
    #[prop(optional)]
    auto_list: Option<bool>,
    /// Child components
    children: Children,
) -> impl IntoView {
    let ctx = TrainerContext::new(&config, backend, notifier);
    provide_context(ctx.clone());

    if auto_list.unwrap_or(true) {
        log::info!("[TrainerProvider] listing trainers from {}", ctx.api.base_path());
        ctx.api.list();
    }

    children()
}
