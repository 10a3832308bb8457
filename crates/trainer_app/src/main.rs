//! Trainer records page.
//!
//! Serve it next to the trainer API so `/api/v1/trainer` resolves:
//!   cd crates/trainer_app
//!   trunk serve --proxy-backend=http://127.0.0.1:8080/api/
//!
//! The inline `trainer-config` block in `index.html` can point the page elsewhere.

use std::sync::Arc;

use leptos::prelude::*;
use trainer_client::{
    config_text, init_logging, BrowserNotifier, ClientConfig, TrainerList, TrainerProvider,
    XhrBackend, CONFIG_ELEMENT_ID,
};

fn main() {
    let loaded = ClientConfig::load(config_text(CONFIG_ELEMENT_ID).as_deref());
    let config = loaded.as_ref().ok().cloned().unwrap_or_default();

    init_logging(config.log_level);
    if let Err(err) = &loaded {
        log::error!("ignoring page configuration: {err}");
    }

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[component]
fn App(config: ClientConfig) -> impl IntoView {
    view! {
        <TrainerProvider config=config backend=Arc::new(XhrBackend) notifier=Arc::new(BrowserNotifier)>
            <main>
                <h1>"Trainers"</h1>
                <TrainerList />
            </main>
        </TrainerProvider>
    }
}
