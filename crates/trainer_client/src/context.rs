use std::sync::Arc;

use leptos::prelude::*;
use trainer_common::{Originals, Trainer};

use crate::config::ClientConfig;
use crate::handlers::Handlers;
use crate::transport::{HttpBackend, ListSink, Notifier, TrainerApi};

/// Context shared by the trainer components.
///
/// Provided by `TrainerProvider`. `originals` always holds the snapshot of the
/// last successful list; each list replaces it and re-renders every row.
#[derive(Clone)]
pub struct TrainerContext {
    /// API client whose list responses feed `originals`
    pub api: TrainerApi,
    /// Snapshot of the last successful list
    pub originals: RwSignal<Arc<Originals>>,
}

impl TrainerContext {
    pub fn new(
        config: &ClientConfig,
        backend: Arc<dyn HttpBackend>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let originals = RwSignal::new(Arc::new(Originals::default()));

        // Handlers built from an earlier render keep their own copy; only the
        // signal's snapshot is replaced.
        let on_list: ListSink = Arc::new(move |trainers: Vec<Trainer>| {
            originals.update(|snapshot| Arc::make_mut(snapshot).update(trainers));
        });

        Self {
            api: TrainerApi::new(config, backend, notifier, on_list),
            originals,
        }
    }

    /// Handlers bound to the current snapshot.
    pub fn handlers(&self) -> Handlers {
        Handlers::new(self.api.clone(), self.originals.get_untracked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::ClickTarget;
    use crate::testing::{league_json, FakeBackend, MapFields, RecordingNotifier};
    use trainer_common::UpdateRequest;

    fn context(backend: &Arc<FakeBackend>) -> TrainerContext {
        TrainerContext::new(
            &ClientConfig::default(),
            backend.clone(),
            Arc::new(RecordingNotifier::default()),
        )
    }

    #[test]
    fn test_list_replaces_snapshot() {
        let owner = Owner::new();
        owner.with(|| {
            let backend = Arc::new(FakeBackend::default());
            let ctx = context(&backend);
            assert!(ctx.originals.get_untracked().is_empty());

            ctx.api.list();
            backend.respond(200, &league_json());

            let snapshot = ctx.originals.get_untracked();
            assert_eq!(snapshot.len(), 3);
            assert!(snapshot.get(0).is_none());
            assert_eq!(snapshot.get(3), Some(&Trainer::new("Brock", 35, "Pewter City")));
        });
    }

    #[test]
    fn test_handlers_keep_the_snapshot_they_were_built_from() {
        let owner = Owner::new();
        owner.with(|| {
            let backend = Arc::new(FakeBackend::default());
            let ctx = context(&backend);
            ctx.api.list();
            backend.respond(200, &league_json());

            let handlers = ctx.handlers();

            ctx.api.list();
            backend.respond(200, r#"[{"name":"Gary","age":20,"city":"Pallet Town"}]"#);
            assert_eq!(ctx.originals.get_untracked().len(), 1);
            assert_eq!(handlers.originals().len(), 3);

            let fields = MapFields::default().with_row(2, "Misty", "23", "Cerulean City");
            handlers
                .on_update(&ClickTarget::new("update_2", None), &fields)
                .unwrap();

            let sent = backend.sent();
            let body: UpdateRequest =
                serde_json::from_str(sent.last().unwrap().body.as_deref().unwrap()).unwrap();
            assert_eq!(body.original, Trainer::new("Misty", 22, "Cerulean City"));
            assert_eq!(body.replacement.age, 23);
        });
    }
}
