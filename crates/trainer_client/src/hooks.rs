use std::sync::Arc;

use leptos::prelude::*;
use trainer_common::Originals;

use crate::context::TrainerContext;

/// Hook to access the trainer context.
///
/// # Panics
///
/// Panics if called outside of a `TrainerProvider` context.
pub fn use_trainer_context() -> TrainerContext {
    expect_context::<TrainerContext>()
}

/// Hook to read the snapshot of the last successful list.
pub fn use_originals() -> ReadSignal<Arc<Originals>> {
    use_trainer_context().originals.read_only()
}
