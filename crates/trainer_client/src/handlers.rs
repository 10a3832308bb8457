//! Click handlers: turn what the row inputs hold into API calls.

use std::sync::Arc;

use trainer_common::{Originals, Trainer, UpdateRequest};

use crate::error::{ClientError, Result};
use crate::render::{field_id, Control, Field, CREATE_ROW};
use crate::transport::TrainerApi;

/// Reads the current value of an input by element id.
pub trait FieldSource {
    fn field_value(&self, id: &str) -> Option<String>;
}

/// Ids of the clicked element and of its parent.
///
/// Clicks on a button's inner spans land on an element without an id, so the
/// parent is consulted. Nothing further up is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub id: String,
    pub parent_id: Option<String>,
}

impl ClickTarget {
    pub fn new(id: impl Into<String>, parent_id: Option<String>) -> Self {
        Self {
            id: id.into(),
            parent_id,
        }
    }
}

/// Row index encoded in `{prefix}{index}` on the target, or on its parent when
/// the target has no id.
pub fn row_index(control: Control, target: &ClickTarget) -> Result<usize> {
    let id = if target.id.is_empty() {
        target.parent_id.as_deref().unwrap_or_default()
    } else {
        target.id.as_str()
    };

    id.strip_prefix(control.prefix())
        .and_then(|index| index.parse::<usize>().ok())
        .ok_or_else(|| ClientError::row_index(id))
}

/// Parse an age the way a browser's `parseInt(value, 10)` reads it: skip
/// leading whitespace, take an optional sign and the leading digits.
pub fn parse_age(value: &str) -> Result<i64> {
    let trimmed = value.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .map_or(unsigned, |end| &unsigned[..end]);
    if digits.is_empty() {
        return Err(ClientError::invalid_age(value));
    }

    let magnitude: i64 = digits.parse().map_err(|_| ClientError::invalid_age(value))?;
    Ok(if trimmed.starts_with('-') { -magnitude } else { magnitude })
}

/// The record row `index` currently shows.
pub fn read_trainer(fields: &impl FieldSource, index: usize) -> Result<Trainer> {
    let read = |field: Field| {
        let id = field_id(field, index);
        fields
            .field_value(&id)
            .ok_or_else(|| ClientError::missing_field(id))
    };

    Ok(Trainer {
        name: read(Field::Name)?,
        age: parse_age(&read(Field::Age)?)?,
        city: read(Field::City)?,
    })
}

/// Handlers bound to the snapshot a render pass was built from.
#[derive(Clone)]
pub struct Handlers {
    api: TrainerApi,
    originals: Arc<Originals>,
}

impl Handlers {
    pub fn new(api: TrainerApi, originals: Arc<Originals>) -> Self {
        Self { api, originals }
    }

    pub fn originals(&self) -> &Originals {
        &self.originals
    }

    pub fn on_create(&self, fields: &impl FieldSource) -> Result<()> {
        let trainer = read_trainer(fields, CREATE_ROW)?;
        self.api.create(&trainer)
    }

    pub fn on_delete(&self, target: &ClickTarget, fields: &impl FieldSource) -> Result<()> {
        let index = row_index(Control::Delete, target)?;
        let trainer = read_trainer(fields, index)?;
        self.api.delete(&trainer)
    }

    pub fn on_update(&self, target: &ClickTarget, fields: &impl FieldSource) -> Result<()> {
        let index = row_index(Control::Update, target)?;
        let replacement = read_trainer(fields, index)?;
        let original = self
            .originals
            .get(index)
            .cloned()
            .ok_or(ClientError::MissingOriginal { index })?;
        self.api.update(&UpdateRequest {
            original,
            replacement,
        })
    }

    /// Report a handler failure to the user. Nothing was sent.
    pub fn report(&self, err: &ClientError) {
        log::error!("[Handlers] {err}");
        self.api.notifier().alert(&err.to_string());
    }
}
