//! What the list looks like, independent of the DOM.
//!
//! A render pass turns one [`Originals`] snapshot into rows: one per listed
//! record at indices 1..=N, then the blank creation row at index 0. Element
//! ids are `{field}_{index}` and `{control}_{index}`, unique within a pass.

use trainer_common::{Originals, Trainer};

/// Row index of the blank creation row.
pub const CREATE_ROW: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    City,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Age, Field::City];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::City => "city",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Age => "number",
            Self::Name | Self::City => "text",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Age => "Age",
            Self::City => "City",
        }
    }
}

/// Buttons a row can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Create,
    Update,
    Delete,
}

impl Control {
    /// Id prefix, followed by the row index.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Create => "create_",
            Self::Update => "update_",
            Self::Delete => "delete_",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "add",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Material Symbols ligature shown next to the label.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Create => "add_circle",
            Self::Update => "change_circle",
            Self::Delete => "delete",
        }
    }
}

pub fn field_id(field: Field, index: usize) -> String {
    format!("{}_{index}", field.key())
}

pub fn control_id(control: Control, index: usize) -> String {
    format!("{}{index}", control.prefix())
}

/// One fieldset worth of inputs and buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub name: String,
    /// Age as the input shows it; empty on the creation row.
    pub age: String,
    pub city: String,
}

impl RowView {
    pub fn listed(index: usize, trainer: &Trainer) -> Self {
        Self {
            index,
            name: trainer.name.clone(),
            age: trainer.age.to_string(),
            city: trainer.city.clone(),
        }
    }

    pub fn blank() -> Self {
        Self {
            index: CREATE_ROW,
            name: String::new(),
            age: String::new(),
            city: String::new(),
        }
    }

    pub fn is_create_row(&self) -> bool {
        self.index == CREATE_ROW
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::City => &self.city,
        }
    }

    pub fn controls(&self) -> &'static [Control] {
        if self.is_create_row() {
            &[Control::Create]
        } else {
            &[Control::Update, Control::Delete]
        }
    }
}

pub fn render_rows(originals: &Originals) -> Vec<RowView> {
    originals
        .iter()
        .map(|(index, trainer)| RowView::listed(index, trainer))
        .chain(std::iter::once(RowView::blank()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::league;
    use std::collections::HashSet;

    #[test]
    fn test_n_records_render_n_plus_one_rows() {
        let rows = render_rows(&Originals::new(league()));
        assert_eq!(rows.len(), 4);

        let populated: Vec<usize> = rows.iter().filter(|r| !r.is_create_row()).map(|r| r.index).collect();
        assert_eq!(populated, vec![1, 2, 3]);
        assert_eq!(rows.iter().filter(|r| r.is_create_row()).count(), 1);
        assert_eq!(rows.last(), Some(&RowView::blank()));
    }

    #[test]
    fn test_empty_list_renders_only_the_blank_row() {
        let rows = render_rows(&Originals::default());
        assert_eq!(rows, vec![RowView::blank()]);
    }

    #[test]
    fn test_rows_are_prefilled_from_records() {
        let rows = render_rows(&Originals::new(league()));
        assert_eq!(rows[1].value(Field::Name), "Misty");
        assert_eq!(rows[1].value(Field::Age), "22");
        assert_eq!(rows[1].value(Field::City), "Cerulean City");
    }

    #[test]
    fn test_controls_per_row() {
        let rows = render_rows(&Originals::new(league()));
        assert_eq!(rows[0].controls(), &[Control::Update, Control::Delete]);
        assert_eq!(rows[3].controls(), &[Control::Create]);
    }

    #[test]
    fn test_ids_are_unique_per_pass() {
        let rows = render_rows(&Originals::new(league()));
        let mut ids = HashSet::new();
        for row in &rows {
            for field in Field::ALL {
                assert!(ids.insert(field_id(field, row.index)));
            }
            for control in row.controls() {
                assert!(ids.insert(control_id(*control, row.index)));
            }
        }
        assert_eq!(ids.len(), 4 * 3 + 3 * 2 + 1);
    }

    #[test]
    fn test_id_format() {
        assert_eq!(field_id(Field::Name, 3), "name_3");
        assert_eq!(field_id(Field::Age, 0), "age_0");
        assert_eq!(control_id(Control::Delete, 12), "delete_12");
        assert_eq!(control_id(Control::Update, 1), "update_1");
    }

    #[test]
    fn test_field_inputs() {
        assert_eq!(Field::Age.input_type(), "number");
        assert_eq!(Field::Name.input_type(), "text");
        assert_eq!(Field::City.placeholder(), "City");
    }
}
