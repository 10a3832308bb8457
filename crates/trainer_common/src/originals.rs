use crate::messages::Trainer;

/// The records of the last successful list, addressed by row index.
///
/// Row indices start at 1 in response order. Index 0 belongs to the blank
/// creation row and never resolves to a record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Originals {
    trainers: Vec<Trainer>,
}

impl Originals {
    pub fn new(trainers: Vec<Trainer>) -> Self {
        Self { trainers }
    }

    /// Replace every entry with `trainers`, indexed 1..=N.
    pub fn update(&mut self, trainers: Vec<Trainer>) {
        self.trainers = trainers;
    }

    /// The record listed at `index`, if that row exists.
    pub fn get(&self, index: usize) -> Option<&Trainer> {
        index.checked_sub(1).and_then(|i| self.trainers.get(i))
    }

    pub fn len(&self) -> usize {
        self.trainers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trainers.is_empty()
    }

    /// `(row_index, record)` pairs starting at row 1.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Trainer)> {
        self.trainers.iter().enumerate().map(|(i, t)| (i + 1, t))
    }
}

impl From<Vec<Trainer>> for Originals {
    fn from(trainers: Vec<Trainer>) -> Self {
        Self::new(trainers)
    }
}
