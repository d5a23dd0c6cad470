use crate::domain::comment::CommentRecord;
use rand::seq::SliceRandom;
use rand::Rng;

/// Ordered records from one upload. Row order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCollection {
    records: Vec<CommentRecord>,
}

impl RecordCollection {
    pub fn new(records: Vec<CommentRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommentRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&CommentRecord> {
        self.records.get(index)
    }

    /// Uniform draw over the whole collection. Every call is independent.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&CommentRecord> {
        self.records.choose(rng)
    }
}

impl From<Vec<CommentRecord>> for RecordCollection {
    fn from(records: Vec<CommentRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a CommentRecord;
    type IntoIter = std::slice::Iter<'a, CommentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
