//! Submission row storage.
//!
//! In-memory stand-in for the external row store: insert with assigned ids,
//! fetch everything newest first, and delete by quantized location. The
//! aggregation pipeline itself never touches the store; it only consumes the
//! batch `fetch_all_desc` hands out.

use crate::quantize::quantize_location;
use crate::Submission;

/// A stored submission with its assigned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSubmission {
    pub id: u64,
    pub submission: Submission,
}

/// In-memory store for raw submission rows.
#[derive(Debug)]
pub struct SubmissionStore {
    rows: Vec<StoredSubmission>,
    next_id: u64,
}

impl Default for SubmissionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Insert a row and return its assigned identifier.
    ///
    /// Field validation belongs to the engine boundary; the store accepts
    /// whatever it is given.
    pub fn insert(&mut self, submission: Submission) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(StoredSubmission { id, submission });
        id
    }

    /// Fetch all rows ordered by creation time descending.
    ///
    /// Rows with equal timestamps keep their insertion order, so repeated
    /// fetches of an unchanged store return the same sequence.
    pub fn fetch_all_desc(&self) -> Vec<Submission> {
        let mut rows: Vec<&StoredSubmission> = self.rows.iter().collect();
        rows.sort_by(|a, b| b.submission.created_at.cmp(&a.submission.created_at));
        rows.into_iter().map(|r| r.submission.clone()).collect()
    }

    /// Delete every row whose location key matches the given coordinates.
    ///
    /// Uses the same quantizer as the aggregation pipeline, so a delete
    /// removes exactly the rows that would have merged into one entry.
    /// Returns the number of rows removed.
    pub fn delete_matching(&mut self, x: f64, y: f64, tolerance: f64) -> usize {
        let target = quantize_location(x, y, tolerance);
        let before = self.rows.len();
        self.rows.retain(|r| {
            quantize_location(r.submission.x, r.submission.y, tolerance) != target
        });
        before - self.rows.len()
    }

    /// Get a stored row by its identifier.
    pub fn get(&self, id: u64) -> Option<&StoredSubmission> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Remove all rows.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
