//! # Recommendation Engine
//!
//! In-process wrapper tying the submission store to the aggregation
//! pipeline. The engine validates rows on the way in, recomputes the
//! canonical map in full on every read (the pipeline is pure and holds no
//! state between calls), and reuses the quantizer for location-scoped
//! deletes.

pub mod submission_store;

pub use submission_store::{StoredSubmission, SubmissionStore};

use log::{debug, warn};

use crate::canonical::{aggregate_submissions, build_canonical_map, CanonicalMap};
use crate::grouping::accumulate_submissions;
use crate::quantize::quantize_location;
use crate::{GroupConfig, Result, Submission};

/// Engine serving aggregated place recommendations over a row store.
#[derive(Debug)]
pub struct RecommendationEngine {
    store: SubmissionStore,
    config: GroupConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create a new engine with default grouping configuration.
    pub fn new() -> Self {
        Self {
            store: SubmissionStore::new(),
            config: GroupConfig::default(),
        }
    }

    /// Create a new engine with custom grouping configuration.
    pub fn with_config(config: GroupConfig) -> Self {
        Self {
            store: SubmissionStore::new(),
            config,
        }
    }

    // ========================================================================
    // Submission Management
    // ========================================================================

    /// Validate and store a submission, returning its assigned identifier.
    ///
    /// Rejects rows missing a place name or reason and rows with non-finite
    /// coordinates; everything downstream assumes rows are well-formed.
    pub fn add_submission(&mut self, submission: Submission) -> Result<u64> {
        submission.validate()?;
        let id = self.store.insert(submission);
        Ok(id)
    }

    /// Delete every stored row at the quantized location of `(x, y)`.
    ///
    /// Returns the number of rows removed. The place name is only used for
    /// logging; matching is purely by location key, the same test the
    /// aggregation uses to merge rows.
    pub fn remove_place(&mut self, place_name: &str, x: f64, y: f64) -> usize {
        let removed = self.store.delete_matching(x, y, self.config.tolerance);
        debug!(
            "removed {} submission(s) for '{}' at {}",
            removed,
            place_name,
            quantize_location(x, y, self.config.tolerance)
        );
        removed
    }

    /// Number of stored submissions.
    pub fn submission_count(&self) -> usize {
        self.store.len()
    }

    /// Clear all stored submissions.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    // ========================================================================
    // Aggregated Reads
    // ========================================================================

    /// Build the canonical entry map from the current rows.
    ///
    /// Fetches the full batch newest first and recomputes the aggregation
    /// from scratch; nothing is cached across calls.
    pub fn canonical_entries(&self) -> CanonicalMap {
        let rows = self.store.fetch_all_desc();
        let entries = aggregate_submissions(&rows, &self.config);
        debug!(
            "aggregated {} submission(s) into {} canonical entries",
            rows.len(),
            entries.len()
        );
        entries
    }

    /// Get the canonical entry map as a JSON string.
    ///
    /// Serializes as `{ displayKey: { placeName, address, x, y, reasons } }`
    /// preserving first-seen order.
    pub fn canonical_entries_json(&self) -> String {
        let entries = self.canonical_entries();
        serde_json::to_string(&entries).unwrap_or_else(|e| {
            warn!("Failed to serialize canonical entries: {}", e);
            "{}".to_string()
        })
    }

    // ========================================================================
    // Configuration & Statistics
    // ========================================================================

    /// Get current grouping configuration.
    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Update grouping configuration. Takes effect on the next read.
    pub fn set_config(&mut self, config: GroupConfig) {
        self.config = config;
    }

    /// Get engine statistics.
    pub fn stats(&self) -> EngineStats {
        let rows = self.store.fetch_all_desc();
        let groups = accumulate_submissions(&rows, &self.config);
        let entries = build_canonical_map(groups.values(), &self.config);
        EngineStats {
            submission_count: self.store.len() as u32,
            location_count: groups.len() as u32,
            entry_count: entries.len() as u32,
        }
    }
}

/// Engine statistics for monitoring.
#[derive(Debug, Clone)]
pub struct EngineStats {
    pub submission_count: u32,
    /// Distinct quantized locations in the current rows
    pub location_count: u32,
    pub entry_count: u32,
}
