//! Submission accumulation.
//!
//! This module folds an ordered batch of raw submissions into one group per
//! distinct location key. Input order is significant: the first row seen for
//! a key donates the group's representative coordinates, and the order in
//! which distinct names/addresses first appear drives the tie-break rule in
//! [`select_representative`](crate::select_representative).

use indexmap::IndexMap;

use crate::quantize::{quantize_location, LocationKey};
use crate::{GroupConfig, Submission};

/// Insertion-ordered frequency counter.
///
/// Exposes both the count per value and the order in which distinct values
/// were first inserted; the latter is what makes representative selection
/// deterministic when counts tie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    counts: IndexMap<String, u32>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }

    /// Count an occurrence of `value`, registering it on first sight.
    pub fn increment(&mut self, value: &str) {
        *self.counts.entry(value.to_string()).or_insert(0) += 1;
    }

    /// Get the count for a value (0 if never seen).
    pub fn count(&self, value: &str) -> u32 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Iterate `(value, count)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Iterate distinct values in first-insertion order.
    pub fn values_in_order(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// The value with the strictly greatest count; ties go to the value that
    /// was inserted first.
    pub fn most_frequent(&self) -> Option<&str> {
        let mut best: Option<(&str, u32)> = None;
        for (value, count) in self.iter() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((value, count)),
            }
        }
        best.map(|(value, _)| value)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no values have been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Accumulated submissions for one quantized location.
///
/// Lives for the duration of a single aggregation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceGroup {
    /// Quantized key all member rows share
    pub location_key: LocationKey,
    /// Longitude of the first row seen for this key, stored verbatim
    pub x: f64,
    /// Latitude of the first row seen for this key, stored verbatim
    pub y: f64,
    /// Submitted names with counts, in first-submission order
    pub name_counts: FrequencyTable,
    /// Submitted addresses with counts, in first-submission order
    pub address_counts: FrequencyTable,
    /// Non-empty reasons in batch order
    pub reasons: Vec<String>,
}

impl PlaceGroup {
    /// Create a group seeded with the coordinates of its first row.
    pub fn new(location_key: LocationKey, x: f64, y: f64) -> Self {
        Self {
            location_key,
            x,
            y,
            name_counts: FrequencyTable::new(),
            address_counts: FrequencyTable::new(),
            reasons: Vec::new(),
        }
    }

    /// Fold one row into the group.
    ///
    /// Empty names, addresses and reasons are silently skipped; such rows
    /// still count toward the group's existence but contribute nothing to
    /// the tables or the reason list.
    pub fn absorb(&mut self, row: &Submission) {
        if !row.place_name.is_empty() {
            self.name_counts.increment(&row.place_name);
        }
        if !row.address.is_empty() {
            self.address_counts.increment(&row.address);
        }
        if !row.reason.is_empty() {
            self.reasons.push(row.reason.clone());
        }
    }
}

/// Fold an ordered batch of submissions into one group per location key.
///
/// Rows are processed in the given order — the row store delivers them
/// newest first — and the returned map preserves the order in which keys
/// were first encountered, which downstream collision resolution relies on.
///
/// No validation happens here: a row with a non-finite coordinate would be
/// bucketed under a degenerate key. The engine's insert path rejects such
/// rows before they can ever be stored.
///
/// # Example
/// ```
/// use placematch::{accumulate_submissions, GroupConfig, Submission};
///
/// let rows = vec![
///     Submission::new("Cafe X", "", 127.0, 37.0, "r1", 2),
///     Submission::new("Cafe X", "", 129.0, 35.0, "r2", 1),
/// ];
/// let groups = accumulate_submissions(&rows, &GroupConfig::default());
/// assert_eq!(groups.len(), 2);
/// ```
pub fn accumulate_submissions(
    rows: &[Submission],
    config: &GroupConfig,
) -> IndexMap<LocationKey, PlaceGroup> {
    let mut groups: IndexMap<LocationKey, PlaceGroup> = IndexMap::new();

    for row in rows {
        let key = quantize_location(row.x, row.y, config.tolerance);
        let group = groups
            .entry(key.clone())
            .or_insert_with(|| PlaceGroup::new(key, row.x, row.y));
        group.absorb(row);
    }

    groups
}
