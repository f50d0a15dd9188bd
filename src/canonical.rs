//! Canonical output construction and name-collision resolution.
//!
//! Turns the accumulator's location groups into the final display-key map.
//! Two different locations can independently elect the same name; the second
//! one to arrive is re-keyed with its location key appended so both survive
//! in the output.

use indexmap::IndexMap;

use crate::grouping::{accumulate_submissions, PlaceGroup};
use crate::quantize::quantize_location;
use crate::select::{select_representative, Representative};
use crate::{CanonicalEntry, GroupConfig, Submission};

/// Ordered mapping from display key to canonical entry, in the order the
/// underlying locations were first encountered.
pub type CanonicalMap = IndexMap<String, CanonicalEntry>;

/// Build the canonical display-key map from location groups.
///
/// Groups must be supplied in first-seen order (the accumulator's map values
/// already are). For each group the representative name becomes the candidate
/// display key:
///
/// - free slot: the group moves in under its plain name;
/// - occupied by the same location (the occupant's coordinates quantize to
///   this group's key — only reachable when the caller feeds repeated keys,
///   e.g. a merged second pass): the group's reasons are appended to the
///   occupant;
/// - occupied by a different location: the group is inserted under
///   `"{name}_{locationKey}"` instead.
///
/// A new group is only ever compared against the single occupant of the
/// plain-name slot, never against previously suffixed entries, so two
/// colliding groups that compute the same suffix overwrite each other while
/// a third location holds the plain slot. That matches the behavior of the
/// serving path this library replaces; see DESIGN.md for the open question.
pub fn build_canonical_map<'a, I>(groups: I, config: &GroupConfig) -> CanonicalMap
where
    I: IntoIterator<Item = &'a PlaceGroup>,
{
    let mut entries = CanonicalMap::new();

    for group in groups {
        let rep = select_representative(group);

        // Does the plain-name slot hold this same physical location?
        let occupant_matches = entries.get(&rep.place_name).map(|occupant| {
            quantize_location(occupant.x, occupant.y, config.tolerance) == group.location_key
        });

        match occupant_matches {
            None => {
                let display_key = rep.place_name.clone();
                entries.insert(display_key.clone(), make_entry(display_key, rep, group));
            }
            Some(true) => {
                if let Some(occupant) = entries.get_mut(&rep.place_name) {
                    occupant.reasons.extend(group.reasons.iter().cloned());
                }
            }
            Some(false) => {
                let display_key = format!("{}_{}", rep.place_name, group.location_key);
                entries.insert(display_key.clone(), make_entry(display_key, rep, group));
            }
        }
    }

    entries
}

fn make_entry(display_key: String, rep: Representative, group: &PlaceGroup) -> CanonicalEntry {
    CanonicalEntry {
        display_key,
        place_name: rep.place_name,
        address: rep.address,
        x: group.x,
        y: group.y,
        reasons: group.reasons.clone(),
    }
}

/// Run the full aggregation pipeline over an ordered submission batch.
///
/// Pure and stateless: the same batch always yields byte-identical output,
/// and concurrent callers never share anything. Cost is linear in row count.
///
/// # Example
/// ```
/// use placematch::{aggregate_submissions, GroupConfig, Submission};
///
/// let rows = vec![
///     Submission::new("Cafe X", "", 127.0, 37.0, "r1", 2),
///     Submission::new("Cafe X", "", 129.0, 35.0, "r2", 1),
/// ];
/// let entries = aggregate_submissions(&rows, &GroupConfig::default());
///
/// // Same chosen name at two locations: the later one gets a suffixed key
/// assert!(entries.contains_key("Cafe X"));
/// assert!(entries.contains_key("Cafe X_129.000000,35.000000"));
/// ```
pub fn aggregate_submissions(rows: &[Submission], config: &GroupConfig) -> CanonicalMap {
    let groups = accumulate_submissions(rows, config);
    build_canonical_map(groups.values(), config)
}
