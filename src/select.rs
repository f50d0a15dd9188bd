//! Representative name and address selection.
//!
//! Each location group labels itself with the most frequently submitted name
//! and address. Ties on count go to the value submitted earliest, so the
//! outcome is a pure function of the input batch order rather than of map
//! iteration luck.

use crate::grouping::PlaceGroup;

/// Label used when no row in a group carried a place name.
pub const UNKNOWN_PLACE: &str = "unknown place";

/// The chosen display name and address for one location group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Representative {
    pub place_name: String,
    pub address: String,
}

/// Pick the canonical name and address for a group.
///
/// Name: the entry in `name_counts` with the strictly greatest count,
/// falling back to [`UNKNOWN_PLACE`] when no row carried a name. Address:
/// same rule over `address_counts`, falling back to the empty string.
///
/// # Example
/// ```
/// use placematch::{quantize_location, select_representative, PlaceGroup, Submission};
///
/// let key = quantize_location(127.0, 37.0, 0.0001);
/// let mut group = PlaceGroup::new(key, 127.0, 37.0);
/// group.absorb(&Submission::new("A Cafe", "Main St", 127.0, 37.0, "good", 2));
/// group.absorb(&Submission::new("A Cafe Seoul", "Main St", 127.0, 37.0, "nice", 1));
///
/// // One vote each: the earlier-submitted name wins
/// let rep = select_representative(&group);
/// assert_eq!(rep.place_name, "A Cafe");
/// assert_eq!(rep.address, "Main St");
/// ```
pub fn select_representative(group: &PlaceGroup) -> Representative {
    let place_name = group
        .name_counts
        .most_frequent()
        .unwrap_or(UNKNOWN_PLACE)
        .to_string();

    let address = group
        .address_counts
        .most_frequent()
        .unwrap_or("")
        .to_string();

    Representative {
        place_name,
        address,
    }
}
