//! Group code matching between exit requests and timetable cells
//!
//! Requests name a group the way the roster does (`1A`) while the timetable
//! may store a qualified code (`E_1A`). The rule is a heuristic kept here so
//! it can be swapped without touching lookup or dispatch code.

use exitpass_domain::constants::QUALIFIED_GROUP_MARKER;
use exitpass_domain::GroupSpec;

/// Whether a requested group is taught in a timetable cell.
///
/// - list cell: exact membership
/// - single cell: exact equality, or the request is a substring of a code
///   containing `_`
///
/// Case-sensitive, no trimming.
pub fn group_matches(requested: &str, cell: &GroupSpec) -> bool {
    match cell {
        GroupSpec::Multiple(codes) => codes.iter().any(|code| code == requested),
        GroupSpec::Single(code) => {
            code == requested
                || (code.contains(requested) && code.contains(QUALIFIED_GROUP_MARKER))
        }
    }
}
