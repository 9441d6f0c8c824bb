//! Which periods an exit affects

use chrono::NaiveTime;
use exitpass_domain::constants::{RETURN_LABELS, RETURN_SELECTION_SEPARATOR};
use tracing::debug;

use crate::calendar::SessionCalendar;

/// Ordered list of period names whose teachers must hear about an exit.
///
/// 1. the period running at `now`, if any;
/// 2. not returning: every later class period of the day;
/// 3. returning: each selected hour label mapped to its period, in the
///    caller's order, unless already listed. Unknown labels are skipped.
///
/// Outside school hours step 2 adds nothing while step 3 still applies.
pub fn resolve_scope<S: AsRef<str>>(
    calendar: &SessionCalendar,
    now: NaiveTime,
    returns: bool,
    return_selection: &[S],
) -> Vec<String> {
    let mut scope: Vec<String> = Vec::new();
    let current = calendar.resolve(now);

    if let Some(active) = &current {
        scope.push(active.name.clone());
    }

    if returns {
        for label in return_selection {
            let label = label.as_ref();
            match label_to_period(label) {
                Some(period) => push_unique(&mut scope, period),
                None => debug!(label, "ignoring unknown return hour label"),
            }
        }
    } else if let Some(active) = &current {
        for window in calendar.classes_after(active.index) {
            push_unique(&mut scope, &window.name);
        }
    }

    scope
}

/// Period name for a return-hour label such as `"3ª"`.
pub fn label_to_period(label: &str) -> Option<&'static str> {
    let label = label.trim();
    RETURN_LABELS.iter().find(|(l, _)| *l == label).map(|&(_, period)| period)
}

/// Split the form's hours string (`"1ª, 2ª"`) into labels.
pub fn parse_return_selection(raw: &str) -> Vec<String> {
    raw.split(RETURN_SELECTION_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn push_unique(scope: &mut Vec<String>, period: &str) {
    if !scope.iter().any(|p| p == period) {
        scope.push(period.to_string());
    }
}
