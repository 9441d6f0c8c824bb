//! School day calendar
//!
//! Maps a wall-clock time to the class period running at that moment.

use chrono::NaiveTime;
use exitpass_domain::constants::SCHOOL_DAY_SESSIONS;
use exitpass_domain::{ActivePeriod, ExitPassError, Result, SessionWindow};

/// Ordered, non-overlapping list of the day's session windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCalendar {
    windows: Vec<SessionWindow>,
}

impl SessionCalendar {
    /// Build a calendar, rejecting unordered, overlapping or duplicate windows.
    ///
    /// Gaps between windows are allowed.
    pub fn new(windows: Vec<SessionWindow>) -> Result<Self> {
        for pair in windows.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.start < prev.end {
                return Err(ExitPassError::InvalidInput(format!(
                    "session '{}' ({}) overlaps or precedes '{}' (ends {})",
                    next.name, next.start, prev.name, prev.end
                )));
            }
        }

        for (i, window) in windows.iter().enumerate() {
            if windows[..i].iter().any(|w| w.name == window.name) {
                return Err(ExitPassError::InvalidInput(format!(
                    "duplicate session name '{}'",
                    window.name
                )));
            }
        }

        Ok(Self { windows })
    }

    /// The standard school day grid, 07:35 to 21:45.
    pub fn school_day() -> Result<Self> {
        let windows = SCHOOL_DAY_SESSIONS
            .iter()
            .map(|&(start, end, name, kind)| SessionWindow::parse(start, end, name, kind))
            .collect::<Result<Vec<_>>>()?;
        Self::new(windows)
    }

    /// Period active at `now`, or `None` outside every window.
    pub fn resolve(&self, now: NaiveTime) -> Option<ActivePeriod> {
        self.windows
            .iter()
            .position(|w| w.contains(now))
            .map(|index| ActivePeriod { name: self.windows[index].name.clone(), index })
    }

    pub fn windows(&self) -> &[SessionWindow] {
        &self.windows
    }

    pub fn get(&self, index: usize) -> Option<&SessionWindow> {
        self.windows.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&SessionWindow> {
        self.windows.iter().find(|w| w.name == name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.windows.iter().position(|w| w.name == name)
    }

    /// True only for names of break windows known to this calendar.
    pub fn is_break(&self, name: &str) -> bool {
        self.find(name).is_some_and(SessionWindow::is_break)
    }

    /// Class windows strictly after `index`, in chronological order.
    pub fn classes_after(&self, index: usize) -> impl Iterator<Item = &SessionWindow> + '_ {
        self.windows.iter().skip(index.saturating_add(1)).filter(|w| !w.is_break())
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
