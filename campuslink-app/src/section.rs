/// Per-section load state and row-keyed in-flight tracking
///
/// Two small primitives the controllers are built on:
///
/// - [`Section`] - the load state of one fetched collection. Every section
///   is independent: one failing fetch never blocks the others, and retry is
///   just calling the load method again.
/// - [`ActionTracker`] - a map from entity id to an in-flight marker. A new
///   action on an id that is already in flight is rejected before any
///   request is issued; the RAII guard clears the marker however the action
///   ends.

use std::collections::HashSet;
use std::sync::Mutex;

use uuid::Uuid;

use campuslink_client::ApiError;

/// Load state of a single fetched section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<T> {
    /// Never loaded
    Idle,

    /// Fetch in flight
    Loading,

    /// Loaded successfully
    Ready(T),

    /// Last fetch failed; the message is what the user sees
    Failed(String),
}

impl<T> Section<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Section::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Section::Loading)
    }

    /// The loaded data, if ready
    pub fn data(&self) -> Option<&T> {
        match self {
            Section::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// The surfaced error, if failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Section::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Maps a fetch result into a section state
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Section::Ready(data),
            Err(err) => Section::Failed(err.user_message()),
        }
    }
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Section::Idle
    }
}

/// Row-keyed in-flight action map
///
/// The formalization of the per-row loading flag: an entity id is marked
/// while its action runs, and a second action on the same id is rejected.
/// Different ids proceed independently.
#[derive(Debug, Default)]
pub struct ActionTracker {
    inflight: Mutex<HashSet<Uuid>>,
}

impl ActionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` in flight, or returns `None` if it already is
    ///
    /// The returned guard unmarks the id on drop, so the marker clears on
    /// success, error, and early return alike.
    pub fn try_begin(&self, id: Uuid) -> Option<ActionGuard<'_>> {
        let mut inflight = self.inflight.lock().expect("tracker lock poisoned");
        if !inflight.insert(id) {
            return None;
        }
        Some(ActionGuard { tracker: self, id })
    }

    /// Whether `id` currently has an action in flight
    ///
    /// Drives per-row spinners and disabled controls.
    pub fn is_in_flight(&self, id: Uuid) -> bool {
        self.inflight
            .lock()
            .expect("tracker lock poisoned")
            .contains(&id)
    }
}

/// RAII marker for one in-flight action
pub struct ActionGuard<'a> {
    tracker: &'a ActionTracker,
    id: Uuid,
}

impl Drop for ActionGuard<'_> {
    fn drop(&mut self) {
        self.tracker
            .inflight
            .lock()
            .expect("tracker lock poisoned")
            .remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_accessors() {
        let idle: Section<Vec<u32>> = Section::Idle;
        assert!(idle.is_idle());
        assert!(idle.data().is_none());

        let ready = Section::Ready(vec![1, 2]);
        assert_eq!(ready.data(), Some(&vec![1, 2]));
        assert!(ready.error().is_none());

        let failed: Section<Vec<u32>> = Section::Failed("boom".to_string());
        assert_eq!(failed.error(), Some("boom"));
    }

    #[test]
    fn test_section_from_result() {
        let ok: Section<u32> = Section::from_result(Ok(7));
        assert_eq!(ok.data(), Some(&7));

        let err: Section<u32> =
            Section::from_result(Err(ApiError::from_status(500, b"{\"message\":\"down\"}")));
        assert_eq!(err.error(), Some("down"));
    }

    #[test]
    fn test_tracker_rejects_double_begin() {
        let tracker = ActionTracker::new();
        let id = Uuid::new_v4();

        let guard = tracker.try_begin(id).expect("first begin succeeds");
        assert!(tracker.is_in_flight(id));
        assert!(tracker.try_begin(id).is_none());

        drop(guard);
        assert!(!tracker.is_in_flight(id));
        assert!(tracker.try_begin(id).is_some());
    }

    #[test]
    fn test_tracker_rows_are_independent() {
        let tracker = ActionTracker::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let _guard_a = tracker.try_begin(a).unwrap();
        assert!(tracker.try_begin(b).is_some());
    }
}
