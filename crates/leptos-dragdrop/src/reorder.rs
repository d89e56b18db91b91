//! Reorder State Machine
//!
//! Pure drag-to-reorder logic, independent of any DOM event source.
//! `Idle -> Pending -> Dragging -> Idle`; a drag that is cancelled at any
//! point returns to `Idle` without touching the list.

/// Movement threshold in pixels before a pending press becomes a drag
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Where a pointer-down landed inside a list entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOrigin {
    /// The entry's drag handle
    Handle,
    /// An editable text control or a button
    Control,
    /// Anywhere else inside the entry
    Body,
}

/// Drag state for one sortable list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReorderState {
    #[default]
    Idle,
    /// Pointer is down on a handle but has not moved past the threshold yet
    Pending { source: usize, start_x: i32, start_y: i32 },
    /// Entry at `source` is being dragged; `target` is the last entry entered
    Dragging { source: usize, target: Option<usize> },
}

/// A completed drag: move the entry at `from` so it ends up at `to`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl ReorderState {
    /// Pointer-down on entry `index`. Only a press on the handle arms a drag.
    ///
    /// Any drag left over from a lost mouseup is dropped first.
    pub fn press(&mut self, index: usize, origin: PressOrigin, x: i32, y: i32) -> bool {
        *self = ReorderState::Idle;
        if origin != PressOrigin::Handle {
            return false;
        }
        *self = ReorderState::Pending { source: index, start_x: x, start_y: y };
        true
    }

    /// Pointer moved. Returns true when this promotes a pending press into a drag.
    pub fn pointer_moved(&mut self, x: i32, y: i32) -> bool {
        if let ReorderState::Pending { source, start_x, start_y } = *self {
            let dx = (x - start_x).abs();
            let dy = (y - start_y).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                *self = ReorderState::Dragging { source, target: None };
                return true;
            }
        }
        false
    }

    /// Pointer entered entry `index` while dragging
    pub fn enter(&mut self, index: usize) {
        if let ReorderState::Dragging { target, .. } = self {
            *target = Some(index);
        }
    }

    /// Drop or drag-end. Always returns to `Idle`.
    ///
    /// Yields a move only when a target was tracked and it differs from the source.
    pub fn release(&mut self) -> Option<Move> {
        let finished = std::mem::take(self);
        match finished {
            ReorderState::Dragging { source, target: Some(target) } if target != source => {
                Some(Move { from: source, to: target })
            }
            _ => None,
        }
    }

    /// Abandon whatever is in progress
    pub fn cancel(&mut self) {
        *self = ReorderState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, ReorderState::Dragging { .. })
    }

    /// Index of the entry being dragged, once the drag has started
    pub fn source(&self) -> Option<usize> {
        match self {
            ReorderState::Dragging { source, .. } => Some(*source),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<usize> {
        match self {
            ReorderState::Dragging { target, .. } => *target,
            _ => None,
        }
    }
}

/// Remove the entry at `from` and reinsert it at `to`.
///
/// Entries between the two positions shift by one. Returns false (and leaves
/// the list alone) when the positions are equal or out of range.
pub fn move_entry<T>(list: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= list.len() || to >= list.len() {
        return false;
    }
    let entry = list.remove(from);
    list.insert(to, entry);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(state: &mut ReorderState, source: usize, enters: &[usize]) -> Option<Move> {
        assert!(state.press(source, PressOrigin::Handle, 0, 0));
        assert!(state.pointer_moved(10, 0));
        for &index in enters {
            state.enter(index);
        }
        state.release()
    }

    #[test]
    fn test_drag_first_onto_last() {
        let mut list = vec!["A", "B", "C"];
        let mut state = ReorderState::default();

        let mv = drag(&mut state, 0, &[1, 2]).expect("move expected");
        assert_eq!(mv, Move { from: 0, to: 2 });
        assert!(move_entry(&mut list, mv.from, mv.to));

        assert_eq!(list, vec!["B", "C", "A"]);
        assert_eq!(state, ReorderState::Idle);
    }

    #[test]
    fn test_drag_last_onto_first() {
        let mut list = vec!["A", "B", "C", "D"];
        let mut state = ReorderState::default();

        let mv = drag(&mut state, 3, &[2, 1]).unwrap();
        move_entry(&mut list, mv.from, mv.to);

        assert_eq!(list, vec!["A", "D", "B", "C"]);
    }

    #[test]
    fn test_drag_onto_self_is_noop() {
        let mut state = ReorderState::default();
        assert_eq!(drag(&mut state, 1, &[2, 1]), None);
        assert_eq!(state, ReorderState::Idle);

        let mut list = vec!["A", "B", "C"];
        assert!(!move_entry(&mut list, 1, 1));
        assert_eq!(list, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_release_without_target_is_noop() {
        let mut state = ReorderState::default();
        assert_eq!(drag(&mut state, 0, &[]), None);
        assert_eq!(state, ReorderState::Idle);
    }

    #[test]
    fn test_press_outside_handle_rejected() {
        let mut state = ReorderState::default();
        assert!(!state.press(0, PressOrigin::Control, 0, 0));
        assert!(!state.press(0, PressOrigin::Body, 0, 0));
        assert_eq!(state, ReorderState::Idle);

        // Movement without an armed press never starts a drag
        assert!(!state.pointer_moved(100, 100));
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_press_discards_stale_drag() {
        let mut state = ReorderState::default();
        state.press(0, PressOrigin::Handle, 0, 0);
        state.pointer_moved(0, 40);
        state.enter(2);
        assert_eq!(state.target(), Some(2));

        // Mouseup never arrived; the next press lands on a text input
        assert!(!state.press(1, PressOrigin::Control, 10, 10));
        assert_eq!(state, ReorderState::Idle);
        assert_eq!(state.release(), None);

        // A fresh handle press starts over from the new entry
        assert!(state.press(1, PressOrigin::Handle, 10, 10));
        assert!(matches!(state, ReorderState::Pending { source: 1, .. }));
    }

    #[test]
    fn test_small_movement_stays_pending() {
        let mut state = ReorderState::default();
        state.press(2, PressOrigin::Handle, 50, 50);
        assert!(!state.pointer_moved(53, 48));
        assert!(matches!(state, ReorderState::Pending { source: 2, .. }));

        // Entering other entries before the drag starts is ignored
        state.enter(0);
        assert_eq!(state.release(), None);
    }

    #[test]
    fn test_cancel_mid_drag() {
        let mut state = ReorderState::default();
        state.press(0, PressOrigin::Handle, 0, 0);
        state.pointer_moved(0, 20);
        state.enter(2);
        assert_eq!(state.target(), Some(2));

        state.cancel();
        assert_eq!(state, ReorderState::Idle);
        assert_eq!(state.release(), None);
    }

    #[test]
    fn test_latest_enter_wins() {
        let mut state = ReorderState::default();
        assert_eq!(drag(&mut state, 0, &[2, 1]), Some(Move { from: 0, to: 1 }));
    }

    #[test]
    fn test_move_entry_out_of_range() {
        let mut list = vec![1, 2];
        assert!(!move_entry(&mut list, 0, 5));
        assert!(!move_entry(&mut list, 7, 0));
        assert_eq!(list, vec![1, 2]);
    }
}
