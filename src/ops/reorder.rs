use crate::model::Board;
use crate::ops::group;

/// Drag state for tile reordering.
///
/// Lifecycle: `grab` starts a drag, the cursor then moves freely, and the
/// drag ends with `drop_onto` or `cancel`. The store is only touched by a
/// drop that lands inside the grabbed tile's own year group; a cancel or a
/// rejected drop leaves it exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A tile is grabbed: its year group and its position in that group.
    Dragging { year: i32, index: usize },
}

/// What a drop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Two positions swapped within the grabbed tile's year group.
    Swapped,
    /// No drag was active.
    NoDrag,
    /// The target is in a different year group. Store untouched, and the
    /// drag stays alive so the user can pick another target.
    RejectedCrossGroup,
    /// Source or target position fell outside the group. Store untouched,
    /// drag stays alive.
    OutOfRange,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Grab the tile at `(year, index)` in the grouped view.
    pub fn grab(&mut self, year: i32, index: usize) {
        *self = DragState::Dragging { year, index };
    }

    /// Abandon the drag without touching the store.
    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }

    /// Drop the grabbed tile onto `(year, target_index)`.
    ///
    /// On a same-group drop the two positions swap, every group is
    /// flattened back in map key order, and the store is replaced with
    /// the result. Everything else is a no-op on the store.
    pub fn drop_onto(&mut self, board: &mut Board, year: i32, target_index: usize) -> DropOutcome {
        let (source_year, source_index) = match *self {
            DragState::Idle => return DropOutcome::NoDrag,
            DragState::Dragging { year, index } => (year, index),
        };
        if source_year != year {
            return DropOutcome::RejectedCrossGroup;
        }

        let mut groups = group::by_year(board.records());
        let Some(tiles) = groups.get_mut(&year) else {
            return DropOutcome::OutOfRange;
        };
        if source_index >= tiles.len() || target_index >= tiles.len() {
            return DropOutcome::OutOfRange;
        }

        tiles.swap(source_index, target_index);
        board.replace_records(group::flatten(groups));
        *self = DragState::Idle;
        DropOutcome::Swapped
    }
}
