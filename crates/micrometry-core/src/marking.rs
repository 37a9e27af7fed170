//! Live point capture with a two-point cap.

use crate::consts::MAX_LIVE_POINTS;
use crate::geometry::NormPoint;

/// Which live point the next mark should overwrite.
///
/// Selection is exclusive and is consumed by exactly one successful mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlotSelection {
    #[default]
    None,
    Slot1,
    Slot2,
}

impl SlotSelection {
    fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Slot1 => Some(0),
            Self::Slot2 => Some(1),
        }
    }
}

/// What happened to a mark attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The point was appended to the live set.
    Placed,
    /// The point replaced the live point at this index (slot mode).
    Replaced(usize),
    /// The live set is full and no slot was selected.
    Rejected,
    /// The point fell outside `[0,1]×[0,1]` and was silently dropped.
    OutOfBounds,
}

impl MarkOutcome {
    /// Whether the mark changed the live point set.
    pub fn accepted(&self) -> bool {
        matches!(self, Self::Placed | Self::Replaced(_))
    }
}

/// Captures marked points normalized against the image's natural size.
///
/// At most [`MAX_LIVE_POINTS`] points are live at a time.
#[derive(Clone, Debug, Default)]
pub struct CoordinateModel {
    points: Vec<NormPoint>,
    slot: SlotSelection,
}

impl CoordinateModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[NormPoint] {
        &self.points
    }

    pub fn slot(&self) -> SlotSelection {
        self.slot
    }

    /// Select which live point the next mark replaces. Selecting a slot
    /// deselects any previous one.
    pub fn select_slot(&mut self, slot: SlotSelection) {
        self.slot = slot;
    }

    /// Attempt to mark a point.
    ///
    /// Out-of-bounds points are dropped without consuming the slot
    /// selection; a successful mark through a selected slot deselects it.
    pub fn mark(&mut self, point: NormPoint) -> MarkOutcome {
        if !point.in_unit_square() {
            return MarkOutcome::OutOfBounds;
        }
        if let Some(index) = self.slot.index() {
            self.slot = SlotSelection::None;
            if index < self.points.len() {
                self.points[index] = point;
                return MarkOutcome::Replaced(index);
            }
        } else if self.points.len() >= MAX_LIVE_POINTS {
            return MarkOutcome::Rejected;
        }
        self.points.push(point);
        MarkOutcome::Placed
    }

    /// Remove the most recently added point (LIFO).
    pub fn undo_last(&mut self) -> Option<NormPoint> {
        self.points.pop()
    }

    /// Clear all live points and any slot selection.
    pub fn reset(&mut self) {
        self.points.clear();
        self.slot = SlotSelection::None;
    }
}
