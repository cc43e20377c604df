//! Drag-gesture assignment controller.
//!
//! Mediates "drag a catalog part onto a slot" into a proposed selection
//! mutation, consulting the compatibility preview before committing. An
//! incompatible drop is an expected outcome surfaced to the user, not an
//! error. The controller always returns to idle once a gesture ends.

use crate::compat;
use crate::part::{Part, PartKind};
use crate::selection::Selection;

/// Where a drag gesture currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A candidate part is picked up but not over any slot.
    Dragging,
    /// The pointer is over a slot.
    Hovering(PartKind),
}

/// Result of a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The part was placed; `notice` is the success message to surface.
    Placed { notice: String },
    /// The drop was rejected by a compatibility check; selection is
    /// unchanged.
    Rejected { notice: String },
    /// Dropped outside any slot or onto a mismatched slot; no state
    /// change, nothing to surface.
    Ignored,
}

/// Per-gesture state machine: idle, dragging, hovering, then back to idle
/// on drop or cancel.
#[derive(Debug, Default)]
pub struct DragController {
    phase: DragPhase,
    candidate: Option<Part>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// The part captured by the active gesture, if any.
    pub fn candidate(&self) -> Option<&Part> {
        self.candidate.as_ref()
    }

    /// Begin a gesture with `part` as the candidate. Starting a new
    /// gesture abandons any previous one.
    pub fn start(&mut self, part: Part) {
        self.candidate = Some(part);
        self.phase = DragPhase::Dragging;
    }

    /// Record the slot currently under the pointer (`None` when between
    /// slots). Returns the preview warning to render on the drop target
    /// when the hovered slot is the candidate's own and the drop would be
    /// rejected.
    pub fn hover(&mut self, slot: Option<PartKind>, selection: &Selection) -> Option<String> {
        let candidate = self.candidate.as_ref()?;
        self.phase = match slot {
            Some(kind) => DragPhase::Hovering(kind),
            None => DragPhase::Dragging,
        };
        match slot {
            Some(kind) if kind == candidate.kind => compat::preview(candidate, selection),
            _ => None,
        }
    }

    /// Finish the gesture, committing the candidate into `selection` when
    /// the hovered slot matches and the targeted check passes.
    pub fn drop(&mut self, selection: &mut Selection) -> DropOutcome {
        let phase = std::mem::take(&mut self.phase);
        let Some(candidate) = self.candidate.take() else {
            return DropOutcome::Ignored;
        };

        let DragPhase::Hovering(slot) = phase else {
            return DropOutcome::Ignored;
        };
        if slot != candidate.kind {
            return DropOutcome::Ignored;
        }

        if let Some(notice) = compat::preview(&candidate, selection) {
            return DropOutcome::Rejected { notice };
        }

        let name = candidate.name.clone();
        match selection.set(slot, candidate) {
            Ok(()) => DropOutcome::Placed {
                notice: format!("Integrated {name} into configuration."),
            },
            // Unreachable given the slot/kind guard above, but a rejected
            // placement is still the honest answer if it ever fires.
            Err(err) => DropOutcome::Rejected {
                notice: err.to_string(),
            },
        }
    }

    /// Abandon the gesture without touching the selection.
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
        self.candidate = None;
    }
}
