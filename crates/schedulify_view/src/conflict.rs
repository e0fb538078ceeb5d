// --- File: crates/schedulify_view/src/conflict.rs ---
use schedulify_client::TimeSlot;

/// Fixed overlap notice; the service's own message is logged, not shown.
pub const OVERLAP_MESSAGE: &str =
    "This time slot overlaps with an existing event in the same venue.";

/// The conflict recovery view: an explanatory message plus one selectable
/// control per alternative slot the service offered.
///
/// Zero alternatives still renders the message; there is just nothing to
/// adopt, and the operator has to edit the times by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictView {
    pub message: String,
    pub slots: Vec<SlotControl>,
}

/// One selectable alternative. `index` is the selection key the frontend
/// hands back; `label` is what the operator reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotControl {
    pub index: usize,
    pub label: String,
    pub slot: TimeSlot,
}

impl ConflictView {
    /// Resolves a picked control back to its slot.
    pub fn slot(&self, index: usize) -> Option<&TimeSlot> {
        self.slots.get(index).map(|control| &control.slot)
    }
}

/// Builds the conflict view from the service's alternatives sequence.
pub fn render_conflict(alternatives: &[TimeSlot]) -> ConflictView {
    let slots = alternatives
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, slot)| SlotControl {
            index,
            label: slot.label(),
            slot,
        })
        .collect();

    ConflictView {
        message: OVERLAP_MESSAGE.to_string(),
        slots,
    }
}
