//! Inspection session state machine
//!
//! Stages move form → review → sending → complete, with a single backward
//! edge review → form. All mutation goes through the named operations; the
//! UI holds exactly one session and is the only writer.
//!
//! Progress and score deliberately disagree on N/A items: progress counts
//! any non-pending status, the score divides only by pass + fail.

use crate::error::{Error, Result};
use crate::types::{
    canonical_items, CustomerInfo, InspectionItem, ItemStatus, ScoreBand, Stage, MOCK_PHOTOS,
    PHOTO_LABELS,
};

/// One checkpoint in the simulated send sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendMilestone {
    pub percent: u8,
    pub message: &'static str,
}

/// Fixed script for the simulated report delivery, strictly increasing
pub const SEND_MILESTONES: [SendMilestone; 5] = [
    SendMilestone { percent: 20, message: "Generating PDF report" },
    SendMilestone { percent: 45, message: "Uploading photos" },
    SendMilestone { percent: 70, message: "Emailing customer" },
    SendMilestone { percent: 90, message: "Syncing CRM" },
    SendMilestone { percent: 100, message: "Report delivered" },
];

/// Delay between milestones
pub const MILESTONE_DELAY_MS: u32 = 600;

/// Settle delay after the last milestone before the complete screen
pub const SETTLE_DELAY_MS: u32 = 400;

/// In-memory state for one inspection demo session
#[derive(Debug, Clone)]
pub struct InspectionSession {
    items: Vec<InspectionItem>,
    /// Free-text customer fields, editable directly (no validation)
    pub customer: CustomerInfo,
    current_step: Stage,
    active_item_id: Option<String>,
    sending_progress: u8,
    sending_message: String,
}

impl Default for InspectionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectionSession {
    /// Fresh session: the fixed five items, sample customer, form stage
    pub fn new() -> Self {
        Self {
            items: canonical_items(),
            customer: CustomerInfo::default(),
            current_step: Stage::Form,
            active_item_id: None,
            sending_progress: 0,
            sending_message: String::new(),
        }
    }

    pub fn items(&self) -> &[InspectionItem] {
        &self.items
    }

    pub fn current_step(&self) -> Stage {
        self.current_step
    }

    pub fn active_item_id(&self) -> Option<&str> {
        self.active_item_id.as_deref()
    }

    pub fn sending_progress(&self) -> u8 {
        self.sending_progress
    }

    pub fn sending_message(&self) -> &str {
        &self.sending_message
    }

    fn item_mut(&mut self, id: &str) -> Result<&mut InspectionItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::UnknownItem(id.to_string()))
    }

    /// Sets an item's status. Any status may replace any other; the UI only
    /// ever offers pass / fail / na. Returns the item so the caller can
    /// name it in a notification.
    pub fn set_item_status(&mut self, id: &str, status: ItemStatus) -> Result<&InspectionItem> {
        let item = self.item_mut(id)?;
        item.status = status;
        Ok(&*item)
    }

    /// Replaces an item's notes verbatim, no length limit
    pub fn set_item_notes(&mut self, id: &str, text: &str) -> Result<()> {
        self.item_mut(id)?.notes = text.to_string();
        Ok(())
    }

    /// Appends the next canonical photo/label pair and returns the label,
    /// or `Ok(None)` once both slots are used (no-op past the cap).
    pub fn add_photo(&mut self, id: &str) -> Result<Option<&'static str>> {
        let item = self.item_mut(id)?;
        let slot = item.photos.len();
        if slot >= MOCK_PHOTOS.len() {
            return Ok(None);
        }
        item.photos.push(MOCK_PHOTOS[slot].to_string());
        item.photo_labels.push(PHOTO_LABELS[slot].to_string());
        Ok(Some(PHOTO_LABELS[slot]))
    }

    /// Single-selection expand/collapse: selecting the active item collapses it
    pub fn toggle_active_item(&mut self, id: &str) {
        if self.active_item_id.as_deref() == Some(id) {
            self.active_item_id = None;
        } else {
            self.active_item_id = Some(id.to_string());
        }
    }

    /// Items with an explicit disposition (anything but pending)
    pub fn completed_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.status != ItemStatus::Pending)
            .count()
    }

    /// Percentage of items with any explicit disposition, N/A included
    pub fn progress_percent(&self) -> u32 {
        (100 * self.completed_count() / self.items.len()) as u32
    }

    /// Percentage of evaluated (pass + fail) items that passed. N/A and
    /// pending items are excluded from the denominator; 0 when nothing
    /// was evaluated.
    pub fn score(&self) -> u32 {
        let scored = self
            .items
            .iter()
            .filter(|item| matches!(item.status, ItemStatus::Pass | ItemStatus::Fail))
            .count();
        if scored == 0 {
            return 0;
        }
        let passed = self
            .items
            .iter()
            .filter(|item| item.status == ItemStatus::Pass)
            .count();
        (100.0 * passed as f64 / scored as f64).round() as u32
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score())
    }

    /// Submit precondition: every item has an explicit disposition. The UI
    /// disables the submit control from this guard.
    pub fn can_submit(&self) -> bool {
        self.completed_count() == self.items.len()
    }

    /// form → review, once every item is dispositioned
    pub fn submit(&mut self) -> Result<()> {
        if self.current_step != Stage::Form {
            return Err(Error::InvalidStage(self.current_step));
        }
        if !self.can_submit() {
            return Err(Error::ItemsPending(self.items.len() - self.completed_count()));
        }
        self.current_step = Stage::Review;
        Ok(())
    }

    /// review → form, the only backward edge
    pub fn back_to_edit(&mut self) -> Result<()> {
        if self.current_step != Stage::Review {
            return Err(Error::InvalidStage(self.current_step));
        }
        self.current_step = Stage::Form;
        Ok(())
    }

    /// review → sending; progress starts over at 0
    pub fn begin_sending(&mut self) -> Result<()> {
        if self.current_step != Stage::Review {
            return Err(Error::InvalidStage(self.current_step));
        }
        self.current_step = Stage::Sending;
        self.sending_progress = 0;
        self.sending_message.clear();
        Ok(())
    }

    /// Records a milestone of the send script. Progress never decreases,
    /// so a stale timer cannot move the bar backwards.
    pub fn advance_sending(&mut self, milestone: SendMilestone) -> Result<()> {
        if self.current_step != Stage::Sending {
            return Err(Error::InvalidStage(self.current_step));
        }
        if milestone.percent > self.sending_progress {
            self.sending_progress = milestone.percent;
            self.sending_message = milestone.message.to_string();
        }
        Ok(())
    }

    /// sending → complete, progress forced to 100
    pub fn finish_sending(&mut self) -> Result<()> {
        if self.current_step != Stage::Sending {
            return Err(Error::InvalidStage(self.current_step));
        }
        self.current_step = Stage::Complete;
        self.sending_progress = 100;
        Ok(())
    }

    /// Back to the initial state: canonical items, default customer,
    /// form stage, nothing expanded, progress cleared
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
