//! PlumbPro Common Library
//!
//! Types and session logic shared with the Web (WASM) demo

pub mod error;
pub mod report;
pub mod session;
pub mod types;

pub use error::{Error, Result};
pub use report::{ReportLine, ReportSummary};
pub use session::{
    InspectionSession, SendMilestone, MILESTONE_DELAY_MS, SEND_MILESTONES, SETTLE_DELAY_MS,
};
pub use types::{
    canonical_items, CustomerInfo, InspectionItem, ItemStatus, ScoreBand, Stage, MOCK_PHOTOS,
    PHOTO_LABELS,
};
