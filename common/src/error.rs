//! Error type for session operations

use thiserror::Error;

use crate::types::Stage;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown inspection item: {0}")]
    UnknownItem(String),

    #[error("operation not allowed in stage {}", .0.as_str())]
    InvalidStage(Stage),

    #[error("{0} item(s) still pending")]
    ItemsPending(usize),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_item() {
        let error = Error::UnknownItem("9".to_string());
        assert_eq!(format!("{}", error), "unknown inspection item: 9");
    }

    #[test]
    fn test_error_display_invalid_stage() {
        let error = Error::InvalidStage(Stage::Complete);
        let display = format!("{}", error);
        assert!(display.contains("not allowed"));
        assert!(display.contains("complete"));
    }

    #[test]
    fn test_invalid_stage_carries_stage() {
        // callers can match on the stage that rejected the operation
        let error = Error::InvalidStage(Stage::Review);
        assert!(matches!(error, Error::InvalidStage(Stage::Review)));
    }

    #[test]
    fn test_error_display_items_pending() {
        let error = Error::ItemsPending(3);
        assert_eq!(format!("{}", error), "3 item(s) still pending");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownItem("x".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownItem"));
    }
}
