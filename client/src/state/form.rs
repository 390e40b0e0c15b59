//! Validation failures for the add/schedule dialogs.
//!
//! The `Display` text is what the page shows in its error toast.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a title")]
    MissingTitle,
    #[error("Please enter a visitor name")]
    MissingVisitorName,
    #[error("Please enter both date and time for the scheduled visit")]
    MissingVisitSlot,
    #[error("Please fill in all required fields")]
    IncompleteVisit,
}
