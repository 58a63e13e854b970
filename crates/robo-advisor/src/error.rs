//! Error Types for the Robo Advisor
//!
//! Only faults live here. A user typing an out-of-range age is not an error;
//! it is a [`ValidationResult`](crate::validation::ValidationResult) that
//! becomes an `ElicitSlot` response.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HandlerError>;

#[derive(Error, Debug)]
pub enum HandlerError {
    /// The platform routed an intent this handler is not wired for.
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    /// The event did not match the platform contract.
    #[error("Invalid event: {0}")]
    InvalidEvent(#[from] serde_json::Error),
}

impl HandlerError {
    /// Configuration faults point at deployment wiring, not at the request.
    pub const fn is_configuration_fault(&self) -> bool {
        matches!(self, Self::UnsupportedIntent(_))
    }
}
