//! Domain error types.
//!
//! These errors represent validation failures on raw segment input. The
//! itinerary engine assumes they have already been ruled out; the web
//! layer raises them before handing segments over.

/// Domain-level errors for input validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// No segments were supplied
    #[error("at least one flight segment is required")]
    EmptySegments,

    /// A segment is missing its origin or destination
    #[error("segment {index} is malformed: {reason}")]
    MalformedSegment { index: usize, reason: String },
}
