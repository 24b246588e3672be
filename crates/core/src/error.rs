/// Domain error taxonomy shared across the workspace.
///
/// Variants carry the exact user-facing message the HTTP layer returns, so
/// every surface (API response, client error, log line) reports scheduling
/// conflicts in the same words.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Validation(String),

    /// A shift create/update landed on a day with an active block.
    /// `action` is "add" or "update" depending on the calling operation.
    #[error("Cannot {action} shift to a blocked day. Please unblock the day first.")]
    BlockedDay { action: &'static str },

    #[error("This day is already blocked. Please unblock it first or choose a different date.")]
    AlreadyBlocked,

    #[error("Cannot block a day that already has shifts. Please remove all shifts first.")]
    ShiftsExist,

    #[error("Unauthorized")]
    Unauthorized,
}
