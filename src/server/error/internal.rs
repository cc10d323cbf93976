use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure while rendering the PDF export.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to render PDF export: {reason}")]
    PdfRender {
        /// Error reported by the PDF writer
        reason: String,
    },

    /// A row was written but could not be read back in the same transaction.
    #[error("{entity} {id} missing right after it was written")]
    MissingAfterWrite {
        /// Entity name used for logging
        entity: &'static str,
        /// Primary key that was expected
        id: i32,
    },
}
