use crate::pdf::ObjectId;

/// Errors produced while assembling or writing a document.
#[derive(Debug, thiserror::Error)]
pub enum QuireError {
    /// A page was submitted with more lines than fit in the page bounds.
    ///
    /// The caller must re-split the content; nothing was allocated.
    #[error("page has {got} lines but only {max} fit in the page bounds")]
    CapacityExceeded { got: usize, max: usize },

    /// Finishing was attempted before any page was added.
    #[error("document has no pages")]
    EmptyDocument,

    /// A page body lost its parent placeholder, or a placeholder survived
    /// until serialization. Indicates a construction bug, never user input.
    #[error("unresolved parent reference for object {0}")]
    UnresolvedReference(ObjectId),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
