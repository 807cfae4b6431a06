//! Board Errors
//!
//! Validation failures carry the exact message shown to the user; lookup
//! misses exist so callers can decide to treat them as no-ops.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Renaming or adding a column to a name that is already in use.
    #[error("The name is already taken.")]
    NameTaken(String),

    /// Adding another column while the placeholder column is still unrenamed.
    #[error("Please rename the latest column before creating a new one.")]
    PendingColumnUnrenamed,

    #[error("no column named `{0}`")]
    UnknownColumn(String),

    #[error("card {0} is not on the board")]
    UnknownCard(u32),

    /// Inserting a card whose id is already present somewhere on the board.
    #[error("card id {0} is already in use")]
    DuplicateCardId(u32),

    #[error("index {index} is out of range for column `{column}`")]
    IndexOutOfRange { column: String, index: usize },
}
