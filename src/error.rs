use thiserror::Error;

/// Errors surfaced by fallible capacity arithmetic.
///
/// True allocator exhaustion is not represented here: it goes through
/// `std::alloc::handle_alloc_error` and aborts, matching the rest of the
/// standard collections.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashTableError {
    #[error("requested capacity overflows the table's internal size arithmetic")]
    CapacityOverflow,
}

pub type Result<T> = std::result::Result<T, HashTableError>;
