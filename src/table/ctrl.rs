//! The three control-byte states a slot can be in.

/// Slot has never held an entry, or was reset by growth.
pub(crate) const EMPTY: u8 = 0b1111_1111;

/// Slot held an entry that was removed; probing must continue through it.
pub(crate) const TOMBSTONE: u8 = 0b1111_1110;
