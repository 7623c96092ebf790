#![cfg_attr(feature = "nightly", feature(core_intrinsics))]

//! An open-addressed, SIMD-probed hash table in the SwissTable/F14 family.
//!
//! Keys hash through this crate's own [`Hashable`] trait rather than
//! `std::hash::Hash` — there is no seed, no `Hasher` to feed, just a
//! stable 64-bit value per key. See [`hashing`] for the supported key
//! shapes and [`table::HashTable`] for the table itself.

pub mod config;
pub mod error;
pub mod hashing;
pub mod table;

mod hint;

pub use hashing::Hashable;
pub use table::{HashTable, Iter, IterMut};

#[cfg(target_endian = "big")]
compile_error!("this crate's control-byte and hash layout assume a little-endian target");

#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate assumes a 64-bit target for its index and hash arithmetic");
