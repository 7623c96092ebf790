/// A stored key/value pair plus the hash it was inserted under.
///
/// Keeping the hash alongside the entry means growth never recomputes it:
/// the old slot's bytes are moved wholesale into the new table and reprobed
/// with the hash they already carry.
///
/// Rust's ownership model makes this move-only by default — unlike the
/// C++ original, there is no copy constructor to delete.
pub(crate) struct Entry<K, V> {
    pub(crate) hash: u64,
    pub(crate) key: K,
    pub(crate) value: V,
}
