//! Branch hint for the probe loop's hot path.
//!
//! `core::intrinsics::unlikely` is nightly-only, so the stable build falls
//! back to the identity function, same as the rest of the ecosystem does
//! until the intrinsic stabilizes.

#[cfg(feature = "nightly")]
#[inline]
pub(crate) fn unlikely(b: bool) -> bool {
    #[allow(unused_unsafe)]
    unsafe {
        core::intrinsics::unlikely(b)
    }
}

#[cfg(not(feature = "nightly"))]
#[inline]
pub(crate) fn unlikely(b: bool) -> bool {
    b
}
