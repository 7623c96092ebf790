//! Selects the control-group implementation at compile time: a real SSE2
//! vector compare where the target supports it, a scalar loop everywhere
//! else. Both expose the same `Group` contract so the probe engine never
//! has to know which one it's calling.

cfg_if::cfg_if! {
    if #[cfg(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2",
        not(miri)
    ))] {
        mod sse2;
        pub(crate) use sse2::Group;
    } else {
        mod generic;
        pub(crate) use generic::Group;
    }
}
