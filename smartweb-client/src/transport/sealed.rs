//! Sealed trait marker for `Transport` implementations.
//!
//! Keeps transport implementations inside this crate so every one of them applies the same
//! endpoint checks and session handling.

pub(crate) mod private {
    /// Sealed trait marker.
    pub trait Sealed {}
}
