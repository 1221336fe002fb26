//! Process-unique identities.
//!
//! Entities refer to their owners through these ids instead of pointers, so a
//! back-reference never keeps its target alive.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate the next raw id. Never returns 0.
pub fn next_raw() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Define a copyable id newtype backed by [`next_raw`].
///
/// ```
/// simpil_core::entity_id!(
///     /// Identity of a widget.
///     WidgetId
/// );
///
/// let a = WidgetId::next();
/// let b = WidgetId::next();
/// assert_ne!(a, b);
/// ```
#[macro_export]
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u64);

        impl $name {
            /// Allocate a fresh id.
            pub fn next() -> Self {
                Self($crate::id::next_raw())
            }

            /// Get the raw u64 value.
            pub const fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}
