#![cfg_attr(not(test), no_std)]

//! Scope-exit cleanup guards.
//!
//! A [`ScopeGuard`] holds a single closure and runs it when the guard is
//! dropped, i.e. when control leaves the enclosing scope by any path:
//! fall-through, early return, or panic unwind. This lets code register the
//! release of a resource right where it is acquired, instead of repeating the
//! release on every exit path.
//!
//! Guards are created with [`guard`], or anonymously with the [`defer!`]
//! macro:
//!
//! ```
//! use std::cell::Cell;
//!
//! let open = Cell::new(true);
//! {
//!     let _cleanup = scope_exit::guard(|| open.set(false));
//!     // ... work with the resource ...
//! }
//! assert!(!open.get());
//! ```
//!
//! A guard can be dismissed via [`ScopeGuard::dismiss`] once the fallback
//! cleanup is no longer wanted, e.g. after the resource has been handed off.
//! Moving a guard (returning it from a function, storing it in a struct)
//! transfers the cleanup obligation with it; the closure still runs exactly
//! once, wherever the guard ends up being dropped.
//!
//! Variables captured by the closure must outlive the guard. The closure must
//! not panic: a panic from a guard dropped during unwind aborts the process.

mod guard;

mod macros;

pub use guard::{guard, ScopeGuard};
