/// Runs a block of statements when the enclosing scope is exited.
///
/// Expands to an anonymous [`ScopeGuard`](crate::ScopeGuard) that lives until
/// the end of the enclosing block. The statements form a closure body, so
/// enclosing variables are captured by reference and the cleanup sees their
/// values at scope exit, not at the point of declaration. Each use creates
/// its own guard; several `defer!`s in one block run in reverse declaration
/// order.
///
/// ```
/// use std::cell::Cell;
///
/// let closed = Cell::new(false);
/// {
///     scope_exit::defer! {
///         closed.set(true);
///     }
///     assert!(!closed.get());
/// }
/// assert!(closed.get());
/// ```
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _guard = $crate::guard(|| { $($body)* });
    };
}
