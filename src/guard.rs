/// Runs its callback when dropped, unless dismissed first.
///
/// Values of this type are obtained from [`guard`] (or the
/// [`defer!`](crate::defer) macro) and cannot be copied or cloned: each guard
/// is the sole owner of its callback, so the callback runs at most once.
/// Moving the guard moves that ownership along with it and leaves nothing
/// behind to drop at the original location.
#[must_use = "the callback runs immediately if the guard is not bound to a variable"]
pub struct ScopeGuard<F: FnOnce()> {
    callback: Option<F>,
}

impl<F: FnOnce()> ScopeGuard<F> {
    /// Disarms the guard so that dropping it does nothing.
    ///
    /// Idempotent: further calls have no additional effect.
    pub fn dismiss(&mut self) {
        self.callback = None;
    }
}

impl<F: FnOnce()> Drop for ScopeGuard<F> {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            callback()
        }
    }
}

/// Creates a [`ScopeGuard`] running `callback` when dropped.
///
/// The callback may be a capturing closure, a `fn()` pointer, or any other
/// callable taking no arguments and returning nothing. Anything else is
/// rejected when the call is type-checked:
///
/// ```compile_fail
/// let _g = scope_exit::guard(|| 42);
/// ```
///
/// ```compile_fail
/// let _g = scope_exit::guard(|fd: i32| drop(fd));
/// ```
///
/// The callback itself is expected not to fail; if the underlying operation
/// can, the callback has to contain that failure (e.g. ignore or log it), as
/// the guard has no way to report it from `drop`.
pub fn guard<F: FnOnce()>(callback: F) -> ScopeGuard<F> {
    ScopeGuard { callback: Some(callback) }
}
