use crate::error::{with_last_error_mut, DefaultFfiError, FfiError, SmoothLifeErrorCode};
use crate::instance::SmoothLifeInstance;
use smoothlife_core::Automaton;
use std::ffi::CString;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl FfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Clear the thread-local error message and code.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = SmoothLifeErrorCode::Ok;
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl FfiError) -> SmoothLifeErrorCode {
    set_last_error(error);
    error.code()
}

/// Run an FFI body, recording the outcome in thread-local storage.
///
/// Returns `Ok` on success (clearing any previous error) or the failure's code.
pub(crate) fn handle_ffi_result<F>(f: F) -> SmoothLifeErrorCode
where
    F: FnOnce() -> Result<(), DefaultFfiError>,
{
    match f() {
        Ok(()) => {
            clear_last_error();
            SmoothLifeErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Borrow an instance from a raw pointer handed back by C.
///
/// # Errors
///
/// Returns a `NullPointer` error for a null pointer.
pub(crate) fn instance_from_ptr<'a>(
    ptr: *const SmoothLifeInstance,
) -> Result<&'a SmoothLifeInstance, DefaultFfiError> {
    // SAFETY: callers promise `ptr` is null or came from `smoothlife_new` and
    // has not been destroyed; null is rejected here.
    unsafe { ptr.as_ref() }.ok_or_else(|| DefaultFfiError::null_pointer("ptr"))
}

/// Run a closure with shared access to the automaton.
pub(crate) fn with_automaton<F, T>(instance: &SmoothLifeInstance, f: F) -> Result<T, DefaultFfiError>
where
    F: FnOnce(&Automaton) -> T,
{
    let automaton = instance
        .automaton
        .read()
        .map_err(|_| DefaultFfiError::lock_poisoned("RwLock"))?;
    Ok(f(&*automaton))
}

/// Run a closure with exclusive access to the automaton.
pub(crate) fn with_automaton_mut<F, T>(
    instance: &SmoothLifeInstance,
    f: F,
) -> Result<T, DefaultFfiError>
where
    F: FnOnce(&mut Automaton) -> T,
{
    let mut automaton = instance
        .automaton
        .write()
        .map_err(|_| DefaultFfiError::lock_poisoned("RwLock"))?;
    Ok(f(&mut *automaton))
}
