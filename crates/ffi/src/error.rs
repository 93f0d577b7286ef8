use smoothlife_core::SmoothLifeError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait FfiError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> SmoothLifeErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `FfiError` for common FFI error scenarios.
///
/// Wraps a `SmoothLifeErrorCode` with a message and provides constructors
/// for each failure kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultFfiError {
    code: SmoothLifeErrorCode,
    msg: String,
}

impl DefaultFfiError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_instance"`, `"ptr"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: SmoothLifeErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for poisoned lock.
    pub fn lock_poisoned(lock_name: &str) -> Self {
        Self {
            code: SmoothLifeErrorCode::LockPoisoned,
            msg: format!("Lock '{lock_name}' was poisoned by a panic in another thread"),
        }
    }

    /// Create error for invalid parameter.
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: SmoothLifeErrorCode::InvalidParameter,
            msg: message,
        }
    }
}

impl From<SmoothLifeError> for DefaultFfiError {
    fn from(error: SmoothLifeError) -> Self {
        let code = match error {
            SmoothLifeError::InvalidDimensions { .. } => SmoothLifeErrorCode::InvalidDimensions,
            SmoothLifeError::InvalidParameter { .. } => SmoothLifeErrorCode::InvalidParameter,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl FfiError for DefaultFfiError {
    fn code(&self) -> SmoothLifeErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by automaton functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothLifeErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Lock poisoned: internal synchronization primitive was poisoned by a panic.
    LockPoisoned = 2,

    /// Grid width or height below one cell.
    InvalidDimensions = 3,

    /// Invalid parameter passed to function.
    InvalidParameter = 4,
}

impl From<DefaultFfiError> for SmoothLifeErrorCode {
    fn from(error: DefaultFfiError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored here so the pointer handed to C stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, SmoothLifeErrorCode)> = const { RefCell::new((None, SmoothLifeErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, SmoothLifeErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, SmoothLifeErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if the last call on this thread succeeded.
///
/// The pointer stays valid until the next FFI call on this thread.
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// SmoothLifeInstance* sim = NULL;
/// if (smoothlife_new(0, 10, &sim) != Ok) {
///     const char* error = smoothlife_get_last_error();
///     if (error) {
///         printf("creation failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn smoothlife_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `SmoothLifeErrorCode::Ok` (0) if the last call on this thread succeeded.
#[no_mangle]
pub extern "C" fn smoothlife_get_last_error_code() -> SmoothLifeErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: DefaultFfiError = SmoothLifeError::InvalidDimensions {
            width: 0,
            height: 10,
        }
        .into();
        assert_eq!(err.code(), SmoothLifeErrorCode::InvalidDimensions);
        assert!(err.msg().contains("0x10"));

        let err: DefaultFfiError = SmoothLifeError::InvalidParameter {
            name: "dt",
            reason: "must be positive, got 0".to_string(),
        }
        .into();
        assert_eq!(SmoothLifeErrorCode::from(err), SmoothLifeErrorCode::InvalidParameter);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            DefaultFfiError::null_pointer("ptr").msg(),
            "Parameter 'ptr' cannot be null"
        );
        assert_eq!(
            DefaultFfiError::lock_poisoned("RwLock").code(),
            SmoothLifeErrorCode::LockPoisoned
        );
        assert_eq!(
            DefaultFfiError::invalid_parameter("len too small".to_string()).code(),
            SmoothLifeErrorCode::InvalidParameter
        );
    }
}
