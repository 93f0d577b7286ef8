use smoothlife_core::{Automaton, Grid, SimulationKernel};
use std::ptr;
use std::sync::RwLock;

use crate::error::{DefaultFfiError, SmoothLifeErrorCode};
use crate::helpers::{clear_last_error, track_error};

/// Opaque automaton handle owned by the host.
///
/// # Thread Safety
///
/// The automaton sits behind an `RwLock`:
/// - **Multiple concurrent readers** (`smoothlife_get`, `smoothlife_copy_cells`)
/// - **Exclusive writer** (`smoothlife_step`, `smoothlife_seed`)
///
/// A renderer thread can read cells while the host loop steps on another
/// thread; readers only ever see a completed generation.
///
/// # Example
///
/// ```c
/// SmoothLifeInstance* sim = NULL;
/// if (smoothlife_new(15, 10, &sim) != Ok) { return; }
/// smoothlife_seed(sim, 5, 42);
///
/// // once per frame
/// smoothlife_step(sim);
/// float v;
/// smoothlife_get(sim, 7, 5, &v);
///
/// smoothlife_destroy(sim);
/// ```
pub struct SmoothLifeInstance {
    pub(crate) automaton: RwLock<Automaton>,
}

impl SmoothLifeInstance {
    /// Creates a new instance with a zeroed grid and default transition constants.
    ///
    /// # Errors
    ///
    /// Returns `SmoothLifeErrorCode::InvalidDimensions` if either extent is below 1.
    pub(crate) fn new(width: i32, height: i32) -> Result<Box<Self>, DefaultFfiError> {
        let grid = Grid::from_signed(i64::from(width), i64::from(height))?;
        let automaton = Automaton::from_parts(grid, SimulationKernel::default());

        Ok(Box::new(Self {
            automaton: RwLock::new(automaton),
        }))
    }
}

/// Create a new automaton and return it via out-parameter.
///
/// - Returns `SmoothLifeErrorCode::Ok` (0) on success with a valid instance in `out_instance`
/// - Returns a non-zero error code on failure with `out_instance` set to null
///
/// Parameters
/// - `width`, `height`: grid extent in cells, both at least 1.
/// - `out_instance`: receives the new instance.
///
/// # Safety
/// `out_instance` must be null or point to writable storage for one pointer.
#[no_mangle]
pub unsafe extern "C" fn smoothlife_new(
    width: i32,
    height: i32,
    out_instance: *mut *mut SmoothLifeInstance,
) -> SmoothLifeErrorCode {
    if out_instance.is_null() {
        return track_error(&DefaultFfiError::null_pointer("out_instance"));
    }

    match SmoothLifeInstance::new(width, height) {
        Ok(instance) => {
            unsafe {
                *out_instance = Box::into_raw(instance);
            }
            clear_last_error();
            SmoothLifeErrorCode::Ok
        }
        Err(error) => {
            unsafe {
                // Set to null on error (per documentation contract)
                *out_instance = ptr::null_mut();
            }
            track_error(&error)
        }
    }
}

/// Destroys an instance previously created by `smoothlife_new`.
///
/// Passing null is a no-op.
///
/// # Safety
/// `ptr` must be null or a pointer returned by `smoothlife_new` that has not
/// been destroyed yet. The pointer must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn smoothlife_destroy(ptr: *mut SmoothLifeInstance) {
    if ptr.is_null() {
        return;
    }

    // SAFETY: The pointer was created by `Box::into_raw` in `smoothlife_new`
    // and has not been freed; `Box::from_raw` reclaims ownership and drops it.
    unsafe {
        drop(Box::from_raw(ptr));
    }
}
