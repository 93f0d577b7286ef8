use smoothlife_core::Steppable;

use crate::error::{DefaultFfiError, SmoothLifeErrorCode};
use crate::helpers::{handle_ffi_result, instance_from_ptr, track_error, with_automaton};
use crate::instance::SmoothLifeInstance;

/// Read one cell of the current generation.
///
/// Coordinates wrap toroidally, so any `x`/`y` is accepted.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `smoothlife_new`;
/// `out_value` must be null or point to writable storage for one `float`.
#[no_mangle]
pub unsafe extern "C" fn smoothlife_get(
    ptr: *const SmoothLifeInstance,
    x: i64,
    y: i64,
    out_value: *mut f32,
) -> SmoothLifeErrorCode {
    if out_value.is_null() {
        return track_error(&DefaultFfiError::null_pointer("out_value"));
    }

    handle_ffi_result(|| {
        let instance = instance_from_ptr(ptr)?;
        let value = with_automaton(instance, |automaton| automaton.grid().get(x, y))?;
        unsafe {
            *out_value = value;
        }
        Ok(())
    })
}

/// Report the grid extent in cells.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `smoothlife_new`;
/// `out_width` and `out_height` must be null or point to writable storage.
#[no_mangle]
pub unsafe extern "C" fn smoothlife_dimensions(
    ptr: *const SmoothLifeInstance,
    out_width: *mut u32,
    out_height: *mut u32,
) -> SmoothLifeErrorCode {
    if out_width.is_null() {
        return track_error(&DefaultFfiError::null_pointer("out_width"));
    }
    if out_height.is_null() {
        return track_error(&DefaultFfiError::null_pointer("out_height"));
    }

    handle_ffi_result(|| {
        let instance = instance_from_ptr(ptr)?;
        let (width, height) = with_automaton(instance, |automaton| automaton.grid().dimensions())?;
        unsafe {
            *out_width = width as u32;
            *out_height = height as u32;
        }
        Ok(())
    })
}

/// Report the number of completed generations.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `smoothlife_new`;
/// `out_generation` must be null or point to writable storage.
#[no_mangle]
pub unsafe extern "C" fn smoothlife_generation(
    ptr: *const SmoothLifeInstance,
    out_generation: *mut u64,
) -> SmoothLifeErrorCode {
    if out_generation.is_null() {
        return track_error(&DefaultFfiError::null_pointer("out_generation"));
    }

    handle_ffi_result(|| {
        let instance = instance_from_ptr(ptr)?;
        let generation = with_automaton(instance, Steppable::generation)?;
        unsafe {
            *out_generation = generation;
        }
        Ok(())
    })
}

/// Copy the current generation into a caller-owned buffer, row-major.
///
/// `len` must be at least `width * height`; cell `(x, y)` lands at
/// `out_buffer[y * width + x]`.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `smoothlife_new`;
/// `out_buffer` must be null or point to `len` writable floats.
#[no_mangle]
pub unsafe extern "C" fn smoothlife_copy_cells(
    ptr: *const SmoothLifeInstance,
    out_buffer: *mut f32,
    len: usize,
) -> SmoothLifeErrorCode {
    if out_buffer.is_null() {
        return track_error(&DefaultFfiError::null_pointer("out_buffer"));
    }

    handle_ffi_result(|| {
        let instance = instance_from_ptr(ptr)?;
        with_automaton(instance, |automaton| {
            let cells = automaton.grid().cells();
            if len < cells.len() {
                return Err(DefaultFfiError::invalid_parameter(format!(
                    "buffer holds {len} cells, grid needs {}",
                    cells.len()
                )));
            }
            // SAFETY: caller guarantees `out_buffer` has room for `len >= cells.len()` floats
            let out = unsafe { std::slice::from_raw_parts_mut(out_buffer, cells.len()) };
            out.copy_from_slice(cells);
            Ok(())
        })?
    })
}
