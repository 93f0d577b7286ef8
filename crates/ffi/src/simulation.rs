use smoothlife_core::Steppable;

use crate::error::SmoothLifeErrorCode;
use crate::helpers::{handle_ffi_result, instance_from_ptr, with_automaton_mut};
use crate::instance::SmoothLifeInstance;

/// Advance the automaton by one generation.
///
/// Thread-safe: acquires the `RwLock` write lock for the duration of the step.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `smoothlife_new`.
/// A null pointer returns `NullPointer`.
#[no_mangle]
pub unsafe extern "C" fn smoothlife_step(ptr: *const SmoothLifeInstance) -> SmoothLifeErrorCode {
    handle_ffi_result(|| {
        let instance = instance_from_ptr(ptr)?;
        with_automaton_mut(instance, Steppable::step)
    })
}

/// Light `count` random cells at full intensity.
///
/// Picks are drawn with replacement from a generator seeded with `rng_seed`,
/// so the same seed always lights the same cells.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `smoothlife_new`.
#[no_mangle]
pub unsafe extern "C" fn smoothlife_seed(
    ptr: *const SmoothLifeInstance,
    count: u32,
    rng_seed: u64,
) -> SmoothLifeErrorCode {
    handle_ffi_result(|| {
        let instance = instance_from_ptr(ptr)?;
        with_automaton_mut(instance, |automaton| {
            automaton.seed_from(count as usize, rng_seed);
        })
    })
}

/// Zero every cell and restart the generation count.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `smoothlife_new`.
#[no_mangle]
pub unsafe extern "C" fn smoothlife_reset(ptr: *const SmoothLifeInstance) -> SmoothLifeErrorCode {
    handle_ffi_result(|| {
        let instance = instance_from_ptr(ptr)?;
        with_automaton_mut(instance, smoothlife_core::Automaton::reset)
    })
}
