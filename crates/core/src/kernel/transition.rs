//! Sigmoid birth/death transition
//!
//! Each cell moves toward 1 when its own value sits on the "birth" side of the
//! smoothed thresholds and toward 0 otherwise:
//!
//! ```text
//! birth = σ(k·(m − b))
//! death = σ(k·(m − d))
//! s     = σ(k·(c − birth) / (death − birth + ε))
//! c'    = clamp(c + dt·(2s − 1), 0, 1)
//! ```
//!
//! where `m` is the 3×3 neighborhood mean, `c` the cell's own value and
//! `σ(z) = 1 / (1 + e^(−z))`.

use super::params::TransitionParams;

/// Logistic function mapping any real input into `(0, 1)`
///
/// Saturates cleanly at the extremes: `exp` overflowing to infinity yields
/// exactly `0.0`, underflowing yields exactly `1.0`.
#[inline]
#[must_use]
pub fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}

/// Compute a cell's next value from its own value and its neighborhood mean
///
/// # Arguments
///
/// * `current` - The cell's value in the current generation
/// * `average` - Mean of the cell and its 8 toroidal neighbors
/// * `params` - Transition constants
///
/// # Returns
///
/// The next value, clamped into `[0, 1]`
#[inline]
#[must_use]
pub fn transition(current: f32, average: f32, params: &TransitionParams) -> f32 {
    let k = params.steepness;
    let birth = sigmoid(k * (average - params.birth));
    let death = sigmoid(k * (average - params.death));
    let s = sigmoid(k * (current - birth) / (death - birth + params.epsilon));

    let next = current + params.dt * (2.0 * s - 1.0);
    next.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sigmoid_reference_points() {
        assert_abs_diff_eq!(sigmoid(0.0), 0.5);
        assert_abs_diff_eq!(sigmoid(-6.0), 0.002_472_6, epsilon = 1e-6);
        assert_eq!(sigmoid(1000.0), 1.0);
        assert_eq!(sigmoid(-1000.0), 0.0);
    }

    #[test]
    fn test_empty_neighborhood_grows_by_dt() {
        // birth ≈ 0.00247 > death ≈ 0.00034, so a dead cell sits on the birth side
        let params = TransitionParams::default();
        assert_abs_diff_eq!(transition(0.0, 0.0, &params), 0.1, epsilon = 1e-6);
    }

    #[test]
    fn test_uniform_low_field_decays() {
        let params = TransitionParams::default();
        assert_abs_diff_eq!(transition(0.1, 0.1, &params), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_lone_full_cell_decays_by_dt() {
        let params = TransitionParams::default();
        assert_abs_diff_eq!(transition(1.0, 1.0 / 9.0, &params), 0.9, epsilon = 1e-6);
    }

    #[test]
    fn test_output_always_clamped() {
        let params = TransitionParams {
            dt: 5.0,
            ..Default::default()
        };
        for i in 0..=20 {
            let current = i as f32 / 20.0;
            for j in 0..=20 {
                let average = j as f32 / 20.0;
                let next = transition(current, average, &params);
                assert!(
                    (0.0..=1.0).contains(&next),
                    "transition({current}, {average}) = {next}"
                );
            }
        }
    }
}
