//! TDOA prediction strategies.

use tracing::debug;

/// Strategy used to forecast a track's next expected TDOA value.
///
/// Selected once per run; the associator never branches on the mode flag
/// beyond this selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predictor {
    /// Expected TDOA is the TDOA of the track's most recent member.
    LastValue,
    /// Expected TDOA is a local polynomial extrapolated from the track's
    /// trailing members, evaluated at the candidate click's time.
    Polynomial,
}

impl Predictor {
    /// Select the predictor for the `polynomial_expectation` flag.
    pub fn from_flag(polynomial_expectation: bool) -> Self {
        if polynomial_expectation {
            Self::Polynomial
        } else {
            Self::LastValue
        }
    }

    /// Expected TDOA for a candidate click at `candidate_time`, given the
    /// track's trailing `(time, tdoa)` window (most recent last, at most
    /// [`POLY_WINDOW`](crate::constants::POLY_WINDOW) entries).
    ///
    /// The polynomial variant interpolates through the window with degree
    /// `window.len() - 1` (at most 2), so with one point it degrades to a
    /// constant and with two to a line. Duplicate timestamps make the
    /// interpolation singular; the prediction then falls back to the last
    /// raw TDOA value instead of propagating a numerical failure.
    ///
    /// # Panics
    ///
    /// Panics if `window` is empty; tracks are never empty while alive.
    pub fn expected_tdoa(self, window: &[(f64, f64)], candidate_time: f64) -> f64 {
        assert!(!window.is_empty(), "prediction window must not be empty");
        let last = window[window.len() - 1].1;
        match self {
            Self::LastValue => last,
            Self::Polynomial => newton_extrapolate(window, candidate_time).unwrap_or_else(|| {
                debug!(
                    "degenerate polynomial window (duplicate timestamps), \
                     falling back to last-value prediction"
                );
                last
            }),
        }
    }
}

/// Evaluate at `t` the unique polynomial of degree `points.len() - 1`
/// through `points`, via Newton divided differences.
///
/// Returns `None` when two abscissae coincide.
fn newton_extrapolate(points: &[(f64, f64)], t: f64) -> Option<f64> {
    let n = points.len();
    let mut coeffs: Vec<f64> = points.iter().map(|p| p.1).collect();
    for level in 1..n {
        for i in (level..n).rev() {
            let denom = points[i].0 - points[i - level].0;
            if denom == 0.0 {
                return None;
            }
            coeffs[i] = (coeffs[i] - coeffs[i - 1]) / denom;
        }
    }
    // Horner evaluation in Newton form
    let mut acc = coeffs[n - 1];
    for i in (0..n - 1).rev() {
        acc = acc.mul_add(t - points[i].0, coeffs[i]);
    }
    Some(acc)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(Predictor::from_flag(false), Predictor::LastValue);
        assert_eq!(Predictor::from_flag(true), Predictor::Polynomial);
    }

    #[test]
    fn test_last_value_ignores_candidate_time() {
        let window = [(0.0, 1.0e-5), (0.1, 2.0e-5)];
        assert_eq!(Predictor::LastValue.expected_tdoa(&window, 0.2), 2.0e-5);
        assert_eq!(Predictor::LastValue.expected_tdoa(&window, 99.0), 2.0e-5);
    }

    #[test]
    fn test_polynomial_single_point_is_constant() {
        let window = [(0.0, 3.0e-5)];
        assert_eq!(Predictor::Polynomial.expected_tdoa(&window, 5.0), 3.0e-5);
    }

    #[test]
    fn test_polynomial_two_points_is_linear() {
        // tdoa = 1e-5 * t
        let window = [(1.0, 1.0e-5), (2.0, 2.0e-5)];
        let expected = Predictor::Polynomial.expected_tdoa(&window, 4.0);
        assert!((expected - 4.0e-5).abs() < 1e-12);
    }

    #[test]
    fn test_polynomial_three_points_is_quadratic() {
        // tdoa = t^2
        let window = [(1.0, 1.0), (2.0, 4.0), (3.0, 9.0)];
        let expected = Predictor::Polynomial.expected_tdoa(&window, 5.0);
        assert!((expected - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_timestamps_fall_back_to_last_value() {
        let window = [(1.0, 1.0), (1.0, 2.0), (3.0, 9.0)];
        assert_eq!(Predictor::Polynomial.expected_tdoa(&window, 5.0), 9.0);
    }

    #[test]
    fn test_newton_extrapolate_rejects_coincident_points() {
        assert!(newton_extrapolate(&[(2.0, 1.0), (2.0, 5.0)], 3.0).is_none());
    }
}
