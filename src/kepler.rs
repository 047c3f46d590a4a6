//! # Kepler equation
//!
//! Newton–Raphson solution of Kepler's equation for elliptic orbits,
//!
//! ```text
//! E − e·sin(E) − M = 0
//! ```
//!
//! and the closed-form conversion from eccentric to true anomaly.
//!
//! The iteration is seeded with `E₀ = M` and stops as soon as the residual of the
//! equation drops below the configured tolerance. The loop is bounded: exceeding the
//! iteration ceiling is reported as [`SpheraError::NonConvergence`].

use log::warn;

use crate::{
    constants::{Radian, KEPLER_EPS, KEPLER_MAX_ITER},
    sphera_errors::SpheraError,
};

/// Convergence settings of the Kepler solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerParams {
    /// Absolute tolerance on `|E − e·sin(E) − M|`, radians.
    pub eps: f64,
    /// Maximum number of Newton steps.
    pub max_iter: usize,
}

impl Default for KeplerParams {
    fn default() -> Self {
        Self {
            eps: KEPLER_EPS,
            max_iter: KEPLER_MAX_ITER,
        }
    }
}

fn check_eccentricity(e: f64) -> Result<(), SpheraError> {
    if !(0.0..1.0).contains(&e) {
        return Err(SpheraError::DomainError(format!(
            "eccentricity must lie in [0, 1), got {e}"
        )));
    }
    Ok(())
}

/// Solve Kepler's equation with the default settings (tolerance 1e-7, 50 iterations).
///
/// Arguments
/// ---------
/// * `e`: eccentricity, `0 <= e < 1`.
/// * `m`: mean anomaly in radians.
///
/// Returns
/// --------
/// * The eccentric anomaly `E` in radians.
///
/// Errors
/// ------
/// * [`SpheraError::DomainError`] if `e` is outside `[0, 1)` or not finite.
/// * [`SpheraError::NonConvergence`] if the iteration ceiling is reached.
pub fn solve_eccentric_anomaly(e: f64, m: Radian) -> Result<Radian, SpheraError> {
    solve_eccentric_anomaly_with(e, m, &KeplerParams::default())
}

/// Solve Kepler's equation with explicit convergence settings.
///
/// See [`solve_eccentric_anomaly`].
pub fn solve_eccentric_anomaly_with(
    e: f64,
    m: Radian,
    params: &KeplerParams,
) -> Result<Radian, SpheraError> {
    check_eccentricity(e)?;
    if !m.is_finite() {
        return Err(SpheraError::DomainError(format!(
            "mean anomaly must be finite, got {m}"
        )));
    }

    let mut ea = m;
    let mut residual = ea - e * ea.sin() - m;
    for _ in 0..params.max_iter {
        if residual.abs() < params.eps {
            return Ok(ea);
        }
        ea -= residual / (1.0 - e * ea.cos());
        residual = ea - e * ea.sin() - m;
    }
    if residual.abs() < params.eps {
        return Ok(ea);
    }

    warn!(
        "Kepler solver gave up: e = {e}, M = {m}, residual = {residual:e} after {} iterations",
        params.max_iter
    );
    Err(SpheraError::NonConvergence {
        iterations: params.max_iter,
        residual,
    })
}

/// True anomaly from the eccentric anomaly.
///
/// ```text
/// ν = 2·atan( sqrt((1+e)/(1−e)) · tan(E/2) )
/// ```
///
/// The result lies in `(−π, π]`.
///
/// Errors
/// ------
/// * [`SpheraError::DomainError`] if `e` is outside `[0, 1)` or not finite.
pub fn true_anomaly(e: f64, ea: Radian) -> Result<Radian, SpheraError> {
    check_eccentricity(e)?;
    Ok(2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (ea / 2.0).tan()).atan())
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    #[test]
    fn test_eccentric_anomaly() {
        let ea = solve_eccentric_anomaly(0.016718, 3.5208387374141448).unwrap();
        assert_relative_eq!(ea, 3.5147440476661806, max_relative = 1e-4);

        let ea = solve_eccentric_anomaly(0.965, 0.763009079752865).unwrap();
        assert_relative_eq!(ea, 1.7176273861066755, max_relative = 1e-4);
    }

    #[test]
    fn test_residual_below_tolerance() {
        for &e in &[0.0, 0.01, 0.2, 0.5, 0.8, 0.98] {
            for k in 0..36 {
                let m = k as f64 * 10.0_f64.to_radians();
                let ea = solve_eccentric_anomaly(e, m).unwrap();
                assert!((ea - e * ea.sin() - m).abs() < 1e-7, "e = {e}, m = {m}");
            }
        }
    }

    #[test]
    fn test_circular_orbit() {
        assert_eq!(solve_eccentric_anomaly(0.0, 1.234).unwrap(), 1.234);
        assert_abs_diff_eq!(true_anomaly(0.0, 1.234).unwrap(), 1.234, epsilon = 1e-12);
    }

    #[test]
    fn test_domain_errors() {
        assert!(matches!(
            solve_eccentric_anomaly(1.0, 0.5),
            Err(SpheraError::DomainError(_))
        ));
        assert!(matches!(
            solve_eccentric_anomaly(-0.1, 0.5),
            Err(SpheraError::DomainError(_))
        ));
        assert!(matches!(
            solve_eccentric_anomaly(f64::NAN, 0.5),
            Err(SpheraError::DomainError(_))
        ));
        assert!(matches!(
            true_anomaly(1.2, 0.5),
            Err(SpheraError::DomainError(_))
        ));
    }

    #[test]
    fn test_non_convergence() {
        let params = KeplerParams {
            eps: 1e-15,
            max_iter: 1,
        };
        let res = solve_eccentric_anomaly_with(0.9, 2.0, &params);
        assert!(matches!(
            res,
            Err(SpheraError::NonConvergence { iterations: 1, .. })
        ));
    }

    #[test]
    fn test_true_anomaly() {
        let nu = true_anomaly(0.016718, 3.5147440476661806).unwrap();
        assert_relative_eq!(nu, -2.774497552017826, max_relative = 1e-4);

        let nu = true_anomaly(0.965, 1.7176273861066755).unwrap();
        assert_relative_eq!(nu, 2.9122563898777387, max_relative = 1e-4);
    }

    #[test]
    fn test_true_anomaly_inverse_relation() {
        let e = 0.3;
        for k in 1..12 {
            let ea = -PI + k as f64 * PI / 6.0;
            let nu = true_anomaly(e, ea).unwrap();
            let back = 2.0 * (((1.0 - e) / (1.0 + e)).sqrt() * (nu / 2.0).tan()).atan();
            assert_abs_diff_eq!(back, ea, epsilon = 1e-4);
        }
    }
}
