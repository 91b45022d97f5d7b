//! F-test for nested model fits, the finite-sample analogue of the
//! likelihood-ratio test.

use super::Significance;
use crate::{
    error::{TestError, TestResult},
    fit::Fit,
    num::Float,
};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};
use std::fmt;

/// The outcome of an F-test.
#[derive(Debug, Clone)]
pub struct FTest {
    /// The ratio of the explained-variance gain to the residual variance.
    pub statistic: f64,
    /// Upper-tail probability from the F reference distribution.
    pub p_value: f64,
    /// Numerator degrees of freedom: the number of restrictions.
    pub df_num: usize,
    /// Denominator degrees of freedom of the unrestricted residuals.
    pub df_den: usize,
}

impl fmt::Display for FTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "F = {:.4} on ({}, {}) df, p = {:.4e}",
            self.statistic, self.df_num, self.df_den, self.p_value
        )
    }
}

impl Significance for FTest {
    fn statistic(&self) -> f64 {
        self.statistic
    }
    fn p_value(&self) -> f64 {
        self.p_value
    }
}

/// Compare two nested fits through their R² values. The restriction count
/// comes from the difference in parameter counts and the denominator degrees
/// of freedom from the unrestricted fit itself, so models built without an
/// intercept stay consistent.
pub fn f_test<F: Float>(restricted: &Fit<F>, unrestricted: &Fit<F>) -> TestResult<FTest> {
    if restricted.n_data != unrestricted.n_data {
        return Err(TestError::BadInput(
            "both fits must use the same observations".to_string(),
        ));
    }
    if restricted.n_params() >= unrestricted.n_params() {
        return Err(TestError::NotNested);
    }
    let df_num = unrestricted.n_params() - restricted.n_params();
    if unrestricted.ndf == 0 {
        return Err(TestError::Underconstrained);
    }
    f_statistic(
        restricted.r_squared.as_f64(),
        unrestricted.r_squared.as_f64(),
        df_num,
        unrestricted.ndf,
    )
}

/// The F statistic and p-value in the explicit finite-sample form:
/// the numerator is (R²_u - R²_r) / q and the denominator
/// (1 - R²_u) / (n - k_params - 1), where `n_restrictions` = q is the number
/// of extra columns in the unrestricted design and `n_params` = k_params its
/// parameter count excluding the intercept. The test is undefined when
/// n <= k_params + 1 and fails rather than producing a non-positive
/// degrees-of-freedom result.
pub fn f_from_r_squared(
    r_squared_restricted: f64,
    r_squared_unrestricted: f64,
    n_restrictions: usize,
    n_obs: usize,
    n_params: usize,
) -> TestResult<FTest> {
    if n_obs <= n_params + 1 {
        return Err(TestError::Underconstrained);
    }
    f_statistic(
        r_squared_restricted,
        r_squared_unrestricted,
        n_restrictions,
        n_obs - n_params - 1,
    )
}

fn f_statistic(r2_r: f64, r2_u: f64, df_num: usize, df_den: usize) -> TestResult<FTest> {
    if df_num == 0 {
        return Err(TestError::NotNested);
    }
    for &r2 in &[r2_r, r2_u] {
        if !(0. ..=1.).contains(&r2) {
            return Err(TestError::BadInput(format!(
                "R-squared must lie in [0, 1], got {}",
                r2
            )));
        }
    }
    if r2_u < r2_r {
        // the unrestricted model cannot explain less than the restricted one
        return Err(TestError::NegativeStatistic(r2_u - r2_r));
    }
    if r2_u >= 1. {
        return Err(TestError::BadInput(
            "unrestricted fit is exact; the residual variance is zero".to_string(),
        ));
    }
    let numerator = (r2_u - r2_r) / df_num as f64;
    let denominator = (1. - r2_u) / df_den as f64;
    let statistic = numerator / denominator;
    let f_dist = FisherSnedecor::new(df_num as f64, df_den as f64)?;
    let p_value = 1. - f_dist.cdf(statistic);
    Ok(FTest {
        statistic,
        p_value,
        df_num,
        df_den,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn statistic_matches_hand_computation() {
        // ((0.5 - 0.3) / 2) / ((1 - 0.5) / 100) = 20
        let test = f_from_r_squared(0.3, 0.5, 2, 103, 2).unwrap();
        assert_eq!(test.df_den, 100);
        assert_abs_diff_eq!(test.statistic, 20., epsilon = 1e-10);
        assert!(test.p_value > 0.);
        assert!(test.p_value < 1e-6);
    }

    #[test]
    fn zero_statistic_has_unit_p_value() {
        let test = f_from_r_squared(0.4, 0.4, 2, 100, 3).unwrap();
        assert_eq!(test.statistic, 0.);
        assert_eq!(test.p_value, 1.);
    }

    #[test]
    fn too_few_observations_rejected() {
        // n = k_params + 1 leaves no residual degrees of freedom
        let res = f_from_r_squared(0.3, 0.5, 2, 4, 3);
        assert!(matches!(res, Err(TestError::Underconstrained)));
    }

    #[test]
    fn out_of_range_r_squared_rejected() {
        let res = f_from_r_squared(-0.1, 0.5, 2, 100, 3);
        assert!(matches!(res, Err(TestError::BadInput(_))));
        let res = f_from_r_squared(0.1, 1.5, 2, 100, 3);
        assert!(matches!(res, Err(TestError::BadInput(_))));
    }

    #[test]
    fn shrinking_r_squared_is_an_error() {
        let res = f_from_r_squared(0.6, 0.5, 2, 100, 3);
        assert!(matches!(res, Err(TestError::NegativeStatistic(_))));
    }

    #[test]
    fn exact_unrestricted_fit_rejected() {
        let res = f_from_r_squared(0.9, 1., 2, 100, 3);
        assert!(matches!(res, Err(TestError::BadInput(_))));
    }
}
