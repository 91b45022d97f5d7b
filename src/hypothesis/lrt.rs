//! Likelihood-ratio test for nested model fits.

use super::Significance;
use crate::{
    error::{TestError, TestResult},
    fit::Fit,
    num::Float,
};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use std::fmt;

/// The outcome of a likelihood-ratio test.
#[derive(Debug, Clone)]
pub struct LrTest {
    /// Twice the difference of the maximized log-likelihoods.
    pub statistic: f64,
    /// Upper-tail probability from the chi-squared reference distribution.
    pub p_value: f64,
    /// Degrees of freedom: the number of parameters the restricted model
    /// leaves out.
    pub df: usize,
}

impl fmt::Display for LrTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LR = {:.4} on {} df, p = {:.4e}",
            self.statistic, self.df, self.p_value
        )
    }
}

impl Significance for LrTest {
    fn statistic(&self) -> f64 {
        self.statistic
    }
    fn p_value(&self) -> f64 {
        self.p_value
    }
}

/// Compare two nested fits through their maximized log-likelihoods. The
/// degrees of freedom are taken from the difference in parameter counts,
/// which must be strictly positive.
pub fn lr_test<F: Float>(restricted: &Fit<F>, unrestricted: &Fit<F>) -> TestResult<LrTest> {
    if restricted.n_data != unrestricted.n_data {
        return Err(TestError::BadInput(
            "both fits must use the same observations".to_string(),
        ));
    }
    if restricted.n_params() >= unrestricted.n_params() {
        return Err(TestError::NotNested);
    }
    let df = unrestricted.n_params() - restricted.n_params();
    lr_from_log_like(
        restricted.model_like.as_f64(),
        unrestricted.model_like.as_f64(),
        df,
    )
}

/// The likelihood-ratio statistic and p-value from the two maximized
/// log-likelihoods. The statistic is 2 * (ll_unrestricted - ll_restricted)
/// and is referred to a chi-squared distribution with `df` degrees of
/// freedom. For correctly nested maximum likelihood fits the statistic
/// cannot be negative; a negative value signals a fitting or nesting defect
/// and is reported as an error rather than a result.
pub fn lr_from_log_like(
    ll_restricted: f64,
    ll_unrestricted: f64,
    df: usize,
) -> TestResult<LrTest> {
    if df == 0 {
        return Err(TestError::NotNested);
    }
    let statistic = 2. * (ll_unrestricted - ll_restricted);
    if statistic < 0. {
        return Err(TestError::NegativeStatistic(statistic));
    }
    let chi_sq = ChiSquared::new(df as f64)?;
    let p_value = 1. - chi_sq.cdf(statistic);
    Ok(LrTest {
        statistic,
        p_value,
        df,
    })
}
