//! Significance tests for nested pairs of least squares fits, with a
//! human-readable verdict surface.

pub mod ftest;
pub mod lrt;

use crate::{
    data::Dataset,
    error::{TestError, TestResult},
    fit::Fit,
    formula::Formula,
    model::ModelBuilder,
    num::Float,
};
use self::ftest::FTest;
use self::lrt::LrTest;
use ndarray::Array2;
use ndarray_linalg::{types::Scalar, DeterminantH, SolveH};
use std::fmt;

/// The significance level used when no other is supplied.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// The decision reached by a significance test at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The added predictors are jointly significant.
    Reject,
    /// The data are compatible with the restricted model.
    FailToReject,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Reject => write!(f, "reject the null hypothesis"),
            Verdict::FailToReject => write!(f, "fail to reject the null hypothesis"),
        }
    }
}

/// Common interface of the significance tests on a nested model pair.
pub trait Significance: fmt::Display {
    /// The observed test statistic.
    fn statistic(&self) -> f64;

    /// The upper-tail probability of the statistic under the null hypothesis.
    fn p_value(&self) -> f64;

    /// Decide at level `alpha`, which must lie strictly between zero and one.
    fn verdict(&self, alpha: f64) -> TestResult<Verdict> {
        if !(alpha > 0. && alpha < 1.) {
            return Err(TestError::BadInput(format!(
                "significance level must lie strictly between 0 and 1, got {}",
                alpha
            )));
        }
        Ok(if self.p_value() < alpha {
            Verdict::Reject
        } else {
            Verdict::FailToReject
        })
    }

    /// A one-line summary of the test with the decision at level `alpha`.
    fn report(&self, alpha: f64) -> TestResult<String> {
        let verdict = self.verdict(alpha)?;
        Ok(format!(
            "{}: {} at the {}% level",
            self,
            verdict,
            alpha * 100.
        ))
    }
}

/// Fit both formulas on the same dataset and compare them with the
/// likelihood-ratio test.
pub fn nested_lr_test<F>(
    data: &Dataset<F>,
    restricted: &Formula,
    unrestricted: &Formula,
) -> TestResult<LrTest>
where
    F: Float,
    Array2<F>: DeterminantH + SolveH<F>,
    <<Array2<F> as DeterminantH>::Elem as Scalar>::Real: std::convert::Into<F>,
{
    let (fit_r, fit_u) = fit_pair(data, restricted, unrestricted)?;
    self::lrt::lr_test(&fit_r, &fit_u)
}

/// Fit both formulas on the same dataset and compare them with the F-test.
pub fn nested_f_test<F>(
    data: &Dataset<F>,
    restricted: &Formula,
    unrestricted: &Formula,
) -> TestResult<FTest>
where
    F: Float,
    Array2<F>: DeterminantH + SolveH<F>,
    <<Array2<F> as DeterminantH>::Elem as Scalar>::Real: std::convert::Into<F>,
{
    let (fit_r, fit_u) = fit_pair(data, restricted, unrestricted)?;
    self::ftest::f_test(&fit_r, &fit_u)
}

/// Check the nesting invariant up front, then build and fit both designs
/// from the same dataset.
fn fit_pair<F>(
    data: &Dataset<F>,
    restricted: &Formula,
    unrestricted: &Formula,
) -> TestResult<(Fit<F>, Fit<F>)>
where
    F: Float,
    Array2<F>: DeterminantH + SolveH<F>,
    <<Array2<F> as DeterminantH>::Elem as Scalar>::Real: std::convert::Into<F>,
{
    if !restricted.nested_in(unrestricted) {
        return Err(TestError::NotNested);
    }
    let design_r = restricted.design(data)?;
    let design_u = unrestricted.design(data)?;
    let fit_r = ModelBuilder::data(design_r.y.view(), design_r.x.view())
        .build()?
        .fit()?;
    let fit_u = ModelBuilder::data(design_u.y.view(), design_u.x.view())
        .build()?
        .fit()?;
    Ok((fit_r, fit_u))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy {
        p: f64,
    }

    impl fmt::Display for Dummy {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "stat, p = {}", self.p)
        }
    }

    impl Significance for Dummy {
        fn statistic(&self) -> f64 {
            1.
        }
        fn p_value(&self) -> f64 {
            self.p
        }
    }

    #[test]
    fn verdict_follows_the_decision_rule() {
        let test = Dummy { p: 0.01 };
        assert_eq!(test.verdict(DEFAULT_ALPHA).unwrap(), Verdict::Reject);
        let test = Dummy { p: 0.2 };
        assert_eq!(test.verdict(DEFAULT_ALPHA).unwrap(), Verdict::FailToReject);
        // the boundary itself is not a rejection
        let test = Dummy { p: 0.05 };
        assert_eq!(test.verdict(0.05).unwrap(), Verdict::FailToReject);
    }

    #[test]
    fn out_of_range_levels_rejected() {
        let test = Dummy { p: 0.5 };
        assert!(matches!(test.verdict(0.), Err(TestError::BadInput(_))));
        assert!(matches!(test.verdict(1.), Err(TestError::BadInput(_))));
        assert!(matches!(test.verdict(-0.1), Err(TestError::BadInput(_))));
    }

    #[test]
    fn report_states_the_verdict() {
        let test = Dummy { p: 0.001 };
        let line = test.report(0.05).unwrap();
        assert!(line.contains("reject the null hypothesis"));
        assert!(line.contains("5% level"));
    }
}
