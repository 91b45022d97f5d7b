//! struct holding the fit result of a regression

use crate::{num::Float, utility::one_pad};
use ndarray::{Array1, ArrayView2};

/// The result of a successful least squares fit.
#[derive(Debug, Clone)]
pub struct Fit<F>
where
    F: Float,
{
    /// the parameter values that maximize the likelihood, with the intercept
    /// first when one is present
    pub result: Array1<F>,
    /// the number of observations used in the fit
    pub n_data: usize,
    /// number of data points minus number of free parameters
    pub ndf: usize,
    /// the residual sum of squares
    pub rss: F,
    /// the coefficient of determination, centered when an intercept is used
    pub r_squared: F,
    /// the maximized Gaussian log-likelihood
    pub model_like: F,
    pub(crate) use_intercept: bool,
}

impl<F> Fit<F>
where
    F: Float,
{
    /// The total number of fitted parameters, including the intercept if used.
    pub fn n_params(&self) -> usize {
        self.result.len()
    }

    /// Evaluate the fitted model on new covariate data.
    pub fn predict(&self, data_x: ArrayView2<F>) -> Array1<F> {
        if self.use_intercept {
            one_pad(data_x).dot(&self.result)
        } else {
            data_x.dot(&self.result)
        }
    }
}
