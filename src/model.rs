//! Collect data for and configure an ordinary least squares model.

use crate::{
    error::{TestError, TestResult},
    fit::Fit,
    num::Float,
    utility::one_pad,
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use ndarray_linalg::{types::Scalar, DeterminantH, SolveH};

/// Holds the data and configuration settings for a regression.
pub struct Model<F>
where
    F: Float,
{
    /// the observation of response data by event
    pub y: Array1<F>,
    /// the design matrix with events in rows and instances in columns,
    /// 1-padded when an intercept term is used
    pub x: Array2<F>,
    /// Whether the intercept term is used (commonly true)
    pub use_intercept: bool,
}

impl<F> Model<F>
where
    F: Float,
{
    /// Solve the least squares problem in closed form and return a fit object
    /// holding the results. The normal equations are solved directly; for the
    /// Gaussian family this is also the maximum likelihood solution, so the
    /// reported log-likelihood is the maximized one.
    pub fn fit(&self) -> TestResult<Fit<F>>
    where
        Array2<F>: SolveH<F>,
    {
        let n_data = self.y.len();
        let xtx: Array2<F> = self.x.t().dot(&self.x);
        let xty: Array1<F> = self.x.t().dot(&self.y);
        let result: Array1<F> = xtx.solveh_into(xty)?;

        let fitted: Array1<F> = self.x.dot(&result);
        let residuals: Array1<F> = &self.y - &fitted;
        let rss: F = residuals.mapv(|r| r * r).sum();
        let tss: F = if self.use_intercept {
            let y_mean = self.y.sum() / F::of_f64(n_data as f64);
            self.y
                .mapv(|y| {
                    let dev = y - y_mean;
                    dev * dev
                })
                .sum()
        } else {
            // uncentered total sum of squares without an intercept
            self.y.mapv(|y| y * y).sum()
        };
        if tss <= F::zero() {
            return Err(TestError::BadInput(
                "response has no variation".to_string(),
            ));
        }
        if rss <= F::zero() {
            // an exact fit leaves the Gaussian likelihood unbounded
            return Err(TestError::BadInput(
                "residual sum of squares is zero".to_string(),
            ));
        }
        let r_squared = F::one() - rss / tss;
        let model_like = gaussian_log_like(rss, n_data);
        // ndf is guaranteed to be > 0 because of the underconstrained check
        let ndf = n_data - result.len();
        Ok(Fit {
            result,
            n_data,
            ndf,
            rss,
            r_squared,
            model_like,
            use_intercept: self.use_intercept,
        })
    }
}

/// The Gaussian log-likelihood profiled over the error variance, evaluated
/// at its maximum: -n/2 * (ln(2 pi) + ln(rss / n) + 1).
fn gaussian_log_like<F: Float>(rss: F, n_data: usize) -> F {
    let half = F::of_f64(0.5);
    let two_pi = F::of_f64(2. * std::f64::consts::PI);
    let n = F::of_f64(n_data as f64);
    -half * n * (num_traits::Float::ln(two_pi) + num_traits::Float::ln(rss / n) + F::one())
}

/// Provides an interface to build a model from borrowed data with convenient
/// default settings.
pub struct ModelBuilder<'a, F>
where
    F: Float,
{
    /// Observed response variable data where each entry is a new observation.
    data_y: ArrayView1<'a, F>,
    /// Design matrix of observed covariate data where each row is a new
    /// observation and each column represents a different dependent variable.
    data_x: ArrayView2<'a, F>,
    /// Whether to use an intercept term. Defaults to `true`.
    use_intercept_term: bool,
    /// tolerance for determinant check on rank of data matrix X.
    det_tol: F,
}

impl<'a, F> ModelBuilder<'a, F>
where
    F: Float,
{
    /// Borrow the Y and X data where each row in the arrays is a new
    /// observation.
    pub fn data(data_y: ArrayView1<'a, F>, data_x: ArrayView2<'a, F>) -> Self {
        // the number of predictors including the intercept
        let n_pred = data_x.ncols() + 1;
        Self {
            data_y,
            data_x,
            use_intercept_term: true,
            det_tol: default_epsilon::<F>(n_pred),
        }
    }

    /// Do not add a constant term to the design matrix
    pub fn no_constant(mut self) -> Self {
        self.use_intercept_term = false;
        self
    }

    /// Set the tolerance for the co-linearity check.
    pub fn colinearity_tolerance(mut self, tol: F) -> Self {
        self.det_tol = tol;
        self
    }

    pub fn build(self) -> TestResult<Model<F>>
    where
        Array2<F>: DeterminantH,
        <<Array2<F> as DeterminantH>::Elem as Scalar>::Real: std::convert::Into<F>,
    {
        let n_data = self.data_y.len();
        if n_data != self.data_x.nrows() {
            return Err(TestError::BadInput(
                "y and x data must have same number of points".to_string(),
            ));
        }

        // Check for co-linearity by ensuring that the determinant of X^T * X is non-zero.
        let xtx: Array2<F> = self.data_x.t().dot(&self.data_x);
        let det: <<Array2<F> as DeterminantH>::Elem as Scalar>::Real = xtx.deth()?;
        let det: F = det.into();
        if num_traits::Float::abs(det) < self.det_tol {
            return Err(TestError::ColinearData);
        }

        // add constant term to X data
        let data_x = if self.use_intercept_term {
            one_pad(self.data_x)
        } else {
            self.data_x.to_owned()
        };
        // Check if the data is under-constrained. A strict inequality is
        // required so that the residual degrees of freedom stay positive,
        // which both the likelihood and the F denominator rely on.
        if n_data <= data_x.ncols() {
            return Err(TestError::Underconstrained);
        }

        Ok(Model {
            y: self.data_y.to_owned(),
            x: data_x,
            use_intercept: self.use_intercept_term,
        })
    }
}

/// Default tolerance for colinearity checking.
/// Uses the square root of the number of predictors times machine epsilon.
/// This may not be particularly well-justified and may be too lenient.
fn default_epsilon<F: Float>(n_pred: usize) -> F {
    let sqrt_n: F = num_traits::Float::sqrt(F::of_f64(n_pred as f64));
    sqrt_n * F::epsilon()
}
