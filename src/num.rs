//! numerical trait constraints
use ndarray::ScalarOperand;
use ndarray_linalg::Lapack;

pub trait Float: Sized + num_traits::Float + Lapack + ScalarOperand {
    /// Widen to `f64` for the reference distribution lookups.
    fn as_f64(self) -> f64;
    /// Narrow from `f64`, used when ingesting simulated or literal data.
    fn of_f64(x: f64) -> Self;
}

impl Float for f32 {
    fn as_f64(self) -> f64 {
        f64::from(self)
    }
    fn of_f64(x: f64) -> Self {
        x as f32
    }
}

impl Float for f64 {
    fn as_f64(self) -> f64 {
        self
    }
    fn of_f64(x: f64) -> Self {
        x
    }
}
