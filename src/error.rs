//! define the error enum for the result of model fits and significance tests

use ndarray_linalg::error::LinalgError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error("Inconsistent input: {0}")]
    BadInput(String),
    #[error("Non-positive value {value} in column '{column}'")]
    NonPositive { column: String, value: f64 },
    #[error("Restricted model is not nested in the unrestricted model")]
    NotNested,
    #[error("Colinear data")]
    ColinearData,
    #[error("Underconstrained data")]
    Underconstrained,
    #[error("Negative test statistic: {0}")]
    NegativeStatistic(f64),
    #[error("Linear algebra")]
    LinalgError {
        #[from]
        source: LinalgError,
    },
    #[error("Reference distribution")]
    Distribution {
        #[from]
        source: statrs::StatsError,
    },
}

pub type TestResult<T> = Result<T, TestError>;
