//! Significance tests for nested ordinary least squares models.
//!
//! A restricted model is compared to an unrestricted one whose predictor set
//! strictly contains it. Both are fit by closed-form least squares and the
//! joint significance of the added terms is assessed with the
//! likelihood-ratio test (chi-squared reference) or its finite-sample
//! analogue, the F-test.
//!
//! ```
//! use nested_ols::{nested_lr_test, FirmSimulation, Formula, Significance};
//!
//! # fn main() -> Result<(), nested_ols::TestError> {
//! let mut data = FirmSimulation::new(500).seed(7).generate()?;
//! data.log_transform("productivity", "log_productivity")?;
//! data.log_transform("investment", "log_investment")?;
//!
//! let restricted = Formula::response("log_productivity")
//!     .numeric("log_investment")
//!     .factor("size");
//! let unrestricted = restricted.clone().factor("sector");
//!
//! let test = nested_lr_test(&data, &restricted, &unrestricted)?;
//! println!("{}", test.report(0.05)?);
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod fit;
pub mod formula;
pub mod hypothesis;
pub mod model;
mod num;
pub mod simulate;
mod utility;

pub use crate::data::{Column, Dataset};
pub use crate::error::{TestError, TestResult};
pub use crate::fit::Fit;
pub use crate::formula::{Formula, Term};
pub use crate::hypothesis::ftest::{f_from_r_squared, f_test, FTest};
pub use crate::hypothesis::lrt::{lr_from_log_like, lr_test, LrTest};
pub use crate::hypothesis::{nested_f_test, nested_lr_test, Significance, Verdict, DEFAULT_ALPHA};
pub use crate::model::{Model, ModelBuilder};
pub use crate::num::Float;
pub use crate::simulate::FirmSimulation;
