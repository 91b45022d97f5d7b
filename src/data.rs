//! In-memory table of observations, keyed by column name.
//! Columns are either continuous measurements or categorical labels; the
//! formula layer turns them into design matrices.

use crate::{
    error::{TestError, TestResult},
    num::Float,
};
use ndarray::Array1;

/// A single column of observations.
#[derive(Debug, Clone)]
pub enum Column<F: Float> {
    /// Continuous measurements.
    Numeric(Array1<F>),
    /// Categorical labels drawn from a small set of levels.
    Factor(Vec<String>),
}

impl<F: Float> Column<F> {
    fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Factor(labels) => labels.len(),
        }
    }
}

/// Holds the observed data, one entry per column. All columns have the same
/// number of rows and there is no persistent state; a table is rebuilt for
/// each run.
#[derive(Debug, Clone, Default)]
pub struct Dataset<F: Float> {
    columns: Vec<(String, Column<F>)>,
}

impl<F: Float> Dataset<F> {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// The number of observations, zero for an empty table.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, col)| col.len())
    }

    pub fn add_numeric(&mut self, name: &str, values: Array1<F>) -> TestResult<()> {
        self.add_column(name, Column::Numeric(values))
    }

    pub fn add_factor(&mut self, name: &str, labels: Vec<String>) -> TestResult<()> {
        self.add_column(name, Column::Factor(labels))
    }

    fn add_column(&mut self, name: &str, column: Column<F>) -> TestResult<()> {
        if self.columns.iter().any(|(n, _)| n == name) {
            return Err(TestError::BadInput(format!(
                "column '{}' is already present",
                name
            )));
        }
        if !self.columns.is_empty() && column.len() != self.n_rows() {
            return Err(TestError::BadInput(format!(
                "column '{}' has {} rows but the table has {}",
                name,
                column.len(),
                self.n_rows()
            )));
        }
        self.columns.push((name.to_string(), column));
        Ok(())
    }

    /// Borrow a numeric column by name.
    pub fn numeric(&self, name: &str) -> TestResult<&Array1<F>> {
        match self.column(name)? {
            Column::Numeric(values) => Ok(values),
            Column::Factor(_) => Err(TestError::BadInput(format!(
                "column '{}' is categorical, expected numeric",
                name
            ))),
        }
    }

    /// Borrow the labels of a categorical column by name.
    pub fn factor(&self, name: &str) -> TestResult<&[String]> {
        match self.column(name)? {
            Column::Factor(labels) => Ok(labels),
            Column::Numeric(_) => Err(TestError::BadInput(format!(
                "column '{}' is numeric, expected categorical",
                name
            ))),
        }
    }

    fn column(&self, name: &str) -> TestResult<&Column<F>> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, col)| col)
            .ok_or_else(|| TestError::BadInput(format!("no column named '{}'", name)))
    }

    /// Derive a new column holding the natural log of `source`. The log of a
    /// non-positive number is undefined, so any such value fails validation
    /// before the transform is applied.
    pub fn log_transform(&mut self, source: &str, name: &str) -> TestResult<()> {
        let logged = {
            let values = self.numeric(source)?;
            if let Some(&bad) = values.iter().find(|v| **v <= F::zero()) {
                return Err(TestError::NonPositive {
                    column: source.to_string(),
                    value: bad.as_f64(),
                });
            }
            values.mapv(num_traits::Float::ln)
        };
        self.add_numeric(name, logged)
    }

    /// The filtering alternative to failing on non-positive values: drop
    /// every row in which any of the named numeric columns is non-positive.
    /// Returns the number of rows removed.
    pub fn retain_positive(&mut self, names: &[&str]) -> TestResult<usize> {
        let keep = {
            let mut keep = vec![true; self.n_rows()];
            for name in names {
                let values = self.numeric(name)?;
                for (flag, value) in keep.iter_mut().zip(values.iter()) {
                    if *value <= F::zero() {
                        *flag = false;
                    }
                }
            }
            keep
        };
        let dropped = keep.iter().filter(|k| !**k).count();
        for (_, column) in &mut self.columns {
            match column {
                Column::Numeric(values) => {
                    *values = values
                        .iter()
                        .zip(&keep)
                        .filter(|(_, k)| **k)
                        .map(|(v, _)| *v)
                        .collect();
                }
                Column::Factor(labels) => {
                    let mut flags = keep.iter();
                    labels.retain(|_| *flags.next().unwrap_or(&false));
                }
            }
        }
        Ok(dropped)
    }
}
