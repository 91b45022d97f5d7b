//! Model formulas and their expansion into design matrices.

use crate::{
    data::Dataset,
    error::{TestError, TestResult},
    num::Float,
    utility::indicator,
};
use itertools::Itertools;
use ndarray::{Array1, Array2};

/// A single predictor term of a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A continuous predictor, included as one column.
    Numeric(String),
    /// A categorical predictor, expanded to indicator columns with the first
    /// level in sorted order dropped as the reference.
    Factor(String),
}

/// A model formula: a response column plus a list of predictor terms. The
/// intercept is implicit and handled by the model builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    response: String,
    terms: Vec<Term>,
}

impl Formula {
    /// Start a formula for the named response column.
    pub fn response(name: &str) -> Self {
        Self {
            response: name.to_string(),
            terms: Vec::new(),
        }
    }

    /// Add a continuous predictor.
    pub fn numeric(mut self, name: &str) -> Self {
        self.terms.push(Term::Numeric(name.to_string()));
        self
    }

    /// Add a categorical predictor.
    pub fn factor(mut self, name: &str) -> Self {
        self.terms.push(Term::Factor(name.to_string()));
        self
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// True when this formula's predictors are a strict subset of `other`'s
    /// and both share the same response. Terms are assumed to be distinct
    /// within each formula. Both significance tests require this to hold for
    /// the (restricted, unrestricted) pair.
    pub fn nested_in(&self, other: &Formula) -> bool {
        self.response == other.response
            && self.terms.len() < other.terms.len()
            && self.terms.iter().all(|t| other.terms.contains(t))
    }

    /// Expand the formula against a dataset into a response vector and a
    /// design matrix (without the intercept column).
    pub fn design<F: Float>(&self, data: &Dataset<F>) -> TestResult<Design<F>> {
        let y = data.numeric(&self.response)?.clone();
        let mut names: Vec<String> = Vec::new();
        let mut columns: Vec<Array1<F>> = Vec::new();
        for term in &self.terms {
            match term {
                Term::Numeric(name) => {
                    columns.push(data.numeric(name)?.clone());
                    names.push(name.clone());
                }
                Term::Factor(name) => {
                    let labels = data.factor(name)?;
                    let levels: Vec<&String> = labels.iter().unique().sorted().collect();
                    if levels.len() < 2 {
                        return Err(TestError::BadInput(format!(
                            "factor '{}' has fewer than two observed levels",
                            name
                        )));
                    }
                    // the first level in sorted order is the reference
                    for level in levels.into_iter().skip(1) {
                        columns.push(indicator(labels, level));
                        names.push(format!("{}[{}]", name, level));
                    }
                }
            }
        }
        let mut x = Array2::<F>::zeros((y.len(), columns.len()));
        for (j, column) in columns.iter().enumerate() {
            x.column_mut(j).assign(column);
        }
        Ok(Design { y, x, names })
    }
}

/// The expanded data for one formula: response, predictor matrix, and the
/// name of each predictor column.
#[derive(Debug, Clone)]
pub struct Design<F: Float> {
    pub y: Array1<F>,
    pub x: Array2<F>,
    pub names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn group_data() -> Dataset<f64> {
        let mut data = Dataset::new();
        data.add_numeric("y", array![1., 2., 3., 4.]).unwrap();
        data.add_numeric("x", array![0.5, 1.5, 2.5, 3.5]).unwrap();
        data.add_factor(
            "group",
            vec!["b", "a", "c", "a"].into_iter().map(String::from).collect(),
        )
        .unwrap();
        data
    }

    #[test]
    fn dummy_expansion_drops_reference_level() {
        let data = group_data();
        let design = Formula::response("y")
            .numeric("x")
            .factor("group")
            .design(&data)
            .unwrap();
        // levels sort to [a, b, c]; "a" is the reference
        assert_eq!(design.names, ["x", "group[b]", "group[c]"]);
        assert_eq!(design.x.column(1), array![1., 0., 0., 0.]);
        assert_eq!(design.x.column(2), array![0., 0., 1., 0.]);
    }

    #[test]
    fn single_level_factor_rejected() {
        let mut data = Dataset::<f64>::new();
        data.add_numeric("y", array![1., 2.]).unwrap();
        data.add_factor("g", vec!["a".to_string(), "a".to_string()])
            .unwrap();
        let res = Formula::response("y").factor("g").design(&data);
        assert!(matches!(res, Err(TestError::BadInput(_))));
    }

    #[test]
    fn missing_column_rejected() {
        let data = group_data();
        let res = Formula::response("y").numeric("absent").design(&data);
        assert!(matches!(res, Err(TestError::BadInput(_))));
    }

    #[test]
    fn nesting_is_strict_and_order_free() {
        let restricted = Formula::response("y").numeric("x");
        let unrestricted = Formula::response("y").factor("group").numeric("x");
        assert!(restricted.nested_in(&unrestricted));
        assert!(!unrestricted.nested_in(&restricted));
        // a formula is not nested in itself
        assert!(!restricted.nested_in(&restricted));
        // differing responses are never nested
        let other = Formula::response("z").numeric("x").factor("group");
        assert!(!restricted.nested_in(&other));
    }
}
