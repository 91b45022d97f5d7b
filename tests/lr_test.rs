//! test cases for the likelihood-ratio test on nested fits

use anyhow::Result;
use nested_ols::{
    lr_test, nested_lr_test, FirmSimulation, Formula, ModelBuilder, Significance, TestError,
    Verdict,
};
use statrs::distribution::{ChiSquared, ContinuousCDF};

mod common;
use common::{firm_dataset, formulas};

#[test]
fn real_sector_effects_are_detected() -> Result<()> {
    let data = firm_dataset(FirmSimulation::new(2000).seed(42))?;
    let (restricted, unrestricted) = formulas();
    let test = nested_lr_test(&data, &restricted, &unrestricted)?;
    dbg!(&test.statistic);
    assert!(test.statistic >= 0.);
    assert!(test.p_value < 0.05);
    assert_eq!(test.verdict(0.05)?, Verdict::Reject);
    Ok(())
}

/// The scenario y ~ x against y ~ x + group with a three-level group: two
/// indicator columns are added, the statistic is exactly twice the
/// log-likelihood difference, and the p-value matches the chi-squared upper
/// tail to floating-point precision.
#[test]
fn statistic_and_p_value_match_the_closed_form() -> Result<()> {
    let data = firm_dataset(FirmSimulation::new(500).seed(7))?;
    let restricted = Formula::response("log_productivity").numeric("log_investment");
    let unrestricted = restricted.clone().factor("sector");

    let design_r = restricted.design(&data)?;
    let design_u = unrestricted.design(&data)?;
    assert_eq!(design_u.names.len() - design_r.names.len(), 2);

    let fit_r = ModelBuilder::data(design_r.y.view(), design_r.x.view())
        .build()?
        .fit()?;
    let fit_u = ModelBuilder::data(design_u.y.view(), design_u.x.view())
        .build()?
        .fit()?;
    let test = lr_test(&fit_r, &fit_u)?;

    assert_eq!(test.df, 2);
    assert_eq!(test.statistic, 2. * (fit_u.model_like - fit_r.model_like));
    let chi_sq = ChiSquared::new(2.)?;
    assert_eq!(test.p_value, 1. - chi_sq.cdf(test.statistic));

    let driver = nested_lr_test(&data, &restricted, &unrestricted)?;
    assert_eq!(driver.statistic, test.statistic);
    assert_eq!(driver.p_value, test.p_value);
    Ok(())
}

#[test]
fn reversed_formulas_fail_fast() -> Result<()> {
    let data = firm_dataset(FirmSimulation::new(200).seed(3))?;
    let (restricted, unrestricted) = formulas();
    let res = nested_lr_test(&data, &unrestricted, &restricted);
    assert!(matches!(res, Err(TestError::NotNested)));
    Ok(())
}

#[test]
fn non_nested_formulas_fail_fast() -> Result<()> {
    let data = firm_dataset(FirmSimulation::new(200).seed(3))?;
    // same term count, different terms: neither nests the other
    let left = Formula::response("log_productivity").numeric("log_investment");
    let right = Formula::response("log_productivity").factor("sector");
    let res = nested_lr_test(&data, &left, &right);
    assert!(matches!(res, Err(TestError::NotNested)));
    Ok(())
}

#[test]
fn report_names_the_verdict() -> Result<()> {
    let data = firm_dataset(FirmSimulation::new(1000).seed(5))?;
    let (restricted, unrestricted) = formulas();
    let test = nested_lr_test(&data, &restricted, &unrestricted)?;
    let line = test.report(0.05)?;
    dbg!(&line);
    assert!(line.contains("LR ="));
    assert!(line.contains("p ="));
    assert!(line.contains("null hypothesis"));
    Ok(())
}
