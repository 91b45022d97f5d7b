//! Shared fixtures for the integration tests.
use anyhow::Result;
use nested_ols::{Dataset, FirmSimulation, Formula};

/// A simulated firm sample with the log columns already derived.
pub fn firm_dataset(sim: FirmSimulation) -> Result<Dataset<f64>> {
    let mut data = sim.generate()?;
    data.log_transform("productivity", "log_productivity")?;
    data.log_transform("investment", "log_investment")?;
    Ok(data)
}

/// The restricted and unrestricted formulas used throughout: the
/// unrestricted model adds the sector block to the restricted one.
#[allow(dead_code)]
pub fn formulas() -> (Formula, Formula) {
    let restricted = Formula::response("log_productivity")
        .numeric("log_investment")
        .factor("size");
    let unrestricted = restricted.clone().factor("sector");
    (restricted, unrestricted)
}
