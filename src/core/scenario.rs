use serde::{Deserialize, Serialize};

use crate::core::{
    chart::ChartSpecification, response::SystemParameters, sweep::DampingSweep,
    time_grid::TimeGrid,
};

/**
 * Contents of one explorer parameter file: the physical system, the time
 * sampling, and which damping ratios to evaluate. The chart section is
 * optional; export-only parameter files can omit it.
 */
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScenarioParams {
    pub system: SystemParameters,
    pub time_grid: TimeGrid,
    pub sweep: DampingSweep,
    #[serde(default)]
    pub chart: ChartSpecification,
}

pub fn load_scenario_params(path: &str) -> Result<ScenarioParams, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
