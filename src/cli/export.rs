use log::info;

use crate::core::{
    csv_export::{format_zeta, write_csv},
    file_io::{serialize_to_json_or_panic, FilePrefix},
    scenario::ScenarioParams,
    stopwatch::Stopwatch,
    sweep::evaluate_sweep,
};

pub fn export_response_csv(
    params: &ScenarioParams,
    file_prefix: FilePrefix,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stopwatch = Stopwatch::new("Export");

    serialize_to_json_or_panic(file_prefix.with_suffix(".json"), params);

    let time_samples = params.time_grid.samples();
    let traces = evaluate_sweep(&params.system, &time_samples, &params.sweep)?;
    stopwatch.record_split("evaluate");

    for trace in &traces {
        info!(
            "zeta={} -> {} (natural frequency: {} rad/s)",
            format_zeta(trace.zeta),
            trace.result.regime,
            trace.result.natural_frequency
        );
    }

    let csv_path = file_prefix.with_suffix(".csv");
    write_csv(
        &mut file_prefix.create_file_with_suffix(".csv"),
        &time_samples,
        &traces,
    )?;
    info!("wrote response table to: {}", csv_path.display());
    stopwatch.record_split("write_csv");

    stopwatch.display(&mut file_prefix.create_file_with_suffix("_diagnostics.txt"))?;

    Ok(())
}
