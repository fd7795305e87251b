use std::io::Write;

use log::info;

use crate::core::{
    chart::{render_chart, trace_color},
    csv_export::format_zeta,
    file_io::{serialize_to_json_or_panic, FilePrefix},
    scenario::ScenarioParams,
    stopwatch::Stopwatch,
    sweep::{evaluate_sweep, ResponseTrace},
};

pub fn render_response_chart(
    params: &ScenarioParams,
    file_prefix: FilePrefix,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stopwatch = Stopwatch::new("Render");

    serialize_to_json_or_panic(file_prefix.with_suffix(".json"), params);

    let time_samples = params.time_grid.samples();
    let traces = evaluate_sweep(&params.system, &time_samples, &params.sweep)?;
    stopwatch.record_split("evaluate");

    let image = render_chart(&params.chart, &time_samples, &traces);
    stopwatch.record_split("render");

    let image_path = file_prefix.with_suffix(".png");
    image.save(&image_path)?;
    info!("wrote chart image to: {}", image_path.display());

    write_legend(
        &mut file_prefix.create_file_with_suffix("_legend.txt"),
        &traces,
    )?;
    stopwatch.record_split("write_outputs");

    stopwatch.display(&mut file_prefix.create_file_with_suffix("_diagnostics.txt"))?;

    Ok(())
}

// The chart canvas carries no text, so the axis names and the
// color-to-trace mapping live in a sidecar next to the image.
fn write_legend<W: Write>(writer: &mut W, traces: &[ResponseTrace]) -> std::io::Result<()> {
    writeln!(writer, "Time (s) vs Displacement (m)")?;
    for (trace_index, trace) in traces.iter().enumerate() {
        let color = trace_color(trace_index);
        writeln!(
            writer,
            "  #{:02x}{:02x}{:02x}  {} (ζ={})",
            color[0],
            color[1],
            color[2],
            trace.result.regime.label(),
            format_zeta(trace.zeta)
        )?;
    }
    Ok(())
}
