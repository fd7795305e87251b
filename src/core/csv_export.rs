use std::io::{self, Write};

use crate::core::sweep::ResponseTrace;

/// Formats a damping ratio the way it appears in CSV column names and
/// legend entries: shortest decimal form, e.g. `0.1`, `1`, `2.75`.
pub fn format_zeta(zeta: f64) -> String {
    format!("{}", zeta)
}

/**
 * Writes the evaluated sweep as a table: a `time_s` column followed by
 * one `x_zeta_<value>` displacement column per trace, in trace order.
 */
pub fn write_csv<W: Write>(
    writer: &mut W,
    time_samples: &[f64],
    traces: &[ResponseTrace],
) -> io::Result<()> {
    for trace in traces {
        assert_eq!(
            trace.result.displacement.len(),
            time_samples.len(),
            "trace length mismatch"
        );
    }

    write!(writer, "time_s")?;
    for trace in traces {
        write!(writer, ",x_zeta_{}", format_zeta(trace.zeta))?;
    }
    writeln!(writer)?;

    for (row, &t) in time_samples.iter().enumerate() {
        write!(writer, "{}", t)?;
        for trace in traces {
            write!(writer, ",{}", trace.result.displacement[row])?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::response::{evaluate, SystemParameters};
    use crate::core::sweep::{evaluate_sweep, DampingSweep};
    use approx::assert_relative_eq;

    #[test]
    fn test_format_zeta_shortest_form() {
        assert_eq!(format_zeta(0.1), "0.1");
        assert_eq!(format_zeta(1.0), "1");
        assert_eq!(format_zeta(2.0), "2");
        assert_eq!(format_zeta(2.75), "2.75");
    }

    #[test]
    fn test_csv_header_and_shape() {
        let params = SystemParameters {
            mass: 1.0,
            stiffness: 100.0,
            initial_displacement: 1.0,
            initial_velocity: 0.0,
        };
        let time_samples = [0.0, 0.25, 0.5, 0.75];
        let traces =
            evaluate_sweep(&params, &time_samples, &DampingSweep::StandardCases).unwrap();

        let mut buffer = Vec::new();
        write_csv(&mut buffer, &time_samples, &traces).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "time_s,x_zeta_0.1,x_zeta_1,x_zeta_2");
        assert_eq!(lines.len(), 1 + time_samples.len());

        // First data row is t = 0, where every trace reproduces x0.
        let first_row: Vec<f64> = lines[1]
            .split(',')
            .map(|field| field.parse().unwrap())
            .collect();
        let tol = 1e-12;
        assert_relative_eq!(first_row[0], 0.0, epsilon = tol);
        for &value in &first_row[1..] {
            assert_relative_eq!(value, 1.0, epsilon = tol);
        }
    }

    #[test]
    #[should_panic(expected = "trace length mismatch")]
    fn test_csv_rejects_mismatched_trace() {
        let params = SystemParameters {
            mass: 1.0,
            stiffness: 100.0,
            initial_displacement: 1.0,
            initial_velocity: 0.0,
        };
        let trace = ResponseTrace {
            zeta: 0.5,
            result: evaluate(0.5, &params, &[0.0, 1.0]).unwrap(),
        };
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[0.0], &[trace]).unwrap();
    }
}
