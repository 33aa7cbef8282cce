//! Post-hoc run summary computed from a complete trace.

use std::fmt;

use super::types::Sample;

/// Aggregate figures derived from a finished simulation run.
///
/// Computed after the fact from the sample vector so the report always
/// agrees with the exported trace.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Configured state of charge at the start of the run (percent).
    pub initial_soc_percent: f64,
    /// State of charge at the final sample (percent).
    pub final_soc_percent: f64,
    /// Terminal voltage at the final sample (volts).
    pub final_terminal_volts: f64,
    /// Lowest SoC reached (percent).
    pub min_soc_percent: f64,
    /// Highest SoC reached (percent).
    pub max_soc_percent: f64,
    /// Total charge moved through the cell (Ah, sum of |current| * dt).
    pub throughput_ah: f64,
    /// Equivalent full cycles (throughput / 2 * capacity).
    pub equivalent_full_cycles: f64,
    /// Number of samples sitting at the 0% or 100% clamp.
    pub saturated_samples: usize,
}

impl RunSummary {
    /// Computes the summary from the complete trace.
    ///
    /// # Arguments
    ///
    /// * `trace` - Complete ordered sample vector
    /// * `initial_soc_percent` - Configured starting SoC (the first sample
    ///   already reflects one step's delta, so it cannot be recovered from
    ///   the trace itself)
    /// * `dt_hours` - Timestep duration in hours
    /// * `capacity_ah` - Cell capacity for the cycle calculation
    pub fn from_samples(
        trace: &[Sample],
        initial_soc_percent: f64,
        dt_hours: f64,
        capacity_ah: f64,
    ) -> Self {
        if trace.is_empty() {
            return Self {
                initial_soc_percent,
                final_soc_percent: initial_soc_percent,
                final_terminal_volts: 0.0,
                min_soc_percent: initial_soc_percent,
                max_soc_percent: initial_soc_percent,
                throughput_ah: 0.0,
                equivalent_full_cycles: 0.0,
                saturated_samples: 0,
            };
        }

        let mut min_soc = f64::INFINITY;
        let mut max_soc = f64::NEG_INFINITY;
        let mut throughput = 0.0_f64;
        let mut saturated = 0_usize;

        for s in trace {
            min_soc = min_soc.min(s.soc_percent);
            max_soc = max_soc.max(s.soc_percent);
            throughput += s.current_amps.abs() * dt_hours;
            if s.soc_percent <= 0.0 || s.soc_percent >= 100.0 {
                saturated += 1;
            }
        }

        let cycles = if capacity_ah > 0.0 {
            throughput / (2.0 * capacity_ah)
        } else {
            0.0
        };

        let last = &trace[trace.len() - 1];
        Self {
            initial_soc_percent,
            final_soc_percent: last.soc_percent,
            final_terminal_volts: last.terminal_volts,
            min_soc_percent: min_soc,
            max_soc_percent: max_soc,
            throughput_ah: throughput,
            equivalent_full_cycles: cycles,
            saturated_samples: saturated,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Run Summary ---")?;
        writeln!(f, "Initial SoC:            {:.2} %", self.initial_soc_percent)?;
        writeln!(f, "Final SoC:              {:.2} %", self.final_soc_percent)?;
        writeln!(f, "Final terminal voltage: {:.2} V", self.final_terminal_volts)?;
        writeln!(
            f,
            "SoC range:              {:.2} % to {:.2} %",
            self.min_soc_percent, self.max_soc_percent
        )?;
        writeln!(
            f,
            "Charge throughput:      {:.2} Ah ({:.2} equiv. cycles)",
            self.throughput_ah, self.equivalent_full_cycles
        )?;
        write!(f, "Saturated samples:      {}", self.saturated_samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sample(step: usize, soc: f64, current: f64) -> Sample {
        Sample {
            step,
            time_hours: step as f64,
            soc_percent: soc,
            ocv_volts: 3.0 + 1.2 * soc / 100.0,
            terminal_volts: 3.0 + 1.2 * soc / 100.0 - current * 0.005,
            current_amps: current,
        }
    }

    #[test]
    fn final_values_come_from_last_sample() {
        let trace = vec![
            make_sample(0, 79.0, -10.0),
            make_sample(1, 78.0, -10.0),
            make_sample(2, 78.5, 5.0),
        ];
        let summary = RunSummary::from_samples(&trace, 80.0, 1.0, 100.0);
        assert_eq!(summary.initial_soc_percent, 80.0);
        assert_eq!(summary.final_soc_percent, 78.5);
        assert_eq!(summary.final_terminal_volts, trace[2].terminal_volts);
        assert_eq!(summary.min_soc_percent, 78.0);
        assert_eq!(summary.max_soc_percent, 79.0);
    }

    #[test]
    fn throughput_sums_absolute_current() {
        // |−10| + |−10| + |5| = 25 A over 1 h steps = 25 Ah
        let trace = vec![
            make_sample(0, 79.0, -10.0),
            make_sample(1, 78.0, -10.0),
            make_sample(2, 78.5, 5.0),
        ];
        let summary = RunSummary::from_samples(&trace, 80.0, 1.0, 100.0);
        assert!((summary.throughput_ah - 25.0).abs() < 1e-12);
        assert!((summary.equivalent_full_cycles - 25.0 / 200.0).abs() < 1e-12);
    }

    #[test]
    fn saturated_samples_counted_at_both_clamps() {
        let trace = vec![
            make_sample(0, 0.0, -10.0),
            make_sample(1, 50.0, 5.0),
            make_sample(2, 100.0, 5.0),
            make_sample(3, 100.0, 5.0),
        ];
        let summary = RunSummary::from_samples(&trace, 50.0, 1.0, 100.0);
        assert_eq!(summary.saturated_samples, 3);
    }

    #[test]
    fn empty_trace() {
        let summary = RunSummary::from_samples(&[], 80.0, 1.0, 100.0);
        assert_eq!(summary.final_soc_percent, 80.0);
        assert_eq!(summary.throughput_ah, 0.0);
        assert_eq!(summary.saturated_samples, 0);
    }

    #[test]
    fn display_does_not_panic() {
        let trace = vec![make_sample(0, 79.0, -10.0)];
        let summary = RunSummary::from_samples(&trace, 80.0, 1.0, 100.0);
        let s = format!("{summary}");
        assert!(s.contains("Final SoC"));
    }
}
