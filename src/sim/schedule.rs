use serde::Deserialize;

use super::types::SimError;

/// One point of a current schedule: from `at_hours` onward, apply
/// `current_amps` until the next point takes over.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchedulePoint {
    /// Time offset in hours from the start of the run (>= 0).
    pub at_hours: f64,
    /// Applied current in amps (positive=charging, negative=discharging).
    pub current_amps: f64,
}

/// Piecewise-constant applied-current schedule.
///
/// Points are sorted by time once at construction; lookups resolve the
/// value at the largest key `<= t` (last value carried forward). Times
/// before the earliest point resolve to 0 A. The schedule is read-only
/// during simulation.
#[derive(Debug, Clone)]
pub struct CurrentSchedule {
    /// Points sorted ascending by `at_hours`, keys strictly increasing.
    points: Vec<SchedulePoint>,
}

impl CurrentSchedule {
    /// Creates a schedule from points in any order.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if the point list is empty,
    /// a time offset is negative or non-finite, a current is non-finite,
    /// or two points share the same time offset.
    pub fn new(mut points: Vec<SchedulePoint>) -> Result<Self, SimError> {
        if points.is_empty() {
            return Err(SimError::invalid(
                "schedule",
                "must contain at least one point",
            ));
        }
        for p in &points {
            if !p.at_hours.is_finite() || p.at_hours < 0.0 {
                return Err(SimError::invalid(
                    "schedule.at_hours",
                    format!("must be finite and >= 0, got {}", p.at_hours),
                ));
            }
            if !p.current_amps.is_finite() {
                return Err(SimError::invalid(
                    "schedule.current_amps",
                    "must be finite",
                ));
            }
        }

        points.sort_by(|a, b| a.at_hours.total_cmp(&b.at_hours));
        for pair in points.windows(2) {
            if pair[0].at_hours == pair[1].at_hours {
                return Err(SimError::invalid(
                    "schedule.at_hours",
                    format!("duplicate time offset {}", pair[0].at_hours),
                ));
            }
        }

        Ok(Self { points })
    }

    /// Returns the effective current at time `t_hours`.
    ///
    /// Binary search over the pre-sorted points; equivalent to a linear
    /// last-match-or-default scan over the original point list.
    pub fn current_amps_at(&self, t_hours: f64) -> f64 {
        let idx = self.points.partition_point(|p| p.at_hours <= t_hours);
        if idx == 0 {
            0.0
        } else {
            self.points[idx - 1].current_amps
        }
    }

    /// The sorted schedule points.
    pub fn points(&self) -> &[SchedulePoint] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(at_hours: f64, current_amps: f64) -> SchedulePoint {
        SchedulePoint {
            at_hours,
            current_amps,
        }
    }

    /// The reference lookup: scan the unsorted list, keep the last match.
    fn linear_scan(points: &[SchedulePoint], t: f64) -> f64 {
        let mut sorted: Vec<&SchedulePoint> = points.iter().collect();
        sorted.sort_by(|a, b| a.at_hours.total_cmp(&b.at_hours));
        let mut current = 0.0;
        for p in sorted {
            if t >= p.at_hours {
                current = p.current_amps;
            } else {
                break;
            }
        }
        current
    }

    #[test]
    fn empty_schedule_rejected() {
        assert!(CurrentSchedule::new(Vec::new()).is_err());
    }

    #[test]
    fn negative_time_rejected() {
        assert!(CurrentSchedule::new(vec![point(-1.0, 5.0)]).is_err());
    }

    #[test]
    fn duplicate_time_rejected() {
        let err = CurrentSchedule::new(vec![point(0.0, -10.0), point(0.0, 5.0)]);
        assert!(err.is_err());
    }

    #[test]
    fn non_finite_rejected() {
        assert!(CurrentSchedule::new(vec![point(f64::NAN, 5.0)]).is_err());
        assert!(CurrentSchedule::new(vec![point(0.0, f64::INFINITY)]).is_err());
    }

    #[test]
    fn step_function_carries_last_value_forward() {
        let sched =
            CurrentSchedule::new(vec![point(0.0, -10.0), point(5.0, 5.0)]).expect("valid schedule");
        assert_eq!(sched.current_amps_at(0.0), -10.0);
        assert_eq!(sched.current_amps_at(2.5), -10.0);
        assert_eq!(sched.current_amps_at(4.999), -10.0);
        assert_eq!(sched.current_amps_at(5.0), 5.0);
        assert_eq!(sched.current_amps_at(9.0), 5.0);
    }

    #[test]
    fn before_earliest_key_is_zero() {
        let sched = CurrentSchedule::new(vec![point(2.0, 8.0)]).expect("valid schedule");
        assert_eq!(sched.current_amps_at(0.0), 0.0);
        assert_eq!(sched.current_amps_at(1.999), 0.0);
        assert_eq!(sched.current_amps_at(2.0), 8.0);
    }

    #[test]
    fn unsorted_input_is_sorted_once() {
        let sched = CurrentSchedule::new(vec![point(5.0, 5.0), point(0.0, -10.0), point(2.0, 1.0)])
            .expect("valid schedule");
        let times: Vec<f64> = sched.points().iter().map(|p| p.at_hours).collect();
        assert_eq!(times, vec![0.0, 2.0, 5.0]);
        assert_eq!(sched.current_amps_at(1.0), -10.0);
        assert_eq!(sched.current_amps_at(3.0), 1.0);
    }

    #[test]
    fn binary_search_matches_linear_scan_reference() {
        let points = vec![
            point(7.25, -2.0),
            point(0.5, 12.0),
            point(3.0, 0.0),
            point(1.75, -6.5),
        ];
        let sched = CurrentSchedule::new(points.clone()).expect("valid schedule");
        let mut t = 0.0;
        while t <= 10.0 {
            assert_eq!(
                sched.current_amps_at(t),
                linear_scan(&points, t),
                "lookup mismatch at t={t}"
            );
            t += 0.05;
        }
    }
}
