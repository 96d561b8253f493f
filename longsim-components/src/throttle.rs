use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    f64::{Ratio, Time},
    ratio::ratio,
    time::second,
};

/// A trapezoidal throttle schedule: ramp up, hold, ramp down.
///
/// The schedule is a pure function of elapsed time:
///
/// - before time zero the throttle holds its `initial` value;
/// - over `[0, ramp_up_end)` it ramps linearly from `initial` to `peak`;
/// - over `[ramp_up_end, hold_end)` it holds `peak`;
/// - over `[hold_end, horizon)` it ramps linearly down to zero;
/// - from `horizon` on it stays at zero.
///
/// The default schedule ramps from 0.2 to 0.5 over 5 s, holds to 15 s, and
/// releases to zero by 20 s, the climb-then-release reference scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrapezoidThrottle {
    initial: Ratio,
    peak: Ratio,
    ramp_up_end: Time,
    hold_end: Time,
    horizon: Time,
}

/// Error returned when constructing an invalid [`TrapezoidThrottle`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThrottleScheduleError {
    #[error("throttle values must lie in [0, 1], got {0}")]
    ThrottleOutOfRange(f64),
    #[error(
        "schedule breakpoints must satisfy 0 < ramp-up end <= hold end <= horizon, \
         got {ramp_up_end} s, {hold_end} s, {horizon} s"
    )]
    InvalidBreakpoints {
        ramp_up_end: f64,
        hold_end: f64,
        horizon: f64,
    },
}

impl TrapezoidThrottle {
    /// Creates a schedule from its throttle levels and breakpoints.
    ///
    /// # Errors
    ///
    /// Returns a [`ThrottleScheduleError`] if either throttle value lies
    /// outside `[0, 1]` or the breakpoints are not finite and ordered as
    /// `0 < ramp_up_end <= hold_end <= horizon`.
    pub fn new(
        initial: Ratio,
        peak: Ratio,
        ramp_up_end: Time,
        hold_end: Time,
        horizon: Time,
    ) -> Result<Self, ThrottleScheduleError> {
        for value in [initial.get::<ratio>(), peak.get::<ratio>()] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ThrottleScheduleError::ThrottleOutOfRange(value));
            }
        }

        let up = ramp_up_end.get::<second>();
        let hold = hold_end.get::<second>();
        let end = horizon.get::<second>();
        let ordered = up > 0.0 && up <= hold && hold <= end;
        if !end.is_finite() || !ordered {
            return Err(ThrottleScheduleError::InvalidBreakpoints {
                ramp_up_end: up,
                hold_end: hold,
                horizon: end,
            });
        }

        Ok(Self {
            initial,
            peak,
            ramp_up_end,
            hold_end,
            horizon,
        })
    }

    /// Returns the throttle command at the given elapsed time.
    #[must_use]
    pub fn throttle_at(&self, time: Time) -> Ratio {
        if time < Time::default() {
            self.initial
        } else if time < self.ramp_up_end {
            self.initial + (self.peak - self.initial) * (time / self.ramp_up_end)
        } else if time < self.hold_end {
            self.peak
        } else if time < self.horizon {
            self.peak * ((self.horizon - time) / (self.horizon - self.hold_end))
        } else {
            Ratio::default()
        }
    }

    /// The time at which the throttle stops ramping up and begins to hold.
    #[must_use]
    pub fn ramp_up_end(&self) -> Time {
        self.ramp_up_end
    }

    /// The time at which the throttle begins to release.
    #[must_use]
    pub fn hold_end(&self) -> Time {
        self.hold_end
    }

    /// The time at which the throttle reaches zero.
    #[must_use]
    pub fn horizon(&self) -> Time {
        self.horizon
    }
}

impl Default for TrapezoidThrottle {
    fn default() -> Self {
        let seconds = Time::new::<second>;
        Self::new(
            Ratio::new::<ratio>(0.2),
            Ratio::new::<ratio>(0.5),
            seconds(5.0),
            seconds(15.0),
            seconds(20.0),
        )
        .expect("the default schedule is valid")
    }
}
