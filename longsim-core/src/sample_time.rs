use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::{
    si::{f64::Time, time},
    Conversion,
};

/// A unit-safe, strictly positive fixed integration step.
///
/// `SampleTime` wraps a [`Time`] value while enforcing that the step is
/// strictly greater than zero and finite.
/// The vehicle model owns its `SampleTime` as a constructor parameter, so the
/// stepping logic never reads the step size from anywhere else.
///
/// # Construction
///
/// From a concrete [`uom`] unit:
///
/// ```
/// use longsim_core::SampleTime;
/// use uom::si::time::second;
///
/// let dt = SampleTime::new::<second>(0.01).unwrap();
/// ```
///
/// Or from an existing [`Time`] value:
///
/// ```
/// use longsim_core::SampleTime;
/// use uom::si::{f64::Time, time::millisecond};
///
/// let dt = SampleTime::try_from(Time::new::<millisecond>(10.0)).unwrap();
/// ```
///
/// Zero, negative, or non-finite values are rejected with a
/// [`SampleTimeError`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Time", into = "Time")]
pub struct SampleTime(Time);

/// Error type returned when constructing an invalid [`SampleTime`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SampleTimeError {
    #[error("sample time must be greater than zero, got {0} s")]
    NotPositive(f64),
    #[error("sample time must be finite, got {0} s")]
    NotFinite(f64),
}

impl SampleTime {
    /// Constructs a `SampleTime` from a numeric value and unit.
    ///
    /// # Errors
    ///
    /// Returns [`SampleTimeError::NotPositive`] if `value` is zero or
    /// negative, or [`SampleTimeError::NotFinite`] if it is NaN or infinite.
    pub fn new<U>(value: f64) -> Result<Self, SampleTimeError>
    where
        U: time::Unit + Conversion<f64, T = f64>,
    {
        Self::from_time(Time::new::<U>(value))
    }

    /// Constructs a `SampleTime` from an existing [`Time`] value.
    ///
    /// # Errors
    ///
    /// Returns [`SampleTimeError::NotPositive`] if the time is zero or
    /// negative, or [`SampleTimeError::NotFinite`] if it is NaN or infinite.
    pub fn from_time(time: Time) -> Result<Self, SampleTimeError> {
        let seconds = time.get::<time::second>();
        if !seconds.is_finite() {
            return Err(SampleTimeError::NotFinite(seconds));
        }
        if seconds <= 0.0 {
            return Err(SampleTimeError::NotPositive(seconds));
        }
        Ok(Self(time))
    }

    /// Consumes the `SampleTime` and returns the underlying [`Time`] value.
    #[must_use]
    pub fn into_inner(self) -> Time {
        self.0
    }
}

impl TryFrom<Time> for SampleTime {
    type Error = SampleTimeError;
    fn try_from(t: Time) -> Result<Self, Self::Error> {
        Self::from_time(t)
    }
}

impl From<SampleTime> for Time {
    fn from(dt: SampleTime) -> Self {
        dt.0
    }
}

/// Dereferences to the inner [`Time`] value.
impl Deref for SampleTime {
    type Target = Time;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for SampleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.get::<time::second>();
        write!(f, "{s} s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::{millisecond, second};

    #[test]
    fn constructs_from_value_and_unit() {
        let dt = SampleTime::new::<millisecond>(10.0).unwrap();
        assert_relative_eq!(dt.into_inner().get::<second>(), 0.01);
    }

    #[test]
    fn zero_sample_time_fails() {
        assert_eq!(
            SampleTime::new::<second>(0.0),
            Err(SampleTimeError::NotPositive(0.0))
        );
    }

    #[test]
    fn negative_sample_time_fails() {
        assert_eq!(
            SampleTime::new::<second>(-0.01),
            Err(SampleTimeError::NotPositive(-0.01))
        );
    }

    #[test]
    fn non_finite_sample_time_fails() {
        assert!(matches!(
            SampleTime::new::<second>(f64::NAN),
            Err(SampleTimeError::NotFinite(_))
        ));
    }

    #[test]
    fn displays_in_seconds() {
        let dt = SampleTime::new::<second>(0.01).unwrap();
        assert_eq!(dt.to_string(), "0.01 s");
    }
}
