use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    f64::{Angle, Length},
    length::meter,
};

/// One constant-grade ramp segment, defined by its rise over its run.
///
/// The segment's angle is `atan(rise / run)` and its extent along the road
/// surface is `run / cos(angle)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampSegment {
    rise: Length,
    run: Length,
}

/// Error returned when constructing a ramp from invalid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RampGeometryError {
    #[error("ramp run must be strictly positive and finite, got {0} m")]
    InvalidRun(f64),
    #[error("ramp rise must be finite, got {0} m")]
    InvalidRise(f64),
}

impl RampSegment {
    /// Creates a segment from its rise and horizontal run.
    ///
    /// A negative rise describes a downhill segment.
    ///
    /// # Errors
    ///
    /// Returns a [`RampGeometryError`] if the run is not strictly positive
    /// or either length is not finite.
    pub fn new(rise: Length, run: Length) -> Result<Self, RampGeometryError> {
        let rise_m = rise.get::<meter>();
        let run_m = run.get::<meter>();
        if !run_m.is_finite() || run_m <= 0.0 {
            return Err(RampGeometryError::InvalidRun(run_m));
        }
        if !rise_m.is_finite() {
            return Err(RampGeometryError::InvalidRise(rise_m));
        }
        Ok(Self { rise, run })
    }

    /// The road angle of this segment.
    #[must_use]
    pub fn angle(&self) -> Angle {
        (self.rise / self.run).atan()
    }

    /// The segment's extent measured along the road surface.
    #[must_use]
    pub fn along_road_length(&self) -> Length {
        self.run / self.angle().cos()
    }
}

/// A three-segment piecewise-constant incline profile.
///
/// Two ramp segments are followed by flat road.
/// The profile is a pure function of the distance traveled along the road:
/// breakpoints are the accumulated along-road lengths of the segments, so
/// the angle can be looked up directly from the vehicle's position.
///
/// The default geometry climbs 3 m over a 60 m run, then 9 m over a 90 m
/// run, then levels out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampIncline {
    first_angle: Angle,
    second_angle: Angle,
    first_end: Length,
    second_end: Length,
}

impl RampIncline {
    /// Creates a profile from two ramp segments.
    #[must_use]
    pub fn new(first: RampSegment, second: RampSegment) -> Self {
        let first_end = first.along_road_length();
        Self {
            first_angle: first.angle(),
            second_angle: second.angle(),
            first_end,
            second_end: first_end + second.along_road_length(),
        }
    }

    /// Returns the road angle at the given position along the road.
    #[must_use]
    pub fn angle_at(&self, position: Length) -> Angle {
        if position < self.first_end {
            self.first_angle
        } else if position < self.second_end {
            self.second_angle
        } else {
            Angle::default()
        }
    }

    /// The along-road distance where the first segment ends.
    #[must_use]
    pub fn first_ramp_end(&self) -> Length {
        self.first_end
    }

    /// The along-road distance where the second segment ends and the road
    /// flattens out.
    #[must_use]
    pub fn second_ramp_end(&self) -> Length {
        self.second_end
    }
}

impl Default for RampIncline {
    fn default() -> Self {
        let meters = Length::new::<meter>;
        Self::new(
            RampSegment::new(meters(3.0), meters(60.0))
                .expect("the default first segment is valid"),
            RampSegment::new(meters(9.0), meters(90.0))
                .expect("the default second segment is valid"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::angle::radian;

    #[test]
    fn segment_angle_and_length_follow_from_the_geometry() {
        let meters = Length::new::<meter>;
        let segment = RampSegment::new(meters(3.0), meters(60.0)).unwrap();

        let angle = (3.0_f64 / 60.0).atan();
        assert_relative_eq!(segment.angle().get::<radian>(), angle);
        assert_relative_eq!(
            segment.along_road_length().get::<meter>(),
            60.0 / angle.cos()
        );
    }

    #[test]
    fn non_positive_run_is_rejected() {
        let meters = Length::new::<meter>;
        assert_eq!(
            RampSegment::new(meters(3.0), meters(0.0)),
            Err(RampGeometryError::InvalidRun(0.0))
        );
        assert_eq!(
            RampSegment::new(meters(3.0), meters(-60.0)),
            Err(RampGeometryError::InvalidRun(-60.0))
        );
    }

    #[test]
    fn default_profile_breakpoints_match_the_reference_geometry() {
        let profile = RampIncline::default();
        assert_relative_eq!(
            profile.first_ramp_end().get::<meter>(),
            60.0 / (3.0_f64 / 60.0).atan().cos()
        );
        assert_relative_eq!(
            profile.second_ramp_end().get::<meter>(),
            60.0 / (3.0_f64 / 60.0).atan().cos() + 90.0 / (9.0_f64 / 90.0).atan().cos()
        );
    }

    #[test]
    fn angle_lookup_is_piecewise_constant_in_position() {
        let profile = RampIncline::default();
        let meters = Length::new::<meter>;

        let first = (3.0_f64 / 60.0).atan();
        let second = (9.0_f64 / 90.0).atan();

        assert_relative_eq!(profile.angle_at(meters(0.0)).get::<radian>(), first);
        assert_relative_eq!(profile.angle_at(meters(60.0)).get::<radian>(), first);
        assert_relative_eq!(profile.angle_at(meters(100.0)).get::<radian>(), second);
        assert_relative_eq!(profile.angle_at(meters(151.0)).get::<radian>(), 0.0);
        assert_relative_eq!(profile.angle_at(meters(1000.0)).get::<radian>(), 0.0);
    }
}
