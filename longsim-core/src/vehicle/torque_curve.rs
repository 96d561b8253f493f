use serde::{Deserialize, Serialize};
use uom::si::f64::Ratio;

use crate::quantities::{
    self, EngineSpeed, EngineTorque, TorquePerSpeed, TorquePerSpeedSquared,
};

/// A quadratic throttle-to-torque map.
///
/// Engine torque is modeled as the throttle command scaling a quadratic
/// function of engine speed:
///
/// ```text
///   torque = throttle · (constant + linear·ω + quadratic·ω²)
/// ```
///
/// The default curve peaks near an engine speed of 250 rad/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorqueCurve {
    /// Torque at zero engine speed and full throttle (N·m).
    pub constant: EngineTorque,
    /// Linear coefficient of the curve (N·m·s).
    pub linear: TorquePerSpeed,
    /// Quadratic coefficient of the curve (N·m·s²).
    pub quadratic: TorquePerSpeedSquared,
}

impl TorqueCurve {
    /// Evaluates the curve at the given throttle command and engine speed.
    ///
    /// The throttle is expected in `[0, 1]` but is deliberately not clamped:
    /// out-of-range commands simply scale the curve beyond its physical
    /// range.
    #[must_use]
    pub fn torque_at(&self, throttle: Ratio, engine_speed: EngineSpeed) -> EngineTorque {
        throttle
            * (self.constant
                + self.linear * engine_speed
                + self.quadratic * engine_speed * engine_speed)
    }
}

impl Default for TorqueCurve {
    fn default() -> Self {
        Self {
            constant: quantities::engine_torque(400.0),
            linear: quantities::torque_per_speed(0.1),
            quadratic: quantities::torque_per_speed_squared(-0.0002),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::ratio::ratio;

    #[test]
    fn evaluates_the_default_curve() {
        let curve = TorqueCurve::default();
        let torque = curve.torque_at(Ratio::new::<ratio>(0.2), quantities::engine_speed(100.0));
        assert_relative_eq!(torque.value, 0.2 * (400.0 + 10.0 - 2.0), epsilon = 1e-9);
    }

    #[test]
    fn zero_throttle_produces_zero_torque() {
        let curve = TorqueCurve::default();
        let torque = curve.torque_at(Ratio::new::<ratio>(0.0), quantities::engine_speed(250.0));
        assert_relative_eq!(torque.value, 0.0);
    }

    #[test]
    fn out_of_range_throttle_scales_the_curve() {
        let curve = TorqueCurve::default();
        let torque = curve.torque_at(Ratio::new::<ratio>(1.5), quantities::engine_speed(100.0));
        assert_relative_eq!(torque.value, 1.5 * 408.0, epsilon = 1e-9);
    }
}
