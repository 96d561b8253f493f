use serde::{Deserialize, Serialize};
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Force, Length, Mass, Ratio, Time},
    force::newton,
    length::meter,
    mass::kilogram,
    ratio::ratio,
    time::second,
};

use crate::{
    quantities::{self, DragCoefficient, EngineInertia, RollingCoefficient},
    SampleTime, TorqueCurve,
};

/// Fixed physical parameters of the vehicle.
///
/// Parameters are set once at construction and never mutated by the model;
/// only the dynamic [`State`](crate::State) evolves over a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Throttle-to-torque map for the engine.
    pub torque_curve: TorqueCurve,
    /// Engine-to-wheel speed ratio.
    pub gear_ratio: Ratio,
    /// Effective tire radius.
    pub wheel_radius: Length,
    /// Lumped engine and drivetrain rotational inertia.
    pub engine_inertia: EngineInertia,
    /// Vehicle mass.
    pub mass: Mass,
    /// Gravitational acceleration.
    pub gravity: Acceleration,
    /// Lumped aerodynamic drag coefficient.
    pub drag_coefficient: DragCoefficient,
    /// Linearized rolling-resistance coefficient.
    ///
    /// The governing model scales this with velocity, not with normal force.
    pub rolling_coefficient: RollingCoefficient,
    /// Linear tire force per unit slip ratio, below the slip threshold.
    pub tire_stiffness: Force,
    /// Tire force applied once the slip ratio saturates.
    pub max_tire_force: Force,
    /// Fixed integration step.
    pub sample_time: SampleTime,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            torque_curve: TorqueCurve::default(),
            gear_ratio: Ratio::new::<ratio>(0.35),
            wheel_radius: Length::new::<meter>(0.3),
            engine_inertia: quantities::engine_inertia(10.0),
            mass: Mass::new::<kilogram>(2000.0),
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
            drag_coefficient: quantities::drag_coefficient(1.36),
            rolling_coefficient: quantities::rolling_coefficient(0.01),
            tire_stiffness: Force::new::<newton>(10_000.0),
            max_tire_force: Force::new::<newton>(10_000.0),
            sample_time: SampleTime::from_time(Time::new::<second>(0.01))
                .expect("the default sample time is strictly positive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_parameters_match_the_reference_vehicle() {
        let parameters = Parameters::default();
        assert_relative_eq!(parameters.gear_ratio.get::<ratio>(), 0.35);
        assert_relative_eq!(parameters.wheel_radius.get::<meter>(), 0.3);
        assert_relative_eq!(parameters.mass.get::<kilogram>(), 2000.0);
        assert_relative_eq!(parameters.tire_stiffness.get::<newton>(), 10_000.0);
        assert_relative_eq!(parameters.sample_time.get::<second>(), 0.01);
    }
}
