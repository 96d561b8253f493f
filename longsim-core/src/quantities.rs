//! Physical quantity aliases for the vehicle model.
//!
//! Most of the model's values map onto named [`uom`] quantities (`Length`,
//! `Velocity`, `Mass`, `Force`, ...).
//! The remaining coefficients have dimensions without a named quantity, so
//! this module defines them as `Quantity` type aliases.
//!
//! Angles are treated as dimensionless, so engine speed carries the
//! dimension `s⁻¹` (rad/s) and engine acceleration `s⁻²` (rad/s²).
//! This keeps arithmetic like `engine_speed * wheel_radius` composable
//! across quantities.

use uom::{
    si::{
        f64::{Force, Length, Ratio, Time, Velocity},
        force::newton,
        length::meter,
        ratio::ratio,
        time::second,
        velocity::meter_per_second,
        ISQ, Quantity, SI,
    },
    typenum::{N1, N2, P1, P2, Z0},
};

/// Engine crankshaft angular velocity (rad/s, or s⁻¹).
pub type EngineSpeed = Quantity<ISQ<Z0, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Engine crankshaft angular acceleration (rad/s², or s⁻²).
pub type EngineAcceleration = Quantity<ISQ<Z0, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Engine torque (N·m, or kg·m²/s²).
pub type EngineTorque = Quantity<ISQ<P2, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Lumped engine and drivetrain rotational inertia (kg·m²).
pub type EngineInertia = Quantity<ISQ<P2, P1, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Torque per unit engine speed (N·m·s), the linear torque-curve coefficient.
pub type TorquePerSpeed = Quantity<ISQ<P2, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Torque per unit engine speed squared (N·m·s²), the quadratic
/// torque-curve coefficient.
pub type TorquePerSpeedSquared = Quantity<ISQ<P2, P1, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Lumped aerodynamic drag coefficient (N·s²/m², or kg/m).
///
/// Multiplied by velocity squared to yield a drag force.
pub type DragCoefficient = Quantity<ISQ<N1, P1, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Linearized rolling-resistance coefficient (N·s/m, or kg/s).
///
/// Multiplied by velocity to yield a rolling-resistance force.
/// The governing model scales this with velocity rather than normal force.
pub type RollingCoefficient = Quantity<ISQ<Z0, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates an [`EngineSpeed`] from a raw SI value (rad/s).
#[must_use]
pub fn engine_speed(value: f64) -> EngineSpeed {
    Ratio::new::<ratio>(value) / Time::new::<second>(1.0)
}

/// Creates an [`EngineAcceleration`] from a raw SI value (rad/s²).
#[must_use]
pub fn engine_acceleration(value: f64) -> EngineAcceleration {
    engine_speed(value) / Time::new::<second>(1.0)
}

/// Creates an [`EngineTorque`] from a raw SI value (N·m).
#[must_use]
pub fn engine_torque(value: f64) -> EngineTorque {
    Force::new::<newton>(value) * Length::new::<meter>(1.0)
}

/// Creates an [`EngineInertia`] from a raw SI value (kg·m²).
#[must_use]
pub fn engine_inertia(value: f64) -> EngineInertia {
    engine_torque(value) * Time::new::<second>(1.0) * Time::new::<second>(1.0)
}

/// Creates a [`TorquePerSpeed`] from a raw SI value (N·m·s).
#[must_use]
pub fn torque_per_speed(value: f64) -> TorquePerSpeed {
    engine_torque(value) * Time::new::<second>(1.0)
}

/// Creates a [`TorquePerSpeedSquared`] from a raw SI value (N·m·s²).
#[must_use]
pub fn torque_per_speed_squared(value: f64) -> TorquePerSpeedSquared {
    torque_per_speed(value) * Time::new::<second>(1.0)
}

/// Creates a [`DragCoefficient`] from a raw SI value (N·s²/m²).
#[must_use]
pub fn drag_coefficient(value: f64) -> DragCoefficient {
    let unit_velocity = Velocity::new::<meter_per_second>(1.0);
    Force::new::<newton>(value) / (unit_velocity * unit_velocity)
}

/// Creates a [`RollingCoefficient`] from a raw SI value (N·s/m).
#[must_use]
pub fn rolling_coefficient(value: f64) -> RollingCoefficient {
    Force::new::<newton>(value) / Velocity::new::<meter_per_second>(1.0)
}
