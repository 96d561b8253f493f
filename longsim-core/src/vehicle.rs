mod parameters;
mod state;
mod torque_curve;

use thiserror::Error;
use uom::si::{
    f64::{Angle, Ratio},
    ratio::ratio,
    velocity::meter_per_second,
};

pub use parameters::Parameters;
pub use state::State;
pub use torque_curve::TorqueCurve;

/// A discrete-time model of a vehicle's longitudinal dynamics.
///
/// The model owns a set of fixed [`Parameters`] and the current dynamic
/// [`State`].
/// Each call to [`step()`](VehicleModel::step) advances the state by one
/// fixed [`SampleTime`](crate::SampleTime) using a first-order explicit
/// (forward Euler) scheme: the previous step's derivatives are integrated
/// first, then the derivatives are recomputed for the current inputs.
///
/// The model is deterministic: identical parameters and input sequences
/// produce identical state trajectories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleModel {
    parameters: Parameters,
    state: State,
}

/// Error returned when a step leaves the model's input domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StepError {
    /// The slip ratio divides by the forward velocity, so the model is
    /// undefined once the vehicle stops or rolls backward.
    ///
    /// The failed step leaves the model's state untouched.
    #[error(
        "slip ratio is undefined for forward velocity {velocity} m/s; \
         the model requires a strictly positive velocity"
    )]
    VelocityOutOfDomain { velocity: f64 },
}

impl VehicleModel {
    /// Creates a model with the given parameters and the default initial state.
    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self {
            parameters,
            state: State::default(),
        }
    }

    /// Creates a model with the given parameters and a specific initial state.
    ///
    /// Useful for resuming a simulation or probing the model from a known
    /// operating point.
    #[must_use]
    pub fn with_state(parameters: Parameters, state: State) -> Self {
        Self { parameters, state }
    }

    /// Returns the model's fixed parameters.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns a copy of the current dynamic state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Restores the default initial state without touching the parameters.
    pub fn reset(&mut self) {
        self.state = State::default();
    }

    /// Advances the model by one sample time.
    ///
    /// The update proceeds in a fixed order:
    ///
    /// 1. Integrate position, velocity, and engine speed using the
    ///    derivatives stored by the previous step.
    /// 2. Evaluate engine torque from the throttle command and engine speed.
    /// 3. Evaluate the load force opposing forward motion: aerodynamic drag,
    ///    rolling resistance, and the gravity component along the incline.
    /// 4. Recompute the engine angular acceleration.
    /// 5. Recompute the slip ratio from wheel and vehicle speed.
    /// 6. Evaluate the tire force, saturating at `max_tire_force` once the
    ///    slip ratio magnitude reaches one. The saturated branch applies the
    ///    maximum force without reapplying the slip sign; this matches the
    ///    governing model.
    /// 7. Recompute the forward acceleration.
    ///
    /// The throttle is expected in `[0, 1]` and the incline in radians, but
    /// neither input is clamped or validated; out-of-range values flow
    /// through the arithmetic and degrade gracefully.
    ///
    /// On success, the new state is committed and a copy is returned.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::VelocityOutOfDomain`] if the integrated forward
    /// velocity is not strictly positive (or not finite) when the slip ratio
    /// would be computed. The model's state is left unchanged in that case.
    pub fn step(&mut self, throttle: Ratio, incline: Angle) -> Result<State, StepError> {
        let p = &self.parameters;
        let dt = p.sample_time.into_inner();
        let mut next = self.state;

        // Integrate forward using the previous step's derivatives.
        next.position += next.velocity * dt;
        next.velocity += next.acceleration * dt;
        next.engine_speed += next.engine_acceleration * dt;

        let engine_torque = p.torque_curve.torque_at(throttle, next.engine_speed);

        let load_force = p.drag_coefficient * next.velocity * next.velocity
            + p.rolling_coefficient * next.velocity
            + p.mass * p.gravity * incline.sin();

        next.engine_acceleration =
            (engine_torque - p.gear_ratio * p.wheel_radius * load_force) / p.engine_inertia;

        let velocity = next.velocity.get::<meter_per_second>();
        if !velocity.is_finite() || velocity <= 0.0 {
            return Err(StepError::VelocityOutOfDomain { velocity });
        }

        let wheel_speed = p.gear_ratio * next.engine_speed;
        let slip_ratio = (wheel_speed * p.wheel_radius - next.velocity) / next.velocity;

        let tire_force = if slip_ratio.abs() < Ratio::new::<ratio>(1.0) {
            p.tire_stiffness * slip_ratio
        } else {
            p.max_tire_force
        };

        next.acceleration = (tire_force - load_force) / p.mass;

        self.state = next;
        Ok(next)
    }
}

impl Default for VehicleModel {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}
