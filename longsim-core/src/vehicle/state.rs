use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Acceleration, Length, Velocity},
    velocity::meter_per_second,
};

use crate::quantities::{self, EngineAcceleration, EngineSpeed};

/// The vehicle's time-evolving dynamic state.
///
/// `position`, `velocity`, and `engine_speed` are the integrated states.
/// `acceleration` and `engine_acceleration` are the derivatives computed by
/// the most recent step; the next step integrates them before recomputing.
///
/// The slip-ratio computation divides by `velocity`, so the model is only
/// defined while the forward velocity stays strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Longitudinal distance traveled.
    pub position: Length,
    /// Forward speed.
    pub velocity: Velocity,
    /// Current forward acceleration.
    pub acceleration: Acceleration,
    /// Engine crankshaft angular velocity.
    pub engine_speed: EngineSpeed,
    /// Engine crankshaft angular acceleration.
    pub engine_acceleration: EngineAcceleration,
}

impl Default for State {
    /// The reference initial state: at the origin, rolling forward at 5 m/s
    /// with the engine turning at 100 rad/s and zero stored derivatives.
    fn default() -> Self {
        Self {
            position: Length::default(),
            velocity: Velocity::new::<meter_per_second>(5.0),
            acceleration: Acceleration::default(),
            engine_speed: quantities::engine_speed(100.0),
            engine_acceleration: EngineAcceleration::default(),
        }
    }
}
