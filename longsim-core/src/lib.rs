//! A discrete-time forward simulation of a vehicle's longitudinal dynamics.
//!
//! Given a throttle command and a road-incline angle at each time step, the
//! [`VehicleModel`] integrates engine speed, vehicle velocity, and vehicle
//! position forward in time with a fixed-step explicit (forward Euler)
//! scheme.
//! It is a reusable simulation primitive for testing control strategies,
//! such as throttle or cruise controllers, against a simplified but
//! physically motivated car model.
//!
//! The [`Simulation`] driver owns a model and records a [`Trajectory`] of
//! state samples as the caller supplies inputs step by step:
//!
//! ```
//! use longsim_core::{Simulation, VehicleModel};
//! use uom::si::{angle::radian, f64::{Angle, Ratio}, ratio::ratio};
//!
//! let mut sim = Simulation::new(VehicleModel::default());
//!
//! // Hold 20% throttle on flat road for one simulated second.
//! sim.run(100, |_, _| {
//!     (Ratio::new::<ratio>(0.2), Angle::new::<radian>(0.0))
//! })?;
//!
//! let last = sim.trajectory().last();
//! assert!(last.state.velocity > longsim_core::State::default().velocity);
//! # Ok::<(), longsim_core::StepError>(())
//! ```

pub mod quantities;

mod sample_time;
mod simulation;
mod vehicle;

pub use sample_time::{SampleTime, SampleTimeError};
pub use simulation::{Sample, Simulation, Trajectory};
pub use vehicle::{Parameters, State, StepError, TorqueCurve, VehicleModel};
