//! Input-profile components for the longsim vehicle model.
//!
//! The vehicle model consumes a throttle command and a road-incline angle at
//! every step; these components supply them.
//! [`RampIncline`] maps the vehicle's position to a road angle, and
//! [`TrapezoidThrottle`] maps elapsed time to a throttle command.
//! Both are pure functions of their inputs and carry no mutable state.
//!
//! Driving the reference climb-then-release scenario:
//!
//! ```
//! use longsim_components::{RampIncline, TrapezoidThrottle};
//! use longsim_core::{Simulation, VehicleModel};
//!
//! let incline = RampIncline::default();
//! let throttle = TrapezoidThrottle::default();
//!
//! let mut sim = Simulation::new(VehicleModel::default());
//! sim.run(2000, |time, state| {
//!     (throttle.throttle_at(time), incline.angle_at(state.position))
//! })?;
//!
//! assert_eq!(sim.trajectory().samples().len(), 2001);
//! # Ok::<(), longsim_core::StepError>(())
//! ```

mod incline;
mod throttle;

pub use incline::{RampGeometryError, RampIncline, RampSegment};
pub use throttle::{ThrottleScheduleError, TrapezoidThrottle};
