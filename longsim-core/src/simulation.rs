use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Angle, Ratio, Time},
    length::meter,
    time::second,
};

use crate::{State, StepError, VehicleModel};

/// A snapshot of the vehicle's state at a single point in simulated time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: Time,
    pub state: State,
}

/// The recorded time evolution of a simulation.
///
/// A `Trajectory` always holds at least one sample: the state at time zero,
/// recorded when the simulation is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    fn with_initial(state: State) -> Self {
        Self {
            samples: vec![Sample {
                time: Time::default(),
                state,
            }],
        }
    }

    /// Returns all recorded samples in chronological order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the most recent sample.
    ///
    /// # Panics
    ///
    /// Panics if the trajectory is empty, which is impossible for a
    /// trajectory produced by a [`Simulation`].
    #[must_use]
    pub fn last(&self) -> &Sample {
        self.samples
            .last()
            .expect("a trajectory always holds the initial sample")
    }

    /// Writes the `time, position` series to the given writer.
    ///
    /// Each sample produces one comma-space delimited row of elapsed time in
    /// seconds and position in meters, matching the persisted artifact of
    /// the reference scenario.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn write_positions<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for sample in &self.samples {
            writeln!(
                writer,
                "{}, {}",
                sample.time.get::<second>(),
                sample.state.position.get::<meter>()
            )?;
        }
        Ok(())
    }
}

/// Drives a [`VehicleModel`] forward in time while recording its trajectory.
///
/// The simulation owns the model and a [`Trajectory`] of samples.
/// Creating a simulation records the initial state at time zero; each call
/// to [`step()`](Simulation::step) advances the model by one sample time and
/// appends the resulting sample.
///
/// ```
/// use longsim_core::{Simulation, VehicleModel};
/// use uom::si::{angle::radian, f64::{Angle, Ratio}, ratio::ratio};
///
/// let mut sim = Simulation::new(VehicleModel::default());
/// sim.run(100, |_, _| {
///     (Ratio::new::<ratio>(0.2), Angle::new::<radian>(0.0))
/// })?;
///
/// assert_eq!(sim.trajectory().samples().len(), 101);
/// # Ok::<(), longsim_core::StepError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    model: VehicleModel,
    elapsed: Time,
    trajectory: Trajectory,
}

impl Simulation {
    /// Creates a simulation and records the model's state at time zero.
    #[must_use]
    pub fn new(model: VehicleModel) -> Self {
        let trajectory = Trajectory::with_initial(model.state());
        Self {
            model,
            elapsed: Time::default(),
            trajectory,
        }
    }

    /// Advances the simulation by one sample time and records the result.
    ///
    /// # Errors
    ///
    /// Propagates a [`StepError`] from the model; the failed step records
    /// nothing.
    pub fn step(&mut self, throttle: Ratio, incline: Angle) -> Result<&Sample, StepError> {
        let state = self.model.step(throttle, incline)?;
        self.elapsed += self.model.parameters().sample_time.into_inner();
        self.trajectory.samples.push(Sample {
            time: self.elapsed,
            state,
        });
        Ok(self.trajectory.last())
    }

    /// Takes `steps` simulation steps, asking `inputs` for the throttle and
    /// incline before each one.
    ///
    /// The closure receives the current elapsed time and state, so inputs
    /// may follow a time schedule or depend on the vehicle's position.
    ///
    /// # Errors
    ///
    /// Stops at the first failing step and propagates its [`StepError`].
    pub fn run<F>(&mut self, steps: usize, mut inputs: F) -> Result<(), StepError>
    where
        F: FnMut(Time, &State) -> (Ratio, Angle),
    {
        for _ in 0..steps {
            let state = self.model.state();
            let (throttle, incline) = inputs(self.elapsed, &state);
            self.step(throttle, incline)?;
        }
        Ok(())
    }

    /// Returns the model being simulated.
    #[must_use]
    pub fn model(&self) -> &VehicleModel {
        &self.model
    }

    /// Returns the recorded trajectory.
    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Consumes the simulation and returns its trajectory.
    #[must_use]
    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }
}
