//! End-to-end scenario: climbing a two-segment ramp and releasing the
//! throttle.
//!
//! The incline follows the vehicle's position across two ramp segments and
//! flat road, while the throttle follows the trapezoidal reference
//! schedule: ramp up over 5 s, hold to 15 s, release to zero by 20 s.

use integration_tests::constant_inputs;
use longsim_components::{RampIncline, TrapezoidThrottle};
use longsim_core::{Simulation, VehicleModel};
use uom::si::time::second;

/// 20 simulated seconds at the default 0.01 s sample time.
const STEPS: usize = 2_000;

#[test]
fn the_vehicle_climbs_both_ramps_and_crests_the_hill() {
    let incline = RampIncline::default();
    let throttle = TrapezoidThrottle::default();

    let mut sim = Simulation::new(VehicleModel::default());
    sim.run(STEPS, |time, state| {
        (throttle.throttle_at(time), incline.angle_at(state.position))
    })
    .unwrap();

    let samples = sim.trajectory().samples();
    assert_eq!(samples.len(), STEPS + 1);

    // The vehicle never stalls on the climb.
    assert!(samples
        .windows(2)
        .all(|pair| pair[1].state.position > pair[0].state.position));

    // When the throttle begins to release (t = 15 s, step 1500), the
    // vehicle is partway up the second ramp segment.
    let sample_time = sim.model().parameters().sample_time.get::<second>();
    let release_index = (throttle.hold_end().get::<second>() / sample_time).round() as usize;
    assert_eq!(release_index, 1500);

    let release_position = samples[release_index].state.position;
    assert!(release_position >= incline.first_ramp_end());
    assert!(release_position < incline.second_ramp_end());

    // By the end of the run the vehicle has crested onto flat road.
    assert!(sim.trajectory().last().state.position > incline.second_ramp_end());
}

#[test]
fn reset_reproduces_the_reference_trajectory() {
    let incline = RampIncline::default();
    let throttle = TrapezoidThrottle::default();
    let scenario = |time, state: &longsim_core::State| {
        (throttle.throttle_at(time), incline.angle_at(state.position))
    };

    // Drive a model away from its initial state, then reset it.
    let mut model = VehicleModel::default();
    let mut inputs = constant_inputs(0.4, 0.0);
    for _ in 0..250 {
        let state = model.state();
        let (command, angle) = inputs(uom::si::f64::Time::default(), &state);
        model.step(command, angle).unwrap();
    }
    model.reset();

    let mut resumed = Simulation::new(model);
    resumed.run(STEPS, scenario).unwrap();

    let mut fresh = Simulation::new(VehicleModel::default());
    fresh.run(STEPS, scenario).unwrap();

    assert_eq!(resumed.trajectory(), fresh.trajectory());
}
