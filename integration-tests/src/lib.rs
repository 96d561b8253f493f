//! Shared helpers for the longsim integration tests.

use longsim_core::State;
use uom::si::{
    angle::radian,
    f64::{Angle, Ratio, Time},
    ratio::ratio,
};

/// Returns an input closure that holds the throttle and incline constant.
pub fn constant_inputs(
    throttle: f64,
    incline: f64,
) -> impl FnMut(Time, &State) -> (Ratio, Angle) {
    move |_, _| {
        (
            Ratio::new::<ratio>(throttle),
            Angle::new::<radian>(incline),
        )
    }
}
