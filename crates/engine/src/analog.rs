//! Hand positions for analog faces
//!
//! Angles are degrees clockwise from 12 o'clock. The minute hand sweeps
//! with the seconds and the hour hand sweeps with the minutes.

use crate::format::WallClock;

/// Rotation of each hand, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn from_wall_clock(wall: WallClock) -> Self {
        let hours = f64::from(wall.hours);
        let minutes = f64::from(wall.minutes);
        let seconds = f64::from(wall.seconds);

        Self {
            hour: ((hours % 12.0 + minutes / 60.0) / 12.0) * 360.0,
            minute: ((minutes + seconds / 60.0) / 60.0) * 360.0,
            second: (seconds / 60.0) * 360.0,
        }
    }
}

/// CSS transform value for a hand rotated by `degrees`
pub fn rotate(degrees: f64) -> String {
    format!("rotate({degrees}deg)")
}
