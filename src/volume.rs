//! Normalized volume access
//!
//! Raw element volumes live in a device-specific integer range; this module
//! converts to and from a range-independent f64 in [0,1]. The range is
//! queried from the element on every call, never cached.

use crate::caps;
use crate::cmd::DeviceClass;
use crate::error::Error;
use crate::mixer::{Channel, MixerElement};

/// Current level of the louder stereo channel, normalized into [0,1].
pub fn read_normalized(device: DeviceClass, elem: &dyn MixerElement) -> Result<f64, Error> {
    let (min, max) = caps::range_reader(device)?(elem)?;
    let volume = caps::volume_reader(device)?;
    let left = volume(elem, Channel::Left)?;
    let right = volume(elem, Channel::Right)?;
    Ok((left.max(right) - min) as f64 / (max - min) as f64)
}

/// Write a normalized level to both stereo channels.
///
/// Values outside [0,1] clamp to the raw bounds; in between, the raw value
/// is `min + round((max - min) * value)` with round-half-away-from-zero.
pub fn write_normalized(
    device: DeviceClass,
    elem: &dyn MixerElement,
    value: f64,
) -> Result<(), Error> {
    let (min, max) = caps::range_reader(device)?(elem)?;
    let raw = if value < 0.0 {
        min
    } else if value > 1.0 {
        max
    } else {
        min + ((max - min) as f64 * value).round() as i64
    };
    let volume = caps::volume_writer(device)?;
    volume(elem, Channel::Left, raw)?;
    volume(elem, Channel::Right, raw)?;
    Ok(())
}
