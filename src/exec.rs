//! Action execution
//!
//! Takes the parsed device and volume specs, applies them to the located
//! elements and renders one report line per concrete device class. `Both`
//! always expands to playback first, then capture, with a single space
//! instead of a newline after the first report.

use crate::cmd::{DeviceClass, VolumeSpec};
use crate::error::Error;
use crate::mixer::MixerElement;
use crate::{switch, volume};
use std::io::Write;
use tracing::debug;

pub fn run<W: Write>(
    out: &mut W,
    device: DeviceClass,
    spec: VolumeSpec,
    playback: Option<&dyn MixerElement>,
    capture: Option<&dyn MixerElement>,
) -> Result<(), Error> {
    match device {
        DeviceClass::Both => {
            apply(out, DeviceClass::Playback, spec, playback, ' ')?;
            apply(out, DeviceClass::Capture, spec, capture, '\n')
        }
        DeviceClass::Playback => apply(out, DeviceClass::Playback, spec, playback, '\n'),
        DeviceClass::Capture => apply(out, DeviceClass::Capture, spec, capture, '\n'),
    }
}

fn apply<W: Write>(
    out: &mut W,
    device: DeviceClass,
    spec: VolumeSpec,
    elem: Option<&dyn MixerElement>,
    terminator: char,
) -> Result<(), Error> {
    let elem = elem.ok_or(Error::Missing(device))?;
    debug!("{:?} on {} device", spec, device);

    match spec {
        VolumeSpec::Get => {}
        VolumeSpec::Mute => switch::write(device, elem, false)?,
        VolumeSpec::Unmute => switch::write(device, elem, true)?,
        VolumeSpec::Toggle => switch::toggle(device, elem)?,
        VolumeSpec::Absolute(pct) => volume::write_normalized(device, elem, pct as f64 / 100.0)?,
        VolumeSpec::Relative(delta) => {
            let current = volume::read_normalized(device, elem)?;
            volume::write_normalized(device, elem, current + delta as f64 / 100.0)?
        }
    }

    let percent = (100.0 * volume::read_normalized(device, elem)?).round() as i64;
    let state = if switch::read(device, elem)? { "on" } else { "off" };
    write!(out, "{} {}{}", percent, state, terminator)?;
    Ok(())
}
