//! Mute switch access
//!
//! An element reads as unmuted if either stereo channel is on; writes always
//! hit both channels so the pair never diverges afterwards.

use crate::caps;
use crate::cmd::DeviceClass;
use crate::error::Error;
use crate::mixer::{Channel, MixerElement};

/// OR of the left and right switch states.
pub fn read(device: DeviceClass, elem: &dyn MixerElement) -> Result<bool, Error> {
    let switch = caps::switch_reader(device)?;
    Ok(switch(elem, Channel::Left)? | switch(elem, Channel::Right)?)
}

/// Set both channels to `on`.
pub fn write(device: DeviceClass, elem: &dyn MixerElement, on: bool) -> Result<(), Error> {
    let switch = caps::switch_writer(device)?;
    switch(elem, Channel::Left, on)?;
    switch(elem, Channel::Right, on)?;
    Ok(())
}

/// Flip the combined state.
pub fn toggle(device: DeviceClass, elem: &dyn MixerElement) -> Result<(), Error> {
    let current = read(device, elem)?;
    write(device, elem, !current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixer::fake::FakeElement;

    #[test]
    fn read_is_or_of_both_channels() {
        let elem = FakeElement::new((0, 100));
        elem.playback.borrow_mut().switch_left = false;
        elem.playback.borrow_mut().switch_right = true;
        assert!(read(DeviceClass::Playback, &elem).unwrap());
        elem.playback.borrow_mut().switch_right = false;
        assert!(!read(DeviceClass::Playback, &elem).unwrap());
    }

    #[test]
    fn write_overrides_divergent_channels() {
        let elem = FakeElement::new((0, 100));
        elem.capture.borrow_mut().switch_left = true;
        elem.capture.borrow_mut().switch_right = false;
        write(DeviceClass::Capture, &elem, true).unwrap();
        assert!(read(DeviceClass::Capture, &elem).unwrap());
        assert!(elem.capture.borrow().switch_left);
        assert!(elem.capture.borrow().switch_right);

        write(DeviceClass::Capture, &elem, false).unwrap();
        assert!(!read(DeviceClass::Capture, &elem).unwrap());
    }

    #[test]
    fn toggle_twice_is_identity() {
        let elem = FakeElement::new((0, 100));
        for &initial in &[true, false] {
            write(DeviceClass::Playback, &elem, initial).unwrap();
            toggle(DeviceClass::Playback, &elem).unwrap();
            assert_eq!(read(DeviceClass::Playback, &elem).unwrap(), !initial);
            toggle(DeviceClass::Playback, &elem).unwrap();
            assert_eq!(read(DeviceClass::Playback, &elem).unwrap(), initial);
        }
    }
}
