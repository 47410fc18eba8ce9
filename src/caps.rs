//! Capability resolution
//!
//! Maps (operation, device class, quantity) to the matching element
//! primitive. The table is finite and statically enumerable; asking for a
//! combination outside it (Set×Range, or anything involving
//! [`DeviceClass::Both`]) is a programming defect and resolves to
//! [`Error::Internal`].

use crate::cmd::DeviceClass;
use crate::error::Error;
use crate::mixer::{Channel, MixerElement};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Get,
    Set,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            OperationKind::Get => "get",
            OperationKind::Set => "set",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Volume,
    Switch,
    Range,
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            QuantityKind::Volume => "volume",
            QuantityKind::Switch => "switch",
            QuantityKind::Range => "range",
        })
    }
}

pub type GetVolumeFn = fn(&dyn MixerElement, Channel) -> alsa::Result<i64>;
pub type SetVolumeFn = fn(&dyn MixerElement, Channel, i64) -> alsa::Result<()>;
pub type GetSwitchFn = fn(&dyn MixerElement, Channel) -> alsa::Result<bool>;
pub type SetSwitchFn = fn(&dyn MixerElement, Channel, bool) -> alsa::Result<()>;
pub type GetRangeFn = fn(&dyn MixerElement) -> alsa::Result<(i64, i64)>;

/// A resolved element primitive.
#[derive(Debug)]
pub enum Primitive {
    GetVolume(GetVolumeFn),
    SetVolume(SetVolumeFn),
    GetSwitch(GetSwitchFn),
    SetSwitch(SetSwitchFn),
    GetRange(GetRangeFn),
}

/// Look up the primitive for a combination.
///
/// Valid: Get × {Playback, Capture} × {Volume, Switch, Range} and
/// Set × {Playback, Capture} × {Volume, Switch}. Ranges are read-only.
pub fn resolve(
    op: OperationKind,
    device: DeviceClass,
    quantity: QuantityKind,
) -> Result<Primitive, Error> {
    use DeviceClass::{Capture, Playback};
    use OperationKind::{Get, Set};
    use QuantityKind::{Range, Switch, Volume};

    let primitive = match (op, device, quantity) {
        (Get, Playback, Volume) => Primitive::GetVolume(|e, ch| e.playback_volume(ch)),
        (Get, Playback, Switch) => Primitive::GetSwitch(|e, ch| e.playback_switch(ch)),
        (Get, Playback, Range) => Primitive::GetRange(|e| e.playback_volume_range()),
        (Get, Capture, Volume) => Primitive::GetVolume(|e, ch| e.capture_volume(ch)),
        (Get, Capture, Switch) => Primitive::GetSwitch(|e, ch| e.capture_switch(ch)),
        (Get, Capture, Range) => Primitive::GetRange(|e| e.capture_volume_range()),
        (Set, Playback, Volume) => Primitive::SetVolume(|e, ch, v| e.set_playback_volume(ch, v)),
        (Set, Playback, Switch) => Primitive::SetSwitch(|e, ch, v| e.set_playback_switch(ch, v)),
        (Set, Capture, Volume) => Primitive::SetVolume(|e, ch, v| e.set_capture_volume(ch, v)),
        (Set, Capture, Switch) => Primitive::SetSwitch(|e, ch, v| e.set_capture_switch(ch, v)),
        (op, device, quantity) => {
            return Err(Error::Internal {
                op,
                device,
                quantity,
            })
        }
    };
    Ok(primitive)
}

pub fn volume_reader(device: DeviceClass) -> Result<GetVolumeFn, Error> {
    match resolve(OperationKind::Get, device, QuantityKind::Volume)? {
        Primitive::GetVolume(f) => Ok(f),
        _ => Err(Error::Internal {
            op: OperationKind::Get,
            device,
            quantity: QuantityKind::Volume,
        }),
    }
}

pub fn volume_writer(device: DeviceClass) -> Result<SetVolumeFn, Error> {
    match resolve(OperationKind::Set, device, QuantityKind::Volume)? {
        Primitive::SetVolume(f) => Ok(f),
        _ => Err(Error::Internal {
            op: OperationKind::Set,
            device,
            quantity: QuantityKind::Volume,
        }),
    }
}

pub fn switch_reader(device: DeviceClass) -> Result<GetSwitchFn, Error> {
    match resolve(OperationKind::Get, device, QuantityKind::Switch)? {
        Primitive::GetSwitch(f) => Ok(f),
        _ => Err(Error::Internal {
            op: OperationKind::Get,
            device,
            quantity: QuantityKind::Switch,
        }),
    }
}

pub fn switch_writer(device: DeviceClass) -> Result<SetSwitchFn, Error> {
    match resolve(OperationKind::Set, device, QuantityKind::Switch)? {
        Primitive::SetSwitch(f) => Ok(f),
        _ => Err(Error::Internal {
            op: OperationKind::Set,
            device,
            quantity: QuantityKind::Switch,
        }),
    }
}

pub fn range_reader(device: DeviceClass) -> Result<GetRangeFn, Error> {
    match resolve(OperationKind::Get, device, QuantityKind::Range)? {
        Primitive::GetRange(f) => Ok(f),
        _ => Err(Error::Internal {
            op: OperationKind::Get,
            device,
            quantity: QuantityKind::Range,
        }),
    }
}
