//! Command token parsing
//!
//! The command line carries at most two positional tokens: a device spec and
//! a volume spec. Both parsers return `None` on anything they do not
//! recognise; the caller turns that into a usage error.

use std::fmt;

/// Which element group an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Playback,
    Capture,
    /// Composite of the two; expanded by the executor, never passed to the
    /// volume/switch layers.
    Both,
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            DeviceClass::Playback => "playback",
            DeviceClass::Capture => "capture",
            DeviceClass::Both => "both",
        })
    }
}

/// What to do to the targeted element(s).
///
/// `Relative` and `Absolute` carry integer percentages. Values outside
/// ±100 / 0–100 are deliberately accepted; they clamp at the normalization
/// boundary instead of being rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeSpec {
    Get,
    Mute,
    Unmute,
    Toggle,
    Relative(i64),
    Absolute(i64),
}

/// Parse the device token. Case sensitive.
pub fn parse_device(token: &str) -> Option<DeviceClass> {
    match token {
        "p" | "playback" => Some(DeviceClass::Playback),
        "c" | "capture" => Some(DeviceClass::Capture),
        "b" | "both" => Some(DeviceClass::Both),
        _ => None,
    }
}

/// Parse the volume token.
///
/// Signed integers (`+10`, `-5`) are relative deltas, unsigned integers
/// absolute percentages; the whole token must parse or the spec is invalid.
pub fn parse_volume(token: &str) -> Option<VolumeSpec> {
    match token {
        "" => None,
        "g" | "get" => Some(VolumeSpec::Get),
        "m" | "mute" => Some(VolumeSpec::Mute),
        "u" | "unmute" => Some(VolumeSpec::Unmute),
        "t" | "toggle" => Some(VolumeSpec::Toggle),
        _ => {
            let value: i64 = token.parse().ok()?;
            if token.starts_with('+') || token.starts_with('-') {
                Some(VolumeSpec::Relative(value))
            } else {
                Some(VolumeSpec::Absolute(value))
            }
        }
    }
}
