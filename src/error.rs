//! Error taxonomy and exit-code mapping
//!
//! Every failure terminates the process; `main` prints the error and exits
//! with [`Error::exit_code`]. Usage and missing-device errors exit 1, an
//! invalid capability combination exits 101, and ALSA failures exit with the
//! provider's errno.

use crate::caps::{OperationKind, QuantityKind};
use crate::cmd::DeviceClass;
use std::fmt;

/// Exit status for usage and missing-device errors.
pub const EXIT_USAGE: i32 = 1;
/// Exit status reserved for internal (programming) errors.
pub const EXIT_INTERNAL: i32 = 101;

#[derive(Debug)]
pub enum Error {
    /// Malformed or excessive command-line tokens; carries the program name
    /// for the usage message.
    Usage(String),
    /// A capability combination outside the resolver's table.
    Internal {
        op: OperationKind,
        device: DeviceClass,
        quantity: QuantityKind,
    },
    /// The requested device class has no element on this mixer.
    Missing(DeviceClass),
    /// Failure from the ALSA provider.
    Alsa(alsa::Error),
    /// Failure writing the report.
    Io(std::io::Error),
}

impl From<alsa::Error> for Error {
    fn from(e: alsa::Error) -> Self {
        Self::Alsa(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Usage(program) => write!(f, "bad arguments to {}", program),
            Error::Internal {
                op,
                device,
                quantity,
            } => write!(
                f,
                "unexpected primitive request: {} {} {}",
                op, device, quantity
            ),
            Error::Missing(device) => write!(f, "could not find a {} device", device),
            Error::Alsa(e) => e.fmt(f),
            Error::Io(e) => write!(f, "could not write report: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) | Error::Missing(_) | Error::Io(_) => EXIT_USAGE,
            Error::Internal { .. } => EXIT_INTERNAL,
            Error::Alsa(e) => match e.errno() {
                0 => EXIT_USAGE,
                errno => errno,
            },
        }
    }
}
