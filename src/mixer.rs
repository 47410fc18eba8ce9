//! The seam between the control logic and the ALSA mixer.
//!
//! Everything above this module talks to a [`MixerElement`]; the only
//! production implementation wraps an [`alsa::mixer::Selem`]. The mixer
//! handle itself is opened once by `main` and passed down by reference, so
//! it is released by `Drop` on every exit path.

use crate::error::Error;
use crate::settings::Settings;
use alsa::mixer::{Mixer, Selem, SelemChannelId};
use tracing::debug;

/// One of the two stereo sub-channels of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Left,
    Right,
}

impl From<Channel> for SelemChannelId {
    fn from(ch: Channel) -> Self {
        match ch {
            Channel::Left => SelemChannelId::FrontLeft,
            Channel::Right => SelemChannelId::FrontRight,
        }
    }
}

/// The raw get/set primitives of one mixer element.
///
/// Mirrors the ALSA simple-element surface we use: per-channel volume and
/// switch access plus the (read-only) volume range, for each of the playback
/// and capture directions.
pub trait MixerElement {
    fn playback_volume_range(&self) -> alsa::Result<(i64, i64)>;
    fn playback_volume(&self, ch: Channel) -> alsa::Result<i64>;
    fn set_playback_volume(&self, ch: Channel, raw: i64) -> alsa::Result<()>;
    fn playback_switch(&self, ch: Channel) -> alsa::Result<bool>;
    fn set_playback_switch(&self, ch: Channel, on: bool) -> alsa::Result<()>;

    fn capture_volume_range(&self) -> alsa::Result<(i64, i64)>;
    fn capture_volume(&self, ch: Channel) -> alsa::Result<i64>;
    fn set_capture_volume(&self, ch: Channel, raw: i64) -> alsa::Result<()>;
    fn capture_switch(&self, ch: Channel) -> alsa::Result<bool>;
    fn set_capture_switch(&self, ch: Channel, on: bool) -> alsa::Result<()>;
}

/// [`MixerElement`] backed by a real ALSA simple element.
pub struct AlsaElement<'a>(Selem<'a>);

impl MixerElement for AlsaElement<'_> {
    fn playback_volume_range(&self) -> alsa::Result<(i64, i64)> {
        Ok(self.0.get_playback_volume_range())
    }

    fn playback_volume(&self, ch: Channel) -> alsa::Result<i64> {
        self.0.get_playback_volume(ch.into())
    }

    fn set_playback_volume(&self, ch: Channel, raw: i64) -> alsa::Result<()> {
        self.0.set_playback_volume(ch.into(), raw)
    }

    fn playback_switch(&self, ch: Channel) -> alsa::Result<bool> {
        Ok(self.0.get_playback_switch(ch.into())? != 0)
    }

    fn set_playback_switch(&self, ch: Channel, on: bool) -> alsa::Result<()> {
        self.0.set_playback_switch(ch.into(), on as i32)
    }

    fn capture_volume_range(&self) -> alsa::Result<(i64, i64)> {
        Ok(self.0.get_capture_volume_range())
    }

    fn capture_volume(&self, ch: Channel) -> alsa::Result<i64> {
        self.0.get_capture_volume(ch.into())
    }

    fn set_capture_volume(&self, ch: Channel, raw: i64) -> alsa::Result<()> {
        self.0.set_capture_volume(ch.into(), raw)
    }

    fn capture_switch(&self, ch: Channel) -> alsa::Result<bool> {
        Ok(self.0.get_capture_switch(ch.into())? != 0)
    }

    fn set_capture_switch(&self, ch: Channel, on: bool) -> alsa::Result<()> {
        self.0.set_capture_switch(ch.into(), on as i32)
    }
}

/// Locate the playback and capture elements by exact name match.
///
/// Either slot may come back empty; whether that matters depends on which
/// device class the command actually targets.
pub fn find_elements<'a>(
    mixer: &'a Mixer,
    settings: &Settings,
) -> Result<(Option<AlsaElement<'a>>, Option<AlsaElement<'a>>), Error> {
    let mut playback = None;
    let mut capture = None;

    for elem in mixer.iter() {
        let selem = match Selem::new(elem) {
            Some(s) => s,
            None => continue,
        };
        let id = selem.get_id();
        let name = id.get_name()?;
        if name == settings.playback.as_str() {
            debug!("playback element: {}", name);
            playback = Some(AlsaElement(selem));
        } else if name == settings.capture.as_str() {
            debug!("capture element: {}", name);
            capture = Some(AlsaElement(selem));
        }
    }

    Ok((playback, capture))
}

/// In-memory element for tests. Left and right state are independent so
/// divergent channels can be set up; the range is a `Cell` so a test can
/// move it between calls.
#[cfg(test)]
pub(crate) mod fake {
    use super::{Channel, MixerElement};
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, Copy)]
    pub struct ClassState {
        pub left: i64,
        pub right: i64,
        pub switch_left: bool,
        pub switch_right: bool,
    }

    pub struct FakeElement {
        pub range: Cell<(i64, i64)>,
        pub playback: RefCell<ClassState>,
        pub capture: RefCell<ClassState>,
    }

    impl FakeElement {
        pub fn new(range: (i64, i64)) -> Self {
            let state = ClassState {
                left: 0,
                right: 0,
                switch_left: true,
                switch_right: true,
            };
            FakeElement {
                range: Cell::new(range),
                playback: RefCell::new(state),
                capture: RefCell::new(state),
            }
        }

        fn volume(state: &ClassState, ch: Channel) -> i64 {
            match ch {
                Channel::Left => state.left,
                Channel::Right => state.right,
            }
        }

        fn set_volume(state: &mut ClassState, ch: Channel, raw: i64) {
            match ch {
                Channel::Left => state.left = raw,
                Channel::Right => state.right = raw,
            }
        }

        fn switch(state: &ClassState, ch: Channel) -> bool {
            match ch {
                Channel::Left => state.switch_left,
                Channel::Right => state.switch_right,
            }
        }

        fn set_switch(state: &mut ClassState, ch: Channel, on: bool) {
            match ch {
                Channel::Left => state.switch_left = on,
                Channel::Right => state.switch_right = on,
            }
        }
    }

    impl MixerElement for FakeElement {
        fn playback_volume_range(&self) -> alsa::Result<(i64, i64)> {
            Ok(self.range.get())
        }

        fn playback_volume(&self, ch: Channel) -> alsa::Result<i64> {
            Ok(Self::volume(&self.playback.borrow(), ch))
        }

        fn set_playback_volume(&self, ch: Channel, raw: i64) -> alsa::Result<()> {
            Self::set_volume(&mut self.playback.borrow_mut(), ch, raw);
            Ok(())
        }

        fn playback_switch(&self, ch: Channel) -> alsa::Result<bool> {
            Ok(Self::switch(&self.playback.borrow(), ch))
        }

        fn set_playback_switch(&self, ch: Channel, on: bool) -> alsa::Result<()> {
            Self::set_switch(&mut self.playback.borrow_mut(), ch, on);
            Ok(())
        }

        fn capture_volume_range(&self) -> alsa::Result<(i64, i64)> {
            Ok(self.range.get())
        }

        fn capture_volume(&self, ch: Channel) -> alsa::Result<i64> {
            Ok(Self::volume(&self.capture.borrow(), ch))
        }

        fn set_capture_volume(&self, ch: Channel, raw: i64) -> alsa::Result<()> {
            Self::set_volume(&mut self.capture.borrow_mut(), ch, raw);
            Ok(())
        }

        fn capture_switch(&self, ch: Channel) -> alsa::Result<bool> {
            Ok(Self::switch(&self.capture.borrow(), ch))
        }

        fn set_capture_switch(&self, ch: Channel, on: bool) -> alsa::Result<()> {
            Self::set_switch(&mut self.capture.borrow_mut(), ch, on);
            Ok(())
        }
    }
}
