//! alsavol: command-line volume and mute control for the default ALSA
//! playback ("Master") and capture ("Capture") elements.

mod caps;
mod cmd;
mod error;
mod exec;
mod log;
mod mixer;
mod settings;
mod switch;
mod volume;

use alsa::mixer::Mixer;
use error::Error;
use mixer::MixerElement;
use std::{env, io, process};

fn main() {
    log::init();
    let code = match run() {
        Ok(()) => 0,
        Err(err) => report(&err),
    };
    process::exit(code);
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = env::args().collect();
    let program = args.get(0).map(String::as_str).unwrap_or("alsavol");
    if args.len() > 3 {
        return Err(Error::Usage(program.to_string()));
    }
    let device = cmd::parse_device(args.get(1).map(String::as_str).unwrap_or("b"))
        .ok_or_else(|| Error::Usage(program.to_string()))?;
    let spec = cmd::parse_volume(args.get(2).map(String::as_str).unwrap_or("g"))
        .ok_or_else(|| Error::Usage(program.to_string()))?;

    let settings = settings::Settings::load();
    // mixer is dropped (closed) before main maps the result to an exit code
    let mixer = Mixer::new(&settings.device, false)?;
    let (playback, capture) = mixer::find_elements(&mixer, &settings)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    exec::run(
        &mut out,
        device,
        spec,
        playback.as_ref().map(|e| e as &dyn MixerElement),
        capture.as_ref().map(|e| e as &dyn MixerElement),
    )
}

fn report(err: &Error) -> i32 {
    match err {
        Error::Usage(program) => eprintln!(
            "usage: {} [p[layback]|c[apture]|b[oth] [g[et]|m[ute]|u[nmute]|t[oggle]|[+|-]0-100]]",
            program
        ),
        other => eprintln!("{}", other),
    }
    err.exit_code()
}
