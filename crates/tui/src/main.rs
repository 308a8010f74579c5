mod app;
mod args;
mod logging;
mod plain;

use std::error::Error;
use std::io;

use clap::Parser;
use generator::{RandomSource, RngSource};
use log::info;
use session::Session;
use settings::{load_or_default, settings_path, Settings};
use strum_core::GlyphStyle;

use crate::app::App;
use crate::args::Args;

/// Settings file values with command line overrides applied
fn merge(settings: Settings, args: &Args) -> Settings {
    Settings {
        muting_enabled: settings.muting_enabled || args.mutes,
        seed: args.seed.or(settings.seed),
        glyphs: if args.ascii { GlyphStyle::Ascii } else { settings.glyphs },
    }
}

fn run<R: RandomSource>(session: Session<R>, plain: bool) -> io::Result<()> {
    if plain {
        let mut session = session;
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        plain::run_plain(&mut session, &mut input, &mut output)
    } else {
        App::new(session).run()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match logging::setup_logging() {
        Ok(path) => info!("Logging to {}", path.display()),
        Err(err) => eprintln!("Warning: could not open log file: {}", err),
    }

    let path = args.config.clone().unwrap_or_else(settings_path);
    let settings = merge(load_or_default(&path)?, &args);
    info!("Starting with {:?}", settings);

    let config = settings.generation_config();
    match settings.seed {
        Some(seed) => {
            let session = Session::new(config, RngSource::seeded(seed)).with_glyph_style(settings.glyphs);
            run(session, args.plain)?;
        }
        None => {
            let session = Session::new(config, RngSource::from_entropy()).with_glyph_style(settings.glyphs);
            run(session, args.plain)?;
        }
    }

    if !args.plain {
        // The UI has left the alternate screen by now
        println!("Exiting!");
    }
    Ok(())
}
