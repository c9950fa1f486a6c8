// Fingerpaint: full-window freehand painting.
// • Hold Left Mouse (or touch): paint a smoothed stroke in the brush color.
// • Backspace tap: undo the last stroke. Backspace hold (>0.3s): clear.
// • Resize the window: the painting keeps its top-left part.
// • ESC or closing the window quits.

use clap::Parser;
use fingerpaint::app::Session;
use fingerpaint::config::{CliArgs, Config};
use fingerpaint::draw::Drawer;
use fingerpaint::error::Error;
use std::time::Instant;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("fingerpaint: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args = CliArgs::parse();
    let config = Config::load(&args)?;

    /* --- Window setup ---
       The canvas is created at whatever client size the window ends up with. */
    let mut drawer = Drawer::new(&config.title, config.width, config.height)?;
    let (w, h) = drawer.size();
    log::info!("Window open at {w}x{h}, brush radius {}", config.brush_radius);

    let mut session = Session::new(config, w, h);
    drawer.present(session.frame())?;

    /* ------------------------------ Main loop ------------------------------ */
    let mut last_frame_time = Instant::now();
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();
        let dt = now - last_frame_time;
        last_frame_time = now;

        let input = drawer.poll(dt);
        session.tick(&input);

        // Present every frame, changed or not.
        drawer.present(session.frame())?;
    }

    log::info!("Session ended with {} undoable strokes", session.history().len());
    Ok(())
}
