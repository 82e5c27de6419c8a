use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;

mod announcer;
mod app;
mod carousel;
mod constants;
mod form;
mod header;
mod nav;
mod page;
mod render;
mod scroll;
mod submit;
mod texture_loader;
mod timer;

use crate::app::App;
use crate::constants::*;
use crate::submit::HttpSubmitter;

/// Desktop rendition of the CodeRift Technologies landing page: sticky
/// header, navigation drawer, testimonial carousel, contact form, smooth
/// scrolling and reveal animations in one raylib window.
#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Interactive landing page demo")]
struct Cli {
    /// Form delivery endpoint
    #[arg(long, default_value = "https://formspree.io/f/YOUR_FORM_ID")]
    endpoint: String,

    /// Directory holding testimonial avatar photos
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Window width
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    /// Window height
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("CodeRift Technologies")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape closes the drawer, not the window
    rl.set_exit_key(None);

    let submitter = Arc::new(HttpSubmitter::new(&cli.endpoint)?);
    let mut app = App::new(cli.width as f32, cli.height as f32, submitter, cli.assets);

    log::info!("showcase running at {}x{}", cli.width, cli.height);

    while !rl.window_should_close() {
        app.update(&mut rl, &thread);

        let mut d = rl.begin_drawing(&thread);
        render::draw(&app, &mut d);
    }

    Ok(())
}
