//! softgl: render a RON scene to an image file
//!
//! Without a scene argument the built-in demo (the line test pattern) is
//! rendered. `RUST_LOG=debug` shows every state change.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use softgl::scene::{load_scene, scene_to_string, Scene};
use softgl::Result;

#[derive(Parser, Debug)]
#[command(name = "softgl", version, about = "Immediate-mode software line rasterizer")]
struct Args {
    /// RON scene file to render
    scene: Option<PathBuf>,

    /// Output image; `.bmp` or no extension writes the raw 24-bit bitmap
    #[arg(short, long, default_value = "Line.bmp")]
    output: PathBuf,

    /// Print the scene as RON instead of rendering it
    #[arg(long)]
    dump_scene: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let scene = match &args.scene {
        Some(path) => {
            info!("loading scene {}", path.display());
            load_scene(path)?
        }
        None => Scene::demo(),
    };

    if args.dump_scene {
        println!("{}", scene_to_string(&scene)?);
        return Ok(());
    }

    scene.render()?.finish(&args.output)
}
