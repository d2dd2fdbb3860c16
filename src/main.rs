use anyhow::Context;
use clap::Parser;
use sketchpad::Editor;
use sketchpad::config::Config;
use sketchpad::export::ExportFormat;
use sketchpad::script::{self, ScriptCommand};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Built-in scene exercising every tool, used when no script is given.
const DEMO_SCRIPT: &str = "\
# Demo scene: one stroke per tool
color black
size 5
down 40 60
move 120 90
move 200 50
move 280 100
up 280 100

tool rectangle
color blue
down 80 150
move 240 260
up 240 260

tool circle
color red
fill on
down 420 180
move 480 180
up 480 180

tool triangle
color green
fill off
down 420 320
move 500 420
up 500 420

tool eraser
down 150 200
move 180 200
up 180 200
";

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(
    version,
    about = "Headless freehand and shape drawing canvas with image export"
)]
struct Cli {
    /// Canvas width in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    width: Option<i32>,

    /// Canvas height in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    height: Option<i32>,

    /// Config file to load instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Drawing script to run ("-" reads stdin); omit to draw the demo scene
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Directory exported images are saved to (overrides config)
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Export format: jpeg or png (overrides config)
    #[arg(long, short = 'f', value_name = "FORMAT")]
    format: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(width) = cli.width {
        anyhow::ensure!(
            (16..=8192).contains(&width),
            "canvas width must be 16-8192, got {width}"
        );
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        anyhow::ensure!(
            (16..=8192).contains(&height),
            "canvas height must be 16-8192, got {height}"
        );
        config.canvas.height = height;
    }
    if let Some(output) = &cli.output {
        config.export.directory = output.to_string_lossy().into_owned();
    }
    if let Some(format) = &cli.format {
        config.export.format = ExportFormat::from_name(format)
            .with_context(|| format!("Unknown format '{format}' (expected jpeg or png)"))?;
    }

    let source = match &cli.script {
        Some(path) if path == Path::new("-") => {
            let mut stdin = String::new();
            std::io::stdin()
                .read_to_string(&mut stdin)
                .context("Failed to read script from stdin")?;
            stdin
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?,
        None => {
            log::info!("No script given, drawing the built-in demo scene");
            DEMO_SCRIPT.to_string()
        }
    };

    let commands = script::parse_script(&source)?;
    let mut editor = Editor::from_config(&config)?;
    let mut saved = script::run_script(&mut editor, &commands, &config.export)?;

    // A script that never saves still produces one export at the end
    if !commands.iter().any(|c| matches!(c, ScriptCommand::Save)) {
        saved.push(editor.export(&config.export)?);
    }

    for path in &saved {
        println!("Saved {}", path.display());
    }

    Ok(())
}
