//! Scripted pointer-event playback.
//!
//! A line-oriented command language that stands in for a host UI: it feeds
//! tool/color/size selections and pointer events to an [`Editor`] and
//! triggers exports. Blank lines and `#` comments are skipped.
//!
//! # Example
//! ```text
//! tool rectangle
//! color red
//! size 4
//! down 10 10
//! move 50 40
//! up 50 40
//! save
//! ```

use crate::config::ExportConfig;
use crate::draw::{Color, SurfaceError};
use crate::editor::Editor;
use crate::export::ExportError;
use crate::input::{PointerButton, Tool};
use crate::util;
use std::path::PathBuf;
use thiserror::Error;

/// One parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    /// Select the active tool
    SelectTool(Tool),
    /// Select the stroke/fill color
    SelectColor(Color),
    /// Select the brush width
    SelectSize(f64),
    /// Switch shape tools between outline and filled rendering
    SetFill(bool),
    /// Press the primary pointer button
    Down(i32, i32),
    /// Move the pointer
    Move(i32, i32),
    /// Release the primary pointer button
    Up(i32, i32),
    /// Cancel the stroke in progress
    Cancel,
    /// Clear the canvas
    Clear,
    /// Export the canvas with the configured settings
    Save,
}

/// Errors raised while parsing or running a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

fn parse_error(line: usize, message: impl Into<String>) -> ScriptError {
    ScriptError::Parse {
        line,
        message: message.into(),
    }
}

fn single_arg<'a>(args: &[&'a str], line: usize, command: &str) -> Result<&'a str, ScriptError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(parse_error(
            line,
            format!("'{command}' takes exactly one argument"),
        )),
    }
}

fn point_args(args: &[&str], line: usize, command: &str) -> Result<(i32, i32), ScriptError> {
    let [x, y] = args else {
        return Err(parse_error(
            line,
            format!("'{command}' takes two coordinates"),
        ));
    };
    let x: i32 = x
        .parse()
        .map_err(|_| parse_error(line, format!("invalid x coordinate '{x}'")))?;
    let y: i32 = y
        .parse()
        .map_err(|_| parse_error(line, format!("invalid y coordinate '{y}'")))?;
    Ok((x, y))
}

fn bare(args: &[&str], line: usize, command: &str) -> Result<(), ScriptError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(parse_error(
            line,
            format!("'{command}' takes no arguments"),
        ))
    }
}

/// Parses a script source into commands.
///
/// Errors name the 1-based line they occurred on.
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let mut parts = text.split_whitespace();
        let Some(word) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        let command = match word {
            "tool" => {
                let name = single_arg(&args, line, "tool")?;
                let tool = Tool::from_name(name)
                    .ok_or_else(|| parse_error(line, format!("unknown tool '{name}'")))?;
                ScriptCommand::SelectTool(tool)
            }
            "color" => {
                let spec = single_arg(&args, line, "color")?;
                let color = util::parse_color(spec)
                    .ok_or_else(|| parse_error(line, format!("unknown color '{spec}'")))?;
                ScriptCommand::SelectColor(color)
            }
            "size" => {
                let arg = single_arg(&args, line, "size")?;
                let width: f64 = arg
                    .parse()
                    .map_err(|_| parse_error(line, format!("invalid size '{arg}'")))?;
                if !width.is_finite() || width <= 0.0 {
                    return Err(parse_error(line, "size must be positive"));
                }
                ScriptCommand::SelectSize(width)
            }
            "fill" => match single_arg(&args, line, "fill")? {
                "on" => ScriptCommand::SetFill(true),
                "off" => ScriptCommand::SetFill(false),
                other => {
                    return Err(parse_error(
                        line,
                        format!("expected 'on' or 'off', got '{other}'"),
                    ));
                }
            },
            "down" => {
                let (x, y) = point_args(&args, line, "down")?;
                ScriptCommand::Down(x, y)
            }
            "move" => {
                let (x, y) = point_args(&args, line, "move")?;
                ScriptCommand::Move(x, y)
            }
            "up" => {
                let (x, y) = point_args(&args, line, "up")?;
                ScriptCommand::Up(x, y)
            }
            "cancel" => {
                bare(&args, line, "cancel")?;
                ScriptCommand::Cancel
            }
            "clear" => {
                bare(&args, line, "clear")?;
                ScriptCommand::Clear
            }
            "save" => {
                bare(&args, line, "save")?;
                ScriptCommand::Save
            }
            _ => return Err(parse_error(line, format!("unknown command '{word}'"))),
        };
        commands.push(command);
    }

    Ok(commands)
}

/// Runs parsed commands against an editor.
///
/// # Returns
/// The paths of every image the script saved, in order.
pub fn run_script(
    editor: &mut Editor,
    commands: &[ScriptCommand],
    export: &ExportConfig,
) -> Result<Vec<PathBuf>, ScriptError> {
    let mut saved = Vec::new();

    for command in commands {
        match command {
            ScriptCommand::SelectTool(tool) => editor.set_tool(*tool),
            ScriptCommand::SelectColor(color) => editor.set_color(*color),
            ScriptCommand::SelectSize(width) => editor.set_thickness(*width),
            ScriptCommand::SetFill(filled) => editor.set_filled(*filled),
            ScriptCommand::Down(x, y) => {
                editor.on_pointer_press(PointerButton::Left, *x, *y)?;
            }
            ScriptCommand::Move(x, y) => editor.on_pointer_motion(*x, *y)?,
            ScriptCommand::Up(x, y) => editor.on_pointer_release(PointerButton::Left, *x, *y),
            ScriptCommand::Cancel => editor.cancel_stroke()?,
            ScriptCommand::Clear => editor.clear()?,
            ScriptCommand::Save => saved.push(editor.export(export)?),
        }
    }

    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};
    use tempfile::TempDir;

    fn assert_close(actual: Color, expected: Color) {
        let close = (actual.r - expected.r).abs() < 0.02
            && (actual.g - expected.g).abs() < 0.02
            && (actual.b - expected.b).abs() < 0.02;
        assert!(close, "expected {expected:?}, got {actual:?}");
    }

    #[test]
    fn parses_commands_and_skips_comments() {
        let commands = parse_script(
            "# scene\n\
             tool circle\n\
             color red\n\
             size 3.5\n\
             fill on\n\
             \n\
             down 10 20\n\
             move 30 40\n\
             up 30 40\n\
             save\n",
        )
        .unwrap();

        assert_eq!(commands.len(), 8);
        assert_eq!(commands[0], ScriptCommand::SelectTool(Tool::Circle));
        assert_eq!(commands[1], ScriptCommand::SelectColor(RED));
        assert_eq!(commands[2], ScriptCommand::SelectSize(3.5));
        assert_eq!(commands[3], ScriptCommand::SetFill(true));
        assert_eq!(commands[4], ScriptCommand::Down(10, 20));
        assert_eq!(commands[7], ScriptCommand::Save);
    }

    #[test]
    fn unknown_commands_name_the_line() {
        let err = parse_script("tool brush\nwat 1 2\n").unwrap_err();
        assert!(matches!(err, ScriptError::Parse { line: 2, .. }));
        assert!(err.to_string().contains("unknown command 'wat'"));
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        let err = parse_script("down 10\n").unwrap_err();
        assert!(matches!(err, ScriptError::Parse { line: 1, .. }));

        let err = parse_script("move ten 20\n").unwrap_err();
        assert!(err.to_string().contains("invalid x coordinate"));
    }

    #[test]
    fn negative_and_zero_sizes_are_rejected() {
        assert!(parse_script("size 0\n").is_err());
        assert!(parse_script("size -3\n").is_err());
    }

    #[test]
    fn running_a_script_draws_and_saves() {
        let temp = TempDir::new().unwrap();
        let mut editor = Editor::new(64, 64, WHITE).expect("surface");
        let export = ExportConfig {
            directory: temp.path().to_string_lossy().into_owned(),
            filename_template: "scene_%Y%m%d_%H%M%S".to_string(),
            format: crate::export::ExportFormat::Png,
            jpeg_quality: 90,
        };

        let commands = parse_script(
            "tool rectangle\n\
             color red\n\
             fill on\n\
             down 10 10\n\
             move 50 40\n\
             up 50 40\n\
             save\n",
        )
        .unwrap();
        let saved = run_script(&mut editor, &commands, &export).unwrap();

        assert_eq!(saved.len(), 1);
        assert!(saved[0].exists());

        let center = editor.surface_mut().pixel(30, 25).unwrap();
        assert_close(center, RED);
    }
}
