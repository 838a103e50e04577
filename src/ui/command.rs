// SPDX-License-Identifier: MPL-2.0
//! Terminal commands understood by the interactive session.

use crate::domain::editing::AspectRatio;
use crate::domain::mode::Mode;
use crate::domain::ui::Point;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`; type `help` for the list")]
    Unknown(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{command}`: invalid value `{value}`")]
    InvalidArgument { command: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomCommand {
    In,
    Out,
    Reset,
    /// Raw wheel delta; negative zooms in.
    Wheel(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Status,
    Upload(PathBuf),
    /// Captures one frame from the snapshot file at `source`.
    Camera { source: PathBuf, rear: bool },
    Mode(Mode),
    /// Shows the prompt when `None`, replaces it otherwise.
    Prompt(Option<String>),
    Style(String),
    Styles,
    Paste,
    Enhance,
    Generate,
    History,
    /// 1-based history row.
    Select(usize),
    Delete(usize),
    Clear { confirmed: bool },
    Reset,
    Zoom(ZoomCommand),
    Pan(Point),
    Compare,
    Slider(f32),
    Crop(AspectRatio),
    Download(Option<PathBuf>),
    /// Lists templates, filtered when a query is given.
    Templates(Option<String>),
    /// 1-based row of the last template listing.
    Template(usize),
    /// Saves the current image as a template with this title.
    Share(String),
    Quit,
}

pub const HELP: &str = "\
Commands:
  upload <path>             start a new session from an image file
  camera <path> [rear]      capture a frame from a snapshot file
  mode edit|create          switch workspace mode
  prompt [text]             show or replace the prompt
  style <name> | styles     append a style preset / list presets
  paste                     append clipboard text to the prompt
  enhance                   let the model rewrite the prompt
  generate                  run the prompt
  history                   list images of this session
  select <n> | delete <n>   pick or remove a history row
  reset                     go back to the original image
  clear [yes]               drop the whole history
  zoom in|out|reset|<delta> change the zoom level
  pan <dx> <dy>             move a zoomed image
  compare                   toggle the before/after view
  slider <percent>          move the compare divider
  crop <ratio>              crop to 1:1, 16:9, 9:16, 4:3 or 3:2
  download [dir]            save the current image as PNG
  templates [query]         list or search saved prompts
  template <n>              use a listed template's prompt
  share <title>             save the current image and prompt as a template
  status                    show the session state
  quit";

fn required<'a>(
    rest: Option<&'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    rest.map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(CommandError::MissingArgument { command, argument })
}

fn number<T: FromStr>(value: &str, command: &'static str) -> Result<T, CommandError> {
    value.trim().parse().map_err(|_| CommandError::InvalidArgument {
        command,
        value: value.to_string(),
    })
}

fn row(rest: Option<&str>, command: &'static str) -> Result<usize, CommandError> {
    let value = required(rest, command, "a row number")?;
    match number::<usize>(value, command)? {
        0 => Err(CommandError::InvalidArgument {
            command,
            value: value.to_string(),
        }),
        n => Ok(n),
    }
}

fn optional(rest: Option<&str>) -> Option<String> {
    rest.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest)),
            None => (line, None),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "status" => Command::Status,
            "upload" | "open" => {
                Command::Upload(PathBuf::from(required(rest, "upload", "a file path")?))
            }
            "camera" => {
                let args = required(rest, "camera", "a snapshot path")?;
                let (source, rear) = match args.rsplit_once(char::is_whitespace) {
                    Some((source, flag)) if flag.eq_ignore_ascii_case("rear") => {
                        (source.trim(), true)
                    }
                    _ => (args, false),
                };
                Command::Camera {
                    source: PathBuf::from(source),
                    rear,
                }
            }
            "mode" => {
                let value = required(rest, "mode", "`edit` or `create`")?;
                Command::Mode(value.parse().map_err(|_| CommandError::InvalidArgument {
                    command: "mode",
                    value: value.to_string(),
                })?)
            }
            "prompt" => Command::Prompt(optional(rest)),
            "style" => Command::Style(required(rest, "style", "a preset name")?.to_string()),
            "styles" => Command::Styles,
            "paste" => Command::Paste,
            "enhance" => Command::Enhance,
            "generate" | "go" => Command::Generate,
            "history" => Command::History,
            "select" => Command::Select(row(rest, "select")?),
            "delete" => Command::Delete(row(rest, "delete")?),
            "clear" => Command::Clear {
                confirmed: rest.is_some_and(|arg| arg.trim().eq_ignore_ascii_case("yes")),
            },
            "reset" => Command::Reset,
            "zoom" => {
                let value = required(rest, "zoom", "in, out, reset or a wheel delta")?;
                Command::Zoom(match value.to_ascii_lowercase().as_str() {
                    "in" | "+" => ZoomCommand::In,
                    "out" | "-" => ZoomCommand::Out,
                    "reset" => ZoomCommand::Reset,
                    delta => ZoomCommand::Wheel(number(delta, "zoom")?),
                })
            }
            "pan" => {
                let args = required(rest, "pan", "dx and dy")?;
                let mut parts = args.split_whitespace();
                let (Some(dx), Some(dy), None) = (parts.next(), parts.next(), parts.next()) else {
                    return Err(CommandError::MissingArgument {
                        command: "pan",
                        argument: "dx and dy",
                    });
                };
                Command::Pan(Point::new(number(dx, "pan")?, number(dy, "pan")?))
            }
            "compare" => Command::Compare,
            "slider" => Command::Slider(number(required(rest, "slider", "a percentage")?, "slider")?),
            "crop" => {
                let value = required(rest, "crop", "an aspect ratio")?;
                Command::Crop(value.parse().map_err(|_| CommandError::InvalidArgument {
                    command: "crop",
                    value: value.to_string(),
                })?)
            }
            "download" | "save" => Command::Download(optional(rest).map(PathBuf::from)),
            "templates" => Command::Templates(optional(rest)),
            "template" => Command::Template(row(rest, "template")?),
            "share" => Command::Share(required(rest, "share", "a title")?.to_string()),
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}
