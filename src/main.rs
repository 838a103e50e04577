// SPDX-License-Identifier: MPL-2.0
use image_genie::app::controller::CLEAR_CONFIRMATION;
use image_genie::app::{paths, AppController, ClearRequest, GenerationStatus, Rejection};
use image_genie::application::port::camera::CameraSession;
use image_genie::application::port::generation::{
    GenerationClient, GenerationError, GenerationOutput,
};
use image_genie::config::{self, Config, DEFAULT_STORAGE_QUOTA_BYTES};
use image_genie::domain::asset::{AssetId, MimeType};
use image_genie::domain::mode::Mode;
use image_genie::domain::prompt::{self, STYLE_PRESETS};
use image_genie::domain::template::TemplateId;
use image_genie::domain::ui::ZoomStep;
use image_genie::infrastructure::{FileStore, GeminiClient, StillImageCamera, SystemClipboard};
use image_genie::media::data_url;
use image_genie::ui::command::{Command, ZoomCommand, HELP};
use std::io::Write;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "IMAGE_GENIE_LOG";

const USAGE: &str = "\
Usage: image-genie [OPTIONS] [IMAGE]

Options:
  --data-dir <DIR>     where templates are stored
  --config-dir <DIR>   where settings.toml is read from
  --mode <edit|create> starting mode
  -h, --help           print this help";

struct Args {
    data_dir: Option<String>,
    config_dir: Option<String>,
    mode: Option<Mode>,
    image: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let parsed = Args {
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        mode: args.opt_value_from_str("--mode")?,
        image: args.opt_free_from_str()?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring extra arguments");
    }
    Ok(Some(parsed))
}

/// Model backend for the session. Without credentials every request fails
/// with the configuration message, so the rest of the tool stays usable.
enum Backend {
    Gemini(GeminiClient),
    Unconfigured(GenerationError),
}

impl GenerationClient for Backend {
    async fn edit_image(
        &self,
        image: &[u8],
        mime_type: &MimeType,
        prompt: &str,
    ) -> Result<GenerationOutput, GenerationError> {
        match self {
            Backend::Gemini(client) => client.edit_image(image, mime_type, prompt).await,
            Backend::Unconfigured(err) => Err(err.clone()),
        }
    }

    async fn generate_image(&self, prompt: &str) -> Result<GenerationOutput, GenerationError> {
        match self {
            Backend::Gemini(client) => client.generate_image(prompt).await,
            Backend::Unconfigured(err) => Err(err.clone()),
        }
    }

    async fn enhance_prompt(&self, prompt: &str) -> Result<String, GenerationError> {
        match self {
            Backend::Gemini(client) => client.enhance_prompt(prompt).await,
            Backend::Unconfigured(err) => Err(err.clone()),
        }
    }
}

struct Session {
    app: AppController<Backend, FileStore>,
    config: Config,
    /// Template ids in the order of the last listing.
    listed: Vec<TemplateId>,
    input: Lines<BufReader<Stdin>>,
}

impl Session {
    /// Prints `question` and reads one line. Only `y`/`yes` count as yes.
    async fn ask(&mut self, question: &str) -> bool {
        print!("{question} [y/N] ");
        let _ = std::io::stdout().flush();
        match self.input.next_line().await {
            Ok(Some(answer)) => {
                matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
            }
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(%err, "stdin read failed");
                false
            }
        }
    }

    fn report(&mut self) {
        if let Some(warning) = self.app.take_warning() {
            println!("! {warning}");
        }
        if let Some(error) = self.app.error() {
            println!("error: {error}");
            self.app.dismiss_error();
        }
    }

    fn print_status(&self) {
        let assets = self.app.assets();
        let position = assets
            .current_id()
            .and_then(|id| assets.position(id))
            .map_or_else(|| "none".to_string(), |i| format!("{}/{}", i + 1, assets.len()));
        let viewport = self.app.viewport();
        println!("mode:    {}", self.app.mode());
        println!("image:   {position}");
        println!("prompt:  {}", self.app.prompt());
        println!(
            "view:    {}% pan {:.0},{:.0}",
            viewport.scale().as_percent(),
            viewport.pan().x,
            viewport.pan().y
        );
        if viewport.compare_enabled() {
            println!("compare: on, divider at {:.1}%", viewport.slider().value());
        } else if self.app.can_compare() {
            println!("compare: available");
        }
    }

    fn print_history(&self) {
        let rows = self.app.history();
        if rows.is_empty() {
            println!("No images yet. Use `upload <path>` or switch to create mode.");
        }
        for (index, row) in rows.iter().enumerate() {
            let marker = if row.is_selected { '*' } else { ' ' };
            println!("{marker} {:>2}. {}  {}", index + 1, row.time, row.title);
        }
    }

    fn list_templates(&mut self, query: Option<&str>) {
        let found = self.app.search_templates(query.unwrap_or(""));
        if found.is_empty() {
            println!("No templates match.");
        }
        for (index, template) in found.iter().enumerate() {
            let preview = data_url::decode(&template.preview_image)
                .map_or_else(|| "no preview".to_string(), |(mime, bytes)| {
                    format!("{mime}, {} KiB", bytes.len().div_ceil(1024))
                });
            println!("{:>2}. {} ({preview})", index + 1, template.title);
            println!("    {}", template.prompt);
        }
        self.listed = found.into_iter().map(|template| template.id.clone()).collect();
    }

    fn row_id(&self, row: usize) -> Option<AssetId> {
        self.app.history().get(row - 1).map(|entry| entry.id)
    }

    async fn run(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Help => println!("{HELP}"),
            Command::Status => self.print_status(),
            Command::Quit => return ControlFlow::Break(()),

            Command::Upload(path) => match self.app.upload_file(&path) {
                Ok(id) => println!("Loaded {} as {id}.", path.display()),
                // Rejected uploads are reported through the controller error.
                Err(err) if self.app.error().is_none() => println!("error: {err}"),
                Err(_) => {}
            },
            Command::Camera { source, rear } => {
                let mut camera = CameraSession::open(StillImageCamera::new(source));
                if rear {
                    camera.toggle_facing();
                }
                while let Some(err) = camera.error() {
                    println!("error: {err}");
                    if !self.ask("Retry?").await {
                        break;
                    }
                    camera.retry();
                }
                if camera.is_active() {
                    match self.app.capture_from_camera(&mut camera) {
                        Ok(id) => println!("Captured {id}."),
                        Err(err) => println!("error: {err}"),
                    }
                }
                camera.close();
            }
            Command::Mode(mode) => {
                self.app.set_mode(mode);
                println!("Mode: {mode}");
            }

            Command::Prompt(None) => println!("{}", self.app.prompt()),
            Command::Prompt(Some(text)) => self.app.set_prompt(text),
            Command::Style(name) => match prompt::find_style(&name) {
                Some(style) => {
                    self.app.add_style(style);
                    println!("{}", self.app.prompt());
                }
                None => println!("Unknown style. Try `styles`."),
            },
            Command::Styles => println!("{}", STYLE_PRESETS.join(", ")),
            Command::Paste => {
                if self.app.paste_prompt(&mut SystemClipboard::new()) {
                    println!("{}", self.app.prompt());
                }
            }
            Command::Enhance => {
                println!("Enhancing...");
                if self.app.enhance_prompt().await {
                    println!("{}", self.app.prompt());
                } else {
                    println!("Prompt unchanged.");
                }
            }
            Command::Generate => {
                println!("Generating...");
                match self.app.generate().await {
                    Ok(GenerationStatus::Produced(id)) => println!("New image {id}."),
                    Ok(_) | Err(Rejection::NoImageToEdit) => {}
                    Err(Rejection::EmptyPrompt) => println!("Enter a prompt first."),
                    Err(Rejection::Busy) => println!("A request is already running."),
                }
            }

            Command::History => self.print_history(),
            Command::Select(row) => match self.row_id(row) {
                Some(id) => {
                    self.app.select(id);
                    self.print_history();
                }
                None => println!("No such row."),
            },
            Command::Delete(row) => match self.row_id(row) {
                Some(id) => {
                    self.app.delete(id);
                    self.print_history();
                }
                None => println!("No such row."),
            },
            Command::Reset => {
                if !self.app.reset_to_original() {
                    println!("Nothing to reset.");
                }
            }
            Command::Clear { confirmed } => {
                if confirmed {
                    self.app.clear_all();
                } else if self.app.request_clear() == ClearRequest::NeedsConfirmation {
                    println!("{CLEAR_CONFIRMATION}");
                    println!("Type `clear yes` to confirm.");
                }
            }

            Command::Zoom(zoom) => {
                let viewport = self.app.viewport_mut();
                match zoom {
                    ZoomCommand::In => {
                        viewport.zoom_in();
                    }
                    ZoomCommand::Out => {
                        viewport.zoom_out();
                    }
                    ZoomCommand::Reset => viewport.reset_view(),
                    ZoomCommand::Wheel(delta) => {
                        viewport.wheel(delta);
                    }
                }
                println!("Zoom {}%", viewport.scale().as_percent());
            }
            Command::Pan(delta) => {
                if !self.app.viewport_mut().pan_by(delta) {
                    println!("Zoom in to pan.");
                }
            }
            Command::Compare => {
                if self.app.toggle_compare() {
                    println!("Compare on.");
                } else if self.app.can_compare() {
                    println!("Compare off.");
                } else {
                    println!("Compare needs an edited image in edit mode.");
                }
            }
            Command::Slider(percent) => {
                if self.app.viewport().compare_enabled() {
                    let viewport = self.app.viewport_mut();
                    viewport.set_slider(percent);
                    println!("Divider at {:.1}%", viewport.slider().value());
                } else {
                    println!("Turn compare on first.");
                }
            }
            Command::Crop(ratio) => match self.app.crop_current(ratio) {
                Ok(_) => println!("Cropped to {}.", ratio.label()),
                Err(err) => println!("error: {err}"),
            },
            Command::Download(dir) => {
                let dir = dir.unwrap_or_else(|| self.config.download_dir());
                match self.app.export_current(&dir) {
                    Ok(path) => println!("Saved {}", path.display()),
                    Err(err) => println!("error: {err}"),
                }
            }

            Command::Templates(query) => self.list_templates(query.as_deref()),
            Command::Template(row) => {
                if self.listed.is_empty() {
                    self.listed = self
                        .app
                        .templates()
                        .templates()
                        .iter()
                        .map(|template| template.id.clone())
                        .collect();
                }
                match self.listed.get(row - 1).cloned() {
                    Some(id) if self.app.select_template(&id) => println!("{}", self.app.prompt()),
                    _ => println!("No such template."),
                }
            }
            Command::Share(title) => match self.app.share_draft() {
                Some(draft) => match self.app.add_template(&title, &draft.prompt, &draft.image) {
                    Ok(_) => println!("Saved template \"{title}\"."),
                    Err(err) => println!("error: {err}"),
                },
                None => println!("Nothing to share yet."),
            },
        }
        ControlFlow::Continue(())
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(args.data_dir, args.config_dir);

    let config = config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "using default settings");
        Config::default()
    });

    let backend = match GeminiClient::from_config(&config) {
        Ok(client) => Backend::Gemini(client),
        Err(err) => {
            eprintln!("{err}");
            Backend::Unconfigured(err)
        }
    };

    let store = match FileStore::in_data_dir(None, DEFAULT_STORAGE_QUOTA_BYTES) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Cannot open template storage: {err}");
            return ExitCode::FAILURE;
        }
    };

    let app = AppController::new(backend, store, ZoomStep::new(config.zoom_step()));
    let mut session = Session {
        app,
        config,
        listed: Vec::new(),
        input: BufReader::new(tokio::io::stdin()).lines(),
    };

    if let Some(mode) = args.mode {
        session.app.set_mode(mode);
    }
    if let Some(path) = args.image {
        if let Err(err) = session.app.upload_file(&path) {
            if session.app.error().is_none() {
                eprintln!("{err}");
            }
        }
    }
    session.report();
    println!("Type `help` for commands.");

    loop {
        print!("[{}] > ", session.app.mode());
        // A failed flush only delays the prompt.
        let _ = std::io::stdout().flush();

        let line = match session.input.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                tracing::error!(%err, "stdin read failed");
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if session.run(command).await.is_break() {
                    break;
                }
            }
            Err(err) => println!("{err}"),
        }
        session.report();
    }

    ExitCode::SUCCESS
}
