// SPDX-License-Identifier: MPL-2.0
//! Application controller: turns user actions into state transitions.
//!
//! The controller owns the asset history, the canvas viewport and the
//! template library, and talks to the model through an injected
//! [`GenerationClient`]. Every user-facing message it produces ends up in
//! either [`error`](AppController::error) (something failed) or a warning
//! taken with [`take_warning`](AppController::take_warning) (a notice that
//! does not block anything).
//!
//! # Generation flow
//!
//! [`begin_generation`](AppController::begin_generation) validates and marks
//! the controller busy, the caller (or [`generate`](AppController::generate))
//! performs the request, and
//! [`finish_generation`](AppController::finish_generation) applies the outcome
//! and clears the busy flag. `generate` additionally holds a guard so the flag
//! is cleared even when its future is dropped mid-request.

use crate::application::port::camera::{CameraDevice, CameraSession};
use crate::application::port::clipboard::{ClipboardError, ClipboardReader};
use crate::application::port::generation::{GenerationClient, GenerationError, GenerationOutput};
use crate::application::port::storage::KeyValueStore;
use crate::application::TemplateLibrary;
use crate::config::defaults::CAMERA_JPEG_QUALITY;
use crate::domain::asset::{AssetId, AssetOrigin, AssetStore, DeleteOutcome, MimeType};
use crate::domain::editing::AspectRatio;
use crate::domain::mode::Mode;
use crate::domain::prompt;
use crate::domain::template::{PromptTemplate, TemplateDraft, TemplateId};
use crate::domain::ui::ZoomStep;
use crate::error::{Error, Result};
use crate::media::{self, data_url, image_transform};
use crate::ui::history::{history_entries, HistoryEntry};
use crate::ui::state::CanvasViewport;
use chrono::{Local, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const UPLOAD_REJECTED: &str = "Please upload a valid image file (JPEG, PNG, WEBP).";
pub const NO_IMAGE_TO_EDIT: &str = "Please upload an image to edit.";
pub const NO_CONTENT: &str = "Failed to generate image. Try a different prompt.";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";
pub const CLIPBOARD_UNAVAILABLE: &str = "Could not access clipboard. Please use Ctrl+V / Cmd+V to paste.";
pub const PREVIEW_FAILED: &str = "Failed to process image. Please try another.";
pub const CLEAR_CONFIRMATION: &str =
    "Are you sure you want to delete all history? This will reset the application.";
pub const DEFAULT_SHARE_PROMPT: &str = "My AI Creation";

/// Whether a model request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Busy {
    #[default]
    Idle,
    Generating,
}

/// Why a generation request never left the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Prompt is empty or whitespace. Silent.
    EmptyPrompt,
    /// A request is already in flight. Silent.
    Busy,
    /// Edit mode without a current image. Surfaced as an error.
    NoImageToEdit,
}

/// Everything a validated request needs, captured when it was accepted.
#[derive(Debug, Clone)]
pub struct GenerationTicket {
    pub mode: Mode,
    pub prompt: String,
    /// Image to edit, absent in create mode.
    pub source: Option<(Arc<[u8]>, MimeType)>,
}

/// What a finished request did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationStatus {
    /// A new asset was added and is now current.
    Produced(AssetId),
    /// The model answered with text only; the error holds it.
    Declined(String),
    /// The model answered with nothing usable.
    NoContent,
    /// The request failed; the error holds the message.
    Failed(String),
}

/// Outcome of asking to clear the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearRequest {
    Cleared,
    /// More than one asset would be lost; call
    /// [`AppController::clear_all`] once the user agrees.
    NeedsConfirmation,
}

/// Prompt and image offered when sharing the current asset as a template.
#[derive(Debug, Clone)]
pub struct ShareDraft {
    pub prompt: String,
    pub image: Arc<[u8]>,
}

/// Restores a flag when dropped.
struct ResetOnDrop<'a, T: Copy> {
    slot: &'a mut T,
    idle: T,
}

impl<'a, T: Copy> ResetOnDrop<'a, T> {
    fn new(slot: &'a mut T, active: T, idle: T) -> Self {
        *slot = active;
        Self { slot, idle }
    }
}

impl<T: Copy> Drop for ResetOnDrop<'_, T> {
    fn drop(&mut self) {
        *self.slot = self.idle;
    }
}

pub struct AppController<C, S> {
    client: C,
    assets: AssetStore,
    viewport: CanvasViewport,
    templates: TemplateLibrary<S>,
    mode: Mode,
    busy: Busy,
    enhancing: bool,
    prompt: String,
    error: Option<String>,
    warning: Option<String>,
}

impl<C: GenerationClient, S: KeyValueStore> AppController<C, S> {
    /// Creates the controller, loading templates from `store`. A load
    /// problem is kept as a pending warning.
    pub fn new(client: C, store: S, zoom_step: ZoomStep) -> Self {
        let (templates, warning) = TemplateLibrary::load(store);
        Self {
            client,
            assets: AssetStore::new(),
            viewport: CanvasViewport::new(zoom_step),
            templates,
            mode: Mode::default(),
            busy: Busy::Idle,
            enhancing: false,
            prompt: String::new(),
            error: None,
            warning,
        }
    }

    // ---------------------------------------------------------------------
    // State access
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.refresh_compare();
    }

    #[must_use]
    pub fn busy(&self) -> Busy {
        self.busy
    }

    #[must_use]
    pub fn is_enhancing(&self) -> bool {
        self.enhancing
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Returns the pending notice, if any, and forgets it.
    pub fn take_warning(&mut self) -> Option<String> {
        self.warning.take()
    }

    #[must_use]
    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    #[must_use]
    pub fn viewport(&self) -> &CanvasViewport {
        &self.viewport
    }

    /// Pointer, zoom and slider handling go straight to the viewport.
    pub fn viewport_mut(&mut self) -> &mut CanvasViewport {
        &mut self.viewport
    }

    #[must_use]
    pub fn templates(&self) -> &TemplateLibrary<S> {
        &self.templates
    }

    // ---------------------------------------------------------------------
    // Assets
    // ---------------------------------------------------------------------

    /// Adds an uploaded image and starts a new edit session on it.
    ///
    /// Non-image input sets the upload error and changes nothing else.
    pub fn upload(&mut self, bytes: Vec<u8>, declared_mime: Option<&str>) -> Result<AssetId> {
        let Some(mime_type) = image_transform::accept_upload(&bytes, declared_mime) else {
            tracing::info!(?declared_mime, "upload rejected");
            self.error = Some(UPLOAD_REJECTED.to_string());
            return Err(Error::Validation(UPLOAD_REJECTED.to_string()));
        };
        Ok(self.start_session(bytes, mime_type))
    }

    /// Reads `path` and uploads it. A known image extension is passed on as
    /// the declared type; the content must still be an image either way.
    pub fn upload_file(&mut self, path: &Path) -> Result<AssetId> {
        let bytes = std::fs::read(path)
            .map_err(|e| Error::Io(format!("Failed to read {}: {e}", path.display())))?;
        let declared = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(image_transform::mime_from_extension)
            .map(|mime| mime.to_string());
        self.upload(bytes, declared.as_deref())
    }

    /// Grabs a frame from an open camera session and starts a new edit
    /// session on it. The session stays open; closing it is up to the caller.
    pub fn capture_from_camera<D: CameraDevice>(
        &mut self,
        session: &mut CameraSession<D>,
    ) -> Result<AssetId> {
        let frame = session.capture().map_err(|e| Error::Io(e.to_string()))?;
        let encoded =
            image_transform::frame_to_jpeg(&frame, session.facing().is_mirrored(), CAMERA_JPEG_QUALITY)?;
        Ok(self.start_session(encoded.bytes, encoded.mime_type))
    }

    fn start_session(&mut self, bytes: Vec<u8>, mime_type: MimeType) -> AssetId {
        let id = self
            .assets
            .add_root_asset(bytes, mime_type, AssetOrigin::Uploaded, None);
        self.error = None;
        self.mode = Mode::Edit;
        self.sync_viewport();
        tracing::info!(%id, "edit session started");
        id
    }

    pub fn select(&mut self, id: AssetId) -> bool {
        let selected = self.assets.select_current(id);
        self.sync_viewport();
        selected
    }

    /// Shows the original again. Clears the error when there was one.
    pub fn reset_to_original(&mut self) -> bool {
        let reset = self.assets.reset_to_original();
        if reset {
            self.error = None;
        }
        self.sync_viewport();
        reset
    }

    /// Deletes one asset. Deleting the last one resets the session like
    /// [`clear_all`](Self::clear_all).
    pub fn delete(&mut self, id: AssetId) -> DeleteOutcome {
        let outcome = self.assets.delete_asset(id);
        if outcome == DeleteOutcome::Emptied {
            self.reset_session();
        }
        self.sync_viewport();
        outcome
    }

    /// Clears immediately unless more than one asset would be lost.
    pub fn request_clear(&mut self) -> ClearRequest {
        if self.assets.len() > 1 {
            ClearRequest::NeedsConfirmation
        } else {
            self.clear_all();
            ClearRequest::Cleared
        }
    }

    /// Drops every asset and resets prompt and error.
    pub fn clear_all(&mut self) {
        self.assets.clear_all();
        self.reset_session();
        self.sync_viewport();
        tracing::info!("history cleared");
    }

    fn reset_session(&mut self) {
        self.prompt.clear();
        self.error = None;
    }

    /// Adds a centered crop of the current image as a new asset.
    pub fn crop_current(&mut self, ratio: AspectRatio) -> Result<AssetId> {
        let current = self
            .assets
            .current()
            .ok_or_else(|| Error::Validation(NO_IMAGE_TO_EDIT.to_string()))?;
        let cropped = image_transform::crop_to_aspect(current.bytes(), ratio)?;
        let id = self.assets.add_asset(
            cropped.bytes,
            cropped.mime_type,
            AssetOrigin::Generated,
            Some(ratio.crop_label()),
        );
        self.error = None;
        self.sync_viewport();
        Ok(id)
    }

    /// Writes the current image into `dir`.
    pub fn export_current(&self, dir: &Path) -> Result<PathBuf> {
        let current = self
            .assets
            .current()
            .ok_or_else(|| Error::Validation("Nothing to download yet.".to_string()))?;
        media::export_asset(current, dir, Utc::now())
    }

    #[must_use]
    pub fn history(&self) -> Vec<HistoryEntry> {
        history_entries(&self.assets, &Local)
    }

    // ---------------------------------------------------------------------
    // Viewport
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn can_compare(&self) -> bool {
        CanvasViewport::can_compare(self.assets.current_id(), self.assets.original_id(), self.mode)
    }

    pub fn toggle_compare(&mut self) -> bool {
        let available = self.can_compare();
        self.viewport.toggle_compare(available)
    }

    fn refresh_compare(&mut self) {
        if self.viewport.compare_enabled() && !self.can_compare() {
            self.viewport.toggle_compare(false);
        }
    }

    fn sync_viewport(&mut self) {
        self.viewport
            .on_image_changed(self.assets.current_id(), self.assets.original_id());
        self.refresh_compare();
    }

    // ---------------------------------------------------------------------
    // Generation
    // ---------------------------------------------------------------------

    /// Validates the request and marks the controller busy.
    pub fn begin_generation(&mut self) -> std::result::Result<GenerationTicket, Rejection> {
        if self.busy == Busy::Generating {
            return Err(Rejection::Busy);
        }
        if prompt::is_blank(&self.prompt) {
            return Err(Rejection::EmptyPrompt);
        }
        let source = match self.mode {
            Mode::Edit => {
                let Some(current) = self.assets.current() else {
                    self.error = Some(NO_IMAGE_TO_EDIT.to_string());
                    return Err(Rejection::NoImageToEdit);
                };
                Some((current.bytes_arc(), current.mime_type().clone()))
            }
            Mode::Create => None,
        };

        self.busy = Busy::Generating;
        self.error = None;
        tracing::info!(mode = %self.mode, "generation started");
        Ok(GenerationTicket {
            mode: self.mode,
            prompt: self.prompt.clone(),
            source,
        })
    }

    /// Applies the outcome of a request and clears the busy flag.
    pub fn finish_generation(
        &mut self,
        ticket: GenerationTicket,
        result: std::result::Result<GenerationOutput, GenerationError>,
    ) -> GenerationStatus {
        self.busy = Busy::Idle;

        let status = match result {
            Ok(GenerationOutput {
                image: Some(image), ..
            }) => {
                let label = Some(ticket.prompt);
                let id = match ticket.mode {
                    Mode::Create => self.assets.add_root_asset(
                        image.bytes,
                        image.mime_type,
                        AssetOrigin::Generated,
                        label,
                    ),
                    Mode::Edit => self.assets.add_asset(
                        image.bytes,
                        image.mime_type,
                        AssetOrigin::Generated,
                        label,
                    ),
                };
                self.sync_viewport();
                GenerationStatus::Produced(id)
            }
            Ok(GenerationOutput {
                image: None,
                text: Some(text),
            }) => {
                self.error = Some(format!(
                    "The model responded with text instead of an image: \"{text}\""
                ));
                GenerationStatus::Declined(text)
            }
            Ok(_) => {
                self.error = Some(NO_CONTENT.to_string());
                GenerationStatus::NoContent
            }
            Err(err) => {
                let message = err.to_string();
                let message = if message.trim().is_empty() {
                    UNEXPECTED_ERROR.to_string()
                } else {
                    message
                };
                self.error = Some(message.clone());
                GenerationStatus::Failed(message)
            }
        };

        tracing::info!(?status, "generation finished");
        status
    }

    /// Validates, calls the model and applies the outcome.
    pub async fn generate(&mut self) -> std::result::Result<GenerationStatus, Rejection> {
        let ticket = self.begin_generation()?;
        let result = {
            let _busy = ResetOnDrop::new(&mut self.busy, Busy::Generating, Busy::Idle);
            match &ticket.source {
                Some((bytes, mime_type)) => {
                    self.client
                        .edit_image(bytes, mime_type, &ticket.prompt)
                        .await
                }
                None => self.client.generate_image(&ticket.prompt).await,
            }
        };
        Ok(self.finish_generation(ticket, result))
    }

    // ---------------------------------------------------------------------
    // Prompt
    // ---------------------------------------------------------------------

    /// Rewrites the prompt with the model. Failures keep the prompt as it
    /// was. Returns whether the prompt changed.
    pub async fn enhance_prompt(&mut self) -> bool {
        if self.enhancing || prompt::is_blank(&self.prompt) {
            return false;
        }
        let result = {
            let _enhancing = ResetOnDrop::new(&mut self.enhancing, true, false);
            self.client.enhance_prompt(&self.prompt).await
        };
        match result {
            Ok(enhanced) if !prompt::is_blank(&enhanced) => {
                self.prompt = enhanced.trim().to_string();
                true
            }
            Ok(_) => false,
            Err(err) => {
                tracing::warn!(%err, "prompt enhancement failed");
                false
            }
        }
    }

    pub fn add_style(&mut self, style: &str) {
        self.prompt = prompt::append_style(&self.prompt, style);
    }

    /// Merges clipboard text into the prompt. An unreadable clipboard leaves
    /// a notice asking for a manual paste.
    pub fn paste_prompt<R: ClipboardReader>(&mut self, clipboard: &mut R) -> bool {
        match clipboard.read_text() {
            Ok(text) => {
                self.prompt = prompt::append_pasted(&self.prompt, &text);
                true
            }
            Err(ClipboardError::Empty) => false,
            Err(err) => {
                tracing::warn!(%err, "clipboard read failed");
                self.warning = Some(CLIPBOARD_UNAVAILABLE.to_string());
                false
            }
        }
    }

    // ---------------------------------------------------------------------
    // Templates
    // ---------------------------------------------------------------------

    /// Copies the template's prompt into the prompt field.
    pub fn select_template(&mut self, id: &TemplateId) -> bool {
        match self.templates.get(id) {
            Some(template) => {
                self.prompt = template.prompt.clone();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn search_templates(&self, query: &str) -> Vec<&PromptTemplate> {
        self.templates.search(query)
    }

    /// Stores a new template with `preview` downscaled to a JPEG thumbnail.
    /// A failed save keeps the template for this session and leaves a
    /// warning.
    pub fn add_template(&mut self, title: &str, prompt: &str, preview: &[u8]) -> Result<TemplateId> {
        let thumbnail = image_transform::preview_thumbnail(preview).map_err(|err| {
            tracing::warn!(%err, "template preview rejected");
            Error::Validation(PREVIEW_FAILED.to_string())
        })?;
        let template = TemplateDraft {
            title: title.trim().to_string(),
            prompt: prompt.trim().to_string(),
            preview_image: Some(data_url::encode(&thumbnail.bytes, &thumbnail.mime_type)),
        }
        .into_template()
        .map_err(|err| Error::Validation(err.to_string()))?;

        let id = template.id.clone();
        if let Some(warning) = self.templates.add(template) {
            self.warning = Some(warning);
        }
        Ok(id)
    }

    /// Prompt and image for sharing the current asset: its label, else the
    /// prompt field, else a generic caption.
    #[must_use]
    pub fn share_draft(&self) -> Option<ShareDraft> {
        let current = self.assets.current()?;
        let prompt = current
            .label()
            .filter(|label| !prompt::is_blank(label))
            .map(str::to_string)
            .or_else(|| (!prompt::is_blank(&self.prompt)).then(|| self.prompt.clone()))
            .unwrap_or_else(|| DEFAULT_SHARE_PROMPT.to_string());
        Some(ShareDraft {
            prompt,
            image: current.bytes_arc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::camera::tests::FakeCamera;
    use crate::infrastructure::storage::MemoryStore;
    use crate::test_utils::{png_bytes, ScriptedClient};

    fn controller(client: ScriptedClient) -> AppController<ScriptedClient, MemoryStore> {
        AppController::new(client, MemoryStore::new(), ZoomStep::default())
    }

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime")
            .block_on(future)
    }

    struct FixedClipboard(std::result::Result<String, ClipboardError>);

    impl ClipboardReader for FixedClipboard {
        fn read_text(&mut self) -> std::result::Result<String, ClipboardError> {
            self.0.clone()
        }
    }

    #[test]
    fn upload_starts_edit_session() {
        let mut app = controller(ScriptedClient::default());
        app.set_mode(Mode::Create);
        let id = app.upload(png_bytes(4, 4), Some("image/png")).unwrap();
        assert_eq!(app.assets().current_id(), Some(id));
        assert_eq!(app.assets().original_id(), Some(id));
        assert_eq!(app.mode(), Mode::Edit);
        assert!(app.error().is_none());
    }

    #[test]
    fn non_image_upload_is_rejected_without_state_change() {
        let mut app = controller(ScriptedClient::default());
        let first = app.upload(png_bytes(4, 4), None).unwrap();

        let err = app.upload(b"hello".to_vec(), Some("text/plain")).unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(app.error(), Some(UPLOAD_REJECTED));
        assert_eq!(app.assets().len(), 1);
        assert_eq!(app.assets().current_id(), Some(first));
    }

    #[test]
    fn text_file_with_image_extension_is_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("notes.png");
        std::fs::write(&path, b"just some text, not an image").unwrap();
        let mut app = controller(ScriptedClient::default());

        assert!(matches!(app.upload_file(&path), Err(Error::Validation(_))));
        assert_eq!(app.error(), Some(UPLOAD_REJECTED));
        assert!(app.assets().is_empty());
    }

    #[test]
    fn upload_file_stores_sniffed_type() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("photo.jpg");
        std::fs::write(&path, png_bytes(3, 3)).unwrap();
        let mut app = controller(ScriptedClient::default());

        let id = app.upload_file(&path).unwrap();
        assert_eq!(app.assets().get(id).unwrap().mime_type(), &MimeType::png());
    }

    #[test]
    fn edit_without_image_sets_error() {
        let client = ScriptedClient::default();
        let mut app = controller(client.clone());
        app.set_prompt("make it blue");
        assert_eq!(block_on(app.generate()), Err(Rejection::NoImageToEdit));
        assert_eq!(app.error(), Some(NO_IMAGE_TO_EDIT));
        assert_eq!(client.calls(), 0);
        assert_eq!(app.busy(), Busy::Idle);
    }

    #[test]
    fn busy_controller_rejects_second_request_silently() {
        let mut app = controller(ScriptedClient::default());
        app.set_mode(Mode::Create);
        app.set_prompt("a lighthouse");
        let ticket = app.begin_generation().unwrap();
        assert_eq!(app.busy(), Busy::Generating);

        assert!(matches!(app.begin_generation(), Err(Rejection::Busy)));
        assert!(app.error().is_none());

        app.finish_generation(ticket, Err(GenerationError::Transport("reset".into())));
        assert_eq!(app.busy(), Busy::Idle);
    }

    #[test]
    fn edit_result_becomes_current_but_not_original() {
        let client = ScriptedClient::default();
        client.push(Ok(GenerationOutput::with_image(png_bytes(2, 2), MimeType::png())));
        let mut app = controller(client.clone());
        let a = app.upload(png_bytes(4, 4), None).unwrap();
        app.set_prompt("add a hat");

        let status = block_on(app.generate()).unwrap();

        let GenerationStatus::Produced(b) = status else {
            panic!("expected an image, got {status:?}");
        };
        assert_eq!(app.assets().current_id(), Some(b));
        assert_eq!(app.assets().original_id(), Some(a));
        assert_eq!(app.assets().current().unwrap().label(), Some("add a hat"));
        assert_eq!(client.edit_calls(), 1);
        assert!(app.can_compare());
    }

    #[test]
    fn create_result_becomes_original() {
        let client = ScriptedClient::default();
        client.push(Ok(GenerationOutput::with_image(png_bytes(2, 2), MimeType::png())));
        client.push(Ok(GenerationOutput::with_image(png_bytes(3, 3), MimeType::png())));
        let mut app = controller(client.clone());
        app.set_mode(Mode::Create);
        app.set_prompt("a fox");

        let GenerationStatus::Produced(first) = block_on(app.generate()).unwrap() else {
            panic!("expected an image");
        };
        let GenerationStatus::Produced(second) = block_on(app.generate()).unwrap() else {
            panic!("expected an image");
        };

        assert_eq!(app.assets().original_id(), Some(second));
        assert_ne!(first, second);
        assert_eq!(client.edit_calls(), 0);
        assert!(!app.can_compare());
    }

    #[test]
    fn empty_answer_is_no_content_error() {
        let client = ScriptedClient::default();
        client.push(Ok(GenerationOutput::default()));
        let mut app = controller(client);
        app.set_mode(Mode::Create);
        app.set_prompt("anything");

        assert_eq!(block_on(app.generate()), Ok(GenerationStatus::NoContent));
        assert_eq!(app.error(), Some(NO_CONTENT));
        assert!(app.assets().is_empty());
    }

    #[test]
    fn transport_error_is_surfaced_and_clears_busy() {
        let client = ScriptedClient::default();
        client.push(Err(GenerationError::Transport("connection reset".into())));
        let mut app = controller(client);
        app.set_mode(Mode::Create);
        app.set_prompt("anything");

        let status = block_on(app.generate()).unwrap();

        assert_eq!(status, GenerationStatus::Failed("Network error: connection reset".into()));
        assert_eq!(app.error(), Some("Network error: connection reset"));
        assert_eq!(app.busy(), Busy::Idle);
    }

    #[test]
    fn dropped_generation_future_clears_busy() {
        let client = ScriptedClient::pending();
        let mut app = controller(client);
        app.set_mode(Mode::Create);
        app.set_prompt("never answered");

        block_on(async {
            let outcome =
                tokio::time::timeout(std::time::Duration::from_millis(10), app.generate()).await;
            assert!(outcome.is_err());
        });

        assert_eq!(app.busy(), Busy::Idle);
    }

    #[test]
    fn delete_last_asset_resets_prompt_and_error() {
        let mut app = controller(ScriptedClient::default());
        let id = app.upload(png_bytes(2, 2), None).unwrap();
        app.set_prompt("keep?");
        assert_eq!(app.delete(id), DeleteOutcome::Emptied);
        assert!(app.assets().is_empty());
        assert_eq!(app.prompt(), "");
    }

    #[test]
    fn clear_needs_confirmation_with_several_assets() {
        let mut app = controller(ScriptedClient::default());
        app.upload(png_bytes(2, 2), None).unwrap();
        assert_eq!(app.request_clear(), ClearRequest::Cleared);

        app.upload(png_bytes(2, 2), None).unwrap();
        app.crop_current(AspectRatio::Square).unwrap();
        assert_eq!(app.request_clear(), ClearRequest::NeedsConfirmation);
        assert_eq!(app.assets().len(), 2);
        app.clear_all();
        assert!(app.assets().is_empty());
    }

    #[test]
    fn crop_adds_labeled_asset_and_resets_view() {
        let mut app = controller(ScriptedClient::default());
        let original = app.upload(png_bytes(160, 90), None).unwrap();
        app.viewport_mut().zoom_in();

        let id = app.crop_current(AspectRatio::Square).unwrap();

        let asset = app.assets().current().unwrap();
        assert_eq!(asset.id(), id);
        assert_eq!(asset.label(), Some("Crop 1:1"));
        assert_eq!(app.assets().original_id(), Some(original));
        assert!(app.viewport().scale().is_min());
        let decoded = image_transform::decode(asset.bytes()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (90, 90));
    }

    #[test]
    fn compare_turns_off_when_switching_to_create() {
        let mut app = controller(ScriptedClient::default());
        app.upload(png_bytes(8, 8), None).unwrap();
        app.crop_current(AspectRatio::Square).unwrap();
        assert!(app.toggle_compare());

        app.set_mode(Mode::Create);
        assert!(!app.viewport().compare_enabled());
        assert!(!app.toggle_compare());
    }

    #[test]
    fn enhance_replaces_prompt_and_keeps_it_on_failure() {
        let client = ScriptedClient::default();
        client.push_enhancement(Ok("  A detailed watercolor fox  ".into()));
        client.push_enhancement(Err(GenerationError::Transport("offline".into())));
        let mut app = controller(client);

        app.set_prompt("fox");
        assert!(block_on(app.enhance_prompt()));
        assert_eq!(app.prompt(), "A detailed watercolor fox");

        assert!(!block_on(app.enhance_prompt()));
        assert_eq!(app.prompt(), "A detailed watercolor fox");
        assert!(!app.is_enhancing());
        assert!(app.error().is_none());
    }

    #[test]
    fn enhance_skips_blank_prompt() {
        let client = ScriptedClient::default();
        let mut app = controller(client.clone());
        assert!(!block_on(app.enhance_prompt()));
        assert_eq!(client.calls(), 0);
    }

    #[test]
    fn paste_replaces_blank_and_appends_otherwise() {
        let mut app = controller(ScriptedClient::default());
        let mut clipboard = FixedClipboard(Ok("neon lights".into()));
        assert!(app.paste_prompt(&mut clipboard));
        assert_eq!(app.prompt(), "neon lights");
        assert!(app.paste_prompt(&mut clipboard));
        assert_eq!(app.prompt(), "neon lights neon lights");
    }

    #[test]
    fn unavailable_clipboard_leaves_notice() {
        let mut app = controller(ScriptedClient::default());
        app.set_prompt("keep me");
        let mut clipboard = FixedClipboard(Err(ClipboardError::Unavailable("denied".into())));
        assert!(!app.paste_prompt(&mut clipboard));
        assert_eq!(app.prompt(), "keep me");
        assert_eq!(app.take_warning().as_deref(), Some(CLIPBOARD_UNAVAILABLE));
        assert!(app.take_warning().is_none());
    }

    #[test]
    fn styles_append_with_commas() {
        let mut app = controller(ScriptedClient::default());
        app.add_style("Anime");
        app.add_style("4K");
        assert_eq!(app.prompt(), "Anime, 4K");
    }

    #[test]
    fn add_template_stores_thumbnail_first() {
        let mut app = controller(ScriptedClient::default());
        let id = app
            .add_template("Night city", "neon reflections", &png_bytes(800, 400))
            .unwrap();

        let first = &app.templates().templates()[0];
        assert_eq!(first.id, id);
        let (mime, bytes) = data_url::decode(&first.preview_image).unwrap();
        assert_eq!(mime, MimeType::jpeg());
        let preview = image_transform::decode(&bytes).unwrap();
        assert_eq!((preview.width(), preview.height()), (400, 200));

        assert!(app.select_template(&id));
        assert_eq!(app.prompt(), "neon reflections");
    }

    #[test]
    fn add_template_validates_fields_and_preview() {
        let mut app = controller(ScriptedClient::default());
        assert!(matches!(
            app.add_template(" ", "p", &png_bytes(2, 2)),
            Err(Error::Validation(_))
        ));
        assert_eq!(
            app.add_template("t", "p", b"not an image").unwrap_err().to_string(),
            PREVIEW_FAILED
        );
        assert_eq!(app.templates().len(), 3);
    }

    #[test]
    fn share_draft_prefers_label_then_prompt() {
        let client = ScriptedClient::default();
        client.push(Ok(GenerationOutput::with_image(png_bytes(2, 2), MimeType::png())));
        let mut app = controller(client);
        assert!(app.share_draft().is_none());

        app.upload(png_bytes(2, 2), None).unwrap();
        assert_eq!(app.share_draft().unwrap().prompt, DEFAULT_SHARE_PROMPT);

        app.set_prompt("golden hour");
        assert_eq!(app.share_draft().unwrap().prompt, "golden hour");

        block_on(app.generate()).unwrap();
        app.set_prompt("something else");
        assert_eq!(app.share_draft().unwrap().prompt, "golden hour");
    }

    #[test]
    fn camera_capture_starts_session_with_jpeg() {
        let mut app = controller(ScriptedClient::default());
        let mut session = CameraSession::open(FakeCamera::new(0));

        let id = app.capture_from_camera(&mut session).unwrap();
        session.close();

        let asset = app.assets().get(id).unwrap();
        assert_eq!(asset.mime_type(), &MimeType::jpeg());
        assert_eq!(app.assets().original_id(), Some(id));
        assert_eq!(app.mode(), Mode::Edit);
    }

    #[test]
    fn camera_capture_without_stream_fails() {
        let mut app = controller(ScriptedClient::default());
        let mut session = CameraSession::open(FakeCamera::new(1));
        assert!(app.capture_from_camera(&mut session).is_err());
        assert!(app.assets().is_empty());
    }

    #[test]
    fn export_requires_current_asset() {
        let app = controller(ScriptedClient::default());
        let temp = tempfile::tempdir().unwrap();
        assert!(app.export_current(temp.path()).is_err());
    }
}
