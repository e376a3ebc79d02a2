use iced::{Element, Task, Theme};
use iced::widget::{button, column, container, image, row, scrollable, text, Column};
use iced::{Alignment, Length};
use rfd::{FileDialog, MessageDialog, MessageLevel};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

// Declare the application modules
mod preview;
mod scan;
mod state;
mod ui;

use preview::ImagePreview;
use scan::{ScanClient, ScanError, ScanOutcome};
use state::data::SelectedFile;
use state::settings::Settings;

/// Label shown on the picker button while nothing is selected
const FILE_PLACEHOLDER: &str = "Choose an image";

/// Loading indicator text while a scan request is in flight
const LOADING_TEXT: &str = "Compressing & analyzing image... Please wait.";

/// Main application state
struct MedScanner {
    /// HTTP client bound to the configured backend
    client: ScanClient,
    /// The currently selected image, if any
    selected: Option<SelectedFile>,
    /// Decoded preview of the selected image; at most one alive at a time
    preview: Option<ImagePreview>,
    /// Results of the latest completed scan
    results: Option<ScanOutcome>,
    /// True while a scan request is in flight
    submitting: bool,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the picker button
    PickImage,
    /// User cleared the current selection
    ClearImage,
    /// Background preview decode completed
    PreviewLoaded(Result<ImagePreview, String>),
    /// User pressed the scan button
    Submit,
    /// Background scan request settled
    ScanFinished(Result<ScanOutcome, ScanError>),
}

impl MedScanner {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        info!("scan endpoint: {}", settings.api_base_url);

        let status = format!("Ready. Endpoint: {}", settings.api_base_url);

        (
            MedScanner {
                client: ScanClient::new(settings.api_base_url),
                selected: None,
                preview: None,
                results: None,
                submitting: false,
                status,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                // Show the native image picker dialog
                let picked = FileDialog::new()
                    .set_title("Select a Medicine Photo")
                    .add_filter("Images", preview::IMAGE_EXTENSIONS)
                    .pick_file();

                match picked {
                    Some(path) => self.handle_selection(path),
                    // Cancelling the picker keeps the current selection
                    None => Task::none(),
                }
            }
            Message::ClearImage => {
                self.selected = None;
                self.preview = None;
                self.status = String::from("Ready.");
                Task::none()
            }
            Message::PreviewLoaded(Ok(loaded)) => {
                // Ignore previews that finish after the selection was cleared
                if self.selected.is_some() {
                    self.status = format!("Preview ready ({}x{})", loaded.width, loaded.height);
                    self.preview = Some(loaded);
                }
                Task::none()
            }
            Message::PreviewLoaded(Err(reason)) => {
                warn!("preview failed: {}", reason);
                self.status = String::from("Could not preview this image.");
                Task::none()
            }
            Message::Submit => self.handle_submit(),
            Message::ScanFinished(result) => {
                // Cleanup runs on both arms: loading hidden, submit re-enabled
                self.submitting = false;

                match result {
                    Ok(outcome) => {
                        info!("scan complete");
                        self.status = String::from("Scan complete.");
                        self.results = Some(outcome);
                    }
                    Err(e) => {
                        error!("scan failed: {}", e);
                        self.status = String::from("Scan failed.");
                        alert(
                            MessageLevel::Error,
                            "Scan failed",
                            &format!("An error occurred: {}", e),
                        );
                    }
                }

                Task::none()
            }
        }
    }

    /// Selection handler: remember the file and start decoding its preview
    fn handle_selection(&mut self, path: PathBuf) -> Task<Message> {
        let file = SelectedFile::new(path);
        info!("selected {}", file.filename);

        // Release the previous preview before a replacement is created
        self.preview = None;
        self.status = format!("Loading preview for {}...", file.filename);

        let load = preview::load_preview(file.path.clone());
        self.selected = Some(file);

        Task::perform(load, Message::PreviewLoaded)
    }

    /// Submission handler: one upload per press, never while one is in flight
    fn handle_submit(&mut self) -> Task<Message> {
        let Some(file) = self.selected.clone() else {
            let reason = ScanError::NoImageSelected;
            warn!("{}", reason);
            alert(MessageLevel::Warning, "No image selected", &reason.to_string());
            return Task::none();
        };

        self.submitting = true;
        self.results = None;
        self.status = format!("Uploading {}...", file.filename);

        let client = self.client.clone();
        Task::perform(async move { client.scan(file).await }, Message::ScanFinished)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let picker_label = self
            .selected
            .as_ref()
            .map(|file| file.filename.as_str())
            .unwrap_or(FILE_PLACEHOLDER);

        let mut controls = row![button(text(picker_label))
            .on_press(Message::PickImage)
            .padding(10)]
        .spacing(10)
        .align_y(Alignment::Center);

        if self.selected.is_some() {
            controls = controls.push(button("Clear").on_press(Message::ClearImage).padding(10));
        }

        // No press handler while a request is in flight, so a second
        // submission cannot start
        controls = controls.push(
            button("Scan")
                .on_press_maybe((!self.submitting).then_some(Message::Submit))
                .padding(10),
        );

        let mut content: Column<Message> = column![
            text("Medicine Scanner").size(48),
            controls,
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        if let Some(preview) = &self.preview {
            content = content.push(
                column![
                    image(preview.handle.clone()).width(Length::Fixed(420.0)),
                    text(format!("{} x {} px", preview.width, preview.height)).size(12),
                ]
                .spacing(6)
                .align_x(Alignment::Center),
            );
        }

        if self.submitting {
            content = content.push(text(LOADING_TEXT).size(16));
        }

        if let Some(outcome) = &self.results {
            content = content.push(ui::results::results_panel(outcome));
        }

        content = content.push(text(&self.status).size(16));

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Blocking alert dialog, the failure surface for user-facing errors
fn alert(level: MessageLevel, title: &str, description: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .show();
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application("Medicine Scanner", MedScanner::update, MedScanner::view)
        .theme(MedScanner::theme)
        .centered()
        .run_with(MedScanner::new)
}
