use crate::commands::history::print_history;
use crate::console::{draw_panel, get_terminal_width, is_stderr_terminal};
use crate::exceptions::DrynessError;
use crate::format::prediction_lines;
use crate::state::UploadState;
use crate::upload::UploadImage;
use std::path::PathBuf;

const PANEL_MAX_WIDTH: usize = 72;

pub async fn run(
    image_path: PathBuf,
    api_url: Option<String>,
    json: bool,
    no_history: bool,
) -> Result<(), DrynessError> {
    // Validation happens before anything touches the network.
    let image = UploadImage::from_path(&image_path)?;
    let (_, client) = super::connect(api_url.as_deref())?;

    let mut state = UploadState::default();
    state.begin(&image.filename);
    if !json && is_stderr_terminal() {
        eprintln!("Analyzing {}...", image.filename);
    }

    state.finish(client.predict(&image).await);

    let prediction = match state {
        UploadState::Done(prediction) => prediction,
        UploadState::Failed(message) => return Err(DrynessError::Api(message)),
        UploadState::Idle | UploadState::Loading { .. } => {
            return Err(DrynessError::Api("Upload did not complete".into()));
        }
    };

    tracing::info!(
        "{} classified as {}",
        image.filename,
        prediction.classification
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
        return Ok(());
    }

    let width = get_terminal_width().min(PANEL_MAX_WIDTH);
    draw_panel("Analysis Result", &prediction_lines(&prediction), width);

    if !no_history {
        match client.history().await {
            Ok(records) => {
                println!();
                print_history(&records, true, None);
            }
            Err(e) => tracing::warn!("Could not refresh history: {}", e),
        }
    }

    Ok(())
}
