use crate::console::{dim, get_terminal_width, strip_ansi_codes};
use crate::consts::HISTORY_PREVIEW_LEN;
use crate::exceptions::DrynessError;
use crate::format::history_table;
use crate::models::HistoryRecord;

pub async fn run(
    api_url: Option<String>,
    recent: bool,
    wide: bool,
    json: bool,
) -> Result<(), DrynessError> {
    let (config, client) = super::connect(api_url.as_deref())?;
    let records = client.history().await?;
    tracing::info!("Fetched {} history records", records.len());

    if json {
        let shown = if recent {
            &records[..records.len().min(HISTORY_PREVIEW_LEN)]
        } else {
            &records[..]
        };
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    let asset_base = wide.then(|| config.asset_base_url());
    print_history(&records, recent, asset_base.as_deref());
    Ok(())
}

/// Prints either the full history or the short preview shown after an upload.
pub fn print_history(records: &[HistoryRecord], recent: bool, asset_base_url: Option<&str>) {
    if records.is_empty() {
        println!("No analysis history yet.");
        return;
    }

    let (title, shown) = if recent {
        (
            "Recent Analyses",
            &records[..records.len().min(HISTORY_PREVIEW_LEN)],
        )
    } else {
        ("Analysis History", records)
    };

    let table_output = history_table(shown, get_terminal_width(), asset_base_url).to_string();

    // Centre the title over the visible table width
    let plain_output = strip_ansi_codes(&table_output);
    let table_width = plain_output
        .lines()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    if table_width > title.len() {
        let padding = (table_width - title.len()) / 2;
        println!("{}{}", " ".repeat(padding), title);
    } else {
        println!("{}", title);
    }
    println!("{}", table_output);

    if recent && records.len() > HISTORY_PREVIEW_LEN {
        println!(
            "{}",
            dim(&format!(
                "Showing {} of {} records. Run `dryness history` to see all.",
                HISTORY_PREVIEW_LEN,
                records.len()
            ))
        );
    }
}
