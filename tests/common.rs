use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};

/// Enough of a PNG for magic-byte detection.
#[allow(dead_code)]
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01\x08\x02\0\0\0";

/// A `dryness` invocation isolated from the caller's environment and config.
#[allow(dead_code)]
pub fn dryness_cmd(config_home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("dryness");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("DRYNESS_COLUMNS", "200")
        .env_remove("DRYNESS_API_URL")
        .env_remove("NEXT_PUBLIC_API_URL")
        .env_remove("DRYNESS_FORCE_TTY");
    cmd
}

#[allow(dead_code)]
pub fn write_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, PNG_BYTES).unwrap();
    path
}

#[allow(dead_code)]
pub fn history_json(count: usize) -> String {
    let labels = ["Kering", "Sedang", "Basah", "not banana"];
    let records: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": i + 1,
                "filename": format!("batch-{}.jpg", i + 1),
                "classification": labels[i % labels.len()],
                "accuracy": 0.9,
                "drynessLevel": 50.0,
                "created_at": "2025-06-01T10:05:00Z",
            })
        })
        .collect();
    serde_json::to_string(&records).unwrap()
}
