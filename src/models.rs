use serde::{Deserialize, Serialize};

// --- Classification ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Kering: dry enough to pack.
    Dry,
    /// Sedang: partially dried.
    Medium,
    /// Basah: still wet.
    Wet,
    NotBanana,
    Unknown(String),
}

impl Classification {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "kering" | "dry" => Classification::Dry,
            "sedang" | "medium" => Classification::Medium,
            "basah" | "wet" => Classification::Wet,
            "not banana" | "bukan pisang" | "notbanana" => Classification::NotBanana,
            _ => Classification::Unknown(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Classification::Dry => "Kering (dry)".into(),
            Classification::Medium => "Sedang (medium)".into(),
            Classification::Wet => "Basah (wet)".into(),
            Classification::NotBanana => "Not a banana".into(),
            Classification::Unknown(raw) if raw.is_empty() => "Unknown".into(),
            Classification::Unknown(raw) => raw.clone(),
        }
    }

    pub fn badge(&self) -> BadgeColor {
        match self {
            Classification::Dry => BadgeColor::Yellow,
            Classification::Medium => BadgeColor::Green,
            Classification::Wet => BadgeColor::Blue,
            Classification::NotBanana => BadgeColor::Red,
            Classification::Unknown(_) => BadgeColor::Grey,
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Classification::Dry => {
                "The bananas are dry. They can be cooled, packed in airtight containers and stored."
            }
            Classification::Medium => {
                "Drying is partly done. Continue drying and check again in a few hours."
            }
            Classification::Wet => {
                "The bananas are still wet. Keep drying them; spread the slices thinly so air reaches every side."
            }
            Classification::NotBanana => {
                "No banana was recognised. Upload a clear photo of the banana slices."
            }
            Classification::Unknown(_) => "The service returned an unrecognised label.",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Yellow,
    Green,
    Blue,
    Red,
    Grey,
}

impl BadgeColor {
    pub fn table_color(self) -> comfy_table::Color {
        match self {
            BadgeColor::Yellow => comfy_table::Color::Yellow,
            BadgeColor::Green => comfy_table::Color::Green,
            BadgeColor::Blue => comfy_table::Color::Blue,
            BadgeColor::Red => comfy_table::Color::Red,
            BadgeColor::Grey => comfy_table::Color::Grey,
        }
    }

    pub fn term_color(self) -> crossterm::style::Color {
        match self {
            BadgeColor::Yellow => crossterm::style::Color::Yellow,
            BadgeColor::Green => crossterm::style::Color::Green,
            BadgeColor::Blue => crossterm::style::Color::Blue,
            BadgeColor::Red => crossterm::style::Color::Red,
            BadgeColor::Grey => crossterm::style::Color::Grey,
        }
    }
}

// --- Wire models ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub classification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(rename = "drynessLevel", default, skip_serializing_if = "Option::is_none")]
    pub dryness_level: Option<f64>,
    #[serde(default)]
    pub filename: String,
}

impl Prediction {
    pub fn classification(&self) -> Classification {
        Classification::parse(&self.classification)
    }
}

/// A stored analysis. Owned by the backend; the client only reads and deletes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    pub id: i64,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub classification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(rename = "drynessLevel", default, skip_serializing_if = "Option::is_none")]
    pub dryness_level: Option<f64>,
    #[serde(default)]
    pub created_at: String,
}

impl HistoryRecord {
    pub fn classification(&self) -> Classification {
        Classification::parse(&self.classification)
    }
}

/// Body of a prediction response; `error` may be present even on a 2xx status.
#[derive(Debug, Deserialize)]
pub(crate) struct PredictResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub prediction: Option<Prediction>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct ApiMessage {
    #[serde(default)]
    pub success: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}
