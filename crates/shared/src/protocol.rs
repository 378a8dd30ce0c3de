use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

pub const DEFAULT_MOVE_MS: i64 = 250;
pub const DEFAULT_FIT_MS: i64 = 300;
pub const DEFAULT_SHARPEN_AMOUNT: f64 = 1.0;

/// One control message. On the wire each command is a single JSON object
/// tagged by `cmd`, terminated by a newline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    Zoom {
        #[serde(deserialize_with = "lenient::number")]
        factor: f64,
        #[serde(default = "default_move_ms", deserialize_with = "lenient::millis")]
        ms: i64,
    },
    SetZoom {
        #[serde(deserialize_with = "lenient::number")]
        scale: f64,
        #[serde(default = "default_move_ms", deserialize_with = "lenient::millis")]
        ms: i64,
    },
    Pan {
        #[serde(default, deserialize_with = "lenient::number")]
        dx: f64,
        #[serde(default, deserialize_with = "lenient::number")]
        dy: f64,
        #[serde(default = "default_move_ms", deserialize_with = "lenient::millis")]
        ms: i64,
    },
    Fit {
        #[serde(default = "default_fit_ms", deserialize_with = "lenient::millis")]
        ms: i64,
    },
    ResetImage,
    Sharpen {
        #[serde(
            default = "default_sharpen_amount",
            deserialize_with = "lenient::number"
        )]
        amount: f64,
    },
    CropView {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        out: Option<String>,
    },
    /// Any `cmd` value this build does not know. Dropped by the dispatcher.
    #[serde(other)]
    Unknown,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Zoom { .. } => "zoom",
            Command::SetZoom { .. } => "set_zoom",
            Command::Pan { .. } => "pan",
            Command::Fit { .. } => "fit",
            Command::ResetImage => "reset_image",
            Command::Sharpen { .. } => "sharpen",
            Command::CropView { .. } => "crop_view",
            Command::Unknown => "unknown",
        }
    }
}

fn default_move_ms() -> i64 {
    DEFAULT_MOVE_MS
}

fn default_fit_ms() -> i64 {
    DEFAULT_FIT_MS
}

fn default_sharpen_amount() -> f64 {
    DEFAULT_SHARPEN_AMOUNT
}

/// Decodes one newline-delimited message. Invalid UTF-8 is replaced rather
/// than rejected; surrounding whitespace (including the `\n`) is ignored.
pub fn decode_line(line: &[u8]) -> Result<Command, ProtocolError> {
    let text = String::from_utf8_lossy(line);
    let text = text.trim();
    if text.is_empty() {
        return Err(ProtocolError::Empty);
    }
    Ok(serde_json::from_str(text)?)
}

pub fn encode_line(command: &Command) -> Result<String, ProtocolError> {
    let mut line = serde_json::to_string(command)?;
    line.push('\n');
    Ok(line)
}

// Senders are loosely typed: numbers may arrive as JSON strings and
// durations as floats.
mod lenient {
    use serde::{de::Error as _, Deserialize, Deserializer};
    use serde_json::Value;

    pub(super) fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let parsed = match &value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed
            .filter(|v| v.is_finite())
            .ok_or_else(|| D::Error::custom(format!("expected a finite number, got {value}")))
    }

    pub(super) fn millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        number(deserializer).map(|ms| ms.trunc() as i64)
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
