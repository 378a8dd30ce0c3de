//! Free-form phrase to structured command translation.
//!
//! Matching is lexical. Intensity modifiers are matched as whole words so a
//! modifier that is also the stem of another word (`резко` in `резкость`)
//! does not change the intensity; intent keywords are stems and match
//! anywhere in the phrase.

use shared::protocol::Command;

const MILD_WORDS: &[&str] = &["чуть-чуть", "немного", "слегка"];
const STRONG_WORDS: &[&str] = &["сильно", "резко", "максимум"];

const ZOOM_IN_STEMS: &[&str] = &["увелич", "приблиз", "zoom in", "больше"];
const ZOOM_OUT_STEMS: &[&str] = &["уменьш", "отдали", "zoom out", "меньше"];
const RIGHT_STEMS: &[&str] = &["вправо", "направо"];
const LEFT_STEMS: &[&str] = &["влево", "налево"];
const UP_STEMS: &[&str] = &["вверх", "подними"];
const DOWN_STEMS: &[&str] = &["вниз", "опусти"];
const SHARPEN_STEMS: &[&str] = &["резко", "улучш", "enhance", "четч"];
const RESET_STEMS: &[&str] = &["сброс", "назад", "оригинал"];
const FIT_STEMS: &[&str] = &["целик", "весь", "вписать"];

const ZOOM_STEP: f64 = 0.2;
const PAN_STEP_PX: f64 = 150.0;
const ZOOM_MS: i64 = 300;
const PAN_MS: i64 = 250;
const FIT_MS: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intensity {
    Mild,
    #[default]
    Normal,
    Strong,
}

impl Intensity {
    /// Mild words win over strong words when a phrase carries both.
    pub fn detect(text: &str) -> Self {
        let words: Vec<&str> = text
            .split(|c: char| !(c.is_alphanumeric() || c == '-'))
            .filter(|word| !word.is_empty())
            .collect();
        let has_any = |vocab: &[&str]| words.iter().any(|word| vocab.contains(word));

        if has_any(MILD_WORDS) {
            Intensity::Mild
        } else if has_any(STRONG_WORDS) {
            Intensity::Strong
        } else {
            Intensity::Normal
        }
    }

    pub fn power(self) -> f64 {
        match self {
            Intensity::Mild => 0.5,
            Intensity::Normal => 1.0,
            Intensity::Strong => 2.5,
        }
    }
}

/// Maps a phrase to at most one command. Categories are tried in a fixed
/// order and the first that matches wins: zoom in, zoom out, pan, sharpen,
/// reset, fit.
pub fn parse_phrase(text: &str) -> Option<Command> {
    let text = text.trim().to_lowercase();
    let power = Intensity::detect(&text).power();
    let mentions = |stems: &[&str]| stems.iter().any(|stem| text.contains(stem));

    if mentions(ZOOM_IN_STEMS) {
        return Some(Command::Zoom {
            factor: round2(1.0 + ZOOM_STEP * power),
            ms: ZOOM_MS,
        });
    }
    if mentions(ZOOM_OUT_STEMS) {
        return Some(Command::Zoom {
            factor: round2(1.0 / (1.0 + ZOOM_STEP * power)),
            ms: ZOOM_MS,
        });
    }

    let distance = PAN_STEP_PX * power;
    let dx = if mentions(RIGHT_STEMS) {
        distance
    } else if mentions(LEFT_STEMS) {
        -distance
    } else {
        0.0
    };
    let dy = if mentions(UP_STEMS) {
        -distance
    } else if mentions(DOWN_STEMS) {
        distance
    } else {
        0.0
    };
    if dx != 0.0 || dy != 0.0 {
        return Some(Command::Pan { dx, dy, ms: PAN_MS });
    }

    if mentions(SHARPEN_STEMS) {
        return Some(Command::Sharpen { amount: power });
    }
    if mentions(RESET_STEMS) {
        return Some(Command::ResetImage);
    }
    if mentions(FIT_STEMS) {
        return Some(Command::Fit { ms: FIT_MS });
    }

    None
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
