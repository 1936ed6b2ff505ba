use crate::GestureError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Winning gesture label for one hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GestureSymbol {
    HandOpen,
    IndexFingerUp,
    Victory,
    ThumbUp,
    ThumbDown,
    Fist,
    /// Any label the player has no command for (`ok`, `heart_a`, `unknown`, ...).
    Other(String),
}

impl GestureSymbol {
    pub fn from_label(label: &str) -> Self {
        match label {
            "hand_open" => GestureSymbol::HandOpen,
            "index_finger_up" => GestureSymbol::IndexFingerUp,
            "victory" => GestureSymbol::Victory,
            "thumb_up" => GestureSymbol::ThumbUp,
            "thumb_down" => GestureSymbol::ThumbDown,
            "fist" => GestureSymbol::Fist,
            other => GestureSymbol::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            GestureSymbol::HandOpen => "hand_open",
            GestureSymbol::IndexFingerUp => "index_finger_up",
            GestureSymbol::Victory => "victory",
            GestureSymbol::ThumbUp => "thumb_up",
            GestureSymbol::ThumbDown => "thumb_down",
            GestureSymbol::Fist => "fist",
            GestureSymbol::Other(label) => label,
        }
    }
}

impl fmt::Display for GestureSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounding box of a detected hand, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HandRect {
    pub top: i64,
    pub left: i64,
    pub width: i64,
    pub height: i64,
}

/// One detected hand and the confidence the service gave each label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hand {
    #[serde(rename = "gesture", default)]
    pub votes: BTreeMap<String, f64>,
    #[serde(rename = "hand_rectangle", default)]
    pub rectangle: Option<HandRect>,
}

impl Hand {
    /// The label with the highest vote.
    ///
    /// Ties go to the lexicographically smallest label, so the result never
    /// depends on the order the service happened to serialize its votes in.
    /// A hand without votes has no symbol.
    pub fn symbol(&self) -> Option<GestureSymbol> {
        let mut best: Option<(&str, f64)> = None;
        // BTreeMap iterates in label order; strict > keeps the first of equals
        for (label, &vote) in &self.votes {
            match best {
                Some((_, top)) if vote <= top => {}
                _ => best = Some((label, vote)),
            }
        }
        best.map(|(label, _)| GestureSymbol::from_label(label))
    }
}

/// Every hand found in one frame, in the order the service returned them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureObservation {
    pub hands: Vec<Hand>,
}

impl GestureObservation {
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Per-hand winning symbols, service order preserved.
    pub fn symbols(&self) -> Vec<GestureSymbol> {
        self.hands.iter().filter_map(Hand::symbol).collect()
    }
}

#[derive(Deserialize)]
struct RawResponse {
    hands: Option<Vec<Hand>>,
    error_message: Option<String>,
}

/// Parses a recognition service body such as
/// `{"hands":[{"gesture":{"hand_open":97.1,"fist":0.2}}]}`.
pub fn parse_response(body: &str) -> Result<GestureObservation, GestureError> {
    let raw: RawResponse = serde_json::from_str(body)?;
    match (raw.hands, raw.error_message) {
        (Some(hands), _) => Ok(GestureObservation { hands }),
        (None, Some(message)) => Err(GestureError::MalformedResponse(format!(
            "no hands in response: {message}"
        ))),
        (None, None) => Err(GestureError::MalformedResponse(
            "response has no hands array".to_string(),
        )),
    }
}

/// Pulls `error_message` out of an error body, falling back to the raw text.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<RawResponse>(body)
        .ok()
        .and_then(|raw| raw.error_message)
        .unwrap_or_else(|| body.trim().chars().take(200).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_extracted() {
        let body = r#"{"error_message":"AUTHENTICATION_ERROR","request_id":"x"}"#;
        assert_eq!(error_message(body), "AUTHENTICATION_ERROR");
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
    }
}
