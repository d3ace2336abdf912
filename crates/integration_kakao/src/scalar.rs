//! Numeric fields that Kakao sends either as JSON numbers or strings

use serde::Deserialize;

/// A coordinate scalar as found in Kakao responses
///
/// The Local API encodes `x`/`y` as strings ("126.7"), other endpoints and
/// fixtures use plain numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Numeric value, if the field holds one
    pub(crate) fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_strings() {
        let values: Vec<Scalar> = serde_json::from_str(r#"[126.7, "37.45", " 1.5 "]"#).unwrap();
        let parsed: Vec<Option<f64>> = values.iter().map(Scalar::as_f64).collect();
        assert_eq!(parsed, vec![Some(126.7), Some(37.45), Some(1.5)]);
    }

    #[test]
    fn garbage_text_is_none() {
        let value: Scalar = serde_json::from_str(r#""north""#).unwrap();
        assert!(value.as_f64().is_none());
    }
}
