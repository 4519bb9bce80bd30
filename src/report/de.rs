//! Deserialization helpers for loosely typed report fields.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

/// Accept a string, number or bool and keep its display text.
///
/// Older exports write aggregate counts (`avgLikes`, `avgViews`) as JSON
/// numbers while newer ones pre-format them as strings.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|scalar| match scalar {
        Scalar::Text(s) => s,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Flag(b) => b.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_string")]
        value: Option<String>,
    }

    fn probe(json: &str) -> Option<String> {
        serde_json::from_str::<Probe>(json).unwrap().value
    }

    #[test]
    fn test_accepts_text_and_numbers() {
        assert_eq!(probe(r#"{"value": "1.2K"}"#).as_deref(), Some("1.2K"));
        assert_eq!(probe(r#"{"value": 1520}"#).as_deref(), Some("1520"));
        assert_eq!(probe(r#"{"value": 2.5}"#).as_deref(), Some("2.5"));
    }

    #[test]
    fn test_missing_and_null_are_none() {
        assert_eq!(probe("{}"), None);
        assert_eq!(probe(r#"{"value": null}"#), None);
    }
}
