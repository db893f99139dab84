use serde::{Deserialize, Deserializer};

/// Rejected request body.
///
/// The message names every field the request shape requires; the fields that
/// were actually absent are kept in `missing` for logging only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: &'static str,
    pub missing: Vec<&'static str>,
}

/// Collects trimmed required fields, remembering which ones were empty.
#[derive(Default)]
pub(crate) struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    pub(crate) fn field(
        &mut self,
        name: &'static str,
        value: Option<String>,
    ) -> String {
        let value = trimmed(value).unwrap_or_default();
        if value.is_empty() {
            self.missing.push(name);
        }
        value
    }

    pub(crate) fn finish(
        self,
        message: &'static str,
    ) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            return Ok(());
        }

        Err(ValidationError {
            message,
            missing: self.missing,
        })
    }
}

/// Trims the value and maps blank strings to `None`.
pub(crate) fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
}

/// Reads a form field as text, accepting numbers and booleans verbatim.
///
/// `null` reads as absent. Arrays and objects are still rejected.
pub(crate) fn scalar_string<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;

    Ok(value.map(|scalar| match scalar {
        Scalar::String(s) => s,
        Scalar::Number(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}
