use serde::{Deserialize, Serialize};

/// Request body for `POST /generate-token`.
///
/// Both fields are optional at the serde layer so that an absent field
/// reaches the handler as `None` and maps to the fixed validation error,
/// instead of being rejected by the JSON extractor with a generic message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTokenRequest {
    /// Name of the channel the token grants access to.
    pub channel_name: Option<String>,

    /// Caller-chosen participant id; accepted as a JSON string or number.
    pub uid: Option<Uid>,
}

/// A uid in whichever representation the client submitted it.
///
/// Web clients send whatever their SDK holds, sometimes a number and
/// sometimes a decimal string. The submitted representation is kept so the
/// response can echo it back unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Uid {
    Number(u64),
    Text(String),
}

impl Uid {
    /// Normalize to the fixed-width uid the signer expects.
    ///
    /// Returns `None` for non-decimal strings and for numbers that do not
    /// fit in a `u32`.
    pub fn to_u32(&self) -> Option<u32> {
        match self {
            Uid::Number(n) => u32::try_from(*n).ok(),
            Uid::Text(s) => s.trim().parse().ok(),
        }
    }

    /// True when the submitted value is an empty string.
    pub fn is_empty(&self) -> bool {
        matches!(self, Uid::Text(s) if s.is_empty())
    }
}
