use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::scoring::config::ContactWeights;

/// Whether a contact field was found in the resume.
///
/// The extraction boundary speaks `"Yes"` / `"No"`. Any other value is read
/// as `Absent` (lenient fallback) and logged at debug level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PresenceFlag {
    Present,
    #[default]
    Absent,
}

impl PresenceFlag {
    pub fn is_present(self) -> bool {
        matches!(self, PresenceFlag::Present)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PresenceFlag::Present => "Yes",
            PresenceFlag::Absent => "No",
        }
    }

    /// 100 when present, 0 when absent.
    pub fn as_score(self) -> f64 {
        if self.is_present() {
            100.0
        } else {
            0.0
        }
    }
}

impl From<&str> for PresenceFlag {
    fn from(value: &str) -> Self {
        match value {
            "Yes" => PresenceFlag::Present,
            "No" => PresenceFlag::Absent,
            other => {
                debug!("Unrecognised presence flag {other:?}, treating as absent");
                PresenceFlag::Absent
            }
        }
    }
}

impl From<String> for PresenceFlag {
    fn from(value: String) -> Self {
        PresenceFlag::from(value.as_str())
    }
}

impl Serialize for PresenceFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Weighted contact completeness. With default weights the result is one of
/// 0, 33, 34, 66, 67, 100.
pub fn contact_score(
    email: PresenceFlag,
    phone: PresenceFlag,
    linkedin: PresenceFlag,
    weights: &ContactWeights,
) -> u32 {
    [
        (email, weights.email),
        (phone, weights.phone),
        (linkedin, weights.linkedin),
    ]
    .into_iter()
    .filter(|(flag, _)| flag.is_present())
    .map(|(_, weight)| weight)
    .sum()
}
