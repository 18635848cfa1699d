//! Wazuh alert model and parser.
//!
//! Only the fields the relay renders are modeled; everything else in the
//! agent's alert document is ignored. Absent fields fall back to empty
//! strings and zero so partially filled alerts still produce a message.

use crate::error::{RelayError, Result};
use serde::{Deserialize, Deserializer};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Alert {
    #[serde(deserialize_with = "null_as_default")]
    pub rule: Rule,
    #[serde(deserialize_with = "null_as_default")]
    pub agent: Agent,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Rule {
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level: i64,
    pub id: Option<RuleId>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Agent {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ip: String,
    pub id: Option<String>,
}

/// JSON `null` leaves the field at its zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Rule identifier as sent by the agent: either a JSON number or a string.
///
/// Any other JSON type fails to decode, which surfaces as a parse error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RuleId {
    Number(f64),
    Text(String),
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integer-valued display, no decimal point
            RuleId::Number(n) => write!(f, "{:.0}", n.trunc()),
            RuleId::Text(s) => f.write_str(s),
        }
    }
}

impl Alert {
    /// Rule id, or `MissingRuleId` when the alert carried none (absent or null).
    pub fn require_rule_id(&self) -> Result<&RuleId> {
        self.rule.id.as_ref().ok_or(RelayError::MissingRuleId)
    }
}

/// Decode an alert from raw JSON bytes.
pub fn parse_alert(raw: &[u8]) -> Result<Alert> {
    let alert: Alert = serde_json::from_slice(raw)?;
    tracing::debug!(
        "Parsed alert: level={} agent={} rule_id={:?}",
        alert.rule.level,
        alert.agent.name,
        alert.rule.id
    );
    Ok(alert)
}
