use crate::alert::Alert;
use crate::error::Result;

/// Which template variant to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageStyle {
    #[default]
    Standard,
    /// Adds a `Rule ID:` line after the level.
    WithRuleId,
}

// Callers must check the rule id first when the style needs one.
pub(crate) fn format_message(alert: &Alert, style: MessageStyle) -> String {
    let mut lines = vec![
        "Wazuh Alert:".to_string(),
        format!("Description: {}", alert.rule.description),
        format!("Level: {}", alert.rule.level),
    ];

    if style == MessageStyle::WithRuleId {
        let rule_id = alert
            .rule
            .id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        lines.push(format!("Rule ID: {}", rule_id));
    }

    lines.push(format!(
        "Agent: {} (IP: {})",
        alert.agent.name, alert.agent.ip
    ));
    lines.push(format!("Time: {}", alert.timestamp));

    lines.join("\n")
}

/// Render the alert as chat text. Field values are interpolated verbatim.
///
/// Fails with `MissingRuleId` when the style needs a rule id the alert
/// does not have.
pub fn render_message(alert: &Alert, style: MessageStyle) -> Result<String> {
    if style == MessageStyle::WithRuleId {
        alert.require_rule_id()?;
    }
    Ok(format_message(alert, style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{parse_alert, Agent, Rule, RuleId};
    use crate::error::RelayError;

    fn sample_alert(id: Option<RuleId>) -> Alert {
        Alert {
            rule: Rule {
                description: "Multiple authentication failures".to_string(),
                level: 10,
                id,
            },
            agent: Agent {
                name: "db-02".to_string(),
                ip: "192.168.1.20".to_string(),
                id: None,
            },
            timestamp: "2024-03-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_standard_template() {
        let message = format_message(&sample_alert(None), MessageStyle::Standard);
        assert_eq!(
            message,
            "Wazuh Alert:\n\
             Description: Multiple authentication failures\n\
             Level: 10\n\
             Agent: db-02 (IP: 192.168.1.20)\n\
             Time: 2024-03-01T10:00:00Z"
        );
    }

    #[test]
    fn test_standard_template_ignores_rule_id() {
        let message = format_message(
            &sample_alert(Some(RuleId::Number(5710.0))),
            MessageStyle::Standard,
        );
        assert!(!message.contains("Rule ID"));
    }

    #[test]
    fn test_rule_id_template() {
        let message = format_message(
            &sample_alert(Some(RuleId::Number(5710.0))),
            MessageStyle::WithRuleId,
        );
        assert_eq!(
            message,
            "Wazuh Alert:\n\
             Description: Multiple authentication failures\n\
             Level: 10\n\
             Rule ID: 5710\n\
             Agent: db-02 (IP: 192.168.1.20)\n\
             Time: 2024-03-01T10:00:00Z"
        );
    }

    #[test]
    fn test_numeric_rule_id_from_json() {
        let alert = parse_alert(br#"{"rule": {"id": 123.0}}"#).unwrap();
        let message = render_message(&alert, MessageStyle::WithRuleId).unwrap();
        assert!(message.contains("Rule ID: 123\n"));
        assert!(!message.contains("123.0"));
    }

    #[test]
    fn test_string_rule_id_from_json() {
        let alert = parse_alert(br#"{"rule": {"id": "00-abc 7.5"}}"#).unwrap();
        let message = render_message(&alert, MessageStyle::WithRuleId).unwrap();
        assert!(message.contains("Rule ID: 00-abc 7.5\n"));
    }

    #[test]
    fn test_values_are_not_escaped() {
        let mut alert = sample_alert(None);
        alert.rule.description = "<b>*bold*</b>\nsecond line".to_string();
        let message = format_message(&alert, MessageStyle::Standard);
        assert!(message.contains("Description: <b>*bold*</b>\nsecond line\nLevel"));
    }

    #[test]
    fn test_render_requires_rule_id() {
        let err = render_message(&sample_alert(None), MessageStyle::WithRuleId).unwrap_err();
        assert!(matches!(err, RelayError::MissingRuleId));
        assert!(render_message(&sample_alert(None), MessageStyle::Standard).is_ok());
    }
}
