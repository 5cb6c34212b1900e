// Message rendering - findings to Teams card text

use crate::expiry::Finding;

/// Render the collected findings into one message body
///
/// One header line plus one line per expiring credential, in collection
/// order. A run with zero findings still produces the header-only body.
pub fn render_message(window_days: i64, findings: &[Finding]) -> String {
    let mut text = format!(
        "Applications with expiring secrets or certificates within {} days:\n",
        window_days
    );

    for finding in findings {
        text.push_str(&format!(
            "\n- **App**: {} ({}) has a {} that expires in **{} days**.",
            finding.app_name, finding.app_id, finding.kind, finding.days_left
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expiry::CredentialKind;
    use chrono::{TimeZone, Utc};

    fn finding(kind: CredentialKind, days_left: i64) -> Finding {
        Finding {
            app_name: "Payroll API".to_string(),
            app_id: "abc-123".to_string(),
            kind,
            expires_at: Utc.with_ymd_and_hms(2026, 3, 11, 0, 0, 0).unwrap(),
            days_left,
        }
    }

    #[test]
    fn test_header_only_when_no_findings() {
        let text = render_message(30, &[]);
        assert_eq!(
            text,
            "Applications with expiring secrets or certificates within 30 days:\n"
        );
    }

    #[test]
    fn test_one_line_per_finding() {
        let findings = vec![
            finding(CredentialKind::Secret, 10),
            finding(CredentialKind::Certificate, 3),
        ];
        let text = render_message(30, &findings);

        assert_eq!(text.matches("- **App**:").count(), 2);
        assert!(text.contains("has a secret that expires in **10 days**."));
        assert!(text.contains("has a certificate that expires in **3 days**."));
    }

    #[test]
    fn test_line_names_app_and_id() {
        let text = render_message(30, &[finding(CredentialKind::Secret, 10)]);
        assert!(text.contains("Payroll API (abc-123)"));
    }

    #[test]
    fn test_header_reflects_window() {
        let text = render_message(14, &[]);
        assert!(text.contains("within 14 days"));
    }
}
