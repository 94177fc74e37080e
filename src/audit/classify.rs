use super::{AuditStatus, Category};

/// Lowercased risk values that escalate a mismatch to a critical warning.
pub const ELEVATED_RISK_LEVELS: &[&str] = &["medium", "high"];

/// Classify one category outcome.
///
/// Escalation applies to `Category::RiskLevel` only and does not look at the
/// expected value beyond the equality check.
pub fn classify(category: Category, expected: &str, actual: Option<&str>) -> AuditStatus {
    let Some(actual) = actual else {
        return AuditStatus::DataMissing;
    };

    let actual = actual.to_lowercase();
    if actual == expected.to_lowercase() {
        return AuditStatus::Match;
    }

    if category == Category::RiskLevel && ELEVATED_RISK_LEVELS.contains(&actual.as_str()) {
        return AuditStatus::CriticalWarning;
    }

    AuditStatus::Mismatch
}
