//! Verification report types.

/// One field-level disagreement.
///
/// For cross-format checks the tabular file is the reference side
/// (`expected`) and the structured file the candidate (`actual`); for
/// seeded checks the regenerated record is the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchInfo {
    pub post_id: u64,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

/// A record that violates one of the dataset properties (id sequence,
/// category membership, counter bounds, date window, record counts).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyViolation {
    /// Offending record id, or 0 for file-level violations.
    pub post_id: u64,
    pub message: String,
}

/// Outcome of verifying a generated dataset pair.
#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    /// Data records found in the tabular file.
    pub csv_records: u64,
    /// Records found in the structured file.
    pub json_records: u64,
    /// Records that agree across both files (and with regenerated data,
    /// when a seed is supplied).
    pub matched: u64,
    /// Field-level disagreements.
    pub mismatches: Vec<MismatchInfo>,
    /// Records violating dataset properties.
    pub violations: Vec<PropertyViolation>,
}

impl VerificationReport {
    /// Whether verification passed with no mismatches or violations.
    pub fn is_success(&self) -> bool {
        self.csv_records == self.json_records
            && self.mismatches.is_empty()
            && self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_success() {
        assert!(VerificationReport::default().is_success());
    }

    #[test]
    fn test_count_disagreement_fails() {
        let report = VerificationReport {
            csv_records: 200,
            json_records: 199,
            matched: 199,
            ..VerificationReport::default()
        };
        assert!(!report.is_success());
    }

    #[test]
    fn test_violation_fails() {
        let report = VerificationReport {
            csv_records: 1,
            json_records: 1,
            matched: 1,
            violations: vec![PropertyViolation {
                post_id: 1,
                message: "Likes 9999 outside [400, 900] for 'Reel'".to_string(),
            }],
            ..VerificationReport::default()
        };
        assert!(!report.is_success());
    }
}
