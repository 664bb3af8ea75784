//! Dataset verifier implementation.

use crate::error::VerifyError;
use crate::report::{MismatchInfo, PropertyViolation, VerificationReport};
use chrono::{NaiveDate, NaiveTime};
use engagement_core::{DatasetSchema, PostRecord, PostType};
use engagement_generator::RecordGenerator;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Verifier that checks an emitted dataset pair against the schema.
///
/// Checks the CSV header, record counts, id sequence, category membership,
/// counter bounds, the date window, and field-level agreement between the
/// tabular and structured outputs. With `with_expected_seed`, records are
/// additionally compared against the exact sequence regenerated from that
/// seed.
pub struct DatasetVerifier {
    schema: DatasetSchema,
    expected_seed: Option<u64>,
}

impl DatasetVerifier {
    /// Create a verifier for the given schema.
    pub fn new(schema: DatasetSchema) -> Result<Self, VerifyError> {
        schema.validate()?;
        Ok(Self {
            schema,
            expected_seed: None,
        })
    }

    /// Also compare against the exact records regenerated from `seed`
    /// (must match the seed used during generation).
    pub fn with_expected_seed(mut self, seed: u64) -> Self {
        self.expected_seed = Some(seed);
        self
    }

    /// Verify the CSV/JSON pair, expecting `expected_count` records in each.
    pub fn verify(
        &self,
        csv_path: impl AsRef<Path>,
        json_path: impl AsRef<Path>,
        expected_count: u64,
    ) -> Result<VerificationReport, VerifyError> {
        let mut report = VerificationReport::default();

        let csv_records = read_csv_records(csv_path.as_ref())?;
        let json_records = read_json_records(json_path.as_ref())?;
        report.csv_records = csv_records.len() as u64;
        report.json_records = json_records.len() as u64;

        info!(
            "Verifying {} tabular records against {} structured records",
            report.csv_records, report.json_records
        );

        if report.csv_records != expected_count {
            report.violations.push(PropertyViolation {
                post_id: 0,
                message: format!(
                    "tabular file holds {} records, expected {}",
                    report.csv_records, expected_count
                ),
            });
        }
        if report.json_records != expected_count {
            report.violations.push(PropertyViolation {
                post_id: 0,
                message: format!(
                    "structured file holds {} records, expected {}",
                    report.json_records, expected_count
                ),
            });
        }

        let expected = match self.expected_seed {
            Some(seed) => {
                let mut generator = RecordGenerator::new(self.schema.clone(), seed);
                let records = generator
                    .records(report.csv_records)
                    .map_err(|e| VerifyError::Generator(e.to_string()))?
                    .collect::<Vec<_>>();
                Some(records)
            }
            None => None,
        };

        for (i, record) in csv_records.iter().enumerate() {
            // Ids are sequential starting at 1, in file order
            let expected_id = i as u64 + 1;
            if record.post_id != expected_id {
                report.violations.push(PropertyViolation {
                    post_id: record.post_id,
                    message: format!(
                        "id out of sequence: found {} at position {}",
                        record.post_id, expected_id
                    ),
                });
            }

            self.check_bounds(record, &mut report);

            let mut matched = true;

            match json_records.get(i) {
                Some(json_record) => {
                    let diffs = diff_records(record, json_record);
                    if !diffs.is_empty() {
                        matched = false;
                        report.mismatches.extend(diffs);
                    }
                }
                None => {
                    matched = false;
                    report.violations.push(PropertyViolation {
                        post_id: record.post_id,
                        message: "record missing from structured output".to_string(),
                    });
                }
            }

            if let Some(expected_records) = &expected {
                if let Some(exp) = expected_records.get(i) {
                    let diffs = diff_records(exp, record);
                    if !diffs.is_empty() {
                        matched = false;
                        report.mismatches.extend(diffs);
                    }
                }
            }

            if matched {
                report.matched += 1;
            }
        }

        // Structured records beyond the tabular length
        for json_record in json_records.iter().skip(csv_records.len()) {
            report.violations.push(PropertyViolation {
                post_id: json_record.post_id,
                message: "record missing from tabular output".to_string(),
            });
        }

        debug!(
            "{} matched, {} mismatches, {} violations",
            report.matched,
            report.mismatches.len(),
            report.violations.len()
        );

        Ok(report)
    }

    /// Check category membership, counter bounds, and the date window.
    fn check_bounds(&self, record: &PostRecord, report: &mut VerificationReport) {
        let Some(profile) = self.schema.profile(record.post_type) else {
            report.violations.push(PropertyViolation {
                post_id: record.post_id,
                message: format!("post type '{}' not in schema", record.post_type),
            });
            return;
        };

        for (counter, range, value) in [
            ("Likes", profile.likes, record.likes),
            ("Shares", profile.shares, record.shares),
            ("Comments", profile.comments, record.comments),
        ] {
            if !range.contains(value) {
                report.violations.push(PropertyViolation {
                    post_id: record.post_id,
                    message: format!(
                        "{counter} {value} outside [{}, {}] for '{}'",
                        range.min, range.max, record.post_type
                    ),
                });
            }
        }

        if !self.schema.window.contains(record.date_posted.date_naive()) {
            report.violations.push(PropertyViolation {
                post_id: record.post_id,
                message: format!(
                    "date {} outside posting window",
                    record.date_posted.format("%Y-%m-%d")
                ),
            });
        }
    }
}

/// Compare two records field by field, reference first.
fn diff_records(reference: &PostRecord, candidate: &PostRecord) -> Vec<MismatchInfo> {
    let pairs: [(&'static str, String, String); 6] = [
        (
            "Post_ID",
            reference.post_id.to_string(),
            candidate.post_id.to_string(),
        ),
        (
            "Post_Type",
            reference.post_type.to_string(),
            candidate.post_type.to_string(),
        ),
        ("Likes", reference.likes.to_string(), candidate.likes.to_string()),
        (
            "Shares",
            reference.shares.to_string(),
            candidate.shares.to_string(),
        ),
        (
            "Comments",
            reference.comments.to_string(),
            candidate.comments.to_string(),
        ),
        (
            "Date_Posted",
            reference.date_posted.to_rfc3339(),
            candidate.date_posted.to_rfc3339(),
        ),
    ];

    pairs
        .into_iter()
        .filter(|(_, expected, actual)| expected != actual)
        .map(|(field, expected, actual)| MismatchInfo {
            post_id: reference.post_id,
            field,
            expected,
            actual,
        })
        .collect()
}

/// Read and parse the tabular output, enforcing the exact header.
fn read_csv_records(path: &Path) -> Result<Vec<PostRecord>, VerifyError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let expected: Vec<String> = PostRecord::COLUMNS.iter().map(|s| s.to_string()).collect();
    let found: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
    if found != expected {
        return Err(VerifyError::HeaderMismatch { expected, found });
    }

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let line = i as u64 + 2; // 1-based, after the header
        let row = result?;
        records.push(parse_csv_row(&row, line)?);
    }
    Ok(records)
}

/// Parse one CSV row into a post record; dates are `YYYY-MM-DD`.
fn parse_csv_row(row: &csv::StringRecord, line: u64) -> Result<PostRecord, VerifyError> {
    let field = |idx: usize| {
        row.get(idx).ok_or_else(|| VerifyError::MalformedRecord {
            line,
            message: format!("missing column {}", PostRecord::COLUMNS[idx]),
        })
    };
    let malformed = |message: String| VerifyError::MalformedRecord { line, message };

    let post_id = field(0)?
        .parse::<u64>()
        .map_err(|e| malformed(format!("bad Post_ID: {e}")))?;
    let post_type = field(1)?
        .parse::<PostType>()
        .map_err(|e| malformed(e.to_string()))?;
    let likes = field(2)?
        .parse::<i64>()
        .map_err(|e| malformed(format!("bad Likes: {e}")))?;
    let shares = field(3)?
        .parse::<i64>()
        .map_err(|e| malformed(format!("bad Shares: {e}")))?;
    let comments = field(4)?
        .parse::<i64>()
        .map_err(|e| malformed(format!("bad Comments: {e}")))?;
    let date = NaiveDate::parse_from_str(field(5)?, "%Y-%m-%d")
        .map_err(|e| malformed(format!("bad Date_Posted: {e}")))?;

    Ok(PostRecord {
        post_id,
        post_type,
        likes,
        shares,
        comments,
        date_posted: date.and_time(NaiveTime::MIN).and_utc(),
    })
}

/// Read and parse the structured output (one JSON array of records).
fn read_json_records(path: &Path) -> Result<Vec<PostRecord>, VerifyError> {
    let file = File::open(path)?;
    let records: Vec<PostRecord> = serde_json::from_reader(BufReader::new(file))?;
    Ok(records)
}
