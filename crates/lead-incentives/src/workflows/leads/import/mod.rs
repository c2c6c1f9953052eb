mod normalizer;
mod parser;

use super::domain::{LeadRecord, LeadValidationError, RawLead};
use parser::{CsvParseError, ParsedRow};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum LeadImportError {
    #[error("failed to read lead export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid lead CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid lead JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("lead CSV export has no '{0}' column")]
    MissingColumn(&'static str),
}

impl From<CsvParseError> for LeadImportError {
    fn from(err: CsvParseError) -> Self {
        match err {
            CsvParseError::Csv(err) => Self::Csv(err),
            CsvParseError::MissingColumn(column) => Self::MissingColumn(column),
        }
    }
}

/// A row that could not be turned into a [`LeadRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLead {
    pub row: usize,
    pub reason: LeadValidationError,
}

#[derive(Debug, Clone, Default)]
pub struct LeadImport {
    pub leads: Vec<LeadRecord>,
    pub rejected: Vec<RejectedLead>,
}

impl LeadImport {
    fn from_rows(rows: impl IntoIterator<Item = (usize, ParsedRow)>) -> Self {
        let mut import = LeadImport::default();
        for (row, raw) in rows {
            match raw.and_then(LeadRecord::try_from) {
                Ok(lead) => import.leads.push(lead),
                Err(reason) => {
                    warn!(row, %reason, "skipping invalid lead row");
                    import.rejected.push(RejectedLead { row, reason });
                }
            }
        }
        debug!(
            accepted = import.leads.len(),
            rejected = import.rejected.len(),
            "lead import complete"
        );
        import
    }
}

pub struct LeadImporter;

impl LeadImporter {
    /// Reads `.json` files as REST payloads and everything else as CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<LeadImport, LeadImportError> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let file = std::fs::File::open(path)?;

        if is_json {
            Self::from_json_reader(file)
        } else {
            Self::from_csv_reader(file)
        }
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<LeadImport, LeadImportError> {
        let rows = parser::parse_rows(reader)?;
        Ok(LeadImport::from_rows(rows))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<LeadImport, LeadImportError> {
        let raw: Vec<RawLead> = serde_json::from_reader(reader)?;
        Ok(LeadImport::from_rows(
            raw.into_iter()
                .enumerate()
                .map(|(index, lead)| (index + 1, Ok(lead))),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::leads::Qualification;
    use std::io::Cursor;

    #[test]
    fn csv_import_keeps_valid_rows_and_reports_bad_ones() {
        let csv = "Date,Country,Lead Type,Attendees Count,Qualified\n\
2025-03-10T14:00:00Z,USA,Attendees,1800,true\n\
not-a-date,Canada,Attendees,2000,true\n\
,USA,Association,,\n";

        let import = LeadImporter::from_csv_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(import.leads.len(), 1);
        assert_eq!(import.leads[0].attendees_count, Some(1800));
        assert_eq!(import.leads[0].qualified, Qualification::Qualified);
        assert_eq!(
            import.rejected,
            vec![
                RejectedLead {
                    row: 2,
                    reason: LeadValidationError::InvalidDate("not-a-date".to_string()),
                },
                RejectedLead {
                    row: 3,
                    reason: LeadValidationError::MissingDate,
                },
            ]
        );
    }

    #[test]
    fn json_import_reads_rest_payload() {
        let json = r#"[
            {"date": "2025-03-10T14:00:00Z", "country": "India", "leadType": "Attendees",
             "attendeesCount": 1500, "qualified": false},
            {"country": "USA"}
        ]"#;

        let import = LeadImporter::from_json_reader(Cursor::new(json)).expect("import succeeds");

        assert_eq!(import.leads.len(), 1);
        assert_eq!(import.leads[0].qualified, Qualification::Disqualified);
        assert_eq!(import.rejected[0].row, 2);
    }

    #[test]
    fn malformed_json_aborts() {
        let error = LeadImporter::from_json_reader(Cursor::new("{not json"))
            .expect_err("structure error");
        assert!(matches!(error, LeadImportError::Json(_)));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = LeadImporter::from_path("./does-not-exist.csv").expect_err("expected io error");
        match error {
            LeadImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
