use super::normalizer::normalize_header;
use crate::workflows::leads::domain::{
    parse_count, qualification_flag, LeadValidationError, RawLead,
};
use std::io::Read;

#[derive(Debug)]
pub(crate) enum CsvParseError {
    Csv(csv::Error),
    MissingColumn(&'static str),
}

impl From<csv::Error> for CsvParseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

struct ColumnMap {
    width: usize,
    id: Option<usize>,
    date: usize,
    country: Option<usize>,
    lead_type: Option<usize>,
    attendees: Option<usize>,
    qualified: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, CsvParseError> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |names: &[&str]| {
            normalized
                .iter()
                .position(|header| names.contains(&header.as_str()))
        };

        Ok(Self {
            width: headers.len(),
            id: find(&["id", "lead id"]),
            date: find(&["date", "created at", "submitted at"])
                .ok_or(CsvParseError::MissingColumn("Date"))?,
            country: find(&["country"]),
            lead_type: find(&["lead type", "leadtype", "type"]),
            attendees: find(&["attendees count", "attendeescount", "attendees"]),
            qualified: find(&["qualified", "status"]),
        })
    }
}

/// A data row as read, or the reason its fields cannot be trusted.
pub(crate) type ParsedRow = Result<RawLead, LeadValidationError>;

/// Rows paired with their 1-based data row number. A row whose field count
/// differs from the header is rejected rather than read with shifted columns.
pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<(usize, ParsedRow)>, CsvParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let columns = ColumnMap::from_headers(csv_reader.headers()?)?;
    let mut rows = Vec::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.len() != columns.width {
            rows.push((
                index + 1,
                Err(LeadValidationError::FieldCount {
                    expected: columns.width,
                    found: record.len(),
                }),
            ));
            continue;
        }
        let text = |column: Option<usize>| {
            column
                .and_then(|position| record.get(position))
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        rows.push((
            index + 1,
            Ok(RawLead {
                id: text(columns.id),
                date: text(Some(columns.date)),
                country: text(columns.country),
                lead_type: text(columns.lead_type),
                attendees_count: text(columns.attendees).as_deref().and_then(parse_count),
                qualified: text(columns.qualified)
                    .as_deref()
                    .and_then(qualification_flag),
            }),
        ));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn headers_in_any_order_are_mapped() {
        let rows = parse_rows(Cursor::new(
            "Qualified,attendees_count,Country,LEAD TYPE,Date\nyes,1600,USA,Attendees,2025-03-10\n",
        ))
        .expect("parses");
        let (row, lead) = &rows[0];
        assert_eq!(*row, 1);
        let lead = lead.as_ref().expect("row is well formed");
        assert_eq!(lead.qualified, Some(true));
        assert_eq!(lead.attendees_count, Some(1600));
        assert_eq!(lead.lead_type.as_deref(), Some("Attendees"));
        assert_eq!(lead.date.as_deref(), Some("2025-03-10"));
    }

    #[test]
    fn rows_with_extra_fields_are_rejected() {
        let rows = parse_rows(Cursor::new(
            "Date,Country,Lead Type,Attendees Count,Qualified\n\
2025-03-10,Canada,Attendees,2,400,Qualified\n\
2025-03-10,Canada,Attendees,\"2,400\",Qualified\n",
        ))
        .expect("parses");

        assert_eq!(
            rows[0].1.as_ref().expect_err("unquoted thousands separator"),
            &LeadValidationError::FieldCount {
                expected: 5,
                found: 6
            }
        );
        let quoted = rows[1].1.as_ref().expect("quoted count is one field");
        assert_eq!(quoted.attendees_count, Some(2400));
        assert_eq!(quoted.qualified, Some(true));
    }

    #[test]
    fn missing_date_column_is_an_error() {
        let error = parse_rows(Cursor::new("Country,Lead Type\nUSA,Attendees\n"))
            .expect_err("date column required");
        assert!(matches!(error, CsvParseError::MissingColumn("Date")));
    }
}
