use crate::calendar::parse_date;
use crate::reservation::Reservation;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::{Path, PathBuf};

/// Header names accepted for each logical column, source sheet names first.
///
/// Lowercase; headers are trimmed and lowercased before comparison.
const ID_COLUMNS: &[&str] = &["id", "reservation_id"];
const CHECK_IN_COLUMNS: &[&str] = &["checkin", "check_in", "check-in"];
const CHECK_OUT_COLUMNS: &[&str] = &["checkout", "check_out", "check-out"];
const REVENUE_COLUMNS: &[&str] = &["receita", "revenue"];
// "pre\u{301}dio" is the decomposed spelling some spreadsheet exports write
const BUILDING_COLUMNS: &[&str] = &["prédio", "pre\u{301}dio", "predio", "building"];

/// Trait for reservation source abstraction.
///
/// The dashboard only needs the full list of rows once at start-up, so the
/// trait exposes a single bulk read. Implementations:
/// - CSV export of the reservation sheet
/// - SQLite table
/// - In-memory list (for testing)
pub trait ReservationSource {
    /// Reads every reservation row from the source.
    ///
    /// # Errors
    /// Returns an error if the source is missing, a required column is absent,
    /// or a row cannot be parsed into a [`Reservation`].
    fn load_reservations(&self) -> Result<Vec<Reservation>, SourceError>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// Errors that can occur when reading a reservation source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Source file does not exist
    NotFound(PathBuf),
    /// File could not be read
    Io(String),
    /// A required column is absent from the header row
    MissingColumn(&'static str),
    /// A data row could not be parsed (1-based row number, header excluded)
    InvalidRow { row: usize, message: String },
    /// Database access failed
    Database(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::NotFound(path) => write!(f, "Source not found: {}", path.display()),
            SourceError::Io(msg) => write!(f, "I/O error: {}", msg),
            SourceError::MissingColumn(column) => write!(f, "Missing required column: {}", column),
            SourceError::InvalidRow { row, message } => write!(f, "Invalid row {}: {}", row, message),
            SourceError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<csv::Error> for SourceError {
    fn from(err: csv::Error) -> Self {
        SourceError::Io(err.to_string())
    }
}

impl From<rusqlite::Error> for SourceError {
    fn from(err: rusqlite::Error) -> Self {
        SourceError::Database(err.to_string())
    }
}

/// Builds a reservation from textual cells, shared by the CSV and SQLite readers.
pub(crate) fn reservation_from_cells(
    row: usize,
    id: &str,
    check_in: &str,
    check_out: &str,
    revenue: &str,
    building: Option<&str>,
) -> Result<Reservation, SourceError> {
    let invalid = |message: String| SourceError::InvalidRow { row, message };

    let id = id.trim();
    if id.is_empty() {
        return Err(invalid("empty reservation id".to_string()));
    }

    let check_in = parse_date(check_in)
        .ok_or_else(|| invalid(format!("unparsable check-in date '{}'", check_in)))?;
    let check_out = parse_date(check_out)
        .ok_or_else(|| invalid(format!("unparsable check-out date '{}'", check_out)))?;

    let revenue = revenue
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| invalid(format!("revenue '{}' is not a number", revenue)))?;

    let building = building
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    Ok(Reservation {
        id: id.to_string(),
        check_in,
        check_out,
        revenue,
        building,
    })
}

/// Column positions resolved from a CSV header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    id: usize,
    check_in: usize,
    check_out: usize,
    revenue: usize,
    building: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, SourceError> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|header| header.trim().to_lowercase())
            .collect();
        let find = |candidates: &[&str]| {
            normalized
                .iter()
                .position(|header| candidates.contains(&header.as_str()))
        };

        Ok(ColumnIndex {
            id: find(ID_COLUMNS).ok_or(SourceError::MissingColumn("id"))?,
            check_in: find(CHECK_IN_COLUMNS).ok_or(SourceError::MissingColumn("checkin"))?,
            check_out: find(CHECK_OUT_COLUMNS).ok_or(SourceError::MissingColumn("checkout"))?,
            revenue: find(REVENUE_COLUMNS).ok_or(SourceError::MissingColumn("receita"))?,
            building: find(BUILDING_COLUMNS),
        })
    }
}

/// Reads reservations from a CSV export of the reservation sheet.
#[derive(Debug, Clone)]
pub struct CsvReservationSource {
    path: PathBuf,
}

impl CsvReservationSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvReservationSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReservationSource for CsvReservationSource {
    fn load_reservations(&self) -> Result<Vec<Reservation>, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::NotFound(self.path.clone()));
        }

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(false)
            .from_path(&self.path)?;

        let columns = ColumnIndex::resolve(reader.headers()?)?;
        if columns.building.is_none() {
            log::debug!("{} has no building column", self.path.display());
        }

        let mut reservations = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let row = index + 1;
            let record = record.map_err(|e| SourceError::InvalidRow {
                row,
                message: e.to_string(),
            })?;
            let cell = |position: usize| record.get(position).unwrap_or_default();

            reservations.push(reservation_from_cells(
                row,
                cell(columns.id),
                cell(columns.check_in),
                cell(columns.check_out),
                cell(columns.revenue),
                columns.building.map(cell),
            )?);
        }

        log::info!(
            "Loaded {} reservations from {}",
            reservations.len(),
            self.path.display()
        );

        Ok(reservations)
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}

/// In-memory reservation source implementation for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReservationSource {
    reservations: Vec<Reservation>,
}

impl InMemoryReservationSource {
    pub fn new(reservations: Vec<Reservation>) -> Self {
        InMemoryReservationSource { reservations }
    }

    /// Appends a reservation.
    pub fn push(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }
}

impl ReservationSource for InMemoryReservationSource {
    fn load_reservations(&self) -> Result<Vec<Reservation>, SourceError> {
        Ok(self.reservations.clone())
    }

    fn describe(&self) -> String {
        format!("memory:{} rows", self.reservations.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_csv_source_reads_sheet_headers() {
        let file = write_csv(
            "id,checkin,checkout,receita,prédio\n\
             7,2022-11-10,2022-11-12,200,A\n\
             8,2022-11-20 00:00:00,2022-11-21 00:00:00,150.5,\n",
        );

        let reservations = CsvReservationSource::new(file.path()).load_reservations().unwrap();

        assert_eq!(reservations.len(), 2);
        assert_eq!(reservations[0].id, "7");
        assert_eq!(reservations[0].check_in, NaiveDate::from_ymd_opt(2022, 11, 10).unwrap());
        assert_eq!(reservations[0].building.as_deref(), Some("A"));
        assert_eq!(reservations[1].revenue, 150.5);
        assert_eq!(reservations[1].check_out, NaiveDate::from_ymd_opt(2022, 11, 21).unwrap());
        assert_eq!(reservations[1].building, None);
    }

    #[test]
    fn test_csv_source_accepts_english_headers_in_any_order() {
        let file = write_csv(
            "revenue,check_out,check_in,id\n\
             300,2022-12-04,2022-12-01,x-1\n",
        );

        let reservations = CsvReservationSource::new(file.path()).load_reservations().unwrap();

        assert_eq!(reservations.len(), 1);
        assert_eq!(reservations[0].id, "x-1");
        assert_eq!(reservations[0].stay_days(), 3);
        assert_eq!(reservations[0].revenue, 300.0);
    }

    #[test]
    fn test_csv_source_headers_ignore_case_and_padding() {
        let file = write_csv(
            " Id ,CheckIn,CHECKOUT,Receita,Pre\u{301}dio\n\
             5,2022-11-10,2022-11-11,120,B\n",
        );

        let reservations = CsvReservationSource::new(file.path()).load_reservations().unwrap();

        assert_eq!(reservations[0].id, "5");
        assert_eq!(reservations[0].revenue, 120.0);
        assert_eq!(reservations[0].building.as_deref(), Some("B"));
    }

    #[test]
    fn test_csv_source_missing_file() {
        let source = CsvReservationSource::new("/definitely/not/here.csv");
        assert!(matches!(
            source.load_reservations(),
            Err(SourceError::NotFound(_))
        ));
    }

    #[test]
    fn test_csv_source_missing_column() {
        let file = write_csv("id,checkin,checkout\n1,2022-11-10,2022-11-12\n");
        let result = CsvReservationSource::new(file.path()).load_reservations();
        assert_eq!(result, Err(SourceError::MissingColumn("receita")));
    }

    #[test]
    fn test_csv_source_rejects_bad_revenue() {
        let file = write_csv(
            "id,checkin,checkout,receita\n\
             1,2022-11-10,2022-11-12,100\n\
             2,2022-11-10,2022-11-12,lots\n",
        );
        let result = CsvReservationSource::new(file.path()).load_reservations();
        match result {
            Err(SourceError::InvalidRow { row, message }) => {
                assert_eq!(row, 2);
                assert!(message.contains("lots"));
            }
            other => panic!("expected invalid row, got {:?}", other),
        }
    }

    #[test]
    fn test_csv_source_rejects_bad_date() {
        let file = write_csv("id,checkin,checkout,receita\n1,soon,2022-11-12,100\n");
        let result = CsvReservationSource::new(file.path()).load_reservations();
        assert!(matches!(result, Err(SourceError::InvalidRow { row: 1, .. })));
    }

    #[test]
    fn test_in_memory_source_returns_rows() {
        let mut source = InMemoryReservationSource::default();
        source.push(Reservation::new(
            "1",
            NaiveDate::from_ymd_opt(2022, 11, 10).unwrap(),
            NaiveDate::from_ymd_opt(2022, 11, 12).unwrap(),
            200.0,
        ));
        assert_eq!(source.load_reservations().unwrap().len(), 1);
        assert_eq!(source.describe(), "memory:1 rows");
    }
}
