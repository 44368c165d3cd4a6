use chrono::NaiveDate;
use pricing_dashboard::analytics::{split_at_cutoff, Segment};
use pricing_dashboard::config::DataSourceConfig;
use pricing_dashboard::source::{CsvReservationSource, ReservationSource, SourceError};
use pricing_dashboard::{load_and_prepare, PeakDays, PipelineError, SqliteReservationSource};
use std::io::Write;
use tempfile::NamedTempFile;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 11, d).unwrap()
}

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const SHEET: &str = "\
id,prédio,checkin,checkout,receita
7,B,20/11/2022,21/11/2022,150
3,A,10/11/2022,12/11/2022,200
9,A,2022-11-14,2022-11-14,80
";

#[test]
fn csv_sheet_is_prepared_and_split() {
    init_logging();
    let file = write_csv(SHEET);

    let source = CsvReservationSource::new(file.path());
    let table = load_and_prepare(&source, &PeakDays::default()).unwrap();

    let ids: Vec<&str> = table.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "9", "7"], "rows should be ordered by check-in");

    let rates: Vec<Option<f64>> = table.iter().map(|row| row.price_per_day).collect();
    assert_eq!(rates, vec![Some(100.0), None, Some(150.0)]);
    assert_eq!(table.undefined_rate_count(), 1);

    let split = split_at_cutoff(&table, date(14));
    assert_eq!(split.current.len(), 2, "check-in on the cutoff counts as current");
    assert_eq!(split.future.len(), 1);

    let [current, future] = split.summaries();
    assert_eq!(current.segment, Segment::Current);
    assert_eq!(current.average_daily_rate, Some(100.0));
    assert_eq!(current.average_stay_length, Some(1.0));
    assert_eq!(future.average_daily_rate, Some(150.0));
    assert_eq!(future.average_stay_length, Some(1.0));
}

#[test]
fn negative_stay_aborts_preparation() {
    init_logging();
    let file = write_csv("checkin,checkout,receita,id\n2022-11-12,2022-11-10,300,bad\n");

    let source = CsvReservationSource::new(file.path());
    let err = load_and_prepare(&source, &PeakDays::default()).unwrap_err();

    match err {
        PipelineError::NegativeStay { id, .. } => assert_eq!(id, "bad"),
        other => panic!("expected a negative stay error, got {:?}", other),
    }
}

#[test]
fn unparsable_revenue_reports_row() {
    init_logging();
    let file = write_csv("id,checkin,checkout,receita\n1,2022-11-10,2022-11-11,100\n2,2022-11-11,2022-11-12,abc\n");

    let err = CsvReservationSource::new(file.path())
        .load_reservations()
        .unwrap_err();

    assert!(matches!(err, SourceError::InvalidRow { row: 2, .. }));
}

#[test]
fn missing_revenue_column_is_rejected() {
    let file = write_csv("id,checkin,checkout\n1,2022-11-10,2022-11-11\n");

    let err = CsvReservationSource::new(file.path())
        .load_reservations()
        .unwrap_err();

    assert_eq!(err, SourceError::MissingColumn("receita"));
}

#[test]
fn configured_sqlite_file_round_trips() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reservations.db");
    std::fs::File::create(&path).unwrap();

    {
        let csv = write_csv(SHEET);
        let rows = CsvReservationSource::new(csv.path())
            .load_reservations()
            .unwrap();
        let mut db = SqliteReservationSource::open(&path).unwrap();
        db.insert_reservations(&rows).unwrap();
    }

    let config = DataSourceConfig::from_path(path.clone());
    assert!(matches!(config, DataSourceConfig::Sqlite(_)));

    let source = config.open().unwrap();
    let table = load_and_prepare(source.as_ref(), &PeakDays::default()).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.total_revenue(), 430.0);
    let range = table.check_in_range().unwrap();
    assert_eq!((range.start, range.end), (date(10), date(20)));
}

#[test]
fn missing_file_is_not_found() {
    let config = DataSourceConfig::from_path("/nonexistent/reservas.csv");

    let err = config.open().and_then(|source| source.load_reservations()).unwrap_err();

    assert!(matches!(err, SourceError::NotFound(_)));
}
