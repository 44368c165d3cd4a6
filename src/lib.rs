pub mod calendar;
pub mod reservation;
pub mod source;
pub mod sqlite_source;
pub mod pipeline;
pub mod analytics;
pub mod dashboard;
pub mod config;
pub mod server;


pub use calendar::{CalendarFields, DateRange, Locale, PeakDays, Weekday};
pub use reservation::Reservation;
pub use source::{CsvReservationSource, InMemoryReservationSource, ReservationSource, SourceError};
pub use sqlite_source::SqliteReservationSource;
pub use pipeline::{
    adjust_columns,
    build_features,
    load_and_prepare,
    prepare,
    AdjustedReservation,
    FeatureTable,
    PipelineError,
    ReservationFeatures,
};
pub use analytics::{
    daily_aggregates,
    split_at_cutoff,
    stay_length_histogram,
    summarize_segment,
    weekday_aggregates,
    CutoffSplit,
    ReservationAggregates,
    Segment,
    SegmentSummary,
};
pub use dashboard::{ChartKind, ChartSpec, DashboardView, MetricCard};
pub use config::{ConfigError, DashboardConfig, DataSourceConfig};
pub use server::{run_server, ApiError, AppState, ServerConfig};
