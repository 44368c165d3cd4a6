use crate::reservation::Reservation;
use crate::source::{reservation_from_cells, ReservationSource, SourceError};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::path::{Path, PathBuf};

/// SQLite-backed reservation source.
///
/// Reads the `reservations` table. The schema is created on open so that a
/// fresh database can be seeded with [`SqliteReservationSource::insert_reservations`].
#[derive(Debug)]
pub struct SqliteReservationSource {
    conn: Connection,
    location: String,
}

impl SqliteReservationSource {
    /// Opens (or creates) a file-based database.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or the connection cannot
    /// be established.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self, SourceError> {
        let path = db_path.as_ref();
        if !path.exists() {
            return Err(SourceError::NotFound(PathBuf::from(path)));
        }

        let conn = Connection::open(path)?;
        let source = SqliteReservationSource {
            conn,
            location: path.display().to_string(),
        };
        source.ensure_schema()?;
        Ok(source)
    }

    /// Creates a source over an in-memory database. Useful for testing.
    pub fn new_in_memory() -> SqliteResult<Self> {
        let conn = Connection::open_in_memory()?;
        let source = SqliteReservationSource {
            conn,
            location: ":memory:".to_string(),
        };
        source.ensure_schema()?;
        Ok(source)
    }

    /// Ensures the reservations table exists.
    fn ensure_schema(&self) -> SqliteResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS reservations (
                id TEXT NOT NULL,
                checkin TEXT NOT NULL,
                checkout TEXT NOT NULL,
                revenue REAL NOT NULL,
                building TEXT
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_reservations_checkin ON reservations(checkin)",
            [],
        )?;

        Ok(())
    }

    /// Appends a batch of reservations in one transaction.
    ///
    /// Ids are not unique keys: a sheet may repeat an id and every row is kept.
    pub fn insert_reservations(&mut self, reservations: &[Reservation]) -> SqliteResult<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO reservations (id, checkin, checkout, revenue, building)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for reservation in reservations {
                stmt.execute(params![
                    reservation.id,
                    reservation.check_in,
                    reservation.check_out,
                    reservation.revenue,
                    reservation.building,
                ])?;
            }
        }
        tx.commit()?;

        Ok(reservations.len())
    }

    /// Returns a reference to the underlying SQLite connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl ReservationSource for SqliteReservationSource {
    fn load_reservations(&self) -> Result<Vec<Reservation>, SourceError> {
        let mut stmt = self.conn.prepare(
            "SELECT CAST(id AS TEXT), checkin, checkout, revenue, building
             FROM reservations
             ORDER BY rowid",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, Option<String>>(4)?,
            ))
        })?;

        let mut reservations = Vec::new();
        for (index, row) in rows.enumerate() {
            let (id, check_in, check_out, revenue, building) = row.map_err(|e| {
                SourceError::InvalidRow {
                    row: index + 1,
                    message: e.to_string(),
                }
            })?;

            reservations.push(reservation_from_cells(
                index + 1,
                &id,
                &check_in,
                &check_out,
                &revenue.to_string(),
                building.as_deref(),
            )?);
        }

        log::info!(
            "Loaded {} reservations from sqlite:{}",
            reservations.len(),
            self.location
        );

        Ok(reservations)
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.location)
    }
}
