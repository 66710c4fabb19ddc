//! Physician and appointment operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::{Appointment, Physician};

impl Database {
    /// Insert a new physician.
    pub fn insert_physician(&self, physician: &Physician) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO physician (id, specialty) VALUES (?1, ?2)",
            params![physician.id, physician.specialty],
        )?;
        Ok(())
    }

    /// Get a physician by id.
    pub fn get_physician(&self, id: i64) -> DbResult<Option<Physician>> {
        self.conn
            .query_row(
                "SELECT id, specialty FROM physician WHERE id = ?",
                [id],
                |row| {
                    Ok(Physician {
                        id: row.get(0)?,
                        specialty: row.get(1)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all physicians.
    pub fn list_physicians(&self) -> DbResult<Vec<Physician>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, specialty FROM physician ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(Physician {
                id: row.get(0)?,
                specialty: row.get(1)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Insert a new appointment.
    pub fn insert_appointment(&self, appointment: &Appointment) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO appointment (
                id, patient_id, appointment_date, description, physician_id
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                appointment.id,
                appointment.patient_id,
                appointment.appointment_date,
                appointment.description,
                appointment.physician_id,
            ],
        )?;
        Ok(())
    }

    /// Get an appointment by id.
    pub fn get_appointment(&self, id: i64) -> DbResult<Option<Appointment>> {
        self.conn
            .query_row(
                r#"
                SELECT id, patient_id, appointment_date, description, physician_id
                FROM appointment
                WHERE id = ?
                "#,
                [id],
                Self::appointment_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List appointments for a physician, earliest first.
    pub fn appointments_for_physician(&self, physician_id: i64) -> DbResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, appointment_date, description, physician_id
            FROM appointment
            WHERE physician_id = ?
            ORDER BY appointment_date
            "#,
        )?;

        let rows = stmt.query_map([physician_id], Self::appointment_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List appointments for a patient, earliest first.
    pub fn appointments_for_patient(&self, patient_id: i64) -> DbResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, appointment_date, description, physician_id
            FROM appointment
            WHERE patient_id = ?
            ORDER BY appointment_date
            "#,
        )?;

        let rows = stmt.query_map([patient_id], Self::appointment_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn appointment_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Appointment> {
        Ok(Appointment {
            id: row.get(0)?,
            patient_id: row.get(1)?,
            appointment_date: row.get(2)?,
            description: row.get(3)?,
            physician_id: row.get(4)?,
        })
    }
}
