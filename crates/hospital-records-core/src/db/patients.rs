//! Patient and insurance operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::{Insurance, Patient};

impl Database {
    /// Insert a new patient.
    pub fn insert_patient(&self, patient: &Patient) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO patient (
                id, first_name, last_name, dob, ssn, gender, address, physician_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                patient.id,
                patient.first_name,
                patient.last_name,
                patient.dob,
                patient.ssn,
                patient.gender,
                patient.address,
                patient.physician_id,
            ],
        )?;
        Ok(())
    }

    /// Update an existing patient.
    pub fn update_patient(&self, patient: &Patient) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE patient SET
                first_name = ?2,
                last_name = ?3,
                dob = ?4,
                ssn = ?5,
                gender = ?6,
                address = ?7,
                physician_id = ?8
            WHERE id = ?1
            "#,
            params![
                patient.id,
                patient.first_name,
                patient.last_name,
                patient.dob,
                patient.ssn,
                patient.gender,
                patient.address,
                patient.physician_id,
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a patient by id.
    pub fn get_patient(&self, id: i64) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                r#"
                SELECT id, first_name, last_name, dob, ssn, gender, address, physician_id
                FROM patient
                WHERE id = ?
                "#,
                [id],
                Self::patient_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List patients assigned to a physician (the physician -> patients
    /// relationship).
    pub fn patients_for_physician(&self, physician_id: i64) -> DbResult<Vec<Patient>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, first_name, last_name, dob, ssn, gender, address, physician_id
            FROM patient
            WHERE physician_id = ?
            ORDER BY last_name, first_name
            "#,
        )?;

        let rows = stmt.query_map([physician_id], Self::patient_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Search patients by family name (prefix match).
    pub fn search_patients(&self, query: &str, limit: usize) -> DbResult<Vec<Patient>> {
        let pattern = format!("{}%", query);
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, first_name, last_name, dob, ssn, gender, address, physician_id
            FROM patient
            WHERE last_name LIKE ?
            ORDER BY last_name, first_name
            LIMIT ?
            "#,
        )?;

        let rows = stmt.query_map(params![pattern, limit as i64], Self::patient_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a patient.
    pub fn delete_patient(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM patient WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }

    fn patient_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Patient> {
        Ok(Patient {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            dob: row.get(3)?,
            ssn: row.get(4)?,
            gender: row.get(5)?,
            address: row.get(6)?,
            physician_id: row.get(7)?,
        })
    }

    /// Insert a new insurance policy.
    pub fn insert_insurance(&self, insurance: &Insurance) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO insurance (id, patient_id, provider_name, policy_number)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                insurance.id,
                insurance.patient_id,
                insurance.provider_name,
                insurance.policy_number,
            ],
        )?;
        Ok(())
    }

    /// Get an insurance policy by id.
    pub fn get_insurance(&self, id: i64) -> DbResult<Option<Insurance>> {
        self.conn
            .query_row(
                "SELECT id, patient_id, provider_name, policy_number FROM insurance WHERE id = ?",
                [id],
                |row| {
                    Ok(Insurance {
                        id: row.get(0)?,
                        patient_id: row.get(1)?,
                        provider_name: row.get(2)?,
                        policy_number: row.get(3)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// List policies held by a patient (the patient -> insurances
    /// relationship).
    pub fn insurances_for_patient(&self, patient_id: i64) -> DbResult<Vec<Insurance>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, provider_name, policy_number
            FROM insurance
            WHERE patient_id = ?
            ORDER BY provider_name
            "#,
        )?;

        let rows = stmt.query_map([patient_id], |row| {
            Ok(Insurance {
                id: row.get(0)?,
                patient_id: row.get(1)?,
                provider_name: row.get(2)?,
                policy_number: row.get(3)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
