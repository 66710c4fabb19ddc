//! Medication and prescription operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::{Medication, Prescription};

impl Database {
    /// Insert a new medication.
    pub fn insert_medication(&self, medication: &Medication) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO medication (id, name, brand, description) VALUES (?1, ?2, ?3, ?4)",
            params![
                medication.id,
                medication.name,
                medication.brand,
                medication.description,
            ],
        )?;
        Ok(())
    }

    /// Get a medication by id.
    pub fn get_medication(&self, id: i64) -> DbResult<Option<Medication>> {
        self.conn
            .query_row(
                "SELECT id, name, brand, description FROM medication WHERE id = ?",
                [id],
                |row| {
                    Ok(Medication {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        brand: row.get(2)?,
                        description: row.get(3)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// Insert a new prescription.
    pub fn insert_prescription(&self, prescription: &Prescription) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO prescription (
                id, patient_id, prescribing_physician_id, medication_id,
                prescription_date, quantity, dosage, frequency,
                start_date, end_date, refills_available
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
            params![
                prescription.id,
                prescription.patient_id,
                prescription.prescribing_physician_id,
                prescription.medication_id,
                prescription.prescription_date,
                prescription.quantity,
                prescription.dosage,
                prescription.frequency,
                prescription.start_date,
                prescription.end_date,
                prescription.refills_available,
            ],
        )?;
        Ok(())
    }

    /// Get a prescription by id.
    pub fn get_prescription(&self, id: i64) -> DbResult<Option<Prescription>> {
        self.conn
            .query_row(
                r#"
                SELECT id, patient_id, prescribing_physician_id, medication_id,
                       prescription_date, quantity, dosage, frequency,
                       start_date, end_date, refills_available
                FROM prescription
                WHERE id = ?
                "#,
                [id],
                Self::prescription_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List prescriptions for a patient, most recent first.
    pub fn prescriptions_for_patient(&self, patient_id: i64) -> DbResult<Vec<Prescription>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, prescribing_physician_id, medication_id,
                   prescription_date, quantity, dosage, frequency,
                   start_date, end_date, refills_available
            FROM prescription
            WHERE patient_id = ?
            ORDER BY prescription_date DESC
            "#,
        )?;

        let rows = stmt.query_map([patient_id], Self::prescription_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn prescription_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Prescription> {
        Ok(Prescription {
            id: row.get(0)?,
            patient_id: row.get(1)?,
            prescribing_physician_id: row.get(2)?,
            medication_id: row.get(3)?,
            prescription_date: row.get(4)?,
            quantity: row.get(5)?,
            dosage: row.get(6)?,
            frequency: row.get(7)?,
            start_date: row.get(8)?,
            end_date: row.get(9)?,
            refills_available: row.get(10)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::hospital_schema;
    use crate::models::Patient;
    use chrono::NaiveDate;

    fn setup_db() -> Database {
        Database::open_in_memory(&hospital_schema()).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_insert_and_get_medication() {
        let db = setup_db();

        let med = Medication::new(1, "Atorvastatin", "Lipitor", "Statin");
        db.insert_medication(&med).unwrap();

        let retrieved = db.get_medication(1).unwrap().unwrap();
        assert_eq!(retrieved, med);
    }

    #[test]
    fn test_insert_and_get_prescription() {
        let db = setup_db();

        db.insert_patient(&Patient::new(
            1,
            "Jane",
            "Doe",
            date(1980, 1, 1),
            "123-45-6789",
        ))
        .unwrap();
        db.insert_medication(&Medication::new(2, "Atorvastatin", "Lipitor", "Statin"))
            .unwrap();

        let mut rx = Prescription::new(3, 7, date(2024, 3, 15), 30, 2);
        rx.patient_id = Some(1);
        rx.medication_id = Some(2);
        rx.dosage = Some("10mg".into());
        rx.frequency = Some("once daily".into());
        rx.start_date = Some(date(2024, 3, 16));

        db.insert_prescription(&rx).unwrap();

        let retrieved = db.get_prescription(3).unwrap().unwrap();
        assert_eq!(retrieved, rx);
        assert_eq!(retrieved.prescription_date, date(2024, 3, 15));
    }

    #[test]
    fn test_prescriptions_for_patient_most_recent_first() {
        let db = setup_db();

        db.insert_patient(&Patient::new(
            1,
            "Jane",
            "Doe",
            date(1980, 1, 1),
            "123-45-6789",
        ))
        .unwrap();

        let mut older = Prescription::new(10, 7, date(2024, 1, 1), 30, 0);
        older.patient_id = Some(1);
        let mut newer = Prescription::new(11, 7, date(2024, 3, 1), 30, 1);
        newer.patient_id = Some(1);

        db.insert_prescription(&older).unwrap();
        db.insert_prescription(&newer).unwrap();

        let list = db.prescriptions_for_patient(1).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, 11);
    }

    #[test]
    fn test_prescription_medication_fk_enforced() {
        let db = setup_db();

        let mut rx = Prescription::new(3, 7, date(2024, 3, 15), 30, 2);
        rx.medication_id = Some(99);

        let err = db.insert_prescription(&rx).unwrap_err();
        assert!(err.is_constraint_violation());
    }
}
