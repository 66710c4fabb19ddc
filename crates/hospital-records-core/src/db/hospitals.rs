//! Hospital and department operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::{Department, Hospital};

impl Database {
    /// Insert a new hospital.
    pub fn insert_hospital(&self, hospital: &Hospital) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO hospital (id, name, address) VALUES (?1, ?2, ?3)",
            params![hospital.id, hospital.name, hospital.address],
        )?;
        Ok(())
    }

    /// Get a hospital by id.
    pub fn get_hospital(&self, id: i64) -> DbResult<Option<Hospital>> {
        self.conn
            .query_row(
                "SELECT id, name, address FROM hospital WHERE id = ?",
                [id],
                |row| {
                    Ok(Hospital {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        address: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all hospitals.
    pub fn list_hospitals(&self) -> DbResult<Vec<Hospital>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, address FROM hospital ORDER BY name")?;

        let rows = stmt.query_map([], |row| {
            Ok(Hospital {
                id: row.get(0)?,
                name: row.get(1)?,
                address: row.get(2)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a hospital.
    pub fn delete_hospital(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM hospital WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }

    /// Insert a new department.
    pub fn insert_department(&self, department: &Department) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO department (id, name, hospital_id) VALUES (?1, ?2, ?3)",
            params![department.id, department.name, department.hospital_id],
        )?;
        Ok(())
    }

    /// Get a department by id.
    pub fn get_department(&self, id: i64) -> DbResult<Option<Department>> {
        self.conn
            .query_row(
                "SELECT id, name, hospital_id FROM department WHERE id = ?",
                [id],
                |row| {
                    Ok(Department {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        hospital_id: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// List departments belonging to a hospital.
    pub fn departments_for_hospital(&self, hospital_id: i64) -> DbResult<Vec<Department>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, hospital_id FROM department WHERE hospital_id = ? ORDER BY name",
        )?;

        let rows = stmt.query_map([hospital_id], |row| {
            Ok(Department {
                id: row.get(0)?,
                name: row.get(1)?,
                hospital_id: row.get(2)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::hospital_schema;

    fn setup_db() -> Database {
        Database::open_in_memory(&hospital_schema()).unwrap()
    }

    #[test]
    fn test_insert_and_get_hospital() {
        let db = setup_db();

        let hospital = Hospital::new(1, "General", "1 Main St");
        db.insert_hospital(&hospital).unwrap();

        let retrieved = db.get_hospital(1).unwrap().unwrap();
        assert_eq!(retrieved, hospital);
        assert!(db.get_hospital(2).unwrap().is_none());
    }

    #[test]
    fn test_departments_for_hospital() {
        let db = setup_db();

        db.insert_hospital(&Hospital::new(1, "General", "1 Main St"))
            .unwrap();

        let mut cardio = Department::new(10, "Cardiology");
        cardio.hospital_id = Some(1);
        let mut onco = Department::new(11, "Oncology");
        onco.hospital_id = Some(1);
        let unassigned = Department::new(12, "Radiology");

        db.insert_department(&cardio).unwrap();
        db.insert_department(&onco).unwrap();
        db.insert_department(&unassigned).unwrap();

        let departments = db.departments_for_hospital(1).unwrap();
        assert_eq!(departments.len(), 2);
        assert!(departments.iter().all(|d| d.hospital_id == Some(1)));
    }

    #[test]
    fn test_department_fk_enforced() {
        let db = setup_db();

        let mut dept = Department::new(10, "Cardiology");
        dept.hospital_id = Some(99);

        let err = db.insert_department(&dept).unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[test]
    fn test_delete_hospital() {
        let db = setup_db();

        db.insert_hospital(&Hospital::new(1, "General", "1 Main St"))
            .unwrap();
        assert!(db.delete_hospital(1).unwrap());
        assert!(!db.delete_hospital(1).unwrap());
    }
}
