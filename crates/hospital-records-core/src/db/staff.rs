//! Employee, manager and nurse operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::{Employee, Manager, Nurse};

impl Database {
    /// Insert a new employee.
    pub fn insert_employee(&self, employee: &Employee) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO employee (
                id, first_name, last_name, ssn, position, hospital_id, department_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                employee.id,
                employee.first_name,
                employee.last_name,
                employee.ssn,
                employee.position,
                employee.hospital_id,
                employee.department_id,
            ],
        )?;
        Ok(())
    }

    /// Get an employee by id.
    pub fn get_employee(&self, id: i64) -> DbResult<Option<Employee>> {
        self.conn
            .query_row(
                r#"
                SELECT id, first_name, last_name, ssn, position, hospital_id, department_id
                FROM employee
                WHERE id = ?
                "#,
                [id],
                Self::employee_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List employees working at a hospital.
    pub fn employees_for_hospital(&self, hospital_id: i64) -> DbResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, first_name, last_name, ssn, position, hospital_id, department_id
            FROM employee
            WHERE hospital_id = ?
            ORDER BY last_name, first_name
            "#,
        )?;

        let rows = stmt.query_map([hospital_id], Self::employee_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn employee_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
        Ok(Employee {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            ssn: row.get(3)?,
            position: row.get(4)?,
            hospital_id: row.get(5)?,
            department_id: row.get(6)?,
        })
    }

    /// Insert a new manager row.
    pub fn insert_manager(&self, manager: &Manager) -> DbResult<()> {
        self.conn
            .execute("INSERT INTO manager (id) VALUES (?1)", [manager.id])?;
        Ok(())
    }

    /// Get a manager by id.
    pub fn get_manager(&self, id: i64) -> DbResult<Option<Manager>> {
        self.conn
            .query_row("SELECT id FROM manager WHERE id = ?", [id], |row| {
                Ok(Manager { id: row.get(0)? })
            })
            .optional()
            .map_err(Into::into)
    }

    /// Insert a new nurse row.
    pub fn insert_nurse(&self, nurse: &Nurse) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO nurse (id, qualification) VALUES (?1, ?2)",
            params![nurse.id, nurse.qualification],
        )?;
        Ok(())
    }

    /// Get a nurse by id.
    pub fn get_nurse(&self, id: i64) -> DbResult<Option<Nurse>> {
        self.conn
            .query_row(
                "SELECT id, qualification FROM nurse WHERE id = ?",
                [id],
                |row| {
                    Ok(Nurse {
                        id: row.get(0)?,
                        qualification: row.get(1)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }
}
