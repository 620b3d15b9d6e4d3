//! Department repository.

use chrono::Utc;

use reg_core::entities::Department;
use reg_core::ids::PREFIX_DEPARTMENT;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::RegService;

const SELECT_COLS: &str = "id, name, created_at";

fn row_to_department(row: &libsql::Row) -> Result<Department, DatabaseError> {
    Ok(Department {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

impl RegService {
    pub async fn create_department(&self, name: &str) -> Result<Department, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_DEPARTMENT).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO departments ({SELECT_COLS}) VALUES (?1, ?2, ?3)"),
                libsql::params![id.as_str(), name, now.to_rfc3339()],
            )
            .await?;

        Ok(Department {
            id,
            name: name.to_string(),
            created_at: now,
        })
    }

    pub async fn get_department(&self, id: &str) -> Result<Department, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM departments WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_department(&row)
    }

    pub async fn list_departments(&self) -> Result<Vec<Department>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM departments ORDER BY name"),
                (),
            )
            .await?;

        let mut departments = Vec::new();
        while let Some(row) = rows.next().await? {
            departments.push(row_to_department(&row)?);
        }
        Ok(departments)
    }
}
