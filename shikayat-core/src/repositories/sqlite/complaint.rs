// src/repositories/sqlite/complaint.rs

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use tracing::debug;

use crate::Error;
use crate::models::{Complaint, ComplaintFilter, DEFAULT_STATUS, NewComplaint};
use crate::repositories::ComplaintRepository;
use crate::utils::time::{current_epoch_ms, from_epoch_ms};

const COLUMNS: &str =
    "id, name, email, role, title, description, category, location, status, created_at, updated_at";

pub struct SqliteComplaintRepository {
    pub pool: sqlx::Pool<sqlx::Sqlite>,
}

impl SqliteComplaintRepository {
    pub fn new(pool: sqlx::Pool<sqlx::Sqlite>) -> Self {
        Self { pool }
    }
}

fn row_to_complaint(r: &SqliteRow) -> Result<Complaint, Error> {
    Ok(Complaint {
        id: r.try_get("id")?,
        name: r.try_get("name")?,
        email: r.try_get("email")?,
        role: r.try_get("role")?,
        title: r.try_get("title")?,
        description: r.try_get("description")?,
        category: r.try_get("category")?,
        location: r.try_get("location")?,
        status: r.try_get("status")?,
        created_at: from_epoch_ms(r.try_get::<i64, _>("created_at")?),
        updated_at: from_epoch_ms(r.try_get::<i64, _>("updated_at")?),
    })
}

#[async_trait::async_trait]
impl ComplaintRepository for SqliteComplaintRepository {
    async fn insert(&self, new: &NewComplaint) -> Result<Complaint, Error> {
        let now = current_epoch_ms();
        let result = sqlx::query(
            r#"
            INSERT INTO complaints
                (name, email, role, title, description, category, location, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
            .bind(&new.name)
            .bind(&new.email)
            .bind(&new.role)
            .bind(&new.title)
            .bind(&new.description)
            .bind(&new.category)
            .bind(&new.location)
            .bind(DEFAULT_STATUS)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted complaint id={}", id);

        Ok(Complaint {
            id,
            name: new.name.clone(),
            email: new.email.clone(),
            role: new.role.clone(),
            title: new.title.clone(),
            description: new.description.clone(),
            category: new.category.clone(),
            location: new.location.clone(),
            status: DEFAULT_STATUS.to_string(),
            created_at: from_epoch_ms(now),
            updated_at: from_epoch_ms(now),
        })
    }

    async fn get(&self, id: i64) -> Result<Option<Complaint>, Error> {
        let row = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM complaints WHERE id = ?"
        ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(row_to_complaint(&r)?)),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &ComplaintFilter) -> Result<Vec<Complaint>, Error> {
        let mut sql = format!("SELECT {COLUMNS} FROM complaints");
        let mut clauses: Vec<&str> = Vec::new();
        let mut binds: Vec<String> = Vec::new();

        if let Some(q) = &filter.q {
            // SQLite LIKE is case-insensitive for ASCII; a NULL location
            // never matches.
            clauses.push("(title LIKE ? OR description LIKE ? OR location LIKE ?)");
            let pattern = format!("%{}%", q);
            binds.push(pattern.clone());
            binds.push(pattern.clone());
            binds.push(pattern);
        }
        if let Some(status) = &filter.status {
            clauses.push("status = ?");
            binds.push(status.clone());
        }
        if let Some(role) = &filter.role {
            clauses.push("role = ?");
            binds.push(role.clone());
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        // Newest first; ties fall back to insertion order.
        sql.push_str(" ORDER BY created_at DESC, id ASC");

        let mut query = sqlx::query(&sql);
        for b in &binds {
            query = query.bind(b);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(row_to_complaint).collect()
    }

    async fn update_status(&self, id: i64, new_status: &str) -> Result<Complaint, Error> {
        let result = sqlx::query(
            r#"
            UPDATE complaints
            SET status = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
            .bind(new_status)
            .bind(current_epoch_ms())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("complaint {id}")));
        }

        self.get(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("complaint {id}")))
    }
}
