//! Database repository for the three collections.
//!
//! Every operation is a single statement, so no explicit transactions are needed.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{SubjectCatalog, Teacher, TeacherDetails, Timetable, Upserted};

/// Fixed key of the single `SubjectsList` document.
pub const SUBJECTS_LIST_KEY: &str = "subjects";
/// Fixed key of the single `Timetable` document.
pub const TIMETABLE_KEY: &str = "timetable";

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Close the underlying pool, waiting for in-flight queries.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    // ==================== TEACHER OPERATIONS ====================

    /// List all teachers in insertion order.
    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, name, email, teacher_id, subjects FROM "TeachersList" ORDER BY rowid"#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(teacher_from_row).collect()
    }

    /// Whether any teacher carries the given external ID.
    pub async fn teacher_exists(&self, teacher_id: i64) -> Result<bool, AppError> {
        let exists: i64 = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM "TeachersList" WHERE teacher_id = ?)"#,
        )
        .bind(teacher_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists != 0)
    }

    /// Insert a teacher. Duplicate external IDs are accepted.
    pub async fn create_teacher(&self, details: &TeacherDetails) -> Result<Teacher, AppError> {
        let doc_id = uuid::Uuid::new_v4().to_string();
        let subjects_json = serde_json::to_string(&details.subjects)?;

        sqlx::query(
            r#"INSERT INTO "TeachersList" (id, name, email, teacher_id, subjects) VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(&doc_id)
        .bind(&details.name)
        .bind(&details.email)
        .bind(details.id)
        .bind(&subjects_json)
        .execute(&self.pool)
        .await?;

        Ok(Teacher {
            doc_id,
            name: details.name.clone(),
            email: details.email.clone(),
            id: details.id,
            subjects: details.subjects.clone(),
        })
    }

    /// Delete the first teacher (in insertion order) with the given external ID.
    ///
    /// Returns `false` when no record matched.
    pub async fn delete_teacher(&self, teacher_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM "TeachersList"
            WHERE rowid = (
                SELECT rowid FROM "TeachersList" WHERE teacher_id = ? ORDER BY rowid LIMIT 1
            )
            "#,
        )
        .bind(teacher_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // ==================== SUBJECT CATALOG OPERATIONS ====================

    /// List all subject catalog documents.
    pub async fn list_subjects(&self) -> Result<Vec<SubjectCatalog>, AppError> {
        let rows = sqlx::query(r#"SELECT id, subjects, sections FROM "SubjectsList" ORDER BY rowid"#)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(subjects_from_row).collect()
    }

    /// Create or replace the subject catalog in one statement.
    pub async fn set_subjects(
        &self,
        subjects: &[String],
        sections: &serde_json::Value,
    ) -> Result<Upserted, AppError> {
        let subjects_json = serde_json::to_string(subjects)?;
        let sections_json = serde_json::to_string(sections)?;

        let revision: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO "SubjectsList" (id, subjects, sections, revision) VALUES (?, ?, ?, 1)
            ON CONFLICT(id) DO UPDATE SET
                subjects = excluded.subjects,
                sections = excluded.sections,
                revision = "SubjectsList".revision + 1
            RETURNING revision
            "#,
        )
        .bind(SUBJECTS_LIST_KEY)
        .bind(&subjects_json)
        .bind(&sections_json)
        .fetch_one(&self.pool)
        .await?;

        Ok(upserted(revision))
    }

    // ==================== TIMETABLE OPERATIONS ====================

    /// List all timetable documents.
    pub async fn list_timetables(&self) -> Result<Vec<Timetable>, AppError> {
        let rows = sqlx::query(r#"SELECT id, timetable FROM "Timetable" ORDER BY rowid"#)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(timetable_from_row).collect()
    }

    /// Create or replace the timetable in one statement.
    pub async fn save_timetable(&self, payload: &serde_json::Value) -> Result<Upserted, AppError> {
        let payload_json = serde_json::to_string(payload)?;

        let revision: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO "Timetable" (id, timetable, revision) VALUES (?, ?, 1)
            ON CONFLICT(id) DO UPDATE SET
                timetable = excluded.timetable,
                revision = "Timetable".revision + 1
            RETURNING revision
            "#,
        )
        .bind(TIMETABLE_KEY)
        .bind(&payload_json)
        .fetch_one(&self.pool)
        .await?;

        Ok(upserted(revision))
    }
}

fn upserted(revision: i64) -> Upserted {
    if revision == 1 {
        Upserted::Created
    } else {
        Upserted::Updated
    }
}

// ==================== ROW MAPPING ====================

fn teacher_from_row(row: &SqliteRow) -> Result<Teacher, AppError> {
    let subjects: String = row.try_get("subjects")?;
    Ok(Teacher {
        doc_id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        id: row.try_get("teacher_id")?,
        subjects: serde_json::from_str(&subjects)?,
    })
}

fn subjects_from_row(row: &SqliteRow) -> Result<SubjectCatalog, AppError> {
    let subjects: String = row.try_get("subjects")?;
    let sections: String = row.try_get("sections")?;
    Ok(SubjectCatalog {
        doc_id: row.try_get("id")?,
        subjects: serde_json::from_str(&subjects)?,
        sections: serde_json::from_str(&sections)?,
    })
}

fn timetable_from_row(row: &SqliteRow) -> Result<Timetable, AppError> {
    let timetable: String = row.try_get("timetable")?;
    Ok(Timetable {
        doc_id: row.try_get("id")?,
        timetable: serde_json::from_str(&timetable)?,
    })
}
