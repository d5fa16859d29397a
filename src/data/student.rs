use crate::{
    data::DataType,
    error::{CoursebookResult, MakeQuerySnafu},
};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use sqlx::{Pool, Sqlite, SqliteConnection};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct NewStudent {
    pub name: String,
}

impl DataType for Student {
    type Id = i64;
    type FormForAdding = NewStudent;

    async fn get_from_db_by_id(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> CoursebookResult<Option<Self>> {
        sqlx::query_as("SELECT id, name FROM students WHERE id = ?1")
            .bind(id)
            .fetch_optional(conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn get_all(pool: &Pool<Sqlite>) -> CoursebookResult<Vec<Self>> {
        sqlx::query_as("SELECT id, name FROM students")
            .fetch_all(pool)
            .await
            .context(MakeQuerySnafu)
    }

    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> CoursebookResult<Self::Id> {
        let NewStudent { name } = to_be_added;

        sqlx::query_scalar("INSERT INTO students (name) VALUES (?1) RETURNING id")
            .bind(name)
            .fetch_one(conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn remove_from_database(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> CoursebookResult<()> {
        sqlx::query("DELETE FROM course_students WHERE student_id = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .context(MakeQuerySnafu)?;
        sqlx::query("DELETE FROM students WHERE id = ?1")
            .bind(id)
            .execute(conn)
            .await
            .context(MakeQuerySnafu)?;
        Ok(())
    }
}
