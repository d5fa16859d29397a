use crate::{
    data::{DataType, student::Student},
    error::{
        CoursebookResult, GetDatabaseConnectionSnafu, MakeQuerySnafu, MissingStudentSnafu,
    },
};
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};
use snafu::{OptionExt, ResultExt};
use sqlx::{Pool, Sqlite, SqliteConnection};

#[derive(Debug, Serialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub students: Vec<i64>,
}

#[derive(sqlx::FromRow)]
struct CourseRow {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
pub struct NewCourse {
    pub name: String,
    pub students: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
pub struct CourseChangeset {
    pub name: Option<String>,
    pub students: Option<Vec<i64>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CourseFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl Course {
    pub async fn get_all_filtered(
        pool: &Pool<Sqlite>,
        filter: &CourseFilter,
    ) -> CoursebookResult<Vec<Self>> {
        let mut conn = pool.acquire().await.context(GetDatabaseConnectionSnafu)?;

        let rows: Vec<CourseRow> = sqlx::query_as(
            "SELECT id, name FROM courses WHERE (?1 IS NULL OR id = ?1) AND (?2 IS NULL OR name = ?2) ORDER BY id",
        )
        .bind(filter.id)
        .bind(filter.name.as_deref())
        .fetch(&mut *conn)
        .try_collect()
        .await
        .context(MakeQuerySnafu)?;

        let mut courses = Vec::with_capacity(rows.len());
        for CourseRow { id, name } in rows {
            let students = get_enrolled_students(id, &mut conn).await?;
            courses.push(Self { id, name, students });
        }
        Ok(courses)
    }

    pub async fn update_in_database(
        id: i64,
        changeset: CourseChangeset,
        conn: &mut SqliteConnection,
    ) -> CoursebookResult<()> {
        if let Some(name) = changeset.name {
            sqlx::query("UPDATE courses SET name = ?1 WHERE id = ?2")
                .bind(name)
                .bind(id)
                .execute(&mut *conn)
                .await
                .context(MakeQuerySnafu)?;
        }

        if let Some(students) = changeset.students {
            set_enrolled_students(id, &students, conn).await?;
        }

        Ok(())
    }
}

impl DataType for Course {
    type Id = i64;
    type FormForAdding = NewCourse;

    async fn get_from_db_by_id(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> CoursebookResult<Option<Self>> {
        let Some(CourseRow { id, name }) =
            sqlx::query_as("SELECT id, name FROM courses WHERE id = ?1")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await
                .context(MakeQuerySnafu)?
        else {
            return Ok(None);
        };

        let students = get_enrolled_students(id, conn).await?;
        Ok(Some(Self { id, name, students }))
    }

    async fn get_all(pool: &Pool<Sqlite>) -> CoursebookResult<Vec<Self>> {
        Self::get_all_filtered(pool, &CourseFilter::default()).await
    }

    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> CoursebookResult<Self::Id> {
        let NewCourse { name, students } = to_be_added;

        let id = sqlx::query_scalar("INSERT INTO courses (name) VALUES (?1) RETURNING id")
            .bind(name)
            .fetch_one(&mut *conn)
            .await
            .context(MakeQuerySnafu)?;

        if let Some(students) = students {
            set_enrolled_students(id, &students, conn).await?;
        }

        Ok(id)
    }

    async fn remove_from_database(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> CoursebookResult<()> {
        sqlx::query("DELETE FROM course_students WHERE course_id = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .context(MakeQuerySnafu)?;
        sqlx::query("DELETE FROM courses WHERE id = ?1")
            .bind(id)
            .execute(conn)
            .await
            .context(MakeQuerySnafu)?;
        Ok(())
    }
}

async fn get_enrolled_students(
    course_id: i64,
    conn: &mut SqliteConnection,
) -> CoursebookResult<Vec<i64>> {
    sqlx::query_scalar(
        "SELECT student_id FROM course_students WHERE course_id = ?1 ORDER BY student_id",
    )
    .bind(course_id)
    .fetch_all(conn)
    .await
    .context(MakeQuerySnafu)
}

///Replaces the enrolment list wholesale, the way a serializer writes a many-to-many field.
async fn set_enrolled_students(
    course_id: i64,
    students: &[i64],
    conn: &mut SqliteConnection,
) -> CoursebookResult<()> {
    for student_id in students {
        Student::get_from_db_by_id(*student_id, &mut *conn)
            .await?
            .context(MissingStudentSnafu { id: *student_id })?;
    }

    sqlx::query("DELETE FROM course_students WHERE course_id = ?1")
        .bind(course_id)
        .execute(&mut *conn)
        .await
        .context(MakeQuerySnafu)?;

    for student_id in students {
        sqlx::query("INSERT INTO course_students (course_id, student_id) VALUES (?1, ?2)")
            .bind(course_id)
            .bind(student_id)
            .execute(&mut *conn)
            .await
            .context(MakeQuerySnafu)?;
    }

    Ok(())
}
