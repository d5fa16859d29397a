use crate::error::CoursebookResult;
use sqlx::{Pool, Sqlite, SqliteConnection};

pub mod course;
pub mod student;

#[allow(async_fn_in_trait)]
pub trait DataType: Sized {
    type Id;
    type FormForAdding;

    async fn get_from_db_by_id(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> CoursebookResult<Option<Self>>;
    async fn get_all(pool: &Pool<Sqlite>) -> CoursebookResult<Vec<Self>>;
    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> CoursebookResult<Self::Id>;
    async fn remove_from_database(id: Self::Id, conn: &mut SqliteConnection)
    -> CoursebookResult<()>;
}
