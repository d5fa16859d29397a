use crate::{
    data::{
        DataType,
        course::{Course, CourseChangeset, CourseFilter, NewCourse},
    },
    error::{CommitTransactionSnafu, CoursebookResult, MissingCourseSnafu},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use snafu::{OptionExt, ResultExt};

pub async fn get_courses(
    State(state): State<AppState>,
    Query(filter): Query<CourseFilter>,
) -> CoursebookResult<Json<Vec<Course>>> {
    Ok(Json(Course::get_all_filtered(&state, &filter).await?))
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> CoursebookResult<Json<Course>> {
    let mut conn = state.get_connection().await?;
    let course = Course::get_from_db_by_id(id, &mut conn)
        .await?
        .context(MissingCourseSnafu { id })?;

    Ok(Json(course))
}

pub async fn post_new_course(
    State(state): State<AppState>,
    Json(new_course): Json<NewCourse>,
) -> CoursebookResult<(StatusCode, Json<Course>)> {
    let mut tx = state.get_transaction().await?;

    let id = Course::insert_into_database(new_course, &mut tx).await?;
    let course = Course::get_from_db_by_id(id, &mut tx)
        .await?
        .context(MissingCourseSnafu { id })?;

    tx.commit().await.context(CommitTransactionSnafu)?;

    info!(%id, "Created course");
    Ok((StatusCode::CREATED, Json(course)))
}

pub async fn patch_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(changeset): Json<CourseChangeset>,
) -> CoursebookResult<Json<Course>> {
    let mut tx = state.get_transaction().await?;

    Course::get_from_db_by_id(id, &mut tx)
        .await?
        .context(MissingCourseSnafu { id })?;
    Course::update_in_database(id, changeset, &mut tx).await?;
    let course = Course::get_from_db_by_id(id, &mut tx)
        .await?
        .context(MissingCourseSnafu { id })?;

    tx.commit().await.context(CommitTransactionSnafu)?;

    Ok(Json(course))
}

pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> CoursebookResult<StatusCode> {
    let mut tx = state.get_transaction().await?;

    Course::get_from_db_by_id(id, &mut tx)
        .await?
        .context(MissingCourseSnafu { id })?;
    Course::remove_from_database(id, &mut tx).await?;

    tx.commit().await.context(CommitTransactionSnafu)?;

    info!(%id, "Deleted course");
    Ok(StatusCode::NO_CONTENT)
}
