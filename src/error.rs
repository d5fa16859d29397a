use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use snafu::Snafu;

pub type CoursebookResult<T> = Result<T, CoursebookError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CoursebookError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error getting db connection"))]
    GetDatabaseConnection { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error commiting SQL transaction"))]
    CommitTransaction { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    MigrateError { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to find course with ID: {}", id))]
    MissingCourse { id: i64 },
    #[snafu(display("Unable to find student with ID: {}", id))]
    MissingStudent { id: i64 },
}

impl IntoResponse for CoursebookError {
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        let status_code = match &self {
            Self::OpenDatabase { .. } | Self::GetDatabaseConnection { .. } => ISE,
            Self::MigrateError { .. } => ISE,
            Self::MakeQuery { source } => match source {
                sqlx::Error::RowNotFound => NF,
                _ => ISE,
            },
            Self::CommitTransaction { .. } => ISE,
            Self::BadEnvVar { .. } => ISE,
            Self::MissingCourse { .. } => NF,
            Self::MissingStudent { .. } => BI,
        };

        error!(?self, "Error!");
        (status_code, Json(json!({"detail": self.to_string()}))).into_response()
    }
}
