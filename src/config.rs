use crate::error::{BadEnvVarSnafu, CoursebookResult};
use dotenvy::var;
use snafu::ResultExt;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
}

impl RuntimeConfiguration {
    pub fn new() -> CoursebookResult<Self> {
        Ok(Self {
            db_config: Arc::new(DbConfig::new()?),
        })
    }

    ///Configuration pointed at an arbitrary database URL, eg. `sqlite::memory:` for tests.
    #[must_use]
    pub fn with_db_url(url: impl Into<String>) -> Self {
        Self {
            db_config: Arc::new(DbConfig { url: url.into() }),
        }
    }

    #[must_use]
    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }
}

#[derive(Debug)]
pub struct DbConfig {
    url: String,
}

impl DbConfig {
    pub fn new() -> CoursebookResult<Self> {
        let get_env_var = |name| var(name).context(BadEnvVarSnafu { name });

        //mode=rwc so a fresh deployment creates the file rather than erroring
        let path = get_env_var("DB_PATH")?;
        Ok(Self {
            url: format!("sqlite://{path}?mode=rwc"),
        })
    }

    #[must_use]
    pub fn get_db_path(&self) -> String {
        self.url.clone()
    }
}
