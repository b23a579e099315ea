use std::sync::Arc;

use yelp_importer_pipeline::driver::{ImportDriver, SourceFiles};
use yelp_importer_repository::PostgresImportRepository;

use crate::config::Config;
use crate::errors::ImporterError;

/// `Dependencies` wires the external services the importer needs: the
/// PostgreSQL pool, the repository on top of it, and the pipeline driver.
pub struct Dependencies {
    pub driver: ImportDriver,
}

impl Dependencies {
    /// Connects the pool and builds the driver from the given configuration.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or an
    /// `ImporterError` if the pool or repository fails to initialize.
    pub async fn new(config: &Config) -> Result<Self, ImporterError> {
        let pool = sqlx::PgPool::connect(&config.database_url).await?;
        let repository = PostgresImportRepository::new(pool).await?;

        let sources = SourceFiles {
            business: config.business_file.clone(),
            user: config.user_file.clone(),
            tip: config.tip_file.clone(),
            checkin: config.checkin_file.clone(),
        };
        let driver = ImportDriver::new(Arc::new(repository), sources, config.batch_size);

        Ok(Dependencies { driver })
    }
}
