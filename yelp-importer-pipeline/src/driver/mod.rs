//! This module defines the `ImportDriver` responsible for coordinating the
//! load pipeline.
//! It runs the eight population passes strictly sequentially in foreign-key
//! order, parent entities before the link tables that reference them.
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info};
use yelp_importer_repository::ImportRepository;

use crate::errors::{DriverError, LoaderError};
use crate::loader::{self, PassReport};

/// Paths of the four newline-delimited JSON dumps.
///
/// The business dump feeds four passes; the user dump feeds two.
#[derive(Debug, Clone)]
pub struct SourceFiles {
    pub business: PathBuf,
    pub user: PathBuf,
    pub tip: PathBuf,
    pub checkin: PathBuf,
}

/// `ImportDriver` runs the full import against one repository.
///
/// Configuration (sources, batch size) is held explicitly and threaded into
/// every pass; there is no process-wide state. A pass failure is logged and
/// never re-raised, so all eight passes always run; re-running the whole
/// driver is the only recovery path after a partial failure.
pub struct ImportDriver {
    repository: Arc<dyn ImportRepository>,
    sources: SourceFiles,
    batch_size: usize,
}

impl ImportDriver {
    pub fn new(
        repository: Arc<dyn ImportRepository>,
        sources: SourceFiles,
        batch_size: usize,
    ) -> Self {
        Self {
            repository,
            sources,
            batch_size,
        }
    }

    /// Runs the eight passes in fixed order and returns the reports of the
    /// passes that completed.
    ///
    /// # Errors
    ///
    /// Returns an error only before the pipeline starts: when the schema
    /// probe fails or reports missing tables.
    pub async fn run(&self) -> Result<Vec<PassReport>, DriverError> {
        if !self.repository.check_tables_created().await? {
            return Err(DriverError::TablesMissing);
        }

        let repository = self.repository.as_ref();
        let batch = self.batch_size;
        let mut reports = Vec::with_capacity(8);

        // Parent entities first so link and value rows find their foreign keys.
        record(
            "business",
            loader::load_businesses(&self.sources.business, repository, batch).await,
            &mut reports,
        );
        record(
            "business_category",
            loader::load_business_categories(&self.sources.business, repository, batch).await,
            &mut reports,
        );
        record(
            "business_attribute_value",
            loader::load_business_attributes(&self.sources.business, repository, batch).await,
            &mut reports,
        );
        record(
            "hours",
            loader::load_hours(&self.sources.business, repository, batch).await,
            &mut reports,
        );
        record(
            "yelp_user",
            loader::load_users(&self.sources.user, repository, batch).await,
            &mut reports,
        );
        record(
            "friendship",
            loader::load_friendships(&self.sources.user, repository, batch).await,
            &mut reports,
        );
        record(
            "tip",
            loader::load_tips(&self.sources.tip, repository, batch).await,
            &mut reports,
        );
        record(
            "checkin",
            loader::load_checkins(&self.sources.checkin, repository, batch).await,
            &mut reports,
        );

        let written: u64 = reports.iter().map(|report| report.rows_written).sum();
        let skipped: u64 = reports.iter().map(|report| report.rows_skipped).sum();
        info!(
            passes = reports.len(),
            rows_written = written,
            rows_skipped = skipped,
            "import complete"
        );
        Ok(reports)
    }
}

fn record(
    pass: &'static str,
    outcome: Result<PassReport, LoaderError>,
    reports: &mut Vec<PassReport>,
) {
    match outcome {
        Ok(report) => {
            info!(
                pass,
                lines = report.lines_read,
                written = report.rows_written,
                skipped = report.rows_skipped,
                "pass complete"
            );
            reports.push(report);
        }
        Err(error) => error!(pass, %error, "pass aborted"),
    }
}
