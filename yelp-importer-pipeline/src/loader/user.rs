use std::path::Path;

use tracing::warn;
use yelp_importer_repository::ImportRepository;
use yelp_importer_shared::types::{UserRecord, YelpUser};

use crate::errors::LoaderError;
use crate::loader::{flush, PassReport};
use crate::source::JsonSource;

/// Populates the YelpUser table from the user dump, one row per line.
/// Duplicate user ids are skipped by the repository's conflict no-op; a line
/// with an unparseable signup timestamp skips that row only.
pub async fn load_users(
    path: &Path,
    repository: &dyn ImportRepository,
    batch_size: usize,
) -> Result<PassReport, LoaderError> {
    let mut report = PassReport::new("yelp_user");
    let mut batch: Vec<YelpUser> = Vec::with_capacity(batch_size);
    for record in JsonSource::<UserRecord>::open(path)? {
        let record = record?;
        report.lines_read += 1;
        match YelpUser::try_from(&record) {
            Ok(user) => batch.push(user),
            Err(error) => {
                warn!(user_id = %record.user_id, %error, "skipping user row");
                report.rows_skipped += 1;
            }
        }
        if batch.len() >= batch_size {
            flush_users(&mut batch, &mut report, repository).await;
        }
    }
    flush_users(&mut batch, &mut report, repository).await;
    Ok(report)
}

async fn flush_users(
    batch: &mut Vec<YelpUser>,
    report: &mut PassReport,
    repository: &dyn ImportRepository,
) {
    flush(
        batch,
        report,
        |user| user.user_id.clone(),
        async |users| repository.insert_users(users).await,
    )
    .await;
}
