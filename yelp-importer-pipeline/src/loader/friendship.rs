use std::path::Path;

use yelp_importer_repository::ImportRepository;
use yelp_importer_shared::types::{Friendship, UserRecord};

use crate::errors::LoaderError;
use crate::loader::{flush, PassReport};
use crate::source::JsonSource;

/// Populates the Friendship table from the user dump, one directed edge per
/// listed friend id. Followee ids are not validated against the YelpUser
/// table.
pub async fn load_friendships(
    path: &Path,
    repository: &dyn ImportRepository,
    batch_size: usize,
) -> Result<PassReport, LoaderError> {
    let mut report = PassReport::new("friendship");
    let mut batch: Vec<Friendship> = Vec::with_capacity(batch_size);
    for record in JsonSource::<UserRecord>::open(path)? {
        let record = record?;
        report.lines_read += 1;
        batch.extend(Friendship::expand(&record));
        if batch.len() >= batch_size {
            flush_edges(&mut batch, &mut report, repository).await;
        }
    }
    flush_edges(&mut batch, &mut report, repository).await;
    Ok(report)
}

async fn flush_edges(
    batch: &mut Vec<Friendship>,
    report: &mut PassReport,
    repository: &dyn ImportRepository,
) {
    flush(
        batch,
        report,
        |edge| format!("{}->{}", edge.follower_id, edge.followee_id),
        async |edges| repository.insert_friendships(edges).await,
    )
    .await;
}
