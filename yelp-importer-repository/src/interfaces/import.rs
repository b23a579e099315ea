//! This module defines the `ImportRepository` trait, which provides an
//! interface for writing batches of normalized Yelp rows to the underlying
//! data store. It abstracts the database operations used by the load passes.
use yelp_importer_shared::types::{
    AttributeValue, Business, CategoryLink, Checkin, Friendship, OpeningHours, Tip, YelpUser,
};

use crate::errors::ImportRepositoryError;

/// A trait that defines the interface for writing imported rows.
///
/// Every batch method is an empty-slice no-op and otherwise runs in exactly
/// one transaction, so a call with a single row gives that row its own
/// transaction. Conflict policies are part of the contract and are noted per
/// method; a conflict-tolerant insert silently skips rows that violate the
/// stated uniqueness instead of failing.
#[async_trait::async_trait]
pub trait ImportRepository: Send + Sync {
    /// Inserts business rows; duplicate business ids are skipped, never
    /// overwritten.
    async fn insert_businesses(
        &self,
        businesses: &[Business],
    ) -> Result<(), ImportRepositoryError>;

    /// Upserts category names into the Category lookup table; existing names
    /// are skipped.
    ///
    /// # Arguments
    ///
    /// * `names` - Distinct category names referenced by an upcoming batch of
    ///   link rows. Callers must issue this before `insert_business_categories`
    ///   for the same batch so every link finds its parent row.
    async fn upsert_categories(&self, names: &[String]) -> Result<(), ImportRepositoryError>;

    /// Inserts (business, category) link rows. No conflict policy: re-running
    /// the pass duplicates links.
    async fn insert_business_categories(
        &self,
        links: &[CategoryLink],
    ) -> Result<(), ImportRepositoryError>;

    /// Upserts attribute names into the Attribute lookup table; existing
    /// names are skipped. Same ordering contract as `upsert_categories`.
    async fn upsert_attributes(&self, names: &[String]) -> Result<(), ImportRepositoryError>;

    /// Inserts (business, attribute, value) rows. No conflict policy.
    async fn insert_attribute_values(
        &self,
        values: &[AttributeValue],
    ) -> Result<(), ImportRepositoryError>;

    /// Inserts opening-hours rows. No conflict policy: re-running the pass
    /// duplicates rows.
    async fn insert_hours(&self, hours: &[OpeningHours]) -> Result<(), ImportRepositoryError>;

    /// Inserts user rows; duplicate user ids are skipped, never overwritten.
    async fn insert_users(&self, users: &[YelpUser]) -> Result<(), ImportRepositoryError>;

    /// Inserts friendship edges; duplicate edges are skipped.
    async fn insert_friendships(
        &self,
        friendships: &[Friendship],
    ) -> Result<(), ImportRepositoryError>;

    /// Inserts tip rows; duplicates on (user, business, timestamp) are
    /// skipped.
    async fn insert_tips(&self, tips: &[Tip]) -> Result<(), ImportRepositoryError>;

    /// Inserts check-in rows; duplicates on (business, timestamp) are
    /// skipped.
    async fn insert_checkins(&self, checkins: &[Checkin]) -> Result<(), ImportRepositoryError>;

    /// Checks that every target table exists in the connected database.
    ///
    /// The schema is created outside this system; the driver refuses to run
    /// an import against a database that is missing any of the ten tables.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - all target tables exist
    /// * `Ok(false)` - at least one table is missing
    async fn check_tables_created(&self) -> Result<bool, ImportRepositoryError>;
}
