//! PostgreSQL implementation of the import repository.
//!
//! Provides the production PostgreSQL backend for the `ImportRepository`
//! trait with connection pooling, per-batch transactions, and multi-row
//! inserts.
//!
//! ## Key Features
//!
//! - Connection pooling with `sqlx::PgPool`
//! - One transaction per batch call
//! - Multi-row inserts built with `sqlx::QueryBuilder`
//! - Conflict-tolerant inserts with `ON CONFLICT ... DO NOTHING`
//!
//! ## Database Tables
//!
//! - `business`, `category`, `business_category`, `attribute`,
//!   `business_attribute_value`, `hours`, `yelp_user`, `friendship`,
//!   `tip`, `checkin`
use async_trait::async_trait;
use yelp_importer_shared::types::{
    AttributeValue, Business, CategoryLink, Checkin, Friendship, OpeningHours, Tip, YelpUser,
};

use crate::{ImportRepository, ImportRepositoryError};

/// The ten target tables, in foreign-key order.
const TABLES: [&str; 10] = [
    "business",
    "category",
    "business_category",
    "attribute",
    "business_attribute_value",
    "hours",
    "yelp_user",
    "friendship",
    "tip",
    "checkin",
];

/// PostgreSQL implementation of the import repository.
///
/// Each batch method runs begin → multi-row insert → commit, so the batch is
/// the transactional unit; callers that need row-local transactions invoke
/// the same method with a single-row slice.
pub struct PostgresImportRepository {
    pool: sqlx::PgPool,
}

impl PostgresImportRepository {
    /// Creates a new PostgreSQL repository instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool
    pub async fn new(pool: sqlx::PgPool) -> Result<Self, ImportRepositoryError> {
        Ok(Self { pool })
    }

    /// Upserts a batch of names into a single-column lookup table
    /// (`category` / `attribute`), skipping names that already exist.
    async fn upsert_names(
        &self,
        table: &str,
        names: &[String],
    ) -> Result<(), ImportRepositoryError> {
        if names.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        let mut query_builder =
            sqlx::QueryBuilder::new(format!("INSERT INTO {table} (name)"));
        query_builder.push_values(names, |mut b, name| {
            b.push_bind(name);
        });
        query_builder.push(" ON CONFLICT (name) DO NOTHING");
        query_builder.build().execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl ImportRepository for PostgresImportRepository {
    async fn insert_businesses(
        &self,
        businesses: &[Business],
    ) -> Result<(), ImportRepositoryError> {
        if businesses.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        let mut query_builder = sqlx::QueryBuilder::new(
            "INSERT INTO business (business_id, business_name, business_address, city, state, \
             postal_code, latitude, longitude, stars, is_open, tip_count)",
        );
        query_builder.push_values(businesses, |mut b, business| {
            b.push_bind(&business.business_id)
                .push_bind(&business.name)
                .push_bind(&business.address)
                .push_bind(&business.city)
                .push_bind(&business.state)
                .push_bind(&business.postal_code)
                .push_bind(business.latitude)
                .push_bind(business.longitude)
                .push_bind(business.stars)
                .push_bind(business.is_open)
                .push_bind(business.tip_count);
        });
        query_builder.push(" ON CONFLICT (business_id) DO NOTHING");
        query_builder.build().execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn upsert_categories(&self, names: &[String]) -> Result<(), ImportRepositoryError> {
        self.upsert_names("category", names).await
    }

    async fn insert_business_categories(
        &self,
        links: &[CategoryLink],
    ) -> Result<(), ImportRepositoryError> {
        if links.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        let mut query_builder = sqlx::QueryBuilder::new(
            "INSERT INTO business_category (business_id, category_name)",
        );
        query_builder.push_values(links, |mut b, link| {
            b.push_bind(&link.business_id).push_bind(&link.category_name);
        });
        query_builder.build().execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn upsert_attributes(&self, names: &[String]) -> Result<(), ImportRepositoryError> {
        self.upsert_names("attribute", names).await
    }

    async fn insert_attribute_values(
        &self,
        values: &[AttributeValue],
    ) -> Result<(), ImportRepositoryError> {
        if values.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        let mut query_builder = sqlx::QueryBuilder::new(
            "INSERT INTO business_attribute_value (business_id, attribute_name, attribute_value)",
        );
        query_builder.push_values(values, |mut b, value| {
            b.push_bind(&value.business_id)
                .push_bind(&value.attribute_name)
                .push_bind(&value.attribute_value);
        });
        query_builder.build().execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn insert_hours(&self, hours: &[OpeningHours]) -> Result<(), ImportRepositoryError> {
        if hours.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        let mut query_builder = sqlx::QueryBuilder::new(
            "INSERT INTO hours (business_id, day_of_week, open_time, close_time)",
        );
        query_builder.push_values(hours, |mut b, row| {
            b.push_bind(&row.business_id)
                .push_bind(&row.day_of_week)
                .push_bind(row.open_time)
                .push_bind(row.close_time);
        });
        query_builder.build().execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn insert_users(&self, users: &[YelpUser]) -> Result<(), ImportRepositoryError> {
        if users.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        let mut query_builder = sqlx::QueryBuilder::new(
            "INSERT INTO yelp_user (user_id, user_name, yelping_since, tip_count, fans, \
             average_stars, funny, useful, cool)",
        );
        query_builder.push_values(users, |mut b, user| {
            b.push_bind(&user.user_id)
                .push_bind(&user.name)
                .push_bind(user.yelping_since)
                .push_bind(user.tip_count)
                .push_bind(user.fans)
                .push_bind(user.average_stars)
                .push_bind(user.funny)
                .push_bind(user.useful)
                .push_bind(user.cool);
        });
        query_builder.push(" ON CONFLICT (user_id) DO NOTHING");
        query_builder.build().execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn insert_friendships(
        &self,
        friendships: &[Friendship],
    ) -> Result<(), ImportRepositoryError> {
        if friendships.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        let mut query_builder =
            sqlx::QueryBuilder::new("INSERT INTO friendship (follower_id, followee_id)");
        query_builder.push_values(friendships, |mut b, edge| {
            b.push_bind(&edge.follower_id).push_bind(&edge.followee_id);
        });
        query_builder.push(" ON CONFLICT DO NOTHING");
        query_builder.build().execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn insert_tips(&self, tips: &[Tip]) -> Result<(), ImportRepositoryError> {
        if tips.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        let mut query_builder = sqlx::QueryBuilder::new(
            "INSERT INTO tip (user_id, business_id, tipped_at, likes, tip_text)",
        );
        query_builder.push_values(tips, |mut b, tip| {
            b.push_bind(&tip.user_id)
                .push_bind(&tip.business_id)
                .push_bind(tip.tipped_at)
                .push_bind(tip.likes)
                .push_bind(&tip.text);
        });
        query_builder.push(" ON CONFLICT DO NOTHING");
        query_builder.build().execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn insert_checkins(&self, checkins: &[Checkin]) -> Result<(), ImportRepositoryError> {
        if checkins.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        let mut query_builder =
            sqlx::QueryBuilder::new("INSERT INTO checkin (business_id, checked_in_at)");
        query_builder.push_values(checkins, |mut b, checkin| {
            b.push_bind(&checkin.business_id)
                .push_bind(checkin.checked_in_at);
        });
        query_builder.push(" ON CONFLICT DO NOTHING");
        query_builder.build().execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Checks if the target tables are created in the database.
    async fn check_tables_created(&self) -> Result<bool, ImportRepositoryError> {
        for table in TABLES {
            let table_exists: bool = sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM information_schema.tables WHERE table_name = $1)",
            )
            .bind(table)
            .fetch_one(&self.pool)
            .await?;
            if !table_exists {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
