mod attribute;
mod business;
mod category;
mod checkin;
mod error;
mod friendship;
mod hours;
mod records;
mod tip;
mod user;

pub use attribute::AttributeValue;
pub use business::Business;
pub use category::CategoryLink;
pub use checkin::Checkin;
pub use error::RecordError;
pub use friendship::Friendship;
pub use hours::OpeningHours;
pub use records::{BusinessRecord, CheckinRecord, TipRecord, UserRecord};
pub use tip::Tip;
pub use user::YelpUser;

use chrono::NaiveDateTime;

pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, RecordError> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map_err(|_| RecordError::InvalidTimestamp(raw.to_string()))
}

/// Splits a comma-joined source listing (`"Bars, Nightlife"`) into entries.
/// Empty entries, as produced by an empty listing, are dropped.
pub(crate) fn split_listing(listing: &str) -> impl Iterator<Item = &str> {
    listing.split(", ").filter(|entry| !entry.is_empty())
}
