use crate::sanitize::clean_text;
use crate::types::BusinessRecord;

/// One row of the Business table.
///
/// The id is the stable external identifier supplied by the source data. The
/// tip count is initialized to zero at load time, not derived from the
/// source.
#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub business_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub stars: f64,
    pub is_open: bool,
    pub tip_count: i32,
}

impl From<&BusinessRecord> for Business {
    fn from(record: &BusinessRecord) -> Self {
        Business {
            business_id: record.business_id.clone(),
            name: clean_text(&record.name),
            address: clean_text(&record.address),
            city: record.city.clone(),
            state: record.state.clone(),
            postal_code: record.postal_code.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            stars: record.stars,
            is_open: record.is_open == 1,
            tip_count: 0,
        }
    }
}
