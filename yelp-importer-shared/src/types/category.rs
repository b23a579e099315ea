use crate::sanitize::clean_text;
use crate::types::{split_listing, BusinessRecord};

/// One (business, category) link row. The category name doubles as the key
/// of the Category lookup table the link references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    pub business_id: String,
    pub category_name: String,
}

impl CategoryLink {
    /// Expands a business record's comma-joined `categories` listing into one
    /// link row per category. A missing or empty listing expands to nothing.
    pub fn expand(record: &BusinessRecord) -> Vec<CategoryLink> {
        let Some(categories) = record.categories.as_deref() else {
            return Vec::new();
        };
        split_listing(categories)
            .map(|category| CategoryLink {
                business_id: record.business_id.clone(),
                category_name: clean_text(category),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(categories: Option<&str>) -> BusinessRecord {
        BusinessRecord {
            business_id: "b1".to_string(),
            name: "Cafe".to_string(),
            address: "1 Main St".to_string(),
            city: "Tucson".to_string(),
            state: "AZ".to_string(),
            postal_code: "85701".to_string(),
            latitude: None,
            longitude: None,
            stars: 4.0,
            is_open: 1,
            categories: categories.map(str::to_string),
            attributes: None,
            hours: None,
        }
    }

    #[test]
    fn one_link_per_category() {
        let links = CategoryLink::expand(&record(Some("Bars, Nightlife")));
        assert_eq!(
            links,
            vec![
                CategoryLink {
                    business_id: "b1".to_string(),
                    category_name: "Bars".to_string(),
                },
                CategoryLink {
                    business_id: "b1".to_string(),
                    category_name: "Nightlife".to_string(),
                },
            ]
        );
    }

    #[test]
    fn missing_listing_expands_to_nothing() {
        assert!(CategoryLink::expand(&record(None)).is_empty());
        assert!(CategoryLink::expand(&record(Some(""))).is_empty());
    }

    #[test]
    fn category_names_are_sanitized() {
        let links = CategoryLink::expand(&record(Some("Wine O'Clock")));
        assert_eq!(links[0].category_name, "Wine O`Clock");
    }
}
