use crate::types::{split_listing, UserRecord};

/// One directed (follower, followee) edge. Followee ids are taken verbatim
/// from the source listing; nothing checks that they exist as YelpUser rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friendship {
    pub follower_id: String,
    pub followee_id: String,
}

impl Friendship {
    /// Expands a user record's comma-joined `friends` listing into one edge
    /// per listed friend id.
    pub fn expand(record: &UserRecord) -> Vec<Friendship> {
        let Some(friends) = record.friends.as_deref() else {
            return Vec::new();
        };
        split_listing(friends)
            .map(|friend_id| Friendship {
                follower_id: record.user_id.clone(),
                followee_id: friend_id.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(friends: Option<&str>) -> UserRecord {
        UserRecord {
            user_id: "u1".to_string(),
            name: "Pat".to_string(),
            yelping_since: "2011-01-01 15:30:42".to_string(),
            tip_count: 0,
            fans: 0,
            average_stars: 0.0,
            funny: 0,
            useful: 0,
            cool: 0,
            friends: friends.map(str::to_string),
        }
    }

    #[test]
    fn one_edge_per_listed_friend() {
        let edges = Friendship::expand(&record(Some("u2, u3")));
        assert_eq!(
            edges,
            vec![
                Friendship {
                    follower_id: "u1".to_string(),
                    followee_id: "u2".to_string(),
                },
                Friendship {
                    follower_id: "u1".to_string(),
                    followee_id: "u3".to_string(),
                },
            ]
        );
    }

    #[test]
    fn missing_listing_expands_to_nothing() {
        assert!(Friendship::expand(&record(None)).is_empty());
        assert!(Friendship::expand(&record(Some(""))).is_empty());
    }
}
