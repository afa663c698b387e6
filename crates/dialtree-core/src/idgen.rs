//! External identifier generation
//!
//! Every entity gets a caller-visible id at creation time, distinct from any
//! storage key. UUID v7 gives time-ordered, collision-resistant ids without
//! coordination; a bare millisecond timestamp would collide for two creates
//! in the same tick.

use uuid::Uuid;

/// Generate the next external identifier
///
/// Ids are unique per call and lexicographically ordered by creation time.
pub fn next_id() -> String {
    Uuid::now_v7().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct() {
        let mut ids: Vec<String> = (0..1000).map(|_| next_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_ids_parse_as_uuid() {
        let id = next_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
