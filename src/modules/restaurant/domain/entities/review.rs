use super::restaurant::Photo;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of whoever wrote a review, as handed over by the auth layer.
///
/// Two authors are the same author when their ids match; the display
/// fields are informational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub username: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

impl Author {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            given_name: None,
            family_name: None,
        }
    }

    pub fn with_names(mut self, given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        self.given_name = Some(given_name.into());
        self.family_name = Some(family_name.into());
        self
    }

    /// "Given Family" when both are known, otherwise the username
    pub fn display_name(&self) -> String {
        match (&self.given_name, &self.family_name) {
            (Some(given), Some(family)) => format!("{} {}", given, family),
            (Some(given), None) => given.clone(),
            _ => self.username.clone(),
        }
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

/// A review embedded in exactly one restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub content: String,
    pub rating: u8,
    pub photos: Vec<Photo>,
    pub date_posted: DateTime<Utc>,
    pub last_edited: DateTime<Utc>,
    pub written_by: Author,
}

impl Review {
    pub fn new(
        author: Author,
        content: String,
        rating: u8,
        photos: Vec<Photo>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            rating,
            photos,
            date_posted: now,
            last_edited: now,
            written_by: author,
        }
    }

    pub fn is_written_by(&self, author: &Author) -> bool {
        self.written_by == *author
    }

    /// The window is anchored to `date_posted`; earlier edits do not extend it.
    pub fn is_editable_at(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now <= self.date_posted + window
    }

    /// Replace the editable fields. `id`, `date_posted` and `written_by` stay put.
    pub fn apply_edit(&mut self, content: String, rating: u8, photos: Vec<Photo>, now: DateTime<Utc>) {
        self.content = content;
        self.rating = rating;
        self.photos = photos;
        self.last_edited = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn posted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn authors_compare_by_id_only() {
        let a = Author::new("u-1", "alice");
        let b = Author::new("u-1", "alice-renamed").with_names("Alice", "Liddell");
        assert_eq!(a, b);
        assert_ne!(a, Author::new("u-2", "alice"));
    }

    #[test]
    fn display_name_prefers_full_name() {
        let author = Author::new("u-1", "alice").with_names("Alice", "Liddell");
        assert_eq!(author.display_name(), "Alice Liddell");
        assert_eq!(Author::new("u-2", "bob").display_name(), "bob");
    }

    #[test]
    fn edit_window_is_inclusive_and_anchored_to_post_time() {
        let mut review = Review::new(Author::new("u-1", "alice"), "ok".into(), 3, vec![], posted_at());
        let window = Duration::hours(48);

        review.apply_edit("better".into(), 4, vec![], posted_at() + Duration::hours(47));

        assert!(review.is_editable_at(posted_at() + Duration::hours(48), window));
        assert!(!review.is_editable_at(posted_at() + Duration::hours(48) + Duration::seconds(1), window));
    }

    #[test]
    fn apply_edit_keeps_identity() {
        let mut review = Review::new(Author::new("u-1", "alice"), "ok".into(), 3, vec![], posted_at());
        let id = review.id;
        let later = posted_at() + Duration::hours(2);

        review.apply_edit("changed".into(), 5, vec![], later);

        assert_eq!(review.id, id);
        assert_eq!(review.date_posted, posted_at());
        assert_eq!(review.last_edited, later);
        assert_eq!(review.rating, 5);
    }
}
