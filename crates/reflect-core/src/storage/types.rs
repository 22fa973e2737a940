//! Core data types for the storage layer.
//!
//! Mood and category values are persisted by their stable string tag
//! (`"happy"`, `"work"`, ...), never by declaration order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JournalError;

/// Identifier of a persisted entry.
///
/// Assigned by the store, monotonically increasing, never reused and never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| JournalError::InvalidInput(format!("Invalid entry ID: {}", s)))?;
        if value <= 0 {
            return Err(JournalError::InvalidInput(format!(
                "Entry ID must be positive: {}",
                s
            )));
        }
        Ok(Self(value))
    }
}

/// Emotional state attached to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Excited,
    Calm,
    Angry,
    Lonely,
    Grateful,
    Overwhelmed,
    Hopeful,
    Content,
    Tired,
}

impl Mood {
    pub const ALL: [Mood; 12] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Excited,
        Mood::Calm,
        Mood::Angry,
        Mood::Lonely,
        Mood::Grateful,
        Mood::Overwhelmed,
        Mood::Hopeful,
        Mood::Content,
        Mood::Tired,
    ];

    /// Stable storage tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Excited => "excited",
            Mood::Calm => "calm",
            Mood::Angry => "angry",
            Mood::Lonely => "lonely",
            Mood::Grateful => "grateful",
            Mood::Overwhelmed => "overwhelmed",
            Mood::Hopeful => "hopeful",
            Mood::Content => "content",
            Mood::Tired => "tired",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Excited => "Excited",
            Mood::Calm => "Calm",
            Mood::Angry => "Angry",
            Mood::Lonely => "Lonely",
            Mood::Grateful => "Grateful",
            Mood::Overwhelmed => "Overwhelmed",
            Mood::Hopeful => "Hopeful",
            Mood::Content => "Content",
            Mood::Tired => "Tired",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "\u{1F60A}",
            Mood::Sad => "\u{1F622}",
            Mood::Anxious => "\u{1F630}",
            Mood::Excited => "\u{1F929}",
            Mood::Calm => "\u{1F60C}",
            Mood::Angry => "\u{1F620}",
            Mood::Lonely => "\u{1F494}",
            Mood::Grateful => "\u{1F64F}",
            Mood::Overwhelmed => "\u{1F635}",
            Mood::Hopeful => "\u{1F31F}",
            Mood::Content => "\u{1F607}",
            Mood::Tired => "\u{1F634}",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Mood {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.tag() == needle)
            .ok_or_else(|| JournalError::InvalidInput(format!("Unknown mood: {}", s)))
    }
}

/// Topic category attached to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Personal,
    Work,
    Travel,
    Health,
    Gratitude,
    Ideas,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Personal,
        Category::Work,
        Category::Travel,
        Category::Health,
        Category::Gratitude,
        Category::Ideas,
        Category::Other,
    ];

    /// Stable storage tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Work => "work",
            Category::Travel => "travel",
            Category::Health => "health",
            Category::Gratitude => "gratitude",
            Category::Ideas => "ideas",
            Category::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Travel => "Travel",
            Category::Health => "Health",
            Category::Gratitude => "Gratitude",
            Category::Ideas => "Ideas",
            Category::Other => "Other",
        }
    }

    /// Accent colour as a `#RRGGBB` string.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Category::Personal => "#7C4DFF",
            Category::Work => "#448AFF",
            Category::Travel => "#00BCD4",
            Category::Health => "#4CAF50",
            Category::Gratitude => "#FF9800",
            Category::Ideas => "#E91E63",
            Category::Other => "#9E9E9E",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.tag() == needle)
            .ok_or_else(|| JournalError::InvalidInput(format!("Unknown category: {}", s)))
    }
}

/// A persisted journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned identifier
    pub id: EntryId,

    /// Short title
    pub title: String,

    /// Full body text
    pub body: String,

    /// Creation time, milliseconds since the Unix epoch. Never changes.
    pub created_at: i64,

    /// Last modification time, milliseconds since the Unix epoch
    pub modified_at: i64,

    pub mood: Option<Mood>,

    pub category: Option<Category>,

    /// Opaque attachment reference (e.g. a photo URI)
    pub attachment: Option<String>,

    pub favorite: bool,
}

/// Builder for creating new entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub title: String,
    pub body: String,

    /// Creation time override; stamped with the current time when `None`
    pub created_at: Option<i64>,

    pub mood: Option<Mood>,
    pub category: Option<Category>,
    pub attachment: Option<String>,
    pub favorite: bool,
}

impl NewEntry {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            created_at: None,
            mood: None,
            category: None,
            attachment: None,
            favorite: false,
        }
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_attachment(mut self, attachment: impl Into<String>) -> Self {
        self.attachment = Some(attachment.into());
        self
    }

    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }
}

/// Number of entries carrying a given mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCount {
    pub mood: Mood,
    pub count: usize,
}

/// Number of entries carrying a given category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_builder() {
        let entry = NewEntry::new("Title", "Body")
            .with_mood(Mood::Calm)
            .with_category(Category::Travel)
            .with_attachment("content://photo/1")
            .with_created_at(1_700_000_000_000)
            .favorite(true);

        assert_eq!(entry.title, "Title");
        assert_eq!(entry.mood, Some(Mood::Calm));
        assert_eq!(entry.category, Some(Category::Travel));
        assert_eq!(entry.attachment.as_deref(), Some("content://photo/1"));
        assert_eq!(entry.created_at, Some(1_700_000_000_000));
        assert!(entry.favorite);
    }

    #[test]
    fn test_mood_tags_are_stable() {
        for mood in Mood::ALL {
            assert_eq!(mood.tag().parse::<Mood>().unwrap(), mood);
        }
        assert_eq!("Happy".parse::<Mood>().unwrap(), Mood::Happy);
        assert!("ecstatic".parse::<Mood>().is_err());
    }

    #[test]
    fn test_category_tags_are_stable() {
        for category in Category::ALL {
            assert_eq!(category.tag().parse::<Category>().unwrap(), category);
        }
        assert!("hobby".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&Mood::Overwhelmed).unwrap();
        assert_eq!(json, "\"overwhelmed\"");
        let category: Category = serde_json::from_str("\"gratitude\"").unwrap();
        assert_eq!(category, Category::Gratitude);
    }

    #[test]
    fn test_entry_id_parse() {
        assert_eq!("17".parse::<EntryId>().unwrap(), EntryId::new(17));
        assert!("0".parse::<EntryId>().is_err());
        assert!("abc".parse::<EntryId>().is_err());
    }
}
