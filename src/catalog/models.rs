use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Genre of a catalog entry.
///
/// Stored values outside the exact slugs are kept verbatim in `Unknown` so
/// that data written by other tools survives a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Action,
    Drama,
    Comedy,
    Horror,
    Romance,
    SciFi,
    Documentary,
    #[default]
    Other,
    Unknown(String),
}

impl Category {
    pub const KNOWN: [Category; 8] = [
        Category::Action,
        Category::Drama,
        Category::Comedy,
        Category::Horror,
        Category::Romance,
        Category::SciFi,
        Category::Documentary,
        Category::Other,
    ];

    /// Storage slug, e.g. `sci-fi`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Action => "action",
            Self::Drama => "drama",
            Self::Comedy => "comedy",
            Self::Horror => "horror",
            Self::Romance => "romance",
            Self::SciFi => "sci-fi",
            Self::Documentary => "documentary",
            Self::Other => "other",
            Self::Unknown(raw) => raw,
        }
    }

    /// Human-facing label. Unknown values are shown as stored.
    pub fn label(&self) -> &str {
        match self {
            Self::Action => "Action",
            Self::Drama => "Drama",
            Self::Comedy => "Comedy",
            Self::Horror => "Horror",
            Self::Romance => "Romance",
            Self::SciFi => "Sci-Fi",
            Self::Documentary => "Documentary",
            Self::Other => "Other",
            Self::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

/// Wire form: only an exact slug maps to a known category, anything else is
/// kept byte-for-byte in `Unknown`.
impl From<String> for Category {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "action" => Self::Action,
            "drama" => Self::Drama,
            "comedy" => Self::Comedy,
            "horror" => Self::Horror,
            "romance" => Self::Romance,
            "sci-fi" => Self::SciFi,
            "documentary" => Self::Documentary,
            "other" => Self::Other,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// User input: trimmed, case-insensitive, and `scifi` is accepted for
/// `sci-fi`. Unrecognized input is kept as typed (minus surrounding spaces).
impl FromStr for Category {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_lowercase();
        let slug = if normalized == "scifi" {
            "sci-fi".to_string()
        } else {
            normalized
        };

        Ok(match Self::from(slug) {
            Self::Unknown(_) => Self::Unknown(trimmed.to_string()),
            known => known,
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category restriction applied by a query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.parse::<Category>()?))
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

/// How a player should treat a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// HLS playlist (`.m3u8`)
    Hls,
    /// Anything else: a direct media file or an external page
    Direct,
}

impl MediaKind {
    pub fn from_link(link: &str) -> Self {
        let path = match url::Url::parse(link) {
            Ok(url) => url.path().to_string(),
            Err(_) => link
                .split(['?', '#'])
                .next()
                .unwrap_or_default()
                .to_string(),
        };

        if path.to_lowercase().ends_with(".m3u8") {
            Self::Hls
        } else {
            Self::Direct
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Hls => "application/x-mpegURL",
            Self::Direct => "video/mp4",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hls => write!(f, "HLS"),
            Self::Direct => write!(f, "Direct"),
        }
    }
}

/// A single catalog entry. Field names on the wire are part of the
/// persisted format: `id`, `title`, `link`, `category`, `description`,
/// `dateAdded`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: i64,
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub date_added: DateTime<Utc>,
}

impl Record {
    pub fn media_kind(&self) -> MediaKind {
        MediaKind::from_link(&self.link)
    }
}

/// Input for creating a record. Also the shape accepted by imports, where
/// `id` and `dateAdded` may be missing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
}

impl NewRecord {
    pub fn new<T: Into<String>, L: Into<String>>(title: T, link: L, category: Category) -> Self {
        Self {
            id: None,
            title: title.into(),
            link: link.into(),
            category,
            description: String::new(),
            date_added: None,
        }
    }

    pub fn with_description<D: Into<String>>(mut self, description: D) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn into_record(self, id: i64) -> Record {
        Record {
            id,
            title: self.title,
            link: self.link,
            category: self.category,
            description: self.description,
            date_added: self.date_added.unwrap_or_else(Utc::now),
        }
    }
}

/// Partial edit of a record. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPatch {
    pub title: Option<String>,
    pub link: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.link.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }

    pub fn apply(self, record: &mut Record) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(link) = self.link {
            record.link = link;
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_known() {
        assert_eq!("action".parse::<Category>().unwrap(), Category::Action);
        assert_eq!(" Sci-Fi ".parse::<Category>().unwrap(), Category::SciFi);
        assert_eq!("DOCUMENTARY".parse::<Category>().unwrap(), Category::Documentary);
    }

    #[test]
    fn test_category_unknown_kept_verbatim() {
        let category: Category = "Anime".parse().unwrap();
        assert_eq!(category, Category::Unknown("Anime".to_string()));
        assert_eq!(category.label(), "Anime");
        assert_eq!(category.as_str(), "Anime");
        assert!(!category.is_known());
    }

    #[test]
    fn test_category_labels() {
        let labels: Vec<&str> = Category::KNOWN.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Action",
                "Drama",
                "Comedy",
                "Horror",
                "Romance",
                "Sci-Fi",
                "Documentary",
                "Other"
            ]
        );
    }

    #[test]
    fn test_category_serde_uses_slug() {
        let json = serde_json::to_string(&Category::SciFi).unwrap();
        assert_eq!(json, "\"sci-fi\"");

        let back: Category = serde_json::from_str("\"western\"").unwrap();
        assert_eq!(back, Category::Unknown("western".to_string()));
        assert_eq!(serde_json::to_string(&back).unwrap(), "\"western\"");
    }

    #[test]
    fn test_category_wire_form_is_exact() {
        for raw in ["Action", " drama", "SCIFI", "Sci-Fi"] {
            let json = serde_json::to_string(raw).unwrap();
            let category: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(category, Category::Unknown(raw.to_string()));
            assert_eq!(serde_json::to_string(&category).unwrap(), json);
        }
    }

    #[test]
    fn test_category_parse_alias() {
        assert_eq!("scifi".parse::<Category>().unwrap(), Category::SciFi);
        assert_eq!(" SciFi ".parse::<Category>().unwrap(), Category::SciFi);
        assert_eq!(
            "  Anime ".parse::<Category>().unwrap(),
            Category::Unknown("Anime".to_string())
        );
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "drama".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Drama)
        );
        assert!(CategoryFilter::All.matches(&Category::Horror));
        assert!(!CategoryFilter::Only(Category::Drama).matches(&Category::Horror));
    }

    #[test]
    fn test_media_kind_from_link() {
        assert_eq!(
            MediaKind::from_link("https://cdn.example.com/movie/index.m3u8"),
            MediaKind::Hls
        );
        assert_eq!(
            MediaKind::from_link("https://cdn.example.com/live.M3U8?token=abc"),
            MediaKind::Hls
        );
        assert_eq!(MediaKind::from_link("videos/clip.m3u8#t=10"), MediaKind::Hls);
        assert_eq!(
            MediaKind::from_link("https://example.com/movie.mp4"),
            MediaKind::Direct
        );
        assert_eq!(
            MediaKind::from_link("https://example.com/watch?file=a.m3u8"),
            MediaKind::Direct
        );
        assert_eq!(MediaKind::Hls.mime_type(), "application/x-mpegURL");
        assert_eq!(MediaKind::Direct.mime_type(), "video/mp4");
    }

    #[test]
    fn test_record_wire_format() {
        let record: Record = serde_json::from_str(
            r#"{
                "id": 1700000000000,
                "title": "Alpha",
                "link": "https://example.com/a.m3u8",
                "category": "action",
                "description": null,
                "dateAdded": "2024-01-02T03:04:05.678Z"
            }"#,
        )
        .unwrap();

        assert_eq!(record.id, 1_700_000_000_000);
        assert_eq!(record.description, "");
        assert_eq!(record.media_kind(), MediaKind::Hls);

        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for key in ["id", "title", "link", "category", "description", "dateAdded"] {
            assert!(keys.contains(&key), "missing key {}", key);
        }
    }

    #[test]
    fn test_patch_apply() {
        let mut record = NewRecord::new("Alpha", "https://a", Category::Action)
            .with_description("first")
            .into_record(7);

        let patch = RecordPatch {
            title: Some("Alpha (Director's Cut)".to_string()),
            category: Some(Category::Drama),
            ..RecordPatch::default()
        };
        assert!(!patch.is_empty());
        patch.apply(&mut record);

        assert_eq!(record.id, 7);
        assert_eq!(record.title, "Alpha (Director's Cut)");
        assert_eq!(record.category, Category::Drama);
        assert_eq!(record.description, "first");
        assert!(RecordPatch::default().is_empty());
    }
}
