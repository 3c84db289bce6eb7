//! Documents served by the Arisen Studio mod database.
//!
//! The database is a set of static JSON files on a raw file host. Entries use
//! PascalCase keys; display fields are not consistently typed across files
//! (some are strings, some numbers, some lists), so they are normalized to text
//! while deserializing.

use serde::{Deserialize, Deserializer};

const DATABASE_BASE_URL: &str =
    "https://raw.githubusercontent.com/ohhsodead/arisen-studio-database/main";

/// Title shown when an entry's category is not in `categories.json`.
pub const UNKNOWN_GAME: &str = "Unknown Game";

/// URL of the category list used to resolve game titles.
pub fn categories_url() -> String {
    format!("{}/categories.json", DATABASE_BASE_URL)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPlatform {
    Ps3,
    Xbox360,
}

impl SearchPlatform {
    pub fn from_subcommand(name: &str) -> Option<Self> {
        match name {
            "ps3" => Some(Self::Ps3),
            "xbox360" => Some(Self::Xbox360),
            _ => None,
        }
    }

    /// Categories offered as choices for this platform's subcommand.
    pub fn categories(self) -> &'static [SearchCategory] {
        match self {
            Self::Ps3 => &[SearchCategory::GameMods, SearchCategory::Homebrew],
            Self::Xbox360 => &[SearchCategory::Plugins],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCategory {
    GameMods,
    Homebrew,
    Plugins,
}

impl SearchCategory {
    /// Parses the value of a category choice, restricted to `platform`.
    pub fn from_choice(platform: SearchPlatform, value: &str) -> Option<Self> {
        platform
            .categories()
            .iter()
            .copied()
            .find(|category| category.value() == value)
    }

    /// Option value sent by Discord for this choice.
    pub fn value(self) -> &'static str {
        match self {
            Self::GameMods => "gamemods",
            Self::Homebrew => "homebrew",
            Self::Plugins => "plugins",
        }
    }

    /// Human-readable choice name.
    pub fn label(self) -> &'static str {
        match self {
            Self::GameMods => "Game Mods",
            Self::Homebrew => "Homebrew",
            Self::Plugins => "Plugins",
        }
    }

    pub fn database_url(self) -> String {
        let file = match self {
            Self::GameMods => "PS3/game-mods.json",
            Self::Homebrew => "PS3/homebrew.json",
            Self::Plugins => "XBOX360/plugins.json",
        };
        format!("{}/{}", DATABASE_BASE_URL, file)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModDatabase {
    #[serde(default)]
    pub mods: Vec<ModEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DownloadFile {
    #[serde(default, deserialize_with = "display_text")]
    pub name: String,
    #[serde(default, deserialize_with = "display_text")]
    pub version: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModEntry {
    #[serde(default, deserialize_with = "display_text")]
    pub id: String,
    #[serde(default, deserialize_with = "display_text")]
    pub category_id: String,
    #[serde(default, deserialize_with = "display_text")]
    pub name: String,
    #[serde(default, deserialize_with = "display_text")]
    pub description: String,
    #[serde(default, deserialize_with = "display_text")]
    pub platform: String,
    #[serde(default, deserialize_with = "display_text")]
    pub created_by: String,
    #[serde(default, deserialize_with = "display_text")]
    pub submitted_by: String,
    #[serde(default, deserialize_with = "display_text")]
    pub version: String,
    #[serde(default, deserialize_with = "display_text")]
    pub game_mode: String,
    #[serde(default, deserialize_with = "display_text")]
    pub mod_type: String,
    #[serde(default)]
    pub download_files: Vec<DownloadFile>,
}

impl ModEntry {
    /// Whether `needle` (already lowercased) occurs in the name or description.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryList {
    #[serde(default)]
    pub categories: Vec<GameCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameCategory {
    #[serde(deserialize_with = "display_text")]
    pub id: String,
    #[serde(default, deserialize_with = "display_text")]
    pub title: String,
}

impl CategoryList {
    /// Title of the category with `category_id`, or `UNKNOWN_GAME`.
    pub fn title_for(&self, category_id: &str) -> &str {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
            .map(|category| category.title.as_str())
            .unwrap_or(UNKNOWN_GAME)
    }
}

/// Accepts a string, number, boolean, null or list of those as display text.
fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    fn flatten(value: serde_json::Value) -> String {
        match value {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s,
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(flatten)
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        }
    }

    Ok(flatten(serde_json::Value::deserialize(deserializer)?))
}
