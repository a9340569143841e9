//! Category registry.
//!
//! Compile-time definitions of the semantic categories models are sorted
//! into. The registry is static data: ids, display labels, emoji, and the
//! priorities that drive group ordering. Lower priority sorts first;
//! `favorites` (0) always leads and `general` (99) always trails.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaxaError;

/// Identifier of a registered category.
///
/// Declaration order matches the registry table, so the discriminant
/// doubles as the registry index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    /// Favorite and pinned models (populated by pinning, never by rules).
    Favorites,
    /// Code generation and review.
    Coding,
    /// Creative writing.
    Creative,
    /// Reasoning and research.
    Analysis,
    /// Low-latency lightweight models.
    Fast,
    /// Locally-served models.
    Local,
    /// Image understanding.
    Vision,
    /// Long-context document work.
    Documents,
    /// Special-purpose models (audio, realtime, image, moderation, search).
    Specials,
    /// Fallback for models nothing else claims.
    General,
}

impl CategoryId {
    /// All category ids in registry order (ascending priority).
    pub const ALL: [CategoryId; 10] = [
        CategoryId::Favorites,
        CategoryId::Coding,
        CategoryId::Creative,
        CategoryId::Analysis,
        CategoryId::Fast,
        CategoryId::Local,
        CategoryId::Vision,
        CategoryId::Documents,
        CategoryId::Specials,
        CategoryId::General,
    ];

    /// Get the category token as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Favorites => "favorites",
            CategoryId::Coding => "coding",
            CategoryId::Creative => "creative",
            CategoryId::Analysis => "analysis",
            CategoryId::Fast => "fast",
            CategoryId::Local => "local",
            CategoryId::Vision => "vision",
            CategoryId::Documents => "documents",
            CategoryId::Specials => "specials",
            CategoryId::General => "general",
        }
    }

    /// Whether this id is a generic bucket rather than a discovered trait.
    ///
    /// `local` describes where a model runs and `general` is the fallback;
    /// neither says what a model is good at, so primary-category selection
    /// skips them when anything more specific was discovered.
    pub fn is_generic(&self) -> bool {
        matches!(self, CategoryId::Local | CategoryId::General)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = TaxaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "favorites" => Ok(CategoryId::Favorites),
            "coding" => Ok(CategoryId::Coding),
            "creative" => Ok(CategoryId::Creative),
            "analysis" => Ok(CategoryId::Analysis),
            "fast" => Ok(CategoryId::Fast),
            "local" => Ok(CategoryId::Local),
            "vision" => Ok(CategoryId::Vision),
            "documents" => Ok(CategoryId::Documents),
            "specials" => Ok(CategoryId::Specials),
            "general" => Ok(CategoryId::General),
            other => Err(TaxaError::UnknownCategory(other.to_string())),
        }
    }
}

/// A registered category definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Category identifier.
    pub id: CategoryId,
    /// Display label.
    pub name: &'static str,
    /// Display emoji.
    pub emoji: &'static str,
    /// Short description for pickers and tooltips.
    pub description: &'static str,
    /// Sort priority; lower sorts first.
    pub priority: u8,
}

/// All registered categories, in ascending priority order.
///
/// Index position equals the `CategoryId` discriminant.
pub static CATEGORIES: &[Category] = &[
    Category {
        id: CategoryId::Favorites,
        name: "Favorites",
        emoji: "⭐",
        description: "Favorite and pinned models",
        priority: 0,
    },
    Category {
        id: CategoryId::Coding,
        name: "Coding",
        emoji: "💻",
        description: "Models tuned for code generation and review",
        priority: 1,
    },
    Category {
        id: CategoryId::Creative,
        name: "Creative",
        emoji: "🎨",
        description: "Creative writing and storytelling",
        priority: 2,
    },
    Category {
        id: CategoryId::Analysis,
        name: "Analysis",
        emoji: "📊",
        description: "Reasoning, research, and deep analysis",
        priority: 3,
    },
    Category {
        id: CategoryId::Fast,
        name: "Fast",
        emoji: "⚡",
        description: "Low-latency lightweight models",
        priority: 4,
    },
    Category {
        id: CategoryId::Local,
        name: "Local",
        emoji: "🏠",
        description: "Models served from local runtimes",
        priority: 5,
    },
    Category {
        id: CategoryId::Vision,
        name: "Vision",
        emoji: "👁️",
        description: "Image understanding and multimodal input",
        priority: 6,
    },
    Category {
        id: CategoryId::Documents,
        name: "Documents",
        emoji: "📄",
        description: "Long-context document work",
        priority: 7,
    },
    Category {
        id: CategoryId::Specials,
        name: "Specials",
        emoji: "🧩",
        description: "Special-purpose models: audio, realtime, image, moderation, search",
        priority: 8,
    },
    Category {
        id: CategoryId::General,
        name: "General",
        emoji: "🤖",
        description: "General-purpose chat models",
        priority: 99,
    },
];

lazy_static::lazy_static! {
    /// Priority-sorted registry view, computed once.
    ///
    /// Stable sort keeps registry declaration order for equal priorities.
    static ref BY_PRIORITY: Vec<&'static Category> = {
        let mut view: Vec<&'static Category> = CATEGORIES.iter().collect();
        view.sort_by_key(|c| c.priority);
        view
    };
}

/// Find a category definition by string token.
pub fn lookup(token: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id.as_str() == token)
}

/// Get the definition for a category id.
pub fn find(id: CategoryId) -> &'static Category {
    // ALL and CATEGORIES are declared in the same order; checked by tests.
    &CATEGORIES[id as usize]
}

/// All categories ordered by ascending priority.
pub fn by_priority() -> &'static [&'static Category] {
    &BY_PRIORITY
}
