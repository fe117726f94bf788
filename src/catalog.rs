//! Static page content: colour palettes, header navigation and project records.
//!
//! Palettes and projects are decoded once from the embedded
//! `content/catalog.json`; navigation is fixed in code. Nothing here is mutated
//! after construction.

use crate::profile::{EMAIL, RESUME_PATH};
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

const CATALOG_JSON: &str = include_str!("../content/catalog.json");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("colour index {0} is negative")]
    InvalidIndex(i64),
    #[error("the {0} palette has no colours")]
    EmptyPalette(PaletteName),
    #[error("project \"{project}\" lists tag \"{tag}\" more than once")]
    DuplicateTag { project: String, tag: String },
    #[error("catalog content is malformed: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteName {
    Bold,
    Pastel,
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteName::Bold => write!(f, "bold"),
            PaletteName::Pastel => write!(f, "pastel"),
        }
    }
}

/// Non-empty, ordered list of colours handed out cyclically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

// Construction rejects empty palettes, so there is no `is_empty`
#[allow(clippy::len_without_is_empty)]
impl Palette {
    pub fn new(name: PaletteName, colors: Vec<String>) -> Result<Self, CatalogError> {
        if colors.is_empty() {
            return Err(CatalogError::EmptyPalette(name));
        }
        Ok(Self { colors })
    }

    /// Colour for the item at `index`, wrapping every `len()` items.
    pub fn cycle(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

}

/// Where a header link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Same-page anchor id
    Anchor(Cow<'static, str>),
    /// Document served by the asset host, kept verbatim
    Resource(Cow<'static, str>),
    /// Email address
    Contact(Cow<'static, str>),
}

impl NavTarget {
    pub fn href(&self) -> String {
        match self {
            NavTarget::Anchor(id) => format!("#{id}"),
            NavTarget::Resource(path) => path.to_string(),
            NavTarget::Contact(address) => format!("mailto:{address}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Navigate,
    OpenOverlay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
    pub action: NavAction,
}

impl NavItem {
    fn anchor(label: &'static str, action: NavAction) -> Self {
        Self {
            label,
            target: NavTarget::Anchor(Cow::Owned(label.to_lowercase())),
            action,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl ProjectRecord {
    fn check_tags(&self) -> Result<(), CatalogError> {
        for (i, tag) in self.tags.iter().enumerate() {
            if self.tags[..i].contains(tag) {
                return Err(CatalogError::DuplicateTag {
                    project: self.title.clone(),
                    tag: tag.clone(),
                });
            }
        }
        Ok(())
    }
}

/// On-disk shape of `catalog.json`
#[derive(Deserialize)]
struct RawCatalog {
    bold_colors: Vec<String>,
    pastel_colors: Vec<String>,
    projects: Vec<ProjectRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCatalog {
    bold: Palette,
    pastel: Palette,
    nav_items: Vec<NavItem>,
    projects: Vec<ProjectRecord>,
}

impl ContentCatalog {
    /// Decode and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog =
            serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()))?;

        for project in &raw.projects {
            project.check_tags()?;
        }

        Ok(Self {
            bold: Palette::new(PaletteName::Bold, raw.bold_colors)?,
            pastel: Palette::new(PaletteName::Pastel, raw.pastel_colors)?,
            nav_items: default_nav_items(),
            projects: raw.projects,
        })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    /// Process-wide catalog, decoded on first use.
    pub fn global() -> Result<&'static ContentCatalog, CatalogError> {
        static CATALOG: OnceLock<Result<ContentCatalog, CatalogError>> = OnceLock::new();
        CATALOG.get_or_init(Self::builtin).as_ref().map_err(Clone::clone)
    }

    pub fn palette(&self, name: PaletteName) -> &Palette {
        match name {
            PaletteName::Bold => &self.bold,
            PaletteName::Pastel => &self.pastel,
        }
    }

    /// `palette[index mod len]`. Indices come from enumerating fixed
    /// sequences, so only a negative index can fail.
    pub fn color_for(&self, name: PaletteName, index: i64) -> Result<&str, CatalogError> {
        let index = usize::try_from(index).map_err(|_| CatalogError::InvalidIndex(index))?;
        Ok(self.palette(name).cycle(index))
    }

    pub fn nav_items(&self) -> &[NavItem] {
        &self.nav_items
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }
}

fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::anchor("About", NavAction::OpenOverlay),
        NavItem::anchor("Projects", NavAction::Navigate),
        NavItem {
            label: "Resume",
            target: NavTarget::Resource(Cow::Borrowed(RESUME_PATH)),
            action: NavAction::Navigate,
        },
        NavItem {
            label: "Contact",
            target: NavTarget::Contact(Cow::Borrowed(EMAIL)),
            action: NavAction::Navigate,
        },
    ]
}
