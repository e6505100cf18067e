//! Index categories
//!
//! A category is one facet dimension materialized as a subtree below
//! `index_root/<type>/`.

use crate::scanner::types::ReleaseInfo;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Alpha,
    Genre,
    Year,
    Artist,
    Album,
    #[strum(to_string = "groups", serialize = "group")]
    Groups,
}

impl Category {
    /// Directory name of the category subtree (`group` is stored as `groups`)
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Alpha => "alpha",
            Category::Genre => "genre",
            Category::Year => "year",
            Category::Artist => "artist",
            Category::Album => "album",
            Category::Groups => "groups",
        }
    }

    /// The facet value of `release` for this category
    pub fn facet_value(self, release: &ReleaseInfo) -> String {
        match self {
            Category::Alpha => release.alpha.to_string(),
            Category::Genre => release.genre.clone(),
            Category::Year => release.year.clone(),
            Category::Artist => release.artist.clone(),
            Category::Album => release.album.clone(),
            Category::Groups => release.group.clone(),
        }
    }
}

impl ReleaseInfo {
    /// Facet value used as the bucket directory for `category`
    pub fn facet(&self, category: Category) -> String {
        category.facet_value(self)
    }
}

/// Parse a list of category names into an ordered set.
///
/// Returns the known categories in first-seen order plus the names that were
/// not recognized.
pub fn parse_categories<S: AsRef<str>>(names: &[S]) -> (Vec<Category>, Vec<String>) {
    let mut categories = Vec::new();
    let mut unknown = Vec::new();

    for name in names {
        let name = name.as_ref().trim();
        match Category::from_str(name) {
            Ok(category) if !categories.contains(&category) => categories.push(category),
            Ok(_) => {}
            Err(_) => unknown.push(name.to_string()),
        }
    }

    (categories, unknown)
}
