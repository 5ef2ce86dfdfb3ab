//! Search, cuisine filter and ordering over the fetched recipe collection.
//!
//! Everything here is pure: the same recipes and the same [`Query`] always
//! produce the same sequence, so callers can recompute freely on each input
//! event.

use itertools::Itertools;
use ord_subset::OrdVar;
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::dummyjson::Recipe;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Keep the order the recipes arrived in.
    #[default]
    None,
    Name,
    Rating,
    PrepTime,
}

impl SortKey {
    pub fn all() -> Vec<SortKey> {
        vec![
            SortKey::None,
            SortKey::Name,
            SortKey::Rating,
            SortKey::PrepTime,
        ]
    }

    /// Name used on the command line and in select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Name => "name",
            SortKey::Rating => "rating",
            SortKey::PrepTime => "prepTime",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::None => "Default order",
            SortKey::Name => "Name",
            SortKey::Rating => "Rating",
            SortKey::PrepTime => "Prep time",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort key '{}' (expected none, name, rating or prepTime)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSortKey {}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" | "default" => Ok(SortKey::None),
            "name" => Ok(SortKey::Name),
            "rating" => Ok(SortKey::Rating),
            "prepTime" | "prep-time" | "prep_time" => Ok(SortKey::PrepTime),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

/// Search text, cuisine and sort order as currently entered by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub search_term: String,
    pub cuisine_filter: Option<String>,
    pub sort_key: SortKey,
}

impl Query {
    pub fn new(search_term: &str, cuisine_filter: Option<&str>, sort_key: SortKey) -> Self {
        Self {
            search_term: search_term.to_string(),
            cuisine_filter: cuisine_filter
                .filter(|c| !c.is_empty())
                .map(String::from),
            sort_key,
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        let needle = self.search_term.to_lowercase();
        let matches_search = recipe.name.to_lowercase().contains(&needle);
        let matches_cuisine = match self.cuisine_filter.as_deref() {
            None | Some("") => true,
            Some(cuisine) => recipe.cuisine.as_deref() == Some(cuisine),
        };
        matches_search && matches_cuisine
    }
}

/// Apply `query` to `all_recipes`: keep the matching recipes, then order
/// them with a stable sort so ties keep their original relative order.
pub fn compute_filtered_view(all_recipes: &[Recipe], query: &Query) -> Vec<Recipe> {
    let mut filtered: Vec<Recipe> = all_recipes
        .iter()
        .filter(|recipe| query.matches(recipe))
        .cloned()
        .collect();

    sort_recipes(&mut filtered, query.sort_key);
    filtered
}

pub fn sort_recipes(recipes: &mut [Recipe], sort_key: SortKey) {
    match sort_key {
        SortKey::None => {}
        SortKey::Name => recipes.sort_by_cached_key(|r| NameKey::new(&r.name)),
        // Missing or NaN ratings rank lowest and therefore last.
        SortKey::Rating => recipes.sort_by_key(|r| Reverse(rating_key(r))),
        // Missing prep times rank lowest and therefore first.
        SortKey::PrepTime => recipes.sort_by_key(|r| r.prep_time_minutes),
    }
}

/// Collation key for names: base letters first, then accents, then case with
/// lowercase ahead of uppercase, then the raw text so the order is total.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct NameKey {
    base: String,
    accented: String,
    uppercase: Vec<bool>,
    raw: String,
}

impl NameKey {
    fn new(name: &str) -> Self {
        let accented = name.to_lowercase();
        let base = accented.nfd().filter(|c| !is_combining_mark(*c)).collect();
        let uppercase = name.chars().map(char::is_uppercase).collect();

        Self {
            base,
            accented,
            uppercase,
            raw: name.to_string(),
        }
    }
}

fn rating_key(recipe: &Recipe) -> Option<OrdVar<f64>> {
    recipe.rating.and_then(OrdVar::new_checked)
}

/// Distinct cuisines in first-seen order, one per filter option.
pub fn derive_categories(all_recipes: &[Recipe]) -> Vec<String> {
    all_recipes
        .iter()
        .filter_map(|r| r.cuisine.as_deref())
        .filter(|c| !c.is_empty())
        .unique()
        .map(String::from)
        .collect()
}
