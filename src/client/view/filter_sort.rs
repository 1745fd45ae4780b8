//! Filtering and ordering of annotated products and resource lists.
//!
//! The engine is stateless: the caller owns the [`SortState`] and the query text and
//! passes them in on every call.

use std::cmp::Ordering;

use crate::{client::view::expiration::AnnotatedProduct, model::resource::ResourceDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Expiration,
    Name,
    Category,
    Quantity,
    CreatedAt,
}

/// Sort key plus direction, as held by the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::default(),
            ascending: true,
        }
    }
}

impl SortState {
    /// Selecting the active key flips the direction; a new key starts ascending.
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.ascending = !self.ascending;
        } else {
            self.key = key;
            self.ascending = true;
        }
    }
}

/// Case-insensitive comparison approximating a locale collation.
///
/// Accented Latin letters compare as their base letter first, so "Éclair" sorts before
/// "Zucchini", and the unaccented spelling wins a tie. Strings differing only in case
/// order lower-case first. Ligatures such as "æ" or "ß" are not expanded.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let (a_lower, b_lower) = (a.to_lowercase(), b.to_lowercase());

    a_lower
        .chars()
        .map(base_letter)
        .cmp(b_lower.chars().map(base_letter))
        .then_with(|| a_lower.cmp(&b_lower))
        .then_with(|| b.cmp(a))
}

/// Strips the diacritic from a lower-case Latin letter.
fn base_letter(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è'..='ë' | 'ē' | 'ę' | 'ě' => 'e',
        'ì'..='ï' | 'ī' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' => 's',
        'ť' => 't',
        'ù'..='ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => c,
    }
}

fn matches_query(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

/// Urgency-first expiration ordering.
///
/// Expired products always come before unexpired ones. Among expired products an
/// ascending sort puts the most overdue first; among unexpired ones it puts the
/// soonest to expire first.
fn compare_expiration(a: &AnnotatedProduct, b: &AnnotatedProduct, ascending: bool) -> Ordering {
    match (a.is_expired, b.is_expired) {
        (true, true) => directed(b.days_left.cmp(&a.days_left), ascending),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => directed(a.days_left.cmp(&b.days_left), ascending),
    }
}

pub fn compare(a: &AnnotatedProduct, b: &AnnotatedProduct, sort: SortState) -> Ordering {
    match sort.key {
        SortKey::Expiration => compare_expiration(a, b, sort.ascending),
        SortKey::Name => directed(
            locale_cmp(&a.product.name, &b.product.name),
            sort.ascending,
        ),
        SortKey::Category => directed(
            locale_cmp(&a.category_name, &b.category_name),
            sort.ascending,
        ),
        SortKey::Quantity => directed(
            a.product.quantity.cmp(&b.product.quantity),
            sort.ascending,
        ),
        SortKey::CreatedAt => directed(
            a.product.created_at.cmp(&b.product.created_at),
            sort.ascending,
        ),
    }
}

/// Keeps products whose name contains `query` (case-insensitive) and orders them by `sort`.
pub fn filter_and_sort(
    products: Vec<AnnotatedProduct>,
    query: &str,
    sort: SortState,
) -> Vec<AnnotatedProduct> {
    let mut products: Vec<AnnotatedProduct> = products
        .into_iter()
        .filter(|p| matches_query(&p.product.name, query))
        .collect();

    products.sort_by(|a, b| compare(a, b, sort));

    products
}

/// Resource list for the management page: filtered by name and ordered alphabetically.
pub fn filter_resources(resources: &[ResourceDto], query: &str) -> Vec<ResourceDto> {
    let mut resources: Vec<ResourceDto> = resources
        .iter()
        .filter(|r| matches_query(&r.name, query))
        .cloned()
        .collect();

    resources.sort_by(|a, b| locale_cmp(&a.name, &b.name));

    resources
}
