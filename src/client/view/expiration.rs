//! Expiration annotation.
//!
//! Derives display fields for a product relative to a reference instant. Everything here
//! is a pure function of its inputs, so callers re-run it with a fresh `now` on every
//! render or fetch instead of caching the result.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

use crate::model::{
    product::ProductDto,
    resource::{ResourceDto, ResourceKind},
};

/// Products this many days or fewer from expiring are flagged as expiring soon.
pub const DEFAULT_EXPIRING_SOON_DAYS: u64 = 2;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Urgency bucket for a product, used to colour list entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirationStatus {
    Expired,
    ExpiringSoon,
    Fresh,
}

/// A product enriched with the derived fields the list view displays and sorts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedProduct {
    pub product: ProductDto,
    /// Whole days between the expiration instant and now. Always non-negative; the
    /// direction is carried by `is_expired`.
    pub days_left: u64,
    /// Whole days since the product was recorded.
    pub days_old: u64,
    pub is_expired: bool,
    pub category_name: String,
    pub unit_name: String,
    pub storage_name: String,
}

impl AnnotatedProduct {
    pub fn status(&self, expiring_soon_days: u64) -> ExpirationStatus {
        if self.is_expired {
            ExpirationStatus::Expired
        } else if self.days_left <= expiring_soon_days {
            ExpirationStatus::ExpiringSoon
        } else {
            ExpirationStatus::Fresh
        }
    }
}

/// Id to name lookup over the three resource collections.
pub struct ResourceNames<'a> {
    categories: HashMap<i32, &'a str>,
    units: HashMap<i32, &'a str>,
    storages: HashMap<i32, &'a str>,
}

impl<'a> ResourceNames<'a> {
    pub fn new(
        categories: &'a [ResourceDto],
        units: &'a [ResourceDto],
        storages: &'a [ResourceDto],
    ) -> Self {
        fn index(resources: &[ResourceDto]) -> HashMap<i32, &str> {
            resources.iter().map(|r| (r.id, r.name.as_str())).collect()
        }

        Self {
            categories: index(categories),
            units: index(units),
            storages: index(storages),
        }
    }

    /// Name of the referenced resource, or the "Unknown ..." placeholder for a dangling id.
    pub fn resolve(&self, kind: ResourceKind, id: i32) -> &'a str {
        let names = match kind {
            ResourceKind::Category => &self.categories,
            ResourceKind::Unit => &self.units,
            ResourceKind::Storage => &self.storages,
        };

        names
            .get(&id)
            .copied()
            .unwrap_or_else(|| kind.unknown_name())
    }
}

/// The instant a calendar expiration date refers to: noon UTC on that day.
pub fn expiration_instant(date: NaiveDate) -> DateTime<Utc> {
    (date.and_time(NaiveTime::MIN) + TimeDelta::hours(12)).and_utc()
}

/// `floor(delta / 1 day)`, rounding toward negative infinity.
fn floor_days(delta: TimeDelta) -> i64 {
    delta.num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

pub fn annotate(
    product: &ProductDto,
    names: &ResourceNames<'_>,
    now: DateTime<Utc>,
) -> AnnotatedProduct {
    let expires_at = expiration_instant(product.expiration_date);
    let days_old = u64::try_from(floor_days(now - product.created_at.and_utc())).unwrap_or(0);

    AnnotatedProduct {
        days_left: floor_days(expires_at - now).unsigned_abs(),
        days_old,
        is_expired: expires_at < now,
        category_name: names
            .resolve(ResourceKind::Category, product.category_id)
            .to_string(),
        unit_name: names.resolve(ResourceKind::Unit, product.unit_id).to_string(),
        storage_name: names
            .resolve(ResourceKind::Storage, product.storage_id)
            .to_string(),
        product: product.clone(),
    }
}

pub fn annotate_all(
    products: &[ProductDto],
    names: &ResourceNames<'_>,
    now: DateTime<Utc>,
) -> Vec<AnnotatedProduct> {
    products
        .iter()
        .map(|product| annotate(product, names, now))
        .collect()
}
