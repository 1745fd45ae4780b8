//! Minimal-patch editing.
//!
//! An [`EditSession`] keeps the value the store last acknowledged apart from the value
//! currently shown in the form, so a save sends only the fields the user actually
//! changed and never overwrites store-held fields the client did not touch.

use chrono::NaiveDate;

use crate::{
    client::error::ClientError,
    model::{
        product::{ProductDto, ProductPatch},
        resource::{ResourceDto, ResourcePatch},
    },
};

/// Field-by-field comparison producing a partial update.
pub trait FieldDiff {
    type Patch;

    /// Patch holding the fields of `edited` whose values differ from `self`.
    fn diff(&self, edited: &Self) -> Self::Patch;

    /// Rejects values the store would refuse, before any request is sent.
    fn validate(&self) -> Result<(), ClientError>;
}

fn changed<T: PartialEq + Clone>(saved: &T, edited: &T) -> Option<T> {
    (saved != edited).then(|| edited.clone())
}

/// The user-editable fields of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: i32,
    pub expiration_date: NaiveDate,
    pub category_id: i32,
    pub unit_id: i32,
    pub storage_id: i32,
}

impl From<&ProductDto> for ProductDraft {
    fn from(product: &ProductDto) -> Self {
        Self {
            name: product.name.clone(),
            quantity: product.quantity,
            expiration_date: product.expiration_date,
            category_id: product.category_id,
            unit_id: product.unit_id,
            storage_id: product.storage_id,
        }
    }
}

impl FieldDiff for ProductDraft {
    type Patch = ProductPatch;

    fn diff(&self, edited: &Self) -> ProductPatch {
        ProductPatch {
            name: changed(&self.name, &edited.name),
            quantity: changed(&self.quantity, &edited.quantity),
            expiration_date: changed(&self.expiration_date, &edited.expiration_date),
            category_id: changed(&self.category_id, &edited.category_id),
            unit_id: changed(&self.unit_id, &edited.unit_id),
            storage_id: changed(&self.storage_id, &edited.storage_id),
        }
    }

    fn validate(&self) -> Result<(), ClientError> {
        if self.name.trim().is_empty() {
            return Err(ClientError::InvalidInput(
                "product name must not be empty".to_string(),
            ));
        }
        if self.quantity < 0 {
            return Err(ClientError::InvalidInput(format!(
                "quantity must not be negative, got {}",
                self.quantity
            )));
        }

        Ok(())
    }
}

/// The user-editable fields of a category, unit or storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDraft {
    pub name: String,
}

impl From<&ResourceDto> for ResourceDraft {
    fn from(resource: &ResourceDto) -> Self {
        Self {
            name: resource.name.clone(),
        }
    }
}

impl FieldDiff for ResourceDraft {
    type Patch = ResourcePatch;

    fn diff(&self, edited: &Self) -> ResourcePatch {
        ResourcePatch {
            name: changed(&self.name, &edited.name),
        }
    }

    fn validate(&self) -> Result<(), ClientError> {
        if self.name.trim().is_empty() {
            return Err(ClientError::InvalidInput(
                "name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Edit state for a single record.
#[derive(Debug, Clone)]
pub struct EditSession<T> {
    /// Last value acknowledged by the store.
    baseline: T,
    /// Value currently being edited.
    current: T,
}

impl<T: FieldDiff + Clone + PartialEq> EditSession<T> {
    pub fn new(saved: T) -> Self {
        Self {
            current: saved.clone(),
            baseline: saved,
        }
    }

    pub fn baseline(&self) -> &T {
        &self.baseline
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut T {
        &mut self.current
    }

    pub fn is_dirty(&self) -> bool {
        self.baseline != self.current
    }

    pub fn patch(&self) -> T::Patch {
        self.baseline.diff(&self.current)
    }

    /// Records a successful save; later diffs are computed against `saved`.
    ///
    /// Must not be called after a failed save, or the unsaved changes would be lost
    /// from the next patch.
    pub fn acknowledge(&mut self, saved: T) {
        self.baseline = saved;
    }

    /// Drops unsaved edits.
    pub fn discard(&mut self) {
        self.current = self.baseline.clone();
    }
}
