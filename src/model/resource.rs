use std::fmt;

use serde::{Deserialize, Serialize};

/// The three resource collections a product references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Category,
    Unit,
    Storage,
}

impl ResourceKind {
    /// Display name used when a product references a resource that no longer exists.
    pub fn unknown_name(self) -> &'static str {
        match self {
            ResourceKind::Category => "Unknown Category",
            ResourceKind::Unit => "Unknown Unit",
            ResourceKind::Storage => "Unknown Storage",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Category => write!(f, "category"),
            ResourceKind::Unit => write!(f, "unit"),
            ResourceKind::Storage => write!(f, "storage"),
        }
    }
}

/// A category, unit or storage record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDto {
    pub id: i32,
    pub name: String,
}

/// Partial update for a resource; only changed fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ResourcePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

#[cfg(feature = "server")]
mod convert {
    use super::ResourceDto;

    impl From<entity::category::Model> for ResourceDto {
        fn from(model: entity::category::Model) -> Self {
            Self {
                id: model.id,
                name: model.name,
            }
        }
    }

    impl From<entity::unit::Model> for ResourceDto {
        fn from(model: entity::unit::Model) -> Self {
            Self {
                id: model.id,
                name: model.name,
            }
        }
    }

    impl From<entity::storage::Model> for ResourceDto {
        fn from(model: entity::storage::Model) -> Self {
            Self {
                id: model.id,
                name: model.name,
            }
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use shelfmate_test_utils::prelude::factory;

    use super::*;

    #[test]
    fn converts_each_resource_model() {
        assert_eq!(
            ResourceDto::from(factory::mock_category_model(1, "Dairy")).name,
            "Dairy"
        );
        assert_eq!(ResourceDto::from(factory::mock_unit_model(2, "Litre")).id, 2);
        assert_eq!(
            ResourceDto::from(factory::mock_storage_model(3, "Fridge")),
            ResourceDto {
                id: 3,
                name: "Fridge".to_string(),
            }
        );
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ResourceKind::Storage).unwrap(),
            "\"storage\""
        );
    }
}
