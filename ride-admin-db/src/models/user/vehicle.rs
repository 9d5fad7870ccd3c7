use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for the vehicle registered by a driver.
///
/// Drivers register at most one vehicle; activation lives on the user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub brand: Option<HeaplessString<50>>,
    pub model: Option<HeaplessString<50>>,
    /// Licence plate
    pub number: Option<HeaplessString<20>>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl VehicleModel {
    /// Case-insensitive substring match on brand, model or plate
    pub fn matches(&self, needle_lower: &str) -> bool {
        [
            self.brand.as_deref(),
            self.model.as_deref(),
            self.number.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(needle_lower))
    }
}

impl Identifiable for VehicleModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
