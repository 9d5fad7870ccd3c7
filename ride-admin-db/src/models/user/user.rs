use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use ride_admin_api::domain::activity::is_flag_active;
use ride_admin_api::domain::verification::Verification;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

pub const ROLE_DRIVER: &str = "driver";

/// Roles that the user list groups under "rider"
pub const RIDER_ROLES: [&str; 3] = ["client", "customer", "rider"];

/// # Documentation
/// Database model for a platform user (drivers, riders, admins)
///
/// KYC and activation columns keep the names and the loose typing written by
/// the mobile apps:
/// - `kyc_approved` is tri-state (`NULL` means never adjudicated)
/// - `kycStatus` is free text
/// - `vehicleActive` / `is_active` are `NULL` for records that predate the flags,
///   which reads as active
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: Uuid,

    /// `driver`, `client`, `customer`, `rider`, `admin`, or unset for legacy riders
    pub role: Option<HeaplessString<20>>,

    pub name: Option<String>,
    pub username: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    pub kyc_approved: Option<bool>,
    #[serde(rename = "kycStatus")]
    pub kyc_status: Option<String>,
    #[serde(rename = "kycRejectionReason")]
    pub kyc_rejection_reason: Option<String>,
    #[serde(rename = "kycVerifiedAt")]
    pub kyc_verified_at: Option<DateTime<Utc>>,
    #[serde(rename = "kycRejectedAt")]
    pub kyc_rejected_at: Option<DateTime<Utc>>,

    #[serde(rename = "vehicleActive")]
    pub vehicle_active: Option<bool>,
    pub is_active: Option<bool>,

    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserModel {
    /// A bare user with the given role and every optional column unset
    pub fn new(id: Uuid, role: Option<&str>) -> Self {
        Self {
            id,
            role: role.and_then(|r| HeaplessString::try_from(r).ok()),
            name: None,
            username: None,
            display_name: None,
            email: None,
            phone: None,
            kyc_approved: None,
            kyc_status: None,
            kyc_rejection_reason: None,
            kyc_verified_at: None,
            kyc_rejected_at: None,
            vehicle_active: None,
            is_active: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn is_driver(&self) -> bool {
        self.role() == Some(ROLE_DRIVER)
    }

    /// Riders include every non-driver consumer role and users with no role at all
    pub fn is_rider(&self) -> bool {
        match self.role() {
            None => true,
            Some(role) => RIDER_ROLES.contains(&role),
        }
    }

    /// Name shown in tables: username, then name, then empty
    pub fn list_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("")
    }

    pub fn is_active(&self) -> bool {
        is_flag_active(self.is_active)
    }

    pub fn verification(&self) -> Verification {
        Verification::from_legacy(self.kyc_approved, self.kyc_status.as_deref())
    }
}

impl Identifiable for UserModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
