use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Coarse lifecycle buckets used by the dashboard counters.
///
/// Booking status is free text written by the rider and driver apps; several
/// spellings fold into one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingPhase {
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl BookingPhase {
    pub fn classify(status: &str) -> Option<Self> {
        match status {
            "pending" | "requested" => Some(BookingPhase::Pending),
            "active" | "in-progress" | "ongoing" | "accepted" => Some(BookingPhase::Active),
            "completed" => Some(BookingPhase::Completed),
            "cancelled" => Some(BookingPhase::Cancelled),
            _ => None,
        }
    }
}

/// Database model for a ride booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingModel {
    pub id: Uuid,
    pub status: HeaplessString<20>,
    /// Final fare; older bookings only carry `amount`
    pub fare: Option<Decimal>,
    pub amount: Option<Decimal>,
    #[serde(rename = "pickupLocation")]
    pub pickup_location: Option<String>,
    #[serde(rename = "dropoffLocation")]
    pub dropoff_location: Option<String>,
    #[serde(rename = "driverId")]
    pub driver_id: Option<Uuid>,
    #[serde(rename = "clientId")]
    pub client_id: Option<Uuid>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl BookingModel {
    pub fn phase(&self) -> Option<BookingPhase> {
        BookingPhase::classify(self.status.as_str())
    }

    /// Revenue contributed by this booking: the fare, else the amount, else zero.
    /// A zero fare falls through to the amount.
    pub fn revenue(&self) -> Decimal {
        self.fare
            .filter(|fare| !fare.is_zero())
            .or(self.amount.filter(|amount| !amount.is_zero()))
            .unwrap_or(Decimal::ZERO)
    }
}

impl Identifiable for BookingModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;

    pub fn create_test_booking(status: &str, fare: Option<Decimal>) -> BookingModel {
        BookingModel {
            id: Uuid::new_v4(),
            status: HeaplessString::try_from(status).unwrap(),
            fare,
            amount: None,
            pickup_location: Some("Airport".to_string()),
            dropoff_location: Some("Osu".to_string()),
            driver_id: None,
            client_id: None,
            created_at: None,
        }
    }
}
