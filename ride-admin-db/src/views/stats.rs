use ride_admin_api::domain::kyc_status::KycStatus;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::booking::{BookingModel, BookingPhase};
use crate::models::user::{DriverModel, UserModel};

/// Number of bookings kept for the activity feed
pub const RECENT_BOOKINGS: usize = 5;

/// Driver and rider counters of the dashboard overview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetStats {
    pub total_drivers: usize,
    pub active_drivers: usize,
    pub total_clients: usize,
    pub kyc_verified: usize,
    pub kyc_pending: usize,
    pub kyc_rejected: usize,
    pub kyc_submitted: usize,
    /// Every other derived status, including unknown free text
    pub kyc_not_submitted: usize,
    pub vehicles_active: usize,
    pub vehicles_inactive: usize,
    pub vehicles_without_info: usize,
}

impl FleetStats {
    pub fn compute(drivers: &[DriverModel], users: &[UserModel]) -> Self {
        let mut stats = FleetStats {
            total_drivers: drivers.len(),
            total_clients: users.iter().filter(|user| user.is_rider()).count(),
            ..FleetStats::default()
        };

        for driver in drivers {
            if driver.user.is_active() {
                stats.active_drivers += 1;
            }

            match driver.kyc_status() {
                KycStatus::Verified => stats.kyc_verified += 1,
                KycStatus::Pending => stats.kyc_pending += 1,
                KycStatus::Rejected => stats.kyc_rejected += 1,
                KycStatus::Submitted => stats.kyc_submitted += 1,
                _ => stats.kyc_not_submitted += 1,
            }

            if !driver.has_vehicle() {
                stats.vehicles_without_info += 1;
            } else if driver.has_active_vehicle() {
                stats.vehicles_active += 1;
            } else {
                stats.vehicles_inactive += 1;
            }
        }

        stats
    }
}

/// Booking counters and revenue of the dashboard overview
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingStats {
    pub total_bookings: usize,
    pub active_bookings: usize,
    pub completed_bookings: usize,
    pub cancelled_bookings: usize,
    pub pending_bookings: usize,
    /// Fare (or amount) summed over completed bookings
    pub total_revenue: Decimal,
    pub recent_bookings: Vec<BookingModel>,
}

impl BookingStats {
    /// Bookings are expected newest first; the first few become the recent feed
    pub fn compute(bookings: &[BookingModel]) -> Self {
        let mut stats = BookingStats {
            total_bookings: bookings.len(),
            recent_bookings: bookings.iter().take(RECENT_BOOKINGS).cloned().collect(),
            ..BookingStats::default()
        };

        for booking in bookings {
            match booking.phase() {
                Some(BookingPhase::Active) => stats.active_bookings += 1,
                Some(BookingPhase::Pending) => stats.pending_bookings += 1,
                Some(BookingPhase::Cancelled) => stats.cancelled_bookings += 1,
                Some(BookingPhase::Completed) => {
                    stats.completed_bookings += 1;
                    stats.total_revenue += booking.revenue();
                }
                None => {}
            }
        }

        stats
    }
}

/// Period-over-period change in percent, rounded to one decimal.
///
/// Growth from zero is reported as 100 when anything happened, else 0.
pub fn growth_percent(previous: Decimal, current: Decimal) -> Decimal {
    if previous.is_zero() {
        return if current > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
    }
    // Ties round toward positive infinity: -33.35 becomes -33.3
    let tenths = (current - previous) / previous * Decimal::ONE_HUNDRED * Decimal::TEN;
    (tenths + Decimal::new(5, 1)).floor() / Decimal::TEN
}
