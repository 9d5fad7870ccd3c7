use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Duration, Months, NaiveTime, Utc};
use ride_admin_api::domain::activity::ActivityStatus;
use ride_admin_api::domain::kyc_status::KycStatus;
use ride_admin_api::error::AdminError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::DriverModel;

/// Short human-readable driver codes (`DRIVER001`, `DRIVER002`, ...).
///
/// Codes are assigned over the distinct driver ids in ascending order, so a
/// driver keeps its code as long as the set of drivers does not change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverCodes {
    codes: HashMap<Uuid, String>,
}

impl DriverCodes {
    pub fn from_drivers(drivers: &[DriverModel]) -> Self {
        let mut ids: Vec<Uuid> = drivers.iter().map(DriverModel::id).collect();
        ids.sort_unstable();
        ids.dedup();

        let codes = ids
            .into_iter()
            .enumerate()
            .map(|(idx, id)| (id, format!("DRIVER{:03}", idx + 1)))
            .collect();
        Self { codes }
    }

    pub fn code(&self, id: Uuid) -> Option<&str> {
        self.codes.get(&id).map(String::as_str)
    }

    /// Code for the driver, empty when unknown
    pub fn code_or_empty(&self, id: Uuid) -> &str {
        self.code(id).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Registration window relative to the start of the current UTC day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    Today,
    Week,
    Month,
    Quarter,
}

impl DateRange {
    /// Earliest registration time inside the window
    pub fn since(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.date_naive();
        let start = match self {
            DateRange::Today => today,
            DateRange::Week => today - Duration::days(7),
            DateRange::Month => today.checked_sub_months(Months::new(1)).unwrap_or(today),
            DateRange::Quarter => today.checked_sub_months(Months::new(3)).unwrap_or(today),
        };
        start.and_time(NaiveTime::MIN).and_utc()
    }

    /// Drivers without a registration date are never inside a window
    pub fn contains(&self, created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        created_at.is_some_and(|at| at >= self.since(now))
    }
}

impl FromStr for DateRange {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(DateRange::Today),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            "quarter" => Ok(DateRange::Quarter),
            other => Err(AdminError::ValidationError(format!(
                "Unknown date range: {other}"
            ))),
        }
    }
}

/// Driver list filter. Every set criterion must match; blank text is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverFilter {
    /// Substring of the list name or email
    pub name: Option<String>,
    /// Substring of the vehicle brand, model or plate
    pub vehicle: Option<String>,
    pub kyc_status: Option<KycStatus>,
    /// Drivers without a vehicle never match
    pub vehicle_status: Option<ActivityStatus>,
    pub driver_status: Option<ActivityStatus>,
    /// Substring of the display code
    pub code: Option<String>,
    /// Substring of the list name, email, or phone
    pub search: Option<String>,
    pub date_range: Option<DateRange>,
}

impl DriverFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, driver: &DriverModel, codes: &DriverCodes, now: DateTime<Utc>) -> bool {
        if let Some(needle) = lowered(&self.name) {
            let name_hit = driver.user.list_name().to_lowercase().contains(&needle)
                || contains_lowered(driver.user.email.as_deref(), &needle);
            if !name_hit {
                return false;
            }
        }

        if let Some(needle) = lowered(&self.vehicle) {
            if !driver.vehicle.as_ref().is_some_and(|v| v.matches(&needle)) {
                return false;
            }
        }

        if let Some(status) = &self.kyc_status {
            if driver.kyc_status() != *status {
                return false;
            }
        }

        if let Some(status) = self.vehicle_status {
            let hit = match status {
                ActivityStatus::Active => driver.has_active_vehicle(),
                ActivityStatus::Inactive => driver.has_inactive_vehicle(),
            };
            if !hit {
                return false;
            }
        }

        if let Some(status) = self.driver_status {
            if ActivityStatus::from_flag(driver.user.is_active) != status {
                return false;
            }
        }

        if let Some(needle) = lowered(&self.code) {
            if !codes.code_or_empty(driver.id()).to_lowercase().contains(&needle) {
                return false;
            }
        }

        if let Some(needle) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let lower = needle.to_lowercase();
            let hit = driver.user.list_name().to_lowercase().contains(&lower)
                || contains_lowered(driver.user.email.as_deref(), &lower)
                || driver.user.phone.as_deref().is_some_and(|phone| phone.contains(needle));
            if !hit {
                return false;
            }
        }

        if let Some(range) = self.date_range {
            if !range.contains(driver.user.created_at, now) {
                return false;
            }
        }

        true
    }
}

fn lowered(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_lowercase)
}

fn contains_lowered(haystack: Option<&str>, needle_lower: &str) -> bool {
    haystack.is_some_and(|value| value.to_lowercase().contains(needle_lower))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Code,
    Name,
    Email,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Column sort state of the driver table. No key keeps the loaded order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Clicking the ascending column flips it; any other click sorts ascending
    pub fn toggle(&mut self, key: SortKey) {
        self.direction = if self.key == Some(key) && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.key = Some(key);
    }

    pub fn compare(&self, a: &DriverModel, b: &DriverModel, codes: &DriverCodes) -> Ordering {
        let ordering = match self.key {
            None => return Ordering::Equal,
            Some(SortKey::Code) => codes.code_or_empty(a.id()).cmp(codes.code_or_empty(b.id())),
            Some(SortKey::Name) => a.user.list_name().cmp(b.user.list_name()),
            Some(SortKey::Email) => a
                .user
                .email
                .as_deref()
                .unwrap_or("")
                .cmp(b.user.email.as_deref().unwrap_or("")),
            Some(SortKey::CreatedAt) => created_or_epoch(a).cmp(&created_or_epoch(b)),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

fn created_or_epoch(driver: &DriverModel) -> DateTime<Utc> {
    driver.user.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Loaded order of the driver list: newest registration first
pub fn sort_newest_first(drivers: &mut [DriverModel]) {
    drivers.sort_by_key(|driver| std::cmp::Reverse(created_or_epoch(driver)));
}

/// Filter then sort. Sorting is stable, so ties keep their loaded order.
pub fn filter_and_sort<'a>(
    drivers: &'a [DriverModel],
    filter: &DriverFilter,
    sort: &SortConfig,
    codes: &DriverCodes,
    now: DateTime<Utc>,
) -> Vec<&'a DriverModel> {
    let mut visible: Vec<&DriverModel> = drivers
        .iter()
        .filter(|driver| filter.matches(driver, codes, now))
        .collect();
    if sort.key.is_some() {
        visible.sort_by(|a, b| sort.compare(a, b, codes));
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::driver::test_utils::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
    }

    fn fleet() -> Vec<DriverModel> {
        let mut kofi = with_documents(create_test_driver("Kofi"), &["license"]);
        kofi.user.kyc_approved = Some(true);
        kofi.user.phone = Some("+233200000001".to_string());
        kofi.vehicle = Some(create_test_vehicle(kofi.id(), "Toyota", "Corolla", "GR-1234-21"));
        let kofi = created(kofi, Utc.with_ymd_and_hms(2024, 5, 15, 8, 0, 0).unwrap());

        let mut ama = with_documents(create_test_driver("Ama"), &["license", "id_front"]);
        ama.user.vehicle_active = Some(false);
        ama.vehicle = Some(create_test_vehicle(ama.id(), "Honda", "Civic", "AS-77-22"));
        let ama = created(ama, Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap());

        let mut yaw = create_test_driver("Yaw");
        yaw.user.is_active = Some(false);

        vec![kofi, ama, yaw]
    }

    fn names(drivers: &[&DriverModel]) -> Vec<String> {
        drivers
            .iter()
            .map(|d| d.user.list_name().to_string())
            .collect()
    }

    #[test]
    fn test_codes_follow_sorted_ids() {
        let drivers = fleet();
        let codes = DriverCodes::from_drivers(&drivers);
        assert_eq!(codes.len(), 3);

        let mut ids: Vec<Uuid> = drivers.iter().map(DriverModel::id).collect();
        ids.sort();
        assert_eq!(codes.code(ids[0]), Some("DRIVER001"));
        assert_eq!(codes.code(ids[2]), Some("DRIVER003"));
        assert_eq!(codes.code(Uuid::new_v4()), None);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let drivers = fleet();
        let codes = DriverCodes::from_drivers(&drivers);
        let filter = DriverFilter::default();
        assert!(filter.is_empty());
        let visible = filter_and_sort(&drivers, &filter, &SortConfig::default(), &codes, now());
        assert_eq!(names(&visible), vec!["Kofi", "Ama", "Yaw"]);
    }

    #[test]
    fn test_name_filter_matches_email_case_insensitively() {
        let drivers = fleet();
        let codes = DriverCodes::from_drivers(&drivers);
        let filter = DriverFilter {
            name: Some("AMA@EXAMPLE".to_string()),
            ..DriverFilter::default()
        };
        let visible = filter_and_sort(&drivers, &filter, &SortConfig::default(), &codes, now());
        assert_eq!(names(&visible), vec!["Ama"]);
    }

    #[test]
    fn test_vehicle_status_skips_drivers_without_vehicle() {
        let drivers = fleet();
        let codes = DriverCodes::from_drivers(&drivers);

        let active = DriverFilter {
            vehicle_status: Some(ActivityStatus::Active),
            ..DriverFilter::default()
        };
        let visible = filter_and_sort(&drivers, &active, &SortConfig::default(), &codes, now());
        assert_eq!(names(&visible), vec!["Kofi"]);

        let inactive = DriverFilter {
            vehicle_status: Some(ActivityStatus::Inactive),
            ..DriverFilter::default()
        };
        let visible = filter_and_sort(&drivers, &inactive, &SortConfig::default(), &codes, now());
        assert_eq!(names(&visible), vec!["Ama"]);
    }

    #[test]
    fn test_kyc_and_driver_status_filters() {
        let drivers = fleet();
        let codes = DriverCodes::from_drivers(&drivers);

        let verified = DriverFilter {
            kyc_status: Some(KycStatus::Verified),
            ..DriverFilter::default()
        };
        let visible = filter_and_sort(&drivers, &verified, &SortConfig::default(), &codes, now());
        assert_eq!(names(&visible), vec!["Kofi"]);

        let submitted = DriverFilter {
            kyc_status: Some(KycStatus::Submitted),
            ..DriverFilter::default()
        };
        let visible = filter_and_sort(&drivers, &submitted, &SortConfig::default(), &codes, now());
        assert_eq!(names(&visible), vec!["Ama"]);

        let inactive = DriverFilter {
            driver_status: Some(ActivityStatus::Inactive),
            ..DriverFilter::default()
        };
        let visible = filter_and_sort(&drivers, &inactive, &SortConfig::default(), &codes, now());
        assert_eq!(names(&visible), vec!["Yaw"]);
    }

    #[test]
    fn test_search_and_vehicle_text() {
        let drivers = fleet();
        let codes = DriverCodes::from_drivers(&drivers);

        let by_phone = DriverFilter {
            search: Some("200000001".to_string()),
            ..DriverFilter::default()
        };
        let visible = filter_and_sort(&drivers, &by_phone, &SortConfig::default(), &codes, now());
        assert_eq!(names(&visible), vec!["Kofi"]);

        let by_plate = DriverFilter {
            vehicle: Some("as-77".to_string()),
            ..DriverFilter::default()
        };
        let visible = filter_and_sort(&drivers, &by_plate, &SortConfig::default(), &codes, now());
        assert_eq!(names(&visible), vec!["Ama"]);
    }

    #[test]
    fn test_code_filter() {
        let drivers = fleet();
        let codes = DriverCodes::from_drivers(&drivers);
        let filter = DriverFilter {
            code: Some("driver002".to_string()),
            ..DriverFilter::default()
        };
        let visible = filter_and_sort(&drivers, &filter, &SortConfig::default(), &codes, now());
        assert_eq!(visible.len(), 1);
        assert_eq!(codes.code(visible[0].id()), Some("DRIVER002"));
    }

    #[test]
    fn test_date_ranges() {
        let drivers = fleet();
        let codes = DriverCodes::from_drivers(&drivers);

        let today = DriverFilter {
            date_range: Some(DateRange::Today),
            ..DriverFilter::default()
        };
        let visible = filter_and_sort(&drivers, &today, &SortConfig::default(), &codes, now());
        assert_eq!(names(&visible), vec!["Kofi"]);

        let quarter = DriverFilter {
            date_range: Some(DateRange::Quarter),
            ..DriverFilter::default()
        };
        let visible = filter_and_sort(&drivers, &quarter, &SortConfig::default(), &codes, now());
        assert_eq!(names(&visible), vec!["Kofi", "Ama"]);

        assert_eq!(
            DateRange::Month.since(now()),
            Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap()
        );
        assert!("fortnight".parse::<DateRange>().is_err());
    }

    #[test]
    fn test_sort_toggle() {
        let mut sort = SortConfig::default();
        sort.toggle(SortKey::Name);
        assert_eq!(sort.direction, SortDirection::Asc);
        sort.toggle(SortKey::Name);
        assert_eq!(sort.direction, SortDirection::Desc);
        sort.toggle(SortKey::Name);
        assert_eq!(sort.direction, SortDirection::Asc);
        sort.toggle(SortKey::Email);
        assert_eq!(sort, SortConfig { key: Some(SortKey::Email), direction: SortDirection::Asc });
    }

    #[test]
    fn test_sort_by_name_both_directions() {
        let drivers = fleet();
        let codes = DriverCodes::from_drivers(&drivers);
        let mut sort = SortConfig::default();
        sort.toggle(SortKey::Name);
        let visible = filter_and_sort(&drivers, &DriverFilter::default(), &sort, &codes, now());
        assert_eq!(names(&visible), vec!["Ama", "Kofi", "Yaw"]);

        sort.toggle(SortKey::Name);
        let visible = filter_and_sort(&drivers, &DriverFilter::default(), &sort, &codes, now());
        assert_eq!(names(&visible), vec!["Yaw", "Kofi", "Ama"]);
    }

    #[test]
    fn test_newest_first_puts_undated_last() {
        let mut drivers = fleet();
        drivers.reverse();
        sort_newest_first(&mut drivers);
        let order: Vec<&str> = drivers.iter().map(|d| d.user.list_name()).collect();
        assert_eq!(order, vec!["Kofi", "Ama", "Yaw"]);
    }
}
