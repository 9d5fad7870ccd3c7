use chrono::{DateTime, Utc};
use ride_admin_api::config::PaginationConfig;
use ride_admin_api::domain::driver::DriverVerificationRecord;
use uuid::Uuid;

use crate::models::user::DriverModel;
use crate::repository::pagination::{PaginationInfo, Paginator};

use super::driver_view::{filter_and_sort, sort_newest_first, DriverCodes, DriverFilter, SortConfig, SortKey};

/// The driver list of the admin dashboard.
///
/// Holds the one authoritative collection of loaded drivers. Filtered, sorted
/// and paged views are computed from it on demand, so applying a reviewed
/// record in one place updates every view.
#[derive(Debug, Clone)]
pub struct DriverDirectory {
    drivers: Vec<DriverModel>,
    codes: DriverCodes,
    filter: DriverFilter,
    sort: SortConfig,
    paginator: Paginator,
}

impl DriverDirectory {
    pub fn new(config: &PaginationConfig) -> Self {
        Self {
            drivers: Vec::new(),
            codes: DriverCodes::default(),
            filter: DriverFilter::default(),
            sort: SortConfig::default(),
            paginator: Paginator::new(config),
        }
    }

    /// Replace the collection with a fresh load, newest registration first
    pub fn replace_all(&mut self, mut drivers: Vec<DriverModel>) {
        sort_newest_first(&mut drivers);
        tracing::debug!(drivers = drivers.len(), "Driver directory reloaded");
        self.codes = DriverCodes::from_drivers(&drivers);
        self.drivers = drivers;
    }

    pub fn drivers(&self) -> &[DriverModel] {
        &self.drivers
    }

    pub fn get(&self, id: Uuid) -> Option<&DriverModel> {
        self.drivers.iter().find(|driver| driver.id() == id)
    }

    pub fn codes(&self) -> &DriverCodes {
        &self.codes
    }

    /// Copy a record returned by a successful admin action onto the matching driver.
    ///
    /// Returns `false` when the driver is not in the collection.
    pub fn apply(&mut self, record: &DriverVerificationRecord) -> bool {
        match self
            .drivers
            .iter_mut()
            .find(|driver| driver.id() == record.driver_id)
        {
            Some(driver) => {
                driver.apply_record(record);
                true
            }
            None => false,
        }
    }

    pub fn filter(&self) -> &DriverFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: DriverFilter) {
        self.filter = filter;
    }

    /// Drop every filter and the column sort
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.sort = SortConfig::default();
    }

    pub fn sort(&self) -> &SortConfig {
        &self.sort
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn paginator_mut(&mut self) -> &mut Paginator {
        &mut self.paginator
    }

    /// Filtered and sorted drivers. Also reports the count to the paginator.
    pub fn visible(&mut self, now: DateTime<Utc>) -> Vec<&DriverModel> {
        let visible = filter_and_sort(&self.drivers, &self.filter, &self.sort, &self.codes, now);
        self.paginator.set_total_items(visible.len());
        visible
    }

    /// The drivers on the current page of the filtered view
    pub fn current_page(&mut self, now: DateTime<Utc>) -> Vec<&DriverModel> {
        let visible = filter_and_sort(&self.drivers, &self.filter, &self.sort, &self.codes, now);
        self.paginator.set_total_items(visible.len());
        self.paginator.page(&visible).to_vec()
    }

    pub fn page_info(&self) -> PaginationInfo {
        self.paginator.info()
    }
}

impl Default for DriverDirectory {
    fn default() -> Self {
        Self::new(&PaginationConfig::default())
    }
}
