use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate};
use ride_admin_api::error::AdminError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::booking::{BookingModel, BookingPhase};
use crate::models::user::{DriverModel, UserModel};

use super::stats::growth_percent;

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Calendar slot a timestamp is counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    Day(NaiveDate),
    Month { year: i32, month: u32 },
    Year(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Granularity {
    Day,
    Month,
    Year,
}

impl Granularity {
    fn bucket(self, date: NaiveDate) -> Bucket {
        match self {
            Granularity::Day => Bucket::Day(date),
            Granularity::Month => Bucket::Month {
                year: date.year(),
                month: date.month(),
            },
            Granularity::Year => Bucket::Year(date.year()),
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First days of the `count` months ending with the month of `today`, oldest first
fn trailing_months(today: NaiveDate, count: u32) -> Vec<NaiveDate> {
    let first = first_of_month(today);
    (0..count)
        .rev()
        .filter_map(|back| first.checked_sub_months(Months::new(back)))
        .collect()
}

/// Growth between the last two points, zero when there are fewer than two
fn last_two_growth<T>(points: &[T], value: impl Fn(&T) -> Decimal) -> Decimal {
    match points {
        [.., previous, current] => growth_percent(value(previous), value(current)),
        _ => Decimal::ZERO,
    }
}

/// Window of the revenue chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevenuePeriod {
    /// Monday to Sunday of the current week, one point per day
    #[serde(rename = "week")]
    Week,
    /// Every day of the current month
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "year")]
    Year,
}

impl RevenuePeriod {
    fn buckets(self, today: NaiveDate) -> (Granularity, Vec<(String, NaiveDate)>) {
        let months = |count: u32| {
            trailing_months(today, count)
                .into_iter()
                .map(|start| (start.format("%b").to_string(), start))
                .collect()
        };
        match self {
            RevenuePeriod::Week => {
                let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
                let days = WEEKDAY_LABELS
                    .iter()
                    .zip(0i64..)
                    .map(|(label, offset)| (label.to_string(), monday + Duration::days(offset)))
                    .collect();
                (Granularity::Day, days)
            }
            RevenuePeriod::Month => {
                let first = first_of_month(today);
                let days = first
                    .iter_days()
                    .take_while(|day| day.month() == first.month())
                    .map(|day| (day.day().to_string(), day))
                    .collect();
                (Granularity::Day, days)
            }
            RevenuePeriod::ThreeMonths => (Granularity::Month, months(3)),
            RevenuePeriod::SixMonths => (Granularity::Month, months(6)),
            RevenuePeriod::Year => (Granularity::Month, months(12)),
        }
    }
}

impl FromStr for RevenuePeriod {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(RevenuePeriod::Week),
            "month" => Ok(RevenuePeriod::Month),
            "3months" => Ok(RevenuePeriod::ThreeMonths),
            "6months" => Ok(RevenuePeriod::SixMonths),
            "year" => Ok(RevenuePeriod::Year),
            other => Err(AdminError::ValidationError(format!(
                "Unknown revenue period: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub label: String,
    pub bucket: Bucket,
    pub revenue: Decimal,
    pub bookings: usize,
}

/// Completed-booking revenue per period with growth over the last two points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSeries {
    pub period: RevenuePeriod,
    pub points: Vec<RevenuePoint>,
    pub revenue_growth: Decimal,
    pub bookings_growth: Decimal,
}

impl RevenueSeries {
    /// Bookings without a creation date or outside the window are skipped
    pub fn build(bookings: &[BookingModel], period: RevenuePeriod, today: NaiveDate) -> Self {
        let (granularity, buckets) = period.buckets(today);
        let mut points: Vec<RevenuePoint> = buckets
            .into_iter()
            .map(|(label, start)| RevenuePoint {
                label,
                bucket: granularity.bucket(start),
                revenue: Decimal::ZERO,
                bookings: 0,
            })
            .collect();

        let completed = bookings
            .iter()
            .filter(|booking| booking.phase() == Some(BookingPhase::Completed));
        for booking in completed {
            let Some(created_at) = booking.created_at else {
                continue;
            };
            let bucket = granularity.bucket(created_at.date_naive());
            if let Some(point) = points.iter_mut().find(|point| point.bucket == bucket) {
                point.revenue += booking.revenue();
                point.bookings += 1;
            }
        }

        RevenueSeries {
            period,
            revenue_growth: last_two_growth(&points, |point| point.revenue),
            bookings_growth: last_two_growth(&points, |point| Decimal::from(point.bookings)),
            points,
        }
    }
}

/// Window of the registrations chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationPeriod {
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "12months")]
    TwelveMonths,
    /// January to December of the current year
    #[serde(rename = "currentYear")]
    CurrentYear,
    /// One point per year from the earliest registration
    #[serde(rename = "allTime")]
    AllTime,
}

impl FromStr for RegistrationPeriod {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "6months" => Ok(RegistrationPeriod::SixMonths),
            "12months" => Ok(RegistrationPeriod::TwelveMonths),
            "currentYear" => Ok(RegistrationPeriod::CurrentYear),
            "allTime" => Ok(RegistrationPeriod::AllTime),
            other => Err(AdminError::ValidationError(format!(
                "Unknown registration period: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPoint {
    pub label: String,
    pub bucket: Bucket,
    pub drivers: usize,
    pub clients: usize,
    pub total: usize,
}

/// Driver and client sign-ups per period with growth over the last two points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationSeries {
    pub period: RegistrationPeriod,
    pub points: Vec<RegistrationPoint>,
    pub drivers_growth: Decimal,
    pub clients_growth: Decimal,
    pub total_growth: Decimal,
}

impl RegistrationSeries {
    /// Clients are the users that count as riders
    pub fn build(
        drivers: &[DriverModel],
        users: &[UserModel],
        period: RegistrationPeriod,
        today: NaiveDate,
    ) -> Self {
        let driver_dates: Vec<NaiveDate> = drivers
            .iter()
            .filter_map(|driver| driver.user.created_at)
            .map(|created_at| created_at.date_naive())
            .collect();
        let client_dates: Vec<NaiveDate> = users
            .iter()
            .filter(|user| user.is_rider())
            .filter_map(|user| user.created_at)
            .map(|created_at| created_at.date_naive())
            .collect();

        let month_label = |start: NaiveDate| (start.format("%b %y").to_string(), start);
        let (granularity, buckets): (Granularity, Vec<(String, NaiveDate)>) = match period {
            RegistrationPeriod::SixMonths => (
                Granularity::Month,
                trailing_months(today, 6).into_iter().map(month_label).collect(),
            ),
            RegistrationPeriod::TwelveMonths => (
                Granularity::Month,
                trailing_months(today, 12).into_iter().map(month_label).collect(),
            ),
            RegistrationPeriod::CurrentYear => (
                Granularity::Month,
                (1..=12)
                    .filter_map(|month| NaiveDate::from_ymd_opt(today.year(), month, 1))
                    .map(month_label)
                    .collect(),
            ),
            RegistrationPeriod::AllTime => {
                let first_year = driver_dates
                    .iter()
                    .chain(&client_dates)
                    .map(|date| date.year())
                    .min()
                    .unwrap_or(today.year() - 2)
                    .min(today.year());
                (
                    Granularity::Year,
                    (first_year..=today.year())
                        .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
                        .map(|start| (start.year().to_string(), start))
                        .collect(),
                )
            }
        };

        let mut points: Vec<RegistrationPoint> = buckets
            .into_iter()
            .map(|(label, start)| RegistrationPoint {
                label,
                bucket: granularity.bucket(start),
                drivers: 0,
                clients: 0,
                total: 0,
            })
            .collect();

        for date in &driver_dates {
            let bucket = granularity.bucket(*date);
            if let Some(point) = points.iter_mut().find(|point| point.bucket == bucket) {
                point.drivers += 1;
                point.total += 1;
            }
        }
        for date in &client_dates {
            let bucket = granularity.bucket(*date);
            if let Some(point) = points.iter_mut().find(|point| point.bucket == bucket) {
                point.clients += 1;
                point.total += 1;
            }
        }

        RegistrationSeries {
            period,
            drivers_growth: last_two_growth(&points, |point| Decimal::from(point.drivers)),
            clients_growth: last_two_growth(&points, |point| Decimal::from(point.clients)),
            total_growth: last_two_growth(&points, |point| Decimal::from(point.total)),
            points,
        }
    }
}
