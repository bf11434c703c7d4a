use crate::models::category::HourBucket;
use crate::models::employee::STANDARD_DAY_HOURS;
use crate::models::{Assignment, DailyUtilizationSample, TimelineUtilization, TimelineWindow};
use crate::utils::calendar::{HolidayCalendar, is_weekend};
use crate::utils::date::days_inclusive;
use chrono::NaiveDate;

/// Walk `window` day by day and compute utilization for one employee's
/// assignments. Non-working days are emitted with zeroed metrics and are
/// left out of the window totals.
pub fn calculate_timeline_utilization(
    assignments: &[Assignment],
    window: &TimelineWindow,
    calendar: &HolidayCalendar,
) -> TimelineUtilization {
    let mut chargeable_hours = 0.0;
    let mut absence_hours = 0.0;
    let mut working_days = 0u32;
    let mut daily = Vec::with_capacity(window.days().max(0) as usize);

    for date in days_inclusive(window.start, window.end) {
        let weekend = is_weekend(date);
        let holiday = calendar.is_public_holiday(date);
        let working = !weekend && !holiday;

        let (day_chargeable, day_absence, day_other) = hours_on(assignments, date);

        let (net, rate, capacity) = if working {
            working_days += 1;
            chargeable_hours += day_chargeable;
            absence_hours += day_absence;

            let net = (STANDARD_DAY_HOURS - day_absence).max(0.0);
            (
                net,
                utilization_rate(day_chargeable, net),
                (net - day_chargeable).max(0.0),
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        daily.push(DailyUtilizationSample {
            date,
            chargeable_hours: day_chargeable,
            absence_hours: day_absence,
            other_hours: day_other,
            net_available_hours: net,
            utilization_rate: rate,
            available_capacity_hours: capacity,
            is_working_day: working,
            is_weekend: weekend,
            is_public_holiday: holiday,
        });
    }

    let net_available_hours = (working_days as f64 * STANDARD_DAY_HOURS - absence_hours).max(0.0);

    TimelineUtilization {
        working_days,
        chargeable_hours,
        absence_hours,
        net_available_hours,
        utilization_rate: utilization_rate(chargeable_hours, net_available_hours),
        available_capacity_hours: (net_available_hours - chargeable_hours).max(0.0),
        daily,
    }
}

/// Chargeable, absence/LOA and other hours booked on `date`.
fn hours_on(assignments: &[Assignment], date: NaiveDate) -> (f64, f64, f64) {
    assignments
        .iter()
        .filter(|a| a.contains(date))
        .fold((0.0, 0.0, 0.0), |(c, ab, o), a| match a.category.bucket() {
            HourBucket::Chargeable => (c + a.hours_per_day, ab, o),
            HourBucket::Absence => (c, ab + a.hours_per_day, o),
            HourBucket::Other => (c, ab, o + a.hours_per_day),
        })
}

/// `chargeable / net * 100`, or 0 when nothing is available or the
/// quotient is not finite.
pub fn utilization_rate(chargeable: f64, net_available: f64) -> f64 {
    if net_available <= 0.0 || !chargeable.is_finite() || !net_available.is_finite() {
        return 0.0;
    }

    let rate = chargeable / net_available * 100.0;
    if rate.is_finite() { rate } else { 0.0 }
}
