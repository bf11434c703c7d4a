use crate::models::{Assignment, ConsolidatedJob, ConsolidatedPeriod};
use crate::utils::date::next_day;
use std::collections::HashMap;
use tracing::trace;

/// Group assignments by job name and merge each group's intervals into
/// the fewest contiguous periods.
///
/// Two periods merge when the later one starts no later than the day after
/// the open period ends and utilization, hours per day and status all match.
/// A weekend between two bookings is a real gap and keeps them apart.
pub fn consolidate_assignments(assignments: &[Assignment]) -> Vec<ConsolidatedJob> {
    let mut jobs: Vec<(ConsolidatedJob, Vec<ConsolidatedPeriod>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for a in assignments {
        let slot = *index.entry(a.job_name.as_str()).or_insert_with(|| {
            jobs.push((
                ConsolidatedJob {
                    job_name: a.job_name.clone(),
                    job_code: a.job_code.clone(),
                    category: a.category,
                    status: a.status.clone(),
                    has_provisional: false,
                    total_utilization: 0.0,
                    total_hours: 0.0,
                    periods: Vec::new(),
                },
                Vec::new(),
            ));
            jobs.len() - 1
        });

        let (job, raw) = &mut jobs[slot];
        job.total_utilization += a.utilization;
        job.total_hours += a.hours_per_day;
        job.has_provisional |= a.is_provisional();

        raw.push(ConsolidatedPeriod {
            start: a.start,
            end: a.end,
            hours_per_day: a.hours_per_day,
            utilization: a.utilization,
            status: a.status.clone(),
            category: a.category,
            has_provisional: a.is_provisional(),
        });
    }

    jobs.into_iter()
        .map(|(mut job, raw)| {
            job.periods = merge_periods(raw);
            job
        })
        .collect()
}

/// Sort by start and merge adjacent, metrically identical periods.
pub fn merge_periods(mut periods: Vec<ConsolidatedPeriod>) -> Vec<ConsolidatedPeriod> {
    periods.sort_by_key(|p| p.start);

    let mut merged: Vec<ConsolidatedPeriod> = Vec::with_capacity(periods.len());

    for period in periods {
        match merged.last_mut() {
            Some(open) if can_merge(open, &period) => {
                trace!(start = %period.start, end = %period.end, into = %open.start, "merging period");
                open.end = open.end.max(period.end);
                open.has_provisional |= period.has_provisional;
            }
            _ => merged.push(period),
        }
    }

    merged
}

fn can_merge(open: &ConsolidatedPeriod, next: &ConsolidatedPeriod) -> bool {
    next.start <= next_day(open.end)
        && open.utilization == next.utilization
        && open.hours_per_day == next.hours_per_day
        && open.status == next.status
}
