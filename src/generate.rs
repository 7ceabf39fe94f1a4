//! Dataset synthesis: the roster walk and per-record sampling.

use jiff::ToSpan;
use log::debug;
use rand::Rng;
use std::ops::RangeInclusive;

use crate::record::{ANCHOR_DATE, DEPARTMENTS, EMPLOYEES, PROJECTS, WorkHistoryRecord, employee_id};

// Sampling bounds, all inclusive.
const ASSIGNMENTS_PER_EMPLOYEE: RangeInclusive<usize> = 3..=5;
const START_OFFSET_DAYS: RangeInclusive<i64> = 0..=300;
const DURATION_DAYS: RangeInclusive<i64> = 30..=120;
const HOURS_WORKED: RangeInclusive<u32> = 40..=200;
const SICK_DAYS: RangeInclusive<u32> = 0..=8;
const VACATION_DAYS: RangeInclusive<u32> = 0..=15;

/// Produce the full dataset: every roster employee in order, each with an
/// independent draw of 3 to 5 assignments. Emission is employee-major, so
/// one employee's rows are contiguous in the output.
///
/// The random source is supplied by the caller; the binary passes an
/// OS-seeded `StdRng`, tests pass a deterministically seeded one.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Vec<WorkHistoryRecord> {
    let mut records = Vec::with_capacity(EMPLOYEES.len() * *ASSIGNMENTS_PER_EMPLOYEE.end());
    for (index, name) in EMPLOYEES.iter().copied().enumerate() {
        let id = employee_id(index);
        let assignments = rng.random_range(ASSIGNMENTS_PER_EMPLOYEE);
        debug!("{id} ({name}): {assignments} assignments");
        for _ in 0..assignments {
            records.push(sample_assignment(rng, &id, name));
        }
    }
    records
}

/// One assignment row. Every field after the identity pair is an independent
/// draw; in particular department has no relation to project.
fn sample_assignment<R: Rng + ?Sized>(
    rng: &mut R,
    id: &str,
    name: &'static str,
) -> WorkHistoryRecord {
    let start_date = ANCHOR_DATE.saturating_add(rng.random_range(START_OFFSET_DAYS).days());
    let end_date = start_date.saturating_add(rng.random_range(DURATION_DAYS).days());
    WorkHistoryRecord {
        employee_id: id.to_string(),
        employee_name: name,
        project_name: pick(rng, &PROJECTS),
        start_date,
        end_date,
        hours_worked: rng.random_range(HOURS_WORKED),
        sick_days: rng.random_range(SICK_DAYS),
        vacation_days: rng.random_range(VACATION_DAYS),
        department: pick(rng, &DEPARTMENTS),
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool[rng.random_range(0..pool.len())]
}
