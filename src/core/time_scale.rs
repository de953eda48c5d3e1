use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::LinearScale;
use crate::core::scale::{validate_range, widen_degenerate_domain};
use crate::core::ticks::{MAX_GENERATED_TICKS, NiceStep};
use crate::error::{AxisError, AxisResult};

/// Half-width (ms) added on each side of a single-instant time domain.
pub const DEGENERATE_TIME_PADDING_MS: f64 = 1_000.0;

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;
// 1970-01-05 is the first Monday after the epoch.
const FIRST_MONDAY_MS: i64 = 4 * DAY_MS;

/// Calendar unit of a time tick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Spacing between consecutive time ticks, e.g. "15 minutes" or "3 months".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    pub unit: TimeUnit,
    pub count: u32,
}

impl TimeInterval {
    #[must_use]
    pub const fn new(unit: TimeUnit, count: u32) -> Self {
        Self { unit, count }
    }

    /// Nominal length in milliseconds (30-day months, 365-day years).
    #[must_use]
    pub fn approx_millis(self) -> f64 {
        let unit_ms = match self.unit {
            TimeUnit::Millisecond => 1,
            TimeUnit::Second => SECOND_MS,
            TimeUnit::Minute => MINUTE_MS,
            TimeUnit::Hour => HOUR_MS,
            TimeUnit::Day => DAY_MS,
            TimeUnit::Week => WEEK_MS,
            TimeUnit::Month => 30 * DAY_MS,
            TimeUnit::Year => 365 * DAY_MS,
        };
        unit_ms as f64 * f64::from(self.count)
    }

    /// Tick instants (epoch ms) aligned to this interval inside `[lo, hi]`.
    ///
    /// Returns `None` once more than `limit` ticks would be produced.
    fn aligned_ticks(self, lo: f64, hi: f64, limit: usize) -> Option<Vec<i64>> {
        let lo_ms = lo.ceil() as i64;
        let hi_ms = hi.floor() as i64;
        let mut ticks = Vec::new();
        let mut push = |tick: i64| {
            ticks.push(tick);
            ticks.len() <= limit
        };

        match self.unit {
            TimeUnit::Year => {
                let step = i32::try_from(self.count.max(1)).ok()?;
                let start_year = year_of(lo_ms)?;
                let mut year = start_year.div_euclid(step) * step;
                if month_start_millis(year, 1).is_none() {
                    // Aligned below the earliest representable year.
                    year = year.checked_add(step)?;
                }
                while let Some(tick) = month_start_millis(year, 1) {
                    if tick > hi_ms {
                        break;
                    }
                    if tick >= lo_ms && !push(tick) {
                        return None;
                    }
                    year = year.checked_add(step)?;
                }
            }
            TimeUnit::Month => {
                let step = i32::try_from(self.count.max(1)).ok()?;
                let first = DateTime::<Utc>::from_timestamp_millis(lo_ms)?;
                let start_index = first.year() * 12 + first.month0() as i32;
                let mut index = start_index.div_euclid(step) * step;
                if month_index_start_millis(index).is_none() {
                    index = index.checked_add(step)?;
                }
                while let Some(tick) = month_index_start_millis(index) {
                    if tick > hi_ms {
                        break;
                    }
                    if tick >= lo_ms && !push(tick) {
                        return None;
                    }
                    index = index.checked_add(step)?;
                }
            }
            unit => {
                let step_ms = self.approx_millis() as i64;
                let origin = if unit == TimeUnit::Week {
                    FIRST_MONDAY_MS
                } else {
                    0
                };
                let mut tick = (lo_ms - origin).div_euclid(step_ms) * step_ms + origin;
                if tick < lo_ms {
                    tick += step_ms;
                }
                while tick <= hi_ms {
                    if !push(tick) {
                        return None;
                    }
                    tick = tick.checked_add(step_ms)?;
                }
            }
        }
        Some(ticks)
    }
}

/// Fixed candidate intervals, finest first. Years continue past this list
/// through the 1-2-5 sequence.
const CANDIDATE_INTERVALS: &[TimeInterval] = &[
    TimeInterval::new(TimeUnit::Millisecond, 1),
    TimeInterval::new(TimeUnit::Millisecond, 2),
    TimeInterval::new(TimeUnit::Millisecond, 5),
    TimeInterval::new(TimeUnit::Millisecond, 10),
    TimeInterval::new(TimeUnit::Millisecond, 20),
    TimeInterval::new(TimeUnit::Millisecond, 50),
    TimeInterval::new(TimeUnit::Millisecond, 100),
    TimeInterval::new(TimeUnit::Millisecond, 200),
    TimeInterval::new(TimeUnit::Millisecond, 500),
    TimeInterval::new(TimeUnit::Second, 1),
    TimeInterval::new(TimeUnit::Second, 5),
    TimeInterval::new(TimeUnit::Second, 15),
    TimeInterval::new(TimeUnit::Second, 30),
    TimeInterval::new(TimeUnit::Minute, 1),
    TimeInterval::new(TimeUnit::Minute, 5),
    TimeInterval::new(TimeUnit::Minute, 15),
    TimeInterval::new(TimeUnit::Minute, 30),
    TimeInterval::new(TimeUnit::Hour, 1),
    TimeInterval::new(TimeUnit::Hour, 3),
    TimeInterval::new(TimeUnit::Hour, 6),
    TimeInterval::new(TimeUnit::Hour, 12),
    TimeInterval::new(TimeUnit::Day, 1),
    TimeInterval::new(TimeUnit::Day, 2),
    TimeInterval::new(TimeUnit::Week, 1),
    TimeInterval::new(TimeUnit::Month, 1),
    TimeInterval::new(TimeUnit::Month, 3),
];

fn candidate_intervals() -> impl Iterator<Item = TimeInterval> {
    let years = std::iter::successors(Some(NiceStep::around(1.0)), |step| Some(step.next()))
        .map(|step| step.value())
        .take_while(|years| *years <= f64::from(u32::MAX))
        .map(|years| TimeInterval::new(TimeUnit::Year, years as u32));
    CANDIDATE_INTERVALS.iter().copied().chain(years)
}

/// Time domain (UTC instants) mapped linearly over elapsed milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    /// Creates a scale from epoch-millisecond endpoints.
    pub fn new(domain_ms: (f64, f64), range: (f64, f64)) -> AxisResult<Self> {
        let domain = widen_degenerate_domain(domain_ms, DEGENERATE_TIME_PADDING_MS)?;
        validate_range(range)?;
        for endpoint in [domain.0, domain.1] {
            if DateTime::<Utc>::from_timestamp_millis(endpoint as i64).is_none() {
                return Err(AxisError::invalid(format!(
                    "time domain endpoint {endpoint} ms is out of range"
                )));
            }
        }
        Ok(Self {
            linear: LinearScale::new(domain, range)?,
        })
    }

    /// Domain endpoints in epoch milliseconds.
    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn map_millis(self, epoch_ms: f64) -> f64 {
        self.linear.map(epoch_ms)
    }

    #[must_use]
    pub fn map(self, time: DateTime<Utc>) -> f64 {
        self.map_millis(time.timestamp_millis() as f64)
    }

    pub(crate) fn map_within_range(self, time: DateTime<Utc>) -> f64 {
        self.linear.map_within_range(time.timestamp_millis() as f64)
    }

    /// Calendar-aligned ticks ordered from domain start to domain end, at most
    /// `tick_count` of them, plus the interval used.
    pub fn ticks(self, tick_count: usize) -> AxisResult<(Vec<DateTime<Utc>>, Option<TimeInterval>)> {
        let (start, end) = self.domain();
        if tick_count == 0 {
            return Ok((Vec::new(), None));
        }
        if tick_count == 1 {
            return Ok((vec![instant(start as i64)?], None));
        }

        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        let limit = tick_count.min(MAX_GENERATED_TICKS);
        let target = (hi - lo) / limit as f64;

        let mut previous = None;
        for interval in candidate_intervals() {
            if interval.approx_millis() > target {
                break;
            }
            previous = Some(interval);
        }
        let first_candidate = previous.unwrap_or(CANDIDATE_INTERVALS[0]);

        for interval in candidate_intervals().skip_while(|candidate| *candidate != first_candidate)
        {
            let Some(millis) = interval.aligned_ticks(lo, hi, limit) else {
                trace!(?interval, limit, "widening time tick interval");
                continue;
            };
            let mut ticks = millis
                .into_iter()
                .map(instant)
                .collect::<AxisResult<Vec<_>>>()?;
            if start > end {
                ticks.reverse();
            }
            return Ok((ticks, Some(interval)));
        }

        Ok((Vec::new(), None))
    }
}

fn instant(epoch_ms: i64) -> AxisResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms)
        .ok_or_else(|| AxisError::invalid(format!("timestamp {epoch_ms} ms is out of range")))
}

fn year_of(epoch_ms: i64) -> Option<i32> {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms).map(|time| time.year())
}

/// Start of the month at `index = year * 12 + month0`.
fn month_index_start_millis(index: i32) -> Option<i64> {
    month_start_millis(index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

fn month_start_millis(year: i32, month: u32) -> Option<i64> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)
        .map(|time| time.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, TimeZone, Timelike, Utc, Weekday};

    use super::{TimeInterval, TimeScale, TimeUnit};

    fn millis(year: i32, month: u32, day: u32) -> f64 {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .expect("valid date")
            .timestamp_millis() as f64
    }

    #[test]
    fn month_ticks_land_on_first_of_month() {
        let scale =
            TimeScale::new((millis(2024, 1, 15), millis(2024, 12, 20)), (0.0, 600.0)).expect("scale");
        let (ticks, interval) = scale.ticks(6).expect("ticks");
        let interval = interval.expect("interval");
        assert!(matches!(interval.unit, TimeUnit::Month));
        assert!(ticks.len() <= 6);
        assert!(ticks.iter().all(|tick| tick.day() == 1 && tick.hour() == 0));
    }

    #[test]
    fn week_ticks_start_on_monday() {
        let scale =
            TimeScale::new((millis(2024, 3, 1), millis(2024, 4, 15)), (0.0, 600.0)).expect("scale");
        let (ticks, interval) = scale.ticks(7).expect("ticks");
        assert_eq!(interval.map(|interval| interval.unit), Some(TimeUnit::Week));
        assert!(ticks.iter().all(|tick| tick.weekday() == Weekday::Mon));
    }

    fn proleptic_millis(year: i32, month: u32) -> f64 {
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("representable date")
            .and_utc()
            .timestamp_millis() as f64
    }

    #[test]
    fn year_ticks_near_the_earliest_representable_year() {
        let scale = TimeScale::new(
            (proleptic_millis(-262_000, 6), proleptic_millis(-250_000, 1)),
            (0.0, 600.0),
        )
        .expect("scale");
        let (ticks, interval) = scale.ticks(5).expect("ticks");
        let interval = interval.expect("interval");
        assert_eq!(interval.unit, TimeUnit::Year);
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= 5);
        assert!(ticks.iter().all(|tick| tick.year() % interval.count as i32 == 0));
    }

    #[test]
    fn year_counts_beyond_i32_are_not_truncated() {
        let interval = TimeInterval::new(TimeUnit::Year, u32::MAX);
        assert!(interval.aligned_ticks(0.0, 1e12, 10).is_none());
    }

    #[test]
    fn decades_use_multi_year_steps() {
        let scale =
            TimeScale::new((millis(1900, 1, 1), millis(2020, 1, 1)), (0.0, 600.0)).expect("scale");
        let (ticks, interval) = scale.ticks(10).expect("ticks");
        let interval = interval.expect("interval");
        assert_eq!(interval.unit, TimeUnit::Year);
        assert!(interval.count >= 10);
        assert!(ticks.len() <= 10);
        assert!(ticks.iter().all(|tick| tick.year() % interval.count as i32 == 0));
    }
}
