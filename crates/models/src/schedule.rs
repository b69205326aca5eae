use chrono::NaiveDateTime;
use serde::Serialize;
use std::{collections::HashMap, hash::Hash};

/// Where a show sits relative to the sampled current instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowTiming {
    Past,
    Upcoming,
}

/// A show is upcoming only while its start lies strictly after `now`;
/// a show starting exactly at `now` has begun and counts as past.
pub fn classify(start_time: NaiveDateTime, now: NaiveDateTime) -> ShowTiming {
    if start_time > now {
        ShowTiming::Upcoming
    } else {
        ShowTiming::Past
    }
}

/// Shows split into past and upcoming buckets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Partition<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}

impl<T> Partition<T> {
    /// Splits `items` in one pass against a single `now`
    pub fn split<I, F>(items: I, start_of: F, now: NaiveDateTime) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> NaiveDateTime,
    {
        let mut partition = Self::default();

        for item in items {
            match classify(start_of(&item), now) {
                ShowTiming::Past => partition.past.push(item),
                ShowTiming::Upcoming => partition.upcoming.push(item),
            }
        }

        partition
    }

    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    pub fn total(&self) -> usize {
        self.past.len() + self.upcoming.len()
    }

    /// Applies `f` to every element, keeping bucket membership and order.
    /// Stops at the first error.
    pub fn try_map<U, E, F>(self, mut f: F) -> Result<Partition<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        let past = self.past.into_iter().map(&mut f).collect::<Result<_, _>>()?;
        let upcoming = self
            .upcoming
            .into_iter()
            .map(&mut f)
            .collect::<Result<_, _>>()?;

        Ok(Partition { past, upcoming })
    }
}

/// Counts the start times that lie after `now`
pub fn count_upcoming<I>(start_times: I, now: NaiveDateTime) -> usize
where
    I: IntoIterator<Item = NaiveDateTime>,
{
    start_times
        .into_iter()
        .filter(|&start| classify(start, now) == ShowTiming::Upcoming)
        .count()
}

/// Upcoming show counts per owner key, from `(key, start_time)` pairs
pub fn upcoming_counts<K, I>(shows: I, now: NaiveDateTime) -> HashMap<K, usize>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, NaiveDateTime)>,
{
    let mut counts = HashMap::new();

    for (key, start) in shows {
        let count = counts.entry(key).or_insert(0);
        if classify(start, now) == ShowTiming::Upcoming {
            *count += 1;
        }
    }

    counts
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_classify_strictly_later_is_upcoming() {
        assert_eq!(
            classify(now() + Duration::seconds(1), now()),
            ShowTiming::Upcoming
        );
        assert_eq!(classify(now() - Duration::seconds(1), now()), ShowTiming::Past);
    }

    #[test]
    fn test_classify_boundary_instant_is_past() {
        assert_eq!(classify(now(), now()), ShowTiming::Past);
    }

    #[test]
    fn test_split_is_disjoint_and_exhaustive() {
        let starts: Vec<_> = (-3..=3).map(|d| now() + Duration::days(d)).collect();
        let partition = Partition::split(starts.clone(), |ts| *ts, now());

        assert_eq!(partition.past_count(), 4);
        assert_eq!(partition.upcoming_count(), 3);
        assert_eq!(partition.total(), starts.len());
        assert!(partition.past.iter().all(|ts| *ts <= now()));
        assert!(partition.upcoming.iter().all(|ts| *ts > now()));
    }

    #[test]
    fn test_split_keeps_input_order() {
        let starts = vec![
            now() + Duration::days(2),
            now() - Duration::days(1),
            now() + Duration::days(1),
        ];
        let partition = Partition::split(starts, |ts| *ts, now());

        assert_eq!(
            partition.upcoming,
            vec![now() + Duration::days(2), now() + Duration::days(1)]
        );
    }

    #[test]
    fn test_try_map_stops_on_error() {
        let starts = vec![now() - Duration::days(1), now() + Duration::days(1)];
        let partition = Partition::split(starts, |ts| *ts, now());

        let mapped: Result<Partition<i64>, &str> =
            partition.clone().try_map(|ts| Ok(ts.and_utc().timestamp()));
        assert_eq!(mapped.unwrap().total(), 2);

        let failed: Result<Partition<i64>, &str> = partition.try_map(|_| Err("dangling"));
        assert_eq!(failed.unwrap_err(), "dangling");
    }

    #[test]
    fn test_count_upcoming() {
        let starts = [now(), now() + Duration::hours(1), now() - Duration::hours(1)];
        assert_eq!(count_upcoming(starts, now()), 1);
        assert_eq!(count_upcoming(Vec::new(), now()), 0);
    }

    #[test]
    fn test_upcoming_counts_per_key() {
        let shows = vec![
            (1, now() + Duration::days(1)),
            (1, now() + Duration::days(2)),
            (1, now() - Duration::days(2)),
            (2, now() - Duration::days(1)),
        ];

        let counts = upcoming_counts(shows, now());

        assert_eq!(counts[&1], 2);
        assert_eq!(counts[&2], 0);
        assert!(!counts.contains_key(&3));
    }
}
