use std::collections::{HashMap, HashSet};

use chrono::{Local, NaiveDateTime, Timelike};
use serde::Serialize;
use tracing::debug;

use crate::{
    repository::{HeadsignCorrections, Repository},
    shared::Time,
};

pub const DEFAULT_LIMIT_PER_ROUTE: usize = 2;
/// Departures up to this many minutes in the past are still listed.
pub const GRACE_MINUTES: i32 = 2;
const MINUTES_PER_DAY: i32 = 24 * 60;

/// One upcoming departure from a stop group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Departure {
    pub route_id: String,
    pub route_short_name: String,
    pub route_long_name: String,
    /// Raw feed color without `#`, empty when the feed has none.
    pub route_color: String,
    pub headsign: String,
    /// `HH:MM`
    pub arrival_time: String,
    /// `HH:MM`
    pub departure_time: String,
    /// Zero or negative means leaving now or just left.
    pub minutes_until: i32,
}

/// Query builder for the next departures from a stop and the stops sharing
/// its name.
pub struct Departures<'a> {
    repository: &'a Repository,
    stop_id: &'a str,
    limit_per_route: usize,
    now: NaiveDateTime,
    corrections: Option<&'a HeadsignCorrections>,
}

impl<'a> Departures<'a> {
    pub fn new(repository: &'a Repository, stop_id: &'a str) -> Self {
        Self {
            repository,
            stop_id,
            limit_per_route: DEFAULT_LIMIT_PER_ROUTE,
            now: Local::now().naive_local(),
            corrections: None,
        }
    }

    /// Maximum departures kept per (line, headsign) pair.
    pub fn limit_per_route(mut self, limit: usize) -> Self {
        self.limit_per_route = limit;
        self
    }

    pub fn at(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    pub fn with_corrections(mut self, corrections: &'a HeadsignCorrections) -> Self {
        self.corrections = Some(corrections);
        self
    }

    pub fn solve(self) -> Vec<Departure> {
        let default_corrections;
        let corrections = match self.corrections {
            Some(corrections) => corrections,
            None => {
                default_corrections = HeadsignCorrections::default();
                &default_corrections
            }
        };
        let repository = self.repository;

        let siblings = repository.sibling_stop_ids(self.stop_id);
        if siblings.is_empty() {
            return Vec::new();
        }
        debug!("Grouping stops for {}: {:?}", self.stop_id, siblings);

        let active = repository.active_services_on(self.now.date());
        if active.is_empty() {
            return Vec::new();
        }

        let now_minutes = (self.now.hour() * 60 + self.now.minute()) as i32;

        // File order decides which duplicate survives, so merge the groups back
        let mut indexes: Vec<u32> = siblings
            .iter()
            .flat_map(|stop_id| repository.stop_time_indexes_by_stop_id(stop_id))
            .copied()
            .collect();
        indexes.sort_unstable();
        indexes.dedup();
        debug!("Found {} stop times for {}", indexes.len(), self.stop_id);

        let mut seen: HashSet<(String, String, String)> = HashSet::new();
        let mut departures: Vec<Departure> = Vec::new();
        for stop_time in indexes.iter().map(|i| &repository.stop_times[*i as usize]) {
            let Some(trip) = repository.trip_by_id(&stop_time.trip_id) else {
                continue;
            };
            if !active.contains(trip.service_id.as_ref()) {
                continue;
            }
            let Some(departure_time) = stop_time.departure_time else {
                continue;
            };
            let minutes_until = minutes_until(departure_time, now_minutes);
            if minutes_until < -GRACE_MINUTES {
                continue;
            }
            let Some(route) = repository.route_by_id(&trip.route_id) else {
                continue;
            };

            let headsign = repository.resolve_headsign(trip, route, corrections);
            let departure_time = departure_time.to_hm_string();
            let key = (
                route.short_name.to_string(),
                headsign.clone(),
                departure_time.clone(),
            );
            if !seen.insert(key) {
                continue;
            }

            departures.push(Departure {
                route_id: route.id.to_string(),
                route_short_name: route.short_name.to_string(),
                route_long_name: route.long_name.to_string(),
                route_color: route.color.as_deref().unwrap_or_default().to_string(),
                headsign,
                arrival_time: stop_time
                    .arrival_time
                    .map(|time| time.to_hm_string())
                    .unwrap_or_default(),
                departure_time,
                minutes_until,
            });
        }

        departures.sort_by_key(|departure| departure.minutes_until);
        cap_per_group(departures, self.limit_per_route)
    }
}

/// Minutes from `now_minutes` to `departure`, seconds truncated.
///
/// Hours of 24 and above get another full day added on top. This is an
/// approximation: a service that started yesterday and still runs after
/// midnight is not matched against yesterday's calendar.
pub fn minutes_until(departure: Time, now_minutes: i32) -> i32 {
    let mut minutes = departure.as_minutes() as i32 - now_minutes;
    if departure.hours() >= 24 {
        minutes += MINUTES_PER_DAY;
    }
    minutes
}

/// Keeps the first `limit` departures of every (line, headsign) group,
/// then orders the survivors by time. Groups are laid out in order of first
/// appearance before the stable sort, so equal times keep that order.
fn cap_per_group(departures: Vec<Departure>, limit: usize) -> Vec<Departure> {
    let mut group_lookup: HashMap<(String, String), usize> = HashMap::new();
    let mut groups: Vec<Vec<Departure>> = Vec::new();
    for departure in departures {
        let key = (
            departure.route_short_name.clone(),
            departure.headsign.clone(),
        );
        let index = *group_lookup.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        if groups[index].len() < limit {
            groups[index].push(departure);
        }
    }
    let mut result: Vec<Departure> = groups.into_iter().flatten().collect();
    result.sort_by_key(|departure| departure.minutes_until);
    result
}

impl Repository {
    pub fn departures<'a>(&'a self, stop_id: &'a str) -> Departures<'a> {
        Departures::new(self, stop_id)
    }

    /// Shorthand for [`Repository::departures`] with the default corrections.
    pub fn next_departures(
        &self,
        stop_id: &str,
        limit_per_route: usize,
        now: NaiveDateTime,
    ) -> Vec<Departure> {
        self.departures(stop_id)
            .limit_per_route(limit_per_route)
            .at(now)
            .solve()
    }
}
