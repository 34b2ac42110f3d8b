use std::{collections::HashSet, sync::Arc};

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::repository::Repository;

impl Repository {
    /// Service ids running on `on_date` (`YYYYMMDD`) whose flag for
    /// `weekday` is set.
    ///
    /// The weekday is taken as given and not checked against the date.
    pub fn active_services(&self, on_date: &str, weekday: Weekday) -> HashSet<Arc<str>> {
        let active: HashSet<Arc<str>> = self
            .calendars
            .iter()
            .filter(|calendar| calendar.is_active(on_date, weekday))
            .map(|calendar| calendar.service_id.clone())
            .collect();
        debug!(
            "{} active services on {on_date} ({weekday})",
            active.len()
        );
        active
    }

    pub fn active_services_on(&self, date: NaiveDate) -> HashSet<Arc<str>> {
        let on_date = date.format("%Y%m%d").to_string();
        self.active_services(&on_date, date.weekday())
    }
}
