use std::collections::HashMap;

use crate::repository::{Repository, Route, Trip};

/// Cleanup rules for the destination labels shown to riders.
///
/// - a headsign that is missing or starts with the placeholder prefix is
///   replaced by the name of the trip's last stop;
/// - a headsign that is still missing becomes the fallback label;
/// - the replacement table then rewrites known bad labels per line.
#[derive(Debug, Clone)]
pub struct HeadsignCorrections {
    placeholder_prefix: String,
    fallback: String,
    // route short name -> raw headsign -> replacement
    replacements: HashMap<String, HashMap<String, String>>,
}

impl Default for HeadsignCorrections {
    fn default() -> Self {
        Self::new().with_replacement("1", "Mairie", "Mairie de Quévert")
    }
}

impl HeadsignCorrections {
    /// The placeholder heuristic and fallback only, no replacements.
    pub fn new() -> Self {
        Self {
            placeholder_prefix: "Direction".into(),
            fallback: "Unknown".into(),
            replacements: HashMap::new(),
        }
    }

    pub fn with_placeholder_prefix(mut self, prefix: &str) -> Self {
        self.placeholder_prefix = prefix.into();
        self
    }

    pub fn with_fallback(mut self, fallback: &str) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn with_replacement(mut self, route_short_name: &str, headsign: &str, replacement: &str) -> Self {
        self.replacements
            .entry(route_short_name.into())
            .or_default()
            .insert(headsign.into(), replacement.into());
        self
    }

    pub fn is_placeholder(&self, headsign: Option<&str>) -> bool {
        match headsign {
            Some(headsign) => headsign.starts_with(&self.placeholder_prefix),
            None => true,
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn replacement(&self, route_short_name: &str, headsign: &str) -> Option<&str> {
        self.replacements
            .get(route_short_name)?
            .get(headsign)
            .map(String::as_str)
    }
}

impl Repository {
    /// The destination label riders should see for `trip` on `route`.
    pub fn resolve_headsign(
        &self,
        trip: &Trip,
        route: &Route,
        corrections: &HeadsignCorrections,
    ) -> String {
        let raw = trip.headsign.as_deref();
        let headsign = if corrections.is_placeholder(raw) {
            self.terminus_by_trip_id(&trip.id)
                .map(|stop| stop.name.as_ref())
                .or(raw)
        } else {
            raw
        }
        .unwrap_or(corrections.fallback());

        corrections
            .replacement(&route.short_name, headsign)
            .unwrap_or(headsign)
            .to_string()
    }
}
