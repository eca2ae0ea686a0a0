//! Initial selection from the URL query string.
//!
//! Reads `month`, `category` and `passport` so a shared link opens on the
//! same view. Nothing is written back.

use super::selection::{MapCategory, SelectionState};
use crate::data::Month;

/// Parsed URL parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlParams {
    pub month: Option<Month>,
    pub category: Option<MapCategory>,
    /// Raw passport identifier; any form the identifier index accepts.
    pub passport: Option<String>,
}

impl UrlParams {
    /// Parses a query string with or without the leading `?`.
    pub fn parse_query(query: &str) -> Self {
        let mut params = Self::default();
        let query = query.trim_start_matches('?');

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let mut kv = pair.splitn(2, '=');
            let key = kv.next().unwrap_or("");
            let value = kv.next().unwrap_or("").trim();
            match key {
                "month" => params.month = Month::from_name(value),
                "category" => params.category = MapCategory::from_param(value),
                "passport" if !value.is_empty() => params.passport = Some(value.to_string()),
                _ => {}
            }
        }

        params
    }

    /// Applies the parameters over a default selection.
    pub fn apply(self, selection: &mut SelectionState) {
        if let Some(month) = self.month {
            selection.month = month;
        }
        if let Some(category) = self.category {
            selection.category = category;
        }
        selection.pending_passport = self.passport;
    }
}

/// Parse URL query parameters from the current browser URL.
#[cfg(target_arch = "wasm32")]
pub fn parse_from_url() -> UrlParams {
    let Some(search) = web_sys::window().and_then(|w| w.location().search().ok()) else {
        return UrlParams::default();
    };
    UrlParams::parse_query(&search)
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn parse_from_url() -> UrlParams {
    UrlParams::default()
}
