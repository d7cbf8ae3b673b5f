//! Dashboard and theme record codec.
//!
//! # Responsibility
//! - Read and write the two fixed records as JSON documents.
//! - Substitute defaults when a record is absent or unreadable.
//!
//! # Invariants
//! - The dashboard record and the theme record are independent; a corrupt
//!   one never affects loading of the other.
//! - A malformed dashboard record loads as defaults in full.

use crate::model::dashboard::{DashboardState, Theme};
use crate::repo::kv_repo::{KeyValueStore, RepoError, RepoResult};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Record key holding the serialized `DashboardState`.
pub const DASHBOARD_KEY: &str = "planex-dashboard-v2";
/// Record key holding the serialized `Theme`.
pub const THEME_KEY: &str = "planex-theme";

/// Reads the dashboard record without fallback.
///
/// Returns `Ok(None)` when the record is absent.
pub fn read_dashboard<S: KeyValueStore + ?Sized>(
    store: &S,
) -> RepoResult<Option<DashboardState>> {
    read_record(store, DASHBOARD_KEY)
}

/// Writes the full dashboard record.
pub fn write_dashboard<S: KeyValueStore + ?Sized>(
    store: &S,
    state: &DashboardState,
) -> RepoResult<()> {
    write_record(store, DASHBOARD_KEY, state)
}

/// Loads the dashboard record, falling back to defaults.
pub fn load_dashboard<S: KeyValueStore + ?Sized>(store: &S) -> DashboardState {
    load_or_default(store, DASHBOARD_KEY)
}

/// Reads the theme record without fallback.
pub fn read_theme<S: KeyValueStore + ?Sized>(store: &S) -> RepoResult<Option<Theme>> {
    read_record(store, THEME_KEY)
}

/// Writes the theme record; the dashboard record is untouched.
pub fn write_theme<S: KeyValueStore + ?Sized>(store: &S, theme: Theme) -> RepoResult<()> {
    write_record(store, THEME_KEY, &theme)
}

/// Loads the theme record, falling back to `Theme::Dark`.
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    load_or_default(store, THEME_KEY)
}

fn read_record<S, T>(store: &S, key: &'static str) -> RepoResult<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| RepoError::Decode { key, source })
}

fn write_record<S, T>(store: &S, key: &'static str, value: &T) -> RepoResult<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let encoded =
        serde_json::to_string(value).map_err(|source| RepoError::Encode { key, source })?;
    store.put(key, &encoded)
}

fn load_or_default<S, T>(store: &S, key: &'static str) -> T
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned + Default,
{
    match read_record(store, key) {
        Ok(Some(value)) => {
            info!("event=record_load module=repo status=ok key={key}");
            value
        }
        Ok(None) => {
            info!("event=record_load module=repo status=ok key={key} source=defaults reason=absent");
            T::default()
        }
        Err(err) => {
            warn!(
                "event=record_load module=repo status=error key={key} source=defaults error={err}"
            );
            T::default()
        }
    }
}
