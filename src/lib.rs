//! Record-keeping API for real-estate sales and event bookings.
//!
//! Sales and bookings are stored as append-only documents. Booking totals are
//! derived server-side from tiered tariffs; summary endpoints aggregate the
//! stored collections on read.

pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod pricing;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod stats;
pub mod store;

use std::sync::Arc;

use crate::format::NumberLocale;
use crate::pricing::TariffPolicy;
use crate::store::DocumentStore;

pub use routes::router;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub tariff_policy: TariffPolicy,
    pub locale: NumberLocale,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, tariff_policy: TariffPolicy, locale: NumberLocale) -> Self {
        Self {
            store,
            tariff_policy,
            locale,
        }
    }
}
