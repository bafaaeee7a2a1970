//! Climate normals service.
//!
//! Read-only HTTP/JSON API over historical climate-station measurements.
//! The core is the date-range aggregation: a start date (or start/end
//! range) expands into the recorded calendar dates, each date maps to its
//! month-day signature, and every historical year sharing that signature
//! contributes to the day's min/avg/max temperature normal.

pub mod aggregate;
pub mod api;
pub mod calendar;
pub mod config;
pub mod logging;
pub mod model;
pub mod normals;
pub mod store;
