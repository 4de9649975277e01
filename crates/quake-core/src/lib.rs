//! Seismic intensity estimation for county earthquake bulletins.
//!
//! Given an earthquake event and an ordered list of reference sites (town and
//! county government offices), this crate computes the great-circle distance
//! and estimated intensity at each site and assembles the field set a
//! bulletin document is filled from.
//!
//! # Components
//!
//! - [`geo::distance_km`] - Haversine distance on a 6371 km sphere.
//! - [`intensity::intensity_degree`] - Attenuation model, rounded and clamped to `[0, 12]`.
//! - [`assemble`] - Report fields, formatted timestamps and the analysis paragraph.
//! - [`flash`] - Field extraction from pasted bulletin text and quick assessments.
//!
//! All of these are pure functions: no clock, no IO, no shared state.
//!
//! # Example
//!
//! ```rust
//! use quake_core::{assemble, ReferencePoint, ReportSettings, SeismicEvent};
//!
//! let event = SeismicEvent::new(6.0, "2025-03-31 23:54:19", 103.9668967771, 28.5956549725)
//!     .with_location("云南昭通市绥江县");
//! let points = vec![ReferencePoint::new("绥江县政府", 103.9668967771, 28.5956549725)];
//!
//! let report = assemble(&event, &points, &ReportSettings::default()).unwrap();
//! assert_eq!(report.primary_distance_km, 0);
//! assert_eq!(report.primary_intensity, 8);
//! ```

mod error;
pub mod event;
pub mod flash;
pub mod geo;
pub mod intensity;
pub mod reference;
pub mod report;
pub mod settings;

pub use error::{ConfigError, FlashError, ReportError};
pub use event::{event_id_for, EventRecord, FieldValue, SeismicEvent};
pub use flash::{build_assessment, parse_flash_text, FlashFields};
pub use geo::distance_km;
pub use intensity::intensity_degree;
pub use reference::{load_reference_points, parse_reference_points, ReferencePoint};
pub use report::{analysis_text, assemble, assemble_record, ReportRecord, SiteEstimate};
pub use settings::{ReportSettings, ServiceCentre};
