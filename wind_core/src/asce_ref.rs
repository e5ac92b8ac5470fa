//! # ASCE 7 Code References
//!
//! Traceable references to ASCE 7-22 (Minimum Design Loads and Associated
//! Criteria for Buildings and Other Structures) attached to zones, triggers,
//! and notes so every number in a result can be audited.

/// Code edition label used in notes
pub const EDITION: &str = "ASCE 7-22";

// Velocity pressure
/// Velocity pressure exposure coefficient Kz
pub const KZ: &str = "ASCE 7-22 Table 26.10-1";
/// Terrain exposure constants (alpha, zg)
pub const TERRAIN_CONSTANTS: &str = "ASCE 7-22 Table 26.11-1";
/// Velocity pressure equation qz
pub const VELOCITY_PRESSURE: &str = "ASCE 7-22 Eq. 26.10-1";

// Enclosure
/// Enclosure classification definitions
pub const ENCLOSURE: &str = "ASCE 7-22 Section 26.12";
/// Internal pressure coefficients GCpi
pub const GCPI: &str = "ASCE 7-22 Table 26.13-1";
/// Windborne debris protection of glazed openings
pub const WINDBORNE_DEBRIS: &str = "ASCE 7-22 Section 26.12.3";

// External pressure
/// Component and cladding external pressure coefficients, low-rise roofs
pub const CC_GCP: &str = "ASCE 7-22 Figure 30.3-2A";
/// MWFRS low-rise external pressure coefficients
pub const MWFRS_GCP: &str = "ASCE 7-22 Figure 28.3-1";
/// Zone 1 prime requirements for elongated buildings
pub const ZONE1_PRIME: &str = "ASCE 7-22 Section 30.3, Figure 30.3-2A Note 5";

// Geometry
/// Low-rise building definition
pub const LOW_RISE: &str = "ASCE 7-22 Section 26.2";
/// Zone dimension "a"
pub const ZONE_DIMENSION: &str = "ASCE 7-22 Figure 30.3-2A Notes";
