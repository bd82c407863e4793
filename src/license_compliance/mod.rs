//! Domain core: dependency and application catalogs, license resolution,
//! normalization, categorization and aggregation.
//!
//! Nothing in here performs I/O.
pub mod catalog;
pub mod domain;
pub mod policies;
pub mod services;
