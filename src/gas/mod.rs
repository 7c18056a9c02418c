//! 가스 물성 관련 모듈.

pub mod gas_catalog;

pub use gas_catalog::{lookup, GasBlend, GasCatalog, GasSpecies};
