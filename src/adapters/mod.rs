// Adapters layer: concrete implementations for external systems (catalog sources, storage, detectors, report output)

pub mod catalog;
pub mod detector;
pub mod report;
pub mod storage;
