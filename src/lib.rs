pub mod api; // HTTP surface: router, endpoints, error mapping
pub mod auth; // Identity verification against the external authority
pub mod config;
pub mod models;
pub mod pipeline; // Extraction-normalization pipeline
pub mod store; // Owner-partitioned prescription persistence
