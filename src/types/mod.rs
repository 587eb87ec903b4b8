pub mod config;
pub mod product;
pub mod report;
pub mod scoring;
