pub mod config;
pub mod content;
pub mod report;
pub mod scoring;
