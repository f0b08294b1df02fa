//! Lighthouse audit plus GreenIT eco-index, averaged into a single letter grade.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
