//! Configuration and request/response models shared across the service

pub mod config;
pub mod models;
