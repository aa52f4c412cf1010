//! HTTP handlers

pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod health;
pub mod profile;
pub mod properties;
pub mod receipts;
pub mod tenants;
pub mod uploads;
