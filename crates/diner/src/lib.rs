//! # Diner Kiosk Library
//!
//! This library exposes the core modules of the kiosk for integration testing.

pub mod catalog;
pub mod clients;
pub mod config;
pub mod kiosk;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod render;
