//! # Controllers Module
//!
//! The application controller that hosts the panel and drives its event
//! loop.

pub mod app_controller;

pub use app_controller::AppController;
