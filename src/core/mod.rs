//! Core application module
//!
//! This module contains:
//! - Application entry point and Cosmic Application implementation
//! - Form state and validation behind the main window

pub mod app;
pub mod form;
