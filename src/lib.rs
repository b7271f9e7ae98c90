//! authlog - leveled logging facade with a bounded, exportable history
//!
//! This library provides the log store shared by the host application.

pub mod config;
pub mod logging;
