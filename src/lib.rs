// Sysview - Systemd Service Status Board
// Library root

pub mod config;
pub mod error;
pub mod systemd;
pub mod web;
