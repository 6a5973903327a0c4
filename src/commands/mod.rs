//! CLI commands for metrograph

pub mod dispatch;

mod import;
mod info;
mod route;
mod tree;
mod visit;
