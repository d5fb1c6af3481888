pub mod api;
pub mod domain;
pub mod infra;

pub use domain::service::{Service, ServiceConfig};
