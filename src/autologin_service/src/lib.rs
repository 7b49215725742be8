pub mod autologin_service;
pub mod tracing;

pub use autologin_service::AutologinService;
