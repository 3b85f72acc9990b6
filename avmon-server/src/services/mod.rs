pub mod inventory;
#[cfg(feature = "mock")]
mod mock_upstream;
mod upstream_service;

#[cfg(feature = "mock")]
pub use mock_upstream::*;
pub use upstream_service::*;
