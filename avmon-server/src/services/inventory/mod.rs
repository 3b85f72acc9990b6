//! Pure functions that turn a vendor inventory payload into dashboard figures.

pub mod alerts;
pub mod devices;
pub mod locations;
pub mod normalize;
pub mod stats;

pub use alerts::alerts;
pub use devices::device_entries;
pub use locations::locations;
pub use normalize::{room_values, rooms};
pub use stats::{device_stats, percentage, room_stats};
