pub mod device;
pub mod room;

pub use device::Device;
pub use room::{EntityId, Room};
