pub mod device;
pub mod located;
pub mod sweep;

pub use device::DevicePolarity;
pub use located::{LocatedValue, Location};
pub use sweep::Sweep;
