//! # Service Layer
//!
//! Application services wiring the domain to the outbound ports.

mod delivery;
mod inbox;
mod probe;

pub use delivery::DeliveryClient;
pub use inbox::InboxService;
pub use probe::ContractAddressProbe;
