pub mod adapters;
mod dispatch;
mod vendor;

pub use dispatch::DispatchService;
pub use vendor::VendorKind;
