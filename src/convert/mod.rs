pub mod extract;
pub mod rip;

pub use extract::extract;
pub use rip::rip;
