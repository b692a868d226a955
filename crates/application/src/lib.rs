pub mod ports;
pub mod use_cases;

pub use ports::Upstream;
pub use use_cases::ForwardQuery;
