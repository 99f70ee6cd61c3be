pub mod alert;
pub mod display;
pub mod macros;
pub mod types;

pub use alert::{Alert, AlertKind};
pub use types::Message;
