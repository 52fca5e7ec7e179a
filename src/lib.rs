pub mod config;
pub mod error;
pub mod json;
pub mod model;
pub mod output;
pub mod platform;
pub mod scanner;

pub use config::Config;
pub use error::ScanError;
pub use model::{ExtensionNode, Extensions, InstallKind, Platform, ProfileNode, Profiles, ScanReport};
pub use scanner::{FailurePolicy, Scanner};
