mod app_context;
mod config_warnings;

pub use app_context::{AppContext, describe_notice, describe_validation};
pub use config_warnings::warn_unconfigured;
