pub mod settings;

pub use settings::{Config, GreetingConfig, SumConfig, ENV_PREFIX};
