mod settings;

pub use settings::{
    ApiConfig, EmailConfig, LogConfig, LogFormat, OtelConfig, ServerConfig, Settings,
};
