mod settings;

pub use settings::{Config, ConfigError, TomlConfig, TomlDialogConfig, TomlSchemaConfig, EXAMPLE_CONFIG};
