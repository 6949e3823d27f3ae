use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::Path;

const ENV_PREFIX: &str = "APP";

/// Loads `Settings` from `configuration/base.yaml` under the working directory,
/// overridden by `APP_`-prefixed environment variables such as
/// `APP_APPLICATION__PORT`.
pub fn config<Settings: DeserializeOwned>() -> anyhow::Result<Settings> {
    let base_path = std::env::current_dir().context("Failed to determine the current directory")?;
    let configuration_directory = base_path.join("configuration");
    let file = if cfg!(test) { "test.yaml" } else { "base.yaml" };
    config_from(&configuration_directory.join(file))
}

pub fn config_from<Settings: DeserializeOwned>(file: &Path) -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::from(file))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .with_context(|| format!("Failed to build configuration from {}", file.display()))?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}
