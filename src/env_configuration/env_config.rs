use crate::common::*;

const DEFAULT_SERVER_CONFIG_PATH: &str = "./config/server_config.toml";

#[doc = r#"
    Reads an environment variable, falling back to `default` when it is unset.

    # Arguments
    * `key` - environment variable name
    * `default` - value used when the variable is missing

    # Returns
    * `String` - the resolved value
"#]
fn get_env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => {
            info!("[env_config] '{}' is not set, using '{}'", key, default);
            default.to_string()
        }
    }
}

#[doc = r#"
    Path of the server config toml (database, sources table, chart outputs).

    Taken from `SERVER_CONFIG_PATH` when present, otherwise the config shipped
    under `./config`. Resolved on first access.
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> = once_lazy::new(|| {
    get_env_or_default("SERVER_CONFIG_PATH", DEFAULT_SERVER_CONFIG_PATH)
});
