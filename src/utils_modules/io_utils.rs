use crate::common::*;

#[doc = r#"
    Reads a toml file and deserializes it into `T`.

    # Arguments
    * `file_path` - path of the toml file

    # Errors
    - the file does not exist or cannot be read
    - the content is not valid toml or does not match `T`
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = "Creates the parent directory of `output_path` when it does not exist yet."]
pub fn ensure_parent_dir(output_path: &Path) -> Result<(), anyhow::Error> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!(
                    "[ensure_parent_dir] Failed to create directory {:?}",
                    parent
                )
            })?;
        }
    }

    Ok(())
}
