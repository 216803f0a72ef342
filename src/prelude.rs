pub use std::{
    collections::BTreeMap,
    env, fmt, fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

pub use anyhow::{Context, anyhow};
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::Getters;
pub use log::{error, info, warn};
pub use serde::{Deserialize, de::DeserializeOwned};
pub use thiserror::Error;
