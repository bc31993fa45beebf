/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! RON based configuration support.
//! Configs are plain serde structs that are stored as RON files, either in a crate local `configs/` dir
//! or embedded as default assets (via `include_str!`). Config structs should provide serde defaults for
//! all fields that have a sensible default so that config files only need to specify what differs

use std::{fs, path::{Path,PathBuf}};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

pub type Result<T> = std::result::Result<T,ConfigError>;

#[derive(Error,Debug)]
pub enum ConfigError {

    #[error("config file not found {0:?}")]
    ConfigNotFound(PathBuf),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("RON parse error {0}")]
    RonError( #[from] ron::error::SpannedError),
}

/// the directory name we look for configs if no explicit path is given
pub const CONFIGS: &'static str = "configs";

/// parse a config from a RON string (e.g. from an embedded asset)
pub fn config_from_str<T> (s: &str) -> Result<T> where T: DeserializeOwned {
    Ok( ron::from_str(s)? )
}

/// load a config from a RON file
pub fn load_config<T> (path: impl AsRef<Path>) -> Result<T> where T: DeserializeOwned {
    let path = path.as_ref();
    if !path.is_file() {
        return Err( ConfigError::ConfigNotFound( path.to_path_buf()) )
    }

    debug!("loading config {:?}", path);
    let s = fs::read_to_string(path)?;
    config_from_str(&s)
}

/// find a config file by name. Explicit paths (containing a dir) are used verbatim, plain filenames are
/// looked up in `./configs/` and then in the current dir
pub fn find_config_file (filename: &str) -> Option<PathBuf> {
    let path = Path::new(filename);
    if path.parent().map(|p| !p.as_os_str().is_empty()).unwrap_or(false) {
        return if path.is_file() { Some(path.to_path_buf()) } else { None }
    }

    let in_configs = Path::new(CONFIGS).join(filename);
    if in_configs.is_file() {
        Some(in_configs)
    } else if path.is_file() {
        Some(path.to_path_buf())
    } else {
        None
    }
}

/// load the config if we find it, fall back to the provided default otherwise
pub fn load_config_or_default<T> (filename: &str, default: impl FnOnce()->T) -> Result<T> where T: DeserializeOwned {
    match find_config_file(filename) {
        Some(path) => load_config(&path),
        None => {
            debug!("no config file {}, using defaults", filename);
            Ok( default() )
        }
    }
}
