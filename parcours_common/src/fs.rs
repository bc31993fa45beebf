/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
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

use std::fs::{self,File};
use std::io::{self,Write};
use std::io::ErrorKind::*;
use std::path::{Path,PathBuf};

use crate::macros::io_error;

/// make sure `dir` exists (creating it and its parents if it doesn't) and is not read-only
pub fn ensure_writable_dir (dir: impl AsRef<Path>) -> io::Result<()> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return fs::create_dir_all(dir)
    }

    if fs::metadata(dir)?.permissions().readonly() {
        Err( io_error!(PermissionDenied, "directory {:?} not writable", dir))
    } else {
        Ok(())
    }
}

/// the sibling path of `path` with the extension replaced (e.g. "course.csv" -> "course.kml")
pub fn with_extension (path: impl AsRef<Path>, ext: &str) -> PathBuf {
    path.as_ref().with_extension(ext)
}

/// create or truncate the file at `path` and write `contents`
pub fn set_filepath_contents (path: impl AsRef<Path>, contents: &[u8]) -> io::Result<()>  {
    File::create(path)?.write_all(contents)
}
