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

use thiserror::Error;
use parcours_common::config::ConfigError;
use parcours_geo::ParcoursGeoError;
use parcours_airports::AirportError;

pub type Result<T> = std::result::Result<T,ParcoursGenError>;

#[derive(Error,Debug)]
pub enum ParcoursGenError {

    #[error("unknown pattern {0}")]
    UnknownPattern(String),

    #[error("no turn direction configured for runway {runway} at {airport}")]
    NoTurnDirection { airport: String, runway: String },

    #[error("airport error {0}")]
    AirportError( #[from] AirportError),

    #[error("geo error {0}")]
    GeoError( #[from] ParcoursGeoError),

    #[error("config error {0}")]
    ConfigError( #[from] ConfigError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),
}
