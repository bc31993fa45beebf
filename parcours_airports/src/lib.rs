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

//! table of airports with their runway thresholds, used to anchor generated courses.
//! The default table is an embedded RON asset (`assets/airports.ron`), alternative tables can be loaded
//! from RON files with the same format

use std::{collections::BTreeMap, path::Path as FsPath};
use serde::Deserialize;
use tracing::debug;

use parcours_common::config::{config_from_str, load_config};
use parcours_geo::Location;

pub mod errors;
pub use errors::{AirportError, Result};

const DEFAULT_AIRPORTS: &'static str = include_str!("../assets/airports.ron");

/// a runway threshold. `reverse` is the name of the runway at the opposite end
#[derive(Debug,Clone,PartialEq,Deserialize)]
pub struct Runway {
    pub name: String,
    pub reverse: String,
    pub location: Location,
}

/// the RON representation of an airport, with runways as a list
#[derive(Deserialize)]
struct AirportEntry {
    name: String,
    #[serde(default)]
    description: String,
    runways: Vec<Runway>,
}

#[derive(Debug,Clone,PartialEq,Deserialize)]
#[serde(from="AirportEntry")]
pub struct Airport {
    pub name: String,
    pub description: String,
    pub runways: BTreeMap<String,Runway>,
}

impl From<AirportEntry> for Airport {
    fn from (e: AirportEntry) -> Self {
        let runways = e.runways.into_iter().map(|rw| (rw.name.clone(), rw)).collect();
        Airport { name: e.name, description: e.description, runways }
    }
}

impl Airport {
    pub fn runway (&self, name: &str) -> Result<&Runway> {
        self.runways.get(name).ok_or_else(|| AirportError::UnknownRunway { airport: self.name.clone(), runway: name.to_string() })
    }

    /// the runway at the other end of runway `name`
    pub fn reciprocal (&self, name: &str) -> Result<&Runway> {
        let rw = self.runway(name)?;
        self.runway( &rw.reverse)
    }

    /// bearing from the threshold of runway `name` to the threshold of its reciprocal
    pub fn runway_heading (&self, name: &str) -> Result<f64> {
        Ok( self.runway(name)?.location.bearing( &self.reciprocal(name)?.location) )
    }

    /// distance in feet between both thresholds of runway `name`
    pub fn runway_length (&self, name: &str) -> Result<f64> {
        Ok( self.runway(name)?.location.distance( &self.reciprocal(name)?.location) )
    }
}

#[derive(Debug,Clone,PartialEq,Deserialize)]
#[serde(from="Vec<Airport>")]
pub struct AirportTable {
    airports: BTreeMap<String,Airport>,
}

impl From<Vec<Airport>> for AirportTable {
    fn from (list: Vec<Airport>) -> Self {
        let airports = list.into_iter().map(|a| (a.name.clone(), a)).collect();
        AirportTable { airports }
    }
}

impl AirportTable {
    /// the embedded airport table
    pub fn default_table () -> Result<Self> {
        Ok( config_from_str( DEFAULT_AIRPORTS)? )
    }

    /// load an airport table from a RON file
    pub fn load (path: impl AsRef<FsPath>) -> Result<Self> {
        let table: AirportTable = load_config( path.as_ref())?;
        debug!("loaded {} airports from {:?}", table.airports.len(), path.as_ref());
        Ok(table)
    }

    pub fn len (&self) -> usize { self.airports.len() }
    pub fn is_empty (&self) -> bool { self.airports.is_empty() }

    pub fn airports (&self) -> impl Iterator<Item=&Airport> { self.airports.values() }

    pub fn airport (&self, name: &str) -> Result<&Airport> {
        self.airports.get(name).ok_or_else(|| AirportError::UnknownAirport( name.to_string()))
    }

    pub fn runway (&self, airport: &str, runway: &str) -> Result<&Runway> {
        self.airport(airport)?.runway(runway)
    }

    pub fn runway_location (&self, airport: &str, runway: &str) -> Result<Location> {
        Ok( self.runway( airport, runway)?.location )
    }

    pub fn reciprocal (&self, airport: &str, runway: &str) -> Result<&Runway> {
        self.airport(airport)?.reciprocal(runway)
    }

    pub fn runway_heading (&self, airport: &str, runway: &str) -> Result<f64> {
        self.airport(airport)?.runway_heading(runway)
    }

    pub fn runway_length (&self, airport: &str, runway: &str) -> Result<f64> {
        self.airport(airport)?.runway_length(runway)
    }

    /// the (airport,runway) names of the runway threshold that is closest to `loc`. On ties the first
    /// runway in name order wins, `None` if the table has no runways
    pub fn closest_runway (&self, loc: &Location) -> Option<(String,String)> {
        let mut closest: Option<(&Airport,&Runway,f64)> = None;

        for airport in self.airports.values() {
            for runway in airport.runways.values() {
                let d = runway.location.distance(loc);
                if closest.map_or( true, |(_,_,d_min)| d < d_min) {
                    closest = Some((airport, runway, d));
                }
            }
        }

        closest.map(|(a,r,_)| (a.name.clone(), r.name.clone()))
    }
}
