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

//! generator configuration. All fields have defaults so that config files only need to contain
//! the values that differ

use std::collections::BTreeMap;
use serde::{Serialize,Deserialize};

use parcours_geo::Location;

/// how courses are set up for a specific airport
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct AirportSetup {
    pub airport: String,

    /// turn angle in degrees for each runway (positive is a right turn)
    #[serde(default)]
    pub runway_turns: BTreeMap<String,f64>,

    /// initial course tolerance in feet
    pub tol: f64,

    /// patterns that are not generated for this airport by `challenges()`
    #[serde(default)]
    pub skip_patterns: Vec<String>,
}

/// the destination leg of a flyover course
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub enum FlyoverLeg {
    Points { start: Location, end: Location },

    /// along a runway of another airport, `alt_offset` feet above the thresholds
    Runway { airport: String, runway: String, #[serde(default)] alt_offset: f64 },
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct FlyoverTarget {
    pub leg: FlyoverLeg,
    pub tol: f64,

    /// turn after takeoff before heading to the leg start
    #[serde(default)]
    pub turn: f64,
}

/// a single (airport,runway,pattern) course in the challenge set
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct CourseSpec {
    pub airport: String,
    pub runway: String,
    pub pattern: String,
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// approximate length of generated path segments in feet
    pub segment_length: f64,

    /// takeoff roll distance
    pub ground_run: f64,

    /// how far behind the runway threshold courses start
    pub lineup_offset: f64,

    /// additional tolerance in the climb out and final approach legs
    pub extra_tol: f64,

    /// height of traffic circuits above the runway
    pub circuit_alt: f64,

    /// tolerance for airports without setup
    pub default_tol: f64,

    pub airports: Vec<AirportSetup>,
    pub flyovers: BTreeMap<String,FlyoverTarget>,

    /// airports for which all runways get the standard patterns
    pub challenge_airports: Vec<String>,

    /// additional courses of the challenge set
    pub challenge_courses: Vec<CourseSpec>,

    pub output_dir: String,
}

impl GenConfig {
    pub fn airport_setup (&self, airport: &str) -> Option<&AirportSetup> {
        self.airports.iter().find(|a| a.airport == airport)
    }

    pub fn flyover (&self, name: &str) -> Option<&FlyoverTarget> {
        self.flyovers.get(name)
    }
}

fn setup (airport: &str, turns: &[(&str,f64)], tol: f64, skip_patterns: &[&str]) -> AirportSetup {
    AirportSetup {
        airport: airport.to_string(),
        runway_turns: turns.iter().map(|(rw,t)| (rw.to_string(), *t)).collect(),
        tol,
        skip_patterns: skip_patterns.iter().map(|p| p.to_string()).collect()
    }
}

fn course (airport: &str, runway: &str, pattern: &str) -> CourseSpec {
    CourseSpec { airport: airport.to_string(), runway: runway.to_string(), pattern: pattern.to_string() }
}

impl Default for GenConfig {
    fn default () -> Self {
        let mut flyovers = BTreeMap::new();
        flyovers.insert( "mountain".to_string(), FlyoverTarget {
            leg: FlyoverLeg::Points { start: Location::new( 47.2870, 11.3050, 5600.0), end: Location::new( 47.2895, 11.2950, 5600.0) },
            tol: 250.0,
            turn: 45.0
        });
        flyovers.insert( "river".to_string(), FlyoverTarget {
            leg: FlyoverLeg::Points { start: Location::new( 47.26495, 11.3114, 1930.0), end: Location::new( 47.26445, 11.3064, 1930.0) },
            tol: 100.0,
            turn: 15.0
        });
        flyovers.insert( "crosscountry".to_string(), FlyoverTarget {
            leg: FlyoverLeg::Runway { airport: "LOIJ".to_string(), runway: "13".to_string(), alt_offset: 200.0 },
            tol: 250.0,
            turn: -5.0
        });

        GenConfig {
            segment_length: 200.0,
            ground_run: 1900.0,
            lineup_offset: 120.0,
            extra_tol: 500.0,
            circuit_alt: 1000.0,
            default_tol: 100.0,
            airports: vec![
                setup( "LOWI", &[("08", 90.0), ("26", -90.0)], 80.0, &[]),
                setup( "LOIJ", &[("13", 90.0), ("31", -90.0)], 50.0, &["impossible"]),
            ],
            flyovers,
            challenge_airports: vec![ "LOWI".to_string(), "LOIJ".to_string() ],
            challenge_courses: vec![
                course( "LOWI", "26", "mountain"),
                course( "LOWI", "26", "river"),
                course( "LOWI", "08", "crosscountry"),
            ],
            output_dir: "parcours".to_string(),
        }
    }
}
