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

//! generator for challenge courses ("parcours") that start with a takeoff roll on a runway.
//! Courses are sequences of legs (straight, climbing, turning) with growing or shrinking tolerances,
//! optionally followed by a flyover leg to a configured target

use std::{fmt, str::FromStr, path::{Path as FsPath, PathBuf}};
use tracing::info;

use parcours_common::fs::ensure_writable_dir;
use parcours_geo::{Location, Path};
use parcours_geo::csv_io::write_path_file;
use parcours_geo::kml::write_kml_file;
use parcours_airports::AirportTable;

pub mod errors;
pub use errors::{ParcoursGenError, Result};

pub mod config;
pub use config::{GenConfig, AirportSetup, FlyoverTarget, FlyoverLeg, CourseSpec};

pub mod course;
pub use course::CourseBuilder;

/* #region Pattern ************************************************************************************************/

#[derive(Debug,Clone,PartialEq,Eq)]
pub enum Pattern {
    /// takeoff roll along the runway
    Roll,
    /// roll and climb out
    Takeoff,
    /// takeoff, crosswind and downwind legs, ending abeam the runway start
    Partial,
    /// complete traffic circuit back to the runway
    Circuit,
    /// takeoff followed by turns that can't be flown within the tolerance
    Impossible,
    /// takeoff and flyover of a named target
    Flyover(String),
}

/// the patterns generated for all runways of the challenge airports
pub const STANDARD_PATTERNS: [Pattern; 5] = [Pattern::Roll, Pattern::Takeoff, Pattern::Partial, Pattern::Circuit, Pattern::Impossible];

impl Pattern {
    pub fn name (&self) -> &str {
        match self {
            Pattern::Roll => "roll",
            Pattern::Takeoff => "takeoff",
            Pattern::Partial => "partial",
            Pattern::Circuit => "circuit",
            Pattern::Impossible => "impossible",
            Pattern::Flyover(target) => target.as_str(),
        }
    }
}

/// anything that is not a standard pattern name is taken as a flyover target name
impl FromStr for Pattern {
    type Err = ParcoursGenError;

    fn from_str (s: &str) -> Result<Self> {
        match s {
            "roll" => Ok(Pattern::Roll),
            "takeoff" => Ok(Pattern::Takeoff),
            "partial" => Ok(Pattern::Partial),
            "circuit" => Ok(Pattern::Circuit),
            "impossible" => Ok(Pattern::Impossible),
            "" => Err( ParcoursGenError::UnknownPattern( s.to_string())),
            _ => Ok(Pattern::Flyover( s.to_string()))
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/* #endregion Pattern */

/* #region generator **********************************************************************************************/

/// runway specific generator parameters
struct RunwaySetup {
    airport: String,
    runway: String,
    start: Location,
    end: Location,
    tol: f64,
    turn: Option<f64>,
}

impl RunwaySetup {
    fn new (table: &AirportTable, config: &GenConfig, airport: &str, runway: &str) -> Result<Self> {
        let start = table.runway_location( airport, runway)?;
        let end = table.reciprocal( airport, runway)?.location;

        let (tol, turn) = match config.airport_setup( airport) {
            Some(setup) => (setup.tol, setup.runway_turns.get(runway).copied()),
            None => (config.default_tol, None)
        };

        Ok( RunwaySetup { airport: airport.to_string(), runway: runway.to_string(), start, end, tol, turn } )
    }

    fn turn (&self) -> Result<f64> {
        self.turn.ok_or_else(|| ParcoursGenError::NoTurnDirection { airport: self.airport.clone(), runway: self.runway.clone() })
    }
}

/// leg sequences of the different patterns
struct CourseGenerator<'a> {
    table: &'a AirportTable,
    config: &'a GenConfig,
    rw: RunwaySetup,
}

impl<'a> CourseGenerator<'a> {

    fn roll (&self) -> CourseBuilder {
        let rw = &self.rw;
        let bearing = rw.start.bearing( &rw.end);
        let pos = rw.start.destination( bearing, -self.config.lineup_offset);

        let mut course = CourseBuilder::new( self.config.segment_length, pos, bearing, rw.tol);
        course.emit().advance( self.config.ground_run, 0.0, 0.0, 0.0);
        course
    }

    fn takeoff (&self) -> CourseBuilder {
        let mut course = self.roll();
        course.advance( 1500.0, 0.3 * self.config.circuit_alt, 0.0, self.config.extra_tol);
        course
    }

    /// crosswind and downwind legs
    fn to_downwind (&self, course: &mut CourseBuilder, turn: f64) {
        let ca = self.config.circuit_alt;
        course
            .advance( 2000.0, 0.2*ca, turn, 0.0)
            .advance( 2700.0, 0.3*ca, 0.0, 0.0)
            .advance( 2000.0, 0.2*ca, turn, 0.0);
    }

    fn partial (&self) -> Result<CourseBuilder> {
        let turn = self.rw.turn()?;
        let mut course = self.takeoff();
        self.to_downwind( &mut course, turn);
        course.advance( self.config.ground_run + 2000.0, 0.0, 0.0, 0.0);
        Ok(course)
    }

    fn circuit (&self) -> Result<CourseBuilder> {
        let turn = self.rw.turn()?;
        let ca = self.config.circuit_alt;

        let mut course = self.takeoff();
        self.to_downwind( &mut course, turn);
        course
            .advance( self.config.ground_run + 3900.0, 0.0, 0.0, 0.0)
            .advance( 2000.0, -0.2*ca, turn, 0.0)
            .advance( 2700.0, -0.3*ca, 0.0, 0.0)
            .advance( 2000.0, -0.2*ca, turn, 0.0)
            .advance( 2700.0, -0.3*ca, 0.0, -self.config.extra_tol)
            .advance( 500.0, 0.0, 0.0, 0.0);
        Ok(course)
    }

    fn impossible (&self) -> Result<CourseBuilder> {
        let turn = self.rw.turn()?;
        let ca = self.config.circuit_alt;

        let mut course = self.takeoff();
        course
            .advance( 1000.0, 0.2*ca, turn/2.0, 0.0)
            .advance( 925.0, 0.0, 0.0, 0.0)
            .advance( 1000.0, -0.1*ca, -turn/2.0, 0.0)
            .advance( 900.0, -0.1*ca, 0.0, 0.0)
            .advance( 2200.0, -0.2*ca, -2.0*turn, 0.0)
            .advance( 900.0, -0.1*ca, 0.0, -self.config.extra_tol)
            .advance( 200.0, 0.0, 0.0, 0.0);
        Ok(course)
    }

    fn flyover_leg (&self, target: &FlyoverTarget) -> Result<(Location,Location)> {
        match &target.leg {
            FlyoverLeg::Points { start, end } => Ok( (*start, *end) ),
            FlyoverLeg::Runway { airport, runway, alt_offset } => {
                let start = self.table.runway_location( airport, runway)?.offset_altitude( *alt_offset);
                let end = self.table.reciprocal( airport, runway)?.location.offset_altitude( *alt_offset);
                Ok( (start, end) )
            }
        }
    }

    /// takeoff, optional turn and then a straight leg between the target points. The transition to the
    /// leg start keeps the larger of the current and the leg tolerance
    fn flyover (&self, name: &str) -> Result<CourseBuilder> {
        let target = self.config.flyover( name).ok_or_else(|| ParcoursGenError::UnknownPattern( name.to_string()))?;
        let (start, end) = self.flyover_leg( target)?;

        let mut course = self.takeoff();
        if target.turn != 0.0 {
            course.advance( 2000.0, 0.2 * self.config.circuit_alt, target.turn, 0.0);
        }

        let transition_tol = course.tolerance().max( target.tol);
        course.set_tolerance( transition_tol).emit();
        course.set_position( start).emit();
        course.set_tolerance( target.tol).emit();

        course.set_bearing( start.bearing( &end)).advance( start.distance( &end), 0.0, 0.0, 0.0);
        Ok(course)
    }

    fn generate (&self, pattern: &Pattern) -> Result<CourseBuilder> {
        match pattern {
            Pattern::Roll => Ok( self.roll() ),
            Pattern::Takeoff => Ok( self.takeoff() ),
            Pattern::Partial => self.partial(),
            Pattern::Circuit => self.circuit(),
            Pattern::Impossible => self.impossible(),
            Pattern::Flyover(name) => self.flyover( name),
        }
    }
}

/// generate the course for `pattern` starting at runway `runway` of `airport`
pub fn generate (table: &AirportTable, config: &GenConfig, airport: &str, runway: &str, pattern: &Pattern) -> Result<Path> {
    let rw = RunwaySetup::new( table, config, airport, runway)?;
    let generator = CourseGenerator { table, config, rw };
    let path = generator.generate( pattern)?.build()?;

    info!("generated {} for {} {}: {}", pattern, airport, runway, path);
    Ok(path)
}

/// the name of a generated course, which is also used for its files
pub fn course_name (airport: &str, runway: &str, pattern: &Pattern) -> String {
    format!("{}_{}_{}", airport, runway, pattern)
}

/// generate the standard challenge set: all standard patterns for all runways of the challenge airports
/// (unless skipped in the airport setup) plus the configured additional courses
pub fn challenges (table: &AirportTable, config: &GenConfig) -> Result<Vec<(String,Path)>> {
    let mut courses = Vec::new();

    for pattern in &STANDARD_PATTERNS {
        for airport in &config.challenge_airports {
            let skip = config.airport_setup( airport).map_or( false, |s| s.skip_patterns.iter().any(|p| p == pattern.name()));
            if !skip {
                for runway in table.airport( airport)?.runways.keys() {
                    let path = generate( table, config, airport, runway, pattern)?;
                    courses.push( (course_name( airport, runway, pattern), path));
                }
            }
        }
    }

    for course in &config.challenge_courses {
        let pattern: Pattern = course.pattern.parse()?;
        let path = generate( table, config, &course.airport, &course.runway, &pattern)?;
        courses.push( (course_name( &course.airport, &course.runway, &pattern), path));
    }

    Ok(courses)
}

/// store a course as `<out_dir>/<name>/<name>.csv` and the extruded KML of its corridor next to it.
/// Returns the path of the CSV file
pub fn dump_path (path: &Path, name: &str, out_dir: impl AsRef<FsPath>) -> Result<PathBuf> {
    let dir = out_dir.as_ref().join(name);
    ensure_writable_dir( &dir)?;

    let csv_path = dir.join( format!("{}.csv", name));
    write_path_file( path, &csv_path)?;
    write_kml_file( &csv_path, true)?;

    Ok(csv_path)
}

/* #endregion generator */
