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

use parcours_geo::{Location, Path, PathBuilder};
use crate::errors::Result;

/// incremental construction of a course by flying legs.
///
/// The builder keeps the current position, bearing and tolerance. Each `emit()` appends the current
/// position with its tolerance (rounded to whole feet) to the course
#[derive(Debug,Clone)]
pub struct CourseBuilder {
    segment_length: f64,
    pos: Location,
    bearing: f64,
    tol: f64,
    path: PathBuilder,
}

impl CourseBuilder {
    pub fn new (segment_length: f64, pos: Location, bearing: f64, tol: f64) -> Self {
        CourseBuilder { segment_length, pos, bearing, tol, path: PathBuilder::new() }
    }

    pub fn position (&self) -> &Location { &self.pos }
    pub fn bearing (&self) -> f64 { self.bearing }
    pub fn tolerance (&self) -> f64 { self.tol }
    pub fn len (&self) -> usize { self.path.len() }
    pub fn is_empty (&self) -> bool { self.path.is_empty() }

    pub fn set_position (&mut self, pos: Location) -> &mut Self { self.pos = pos; self }
    pub fn set_bearing (&mut self, bearing: f64) -> &mut Self { self.bearing = bearing; self }
    pub fn set_tolerance (&mut self, tol: f64) -> &mut Self { self.tol = tol; self }

    /// append the current position to the course
    pub fn emit (&mut self) -> &mut Self {
        self.path.push( self.pos, self.tol.round_ties_even());
        self
    }

    /// fly `dist` feet while gaining `alt_gain` feet, turning by `bearing_gain` degrees and widening the
    /// tolerance by `tol_gain` feet. The leg is split into steps of about `segment_length`, each step
    /// changes bearing and tolerance first and then moves to the next emitted position
    pub fn advance (&mut self, dist: f64, alt_gain: f64, bearing_gain: f64, tol_gain: f64) -> &mut Self {
        let n = (dist / self.segment_length).round_ties_even().max(1.0);
        let d = dist / n;
        let a = alt_gain / n;
        let b = bearing_gain / n;
        let t = tol_gain / n;

        for _ in 0..(n as usize) {
            self.bearing += b;
            self.tol += t;
            self.pos = self.pos.destination( self.bearing, d).offset_altitude(a);
            self.emit();
        }
        self
    }

    pub fn build (self) -> Result<Path> {
        Ok( self.path.build()? )
    }
}
