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

use std::fmt;

use parcours_common::{cos, rad, clamp, sqrt, pow2};
use parcours_common::angle::heading_diff;
use parcours_common::geo_constants::{EARTH_RADIUS_FT, STRAIGHT_TURN_DEG, MAX_HALF_TURN_DEG, MAX_SEARCH_LEVELS};

use crate::location::Location;
use crate::errors::{ParcoursGeoError, Result};
use crate::{csv_io, kml};

/* #region SegmentDist ********************************************************************************************/

/// result of a closest point search.
/// `pos` is the arc-position of the closest point (within [0,1] for single segments), `distance` its distance
/// in feet to the observed location
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct SegmentDist {
    pub pos: f64,
    pub distance: f64,
}

/// find the closest point to `loc` on the segment `loc0`→`loc1` with length `seg_len`.
///
/// This is a discretized search over `2^levels - 2` positions with `levels = ceil(log2(max(4,seg_len)))`, i.e. the
/// resolution is about 2ft. We start in the middle and move into the direction of the smaller distance of two
/// adjacent candidates, halving the step size each time.
///
/// The search assumes the distance to `loc` is unimodal along the segment, which holds for the short and straight
/// segments of generated courses. Long, strongly curved segments (in lat/lon space) can violate this in which case
/// the result is a local minimum.
///
/// `levels` is capped at [`MAX_SEARCH_LEVELS`], beyond that the grid is finer than f64 positions can resolve
pub fn segment_dist (loc0: &Location, loc1: &Location, seg_len: f64, loc: &Location) -> SegmentDist {
    let levels = (seg_len.max(4.0).log2().ceil() as u32).min( MAX_SEARCH_LEVELS);
    let discretization = ((1u64 << levels) - 2) as f64;
    let mut span: i64 = 1 << (levels - 2);
    let mut pos_index: i64 = (1 << (levels - 1)) - 1;

    let interpolate_dist = |pos: f64| loc.distance( &loc0.interpolate( loc1, pos));

    while span > 0 {
        let d0 = interpolate_dist( pos_index as f64 / discretization);
        let d1 = interpolate_dist( (pos_index + 1) as f64 / discretization);
        if d0 < d1 {
            pos_index -= span;
        } else {
            pos_index += span;
        }
        span >>= 1;
    }

    let pos = clamp( pos_index as f64 / discretization, 0.0, 1.0);
    SegmentDist { pos, distance: interpolate_dist(pos) }
}

/// exact closest point to `loc` on the segment `loc0`→`loc1`.
///
/// [`Location::interpolate`] is linear in latitude, longitude and altitude, hence the segment is a straight line in
/// a local frame that scales degrees to feet at the latitude of `loc0`. We project `loc` onto that line. This is not
/// subject to the ~2ft grid resolution of [`segment_dist`], which is needed for corridors with zero tolerance
pub fn segment_projection (loc0: &Location, loc1: &Location, loc: &Location) -> SegmentDist {
    let ft_per_deg = rad(1.0) * (EARTH_RADIUS_FT + loc0.alt().min( loc1.alt()));
    let ft_per_deg_lon = ft_per_deg * cos( rad( loc0.lat()));

    let local = |l: &Location| [
        (l.lon() - loc0.lon()) * ft_per_deg_lon,
        (l.lat() - loc0.lat()) * ft_per_deg,
        l.alt() - loc0.alt()
    ];
    let b = local( loc1);
    let p = local( loc);

    let len2 = b[0]*b[0] + b[1]*b[1] + b[2]*b[2];
    let pos = if len2 > 0.0 { clamp( (p[0]*b[0] + p[1]*b[1] + p[2]*b[2]) / len2, 0.0, 1.0) } else { 0.0 };
    let distance = sqrt( pow2(p[0] - pos*b[0]) + pow2(p[1] - pos*b[1]) + pow2(p[2] - pos*b[2]));

    SegmentDist { pos, distance }
}

/* #endregion SegmentDist */

/* #region Path ***************************************************************************************************/

/// an ordered sequence of locations with a lateral tolerance (in feet) for each location.
/// A path of N locations has N-1 segments, its `length()` is the number of segments.
/// Paths are not modified after construction - operations that change locations create new paths
#[derive(Debug,Clone,PartialEq)]
pub struct Path {
    locations: Vec<Location>,
    tolerances: Vec<f64>,
}

impl Path {
    /// create a path with all tolerances set to 0
    pub fn new (locations: Vec<Location>) -> Result<Self> {
        let tolerances = vec![0.0; locations.len()];
        Path::with_tolerances( locations, tolerances)
    }

    /// create a path with given tolerances. Missing tolerances are set to 0, surplus ones are ignored
    pub fn with_tolerances (locations: Vec<Location>, mut tolerances: Vec<f64>) -> Result<Self> {
        if locations.is_empty() {
            return Err( ParcoursGeoError::EmptyPath )
        }
        tolerances.resize( locations.len(), 0.0);
        Ok( Path { locations, tolerances } )
    }

    /// the number of segments
    #[inline] pub fn length (&self) -> usize { self.locations.len() - 1 }

    #[inline] pub fn num_locations (&self) -> usize { self.locations.len() }
    #[inline] pub fn locations (&self) -> &[Location] { &self.locations }
    #[inline] pub fn tolerances (&self) -> &[f64] { &self.tolerances }

    #[inline] pub fn first (&self) -> &Location { &self.locations[0] }
    #[inline] pub fn last (&self) -> &Location { &self.locations[self.locations.len()-1] }

    pub fn location (&self, i: usize) -> Option<&Location> { self.locations.get(i) }
    pub fn tolerance (&self, i: usize) -> Option<f64> { self.tolerances.get(i).copied() }

    fn check_segment_index (&self, i: usize) -> Result<()> {
        let length = self.length();
        if i < length { Ok(()) } else { Err( ParcoursGeoError::SegmentIndexOutOfRange{ index: i, length }) }
    }

    /// the i'th segment as a path with two locations
    pub fn segment (&self, i: usize) -> Result<Path> {
        self.check_segment_index(i)?;
        Ok( Path {
            locations: self.locations[i..i+2].to_vec(),
            tolerances: self.tolerances[i..i+2].to_vec()
        })
    }

    /// the larger of both end point tolerances of segment i
    pub fn segment_tolerance (&self, i: usize) -> Result<f64> {
        self.check_segment_index(i)?;
        Ok( self.tolerances[i].max( self.tolerances[i+1]) )
    }

    /// length of segment i in feet
    pub fn segment_distance (&self, i: usize) -> Result<f64> {
        self.check_segment_index(i)?;
        Ok( self.locations[i].distance( &self.locations[i+1]) )
    }

    /// total length of the path in feet
    pub fn distance (&self) -> f64 {
        self.locations.windows(2).map( |w| w[0].distance( &w[1])).sum()
    }

    /// the location at arc-position `pos` (segment index + fractional offset). Positions outside of
    /// [0,length()] are clamped to the first/last location
    pub fn interpolate (&self, pos: f64) -> Location {
        if pos <= 0.0 {
            *self.first()
        } else if pos >= self.length() as f64 {
            *self.last()
        } else {
            let i = pos.floor() as usize;
            self.locations[i].interpolate( &self.locations[i+1], pos - i as f64)
        }
    }

    /// closest point search on the first segment of this path (normally called on a segment).
    /// The returned position is in [0,1]. Single location paths return the distance to that location
    pub fn segment_dist (&self, loc: &Location) -> SegmentDist {
        if self.locations.len() < 2 {
            SegmentDist { pos: 0.0, distance: loc.distance( self.first()) }
        } else {
            let (loc0, loc1) = (&self.locations[0], &self.locations[1]);
            segment_dist( loc0, loc1, loc0.distance(loc1), loc)
        }
    }

    /// closest point search on segment i without creating a segment path. Position is in [0,1]
    pub fn segment_dist_at (&self, i: usize, loc: &Location) -> Result<SegmentDist> {
        self.check_segment_index(i)?;
        let (loc0, loc1) = (&self.locations[i], &self.locations[i+1]);
        Ok( segment_dist( loc0, loc1, loc0.distance(loc1), loc) )
    }

    /// exact closest point on segment i, see [`segment_projection`]. Position is in [0,1]
    pub fn segment_projection_at (&self, i: usize, loc: &Location) -> Result<SegmentDist> {
        self.check_segment_index(i)?;
        Ok( segment_projection( &self.locations[i], &self.locations[i+1], loc) )
    }

    /// closest point search over all segments. The returned position is an arc-position in [0,length()].
    /// On ties the first segment wins
    pub fn nearest_point (&self, loc: &Location) -> SegmentDist {
        let mut best = SegmentDist { pos: 0.0, distance: loc.distance( self.first()) };

        for i in 0..self.length() {
            let (loc0, loc1) = (&self.locations[i], &self.locations[i+1]);
            let sd = segment_dist( loc0, loc1, loc0.distance(loc1), loc);
            if i == 0 || sd.distance < best.distance {
                best = SegmentDist { pos: i as f64 + sd.pos, distance: sd.distance };
            }
        }
        best
    }

    /// a copy of this path with all altitudes changed by `delta` feet
    pub fn offset_altitude (&self, delta: f64) -> Path {
        Path {
            locations: self.locations.iter().map(|l| l.offset_altitude(delta)).collect(),
            tolerances: self.tolerances.clone()
        }
    }

    /// the closed contour of the tolerance corridor around this path.
    ///
    /// Each location is offset perpendicular to the path by its tolerance on both sides. At turns the outer side
    /// gets three points (pre-turn normal, bisector, post-turn normal) to bevel the corner, the inner side a single
    /// point on the bisector. The first and last location get an additional lead-in/lead-out point along the path.
    /// The result is a closed ring (first == last location) with zero tolerances
    pub fn corridor_polygon (&self) -> Path {
        let n = self.length();
        let mut sides = CorridorSides::new();

        for i in 0..=n {
            let bearing = if i == n { sides.prev_bearing } else { self.next_bearing(i) };
            sides.add_vertex( &self.locations[i], self.tolerances[i], bearing, i == 0, i == n);
        }

        let locations = sides.into_ring();
        let tolerances = vec![0.0; locations.len()];
        Path { locations, tolerances }
    }

    /// bearing from location i to the next location with a different position (or the last location)
    fn next_bearing (&self, i: usize) -> f64 {
        let n = self.length();
        let start = &self.locations[i];
        let mut j = i + 1;
        while j < n && start.same_position( &self.locations[j]) {
            j += 1;
        }
        start.bearing( &self.locations[j])
    }

    pub fn to_kml (&self, extrude_from_ground: bool) -> String {
        kml::to_kml( self, extrude_from_ground)
    }

    pub fn to_csv (&self) -> Result<String> {
        csv_io::to_csv_string( self)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({} locations, {:.0}ft)", self.locations.len(), self.distance())
    }
}

/// accumulator for corridor contour construction.
/// `left` and `right` are the offset points on both sides in path order, `prev_bearing` is the bearing of
/// the previous vertex
struct CorridorSides {
    left: Vec<Location>,
    right: Vec<Location>,
    prev_bearing: f64,
}

impl CorridorSides {
    fn new () -> Self {
        CorridorSides { left: Vec::new(), right: Vec::new(), prev_bearing: 0.0 }
    }

    fn add_vertex (&mut self, loc: &Location, tol: f64, bearing: f64, is_first: bool, is_last: bool) {
        if is_first || is_last {
            if is_first {
                self.left.push( loc.destination( bearing, -tol));
            }
            self.add_normals( loc, tol, bearing);
            if is_last {
                self.right.push( loc.destination( bearing, tol));
            }

        } else {
            let turn = heading_diff( bearing, self.prev_bearing);

            if turn.abs() <= STRAIGHT_TURN_DEG {
                self.add_normals( loc, tol, bearing);

            } else {
                // right turns have the outer side on the left
                let (angle, outer, inner) = if turn > 0.0 {
                    (self.prev_bearing - 90.0, &mut self.left, &mut self.right)
                } else {
                    (self.prev_bearing + 90.0, &mut self.right, &mut self.left)
                };
                let half_turn = turn / 2.0;

                outer.push( loc.destination( angle, tol));
                outer.push( loc.destination( angle + half_turn, tol));
                outer.push( loc.destination( angle + turn, tol));

                let inner_dist = -tol / cos( rad( clamp( half_turn, -MAX_HALF_TURN_DEG, MAX_HALF_TURN_DEG)));
                inner.push( loc.destination( angle + half_turn, inner_dist));
            }
        }

        self.prev_bearing = bearing;
    }

    fn add_normals (&mut self, loc: &Location, tol: f64, bearing: f64) {
        self.left.push( loc.destination( bearing - 90.0, tol));
        self.right.push( loc.destination( bearing + 90.0, tol));
    }

    /// left side followed by reversed right side, closed with the first point
    fn into_ring (self) -> Vec<Location> {
        let CorridorSides { mut left, mut right, .. } = self;
        right.reverse();

        let first = left[0];
        left.append( &mut right);
        left.push( first);
        left
    }
}

/* #endregion Path */

/* #region PathBuilder ********************************************************************************************/

/// incremental path construction (used for file import and course generation)
#[derive(Debug,Default,Clone)]
pub struct PathBuilder {
    locations: Vec<Location>,
    tolerances: Vec<f64>,
}

impl PathBuilder {
    pub fn new () -> Self { PathBuilder::default() }

    pub fn push (&mut self, loc: Location, tolerance: f64) -> &mut Self {
        self.locations.push(loc);
        self.tolerances.push(tolerance);
        self
    }

    pub fn len (&self) -> usize { self.locations.len() }
    pub fn is_empty (&self) -> bool { self.locations.is_empty() }
    pub fn last (&self) -> Option<&Location> { self.locations.last() }

    pub fn build (self) -> Result<Path> {
        Path::with_tolerances( self.locations, self.tolerances)
    }
}

/* #endregion PathBuilder */
