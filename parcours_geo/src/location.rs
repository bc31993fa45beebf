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

//! this module provides geodetic points on an idealized spherical earth (radius [`EARTH_RADIUS_FT`]).
//! All lengths (altitude and distances) are in feet, all angles in degrees.
//!
//! This is not WGS84 geodesy. The distance metric combines the great circle arc length at the lower of both
//! altitudes with the altitude difference as orthogonal legs. Tolerances of generated courses are calibrated
//! against this metric.

use std::{fmt, str::FromStr};
use serde::{Serialize,Deserialize};

use parcours_common::{sin, sin2, cos, asin, acos, atan2, sqrt, pow2, deg, rad, clamp};
use parcours_common::angle::{normalize_360, normalize_lon_radians};
use parcours_common::geo_constants::EARTH_RADIUS_FT;

use crate::errors::{ParcoursGeoError, Result, parse_error};

/// a latitude/longitude/altitude position on the sphere.
/// Locations are immutable values - all transformations return new instances
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Location {
    #[serde(alias="latitude")]
    lat: f64, // degrees

    #[serde(alias="longitude")]
    lon: f64, // degrees

    #[serde(alias="altitude", default)]
    alt: f64, // feet
}

impl Location {
    pub fn new (lat: f64, lon: f64, alt: f64) -> Self {
        Location { lat, lon, alt }
    }

    pub fn from_lat_lon (lat: f64, lon: f64) -> Self {
        Location { lat, lon, alt: 0.0 }
    }

    #[inline] pub fn lat (&self) -> f64 { self.lat }
    #[inline] pub fn lon (&self) -> f64 { self.lon }
    #[inline] pub fn alt (&self) -> f64 { self.alt }

    /// same horizontal position with a new altitude
    pub fn with_altitude (&self, alt: f64) -> Location {
        Location { alt, ..*self }
    }

    /// same horizontal position with the altitude changed by `delta` feet
    pub fn offset_altitude (&self, delta: f64) -> Location {
        Location { alt: self.alt + delta, ..*self }
    }

    /// do both locations have the same latitude and longitude (altitude is ignored)
    #[inline]
    pub fn same_position (&self, other: &Location) -> bool {
        self.lat == other.lat && self.lon == other.lon
    }

    /// effective radius for arc lengths between self and other
    #[inline]
    fn radius_to (&self, other: &Location) -> f64 {
        EARTH_RADIUS_FT + self.alt.min(other.alt)
    }

    /// distance in feet to `other`, using the spherical law of cosines for the central angle.
    /// The arc length is computed at the lower altitude and combined with the altitude difference
    /// as if both were orthogonal
    pub fn distance (&self, other: &Location) -> f64 {
        let dalt = self.alt - other.alt;

        // the law of cosines is ill-conditioned around 0, don't let rounding errors of sin²+cos² show
        if self.same_position(other) {
            return dalt.abs()
        }

        let lat1 = rad(self.lat);
        let lon1 = rad(self.lon);
        let lat2 = rad(other.lat);
        let lon2 = rad(other.lon);

        let v = sin(lat1)*sin(lat2) + cos(lat1)*cos(lat2)*cos(lon1-lon2);
        let r = self.radius_to(other);

        sqrt( pow2( acos( clamp(v, -1.0, 1.0)) * r) + pow2(dalt))
    }

    /// distance in feet to `other`, using the haversine formula for the central angle. Same composite
    /// metric as [`Location::distance`] but better conditioned for short distances
    pub fn haversine_distance (&self, other: &Location) -> f64 {
        let phi1 = rad(self.lat);
        let phi2 = rad(other.lat);
        let dphi = phi2 - phi1;
        let dlambda = rad(other.lon - self.lon);

        let a = sin2(dphi/2.0) + cos(phi1) * cos(phi2) * sin2(dlambda/2.0);
        let c = 2.0 * atan2( sqrt(a), sqrt(1.0 - a));
        let r = self.radius_to(other);

        sqrt( pow2(c * r) + pow2(self.alt - other.alt))
    }

    /// forward azimuth from self to other in degrees [0..360), 0 is north, 90 east
    pub fn bearing (&self, other: &Location) -> f64 {
        let phi1 = rad(self.lat);
        let phi2 = rad(other.lat);
        let dlambda = rad(other.lon - self.lon);

        let y = sin(dlambda) * cos(phi2);
        let x = cos(phi1)*sin(phi2) - sin(phi1)*cos(phi2)*cos(dlambda);

        normalize_360( deg( atan2(y, x)))
    }

    /// the location at given `bearing` (degrees) and `dist` (feet) from self. Negative distances go
    /// into the opposite direction. The altitude of the result is the altitude of self
    pub fn destination (&self, bearing: f64, dist: f64) -> Location {
        let theta = rad(bearing);
        let d = dist / EARTH_RADIUS_FT; // angular distance in radians

        let phi1 = rad(self.lat);
        let lambda1 = rad(self.lon);

        let phi2 = asin( sin(phi1)*cos(d) + cos(phi1)*sin(d)*cos(theta));
        let lambda2 = lambda1 + atan2( sin(theta)*sin(d)*cos(phi1), cos(d) - sin(phi1)*sin(phi2));

        Location::new( deg(phi2), deg( normalize_lon_radians(lambda2)), self.alt)
    }

    /// component-wise linear interpolation between self (`pos` = 0) and other (`pos` = 1).
    /// This is not the great circle intermediate point, which is close enough for our segment lengths
    pub fn interpolate (&self, other: &Location, pos: f64) -> Location {
        #[inline] fn lerp (start: f64, end: f64, pos: f64) -> f64 { start + (end - start)*pos }

        Location::new(
            lerp( self.lat, other.lat, pos),
            lerp( self.lon, other.lon, pos),
            lerp( self.alt, other.alt, pos)
        )
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location(lat={}, lon={}, alt={})", self.lat, self.lon, self.alt)
    }
}

/// parse "lat,lon[,alt]" degrees/feet
impl FromStr for Location {
    type Err = ParcoursGeoError;

    fn from_str (s: &str) -> Result<Self> {
        let vs: Vec<&str> = s.split(',').map(|p| p.trim()).collect();
        if vs.len() < 2 || vs.len() > 3 {
            return Err( parse_error!("expected 'lat,lon[,alt]' but got '{}'", s))
        }

        let parse = |v: &str| v.parse::<f64>().map_err(|_| parse_error!("not a number '{}' in '{}'", v, s));
        let lat = parse(vs[0])?;
        let lon = parse(vs[1])?;
        let alt = if vs.len() == 3 { parse(vs[2])? } else { 0.0 };

        Ok( Location::new( lat, lon, alt) )
    }
}
