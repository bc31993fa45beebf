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

//! degree based angle normalization as used for headings and bearings

use crate::{PI, TWO_PI};

/// normalize degrees into [0..360)
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

/// normalize degrees into [-180..180]
#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/// normalize a longitude given in radians into (-π..π]
#[inline]
pub fn normalize_lon_radians (lon: f64) -> f64 {
    PI - (PI - lon).rem_euclid(TWO_PI)
}

/// signed difference between two headings in degrees, normalized into (-180..180].
/// Positive values mean `heading1` is clockwise (to the right) of `heading2`
#[inline]
pub fn heading_diff (heading1: f64, heading2: f64) -> f64 {
    let x = (heading1 - heading2).rem_euclid(360.0);
    if x > 180.0 { x - 360.0 } else { x }
}

/// the reciprocal of a heading in degrees, normalized into [0..360)
#[inline]
pub fn reciprocal_heading (heading: f64) -> f64 {
    normalize_360( heading + 180.0)
}
