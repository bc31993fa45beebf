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

//! common geodetic constants that have to be consistent between path generation, path following
//! and export. All our geometry is based on an idealized sphere, lengths are in feet

/// spherical earth radius in feet. Tolerance corridors are calibrated against distances
/// computed with this radius
pub const EARTH_RADIUS_FT: f64 = 20925524.9;

/// below this turn angle (in degrees) corridor vertices are treated as straight
pub const STRAIGHT_TURN_DEG: f64 = 1.0;

/// max half-turn angle (in degrees) used to compute inner corridor offsets
pub const MAX_HALF_TURN_DEG: f64 = 60.0;

/// upper bound for the number of bisection levels of closest point searches. Segments longer than
/// 2^52 ft are not meaningful, this only keeps the grid index arithmetic in range
pub const MAX_SEARCH_LEVELS: u32 = 52;

/// max deviation (in feet) that still counts as on the path for zero tolerance corridors. This only
/// absorbs floating point rounding
pub const ZERO_TOLERANCE_EPSILON_FT: f64 = 1e-3;
