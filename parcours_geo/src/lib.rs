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

//! spherical earth geometry for flight courses: locations, waypoint paths with per-waypoint lateral
//! tolerances, tolerance corridor contours and path following

pub mod errors;
pub use errors::{ParcoursGeoError, Result};

pub mod location;
pub use location::Location;

pub mod path;
pub use path::{Path, PathBuilder, SegmentDist};

pub mod follower;
pub use follower::{PathFollower, FollowerState};

pub mod csv_io;
pub use csv_io::read_path_file;

pub mod kml;

pub mod observation;
pub use observation::{ObservationSource, VecSource, TrackLogSource, TrackSample, FollowReport, follow};
