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

//! verification that a moving object follows a path within the path's tolerance corridor

use tracing::{debug, info, warn};

use parcours_common::geo_constants::ZERO_TOLERANCE_EPSILON_FT;

use crate::location::Location;
use crate::path::Path;

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum FollowerState {
    /// no observation processed yet, the next update scans all segments
    Uninitialized,

    /// the last observation was within the tolerance of segments `min_segm..=max_segm`
    OnCorridor { min_segm: usize, max_segm: usize },

    /// an observation was outside of the corridor. This is terminal - followers do not re-acquire
    OffCorridor,
}

/// stateful tracker of a single object along a path.
///
/// Followers borrow their path, hence the path has to outlive all of its followers. Several followers can share
/// the same path but each tracked object needs its own follower.
///
/// Once on the corridor the follower only scans the segments it was on plus the next one, i.e. it assumes
/// forward travel
#[derive(Debug,Clone)]
pub struct PathFollower<'a> {
    path: &'a Path,
    state: FollowerState,
    progress: f64,      // max arc-position reached so far
    last_distance: f64, // min distance to scanned segments in the last update
}

impl<'a> PathFollower<'a> {
    pub fn new (path: &'a Path) -> Self {
        PathFollower { path, state: FollowerState::Uninitialized, progress: 0.0, last_distance: 0.0 }
    }

    pub fn path (&self) -> &'a Path { self.path }
    pub fn state (&self) -> FollowerState { self.state }
    pub fn progress (&self) -> f64 { self.progress }
    pub fn last_distance (&self) -> f64 { self.last_distance }

    pub fn min_segm (&self) -> Option<usize> {
        if let FollowerState::OnCorridor{min_segm,..} = self.state { Some(min_segm) } else { None }
    }

    pub fn max_segm (&self) -> Option<usize> {
        if let FollowerState::OnCorridor{max_segm,..} = self.state { Some(max_segm) } else { None }
    }

    pub fn is_initialized (&self) -> bool { self.state != FollowerState::Uninitialized }

    /// false once an observation was outside the corridor
    pub fn has_stayed_on_path (&self) -> bool { self.state != FollowerState::OffCorridor }

    /// progress as fraction of the path length [0..1]
    pub fn completion (&self) -> f64 {
        let len = self.path.length();
        if len > 0 { self.progress / len as f64 } else { 0.0 }
    }

    /// process a new observation and return true if it is within the tolerance corridor
    pub fn update (&mut self, loc: &Location) -> bool {
        let path = self.path;
        let length = path.length();

        if length == 0 { // nothing we could ever follow
            self.last_distance = loc.distance( path.first());
            self.state = FollowerState::OffCorridor;
            return false
        }

        let (start, limit, upper_bound) = match self.state {
            FollowerState::Uninitialized => (0, length-1, None),
            FollowerState::OnCorridor{min_segm,max_segm} => (min_segm, (length-1).min(max_segm+1), Some(max_segm)),
            FollowerState::OffCorridor => {
                self.last_distance = path.nearest_point( loc).distance;
                debug!("off corridor at {}, distance {:.1}", loc, self.last_distance);
                return false
            }
        };

        let mut progress = self.progress;
        let mut dist = f64::INFINITY;
        let mut run: Option<(usize,usize)> = None;
        let mut prev_within_tol = false;

        for i in start..=limit {
            // the window is always within [0,length-1] so this can't fail
            let Ok(tol) = path.segment_tolerance( i) else { break };
            // the grid search is too coarse to tell if we are exactly on a zero tolerance segment
            let sd = if tol == 0.0 { path.segment_projection_at( i, loc) } else { path.segment_dist_at( i, loc) };
            let Ok(sd) = sd else { break };

            if sd.distance < dist { dist = sd.distance }

            if is_within_tolerance( sd.distance, tol) {
                let pos = i as f64 + sd.pos;
                if pos > progress { progress = pos }

                run = match run {
                    Some((min_s,_)) if prev_within_tol => Some((min_s,i)),
                    _ => Some((i,i)) // start of a new run
                };
                prev_within_tol = true;

            } else {
                if let Some(max_segm) = upper_bound {
                    if i > max_segm { break }
                }
                prev_within_tol = false;
            }
        }

        self.last_distance = dist;

        match run {
            Some((min_segm,max_segm)) => {
                if self.state == FollowerState::Uninitialized {
                    info!("acquired corridor on segments {}..={}", min_segm, max_segm);
                }
                self.progress = progress;
                self.state = FollowerState::OnCorridor{ min_segm, max_segm };
                debug!("on corridor segments {}..={}, progress {:.3}, distance {:.1}", min_segm, max_segm, progress, dist);
                true
            }
            None => {
                warn!("left corridor at {}, distance {:.1}, progress {:.3}", loc, dist, self.progress);
                self.state = FollowerState::OffCorridor;
                false
            }
        }
    }
}

/// zero tolerances require an exact match (up to rounding errors)
#[inline]
fn is_within_tolerance (deviation: f64, tolerance: f64) -> bool {
    if tolerance == 0.0 { deviation <= ZERO_TOLERANCE_EPSILON_FT } else { deviation <= tolerance }
}
