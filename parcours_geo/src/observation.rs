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

//! sources of observed locations that drive path followers. Live telemetry links implement
//! [`ObservationSource`], for offline use we replay recorded track logs

use std::{collections::VecDeque, fs::File, fmt, io, path::Path as FsPath};
use csv::StringRecordsIntoIter;
use tracing::debug;

use crate::location::Location;
use crate::follower::PathFollower;
use crate::csv_io::{csv_reader_builder, parse_record};
use crate::errors::Result;

/// something that delivers one location per tracking tick. `Ok(None)` means the source is exhausted
pub trait ObservationSource {
    fn next_observation (&mut self) -> Result<Option<Location>>;
}

/// in-memory list of observations
pub struct VecSource {
    locations: VecDeque<Location>
}

impl VecSource {
    pub fn new (locations: impl IntoIterator<Item=Location>) -> Self {
        VecSource { locations: locations.into_iter().collect() }
    }
}

impl ObservationSource for VecSource {
    fn next_observation (&mut self) -> Result<Option<Location>> {
        Ok( self.locations.pop_front() )
    }
}

/// replay of a recorded CSV track log with "lat,lon[,alt]" rows. Additional columns are ignored,
/// header and malformed rows are skipped
pub struct TrackLogSource<R: io::Read> {
    records: StringRecordsIntoIter<R>,
}

impl TrackLogSource<File> {
    pub fn open (path: impl AsRef<FsPath>) -> Result<Self> {
        let file = File::open( path.as_ref())?;
        Ok( TrackLogSource::from_reader(file) )
    }
}

impl<R: io::Read> TrackLogSource<R> {
    pub fn from_reader (reader: R) -> Self {
        let records = csv_reader_builder().from_reader(reader).into_records();
        TrackLogSource { records }
    }
}

impl<R: io::Read> ObservationSource for TrackLogSource<R> {
    fn next_observation (&mut self) -> Result<Option<Location>> {
        while let Some(res) = self.records.next() {
            let rec = res?;
            if let Some((loc,_)) = parse_record( &rec) {
                return Ok(Some(loc))
            }
            debug!("skipping track log row {:?}", rec);
        }
        Ok(None)
    }
}

/// the follower result for a single observation
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct TrackSample {
    pub tick: usize,
    pub location: Location,
    pub on_corridor: bool,
    pub progress: f64,
    pub last_distance: f64,
}

impl fmt::Display for TrackSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:5}: {:.6},{:.6},{:.0} {} progress={:.3} distance={:.1}ft",
            self.tick, self.location.lat(), self.location.lon(), self.location.alt(),
            if self.on_corridor { "ON " } else { "OFF" }, self.progress, self.last_distance)
    }
}

/// summary of feeding all observations of a source into a follower
#[derive(Debug,Clone,Default)]
pub struct FollowReport {
    pub samples: Vec<TrackSample>,
    pub stayed_on_path: bool,
    pub progress: f64,
    pub completion: f64,
    pub max_distance: f64,
}

impl FollowReport {
    /// the first tick that was outside the corridor
    pub fn first_deviation (&self) -> Option<&TrackSample> {
        self.samples.iter().find(|s| !s.on_corridor)
    }
}

/// drive `follower` with all observations of `source`
pub fn follow (source: &mut impl ObservationSource, follower: &mut PathFollower) -> Result<FollowReport> {
    let mut samples = Vec::new();
    let mut max_distance: f64 = 0.0;

    while let Some(loc) = source.next_observation()? {
        let on_corridor = follower.update( &loc);
        let last_distance = follower.last_distance();
        max_distance = max_distance.max( last_distance);

        samples.push( TrackSample { tick: samples.len(), location: loc, on_corridor, progress: follower.progress(), last_distance });
    }

    Ok( FollowReport {
        stayed_on_path: !samples.is_empty() && follower.has_stayed_on_path(),
        progress: follower.progress(),
        completion: follower.completion(),
        max_distance,
        samples,
    })
}
