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

use anyhow::Result;
use parcours_common::{define_cli, check_cli, init_env_tracing};
use parcours_geo::{read_path_file, follow, PathFollower, TrackLogSource};

define_cli! { ARGS [about="replay a recorded track log against a path and report corridor adherence"] =
    quiet: bool [help="only print the summary", short, long],
    path: String [help="path CSV file with 'lat,lon[,alt[,tol]]' rows", long],
    track: String [help="track log CSV file with 'lat,lon[,alt]' rows", long]
}

fn main() -> Result<()> {
    check_cli!(ARGS);
    init_env_tracing();

    let path = read_path_file( &ARGS.path)?;
    let mut source = TrackLogSource::open( &ARGS.track)?;
    let mut follower = PathFollower::new( &path);

    let report = follow( &mut source, &mut follower)?;

    if !ARGS.quiet {
        for sample in &report.samples {
            println!("{sample}");
        }
    }

    println!("{}: {} observations, stayed on path: {}, progress: {:.3} ({:.0}%), max deviation: {:.1}ft",
        path, report.samples.len(), report.stayed_on_path, report.progress, report.completion * 100.0, report.max_distance);
    if let Some(dev) = report.first_deviation() {
        println!("first deviation: {dev}");
    }

    Ok(())
}
