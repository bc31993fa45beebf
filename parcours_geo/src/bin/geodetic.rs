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
use parcours_geo::kml::write_kml_file;

define_cli! { ARGS [about="geodetic path conversion to KML files for viewing in Google Earth"] =
    tokml: bool [help="convert the path CSV files into KML files of their tolerance corridors", long],
    extrude: bool [help="extrude the corridor polygons from the ground", long],
    files: Vec<String> [help="path CSV files with 'lat,lon[,alt[,tol]]' rows"]
}

fn main() -> Result<()> {
    check_cli!(ARGS);
    init_env_tracing();

    if ARGS.tokml {
        for file in &ARGS.files {
            let kml_path = write_kml_file( file, ARGS.extrude)?;
            println!("{} -> {}", file, kml_path.display());
        }
    }

    Ok(())
}
