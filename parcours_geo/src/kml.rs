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

//! KML export of paths as polygon placemarks (e.g. for viewing corridors in Google Earth)

use std::path::{Path as FsPath, PathBuf};
use tracing::info;

use parcours_common::uom::feet_to_meters;
use parcours_common::fs::{with_extension, set_filepath_contents};

use crate::path::Path;
use crate::csv_io::read_path_file;
use crate::errors::Result;

const KML_HEADER: &'static str = r##"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>

    <Style id="yellowLineGreenPoly">
      <LineStyle>
        <color>5f00ffff</color>
        <width>4</width>
      </LineStyle>
      <PolyStyle>
        <color>5f00ff00</color>
      </PolyStyle>
    </Style>

    <Placemark>
      <name>Flight path</name>
      <description>Flight path</description>
      <styleUrl>#yellowLineGreenPoly</styleUrl>
      <Polygon>
"##;

const KML_EXTRUDE: &'static str = "        <extrude>1</extrude>\n";

const KML_RING_START: &'static str = r##"        <altitudeMode>absolute</altitudeMode>
        <outerBoundaryIs>
        <LinearRing>
        <coordinates>
"##;

const KML_FOOTER: &'static str = r##"        </coordinates>
        </LinearRing>
        </outerBoundaryIs>
      </Polygon>
    </Placemark>
  </Document>
</kml>"##;

/// KML document with the path locations as the outer ring of a polygon. Coordinates are written as
/// `lon,lat,alt` with altitudes in meters. The path should be closed (e.g. a `corridor_polygon()`)
pub fn to_kml (path: &Path, extrude_from_ground: bool) -> String {
    let mut s = String::with_capacity( KML_HEADER.len() + KML_RING_START.len() + KML_FOOTER.len() + path.num_locations() * 48);

    s.push_str( KML_HEADER);
    if extrude_from_ground {
        s.push_str( KML_EXTRUDE);
    }
    s.push_str( KML_RING_START);
    for loc in path.locations() {
        s.push_str( &format!("{},{},{}\n", loc.lon(), loc.lat(), feet_to_meters( loc.alt())));
    }
    s.push_str( KML_FOOTER);

    s
}

/// read a path CSV file and store the KML of its corridor polygon in a sibling file with a ".kml" extension
pub fn write_kml_file (csv_path: impl AsRef<FsPath>, extrude_from_ground: bool) -> Result<PathBuf> {
    let csv_path = csv_path.as_ref();
    let path = read_path_file( csv_path)?;
    let kml = path.corridor_polygon().to_kml( extrude_from_ground);

    let kml_path = with_extension( csv_path, "kml");
    set_filepath_contents( &kml_path, kml.as_bytes())?;
    info!("wrote corridor of {} to {:?}", path, kml_path);

    Ok(kml_path)
}
