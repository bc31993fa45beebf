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

//! CSV import/export of paths. Rows are
//! ```text
//!   latitude_deg, longitude_deg [, altitude_ft [, tolerance_ft]]
//! ```
//! Rows with a non-numeric first field (headers) or less than two fields are skipped, missing altitudes
//! and tolerances default to 0

use std::{fs::File, io, path::Path as FsPath};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use tracing::debug;

use crate::location::Location;
use crate::path::{Path, PathBuilder};
use crate::errors::{ParcoursGeoError, Result};

pub (crate) fn csv_reader_builder () -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).trim(Trim::All);
    builder
}

/// parse an optional numeric field. Missing or empty fields are `Some(0.0)`, non-numeric ones `None`
fn optional_field (rec: &StringRecord, idx: usize) -> Option<f64> {
    match rec.get(idx) {
        Some(s) if !s.is_empty() => s.parse::<f64>().ok(),
        _ => Some(0.0)
    }
}

/// parse a single CSV record into a location and tolerance. Returns `None` for header and malformed rows
pub fn parse_record (rec: &StringRecord) -> Option<(Location,f64)> {
    if rec.len() < 2 { return None }

    let lat = rec.get(0)?.parse::<f64>().ok()?;
    let lon = rec.get(1)?.parse::<f64>().ok()?;
    let alt = optional_field( rec, 2)?;
    let tol = optional_field( rec, 3)?;

    Some( (Location::new( lat, lon, alt), tol) )
}

/// read a path from any CSV source
pub fn parse_path (reader: impl io::Read) -> Result<Path> {
    let mut csv_reader = csv_reader_builder().from_reader(reader);
    let mut builder = PathBuilder::new();

    for res in csv_reader.records() {
        let rec = res?;
        match parse_record( &rec) {
            Some((loc,tol)) => { builder.push( loc, tol); }
            None => debug!("skipping CSV row {:?}", rec)
        }
    }

    builder.build()
}

/// read a path from a CSV file
pub fn read_path_file (path: impl AsRef<FsPath>) -> Result<Path> {
    let path = path.as_ref();
    debug!("reading path from {:?}", path);
    let file = File::open(path)?;
    parse_path( file)
}

/// write a path as CSV with a "lat,lon,alt,tol" header line
pub fn write_path (path: &Path, writer: impl io::Write) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);

    csv_writer.write_record( &["lat","lon","alt","tol"])?;
    for (loc,tol) in path.locations().iter().zip( path.tolerances().iter()) {
        csv_writer.write_record( &[
            loc.lat().to_string(), loc.lon().to_string(), loc.alt().to_string(), tol.to_string()
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn to_csv_string (path: &Path) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_path( path, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ParcoursGeoError::ParseError(e.to_string()))
}

pub fn write_path_file (path: &Path, filename: impl AsRef<FsPath>) -> Result<()> {
    let file = File::create( filename.as_ref())?;
    write_path( path, file)
}
