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

use parcours_airports::{Airport, AirportTable, AirportError};
use parcours_geo::Location;
use parcours_common::angle::{heading_diff, reciprocal_heading};

// run with "cargo test -p parcours_airports --test test_airports -- --nocapture"

#[test]
fn test_default_table() {
    let table = AirportTable::default_table().unwrap();
    let names: Vec<&str> = table.airports().map(|a| a.name.as_str()).collect();
    println!("airports: {names:?}");

    assert_eq!( table.len(), 8);
    for name in ["KSEA", "KBFI", "KRNT", "KTCM", "S36", "S50", "LOWI", "LOIJ"] {
        assert!( table.airport(name).is_ok(), "missing airport {name}");
    }
    assert_eq!( table.airport("KSEA").unwrap().runways.len(), 6);

    // each runway has a reciprocal that points back to it
    for airport in table.airports() {
        for rw in airport.runways.values() {
            let rev = airport.reciprocal( &rw.name).unwrap();
            assert_eq!( rev.reverse, rw.name);
        }
    }
}

#[test]
fn test_runway_lookup() {
    let table = AirportTable::default_table().unwrap();

    let loc = table.runway_location( "LOWI", "08").unwrap();
    assert_eq!( loc, Location::new( 47.258888, 11.331700, 1915.0));
    assert_eq!( table.reciprocal( "LOWI", "08").unwrap().name, "26");
    assert_eq!( table.runway( "KSEA", "16L").unwrap().reverse, "34R");

    assert!( matches!( table.airport("XXXX"), Err(AirportError::UnknownAirport(_))));
    assert!( matches!( table.runway("LOWI", "17"), Err(AirportError::UnknownRunway{..})));
}

#[test]
fn test_runway_geometry() {
    let table = AirportTable::default_table().unwrap();

    let h08 = table.runway_heading( "LOWI", "08").unwrap();
    let h26 = table.runway_heading( "LOWI", "26").unwrap();
    println!("LOWI 08: {h08}, 26: {h26}");
    assert!( h08 > 80.0 && h08 < 82.0);
    assert!( heading_diff( h26, reciprocal_heading( h08)).abs() < 0.1);

    let l08 = table.runway_length( "LOWI", "08").unwrap();
    let l26 = table.runway_length( "LOWI", "26").unwrap();
    assert!( (l08 - l26).abs() < 1e-6);
    assert!( l08 > 6300.0 && l08 < 6500.0);

    // KSEA runways are (almost) north/south
    let h = table.runway_heading( "KSEA", "16L").unwrap();
    assert!( h > 179.0 && h < 181.0);
}

#[test]
fn test_closest_runway() {
    let table = AirportTable::default_table().unwrap();

    let lowi_08 = table.runway_location( "LOWI", "08").unwrap();
    let near = lowi_08.destination( 261.0, 500.0);
    assert_eq!( table.closest_runway( &near), Some(("LOWI".to_string(), "08".to_string())));

    let near_s36 = Location::new( 47.3320, -122.1024, 1000.0);
    assert_eq!( table.closest_runway( &near_s36), Some(("S36".to_string(), "33".to_string())));

    let empty = AirportTable::from( Vec::<Airport>::new());
    assert!( empty.is_empty());
    assert_eq!( empty.closest_runway( &near), None);
}

#[test]
fn test_load_table() {
    let dir = std::env::temp_dir().join("parcours_airports_tests");
    parcours_common::fs::ensure_writable_dir( &dir).unwrap();
    let path = dir.join("airports.ron");
    std::fs::write( &path, r#"[
        ( name: "TEST", runways: [
            (name: "09", reverse: "27", location: (lat: 10.0, lon: 20.0)),
            (name: "27", reverse: "09", location: (lat: 10.0, lon: 20.01)),
        ])
    ]"#).unwrap();

    let table = AirportTable::load( &path).unwrap();
    assert_eq!( table.len(), 1);
    let h = table.runway_heading( "TEST", "09").unwrap();
    assert!( (h - 90.0).abs() < 0.01);
    assert_eq!( table.airport("TEST").unwrap().description, "");

    assert!( matches!( AirportTable::load( dir.join("none.ron")), Err(AirportError::ConfigError(_))));
}
