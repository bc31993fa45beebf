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

use geo::{ConvexHull, Contains, Coord, Intersects, Line, LineString, MultiPoint, Point, Polygon};
use parcours_geo::{Location, Path, PathBuilder, ParcoursGeoError};
use parcours_geo::path::{segment_dist, segment_projection};

// run with "cargo test -p parcours_geo --test test_path -- --nocapture"

fn start () -> Location { Location::new( 47.258888, 11.331700, 1915.0) }

/// a path that goes `dist` feet along each of the given bearings
fn legs_path (bearings: &[f64], dist: f64, tol: f64) -> Path {
    let mut builder = PathBuilder::new();
    let mut loc = start();
    builder.push( loc, tol);
    for b in bearings {
        loc = loc.destination( *b, dist);
        builder.push( loc, tol);
    }
    builder.build().unwrap()
}

fn to_coord (loc: &Location) -> Coord { Coord { x: loc.lon(), y: loc.lat() } }

fn to_line_string (path: &Path) -> LineString {
    LineString::new( path.locations().iter().map( to_coord).collect())
}

/// check that no two non-adjacent edges of a closed ring intersect
fn assert_simple_ring (ring: &Path) {
    let coords: Vec<Coord> = ring.locations().iter().map( to_coord).collect();
    let edges: Vec<Line> = coords.windows(2).map(|w| Line::new( w[0], w[1])).collect();
    let n = edges.len();

    for i in 0..n {
        for j in i+2..n {
            if i == 0 && j == n-1 { continue } // closing edge is adjacent to the first one
            assert!( !edges[i].intersects( &edges[j]), "edges {i} and {j} intersect: {:?} {:?}", edges[i], edges[j]);
        }
    }
}

#[test]
fn test_construction() {
    let locs = vec![ start(), start().destination( 0.0, 1000.0), start().destination( 0.0, 2000.0)];

    let p = Path::new( locs.clone()).unwrap();
    assert_eq!( p.length(), 2);
    assert_eq!( p.tolerances(), &[0.0, 0.0, 0.0]);

    let p = Path::with_tolerances( locs.clone(), vec![50.0]).unwrap();
    assert_eq!( p.tolerances(), &[50.0, 0.0, 0.0]);

    let p = Path::with_tolerances( locs, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!( p.tolerances().len(), 3);

    assert!( matches!( Path::new( vec![]), Err(ParcoursGeoError::EmptyPath)));
}

#[test]
fn test_segments_and_distance() {
    let p = legs_path( &[0.0, 90.0, 45.0, 180.0], 1000.0, 20.0);
    assert_eq!( p.length(), p.num_locations() - 1);

    let mut sum = 0.0;
    for i in 0..p.length() {
        let s = p.segment(i).unwrap();
        assert_eq!( s.length(), 1);
        assert_eq!( s.locations(), &p.locations()[i..i+2]);
        assert_eq!( s.tolerances(), &[20.0, 20.0]);
        sum += s.distance();
    }
    assert_eq!( p.distance(), sum);
    assert!( (p.distance() - 4000.0).abs() < 1.0);

    match p.segment( p.length()) {
        Err(ParcoursGeoError::SegmentIndexOutOfRange{index,length}) => { assert_eq!( (index,length), (4,4)) }
        other => panic!("expected out of range error, got {other:?}")
    }

    let single = Path::new( vec![start()]).unwrap();
    assert_eq!( single.length(), 0);
    assert_eq!( single.distance(), 0.0);
    assert!( single.segment(0).is_err());
}

#[test]
fn test_interpolate() {
    let p = legs_path( &[0.0, 90.0], 1000.0, 0.0);

    assert_eq!( p.interpolate( -1.0), *p.first());
    assert_eq!( p.interpolate( 0.0), *p.first());
    assert_eq!( p.interpolate( 2.0), *p.last());
    assert_eq!( p.interpolate( 7.5), *p.last());

    let m = p.interpolate( 1.5);
    let expected = p.locations()[1].interpolate( &p.locations()[2], 0.5);
    assert_eq!( m, expected);
    assert!( (m.distance( &p.locations()[1]) - 500.0).abs() < 1.0);
}

#[test]
fn test_segment_dist_bounds() {
    let seg = legs_path( &[30.0], 5000.0, 0.0);
    let a = seg.first();

    for bearing in (0..360).step_by(15) {
        for dist in [0.0, 10.0, 800.0, 2500.0, 7000.0, 20000.0] {
            let obs = a.destination( bearing as f64, dist);
            let sd = seg.segment_dist( &obs);
            assert!( sd.pos >= 0.0 && sd.pos <= 1.0, "pos out of range: {sd:?}");
            assert!( sd.distance >= 0.0);
        }
    }

    // observations beyond the ends are closest to the end points
    let before = a.destination( 210.0, 1000.0);
    assert_eq!( seg.segment_dist( &before).pos, 0.0);
    let after = seg.last().destination( 30.0, 1000.0);
    assert_eq!( seg.segment_dist( &after).pos, 1.0);
}

#[test]
fn test_segment_dist_perpendicular() {
    let seg = legs_path( &[0.0], 1000.0, 0.0);
    let mid = seg.interpolate( 0.5);
    let obs = mid.destination( 90.0, 100.0);

    let sd = seg.segment_dist( &obs);
    println!("perpendicular offset: {sd:?}");
    assert!( (sd.pos - 0.5).abs() < 0.01);
    assert!( (sd.distance - 100.0).abs() < 2.0);

    let on_path = seg.interpolate( 0.25);
    let sd = seg.segment_dist( &on_path);
    assert!( (sd.pos - 0.25).abs() < 0.01);
    assert!( sd.distance < 2.0);
}

#[test]
fn test_segment_projection() {
    let seg = legs_path( &[30.0], 1000.0, 0.0);
    let (a, b) = (seg.first(), seg.last());

    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let sd = segment_projection( a, b, &seg.interpolate( t));
        assert!( (sd.pos - t).abs() < 1e-9, "t={t}: {sd:?}");
        assert!( sd.distance < 1e-6, "t={t}: {sd:?}");
    }

    let obs = seg.interpolate( 0.5).destination( 120.0, 100.0);
    let sd = segment_projection( a, b, &obs);
    assert!( (sd.pos - 0.5).abs() < 0.01);
    assert!( (sd.distance - 100.0).abs() < 0.5);

    let sd = segment_projection( a, b, &b.destination( 30.0, 500.0));
    assert_eq!( sd.pos, 1.0);
    assert!( (sd.distance - 500.0).abs() < 0.5);

    let sd = segment_projection( a, a, &b);
    assert_eq!( sd.pos, 0.0);
    assert!( (sd.distance - 1000.0).abs() < 0.5);
}

#[test]
fn test_segment_dist_huge_segment() {
    let a = Location::new( 47.0, 11.0, 0.0);
    let b = Location::new( 47.0, 11.0, 1e30);
    let obs = Location::new( 47.0, 11.0, 1e29);

    for seg_len in [a.distance( &b), f64::INFINITY, f64::NAN] {
        let sd = segment_dist( &a, &b, seg_len, &obs);
        assert!( sd.pos >= 0.0 && sd.pos <= 1.0, "{seg_len}: {sd:?}");
        assert!( sd.distance >= 0.0);
    }
}

#[test]
fn test_nearest_point() {
    let p = legs_path( &[0.0, 90.0, 90.0], 1000.0, 0.0);
    let obs = p.interpolate( 2.5).destination( 0.0, 30.0);

    let np = p.nearest_point( &obs);
    println!("nearest point: {np:?}");
    assert!( (np.pos - 2.5).abs() < 0.01);
    assert!( (np.distance - 30.0).abs() < 2.0);

    let seg = p.segment_dist_at( 2, &obs).unwrap();
    assert!( (seg.pos - 0.5).abs() < 0.01);
    assert!( p.segment_dist_at( 3, &obs).is_err());
}

#[test]
fn test_offset_altitude() {
    let p = legs_path( &[0.0, 90.0], 1000.0, 25.0);
    let q = p.offset_altitude( 200.0);

    assert_eq!( q.tolerances(), p.tolerances());
    for (a,b) in p.locations().iter().zip( q.locations()) {
        assert_eq!( b.alt(), a.alt() + 200.0);
        assert!( a.same_position(b));
    }
    assert_eq!( p.first().alt(), 1915.0); // original unchanged
}

#[test]
fn test_corridor_closed() {
    let paths = vec![
        legs_path( &[], 1000.0, 50.0),
        legs_path( &[0.0], 1000.0, 50.0),
        legs_path( &[0.0, 0.0, 0.0], 1000.0, 50.0),
        legs_path( &[0.0, 90.0], 1000.0, 50.0),
        legs_path( &[0.0, -90.0, 180.0], 1000.0, 50.0),
        legs_path( &[0.0, 170.0], 1000.0, 50.0),
        legs_path( &[10.0, 20.0, 30.0, 40.0], 300.0, 100.0),
    ];

    for p in &paths {
        let ring = p.corridor_polygon();
        assert_eq!( ring.first(), ring.last());
        assert!( ring.num_locations() >= 4);
        assert!( ring.tolerances().iter().all(|t| *t == 0.0));
    }
}

#[test]
fn test_straight_corridor() {
    let p = legs_path( &[0.0, 0.0], 1000.0, 50.0);
    let ring = p.corridor_polygon();

    // lead-in + 3 left + 3 right + lead-out + closing point
    assert_eq!( ring.num_locations(), 9);

    let lead_in = ring.locations()[0];
    assert!( (lead_in.distance( p.first()) - 50.0).abs() < 0.5);

    for loc in &ring.locations()[1..4] {
        let sd = p.nearest_point( loc);
        assert!( (sd.distance - 50.0).abs() < 1.0, "left offset {sd:?}");
    }
    assert_simple_ring( &ring);
}

#[test]
fn test_corridor_right_angle_turn() {
    let p = legs_path( &[0.0, 90.0], 1000.0, 50.0);
    let ring = p.corridor_polygon();
    println!("corridor: {:?}", ring.locations());

    assert_eq!( ring.num_locations(), 11);

    // ring: lead-in, W p0, W p1, NW p1, N p1, N p2, lead-out, S p2, SE p1, E p0, lead-in
    let corner = p.locations()[1];
    let inner = ring.locations()[8];
    let d_inner = inner.distance( &corner);
    println!("inner corner offset: {d_inner}ft");
    assert!( (d_inner - 50.0 / 45f64.to_radians().cos()).abs() < 1.0);

    // outer bevel points are all at the tolerance distance from the corner
    for loc in &ring.locations()[2..5] {
        assert!( (loc.distance( &corner) - 50.0).abs() < 0.5);
    }

    // the inner point lies inside the hull of the outer bevel and the adjacent inner side points
    let ring_locs = ring.locations();
    let corner_points: Vec<Point> = [ring_locs[2], ring_locs[3], ring_locs[4], ring_locs[7], ring_locs[9]].iter()
        .map(|l| Point::from( to_coord(l)))
        .collect();
    let hull = MultiPoint::from( corner_points).convex_hull();
    assert!( hull.contains( &Point::from( to_coord( &inner))));

    assert_simple_ring( &ring);
    let polygon = Polygon::new( to_line_string( &ring), vec![]);
    for pos in [0.5, 0.9, 1.0, 1.1, 1.5] {
        let loc = p.interpolate( pos);
        assert!( polygon.contains( &Point::from( to_coord( &loc))), "{pos} not inside corridor");
    }
    assert!( !polygon.contains( &Point::from( to_coord( &inner.destination( 135.0, 10.0)))));
}

#[test]
fn test_corridor_sharp_turns() {
    // inner offsets are bounded for (almost) u-turns
    let p = legs_path( &[0.0, 175.0], 2000.0, 50.0);
    let ring = p.corridor_polygon();
    let corner = p.locations()[1];

    let max_offset = ring.locations().iter().map(|l| l.distance(&corner)).fold( 0.0, f64::max);
    assert!( max_offset <= 2000.0 + 100.0);

    let inner_max = 50.0 / 60f64.to_radians().cos();
    let inner = ring.locations().iter().filter(|l| (l.distance(&corner) - inner_max).abs() < 1.0).count();
    assert_eq!( inner, 1);
}

#[test]
fn test_corridor_skips_duplicates() {
    let a = start();
    let b = a.destination( 0.0, 1000.0);
    let c = b.destination( 0.0, 1000.0);

    let p = Path::with_tolerances( vec![a, a, b, c], vec![50.0; 4]).unwrap();
    let ring = p.corridor_polygon();
    assert_eq!( ring.first(), ring.last());

    // the duplicate start gets the bearing of the next distinct location
    let left_of_dup = ring.locations()[2];
    assert!( (left_of_dup.distance( &a) - 50.0).abs() < 0.5);
    assert!( (a.bearing( &left_of_dup) - 270.0).abs() < 0.5);
}

#[test]
fn test_kml_of_corridor() {
    let p = legs_path( &[0.0, 90.0], 1000.0, 50.0);
    let ring = p.corridor_polygon();

    let kml = ring.to_kml( false);
    assert!( kml.starts_with( "<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!( kml.contains( "<styleUrl>#yellowLineGreenPoly</styleUrl>"));
    assert!( !kml.contains( "<extrude>1</extrude>"));
    assert!( kml.ends_with( "</kml>"));

    let coords: Vec<&str> = kml.lines()
        .skip_while(|l| l.trim() != "<coordinates>").skip(1)
        .take_while(|l| l.trim() != "</coordinates>")
        .collect();
    assert_eq!( coords.len(), ring.num_locations());

    let first: Vec<f64> = coords[0].split(',').map(|v| v.parse().unwrap()).collect();
    assert_eq!( first[0], ring.first().lon());
    assert_eq!( first[1], ring.first().lat());
    assert!( (first[2] - 1915.0 * 0.3048).abs() < 1e-6);

    let kml = ring.to_kml( true);
    assert!( kml.contains( "        <extrude>1</extrude>\n        <altitudeMode>absolute</altitudeMode>"));
}
