/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “Contrail” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use contrail_common::angle::*;
use contrail_common::geo::*;

/// unit tests for geo types
/// run with "cargo test test_extent -- --nocapture"

#[test]
fn test_geo_point () {
    let p = GeoPoint::from_lon_lat_degrees( -122.0, 37.0);
    println!("p = {p}");
    assert_eq!( p.longitude_degrees(), -122.0);
    assert_eq!( p.latitude_degrees(), 37.0);

    // constructors normalize
    let p = GeoPoint::from_lon_lat_degrees( 200.0, 37.0);
    assert_eq!( p.longitude_degrees(), -160.0);

    // serde roundtrip plus alternative input field names
    let s = serde_json::to_string( &p).unwrap();
    println!("serialized GeoPoint: '{s}'");
    let p1: GeoPoint = serde_json::from_str( &s).unwrap();
    assert_eq!( p, p1);

    let p2: GeoPoint = serde_json::from_str( r#"{ "longitude": -160.0, "latitude": 37.0 }"#).unwrap();
    assert_eq!( p, p2);
    let p3: GeoPoint = serde_json::from_str( r#"{ "x": -160.0, "y": 37.0 }"#).unwrap();
    assert_eq!( p, p3);
}

#[test]
fn test_extent () {
    let rect = GeoRect::from_wsen_degrees( -10.0, 40.0, 10.0, 60.0);

    assert!( rect.contains_lon_lat_degrees( 0.0, 50.0));
    assert!( !rect.contains_lon_lat_degrees( 20.0, 50.0));
    assert!( !rect.contains_lon_lat_degrees( 0.0, 30.0)); // below latitude band
    assert!( !rect.contains_lon_lat_degrees( 0.0, 70.0)); // above latitude band

    // the latitude band is checked regardless of longitude
    assert!( !rect.contains_lon_lat_degrees( 20.0, 70.0));
}

#[test]
fn test_extent_wraparound () {
    // view crossing the 179 to -180 transition line
    let rect = GeoRect::from_wsen_degrees( 170.0, -30.0, -170.0, 30.0);
    println!("wraparound extent: {rect}");

    assert!( rect.contains_lon_lat_degrees( 175.0, 0.0));
    assert!( rect.contains_lon_lat_degrees( -175.0, 0.0));
    assert!( !rect.contains_lon_lat_degrees( 0.0, 0.0));

    // latitude band is never wrapped
    assert!( !rect.contains_lon_lat_degrees( 175.0, 45.0));
}

#[test]
fn test_extent_all_longitudes () {
    // longitude span over half the world circumference means all longitudes are visible
    let rect = GeoRect::from_wsen_degrees( -100.0, -40.0, 100.0, 40.0);
    assert!( rect.is_all_longitudes());

    assert!( rect.contains_lon_lat_degrees( 150.0, 0.0));
    assert!( rect.contains_lon_lat_degrees( -150.0, 0.0));
    assert!( !rect.contains_lon_lat_degrees( 150.0, 50.0)); // latitude still bounds

    let rect = GeoRect::whole_world();
    assert!( rect.contains_lon_lat_degrees( 123.4, -56.7));
}
