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

use std::time::Duration;
use contrail_track::actor::TrackerConfig;
use contrail_track::snapshot::{parse_snapshot,EntityKind,EntityRecord};

#[test]
fn test_parse_snapshot () {
    let input = r#"[
        { "id": "3c6444", "latitude": 48.35, "longitude": 11.78, "altitude": 12000.0,
          "track": 270.5, "speed": 420.0, "category": "A3", "type": "A320",
          "callsign": "DLH9U", "onGround": false, "timestamp": 1700000000000,
          "rssi": -12.4 },
        { "id": "ISS", "latitude": 51.2, "longitude": -30.0, "type": "ISS", "category": "B7" },
        { "latitude": 10.0, "longitude": 10.0 }
    ]"#;

    let records = parse_snapshot( input).unwrap();
    assert_eq!( records.len(), 3);

    let r = &records[0];
    assert_eq!( r.id, "3c6444");
    assert_eq!( r.type_designator.as_deref(), Some("A320"));
    assert_eq!( r.callsign.as_deref(), Some("DLH9U"));
    assert_eq!( r.altitude, Some(12000.0));
    assert_eq!( r.timestamp, Some(1700000000000));
    assert!( r.has_id());
    assert!( r.position().is_some());

    // partial records parse with defaults
    let r = &records[1];
    assert_eq!( r.altitude, None);
    assert!( !r.on_ground);

    // records without id parse but are flagged malformed
    assert!( !records[2].has_id());

    // a syntactically broken batch is a proper error, not a panic
    assert!( parse_snapshot( "[{").is_err());
}

#[test]
fn test_entity_kind () {
    assert_eq!( EntityKind::of( "A3", "A320"), EntityKind::Aircraft);
    assert_eq!( EntityKind::of( "B7", ""), EntityKind::Spacecraft);
    assert_eq!( EntityKind::of( "A0", "ISS"), EntityKind::Spacecraft);
    assert_eq!( EntityKind::of( "SHIP", ""), EntityKind::Ship);
    assert_eq!( EntityKind::of( "", ""), EntityKind::Aircraft);

    assert_eq!( EntityKind::Spacecraft.to_string(), "spacecraft");
}

#[test]
fn test_tracker_config () {
    let config = TrackerConfig::default();
    assert_eq!( config.update_interval, Duration::from_secs(2));
    assert_eq!( config.eviction_interval, Duration::from_secs(30));
    assert_eq!( config.drop_after, Duration::from_secs(20));

    let config = TrackerConfig::from_ron( include_str!("../config/tracker.ron")).unwrap();
    assert_eq!( config.source, "replay");
    assert_eq!( config.drop_after, Duration::from_secs(20));
    assert!( config.settings.show_labels);

    let observer = config.settings.observer.unwrap();
    assert_eq!( observer.latitude_degrees(), 53.55);

    // partial configs fall back to defaults
    let config = TrackerConfig::from_ron( r#"( source: "sbs" )"#).unwrap();
    assert_eq!( config.source, "sbs");
    assert_eq!( config.drop_after, Duration::from_secs(20));

    assert!( TrackerConfig::from_ron( "not a config").is_err());
}
