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

use contrail_common::datetime::EpochMillis;
use contrail_common::geodesy::WEB_MERCATOR_MAX_X;
use contrail_track::markers::RgbPercent;
use contrail_track::trail::{SegmentStyle,TrackSample,Trail};

fn ts (t: i64)->EpochMillis { EpochMillis::new(t) }

#[test]
fn test_segment_emission () {
    let mut trail = Trail::new(100);

    // first point of a run emits no segment
    assert!( trail.append_sample( 10.0, 50.0, Some(4000.0), ts(1000), false).is_none());
    assert_eq!( trail.len(), 1);
    assert_eq!( trail.segments().len(), 0);

    // second point emits an altitude colored segment
    {
        let seg = trail.append_sample( 10.1, 50.0, Some(4000.0), ts(3000), false).unwrap();
        assert_eq!( seg.style, SegmentStyle::Altitude( RgbPercent(100.0,100.0,0.0)));
    }
    assert_eq!( trail.segments().len(), 1);

    // re-entry gaps get the dashed discontinuity style
    {
        let seg = trail.append_sample( 11.0, 50.2, Some(4000.0), ts(90000), true).unwrap();
        assert_eq!( seg.style, SegmentStyle::Discontinuity);
    }

    // unknown altitude colors with the unknown bucket, altitude 0 with the ground bucket
    {
        let seg = trail.append_sample( 11.1, 50.2, None, ts(92000), false).unwrap();
        assert_eq!( seg.style, SegmentStyle::Altitude( RgbPercent(25.0,25.0,25.0)));
    }
    {
        let seg = trail.append_sample( 11.2, 50.2, Some(0.0), ts(94000), false).unwrap();
        assert_eq!( seg.style, SegmentStyle::Altitude( RgbPercent(50.0,50.0,50.0)));
    }
}

#[test]
fn test_dedup () {
    let mut trail = Trail::new(100);
    trail.append_sample( 10.0, 50.0, Some(4000.0), ts(1000), false);
    trail.append_sample( 10.1, 50.0, Some(4000.0), ts(3000), false);

    // a position identical to the last recorded one is dropped - no zero length segments
    assert!( trail.append_sample( 10.1, 50.0, Some(4100.0), ts(5000), false).is_none());
    assert_eq!( trail.len(), 2);
    assert_eq!( trail.segments().len(), 1);
}

#[test]
fn test_antimeridian_guard () {
    let mut trail = Trail::new(100);
    trail.append_sample( 179.0, 10.0, Some(30000.0), ts(1000), false);
    trail.append_sample( 180.0, 10.0, Some(30000.0), ts(2000), false);
    assert_eq!( trail.segments().len(), 1);

    // the next point projects onto the opposite world edge - the connecting segment
    // would span the whole map and must be suppressed
    assert!( trail.append_sample( -180.0, 10.05, Some(30000.0), ts(3000), false).is_none());
    assert_eq!( trail.len(), 3);
    assert_eq!( trail.segments().len(), 1);

    // the run continues on the other side
    trail.append_sample( -179.0, 10.1, Some(30000.0), ts(4000), false);
    assert_eq!( trail.segments().len(), 2);

    // no emitted segment ever spans opposite world edges
    for seg in trail.segments() {
        let spans = (seg.start.x == WEB_MERCATOR_MAX_X && seg.end.x == -WEB_MERCATOR_MAX_X) ||
                    (seg.start.x == -WEB_MERCATOR_MAX_X && seg.end.x == WEB_MERCATOR_MAX_X);
        assert!( !spans, "segment spans the world edge");
    }
}

#[test]
fn test_reset_and_clear () {
    let mut trail = Trail::new(100);
    trail.append_sample( 10.0, 50.0, Some(1000.0), ts(1000), false);
    trail.append_sample( 10.1, 50.0, Some(1000.0), ts(2000), false);
    assert_eq!( trail.segments().len(), 1);

    // reset starts a new run but keeps already emitted segments
    trail.reset();
    assert!( trail.is_empty());
    assert_eq!( trail.segments().len(), 1);

    assert!( trail.append_sample( 12.0, 51.0, Some(1000.0), ts(3000), false).is_none());
    assert_eq!( trail.segments().len(), 1); // no segment back to pre-reset points
    trail.append_sample( 12.1, 51.0, Some(1000.0), ts(4000), false);
    assert_eq!( trail.segments().len(), 2);

    trail.clear();
    assert!( trail.is_empty());
    assert_eq!( trail.segments().len(), 0);
}

#[test]
fn test_rebuild () {
    let samples = vec![
        TrackSample { lon: 10.0, lat: 50.0, altitude_ft: Some(4000.0), timestamp: ts(1000), is_discontinuous: false },
        TrackSample { lon: 10.1, lat: 50.0, altitude_ft: Some(4500.0), timestamp: ts(2000), is_discontinuous: false },
        TrackSample { lon: 10.5, lat: 50.1, altitude_ft: Some(6000.0), timestamp: ts(60000), is_discontinuous: true },
        TrackSample { lon: 10.6, lat: 50.1, altitude_ft: Some(6500.0), timestamp: ts(61000), is_discontinuous: false },
    ];

    let mut trail = Trail::new(100);
    trail.rebuild( &samples);

    assert_eq!( trail.len(), 4);
    assert_eq!( trail.segments().len(), 3);
    assert_eq!( trail.segments()[1].style, SegmentStyle::Discontinuity);
    assert_eq!( trail.segments()[2].style, SegmentStyle::Altitude( RgbPercent(0.0,100.0,0.0)));

    // rebuild replaces previous state
    trail.rebuild( &samples[0..2]);
    assert_eq!( trail.len(), 2);
    assert_eq!( trail.segments().len(), 1);
}

#[test]
fn test_bounded_samples () {
    let mut trail = Trail::new(5);
    for i in 0..10 {
        trail.append_sample( 10.0 + 0.1 * (i as f64), 50.0, Some(1000.0), ts(i as i64), false);
    }
    assert_eq!( trail.len(), 5);
    assert!( trail.segments().len() <= 5);
}
