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

/// incremental construction of a per-entity trail: time ordered samples are projected to
/// web mercator and connected into colored line segments, one segment per consecutive
/// sample pair. Re-entry gaps get a dashed style, everything else the altitude band
/// color of its newer endpoint

use std::collections::VecDeque;
use serde::{Serialize,Deserialize};

use contrail_common::collections::RingDeque;
use contrail_common::datetime::EpochMillis;
use contrail_common::geo::PlanarCoord;
use contrail_common::geodesy::{web_mercator, WEB_MERCATOR_MAX_X};

use crate::markers::{altitude_color, RgbPercent};

/// one recorded track position of an entity
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct TrackSample {
    pub lon: f64,
    pub lat: f64,
    pub altitude_ft: Option<f64>,
    pub timestamp: EpochMillis,
    /// set if the entity re-entered coverage, i.e. a reception gap precedes this sample
    #[serde(default)]
    pub is_discontinuous: bool,
}

#[derive(Debug,Clone,PartialEq)]
pub enum SegmentStyle {
    /// fixed dashed style marking a re-entry gap
    Discontinuity,
    /// solid, colored by the altitude band of the newer endpoint
    Altitude(RgbPercent),
}

/// a drawable trail piece between two projected positions
#[derive(Debug,Clone,PartialEq)]
pub struct TrackSegment {
    pub start: PlanarCoord,
    pub end: PlanarCoord,
    pub style: SegmentStyle,
}

/// the per-entity trail state. Samples and projected points are kept in a bounded ring,
/// segments mirror what was handed to the render sink
#[derive(Debug)]
pub struct Trail {
    max_len: usize, // 0 = unbounded

    samples: VecDeque<TrackSample>,
    points: VecDeque<PlanarCoord>,
    segments: VecDeque<TrackSegment>,
}

impl Trail {
    pub fn new (max_len: usize)->Self {
        Trail {
            max_len,
            samples: VecDeque::new(),
            points: VecDeque::new(),
            segments: VecDeque::new(),
        }
    }

    pub fn len (&self)->usize { self.samples.len() }
    pub fn is_empty (&self)->bool { self.samples.is_empty() }

    pub fn samples (&self)->&VecDeque<TrackSample> { &self.samples }
    pub fn segments (&self)->&VecDeque<TrackSegment> { &self.segments }

    pub fn last_sample (&self)->Option<&TrackSample> { self.samples.back() }

    /// append a sample and emit the segment connecting it to the previous point.
    /// Returns None if no segment was emitted: first point of a run, duplicate position,
    /// or a suppressed antimeridian crossing
    pub fn append_sample (&mut self, lon: f64, lat: f64, altitude_ft: Option<f64>,
                          timestamp: EpochMillis, is_discontinuous: bool)->Option<&TrackSegment> {
        // identical consecutive positions would produce zero length segments
        if let Some(last) = self.samples.back() {
            if last.lon == lon && last.lat == lat { return None }
        }

        let p = web_mercator( lon, lat);
        self.samples.push_bounded( self.max_len, TrackSample { lon, lat, altitude_ft, timestamp, is_discontinuous });
        self.points.push_bounded( self.max_len, p);

        if self.points.len() > 1 {
            let end = self.points[ self.points.len()-2];
            let start = p;

            // suppress segments whose endpoints sit on opposite world edges - they would
            // draw a spurious line across the whole map instead of the (invisible)
            // antimeridian crossing
            if is_world_edge_crossing( &start, &end) { return None }

            let style = if is_discontinuous {
                SegmentStyle::Discontinuity
            } else {
                let on_ground = altitude_ft.is_some_and( |a| a <= 0.0);
                SegmentStyle::Altitude( altitude_color( altitude_ft, on_ground))
            };

            self.segments.push_bounded( self.max_len, TrackSegment { start, end, style });
            self.segments.back()
        } else {
            None
        }
    }

    /// rebuild the segment list from a complete (server provided) sample history
    pub fn rebuild (&mut self, samples: &[TrackSample]) {
        self.clear();
        for s in samples {
            self.append_sample( s.lon, s.lat, s.altitude_ft, s.timestamp, s.is_discontinuous);
        }
    }

    /// restart the trail: clears the sample buffer so that the next append starts a new
    /// run. Segments already emitted are left alone - whether they stay visible is up
    /// to the caller (see clear)
    pub fn reset (&mut self) {
        self.samples.clear();
        self.points.clear();
    }

    /// reset plus drop all emitted segments
    pub fn clear (&mut self) {
        self.reset();
        self.segments.clear();
    }
}

#[inline]
fn is_world_edge_crossing (a: &PlanarCoord, b: &PlanarCoord)->bool {
    (a.x == WEB_MERCATOR_MAX_X && b.x == -WEB_MERCATOR_MAX_X) ||
    (a.x == -WEB_MERCATOR_MAX_X && b.x == WEB_MERCATOR_MAX_X)
}
