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

use serde::{Serialize,Deserialize};
use strum::{Display,EnumString};

use contrail_common::{datetime::EpochMillis, geo::GeoPoint};
use crate::errors::Result;
use crate::trail::TrackSample;

/// category used if a record does not carry one (ADS-B emitter category "no info")
pub const DEFAULT_CATEGORY: &str = "A0";

/// kind of tracked entity, derived from category/type at ingestion
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize,Display,EnumString)]
#[strum(serialize_all="lowercase")]
#[serde(rename_all="lowercase")]
pub enum EntityKind {
    Aircraft,
    Ship,
    Spacecraft
}

impl EntityKind {
    pub fn of (category: &str, type_designator: &str)->Self {
        if category == "B7" || type_designator == "ISS" { EntityKind::Spacecraft }
        else if category == "SHIP" { EntityKind::Ship }
        else { EntityKind::Aircraft }
    }
}

/// one entity record of a snapshot batch, as delivered by the snapshot source.
/// All fields except `id` are optional since heterogeneous feeders routinely deliver
/// partial records. Missing fields resolve to their documented defaults exactly once,
/// when the record is applied to the store - they are not re-checked downstream
#[derive(Serialize,Deserialize,Debug,Clone,Default)]
#[serde(rename_all="camelCase", default)]
pub struct EntityRecord {
    /// unique, stable entity identifier (icao24 hex code, MMSI, "ISS", ...).
    /// A record without id is malformed and skipped by the store
    pub id: String,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// barometric altitude in ft
    pub altitude: Option<f64>,
    pub on_ground: bool,

    /// track over ground in degrees [0,360)
    pub track: Option<f64>,
    /// ground speed in knots
    pub speed: Option<f64>,
    /// vertical rate in fpm
    pub vertical_rate: Option<f64>,

    /// emitter category ("A3", "B7", "SHIP", ...)
    pub category: Option<String>,
    /// type designator ("A320", "B744", ...)
    #[serde(rename="type")]
    pub type_designator: Option<String>,

    pub callsign: Option<String>,
    pub registration: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,

    /// name of the feeder that delivered this record
    pub source: Option<String>,
    pub squawk: Option<String>,

    /// set if this record came from a remote aggregator rather than a local feeder
    pub is_from_remote: bool,

    /// record timestamp in epoch millis - resolves to the ingestion time if absent
    pub timestamp: Option<i64>,

    /// optional server-side trail history, delivered for the selected entity
    pub trail: Option<Vec<TrackSample>>,
}

impl EntityRecord {
    pub fn has_id (&self)->bool { !self.id.trim().is_empty() }

    /// position of this record - None unless both coordinates are present
    pub fn position (&self)->Option<GeoPoint> {
        match (self.longitude, self.latitude) {
            (Some(lon), Some(lat)) => Some( GeoPoint::from_lon_lat_degrees( lon, lat)),
            _ => None
        }
    }

    pub fn timestamp_or (&self, now: EpochMillis)->EpochMillis {
        self.timestamp.map( EpochMillis::new).unwrap_or( now)
    }
}

/// parse a snapshot batch from its JSON wire format (array of entity records).
/// Unknown fields are ignored so that richer feeds can be consumed as-is
pub fn parse_snapshot (input: &str)->Result<Vec<EntityRecord>> {
    Ok( serde_json::from_str( input)?)
}
