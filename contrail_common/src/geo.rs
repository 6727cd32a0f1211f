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

/// geographic geometry types. Following Contrail design principles we build on the
/// [geo](https://docs.rs/geo/latest/geo/index.html) foundation crate and use the Rust
/// new type pattern to add value semantics (normalized degrees) on top of it.
/// The exception is GeoRect, which has to represent antimeridian-wrapping view extents
/// (west > east) that a geo::Rect cannot hold

use std::fmt;
use geo::{Coord, Point};
use serde::{Deserialize, Serialize};
use serde::ser::{SerializeStruct, Serializer};
use serde::de::Deserializer;

use crate::angle::{normalize_180, normalize_90, Latitude, Longitude};

/// planar (projected) coordinate in meters
pub type PlanarCoord = Coord<f64>;

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat (lon: Longitude, lat: Latitude) -> Self {
        GeoPoint( Point::new( lon.degrees(), lat.degrees()))
    }

    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( normalize_180(lon), normalize_90(lat)))
    }

    pub fn longitude (&self)->Longitude { Longitude::from_degrees( self.0.x()) }
    pub fn latitude (&self)->Latitude { Latitude::from_degrees( self.0.y()) }

    #[inline] pub fn longitude_degrees (&self)->f64 { self.0.x() }
    #[inline] pub fn latitude_degrees (&self)->f64 { self.0.y() }

    pub fn point<'a> (&'a self)->&'a Point { &self.0 }
    pub fn coord (&self)->PlanarCoord { self.0.0 }
}

impl fmt::Display for GeoPoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0.x(), self.0.y())
    }
}

impl Serialize for GeoPoint {
    fn serialize<S> (&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoPoint", 2)?;
        state.serialize_field("lon", &self.longitude_degrees())?;
        state.serialize_field("lat", &self.latitude_degrees())?;
        state.end()
    }
}

// we support alternative input field names so that we can directly deserialize data that
// was serialized by `geo` types ("x","y") or verbose telemetry sources ("longitude","latitude")
#[derive(Deserialize)]
struct LonLatFields {
    #[serde(alias="longitude", alias="x")]
    lon: f64,
    #[serde(alias="latitude", alias="y")]
    lat: f64,
}

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D> (deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let fields = LonLatFields::deserialize( deserializer)?;
        Ok( GeoPoint::from_lon_lat_degrees( fields.lon, fields.lat))
    }
}

/* #endregion GeoPoint */

/* #region GeoRect ***********************************************************************************************/

/// a geographic bounding box in degrees, used as the map view extent. Unlike a plain
/// geo::Rect this supports antimeridian wraparound: west > east means the extent crosses
/// the 180 degree meridian. The latitude band never wraps
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeoRect {
    pub west: Longitude,
    pub south: Latitude,
    pub east: Longitude,
    pub north: Latitude,
}

impl GeoRect {
    pub fn from_wsen (west: Longitude, south: Latitude, east: Longitude, north: Latitude) -> Self {
        GeoRect { west, south, east, north }
    }

    pub fn from_wsen_degrees (west: f64, south: f64, east: f64, north: f64) -> Self {
        GeoRect {
            west: Longitude::from_degrees(west),
            south: Latitude::from_degrees(south),
            east: Longitude::from_degrees(east),
            north: Latitude::from_degrees(north),
        }
    }

    pub fn whole_world () -> Self {
        GeoRect::from_wsen_degrees( -180.0, -90.0, 180.0, 90.0)
    }

    /// answer if the extent covers all longitudes, i.e. its raw longitude span exceeds
    /// half the world circumference
    #[inline]
    pub fn is_all_longitudes (&self)->bool {
        self.east.degrees() - self.west.degrees() > 180.0
    }

    pub fn contains_lon_lat_degrees (&self, lon: f64, lat: f64)->bool {
        if lat < self.south.degrees() || lat > self.north.degrees() { return false }

        let west = self.west.degrees();
        let east = self.east.degrees();

        if self.is_all_longitudes() {
            true // all longitudes in view, latitude band was already checked
        } else if west < east {
            // no wraparound: view not crossing the 179 to -180 transition line
            lon > west && lon < east
        } else {
            // wraparound: view crossing the 179 to -180 transition line
            lon > west || lon < east
        }
    }

    #[inline]
    pub fn contains (&self, p: &GeoPoint)->bool {
        self.contains_lon_lat_degrees( p.longitude_degrees(), p.latitude_degrees())
    }
}

impl fmt::Display for GeoRect {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{},{}]", self.west.degrees(), self.south.degrees(), self.east.degrees(), self.north.degrees())
    }
}

/* #endregion GeoRect */
