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

use std::fmt;
use serde::{de::Deserializer, ser::Serializer, Deserialize, Serialize};

#[inline]
pub fn normalize_90 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

/// angle newtypes that guarantee their value is normalized to the respective range.
/// All constructors normalize, values are stored as f64 degrees
macro_rules! define_angle {
    ($name:ident, $normalize:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug,Clone,Copy,PartialEq,PartialOrd)]
        pub struct $name (f64);

        impl $name {
            #[inline] pub fn from_degrees (deg: f64)->Self { $name( $normalize(deg)) }
            #[inline] pub fn from_radians (rad: f64)->Self { $name( $normalize( rad.to_degrees())) }

            #[inline] pub fn degrees (&self)->f64 { self.0 }
            #[inline] pub fn radians (&self)->f64 { self.0.to_radians() }

            #[inline] pub fn sin (&self)->f64 { self.radians().sin() }
            #[inline] pub fn cos (&self)->f64 { self.radians().cos() }
            #[inline] pub fn tan (&self)->f64 { self.radians().tan() }
        }

        impl fmt::Display for $name {
            fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}deg", self.0) }
        }

        impl From<$name> for f64 {
            fn from (a: $name)->f64 { a.0 }
        }

        impl Serialize for $name {
            fn serialize<S> (&self, serializer: S)->Result<S::Ok,S::Error> where S: Serializer {
                serializer.serialize_f64( self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D> (deserializer: D)->Result<Self,D::Error> where D: Deserializer<'de> {
                let deg = f64::deserialize( deserializer)?;
                Ok( $name::from_degrees( deg))
            }
        }
    };
}

define_angle! { Latitude, normalize_90, "geodetic latitude, normalized to [-90,90] degrees" }
define_angle! { Longitude, normalize_180, "geodetic longitude, normalized to [-180,180] degrees" }
define_angle! { Angle360, normalize_360, "full circle angle (heading, bearing), normalized to [0,360) degrees" }
