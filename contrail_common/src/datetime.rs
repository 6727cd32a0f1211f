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

use std::{fmt, time::Duration};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Serialize, Deserialize};

/// millisecond epoch timestamp. Msec is enough precision for live telemetry and keeps
/// timestamp arrays dense
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub struct EpochMillis(i64);

impl EpochMillis {
    pub fn now ()->Self { EpochMillis( Utc::now().timestamp_millis()) }

    pub fn new (millis: i64)->Self { EpochMillis(millis) }

    pub fn from_secs (secs: i64)->Self { EpochMillis( secs * 1000) }

    pub fn millis (&self)->i64 { self.0 }

    /// millis elapsed since the (earlier) argument - negative if argument is later
    pub fn since (&self, earlier: EpochMillis)->i64 { self.0 - earlier.0 }

    /// answer if self is older than max_age with respect to the given current time
    pub fn is_older_than (&self, now: EpochMillis, max_age: Duration)->bool {
        now.0 - self.0 > max_age.as_millis() as i64
    }
}

impl fmt::Display for EpochMillis {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::<Utc>::from_timestamp_millis(self.0) {
            Some(dt) => write!(f, "{}", dt),
            None => write!(f, "{}ms", self.0)
        }
    }
}

impl<Tz> From<DateTime<Tz>> for EpochMillis where Tz: TimeZone {
    fn from (date: DateTime<Tz>)->Self { EpochMillis( date.timestamp_millis()) }
}

// as of Rust 1.87 the min,hour,day Duration ctors are still experimental. For simple use
// cases that do not involve leap seconds we provide our own wrappers
#[inline] pub fn millis (n: u64)->Duration { Duration::from_millis(n) }
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
#[inline] pub fn minutes (n: u64)->Duration { Duration::from_secs( n * 60) }
#[inline] pub fn hours (n: u64)->Duration { Duration::from_secs( n * 3600) }

#[inline]
pub fn epoch_millis ()->i64 {
    Utc::now().timestamp_millis()
}
