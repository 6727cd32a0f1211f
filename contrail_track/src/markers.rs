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

/// deterministic derivation of an entity visual identity: altitude color buckets, shape
/// lookup and the cache keys under which the render sink stores its expensive vector
/// icon assets. All functions are side effect free and total - unknown categories/types
/// from live telemetry degrade to documented defaults

use std::collections::HashMap;
use lazy_static::lazy_static;
use serde::{Serialize,Deserialize};

pub const DEFAULT_STROKE_WIDTH: f64 = 0.4;
pub const SELECTED_STROKE_WIDTH: f64 = 1.3;

pub const DEFAULT_STROKE_COLOR: &str = "#000";
/// entities delivered by a remote aggregator get a light stroke
pub const REMOTE_STROKE_COLOR: &str = "#fff";

/// the key field delimiter. Field values are escaped (see escape_field) so that keys
/// stay injective even if a value contains the delimiter
pub const KEY_DELIM: char = '!';

/* #region color buckets ******************************************************************************************/

/// fill color as a percent RGB triple (0..100 per component)
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct RgbPercent (pub f64, pub f64, pub f64);

impl RgbPercent {
    /// brightened variant used for the selected entity. Zero components are floored
    /// first so that pure red/green/blue hues change brightness too
    pub fn brightened (&self)->RgbPercent {
        #[inline] fn up (c: f64)->f64 { (if c == 0.0 { 25.0 * 1.5 } else { c * 1.25 }).min( 100.0) }
        RgbPercent( up(self.0), up(self.1), up(self.2))
    }

    pub fn to_rgb255 (&self)->[u8;3] {
        [ (self.0 * 2.55).round() as u8, (self.1 * 2.55).round() as u8, (self.2 * 2.55).round() as u8 ]
    }

    pub fn to_hex (&self)->String {
        let [r,g,b] = self.to_rgb255();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// the fixed altitude bands. Band upper bounds are inclusive, on-ground reports always
/// map to the ground bucket, unknown or negative altitudes to the "unknown" bucket
pub fn altitude_color (altitude_ft: Option<f64>, on_ground: bool)->RgbPercent {
    if on_ground || altitude_ft == Some(0.0) { return RgbPercent( 50.0, 50.0, 50.0) }

    match altitude_ft {
        Some(a) if a > 0.0       && a <= 1000.0  => RgbPercent( 100.0,  50.0,   0.0),
        Some(a) if a > 1000.0    && a <= 5000.0  => RgbPercent( 100.0, 100.0,   0.0),
        Some(a) if a > 5000.0    && a <= 10000.0 => RgbPercent(   0.0, 100.0,   0.0),
        Some(a) if a > 10000.0   && a <= 20000.0 => RgbPercent(   0.0,  75.0, 100.0),
        Some(a) if a > 20000.0   && a <= 30000.0 => RgbPercent(   0.0,  50.0, 100.0),
        Some(a) if a > 30000.0   && a <= 40000.0 => RgbPercent(  50.0,   0.0, 100.0),
        Some(a) if a > 40000.0   && a <= 1.0e6   => RgbPercent( 100.0,   0.0,   0.0),
        Some(a) if a > 1.0e6                     => RgbPercent( 100.0, 100.0, 100.0),
        _                                        => RgbPercent(  25.0,  25.0,  25.0)
    }
}

pub fn fill_color (altitude_ft: Option<f64>, on_ground: bool, selected: bool)->RgbPercent {
    let rgb = altitude_color( altitude_ft, on_ground);
    if selected { rgb.brightened() } else { rgb }
}

/* #endregion color buckets */

/* #region shape lookup *******************************************************************************************/

/// icon shape designator plus its base scale
pub type ShapeEntry = (&'static str, f64);

pub const UNIDENTIFIED_SHAPE: ShapeEntry = ("unidentified", 1.0);

lazy_static! {
    /// type designator keyed shape table (checked first)
    static ref TYPE_SHAPES: HashMap<&'static str, ShapeEntry> = HashMap::from([
        ("A19N", ("a320", 1.0)), ("A20N", ("a320", 1.0)), ("A21N", ("a320", 1.05)),
        ("A318", ("a320", 0.96)), ("A319", ("a320", 0.98)), ("A320", ("a320", 1.0)), ("A321", ("a320", 1.05)),
        ("A332", ("heavy_2e", 1.25)), ("A333", ("heavy_2e", 1.25)), ("A359", ("heavy_2e", 1.3)),
        ("A343", ("heavy_4e", 1.3)), ("A388", ("heavy_4e", 1.45)),
        ("B737", ("b737", 1.0)), ("B738", ("b737", 1.0)), ("B739", ("b737", 1.05)),
        ("B744", ("heavy_4e", 1.4)), ("B748", ("heavy_4e", 1.4)),
        ("B763", ("heavy_2e", 1.2)), ("B772", ("heavy_2e", 1.3)), ("B77W", ("heavy_2e", 1.35)),
        ("B788", ("heavy_2e", 1.25)), ("B789", ("heavy_2e", 1.3)),
        ("C152", ("cessna", 0.75)), ("C172", ("cessna", 0.8)), ("SR22", ("cessna", 0.8)),
        ("PC12", ("hi_perf", 0.85)),
        ("CRJ9", ("jet_nonswept", 0.92)), ("E170", ("jet_swept", 0.95)), ("E190", ("jet_swept", 0.98)),
        ("AT76", ("twin_large", 0.95)), ("DH8D", ("twin_large", 0.95)),
        ("EC35", ("helicopter", 0.9)), ("R44", ("helicopter", 0.8)),
        ("ISS", ("spacecraft", 1.6)),
    ]);

    /// category keyed fallback table
    static ref CATEGORY_SHAPES: HashMap<&'static str, ShapeEntry> = HashMap::from([
        ("A0", ("unidentified", 1.0)),
        ("A1", ("cessna", 0.9)),
        ("A2", ("jet_nonswept", 0.95)),
        ("A3", ("airliner", 1.0)),
        ("A4", ("heavy_2e", 1.2)),
        ("A5", ("heavy_4e", 1.3)),
        ("A6", ("hi_perf", 1.0)),
        ("A7", ("helicopter", 0.9)),
        ("B1", ("glider", 0.9)),
        ("B2", ("balloon", 0.8)),
        ("B4", ("glider", 0.8)),
        ("B6", ("uav", 0.7)),
        ("B7", ("spacecraft", 1.5)),
        ("C0", ("ground_vehicle", 0.6)),
        ("C1", ("ground_vehicle", 0.6)),
        ("C2", ("ground_vehicle", 0.6)),
        ("C3", ("ground_vehicle", 0.6)),
        ("SHIP", ("ship", 1.1)),
    ]);
}

/// shape lookup: the type designator table wins over the category table, everything
/// else renders as "unidentified" at scale 1
pub fn shape_designator (category: &str, type_designator: &str)->ShapeEntry {
    if let Some(e) = TYPE_SHAPES.get( type_designator) { return *e }
    if let Some(e) = CATEGORY_SHAPES.get( category) { return *e }
    UNIDENTIFIED_SHAPE
}

/// icon scale from a table base scale. The constants are the global scale factor and
/// the per-zoom-step exponentiation at the default zoom level
pub fn icon_scale (base_scale: f64)->f64 {
    let scale_factor = 1.18 * 1.3f64.powi(1);
    scale_factor * (base_scale * 0.96)
}

/* #endregion shape lookup */

/* #region render keys ********************************************************************************************/

/// escape the key delimiter (and the escape char itself) in a field value. Keys have to
/// be injective over their inputs - a raw concat would collide once a callsign or color
/// string contains the delimiter
fn escape_field (s: &str)->String {
    let mut r = String::with_capacity( s.len());
    for c in s.chars() {
        match c {
            '\\' => r.push_str("\\\\"),
            KEY_DELIM => r.push_str("\\!"),
            _ => r.push(c)
        }
    }
    r
}

/// cache key for the vector icon asset of a marker
pub fn marker_key (fill_color: &RgbPercent, shape_id: &str, stroke_width: f64, stroke_color: &str)->String {
    format!("{}!{}!{}!{}", fill_color.to_hex(), escape_field(shape_id), stroke_width, escape_field(stroke_color))
}

/// cache key for the full marker style (icon plus optional label). The label carries a
/// presence tag so that a missing label stays distinguishable from an empty one
pub fn style_key (marker_key: &str, label: Option<&str>, scale: f64)->String {
    match label {
        Some(text) => format!("{}!+{}!{}", marker_key, escape_field(text), scale),
        None => format!("{}!-!{}", marker_key, scale)
    }
}

/// the cached visual identity of an entity. The keys change iff one of their inputs
/// changes, which is what lets the render sink share icon/style assets between
/// entities with the same appearance
#[derive(Debug,Clone,PartialEq)]
pub struct MarkerState {
    pub fill_color: RgbPercent,
    pub shape_id: &'static str,
    pub scale: f64,
    pub stroke_width: f64,
    pub stroke_color: &'static str,
    pub label: Option<String>,

    pub marker_key: String,
    pub style_key: String,
}

pub fn marker_state (altitude_ft: Option<f64>, on_ground: bool, selected: bool, is_remote: bool,
                     category: &str, type_designator: &str, label: Option<&str>)->MarkerState {
    let fill_color = fill_color( altitude_ft, on_ground, selected);
    let (shape_id, base_scale) = shape_designator( category, type_designator);
    let scale = icon_scale( base_scale);
    let stroke_width = if selected { SELECTED_STROKE_WIDTH } else { DEFAULT_STROKE_WIDTH };
    let stroke_color = if is_remote { REMOTE_STROKE_COLOR } else { DEFAULT_STROKE_COLOR };

    let marker_key = marker_key( &fill_color, shape_id, stroke_width, stroke_color);
    let style_key = style_key( &marker_key, label, scale);

    MarkerState {
        fill_color, shape_id, scale, stroke_width, stroke_color,
        label: label.map( |s| s.to_string()),
        marker_key, style_key
    }
}

/* #endregion render keys */
