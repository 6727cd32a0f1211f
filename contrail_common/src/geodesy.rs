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

/// stateless geodesic functions on the spherical earth model: great circle distance,
/// initial bearing, closest approach of a moving target relative to a fixed observer,
/// circle generation and the web mercator forward projection.
/// Angles are degrees at the API boundary and radians internally. Distances are
/// rounded to one decimal - display precision is all the consumers need and it keeps
/// results stable across feeders

use std::f64::consts::{FRAC_PI_4, PI};

use crate::angle::normalize_360;
use crate::geo::{GeoPoint, PlanarCoord};

/// equatorial earth radius in km (spherical model, no ellipsoid correction)
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// equatorial earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6378137.0;

/// web mercator (EPSG:3857) world edge extremum in meters: EARTH_RADIUS_M * PI.
/// Projected x values of +-180 degrees longitude map exactly onto +-WEB_MERCATOR_MAX_X,
/// which is what antimeridian crossing detection relies on
pub const WEB_MERCATOR_MAX_X: f64 = 20037508.342789244;

const KM_PER_NM: f64 = 1.852;

/// rounding policy for km and degree results (one decimal, half away from zero)
#[inline]
pub fn round1 (x: f64)->f64 { (x * 10.0).round() / 10.0 }

/// great circle distance between two positions in km (haversine formula),
/// rounded to one decimal
pub fn distance_km (lat1: f64, lon1: f64, lat2: f64, lon2: f64)->f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lam = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lam / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2( (1.0 - a).sqrt());

    round1( EARTH_RADIUS_KM * c)
}

/// initial bearing from position 1 towards position 2 in degrees [0,360),
/// rounded to one decimal
pub fn bearing_deg (lat1: f64, lon1: f64, lat2: f64, lon2: f64)->f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_lam = (lon2 - lon1).to_radians();

    let y = d_lam.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lam.cos();

    normalize_360( round1( normalize_360( y.atan2(x).to_degrees())))
}

/// destination point reached from a start position along a bearing over a (possibly
/// negative) distance, using the direct spherical formula
pub fn project_point (lat: f64, lon: f64, bearing_deg: f64, distance_km: f64)->GeoPoint {
    let delta = distance_km / EARTH_RADIUS_KM; // angular distance
    let theta = bearing_deg.to_radians();
    let phi1 = lat.to_radians();
    let lam1 = lon.to_radians();

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lam2 = lam1 + (theta.sin() * delta.sin() * phi1.cos()).atan2( delta.cos() - phi1.sin() * phi2.sin());

    GeoPoint::from_lon_lat_degrees( lam2.to_degrees(), phi2.to_degrees())
}

/// time in seconds to cover distance_km at speed_kn. None for unknown or non-positive
/// speed - ETA is an optional display value and must not fail on partial telemetry
pub fn eta_seconds (distance_km: f64, speed_kn: Option<f64>)->Option<f64> {
    match speed_kn {
        Some(kn) if kn > 0.0 => Some( distance_km / KM_PER_NM / kn * 3600.0),
        _ => None
    }
}

/// closest approach ("point of minimum distance") of an entity moving along its current
/// heading, relative to a fixed observer position. The entity path is modeled as a
/// straight (great circle) line
#[derive(Debug,Clone,PartialEq)]
pub struct ClosestApproach {
    pub position: GeoPoint,

    /// signed path distance from the current entity position to the closest approach
    /// point. The sign follows the angle between the observer-to-entity bearing and the
    /// entity heading: negative while that angle is obtuse (entity closing in on the
    /// observer side of its path)
    pub remaining_distance_km: f64,

    pub min_distance_km: f64,

    /// None if the entity speed is unknown or non-positive, negative iff
    /// remaining_distance_km is negative
    pub eta_seconds: Option<f64>,

    pub bearing_from_observer: f64,
}

pub fn closest_approach (observer_lat: f64, observer_lon: f64,
                         entity_lat: f64, entity_lon: f64,
                         heading_deg: f64, speed_kn: Option<f64>)->ClosestApproach {
    let distance = distance_km( entity_lat, entity_lon, observer_lat, observer_lon);
    let theta = bearing_deg( observer_lat, observer_lon, entity_lat, entity_lon);
    let alpha = (theta - heading_deg).abs().to_radians();

    let remaining_distance_km = round1( distance * alpha.cos());
    let min_distance_km = round1( (distance * alpha.sin()).abs());

    let position = project_point( entity_lat, entity_lon, heading_deg, remaining_distance_km);
    let eta_seconds = eta_seconds( remaining_distance_km, speed_kn);
    let bearing_from_observer = bearing_deg( observer_lat, observer_lon,
                                             position.latitude_degrees(), position.longitude_degrees());

    ClosestApproach { position, remaining_distance_km, min_distance_km, eta_seconds, bearing_from_observer }
}

/// vertices of a circle with given radius (in meters) around a center position,
/// generated with the direct spherical formula at bearing increments of 360/n_points.
/// Returns n_points+1 vertices so that the polyline closes on itself
pub fn geodesic_circle (center: &GeoPoint, radius_m: f64, n_points: usize)->Vec<GeoPoint> {
    let n = n_points.max(1);
    let mut vs: Vec<GeoPoint> = Vec::with_capacity( n + 1);

    let angular_distance = radius_m / EARTH_RADIUS_M;
    let phi1 = center.latitude().radians();
    let lam1 = center.longitude().radians();

    for i in 0..=n {
        let bearing = (i as f64) * 2.0 * PI / (n as f64);

        let phi2 = (phi1.sin() * angular_distance.cos() + phi1.cos() * angular_distance.sin() * bearing.cos()).asin();
        let lam2 = lam1 + (bearing.sin() * angular_distance.sin() * phi1.cos()).atan2( angular_distance.cos() - phi1.sin() * phi2.sin());

        vs.push( GeoPoint::from_lon_lat_degrees( lam2.to_degrees(), phi2.to_degrees()));
    }
    vs
}

/// EPSG:4326 -> EPSG:3857 (web mercator) forward projection, x/y in meters.
/// Longitudes of exactly +-180 degrees must project onto exactly +-WEB_MERCATOR_MAX_X
/// (the antimeridian guard compares against those constants), hence x is computed as a
/// fraction of the world edge instead of via to_radians(). The y value is clamped to
/// the world edge so that near-pole latitudes stay finite
pub fn web_mercator (lon: f64, lat: f64)->PlanarCoord {
    let x = lon / 180.0 * WEB_MERCATOR_MAX_X;
    let y = (EARTH_RADIUS_M * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln())
        .clamp( -WEB_MERCATOR_MAX_X, WEB_MERCATOR_MAX_X);

    PlanarCoord { x, y }
}
