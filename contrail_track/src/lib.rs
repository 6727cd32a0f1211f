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

use std::{collections::{hash_map::Entry, HashMap}, fmt, sync::Arc, time::Duration};
use serde::{Serialize,Deserialize};
use uom::si::{f64::{Length,Velocity}, length::foot, velocity::{foot_per_minute,knot}};
use tracing::{debug,warn};

use contrail_common::{
    angle::Angle360,
    datetime::EpochMillis,
    geo::{GeoPoint,GeoRect},
    geodesy::{self,ClosestApproach},
};

pub mod snapshot;
use snapshot::{EntityKind, EntityRecord, DEFAULT_CATEGORY};

pub mod markers;
use markers::MarkerState;

pub mod trail;
use trail::Trail;

pub mod actor;

pub mod errors;
use errors::Result;

/// store level settings - plain values handed in by external configuration
#[derive(Debug,Clone,Copy,Serialize,Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// observer (receiver/device) position used for distance, bearing and closest
    /// approach computation
    pub observer: Option<GeoPoint>,

    /// include the callsign label in the marker style
    pub show_labels: bool,

    /// max number of trail samples kept per entity (0 = unbounded)
    pub max_trail: usize,
}

impl Default for StoreSettings {
    fn default ()->Self {
        StoreSettings { observer: None, show_labels: false, max_trail: 1000 }
    }
}

/// the data model for a tracked entity (aircraft, ship, spacecraft)
#[derive(Debug)]
pub struct TrackedEntity {
    pub id: Arc<String>, // kept in an Arc so that we can clone without heap allocation
    pub kind: EntityKind,

    pub position: Option<GeoPoint>,
    pub altitude: Option<Length>,
    pub on_ground: bool,
    pub track: Option<Angle360>,
    pub speed: Option<Velocity>,
    pub vertical_rate: Option<Velocity>,

    pub category: String,        // resolved, DEFAULT_CATEGORY if the feed had none
    pub type_designator: String, // resolved, empty if the feed had none
    pub callsign: Option<String>,
    pub registration: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub source: Option<String>,
    pub squawk: Option<String>,
    pub is_from_remote: bool,

    //--- locally owned state, never overwritten by snapshots
    pub is_selected: bool,
    pub marker: MarkerState,
    pub trail: Trail,

    //--- derived geometry, recomputed on every update
    pub observer_distance_km: Option<f64>,
    pub observer_bearing_deg: Option<f64>,
    pub closest_approach: Option<ClosestApproach>,

    pub last_update: EpochMillis,
}

impl TrackedEntity {
    fn new (rec: &EntityRecord, now: EpochMillis, settings: &StoreSettings)->Self {
        let category = rec.category.clone().unwrap_or_else( || DEFAULT_CATEGORY.to_string());
        let type_designator = rec.type_designator.clone().unwrap_or_default();
        let kind = EntityKind::of( &category, &type_designator);

        let label = if settings.show_labels { rec.callsign.as_deref() } else { None };
        let marker = markers::marker_state( rec.altitude, rec.on_ground, false, rec.is_from_remote,
                                            &category, &type_designator, label);

        let mut entity = TrackedEntity {
            id: Arc::new( rec.id.clone()),
            kind,
            position: rec.position(),
            altitude: rec.altitude.map( |a| Length::new::<foot>(a)),
            on_ground: rec.on_ground,
            track: rec.track.map( Angle360::from_degrees),
            speed: rec.speed.map( |v| Velocity::new::<knot>(v)),
            vertical_rate: rec.vertical_rate.map( |v| Velocity::new::<foot_per_minute>(v)),
            category,
            type_designator,
            callsign: rec.callsign.clone(),
            registration: rec.registration.clone(),
            origin: rec.origin.clone(),
            destination: rec.destination.clone(),
            source: rec.source.clone(),
            squawk: rec.squawk.clone(),
            is_from_remote: rec.is_from_remote,
            is_selected: false,
            marker,
            trail: Trail::new( settings.max_trail),
            observer_distance_km: None,
            observer_bearing_deg: None,
            closest_approach: None,
            last_update: rec.timestamp_or( now),
        };
        entity.update_derived( settings);
        entity
    }

    /// merge a snapshot record. Fields the record carries are overwritten, absent
    /// optional fields retain their previous values, locally owned state (selection,
    /// marker cache, trail) is preserved
    fn update (&mut self, rec: &EntityRecord, now: EpochMillis, settings: &StoreSettings) {
        if let Some(p) = rec.position() { self.position = Some(p) }
        if let Some(alt) = rec.altitude { self.altitude = Some( Length::new::<foot>(alt)) }
        self.on_ground = rec.on_ground;
        if let Some(trk) = rec.track { self.track = Some( Angle360::from_degrees(trk)) }
        if let Some(spd) = rec.speed { self.speed = Some( Velocity::new::<knot>(spd)) }
        if let Some(vr) = rec.vertical_rate { self.vertical_rate = Some( Velocity::new::<foot_per_minute>(vr)) }

        if let Some(cat) = &rec.category { self.category = cat.clone() }
        if let Some(t) = &rec.type_designator { self.type_designator = t.clone() }
        if let Some(cs) = &rec.callsign { self.callsign = Some( cs.clone()) }
        if let Some(reg) = &rec.registration { self.registration = Some( reg.clone()) }
        if let Some(org) = &rec.origin { self.origin = Some( org.clone()) }
        if let Some(dst) = &rec.destination { self.destination = Some( dst.clone()) }
        if let Some(src) = &rec.source { self.source = Some( src.clone()) }
        if let Some(sq) = &rec.squawk { self.squawk = Some( sq.clone()) }
        self.is_from_remote = rec.is_from_remote;

        self.kind = EntityKind::of( &self.category, &self.type_designator);
        self.last_update = rec.timestamp_or( now);

        self.update_marker( settings);
        self.update_derived( settings);
    }

    pub fn altitude_ft (&self)->Option<f64> { self.altitude.map( |a| a.get::<foot>()) }
    pub fn speed_kn (&self)->Option<f64> { self.speed.map( |v| v.get::<knot>()) }

    pub fn is_stale (&self, now: EpochMillis, timeout: Duration)->bool {
        self.last_update.is_older_than( now, timeout)
    }

    /// recompute the cached visual identity. The resulting keys only change if one of
    /// their inputs changed, which is what makes them usable for asset caching
    pub fn update_marker (&mut self, settings: &StoreSettings) {
        let label = if settings.show_labels { self.callsign.as_deref() } else { None };
        self.marker = markers::marker_state( self.altitude_ft(), self.on_ground, self.is_selected,
                                             self.is_from_remote, &self.category, &self.type_designator, label);
    }

    /// recompute observer relative geometry. The closest approach is only maintained
    /// for the selected entity
    fn update_derived (&mut self, settings: &StoreSettings) {
        match (&settings.observer, &self.position) {
            (Some(obs), Some(pos)) => {
                self.observer_distance_km = Some( geodesy::distance_km(
                    pos.latitude_degrees(), pos.longitude_degrees(),
                    obs.latitude_degrees(), obs.longitude_degrees()));
                self.observer_bearing_deg = Some( geodesy::bearing_deg(
                    obs.latitude_degrees(), obs.longitude_degrees(),
                    pos.latitude_degrees(), pos.longitude_degrees()));

                self.closest_approach = if self.is_selected {
                    let (pos, obs) = (*pos, *obs);
                    let speed_kn = self.speed_kn();
                    self.track.map( |trk| geodesy::closest_approach(
                        obs.latitude_degrees(), obs.longitude_degrees(),
                        pos.latitude_degrees(), pos.longitude_degrees(),
                        trk.degrees(), speed_kn))
                } else {
                    None
                };
            }
            _ => {
                self.observer_distance_km = None;
                self.observer_bearing_deg = None;
                self.closest_approach = None;
            }
        }
    }

    /// append the current position to the trail (live extension of the selected entity)
    fn extend_trail (&mut self) {
        if let Some(p) = self.position {
            self.trail.append_sample( p.longitude_degrees(), p.latitude_degrees(),
                                      self.altitude_ft(), self.last_update, false);
        }
    }
}

impl fmt::Display for TrackedEntity {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "TrackedEntity( id: {}", self.id);
        if let Some(cs) = &self.callsign { write!( f, ", cs: \"{cs}\""); }
        if let Some(p) = &self.position { write!( f, ", pos: {}", p); }
        if let Some(alt) = self.altitude { write!( f, ", alt: {:.0}", alt.get::<foot>()); }
        if let Some(trk) = self.track { write!( f, ", trk: {:.0}", trk.degrees()); }
        if let Some(spd) = self.speed { write!( f, ", spd: {:.1}", spd.get::<knot>()); }
        if self.is_selected { write!( f, ", selected"); }
        write!( f, ", time: {})", self.last_update)
    }
}

/// per-batch reconciliation counters
#[derive(Debug,Clone,Copy,Default,PartialEq,Serialize)]
pub struct SnapshotStats {
    pub created: usize,
    pub updated: usize,
    pub malformed: usize,
}

/// the snapshot reconciliation engine: owns the current set of tracked entities, keyed
/// by id and iterable in insertion order (first created first - an explicit contract
/// for consumers of the ordered list).
/// All operations assume single threaded, serialized invocation - see actor
pub struct EntityStore {
    source: String,
    settings: StoreSettings,

    entities: HashMap<String,TrackedEntity>,
    order: Vec<Arc<String>>,        // insertion order of live entities
    dropped: Vec<Arc<String>>,      // ids removed in the last eviction cycle
    last_published: EpochMillis,
    n_malformed: u64,
}

impl EntityStore {
    pub fn new (source: String, settings: StoreSettings)->Self {
        EntityStore {
            source,
            settings,
            entities: HashMap::new(),
            order: Vec::new(),
            dropped: Vec::new(),
            last_published: EpochMillis::new(0),
            n_malformed: 0,
        }
    }

    pub fn source (&self)->&str { self.source.as_str() }
    pub fn settings (&self)->&StoreSettings { &self.settings }

    pub fn len (&self)->usize { self.entities.len() }
    pub fn is_empty (&self)->bool { self.entities.is_empty() }

    pub fn get (&self, id: &str)->Option<&TrackedEntity> { self.entities.get( id) }
    pub fn contains (&self, id: &str)->bool { self.entities.contains_key( id) }

    /// entities in insertion order
    pub fn iter_ordered (&self)->impl Iterator<Item=&TrackedEntity> {
        self.order.iter().filter_map( |id| self.entities.get( id.as_str()))
    }

    /// reconcile one snapshot batch: create unknown entities, merge known ones.
    /// Records without id are skipped and counted - a malformed record never aborts
    /// the batch
    pub fn apply_snapshot (&mut self, records: &[EntityRecord])->SnapshotStats {
        let now = EpochMillis::now();
        let settings = self.settings;
        let mut stats = SnapshotStats::default();

        for rec in records {
            if !rec.has_id() {
                self.n_malformed += 1;
                stats.malformed += 1;
                warn!("skipping malformed record without id (source: {:?})", rec.source);
                continue;
            }

            match self.entities.entry( rec.id.clone()) {
                Entry::Occupied(mut o) => {
                    let entity = o.get_mut();
                    entity.update( rec, now, &settings);
                    if entity.is_selected {
                        if let Some(samples) = &rec.trail {
                            entity.trail.rebuild( samples);
                        } else {
                            entity.extend_trail();
                        }
                    }
                    stats.updated += 1;
                }
                Entry::Vacant(v) => {
                    let entity = TrackedEntity::new( rec, now, &settings);
                    self.order.push( entity.id.clone());
                    v.insert( entity);
                    stats.created += 1;
                }
            }
        }
        stats
    }

    /// remove non-selected entities that have not been updated within the timeout.
    /// Removed ids are kept in the dropped list until the next publish cycle
    pub fn evict_stale (&mut self, now: EpochMillis, timeout: Duration)->usize {
        self.evict_if( |e| !e.is_selected && e.is_stale( now, timeout))
    }

    /// remove non-selected entities outside the given view extent. Entities without a
    /// position count as outside
    pub fn evict_outside (&mut self, extent: &GeoRect)->usize {
        self.evict_if( |e| !e.is_selected && !e.position.as_ref().is_some_and( |p| extent.contains(p)))
    }

    // the dropped list accumulates over eviction calls within one update cycle and is
    // only cleared by set_published, so that a cycle with both stale and extent
    // eviction reports all removals
    fn evict_if<F> (&mut self, pred: F)->usize where F: Fn(&TrackedEntity)->bool {
        let n_before = self.dropped.len();

        let entities = &mut self.entities;
        let dropped = &mut self.dropped;
        self.order.retain( |id| {
            let keep = entities.get( id.as_str()).is_some_and( |e| !pred(e));
            if !keep {
                entities.remove( id.as_str());
                dropped.push( id.clone());
            }
            keep
        });
        self.dropped.len() - n_before
    }

    /// mark an entity as selected. Selection restarts its trail, is preserved across
    /// snapshot updates and exempts the entity from eviction. Exclusivity is caller
    /// policy (see actor)
    pub fn select (&mut self, id: &str)->bool {
        let settings = self.settings;
        match self.entities.get_mut( id) {
            Some(entity) => {
                if !entity.is_selected {
                    entity.is_selected = true;
                    entity.trail.reset();
                    entity.extend_trail();
                    entity.update_marker( &settings);
                    entity.update_derived( &settings);
                }
                true
            }
            None => false
        }
    }

    pub fn deselect (&mut self, id: &str)->bool {
        let settings = self.settings;
        match self.entities.get_mut( id) {
            Some(entity) => {
                if entity.is_selected {
                    entity.is_selected = false;
                    entity.update_marker( &settings);
                    entity.update_derived( &settings); // drops the closest approach
                }
                true
            }
            None => false
        }
    }

    pub fn selected (&self)->Option<&TrackedEntity> {
        self.iter_ordered().find( |e| e.is_selected)
    }

    pub fn selected_id (&self)->Option<Arc<String>> {
        self.selected().map( |e| e.id.clone())
    }

    pub fn dropped_list (&self)->&[Arc<String>] { self.dropped.as_slice() }

    /// total number of malformed (id-less) records seen by this store
    pub fn malformed_count (&self)->u64 { self.n_malformed }

    /// collect everything that changed since the last publish into a serializable
    /// summary for the render sink
    pub fn update_summary (&self)->UpdateSummary {
        let updated = self.iter_ordered()
            .filter( |e| e.last_update > self.last_published)
            .map( EntityUpdate::of)
            .collect();
        let removed = self.dropped.iter().map( |id| id.as_ref().clone()).collect();

        UpdateSummary { source: self.source.clone(), updated, removed }
    }

    /// record the publish timestamp and clear the dropped list - everything up to ts
    /// is now known to the render sink
    pub fn set_published (&mut self, ts: EpochMillis) {
        self.last_published = ts;
        self.dropped.clear();
    }
}

/// the per-entity payload handed to the render sink
#[derive(Debug,Serialize)]
#[serde(rename_all="camelCase")]
pub struct EntityUpdate {
    pub id: String,
    pub kind: EntityKind,
    #[serde(skip_serializing_if="Option::is_none")]
    pub position: Option<GeoPoint>,
    #[serde(skip_serializing_if="Option::is_none")]
    pub altitude_ft: Option<f64>,
    #[serde(skip_serializing_if="Option::is_none")]
    pub track_deg: Option<f64>,
    #[serde(skip_serializing_if="Option::is_none")]
    pub speed_kn: Option<f64>,
    #[serde(skip_serializing_if="Option::is_none")]
    pub callsign: Option<String>,

    pub marker_key: String,
    pub style_key: String,
    pub fill_color: String,
    pub shape: String,
    pub scale: f64,

    #[serde(skip_serializing_if="Option::is_none")]
    pub observer_distance_km: Option<f64>,

    pub timestamp: i64,
}

impl EntityUpdate {
    fn of (e: &TrackedEntity)->Self {
        EntityUpdate {
            id: e.id.as_ref().clone(),
            kind: e.kind,
            position: e.position,
            altitude_ft: e.altitude_ft(),
            track_deg: e.track.map( |t| t.degrees()),
            speed_kn: e.speed_kn(),
            callsign: e.callsign.clone(),
            marker_key: e.marker.marker_key.clone(),
            style_key: e.marker.style_key.clone(),
            fill_color: e.marker.fill_color.to_hex(),
            shape: e.marker.shape_id.to_string(),
            scale: e.marker.scale,
            observer_distance_km: e.observer_distance_km,
            timestamp: e.last_update.millis(),
        }
    }
}

/// one render sink update message: entities that changed since the last publish plus
/// the ids removed by eviction
#[derive(Debug,Serialize)]
#[serde(rename_all="camelCase")]
pub struct UpdateSummary {
    pub source: String,
    pub updated: Vec<EntityUpdate>,
    #[serde(skip_serializing_if="Vec::is_empty")]
    pub removed: Vec<String>,
}
