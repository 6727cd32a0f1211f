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

/// the single writer service loop around an EntityStore. The store itself is not
/// thread safe and must never see interleaved operations - here it is owned by one
/// task and all mutation arrives over one channel, processed strictly sequentially.
/// Collaborators plug in at two seams: a SnapshotConnector that produces entity record
/// batches on its own schedule, and an UpdateAction that is handed the store after
/// every update cycle (the render sink hook)

use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use kanal::{AsyncReceiver,AsyncSender};
use serde::{Serialize,Deserialize};
use tracing::{debug,error,info,warn};

use contrail_common::datetime::{secs,EpochMillis};
use contrail_common::geo::GeoRect;

use crate::{EntityStore,StoreSettings};
use crate::snapshot::EntityRecord;
use crate::errors::{ContrailTrackError,Result};

/// configuration of a tracker service instance
#[derive(Serialize,Deserialize,Debug,Clone)]
#[serde(default)]
pub struct TrackerConfig {
    /// the snapshot source name
    pub source: String,

    /// interval in which the snapshot source delivers batches
    pub update_interval: Duration,

    /// interval of the stale entity eviction sweep
    pub eviction_interval: Duration,

    /// duration after which un-updated, non-selected entities are dropped
    pub drop_after: Duration,

    pub settings: StoreSettings,
}

impl Default for TrackerConfig {
    fn default ()->Self {
        TrackerConfig {
            source: "default".to_string(),
            update_interval: secs(2),
            eviction_interval: secs(30),
            drop_after: secs(20),
            settings: StoreSettings::default(),
        }
    }
}

impl TrackerConfig {
    pub fn from_ron (input: &str)->Result<Self> {
        Ok( ron::de::from_str( input)?)
    }
}

/// the messages that mutate the store - one queue, one consumer
#[derive(Debug)]
pub enum TrackerMsg {
    Snapshot(Vec<EntityRecord>),
    ViewChanged(GeoRect),
    Select(String),
    Deselect(String),
    Terminate,
}

/// the snapshot source collaborator. Implementations deliver TrackerMsg::Snapshot
/// batches to the provided channel on their own schedule
#[async_trait]
pub trait SnapshotConnector {
    async fn start (&mut self, tx: AsyncSender<TrackerMsg>)->Result<()>;
    fn terminate (&mut self);
}

/// render sink hook, executed with the store after every update cycle
#[async_trait]
pub trait UpdateAction {
    async fn execute (&mut self, store: &EntityStore)->Result<()>;
}

/// service that owns the EntityStore and runs the update/eviction cycle
pub struct TrackerService<C,U> where C: SnapshotConnector + Send, U: UpdateAction + Send {
    config: Arc<TrackerConfig>,
    connector: C,
    update_action: U,

    store: EntityStore,
    view_extent: Option<GeoRect>,
}

impl<C,U> TrackerService<C,U> where C: SnapshotConnector + Send, U: UpdateAction + Send {

    pub fn new (config: TrackerConfig, connector: C, update_action: U)->Self {
        let config = Arc::new( config);
        let store = EntityStore::new( config.source.clone(), config.settings);
        TrackerService { config, connector, update_action, store, view_extent: None }
    }

    pub fn store (&self)->&EntityStore { &self.store }

    /// run until the connector terminates or a Terminate message arrives
    pub async fn run (mut self)->Result<()> {
        let (tx, rx) = kanal::bounded_async::<TrackerMsg>(64);

        self.connector.start( tx).await?;
        info!("tracker service for source '{}' started", self.config.source);

        let mut sweep = tokio::time::interval( self.config.eviction_interval);
        sweep.set_missed_tick_behavior( tokio::time::MissedTickBehavior::Delay);
        sweep.tick().await; // the first tick fires immediately

        loop {
            tokio::select! {
                msg = rx.recv() => {
                    match msg {
                        Ok(msg) => {
                            match self.process( msg).await {
                                Ok(true) => {}
                                Ok(false) => break,
                                Err(e) => error!("update failed: {:?}", e)
                            }
                        }
                        Err(_) => break // all senders gone - connector terminated
                    }
                }
                _ = sweep.tick() => {
                    let now = EpochMillis::now();
                    let n = self.store.evict_stale( now, self.config.drop_after);
                    if n > 0 {
                        debug!("eviction sweep dropped {} stale entities", n);
                        if let Err(e) = self.publish( now).await { error!("update failed: {:?}", e) }
                    }
                }
            }
        }

        self.connector.terminate();
        info!("tracker service for source '{}' terminated", self.config.source);
        Ok(())
    }

    /// process one message. Returns false when the service should stop
    async fn process (&mut self, msg: TrackerMsg)->Result<bool> {
        match msg {
            TrackerMsg::Snapshot(records) => {
                let now = EpochMillis::now();

                let stats = self.store.apply_snapshot( &records);
                debug!("snapshot applied: {:?}", stats);

                // evictions run in the same cycle so the render sink sees one
                // consistent update
                self.store.evict_stale( now, self.config.drop_after);
                if let Some(extent) = self.view_extent {
                    self.store.evict_outside( &extent);
                }

                self.publish( now).await?;
            }

            TrackerMsg::ViewChanged(extent) => {
                let n = self.store.evict_outside( &extent);
                self.view_extent = Some( extent);
                if n > 0 {
                    debug!("view change dropped {} entities outside extent", n);
                    self.publish( EpochMillis::now()).await?;
                }
            }

            TrackerMsg::Select(id) => {
                // the common UI flow has at most one selected entity
                if let Some(prev) = self.store.selected_id() {
                    if prev.as_str() != id { self.store.deselect( prev.as_str()); }
                }
                if self.store.select( &id) {
                    self.update_action.execute( &self.store).await?;
                } else {
                    warn!("select of unknown entity {}", id);
                }
            }

            TrackerMsg::Deselect(id) => {
                if self.store.deselect( &id) {
                    self.update_action.execute( &self.store).await?;
                }
            }

            TrackerMsg::Terminate => return Ok(false)
        }
        Ok(true)
    }

    /// hand the store to the update action, then move the publish watermark
    async fn publish (&mut self, ts: EpochMillis)->Result<()> {
        self.update_action.execute( &self.store).await?;
        self.store.set_published( ts);
        Ok(())
    }
}
