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

use std::sync::{Arc,Mutex};
use async_trait::async_trait;
use kanal::AsyncSender;

use contrail_track::EntityStore;
use contrail_track::actor::{SnapshotConnector,TrackerConfig,TrackerMsg,TrackerService,UpdateAction};
use contrail_track::errors::Result;
use contrail_track::snapshot::EntityRecord;

fn record (id: &str, lon: f64)->EntityRecord {
    EntityRecord {
        id: id.to_string(),
        longitude: Some(lon),
        latitude: Some(50.0),
        altitude: Some(5000.0),
        track: Some(90.0),
        speed: Some(400.0),
        // no timestamp - resolves to the ingestion time, keeping the test clock-agnostic
        ..Default::default()
    }
}

/// connector that plays a fixed message script into the service
struct ScriptedConnector {
    task: Option<tokio::task::JoinHandle<()>>,
}

#[async_trait]
impl SnapshotConnector for ScriptedConnector {
    async fn start (&mut self, tx: AsyncSender<TrackerMsg>)->Result<()> {
        self.task = Some( tokio::spawn( async move {
            let _ = tx.send( TrackerMsg::Snapshot( vec![ record("A1", 10.0) ])).await;
            let _ = tx.send( TrackerMsg::Select( "A1".to_string())).await;
            let _ = tx.send( TrackerMsg::Snapshot( vec![ record("A1", 10.1), record("B2", 11.0) ])).await;
            let _ = tx.send( TrackerMsg::Terminate).await;
        }));
        Ok(())
    }

    fn terminate (&mut self) {
        if let Some(task) = &self.task { task.abort(); }
    }
}

/// update action recording the store state of every cycle
struct Observe( Arc<Mutex<Vec<(usize,bool)>>> );

#[async_trait]
impl UpdateAction for Observe {
    async fn execute (&mut self, store: &EntityStore)->Result<()> {
        self.0.lock().unwrap().push( (store.len(), store.selected().is_some()));
        Ok(())
    }
}

#[tokio::test]
async fn test_service_loop () {
    let observed = Arc::new( Mutex::new( Vec::new()));

    let service = TrackerService::new(
        TrackerConfig::default(),
        ScriptedConnector { task: None },
        Observe( observed.clone())
    );
    service.run().await.unwrap();

    // one update cycle per snapshot, one per selection change, processed in order
    let cycles = observed.lock().unwrap();
    assert_eq!( *cycles, vec![ (1,false), (1,true), (2,true) ]);
}
