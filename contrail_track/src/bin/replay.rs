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

//! tracker monitoring tool - replays a recorded snapshot file (one JSON record array
//! per line) through the tracker service and prints the resulting render sink updates
//! as JSON lines

use std::{fs, path::PathBuf, time::Duration};
use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use kanal::AsyncSender;
use tracing::{info,warn};

use contrail_track::actor::{SnapshotConnector,TrackerConfig,TrackerMsg,TrackerService,UpdateAction};
use contrail_track::snapshot::parse_snapshot;
use contrail_track::EntityStore;

#[derive(Parser)]
#[command(about="replay a recorded snapshot file through the tracker service")]
struct Args {
    /// pathname of the snapshot file (one JSON record array per line)
    file: PathBuf,

    /// pathname of an optional RON config
    #[arg(long)]
    config: Option<PathBuf>,

    /// replay interval in milliseconds (overrides the config update interval)
    #[arg(long)]
    interval: Option<u64>,
}

/// snapshot source that feeds pre-recorded batches at a fixed interval
struct ReplayConnector {
    lines: Vec<String>,
    interval: Duration,
    task: Option<tokio::task::JoinHandle<()>>,
}

#[async_trait]
impl SnapshotConnector for ReplayConnector {
    async fn start (&mut self, tx: AsyncSender<TrackerMsg>)->contrail_track::errors::Result<()> {
        let lines = std::mem::take( &mut self.lines);
        let interval = self.interval;

        self.task = Some( tokio::spawn( async move {
            for line in lines {
                match parse_snapshot( &line) {
                    Ok(records) => {
                        if tx.send( TrackerMsg::Snapshot(records)).await.is_err() { return }
                    }
                    Err(e) => warn!("skipping bad snapshot line: {e}")
                }
                tokio::time::sleep( interval).await;
            }
            let _ = tx.send( TrackerMsg::Terminate).await;
        }));
        Ok(())
    }

    fn terminate (&mut self) {
        if let Some(task) = &self.task { task.abort(); }
    }
}

/// render sink stand-in that prints update summaries
struct PrintUpdates;

#[async_trait]
impl UpdateAction for PrintUpdates {
    async fn execute (&mut self, store: &EntityStore)->contrail_track::errors::Result<()> {
        let summary = store.update_summary();
        println!("{}", serde_json::to_string( &summary)?);
        Ok(())
    }
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TrackerConfig::from_ron( &fs::read_to_string( path)?)?,
        None => TrackerConfig::default()
    };
    if let Some(ms) = args.interval { config.update_interval = Duration::from_millis( ms) }

    let input = fs::read_to_string( &args.file)?;
    let lines: Vec<String> = input.lines().filter( |l| !l.trim().is_empty()).map( |l| l.to_string()).collect();
    info!("replaying {} snapshots from {:?}", lines.len(), args.file);

    let connector = ReplayConnector { lines, interval: config.update_interval, task: None };
    TrackerService::new( config, connector, PrintUpdates).run().await?;

    Ok(())
}
