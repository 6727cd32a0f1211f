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

use thiserror::Error;

pub type Result<T> = std::result::Result<T,ContrailTrackError>;

#[derive(Error,Debug)]
pub enum ContrailTrackError {

    #[error("parse error {0}")]
    ParseError(String),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("config error {0}")]
    ConfigError( #[from] ron::error::SpannedError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("channel error {0}")]
    ChannelError(String),

    #[error("operation failed {0}")]
    OpFailedError(String)
}

impl From<kanal::SendError> for ContrailTrackError {
    fn from (e: kanal::SendError)->Self { ContrailTrackError::ChannelError( e.to_string()) }
}

impl From<kanal::ReceiveError> for ContrailTrackError {
    fn from (e: kanal::ReceiveError)->Self { ContrailTrackError::ChannelError( e.to_string()) }
}
