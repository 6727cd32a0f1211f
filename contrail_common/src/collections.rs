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

use std::collections::VecDeque;

/// trait for using a VecDeque as a bounded ring buffer. The bound is passed explicitly
/// so that callers cannot run into capacity over-allocation of the underlying VecDeque
pub trait RingDeque<T> {
    /// append to the back, dropping front elements so that len does not exceed max_len.
    /// A max_len of 0 means unbounded
    fn push_bounded (&mut self, max_len: usize, t: T);

    fn to_vec (&self)->Vec<T> where T: Clone;
}

impl<T> RingDeque<T> for VecDeque<T> {
    fn push_bounded (&mut self, max_len: usize, t: T) {
        if max_len > 0 {
            while self.len() >= max_len {
                self.pop_front();
            }
        }
        self.push_back(t);
    }

    fn to_vec (&self)->Vec<T> where T: Clone {
        self.iter().cloned().collect()
    }
}
