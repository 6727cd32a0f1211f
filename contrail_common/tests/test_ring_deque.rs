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
use contrail_common::collections::RingDeque;

#[test]
fn test_push_bounded () {
    println!("--- testing ringbuffer push_bounded");
    let mut ring: VecDeque<usize> = VecDeque::new();
    for d in 0..9 {
        ring.push_bounded( 5, d);
        println!("{ring:?}");
    }

    assert_eq!( ring.len(), 5);
    assert_eq!( vec![4,5,6,7,8], ring.to_vec());
}

#[test]
fn test_push_unbounded () {
    // max_len 0 means unbounded
    let mut ring: VecDeque<usize> = VecDeque::new();
    for d in 0..100 {
        ring.push_bounded( 0, d);
    }
    assert_eq!( ring.len(), 100);
}
