/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use uom::si::{length::{meter,foot},f64::Length};

#[inline]
pub fn feet (len: f64)-> Length { Length::new::<foot>(len) }

#[inline]
pub fn meters (len: f64)-> Length { Length::new::<meter>(len) }

/// our core geometry is unit-less f64 feet, this is only used at the export boundaries
#[inline]
pub fn feet_to_meters (len: f64)-> f64 { feet(len).get::<meter>() }

#[inline]
pub fn meters_to_feet (len: f64)-> f64 { meters(len).get::<foot>() }
