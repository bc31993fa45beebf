/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
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

use tracing_subscriber::EnvFilter;

pub mod macros;
pub mod angle;
pub mod geo_constants;
pub mod uom;
pub mod config;
pub mod fs;

// syntactic sugar - this is just more readable in the spherical trig formulas
#[inline(always)] pub fn sin(x:f64) -> f64 { x.sin() }
#[inline(always)] pub fn sin2(x:f64) -> f64 { let sin_x = x.sin(); sin_x*sin_x }
#[inline(always)] pub fn cos(x:f64) -> f64 { x.cos() }
#[inline(always)] pub fn asin(x:f64) -> f64 { x.asin() }
#[inline(always)] pub fn acos(x:f64) -> f64 { x.acos() }
#[inline(always)] pub fn atan2(y:f64,x:f64) -> f64 { y.atan2(x) }
#[inline(always)] pub fn sqrt(x:f64) -> f64 { x.sqrt() }
#[inline(always)] pub fn pow2(x:f64) -> f64 { x*x }
#[inline(always)] pub fn deg(x:f64)->f64 { x.to_degrees() }
#[inline(always)] pub fn rad(x:f64)->f64 { x.to_radians() }

/// clamp a value into [min,max]. Unlike f64::clamp this does not panic on NaN bounds and
/// passes NaN values through
#[inline]
pub fn clamp (x: f64, min: f64, max: f64) -> f64 {
    if x < min { min } else if x > max { max } else { x }
}

/// initialize a global fmt tracing subscriber that is controlled by the RUST_LOG env var.
/// Note this only succeeds if there is no global subscriber set yet, subsequent calls are ignored
pub fn init_env_tracing () {
    let _ = tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())
        .try_init();
}

pub const PI: f64 = std::f64::consts::PI;
pub const TWO_PI: f64 = PI * 2.0;
