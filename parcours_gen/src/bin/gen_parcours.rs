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

use anyhow::{Result, bail};
use parcours_common::{define_cli, check_cli, init_env_tracing};
use parcours_common::config::{load_config, load_config_or_default};
use parcours_airports::AirportTable;
use parcours_gen::{GenConfig, Pattern, generate, challenges, dump_path, course_name};

define_cli! { ARGS [about="generate challenge courses as CSV and KML files"] =
    config: Option<String> [help="pathname of generator config (default: configs/parcours_gen.ron)", long],
    airports: Option<String> [help="pathname of airport table (default: embedded table)", long],
    out: Option<String> [help="output directory (default: from config)", long],
    course: Vec<String> [help="AIRPORT RUNWAY PATTERN of a single course, generate the challenge set if omitted"]
}

fn main() -> Result<()> {
    check_cli!(ARGS);
    init_env_tracing();

    let config: GenConfig = match &ARGS.config {
        Some(path) => load_config( path)?,
        None => load_config_or_default( "parcours_gen.ron", GenConfig::default)?
    };
    let table = match &ARGS.airports {
        Some(path) => AirportTable::load( path)?,
        None => AirportTable::default_table()?
    };
    let out_dir = ARGS.out.as_ref().unwrap_or( &config.output_dir);

    let courses = match ARGS.course.as_slice() {
        [] => challenges( &table, &config)?,
        [airport, runway, pattern] => {
            let pattern: Pattern = pattern.parse()?;
            let path = generate( &table, &config, airport, runway, &pattern)?;
            vec![ (course_name( airport, runway, &pattern), path) ]
        }
        _ => bail!("expected AIRPORT RUNWAY PATTERN arguments, got {:?}", ARGS.course)
    };

    for (name, path) in &courses {
        let csv_path = dump_path( path, name, out_dir)?;
        println!("{} -> {}", path, csv_path.display());
    }

    Ok(())
}
