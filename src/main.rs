// Copyright 2023 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Python syntax tree serializer.

use argh::FromArgs;
use codespan_reporting::term::{self, termcolor};

use ast2json::{json, parser};

#[derive(FromArgs, Debug)]
/// Python syntax tree serializer.
/// Parses the input file and prints its syntax tree as one line of
/// JSON on stdout.
struct Opt {
    #[argh(switch)]
    /// print tool version and exit.
    version: bool,

    #[argh(positional)]
    /// input file.
    input_file: Option<String>,
}

fn generate_json(input_file: &str) -> Result<(), String> {
    let mut sources = parser::SourceDatabase::new();
    match parser::parse_file(&mut sources, input_file) {
        Ok(module) => {
            println!("{}", json::generate(&module)?);
            Ok(())
        }
        Err(err) => {
            let writer = termcolor::StandardStream::stderr(termcolor::ColorChoice::Always);
            let config = term::Config::default();
            term::emit(&mut writer.lock(), &config, &sources, &err)
                .expect("Could not print error");
            Err(String::from("Error while parsing input"))
        }
    }
}

fn main() -> Result<(), String> {
    let opt: Opt = argh::from_env();

    if opt.version {
        println!("ast2json {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(input_file) = opt.input_file.as_ref() else {
        return Err("No input file is specified".to_owned());
    };

    generate_json(input_file)
}
