// Copyright 2025 Google LLC
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

//! Runs one of the Google Merchant API samples.

mod args;

use args::Args;
use clap::Parser;
use merchant_samples::context::Context;
use merchant_samples::dispatch::{DispatchError, dispatch};
use merchant_samples::registry::Registry;
use std::process::ExitCode;

const DESCRIPTION: &str = concat!(
    "Runs one of the Google Merchant API samples, selected by its key.",
    " Without a key, lists the available samples."
);

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    enable_tracing();
    tracing::debug!("Configuration: {args:?}");

    let registry = match Registry::with_all_samples() {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("cannot register the samples: {e}");
            return ExitCode::FAILURE;
        }
    };
    let ctx = match &args.config_dir {
        Some(dir) => Context::new().with_config_dir(dir),
        None => Context::new(),
    };

    let mut stdout = std::io::stdout();
    match dispatch(&registry, &ctx, args.sample.as_deref(), &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(DispatchError::MissingKey) | Err(DispatchError::NotFound(_)) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn enable_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("cannot install the tracing subscriber: {e}");
    }
}
