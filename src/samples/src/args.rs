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

use clap::Parser;
use std::path::PathBuf;

/// Command-line options for the sample runner.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = super::DESCRIPTION)]
pub struct Args {
    /// The directory with the credential files.
    ///
    /// Defaults to `$HOME/shopping-samples/content`.
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// The key of the sample to run, for example
    /// `accounts.accounts.v1.get_account`.
    ///
    /// Without a key the program lists the available samples.
    pub sample: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() -> anyhow::Result<()> {
        let args = Args::try_parse_from(["merchant-samples"])?;
        assert!(args.sample.is_none(), "{args:?}");
        assert!(args.config_dir.is_none(), "{args:?}");
        Ok(())
    }

    #[test]
    fn sample_and_config_dir() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "merchant-samples",
            "--config-dir",
            "/tmp/test-only",
            "accounts.accounts.v1.get_account",
        ])?;
        assert_eq!(args.sample.as_deref(), Some("accounts.accounts.v1.get_account"));
        assert_eq!(args.config_dir, Some(PathBuf::from("/tmp/test-only")));
        Ok(())
    }

    #[test]
    fn too_many_samples() {
        let got = Args::try_parse_from(["merchant-samples", "a", "b"]);
        assert!(got.is_err(), "{got:?}");
    }
}
