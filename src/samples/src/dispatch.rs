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

//! Selects and runs one sample from the registry.

use crate::context::Context;
use crate::registry::Registry;
use std::io::Write;

/// The invocation shown when no sample key is given.
pub const EXAMPLE_CALL: &str = "merchant-samples accounts.accounts.v1.get_account";

/// The reasons a dispatch fails.
///
/// All of them map to a non-zero exit status.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DispatchError {
    /// No sample key was provided.
    #[error("no sample key provided")]
    MissingKey,
    /// The sample key is not in the registry.
    #[error("sample '{0}' not found")]
    NotFound(String),
    /// The sample ran and returned an error.
    #[error("sample '{key}' failed: {source:#}")]
    Sample {
        key: String,
        #[source]
        source: anyhow::Error,
    },
    /// Writing the status messages failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Runs the sample registered as `key`.
///
/// Status messages, including the list of samples when `key` is `None`, go
/// to `out`. The samples print their own results to stdout.
pub async fn dispatch<W: Write>(
    registry: &Registry,
    ctx: &Context,
    key: Option<&str>,
    out: &mut W,
) -> Result<(), DispatchError> {
    let Some(key) = key else {
        usage(registry, out)?;
        return Err(DispatchError::MissingKey);
    };
    let Some(sample) = registry.get(key) else {
        writeln!(out, "Error: Sample '{key}' not found.")?;
        return Err(DispatchError::NotFound(key.to_string()));
    };

    writeln!(out, "--- Running sample: {key} ---")?;
    out.flush()?;
    tracing::debug!("running sample {key}");
    if let Err(source) = sample.execute(ctx).await {
        return Err(DispatchError::Sample {
            key: key.to_string(),
            source,
        });
    }
    writeln!(out, "--- Sample execution finished ---")?;
    Ok(())
}

fn usage<W: Write>(registry: &Registry, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Please specify which sample to run. Example call below:")?;
    writeln!(out, "{EXAMPLE_CALL}")?;
    writeln!(out)?;
    writeln!(out, "Available samples:")?;
    for (key, description) in registry.entries() {
        writeln!(out, "  {key}: {description}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::{FakeSample, fake_sample};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type TestResult = anyhow::Result<()>;

    fn counted(description: &'static str, fail: bool) -> (FakeSample, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let sample = FakeSample {
            fail,
            calls: calls.clone(),
            ..fake_sample(description)
        };
        (sample, calls)
    }

    fn output(buffer: Vec<u8>) -> anyhow::Result<String> {
        Ok(String::from_utf8(buffer)?)
    }

    #[tokio::test]
    async fn missing_key() -> TestResult {
        let mut registry = Registry::new();
        registry.add("b.sample", fake_sample("the b sample"))?;
        registry.add("a.sample", fake_sample("the a sample"))?;

        let mut buffer = Vec::new();
        let err = dispatch(&registry, &Context::new(), None, &mut buffer)
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::MissingKey), "{err:?}");
        let want = format!(
            "Please specify which sample to run. Example call below:\n\
             {EXAMPLE_CALL}\n\
             \n\
             Available samples:\n\
             \x20 a.sample: the a sample\n\
             \x20 b.sample: the b sample\n"
        );
        assert_eq!(output(buffer)?, want);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_key() -> TestResult {
        let (sample, calls) = counted("test-only", false);
        let mut registry = Registry::new();
        registry.add("a.sample", sample)?;

        let mut buffer = Vec::new();
        let err = dispatch(&registry, &Context::new(), Some("not.a.sample"), &mut buffer)
            .await
            .unwrap_err();
        assert!(
            matches!(&err, DispatchError::NotFound(k) if k == "not.a.sample"),
            "{err:?}"
        );
        assert_eq!(output(buffer)?, "Error: Sample 'not.a.sample' not found.\n");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        Ok(())
    }

    #[tokio::test]
    async fn success() -> TestResult {
        let (sample, calls) = counted("test-only", false);
        let mut registry = Registry::new();
        registry.add("a.sample", sample)?;

        let mut buffer = Vec::new();
        dispatch(&registry, &Context::new(), Some("a.sample"), &mut buffer).await?;
        assert_eq!(
            output(buffer)?,
            "--- Running sample: a.sample ---\n--- Sample execution finished ---\n"
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test]
    async fn sample_failure() -> TestResult {
        let (sample, calls) = counted("test-only", true);
        let mut registry = Registry::new();
        registry.add("a.sample", sample)?;

        let mut buffer = Vec::new();
        let err = dispatch(&registry, &Context::new(), Some("a.sample"), &mut buffer)
            .await
            .unwrap_err();
        assert!(
            matches!(&err, DispatchError::Sample { key, .. } if key == "a.sample"),
            "{err:?}"
        );
        assert_eq!(output(buffer)?, "--- Running sample: a.sample ---\n");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        Ok(())
    }
}
