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

//! The sample registry.
//!
//! The registry maps a unique key, such as
//! `accounts.accounts.v1.get_account`, to the sample that runs it. It is
//! populated once, by [register_all][crate::samples::register_all], and is
//! read-only afterwards.

use crate::context::Context;
use std::collections::HashMap;

/// A runnable sample.
#[async_trait::async_trait]
pub trait Sample: Send + Sync {
    /// A short, human-readable description of the sample.
    fn description(&self) -> &str;

    /// Runs the sample, printing the results to stdout.
    async fn execute(&self, ctx: &Context) -> anyhow::Result<()>;
}

/// Errors returned by the [Registry].
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum RegistryError {
    /// A sample with the same key is already registered.
    #[error("sample with key '{0}' already exists")]
    DuplicateKey(String),
}

/// Maps sample keys to samples.
///
/// # Example
/// ```
/// use merchant_samples::registry::Registry;
/// let registry = Registry::with_all_samples()?;
/// assert!(registry.get("accounts.accounts.v1.get_account").is_some());
/// assert!(registry.get("not.a.sample").is_none());
/// # Ok::<(), merchant_samples::registry::RegistryError>(())
/// ```
#[derive(Default)]
pub struct Registry {
    samples: HashMap<String, Box<dyn Sample>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every sample in this crate.
    pub fn with_all_samples() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        crate::samples::register_all(&mut registry)?;
        Ok(registry)
    }

    /// Registers `sample` under `key`.
    ///
    /// Fails if `key` is already registered. The first registration is kept.
    pub fn add<K, S>(&mut self, key: K, sample: S) -> Result<(), RegistryError>
    where
        K: Into<String>,
        S: Sample + 'static,
    {
        use std::collections::hash_map::Entry;
        match self.samples.entry(key.into()) {
            Entry::Occupied(e) => Err(RegistryError::DuplicateKey(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(Box::new(sample));
                Ok(())
            }
        }
    }

    /// Returns the sample registered under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&dyn Sample> {
        self.samples.get(key).map(|s| s.as_ref())
    }

    /// Returns all the registered keys, in no particular order.
    pub fn list(&self) -> Vec<&str> {
        self.samples.keys().map(String::as_str).collect()
    }

    /// Returns the `(key, description)` pairs, sorted by key.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries = self
            .samples
            .iter()
            .map(|(k, s)| (k.as_str(), s.description()))
            .collect::<Vec<_>>();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }

    /// The number of registered samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if no samples are registered.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys = self.list();
        keys.sort_unstable();
        f.debug_struct("Registry").field("keys", &keys).finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use test_case::test_case;

    // A sample that counts its executions.
    #[derive(Debug, Default)]
    pub(crate) struct FakeSample {
        pub description: &'static str,
        pub fail: bool,
        pub calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl Sample for FakeSample {
        fn description(&self) -> &str {
            self.description
        }

        async fn execute(&self, _ctx: &Context) -> anyhow::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("test-only failure");
            }
            Ok(())
        }
    }

    pub(crate) fn fake_sample(description: &'static str) -> FakeSample {
        FakeSample {
            description,
            ..FakeSample::default()
        }
    }

    #[test]
    fn add_and_get() -> anyhow::Result<()> {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        registry.add("a", fake_sample("sample a"))?;
        registry.add("b", fake_sample("sample b"))?;
        assert_eq!(registry.len(), 2);
        let got = registry.get("a").map(|s| s.description().to_string());
        assert_eq!(got.as_deref(), Some("sample a"));
        let got = registry.get("b").map(|s| s.description().to_string());
        assert_eq!(got.as_deref(), Some("sample b"));
        Ok(())
    }

    #[test]
    fn duplicate_key() -> anyhow::Result<()> {
        let mut registry = Registry::new();
        registry.add("a", fake_sample("first"))?;
        let got = registry.add("a", fake_sample("second"));
        assert_eq!(got, Err(RegistryError::DuplicateKey("a".to_string())));
        assert_eq!(registry.len(), 1);
        let got = registry.get("a").map(|s| s.description().to_string());
        assert_eq!(got.as_deref(), Some("first"));
        Ok(())
    }

    #[test]
    fn duplicate_key_message() {
        let e = RegistryError::DuplicateKey("a.b.c".to_string());
        assert_eq!(e.to_string(), "sample with key 'a.b.c' already exists");
    }

    #[test]
    fn get_missing() {
        let registry = Registry::new();
        assert!(registry.get("missing").is_none());
    }

    #[test_case(&["a", "b", "c"])]
    #[test_case(&["c", "a", "b"])]
    #[test_case(&["b", "c", "a"])]
    fn list(keys: &[&str]) -> anyhow::Result<()> {
        let mut registry = Registry::new();
        for k in keys {
            registry.add(*k, fake_sample("unused"))?;
        }
        let got = registry.list().into_iter().collect::<BTreeSet<_>>();
        let want = BTreeSet::from(["a", "b", "c"]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn entries_sorted() -> anyhow::Result<()> {
        let mut registry = Registry::new();
        registry.add("z.sample", fake_sample("last"))?;
        registry.add("a.sample", fake_sample("first"))?;
        registry.add("m.sample", fake_sample("middle"))?;
        let got = registry.entries();
        assert_eq!(
            got,
            vec![
                ("a.sample", "first"),
                ("m.sample", "middle"),
                ("z.sample", "last")
            ]
        );
        Ok(())
    }

    #[test]
    fn debug() -> anyhow::Result<()> {
        let mut registry = Registry::new();
        registry.add("b", fake_sample("unused"))?;
        registry.add("a", fake_sample("unused"))?;
        let fmt = format!("{registry:?}");
        assert_eq!(fmt, r#"Registry { keys: ["a", "b"] }"#);
        Ok(())
    }

    #[tokio::test]
    async fn execute() -> anyhow::Result<()> {
        let calls = Arc::new(AtomicUsize::new(0));
        let sample = FakeSample {
            calls: calls.clone(),
            ..fake_sample("counted")
        };
        let mut registry = Registry::new();
        registry.add("a", sample)?;
        let sample = registry.get("a").expect("sample was registered");
        sample.execute(&Context::new()).await?;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        Ok(())
    }
}
