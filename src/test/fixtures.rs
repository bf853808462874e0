// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! In-memory registry used to exercise the registry walk on any host.

use crate::discovery::registry::{
    CURRENT_VERSION_VALUE, JAVA_HOME_VALUE, RegistryHive, RegistryKey, RegistryView,
};
use std::cell::Cell;
use std::collections::HashMap;
use std::io;
use std::rc::Rc;

/// Contents of a fixture key. Values and subkeys keep insertion order, which
/// stands in for the registry's enumeration order.
#[derive(Debug, Clone, Default)]
pub struct FixtureKey {
    values: Vec<(String, String)>,
    subkeys: Vec<(String, FixtureKey)>,
    reported_subkey_count: Option<usize>,
    unreadable_subkeys: Vec<usize>,
    failing_subkey_count: bool,
}

impl FixtureKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, name: &str, value: &str) -> Self {
        self.values.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_subkey(mut self, name: &str, key: FixtureKey) -> Self {
        self.subkeys.push((name.to_string(), key));
        self
    }

    /// Make the key report a subkey count that differs from its contents.
    pub fn with_reported_subkey_count(mut self, count: usize) -> Self {
        self.reported_subkey_count = Some(count);
        self
    }

    /// Make the name of the subkey at `index` fail to enumerate.
    pub fn with_unreadable_subkey(mut self, index: usize) -> Self {
        self.unreadable_subkeys.push(index);
        self
    }

    pub fn with_failing_subkey_count(mut self) -> Self {
        self.failing_subkey_count = true;
        self
    }
}

/// Builds a JavaSoft product key with one `JavaHome` subkey per entry.
///
/// # Arguments
/// * `current_version` - Value of `CurrentVersion`, or `None` to omit it
/// * `versions` - `(subkey name, JavaHome)` pairs in enumeration order
pub fn java_root(current_version: Option<&str>, versions: &[(&str, &str)]) -> FixtureKey {
    let mut root = FixtureKey::new();
    if let Some(current) = current_version {
        root = root.with_value(CURRENT_VERSION_VALUE, current);
    }
    for (name, home) in versions {
        root = root.with_subkey(name, FixtureKey::new().with_value(JAVA_HOME_VALUE, home));
    }
    root
}

#[derive(Debug, Default)]
struct HandleCounter {
    opened: Cell<usize>,
    live: Cell<usize>,
}

/// An open fixture key; counts itself as a live handle until dropped.
pub struct FixtureHandle {
    key: FixtureKey,
    counter: Rc<HandleCounter>,
}

impl FixtureHandle {
    fn open(key: FixtureKey, counter: &Rc<HandleCounter>) -> Self {
        counter.opened.set(counter.opened.get() + 1);
        counter.live.set(counter.live.get() + 1);
        Self {
            key,
            counter: Rc::clone(counter),
        }
    }
}

impl Drop for FixtureHandle {
    fn drop(&mut self) {
        self.counter.live.set(self.counter.live.get() - 1);
    }
}

impl RegistryKey for FixtureHandle {
    fn string_value(&self, name: &str) -> io::Result<String> {
        self.key
            .values
            .iter()
            .find(|(value_name, _)| value_name == name)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no value {name}")))
    }

    fn subkey_count(&self) -> io::Result<usize> {
        if self.key.failing_subkey_count {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "access is denied",
            ));
        }
        Ok(self
            .key
            .reported_subkey_count
            .unwrap_or(self.key.subkeys.len()))
    }

    fn subkey_names(&self, count: usize) -> Vec<io::Result<String>> {
        self.key
            .subkeys
            .iter()
            .take(count)
            .enumerate()
            .map(|(index, (name, _))| {
                if self.key.unreadable_subkeys.contains(&index) {
                    Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        "subkey name is not valid UTF-16",
                    ))
                } else {
                    Ok(name.clone())
                }
            })
            .collect()
    }

    fn open_subkey(&self, name: &str) -> io::Result<Self> {
        self.key
            .subkeys
            .iter()
            .find(|(subkey_name, _)| subkey_name == name)
            .map(|(_, key)| FixtureHandle::open(key.clone(), &self.counter))
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no subkey {name}")))
    }
}

enum FixtureRoot {
    Present(FixtureKey),
    Denied,
}

/// A fake `HKEY_LOCAL_MACHINE` keyed by registry view and path.
#[derive(Default)]
pub struct FixtureHive {
    roots: HashMap<(RegistryView, String), FixtureRoot>,
    counter: Rc<HandleCounter>,
}

impl FixtureHive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, view: RegistryView, path: &str, key: FixtureKey) -> Self {
        self.roots
            .insert((view, path.to_string()), FixtureRoot::Present(key));
        self
    }

    /// Register a path whose open fails with `PermissionDenied`.
    pub fn with_denied_root(mut self, view: RegistryView, path: &str) -> Self {
        self.roots.insert((view, path.to_string()), FixtureRoot::Denied);
        self
    }

    pub fn opened_handles(&self) -> usize {
        self.counter.opened.get()
    }

    pub fn live_handles(&self) -> usize {
        self.counter.live.get()
    }
}

impl RegistryHive for FixtureHive {
    type Key = FixtureHandle;

    fn open(&self, view: RegistryView, path: &str) -> io::Result<FixtureHandle> {
        match self.roots.get(&(view, path.to_string())) {
            Some(FixtureRoot::Present(key)) => Ok(FixtureHandle::open(key.clone(), &self.counter)),
            Some(FixtureRoot::Denied) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "access is denied",
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "the system cannot find the file specified",
            )),
        }
    }
}
