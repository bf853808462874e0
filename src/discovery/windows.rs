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

//! Registry access backed by the real Windows registry.

use crate::discovery::registry::{RegistryHive, RegistryKey, RegistryView};
use std::io;
use winreg::RegKey;
use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ, KEY_WOW64_32KEY, KEY_WOW64_64KEY};

fn view_flag(view: RegistryView) -> u32 {
    match view {
        RegistryView::Bits64 => KEY_WOW64_64KEY,
        RegistryView::Bits32 => KEY_WOW64_32KEY,
    }
}

/// `HKEY_LOCAL_MACHINE` on the running host.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsHive;

/// An open key together with the view it was opened in, so subkeys are
/// read from the same namespace.
pub struct WindowsKey {
    key: RegKey,
    flags: u32,
}

impl RegistryHive for WindowsHive {
    type Key = WindowsKey;

    fn open(&self, view: RegistryView, path: &str) -> io::Result<WindowsKey> {
        let flags = KEY_READ | view_flag(view);
        let key = RegKey::predef(HKEY_LOCAL_MACHINE).open_subkey_with_flags(path, flags)?;
        Ok(WindowsKey { key, flags })
    }
}

impl RegistryKey for WindowsKey {
    fn string_value(&self, name: &str) -> io::Result<String> {
        self.key.get_value::<String, _>(name)
    }

    fn subkey_count(&self) -> io::Result<usize> {
        Ok(self.key.query_info()?.sub_keys as usize)
    }

    fn subkey_names(&self, count: usize) -> Vec<io::Result<String>> {
        self.key.enum_keys().take(count).collect()
    }

    fn open_subkey(&self, name: &str) -> io::Result<Self> {
        let key = self.key.open_subkey_with_flags(name, self.flags)?;
        Ok(WindowsKey {
            key,
            flags: self.flags,
        })
    }
}
