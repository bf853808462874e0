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

//! Platform detection utilities for the entire application.
//!
//! This module provides functions to detect the host operating system and
//! the executable naming rules discovery relies on.

mod constants;
mod detection;

pub use detection::{current_os, platform_description};

pub use constants::{
    JAVA_BINARY, executable_extension, java_binary_subpath, with_executable_extension,
};
