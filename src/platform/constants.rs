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

//! Platform-specific constants and utility functions.

use std::path::PathBuf;

/// Name of the Java launcher without any platform extension
pub const JAVA_BINARY: &str = "java";

/// Get the executable file extension for the current platform
pub fn executable_extension() -> &'static str {
    #[cfg(windows)]
    return ".exe";
    #[cfg(not(windows))]
    return "";
}

/// Add the platform-specific executable extension to a file name
pub fn with_executable_extension(name: &str) -> String {
    format!("{}{}", name, executable_extension())
}

/// Location of the Java launcher relative to a Java home directory
pub fn java_binary_subpath() -> PathBuf {
    PathBuf::from("bin").join(with_executable_extension(JAVA_BINARY))
}
