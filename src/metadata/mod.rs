// Copyright (C) 2025 The Dialplan Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The numbering-plan data model and the read-only registry the engine
//! looks it up through.
//!
//! The engine never ships or mutates numbering-plan data; the host
//! application builds a [`MetadataRegistry`] from whatever source it keeps
//! its dataset in (generated code, a config file it parses itself, ...) and
//! hands it to the engine once.

mod registry;
mod types;

pub mod sample;

pub use registry::MetadataRegistry;
pub use types::{NumberFormat, PhoneMetadata, PhoneNumberDesc};
