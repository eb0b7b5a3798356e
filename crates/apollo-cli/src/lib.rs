// Copyright 2025 Apollo Client Authors
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

//! # Apollo CLI
//!
//! Command-line access to the Apollo CMDB service, built on `apollo-client`.
//!
//! ## Key Commands
//!
//! - `apollo get`: fetch one resource by id or by type and name
//! - `apollo find`: list the resources of a type, optionally per ops group
//! - `apollo types`, `apollo groups`, `apollo members`, `apollo owner`
//! - `apollo operations`: print the operation table (no network)
//!
//! Results go to stdout as compact JSON; logs go to stderr.

pub mod settings;
