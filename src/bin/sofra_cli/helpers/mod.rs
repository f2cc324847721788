// ABOUTME: Helper modules for sofra-cli
// ABOUTME: File loading, engine construction, and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

pub mod display;
pub mod files;
