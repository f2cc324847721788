// ABOUTME: Re-exports command modules for sofra-cli
// ABOUTME: Groups file-based planning, grocery output, and store-backed workflows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

pub mod grocery;
pub mod plan;
pub mod store;
