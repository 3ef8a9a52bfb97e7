// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

pub mod length;
pub mod starts_with;
pub mod strpos;
