// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod decode;
mod describe;
mod encode;
mod list;
mod search;

pub use decode::DecodeCmd;
pub use describe::DescribeCmd;
pub use encode::EncodeCmd;
pub use list::ListCmd;
pub use search::SearchCmd;
