// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Lazily built name index over the enum metadata.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::EnumMeta;

static ENUM_CATALOG: OnceLock<EnumCatalog> = OnceLock::new();

/// Name-keyed view of every enum the crate declares.
///
/// Built once on first access and shared for the lifetime of the
/// process; repeated calls return the same instance.
#[derive(Debug)]
pub struct EnumCatalog {
    by_name: HashMap<&'static str, &'static EnumMeta>,
    ordered: &'static [&'static EnumMeta],
}

impl EnumCatalog {
    fn build() -> Self {
        let ordered = crate::enums::all_enum_metadata();
        let mut by_name = HashMap::with_capacity(ordered.len());
        for meta in ordered {
            if meta.has_duplicate_values() {
                tracing::warn!(
                    "Enum '{}' declares duplicate entry values; value lookups resolve to the first declared entry",
                    meta.name
                );
            }
            by_name.insert(meta.name, *meta);
        }
        Self { by_name, ordered }
    }

    /// Look up an enum by its wire name, e.g. `"MAV_TYPE"`.
    pub fn get(&self, name: &str) -> Option<&'static EnumMeta> {
        self.by_name.get(name).copied()
    }

    /// Enum wire names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ordered.iter().map(|meta| meta.name)
    }

    /// All enums in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static EnumMeta> + '_ {
        self.ordered.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// The process-wide enum catalog.
pub fn enum_catalog() -> &'static EnumCatalog {
    ENUM_CATALOG.get_or_init(EnumCatalog::build)
}

/// Shorthand for [`enum_catalog()`] followed by a name lookup.
pub fn enum_metadata(name: &str) -> Option<&'static EnumMeta> {
    enum_catalog().get(name)
}
