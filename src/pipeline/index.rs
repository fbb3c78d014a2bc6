use std::collections::HashMap;

use crate::records::{CenterKey, Tech};

const SOFTWARE_SEPARATOR: &str = " | ";

/// Per-center concatenation of every software string used there.
///
/// Rebuilt on each pipeline run from the full tech collection.
#[derive(Debug, Default)]
pub struct SoftwareIndex<'a> {
    by_center: HashMap<&'a CenterKey, String>,
}

impl<'a> SoftwareIndex<'a> {
    pub fn build(tech: &'a [Tech]) -> Self {
        let mut by_center: HashMap<&'a CenterKey, String> = HashMap::new();
        for row in tech {
            let Some(key) = row.cn_unique_key.as_ref() else {
                continue;
            };
            let software = row.software_in_use.as_deref().map(str::trim).unwrap_or("");
            if software.is_empty() || key.as_str().is_empty() {
                continue;
            }
            by_center
                .entry(key)
                .and_modify(|existing| {
                    existing.push_str(SOFTWARE_SEPARATOR);
                    existing.push_str(software);
                })
                .or_insert_with(|| software.to_string());
        }
        Self { by_center }
    }

    pub fn get(&self, key: &CenterKey) -> &str {
        self.by_center.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.by_center.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_center.is_empty()
    }
}
