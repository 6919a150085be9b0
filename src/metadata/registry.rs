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

use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, OnceLock},
};

use crate::i18n::RegionCode;

use super::types::PhoneMetadata;

static SHARED_REGISTRY: OnceLock<Arc<MetadataRegistry>> = OnceLock::new();

const REGION_CODE_FOR_NON_GEO_ENTITY: &str = "001";

/// Read-only provider of numbering-plan metadata.
///
/// Built once from a flat list of per-region metadata and immutable
/// thereafter, so lookups from any number of threads need no locking.
pub struct MetadataRegistry {
    /// A mapping from a region code to the metadata for that region.
    region_to_metadata_map: HashMap<String, PhoneMetadata>,

    /// A mapping from a country calling code for a non-geographical entity
    /// to its metadata. Examples of such calling codes include 800
    /// (International Toll Free Service) and 808 (International Shared Cost
    /// Service).
    non_geo_metadata_map: HashMap<i32, PhoneMetadata>,

    /// A mapping from a country calling code to the region codes sharing it,
    /// main region first. Note regions under NANPA share the calling code 1;
    /// under this map 1 lists "US" first. Implemented as a sorted vector for
    /// cheap lookup without hashing.
    calling_code_to_regions: Vec<(i32, Vec<String>)>,
}

impl MetadataRegistry {
    /// Builds a registry from a metadata collection. Entries with the
    /// unknown region id are skipped; an entry with id `"001"` describes a
    /// non-geographical calling code.
    pub fn new(collection: Vec<PhoneMetadata>) -> Self {
        let mut region_to_metadata_map = HashMap::new();
        let mut non_geo_metadata_map = HashMap::new();
        // Staging map so that regions sharing a calling code can be grouped
        // as they are inserted, main region in front.
        let mut calling_code_to_region_map = HashMap::<i32, VecDeque<String>>::new();

        for metadata in collection {
            let region_code = metadata.id().to_string();
            if region_code == RegionCode::get_unknown() {
                continue;
            }
            let country_calling_code = metadata.country_code();
            let main_country_for_code = metadata.main_country_for_code;

            let regions = calling_code_to_region_map
                .entry(country_calling_code)
                .or_default();
            if main_country_for_code {
                regions.push_front(region_code.clone());
            } else {
                regions.push_back(region_code.clone());
            }

            if region_code == REGION_CODE_FOR_NON_GEO_ENTITY {
                non_geo_metadata_map.insert(country_calling_code, metadata);
            } else {
                region_to_metadata_map.insert(region_code, metadata);
            }
        }

        let mut calling_code_to_regions: Vec<(i32, Vec<String>)> = calling_code_to_region_map
            .into_iter()
            .map(|(code, regions)| (code, Vec::from(regions)))
            .collect();
        calling_code_to_regions.sort_by_key(|(code, _)| *code);

        Self {
            region_to_metadata_map,
            non_geo_metadata_map,
            calling_code_to_regions,
        }
    }

    /// Returns the process-wide shared registry, loading it on first use.
    /// Concurrent first callers race on who loads; exactly one `load` runs
    /// and everyone observes its result.
    pub fn shared_with<F>(load: F) -> Arc<MetadataRegistry>
    where
        F: FnOnce() -> Vec<PhoneMetadata>,
    {
        SHARED_REGISTRY
            .get_or_init(|| Arc::new(MetadataRegistry::new(load())))
            .clone()
    }

    /// Metadata for a geographical region, or `None` when the region is
    /// unknown to the dataset. Callers treat the absent case as "nothing
    /// validates here" rather than an error.
    pub fn metadata_for_region(&self, region_code: &str) -> Option<&PhoneMetadata> {
        self.region_to_metadata_map.get(region_code)
    }

    /// Metadata for a non-geographical entity such as calling code 800.
    pub fn metadata_for_non_geo_entity(&self, country_calling_code: i32) -> Option<&PhoneMetadata> {
        self.non_geo_metadata_map.get(&country_calling_code)
    }

    pub fn metadata_for_region_or_calling_code(
        &self,
        country_calling_code: i32,
        region_code: &str,
    ) -> Option<&PhoneMetadata> {
        if region_code == REGION_CODE_FOR_NON_GEO_ENTITY {
            self.metadata_for_non_geo_entity(country_calling_code)
        } else {
            self.metadata_for_region(region_code)
        }
    }

    pub fn is_valid_region_code(&self, region_code: &str) -> bool {
        self.region_to_metadata_map.contains_key(region_code)
    }

    pub fn has_calling_code(&self, country_calling_code: i32) -> bool {
        self.calling_code_to_regions
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .is_ok()
    }

    /// The region codes sharing a calling code, main region first. Empty
    /// when the calling code is unknown.
    pub fn regions_for_calling_code(&self, country_calling_code: i32) -> &[String] {
        self.calling_code_to_regions
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|index| self.calling_code_to_regions[index].1.as_slice())
            .unwrap_or(&[])
    }

    /// The dataset-designated main region for a calling code, e.g. "US" for
    /// 1, or the unknown region code when the calling code is unknown.
    pub fn main_region_for_calling_code(&self, country_calling_code: i32) -> &str {
        self.regions_for_calling_code(country_calling_code)
            .first()
            .map(String::as_str)
            .unwrap_or_else(|| RegionCode::get_unknown())
    }

    pub fn supported_regions(&self) -> impl Iterator<Item = &str> {
        self.region_to_metadata_map.keys().map(String::as_str)
    }

    pub fn supported_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.calling_code_to_regions.iter().map(|(code, _)| *code)
    }

    pub fn supported_global_network_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.non_geo_metadata_map.keys().copied()
    }
}
