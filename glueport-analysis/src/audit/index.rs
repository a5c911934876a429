//! Reference index built once per detection run.

use glueport_core::types::collections::{FxHashMap, FxHashSet};
use glueport_core::types::ParsedData;

/// Id sets the reference checks probe against.
pub struct ReferenceIndex<'a> {
    pub organization_ids: FxHashSet<&'a str>,
    pub configuration_ids: FxHashSet<&'a str>,
    pub document_ids: FxHashSet<&'a str>,
    pub location_ids: FxHashSet<&'a str>,
    /// Asset ids grouped by the slug of their type name. Declared types get
    /// a bucket even when no asset instances exist yet.
    asset_ids_by_slug: FxHashMap<String, FxHashSet<&'a str>>,
    all_asset_ids: FxHashSet<&'a str>,
}

impl<'a> ReferenceIndex<'a> {
    pub fn build(data: &'a ParsedData) -> Self {
        let mut asset_ids_by_slug: FxHashMap<String, FxHashSet<&'a str>> = FxHashMap::default();
        for asset_type in &data.custom_asset_types {
            asset_ids_by_slug.entry(slugify(&asset_type.name)).or_default();
        }
        let mut all_asset_ids = FxHashSet::default();
        for asset in &data.custom_assets {
            asset_ids_by_slug
                .entry(slugify(&asset.asset_type))
                .or_default()
                .insert(asset.id.as_str());
            all_asset_ids.insert(asset.id.as_str());
        }

        ReferenceIndex {
            organization_ids: data.organizations.iter().map(|o| o.id.as_str()).collect(),
            configuration_ids: data.configurations.iter().map(|c| c.id.as_str()).collect(),
            document_ids: data.documents.iter().map(|d| d.id.as_str()).collect(),
            location_ids: data.locations.iter().map(|l| l.id.as_str()).collect(),
            asset_ids_by_slug,
            all_asset_ids,
        }
    }

    /// Whether `slug` names a known custom-asset type.
    pub fn knows_type_slug(&self, slug: &str) -> bool {
        self.asset_ids_by_slug.contains_key(slug)
    }

    /// Whether an asset with `id` exists under the type named by `slug`.
    /// Falls back to the union of all asset ids for unrecognized slugs.
    pub fn resolves_asset(&self, slug: &str, id: &str) -> bool {
        match self.asset_ids_by_slug.get(slug) {
            Some(ids) => ids.contains(id),
            None => self.all_asset_ids.contains(id),
        }
    }

    /// Whether `id` exists in any known id set.
    pub fn resolves_anywhere(&self, id: &str) -> bool {
        self.organization_ids.contains(id)
            || self.configuration_ids.contains(id)
            || self.document_ids.contains(id)
            || self.location_ids.contains(id)
            || self.all_asset_ids.contains(id)
    }
}

/// Slugify a custom-asset type name: lowercase, spaces to hyphens.
pub fn slugify(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}
