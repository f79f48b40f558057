use serde::Serialize;

use crate::pricing::PackageTier;

/// A purchasable site template.
///
/// Buying a template buys its build-out, so each one maps to the package
/// tier the build is priced as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub slug: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub preview_url: &'static str,
    pub build_tier: PackageTier,
}

const TEMPLATES: &[Template] = &[
    Template {
        slug: "ledger",
        name: "Ledger",
        summary: "A crisp, numbers-forward layout for accountants and consultants.",
        preview_url: "https://previews.pagecraft.dev/ledger",
        build_tier: PackageTier::Starter,
    },
    Template {
        slug: "grove",
        name: "Grove",
        summary: "Warm and photographic, made for cafes, florists and studios.",
        preview_url: "https://previews.pagecraft.dev/grove",
        build_tier: PackageTier::Starter,
    },
    Template {
        slug: "meridian",
        name: "Meridian",
        summary: "A content-heavy layout with room for guides and resources.",
        preview_url: "https://previews.pagecraft.dev/meridian",
        build_tier: PackageTier::Business,
    },
    Template {
        slug: "stockroom",
        name: "Stockroom",
        summary: "Catalog-first storefront for shops with deep product lines.",
        preview_url: "https://previews.pagecraft.dev/stockroom",
        build_tier: PackageTier::Commerce,
    },
];

/// All template listings.
pub fn templates() -> &'static [Template] {
    TEMPLATES
}

pub fn template_by_slug(slug: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::package_by_tier;

    #[test]
    fn template_lookup_by_slug() {
        let tpl = template_by_slug("stockroom").unwrap();
        assert_eq!(tpl.build_tier, PackageTier::Commerce);
        assert!(template_by_slug("nope").is_none());
    }

    #[test]
    fn every_template_build_tier_is_priced() {
        for tpl in templates() {
            assert!(package_by_tier(tpl.build_tier).amount > 0);
        }
    }
}
