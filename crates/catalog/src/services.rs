use serde::Serialize;

/// One service offering with its concrete deliverables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    pub slug: &'static str,
    pub name: &'static str,
    pub blurb: &'static str,
    pub deliverables: &'static [&'static str],
}

const SERVICES: &[Service] = &[
    Service {
        slug: "web-design",
        name: "Web design & build",
        blurb: "A custom marketing site designed around your goals and built to load fast.",
        deliverables: &[
            "Discovery call and sitemap",
            "Custom design for every page",
            "Responsive build with accessibility checks",
            "Launch on managed hosting",
        ],
    },
    Service {
        slug: "ecommerce",
        name: "Online stores",
        blurb: "Product catalogs, carts and checkout wired to your payment account.",
        deliverables: &[
            "Product and collection setup",
            "Checkout and tax configuration",
            "Order notification wiring",
            "Store-manager handover session",
        ],
    },
    Service {
        slug: "seo",
        name: "Search foundations",
        blurb: "Technical SEO baked in so customers can actually find you.",
        deliverables: &[
            "Metadata and structured data",
            "Sitemap and redirect map",
            "Performance budget and audit",
        ],
    },
    Service {
        slug: "care",
        name: "Site care",
        blurb: "Updates, backups and small changes handled on a monthly plan.",
        deliverables: &[
            "Dependency and platform updates",
            "Daily backups with restore drills",
            "Content changes within plan hours",
            "Uptime monitoring",
        ],
    },
];

/// All service offerings, in display order.
pub fn services() -> &'static [Service] {
    SERVICES
}

pub fn service_by_slug(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug == slug)
}
