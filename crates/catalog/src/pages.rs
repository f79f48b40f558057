use serde::Serialize;

/// Metadata and copy for one public page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub sections: &'static [PageSection],
}

/// A heading/body block within a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSection {
    pub heading: &'static str,
    pub body: &'static str,
}

const PAGES: &[PageMeta] = &[
    PageMeta {
        slug: "home",
        title: "Websites that earn their keep",
        summary: "Design, build and care for small-business websites that convert.",
        sections: &[
            PageSection {
                heading: "Launch fast, look sharp",
                body: "We ship hand-built sites in weeks, not months, on a stack \
                       we maintain so you never think about hosting again.",
            },
            PageSection {
                heading: "From brief to live site",
                body: "Tell us about your business in our onboarding wizard and \
                       we come to the kickoff call already knowing your goals.",
            },
        ],
    },
    PageMeta {
        slug: "about",
        title: "A small studio, on purpose",
        summary: "Two developers and a designer who answer their own email.",
        sections: &[PageSection {
            heading: "Why small",
            body: "Every project is handled by the people you met on the first \
                   call. No account managers, no handoffs.",
        }],
    },
    PageMeta {
        slug: "services",
        title: "What we build",
        summary: "Marketing sites, online stores and the care plans that keep them healthy.",
        sections: &[],
    },
    PageMeta {
        slug: "portfolio",
        title: "Recent work",
        summary: "Case studies from businesses we have launched and grown.",
        sections: &[],
    },
    PageMeta {
        slug: "pricing",
        title: "Plain pricing",
        summary: "Fixed-price packages and monthly care plans. No surprises.",
        sections: &[PageSection {
            heading: "How billing works",
            body: "Packages are one-time payments. Care plans are monthly \
                   subscriptions you can cancel from your portal any time.",
        }],
    },
    PageMeta {
        slug: "templates",
        title: "Start from a template",
        summary: "Professionally designed starting points we tailor to your brand.",
        sections: &[],
    },
    PageMeta {
        slug: "contact",
        title: "Talk to us",
        summary: "Questions before you commit? Send a note and a human replies.",
        sections: &[],
    },
];

/// All public pages, in navigation order.
pub fn pages() -> &'static [PageMeta] {
    PAGES
}

pub fn page_by_slug(slug: &str) -> Option<&'static PageMeta> {
    PAGES.iter().find(|p| p.slug == slug)
}
