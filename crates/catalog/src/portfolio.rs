use serde::Serialize;

/// A shipped project written up as a case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    pub slug: &'static str,
    pub client: &'static str,
    pub industry: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

const PORTFOLIO: &[CaseStudy] = &[
    CaseStudy {
        slug: "harbor-roasters",
        client: "Harbor Roasters",
        industry: "Specialty coffee",
        summary: "Replaced a template store with a custom shop; subscriptions now \
                  make up a third of revenue.",
        highlights: &[
            "Subscription checkout with pause/skip",
            "Wholesale price list behind a login",
            "Page weight cut from 4.1 MB to 600 kB",
        ],
    },
    CaseStudy {
        slug: "fernwood-clinic",
        client: "Fernwood Physiotherapy",
        industry: "Healthcare",
        summary: "New marketing site with online booking; no-show rate dropped after \
                  reminder emails went live.",
        highlights: &[
            "Booking flow integrated with their practice software",
            "Plain-language service pages that rank locally",
        ],
    },
    CaseStudy {
        slug: "moss-and-mortar",
        client: "Moss & Mortar Landscaping",
        industry: "Trades",
        summary: "Portfolio-first redesign; quote requests doubled in the first quarter.",
        highlights: &[
            "Before/after project galleries",
            "Quote form that routes by job type",
        ],
    },
];

/// All case studies, most recent first.
pub fn portfolio() -> &'static [CaseStudy] {
    PORTFOLIO
}

pub fn case_study_by_slug(slug: &str) -> Option<&'static CaseStudy> {
    PORTFOLIO.iter().find(|c| c.slug == slug)
}
