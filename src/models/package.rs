use serde::Serialize;

/// Highlight shown on a package card. A package carries at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PackageBadge {
    Recommended,
    AuthorsChoice,
}

impl PackageBadge {
    pub fn label(&self) -> &'static str {
        match self {
            PackageBadge::Recommended => "Highly Recommended",
            PackageBadge::AuthorsChoice => "Author's Choice",
        }
    }
}

/// A fixed-price book club campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageOffer {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub badge: Option<PackageBadge>,
}

impl PackageOffer {
    pub fn is_recommended(&self) -> bool {
        self.badge == Some(PackageBadge::Recommended)
    }

    pub fn is_authors_choice(&self) -> bool {
        self.badge == Some(PackageBadge::AuthorsChoice)
    }

    /// First word of the name, used on the "Choose ..." button
    pub fn short_name(&self) -> &'static str {
        self.name.split(' ').next().unwrap_or(self.name)
    }
}

pub static CATALOG: [PackageOffer; 5] = [
    PackageOffer {
        name: "Starter Package",
        price: "$230",
        features: &[
            "Placement in 5–7 carefully matched book clubs",
            "21–32 verified reviews (Amazon, Goodreads, BookBub)",
            "Targeted introduction to ideal readers",
            "Campaign completed in 3–4 weeks",
        ],
        badge: None,
    },
    PackageOffer {
        name: "Growth Package",
        price: "$293",
        features: &[
            "Placement in 8–10 active book clubs",
            "37–47 verified reviews with meaningful feedback",
            "Buzz through discussions and organic shares",
            "Duration: 3–4 weeks",
        ],
        badge: None,
    },
    PackageOffer {
        name: "Momentum Package",
        price: "$366",
        features: &[
            "Placement in 12–15 high-engagement clubs",
            "52–68 verified reviews plus extended reader commentary",
            "Amplified exposure via social media and blogs",
            "Duration: 4–5 weeks",
        ],
        badge: Some(PackageBadge::Recommended),
    },
    PackageOffer {
        name: "Prime Exposure",
        price: "$440",
        features: &[
            "Placement in 15–18 top-performing clubs",
            "Including influencer groups",
            "74–89 verified reviews with added reach",
            "Engagement performance snapshot provided",
            "Duration: 4–6 weeks",
        ],
        badge: Some(PackageBadge::AuthorsChoice),
    },
    PackageOffer {
        name: "Ultimate Impact",
        price: "$524",
        features: &[
            "Placement in 20–25 elite book clubs",
            "High-influence communities",
            "105+ verified reviews",
            "Fan videos, podcasts & influencer boosts",
            "Comprehensive campaign report",
            "Personalized growth consultation",
            "Runs for 5–6 weeks",
        ],
        badge: None,
    },
];

pub fn catalog() -> &'static [PackageOffer] {
    &CATALOG
}

pub fn find(name: &str) -> Option<&'static PackageOffer> {
    CATALOG.iter().find(|p| p.name == name)
}
