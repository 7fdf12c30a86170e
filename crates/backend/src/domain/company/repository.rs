//! Embedded company registry
//!
//! Hierarchy, category membership, statistics and description for every
//! known company. The registry also feeds the autocomplete company list.

/// One company with its ownership hierarchy
#[derive(Debug)]
pub struct CompanyRecord {
    pub name: &'static str,
    /// Hierarchy vertices, the company itself first
    pub vertices: &'static [&'static str],
    /// Directed parent -> child edges between vertices
    pub edges: &'static [(&'static str, &'static str)],
    /// Category name -> member vertices
    pub categories: &'static [(&'static str, &'static [&'static str])],
    pub stats: CompanyStats,
    pub description: &'static str,
}

/// Precomputed statistics shown in the statistics cards
#[derive(Debug, Clone, Copy)]
pub struct CompanyStats {
    pub total_companies: u32,
    pub categories: u32,
    pub hierarchy_depth: u32,
}

impl CompanyRecord {
    /// Member vertices of a category, empty when the category is unknown
    pub fn category_members(&self, category: &str) -> &'static [&'static str] {
        self.categories
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, members)| *members)
            .unwrap_or(&[])
    }
}

const COMPANIES: &[CompanyRecord] = &[
    CompanyRecord {
        name: "Amalfi midco Ltd 14185820",
        vertices: &[
            "Amalfi midco Ltd 14185820",
            "Amalfi Cleanco Ltd 14185950",
            "Amalfi Bidco Ltd 14186033",
            "Caretech holding Plc 04457287",
            "Cambian Group Plc 08929371",
            "Cambian Group Holdings Ltd 08929407",
            "Caretech Comms Services Ltd 02804415",
        ],
        edges: &[
            ("Amalfi midco Ltd 14185820", "Amalfi Cleanco Ltd 14185950"),
            ("Amalfi Cleanco Ltd 14185950", "Amalfi Bidco Ltd 14186033"),
            ("Amalfi Cleanco Ltd 14185950", "Caretech holding Plc 04457287"),
            ("Amalfi Cleanco Ltd 14185950", "Cambian Group Plc 08929371"),
            (
                "Amalfi Cleanco Ltd 14185950",
                "Cambian Group Holdings Ltd 08929407",
            ),
            (
                "Amalfi Cleanco Ltd 14185950",
                "Caretech Comms Services Ltd 02804415",
            ),
        ],
        categories: &[
            (
                "new_company",
                &[
                    "Amalfi Bidco Ltd 14186033",
                    "Cambian Group Plc 08929371",
                    "Cambian Group Holdings Ltd 08929407",
                ],
            ),
            (
                "update",
                &[
                    "Cambian Group Holdings Ltd 08929407",
                    "Caretech Comms Services Ltd 02804415",
                    "Caretech holding Plc 04457287",
                ],
            ),
        ],
        stats: CompanyStats {
            total_companies: 7,
            categories: 2,
            hierarchy_depth: 2,
        },
        description: "Amalfi midco Ltd 14185820 specializes care homes located all over the UK.",
    },
    CompanyRecord {
        name: "CompanyB1234",
        vertices: &[
            "CompanyB1234",
            "Category1234",
            "Category5678",
            "CompanyB2",
            "CompanyB3",
            "CompanyB4",
            "CompanyB5",
            "CompanyB6",
            "CompanyB7",
        ],
        edges: &[
            ("CompanyB1234", "Category1234"),
            ("CompanyB1234", "Category5678"),
            ("Category1234", "CompanyB2"),
            ("Category1234", "CompanyB3"),
            ("Category5678", "CompanyB4"),
            ("Category5678", "CompanyB5"),
            ("Category5678", "CompanyB6"),
            ("Category5678", "CompanyB7"),
        ],
        categories: &[
            ("new_company", &["CompanyB2"]),
            ("update", &["CompanyB5"]),
        ],
        stats: CompanyStats {
            total_companies: 3,
            categories: 1,
            hierarchy_depth: 2,
        },
        description: "CompanyB1234 is known for its wide range of care services.",
    },
    CompanyRecord {
        name: "CompanyC789",
        vertices: &["CompanyC789", "Category C123", "Company C1", "Company C2"],
        edges: &[
            ("CompanyC789", "Category C123"),
            ("Category C123", "Company C1"),
            ("Category C123", "Company C2"),
        ],
        categories: &[
            ("new_company", &["Company C1"]),
            ("update", &["Company C2"]),
        ],
        stats: CompanyStats {
            total_companies: 4,
            categories: 6,
            hierarchy_depth: 3,
        },
        description: "CompanyC789 is a highly professional company",
    },
    CompanyRecord {
        name: "CompanyD012",
        vertices: &[
            "CompanyD012",
            "Category D969",
            "Category D789",
            "Company D100",
            "Company D200",
            "Company D300",
            "Company D400",
            "Company D500",
        ],
        edges: &[
            ("CompanyD012", "Category D789"),
            ("CompanyD012", "Category D969"),
            ("Category D789", "Company D100"),
            ("Category D789", "Company D300"),
            ("Category D969", "Company D200"),
            ("Category D969", "Company D400"),
            ("Category D969", "Company D500"),
        ],
        categories: &[
            ("new_company", &["Company D300"]),
            ("update", &["Company D500"]),
        ],
        stats: CompanyStats {
            total_companies: 9,
            categories: 6,
            hierarchy_depth: 9,
        },
        description: "CompanyD012 has additional related companies.",
    },
];

/// Ordered company names for the search autocomplete
pub fn company_names() -> Vec<String> {
    COMPANIES.iter().map(|c| c.name.to_string()).collect()
}

/// Find a company record by exact name
pub fn find(name: &str) -> Option<&'static CompanyRecord> {
    COMPANIES.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_edge_endpoint_is_a_vertex() {
        for record in COMPANIES {
            for (from, to) in record.edges {
                assert!(record.vertices.contains(from), "{} in {}", from, record.name);
                assert!(record.vertices.contains(to), "{} in {}", to, record.name);
            }
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert!(find("CompanyB1234").is_some());
        assert!(find("companyb1234").is_none());
        assert!(find("CompanyB").is_none());
    }

    #[test]
    fn unknown_category_has_no_members() {
        let record = find("CompanyC789").unwrap();
        assert!(record.category_members("nonexistent").is_empty());
        assert_eq!(record.category_members("update"), &["Company C2"]);
    }
}
