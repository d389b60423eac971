//! Residential societies catalog page.

use super::{card, section, tagged};
use crate::types::{IndustryPage, ProductKind};

/// Catalog page covering individual floors, terraces, electrical panels,
/// parking, visitors lounge, and the generator/pump room area.
pub fn residential_societies() -> IndustryPage {
    IndustryPage {
        slug: "residential-societies".into(),
        hero_title: "Fire Extinguisher For Residential Societies".into(),
        hero_image_url: Some(
            "https://www.kanexfire.com/images/industries-Wise-Products/residential_banner.jpg"
                .into(),
        ),
        breadcrumb: vec![
            "Home".into(),
            "Industries".into(),
            "Fire Extinguisher For Residential Societies".into(),
        ],
        sections: vec![
            section(
                "INDIVIDUAL FLOORS",
                vec![
                    tagged(
                        ProductKind::Extinguisher,
                        "ABC Type",
                        &["Class A", "Class B", "Class C", "Electrical", "CE"],
                    ),
                    card("Watermist", &["Class A", "Class B", "Electrical", "CE"]),
                    // Lowercase "type" matches the printed catalog label.
                    card("CO2 type", &["Class B", "Class C", "Electrical", "ISI"]),
                ],
            ),
            section(
                "TERRACE AREA",
                vec![tagged(
                    ProductKind::Extinguisher,
                    "ABC Type",
                    &["Class A", "Class B", "Class C", "Electrical", "CE"],
                )],
            ),
            section(
                "ELECTRICAL PANELS",
                vec![
                    tagged(
                        ProductKind::Extinguisher,
                        "Clean Agent Type",
                        &["Class A", "Class B", "Class C", "Electrical", "CE"],
                    ),
                    card("CO2 Type", &["Class B", "Class C", "Electrical", "ISI"]),
                    tagged(ProductKind::System, "Panel Flooding System", &[]),
                ],
            ),
            section(
                "PARKING",
                vec![
                    card("CO2 Type", &["Class B", "Class C", "Electrical", "ISI"]),
                    card(
                        "ABC Type",
                        &["Class A", "Class B", "Class C", "Electrical", "CE"],
                    ),
                ],
            ),
            section(
                "VISITORS LOUNGE",
                vec![
                    tagged(
                        ProductKind::Extinguisher,
                        "Clean Agent Type",
                        &["Class A", "Class B", "Class C", "Electrical", "CE"],
                    ),
                    card(
                        "ABC Type",
                        &["Class A", "Class B", "Class C", "Electrical", "CE"],
                    ),
                ],
            ),
            section(
                "GENERATOR AND PUMP ROOM AREA",
                vec![
                    card("CO2 Type", &["Class B", "Class C", "Electrical", "ISI"]),
                    card(
                        "ABC Type",
                        &["Class A", "Class B", "Class C", "Electrical", "CE"],
                    ),
                    card(
                        "Foam Trolley",
                        &["Class A", "Class B", "Class C", "Electrical", "CE"],
                    ),
                ],
            ),
        ],
    }
}
