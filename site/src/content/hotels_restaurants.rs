//! Hotels & restaurants catalog page.

use super::{card, section, tagged};
use crate::types::{IndustryPage, ProductKind};

/// Catalog page covering guest rooms, kitchens, electrical panels,
/// parking, transformer areas, and the foam trolley.
pub fn hotels_restaurants() -> IndustryPage {
    IndustryPage {
        slug: "hotels-and-restaurants".into(),
        hero_title: "Fire Extinguisher For Hotels & Restaurants".into(),
        hero_image_url: None,
        breadcrumb: vec![
            "Home".into(),
            "Industries".into(),
            "Fire Extinguisher For Hotels & Restaurants".into(),
        ],
        sections: vec![
            section(
                "GUEST ROOMS",
                vec![tagged(
                    ProductKind::Extinguisher,
                    "ABC Type",
                    &["Class A", "Class B", "Class C", "Electrical", "CE"],
                )],
            ),
            section(
                "KITCHEN",
                vec![
                    tagged(ProductKind::Extinguisher, "K Class", &["Class F", "CE"]),
                    tagged(ProductKind::System, "Kitchen Fire Suppression System", &[]),
                ],
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
                "TRANSFORMER AREA",
                vec![tagged(ProductKind::System, "Transformer Flooding System", &[])],
            ),
            section(
                "FOAM TROLLEY",
                vec![card(
                    "Foam Trolley",
                    &["Class A", "Class B", "Class C", "Electrical", "CE"],
                )],
            ),
        ],
    }
}
