//! About page - hero and trail only, no catalog sections.

use crate::types::IndustryPage;

/// Company page. Exercises the empty-sections path of the document shell.
pub fn about() -> IndustryPage {
    IndustryPage {
        slug: "about".into(),
        hero_title: "About Us".into(),
        hero_image_url: None,
        breadcrumb: vec!["Home".into(), "About Us".into()],
        sections: vec![],
    }
}
