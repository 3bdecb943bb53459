use serde::Serialize;

use crate::models::propertymodel::Property;

// Home page shelf vocabulary. Tags outside this list never reach storage.
pub const CATEGORY_TAGS: [&str; 8] = [
    "Hero",
    "Spotlight",
    "Luxury Redefined",
    "Accessible Project",
    "Trending Residences",
    "SIGNATURE Developments",
    "Residential Projects",
    "Commercial Projects",
];

/// Properties partitioned into the home page shelves. A property carrying
/// several tags appears on every matching shelf.
#[derive(Debug, Serialize, Default)]
pub struct CategorizedProperties {
    pub hero: Vec<Property>,
    pub spotlight: Vec<Property>,

    #[serde(rename = "luxuryRedefined")]
    pub luxury_redefined: Vec<Property>,

    #[serde(rename = "accessibleProject")]
    pub accessible_project: Vec<Property>,

    #[serde(rename = "trendingResidences")]
    pub trending_residences: Vec<Property>,

    #[serde(rename = "signatureDevelopments")]
    pub signature_developments: Vec<Property>,

    #[serde(rename = "residentialProjects")]
    pub residential_projects: Vec<Property>,

    #[serde(rename = "commercialProjects")]
    pub commercial_projects: Vec<Property>,
}

pub fn bucketize(properties: &[Property]) -> CategorizedProperties {
    CategorizedProperties {
        hero: with_tag(properties, "Hero"),
        spotlight: with_tag(properties, "Spotlight"),
        luxury_redefined: with_tag(properties, "Luxury Redefined"),
        accessible_project: with_tag(properties, "Accessible Project"),
        trending_residences: with_tag(properties, "Trending Residences"),
        signature_developments: with_tag(properties, "SIGNATURE Developments"),
        residential_projects: with_tag(properties, "Residential Projects"),
        commercial_projects: with_tag(properties, "Commercial Projects"),
    }
}

fn with_tag(properties: &[Property], tag: &str) -> Vec<Property> {
    properties
        .iter()
        .filter(|property| property.categories.iter().any(|t| t == tag))
        .cloned()
        .collect()
}

/// The optional ?categories= query parameter, comma separated. An empty or
/// missing filter means no restriction.
pub fn parse_filter(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn property_with_tags(name: &str, tags: &[&str]) -> Property {
        Property {
            id: Uuid::new_v4(),
            image_url: String::new(),
            name: name.to_string(),
            by: String::new(),
            location: String::new(),
            price: String::new(),
            status: String::new(),
            configuration: String::new(),
            possession: None,
            units: String::new(),
            land: String::new(),
            residence: String::new(),
            builtup: String::new(),
            blocks: String::new(),
            floor: String::new(),
            noofunits: String::new(),
            rera: String::new(),
            highlight: String::new(),
            about: String::new(),
            unitytype: String::new(),
            size: String::new(),
            range: String::new(),
            booking: String::new(),
            token: String::new(),
            plans: String::new(),
            amenities: String::new(),
            virtual_tour: String::new(),
            payment: String::new(),
            categories: Json(tags.iter().map(|tag| tag.to_string()).collect()),
            floor_imgs: Json(vec![]),
            logos: Json(vec![]),
            dis_texts: Json(vec![]),
            logo_texts: Json(vec![]),
            virtual_imgs: Json(vec![]),
            virtual_vids: Json(vec![]),
            pdfs: Json(vec![]),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn a_property_lands_on_every_shelf_it_is_tagged_for() {
        let properties = vec![property_with_tags("Lake View", &["Hero", "Spotlight"])];

        let shelves = bucketize(&properties);

        assert_eq!(shelves.hero.len(), 1);
        assert_eq!(shelves.spotlight.len(), 1);
        assert!(shelves.luxury_redefined.is_empty());
        assert!(shelves.commercial_projects.is_empty());
    }

    #[test]
    fn shelves_preserve_the_incoming_order() {
        let properties = vec![
            property_with_tags("First", &["Hero"]),
            property_with_tags("Second", &["Hero"]),
        ];

        let shelves = bucketize(&properties);

        assert_eq!(shelves.hero[0].name, "First");
        assert_eq!(shelves.hero[1].name, "Second");
    }

    #[test]
    fn untagged_properties_stay_off_the_shelves() {
        let properties = vec![property_with_tags("Plain", &[])];

        let shelves = bucketize(&properties);

        assert!(shelves.hero.is_empty());
        assert!(shelves.residential_projects.is_empty());
    }

    #[test]
    fn the_query_filter_splits_on_commas() {
        assert_eq!(
            parse_filter("Hero, Spotlight"),
            vec!["Hero".to_string(), "Spotlight".to_string()]
        );
        assert!(parse_filter("").is_empty());
        assert!(parse_filter(" , ").is_empty());
    }
}
