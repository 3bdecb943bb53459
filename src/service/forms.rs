use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::service::listing::CATEGORY_TAGS;
use crate::service::upload::ReceivedForm;

/// A numbered slot group the admin form submits, e.g. floorImg1..floorImg10.
/// Positions come from the field names, so a gap in the form leaves an empty
/// slot instead of shifting the rest.
pub struct FieldGroup {
    pub prefix: &'static str,
    pub base: usize,
    pub len: usize,
}

pub const FLOOR_IMGS: FieldGroup = FieldGroup { prefix: "floorImg", base: 1, len: 10 };
pub const LOGOS: FieldGroup = FieldGroup { prefix: "logo", base: 1, len: 10 };
pub const DIS_TEXTS: FieldGroup = FieldGroup { prefix: "dis", base: 1, len: 10 };
pub const LOGO_TEXTS: FieldGroup = FieldGroup { prefix: "logoText", base: 1, len: 10 };
pub const VIRTUAL_IMGS: FieldGroup = FieldGroup { prefix: "virtualImg", base: 1, len: 8 };
// The gallery form numbers its video inputs 8, 9 and 10.
pub const VIRTUAL_VIDS: FieldGroup = FieldGroup { prefix: "virtualVid", base: 8, len: 3 };
pub const PDFS: FieldGroup = FieldGroup { prefix: "pdf", base: 1, len: 4 };

impl FieldGroup {
    pub fn collect(&self, form: &ReceivedForm) -> Vec<String> {
        (self.base..self.base + self.len)
            .map(|slot| form.file_or_text(&format!("{}{}", self.prefix, slot)))
            .collect()
    }
}

/// Category tags may arrive as repeated fields, as one comma separated
/// string, or both. Unknown tags are dropped, known ones keep their first
/// position.
pub fn parse_categories(values: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for value in values {
        for tag in value.split(',') {
            let tag = tag.trim();
            if tag.is_empty() {
                continue;
            }
            if CATEGORY_TAGS.contains(&tag) && !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
    }

    tags
}

/// Possession dates arrive from a date input. Anything unparseable is stored
/// as no date rather than failing the whole submission.
pub fn parse_possession(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// One fully normalized listing submission, shared by properties and tasks.
#[derive(Debug, Clone)]
pub struct ListingForm {
    pub image_url: String,
    pub name: String,
    pub by: String,
    pub location: String,
    pub price: String,
    pub status: String,
    pub configuration: String,
    pub possession: Option<DateTime<Utc>>,
    pub units: String,
    pub land: String,
    pub residence: String,
    pub builtup: String,
    pub blocks: String,
    pub floor: String,
    pub noofunits: String,
    pub rera: String,
    pub highlight: String,
    pub about: String,
    pub unitytype: String,
    pub size: String,
    pub range: String,
    pub booking: String,
    pub token: String,
    pub plans: String,
    pub amenities: String,
    pub virtual_tour: String,
    pub payment: String,
    pub categories: Vec<String>,
    pub floor_imgs: Vec<String>,
    pub logos: Vec<String>,
    pub dis_texts: Vec<String>,
    pub logo_texts: Vec<String>,
    pub virtual_imgs: Vec<String>,
    pub virtual_vids: Vec<String>,
    pub pdfs: Vec<String>,
}

impl ListingForm {
    pub fn from_received(form: &ReceivedForm) -> Self {
        ListingForm {
            image_url: form.file_or_text("imageUrl"),
            name: form.text("name"),
            by: form.text("by"),
            location: form.text("location"),
            price: form.text("price"),
            status: form.text("status"),
            configuration: form.text("configuration"),
            possession: parse_possession(&form.text("possession")),
            units: form.text("units"),
            land: form.text("land"),
            residence: form.text("residence"),
            builtup: form.text("builtup"),
            blocks: form.text("blocks"),
            floor: form.text("floor"),
            noofunits: form.text("noofunits"),
            rera: form.text("rera"),
            highlight: form.text("highlight"),
            about: form.text("about"),
            unitytype: form.text("unitytype"),
            size: form.text("size"),
            range: form.text("range"),
            booking: form.text("booking"),
            token: form.text("token"),
            plans: form.text("plans"),
            amenities: form.text("amenities"),
            virtual_tour: form.text("virtual"),
            payment: form.text("payment"),
            categories: parse_categories(form.texts("categories")),
            floor_imgs: FLOOR_IMGS.collect(form),
            logos: LOGOS.collect(form),
            dis_texts: DIS_TEXTS.collect(form),
            logo_texts: LOGO_TEXTS.collect(form),
            virtual_imgs: VIRTUAL_IMGS.collect(form),
            virtual_vids: VIRTUAL_VIDS.collect(form),
            pdfs: PDFS.collect(form),
        }
    }
}

/// A developer showcase card. Only the logo is a file part.
#[derive(Debug, Clone)]
pub struct TestForm {
    pub logo: String,
    pub name: String,
    pub long_description: String,
    pub city_present: String,
}

impl TestForm {
    pub fn from_received(form: &ReceivedForm) -> Self {
        TestForm {
            logo: form.file("logo").map(str::to_owned).unwrap_or_default(),
            name: form.text("name"),
            long_description: form.text("longDescription"),
            city_present: form.text("cityPresent"),
        }
    }

    // The edit form echoes the stored logo path in `existingLogo`; a fresh
    // upload wins when both are present.
    pub fn from_received_for_update(form: &ReceivedForm) -> Self {
        let mut data = Self::from_received(form);
        if data.logo.is_empty() {
            data.logo = form.text("existingLogo");
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(fields: &[(&str, &str)], files: &[(&str, &str)]) -> ReceivedForm {
        let mut form = ReceivedForm::default();
        for (name, value) in fields {
            form.fields
                .entry(name.to_string())
                .or_default()
                .push(value.to_string());
        }
        for (name, path) in files {
            form.files.insert(name.to_string(), path.to_string());
        }
        form
    }

    #[test]
    fn categories_parse_the_same_from_a_string_or_repeated_fields() {
        let joined = form_with(&[("categories", "Hero,Spotlight")], &[]);
        let repeated = form_with(&[("categories", "Hero"), ("categories", "Spotlight")], &[]);

        let from_joined = parse_categories(joined.texts("categories"));
        let from_repeated = parse_categories(repeated.texts("categories"));

        assert_eq!(from_joined, from_repeated);
        assert_eq!(from_joined, vec!["Hero".to_string(), "Spotlight".to_string()]);
    }

    #[test]
    fn unknown_categories_are_dropped_and_duplicates_collapse() {
        let form = form_with(
            &[("categories", "Hero, Penthouse Picks ,Hero,Spotlight")],
            &[],
        );

        assert_eq!(
            parse_categories(form.texts("categories")),
            vec!["Hero".to_string(), "Spotlight".to_string()]
        );
    }

    #[test]
    fn group_slots_keep_their_positions() {
        let form = form_with(
            &[("floorImg7", "uploads/echoed-plan.png")],
            &[("floorImg3", "uploads/170000-0.png")],
        );

        let slots = FLOOR_IMGS.collect(&form);

        assert_eq!(slots.len(), 10);
        assert_eq!(slots[2], "uploads/170000-0.png");
        assert_eq!(slots[6], "uploads/echoed-plan.png");
        assert_eq!(slots[0], "");
        assert_eq!(slots[9], "");
    }

    #[test]
    fn video_slots_number_from_eight() {
        let form = form_with(&[], &[("virtualVid8", "uploads/tour.mp4")]);

        let slots = VIRTUAL_VIDS.collect(&form);

        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0], "uploads/tour.mp4");
        assert_eq!(slots[1], "");
        assert_eq!(slots[2], "");
    }

    #[test]
    fn possession_accepts_a_date_or_a_full_timestamp() {
        assert_eq!(
            parse_possession("2026-03-01"),
            Some(Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            parse_possession("2026-03-01T10:30:00Z"),
            Some(Utc.with_ymd_and_hms(2026, 3, 1, 10, 30, 0).unwrap())
        );
        assert_eq!(parse_possession("early next year"), None);
        assert_eq!(parse_possession(""), None);
    }

    #[test]
    fn a_listing_form_pulls_slots_files_and_texts_together() {
        let form = form_with(
            &[
                ("name", "Lake View Residency"),
                ("by", "Horizon Homes"),
                ("virtual", "https://tour.example/lake-view"),
                ("categories", "Hero"),
                ("dis1", "Clubhouse"),
                ("possession", "2027-06-01"),
            ],
            &[("imageUrl", "uploads/171000-1.jpg")],
        );

        let data = ListingForm::from_received(&form);

        assert_eq!(data.name, "Lake View Residency");
        assert_eq!(data.by, "Horizon Homes");
        assert_eq!(data.image_url, "uploads/171000-1.jpg");
        assert_eq!(data.virtual_tour, "https://tour.example/lake-view");
        assert_eq!(data.categories, vec!["Hero".to_string()]);
        assert_eq!(data.dis_texts[0], "Clubhouse");
        assert_eq!(
            data.possession,
            Some(Utc.with_ymd_and_hms(2027, 6, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(data.floor_imgs, vec![String::new(); 10]);
    }

    #[test]
    fn an_edited_slot_prefers_the_fresh_upload_over_the_echoed_path() {
        let form = form_with(
            &[("imageUrl", "uploads/old-front.jpg")],
            &[("imageUrl", "uploads/new-front.jpg")],
        );

        let data = ListingForm::from_received(&form);

        assert_eq!(data.image_url, "uploads/new-front.jpg");
    }

    #[test]
    fn a_test_card_update_keeps_the_existing_logo_without_a_new_upload() {
        let echoed = form_with(
            &[("existingLogo", "uploads/logo.png"), ("name", "DLF")],
            &[],
        );
        let replaced = form_with(
            &[("existingLogo", "uploads/logo.png")],
            &[("logo", "uploads/fresh-logo.png")],
        );

        assert_eq!(
            TestForm::from_received_for_update(&echoed).logo,
            "uploads/logo.png"
        );
        assert_eq!(
            TestForm::from_received_for_update(&replaced).logo,
            "uploads/fresh-logo.png"
        );
    }
}
