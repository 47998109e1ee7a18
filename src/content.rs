use serde::Deserialize;

use crate::theme::Theme;

/// Maximum number of entries rendered from a capped list (value props,
/// testimonials). Extra entries are truncated, not paginated.
pub const MAX_LIST_ITEMS: usize = 6;

pub fn capped<T>(items: &[T]) -> &[T] {
    &items[..items.len().min(MAX_LIST_ITEMS)]
}

/// A string leaf counts as present only when it is non-empty.
pub fn present(field: &Option<String>) -> bool {
    field.as_ref().map_or(false, |value| !value.is_empty())
}

/// The content document the page is rendered from. Produced elsewhere,
/// read-only here. Every section is optional and may be omitted entirely.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentDocument {
    pub theme: Theme,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default, rename = "businessAnalysis")]
    pub business_analysis: Option<BusinessAnalysis>,
    #[serde(default)]
    pub contact: Option<ContactInfo>,
    #[serde(default)]
    pub faqs: Option<Vec<FaqEntry>>,
    #[serde(default, rename = "socialProof")]
    pub social_proof: Option<SocialProof>,
}

impl ContentDocument {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn show_about(&self) -> bool {
        present(&self.about)
            || self
                .business_analysis
                .as_ref()
                .map_or(false, |analysis| analysis.has_content())
    }

    pub fn show_contact(&self) -> bool {
        self.contact.as_ref().map_or(false, |info| info.has_content())
    }

    pub fn show_faqs(&self) -> bool {
        self.faqs.as_ref().map_or(false, |faqs| !faqs.is_empty())
    }

    pub fn show_testimonials(&self) -> bool {
        self.social_proof
            .as_ref()
            .map_or(false, |proof| proof.has_content())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct BusinessAnalysis {
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub business_model: Option<String>,
    #[serde(default)]
    pub key_value_props: Option<Vec<String>>,
}

impl BusinessAnalysis {
    pub fn has_content(&self) -> bool {
        present(&self.business_type)
            || present(&self.target_audience)
            || present(&self.business_model)
            || !self.value_props().is_empty()
    }

    pub fn value_props(&self) -> &[String] {
        self.key_value_props.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl ContactInfo {
    /// A contact record with every field missing renders nothing, same as an
    /// absent record.
    pub fn has_content(&self) -> bool {
        present(&self.email) || present(&self.phone) || present(&self.address)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct SocialProof {
    #[serde(default)]
    pub testimonials: Option<Vec<Testimonial>>,
    #[serde(default)]
    pub stats: Option<Vec<Stat>>,
    #[serde(default)]
    pub logos: Option<Vec<String>>,
}

impl SocialProof {
    /// Testimonials gate the whole section; stats and logos are sub-blocks
    /// that only ever render alongside them.
    pub fn has_content(&self) -> bool {
        !self.testimonials().is_empty()
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        self.testimonials.as_deref().unwrap_or(&[])
    }

    pub fn stats(&self) -> &[Stat] {
        self.stats.as_deref().unwrap_or(&[])
    }

    pub fn logos(&self) -> &[String] {
        self.logos.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_document(theme: Theme) -> ContentDocument {
        ContentDocument {
            theme,
            about: None,
            business_analysis: None,
            contact: None,
            faqs: None,
            social_proof: None,
        }
    }

    #[test]
    fn empty_string_counts_as_absent() {
        assert!(!present(&None));
        assert!(!present(&Some(String::new())));
        assert!(present(&Some("hello".to_string())));
    }

    #[test]
    fn about_hidden_without_text_or_analysis() {
        let mut doc = empty_document(Theme::DarkGlossy);
        assert!(!doc.show_about());

        doc.about = Some(String::new());
        assert!(!doc.show_about());

        doc.business_analysis = Some(BusinessAnalysis::default());
        assert!(!doc.show_about());

        doc.business_analysis = Some(BusinessAnalysis {
            business_type: Some("SaaS platform".to_string()),
            ..BusinessAnalysis::default()
        });
        assert!(doc.show_about());
    }

    #[test]
    fn about_shown_with_text_alone() {
        let mut doc = empty_document(Theme::LightClean);
        doc.about = Some("We build things.".to_string());
        assert!(doc.show_about());
    }

    #[test]
    fn contact_record_with_no_fields_is_hidden() {
        let mut doc = empty_document(Theme::DarkGlossy);
        doc.contact = Some(ContactInfo::default());
        assert!(!doc.show_contact());

        doc.contact = Some(ContactInfo {
            phone: Some("+1 555 0100".to_string()),
            ..ContactInfo::default()
        });
        assert!(doc.show_contact());
    }

    #[test]
    fn empty_faq_list_equals_absent() {
        let mut doc = empty_document(Theme::DarkGlossy);
        assert!(!doc.show_faqs());

        doc.faqs = Some(Vec::new());
        assert!(!doc.show_faqs());

        doc.faqs = Some(vec![FaqEntry {
            question: "Is it free?".to_string(),
            answer: "Yes.".to_string(),
        }]);
        assert!(doc.show_faqs());
    }

    #[test]
    fn testimonials_gate_ignores_stats_and_logos() {
        let mut doc = empty_document(Theme::DarkGlossy);
        doc.social_proof = Some(SocialProof {
            stats: Some(vec![Stat {
                label: "Users".to_string(),
                value: "10k".to_string(),
            }]),
            logos: Some(vec!["Acme".to_string()]),
            ..SocialProof::default()
        });
        assert!(!doc.show_testimonials());

        doc.social_proof = Some(SocialProof {
            testimonials: Some(vec![Testimonial {
                quote: "Great.".to_string(),
                name: "Ada".to_string(),
                role: "CTO".to_string(),
                company: "Acme".to_string(),
            }]),
            ..SocialProof::default()
        });
        assert!(doc.show_testimonials());
    }

    #[test]
    fn capped_keeps_first_six_in_order() {
        let items: Vec<u32> = (0..8).collect();
        assert_eq!(capped(&items), &[0, 1, 2, 3, 4, 5]);

        let short: Vec<u32> = (0..3).collect();
        assert_eq!(capped(&short), &[0, 1, 2]);
    }

    #[test]
    fn parses_camel_case_section_keys() {
        let doc = ContentDocument::from_json(
            r#"{
                "theme": "dark-glossy",
                "businessAnalysis": {"business_type": "Marketplace"},
                "socialProof": {"logos": ["Acme"]}
            }"#,
        )
        .unwrap();
        assert_eq!(doc.theme, Theme::DarkGlossy);
        assert!(doc.business_analysis.is_some());
        assert_eq!(doc.social_proof.unwrap().logos(), ["Acme".to_string()]);
    }

    #[test]
    fn unknown_theme_fails_to_parse() {
        let err = ContentDocument::from_json(r#"{"theme": "sepia-retro"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn gates_follow_document_shape_end_to_end() {
        let doc = ContentDocument::from_json(
            r#"{
                "theme": "light-clean",
                "contact": {"email": "a@b.com"},
                "faqs": [],
                "about": null
            }"#,
        )
        .unwrap();
        assert_eq!(doc.theme, Theme::LightClean);
        assert!(doc.show_contact());
        assert!(!doc.show_faqs());
        assert!(!doc.show_about());
        assert!(!doc.show_testimonials());
        assert_eq!(doc.contact.unwrap().email.as_deref(), Some("a@b.com"));
    }
}
