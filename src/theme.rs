use serde::Deserialize;
use yew::prelude::*;

/// The closed set of page themes. Exactly one is active per document and
/// there is no fallback: a document naming anything else fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Theme {
    #[serde(rename = "dark-glossy")]
    DarkGlossy,
    #[serde(rename = "light-clean")]
    LightClean,
    #[serde(rename = "vibrant-bold")]
    VibrantBold,
}

/// Styling purposes every section draws from. Each resolves independently
/// per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualRole {
    BackgroundSurface,
    AccentPrimary,
    AccentSecondary,
    AccentTertiary,
    TextPrimary,
    TextSecondary,
    Border,
}

pub type StyleToken = &'static str;

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::DarkGlossy, Theme::LightClean, Theme::VibrantBold];

    /// Total mapping from (theme, role) to a class token. Kept as a single
    /// match with no wildcard arm: adding a theme variant refuses to compile
    /// until every role row is extended.
    pub fn resolve(self, role: VisualRole) -> StyleToken {
        match (self, role) {
            (Theme::DarkGlossy, VisualRole::BackgroundSurface) => "surface-dark-glossy",
            (Theme::DarkGlossy, VisualRole::AccentPrimary) => "accent-dark-glossy",
            (Theme::DarkGlossy, VisualRole::AccentSecondary) => "accent-second-dark-glossy",
            (Theme::DarkGlossy, VisualRole::AccentTertiary) => "accent-third-dark-glossy",
            (Theme::DarkGlossy, VisualRole::TextPrimary) => "text-main-dark-glossy",
            (Theme::DarkGlossy, VisualRole::TextSecondary) => "text-soft-dark-glossy",
            (Theme::DarkGlossy, VisualRole::Border) => "border-dark-glossy",

            (Theme::LightClean, VisualRole::BackgroundSurface) => "surface-light-clean",
            (Theme::LightClean, VisualRole::AccentPrimary) => "accent-light-clean",
            (Theme::LightClean, VisualRole::AccentSecondary) => "accent-second-light-clean",
            (Theme::LightClean, VisualRole::AccentTertiary) => "accent-third-light-clean",
            (Theme::LightClean, VisualRole::TextPrimary) => "text-main-light-clean",
            (Theme::LightClean, VisualRole::TextSecondary) => "text-soft-light-clean",
            (Theme::LightClean, VisualRole::Border) => "border-light-clean",

            (Theme::VibrantBold, VisualRole::BackgroundSurface) => "surface-vibrant-bold",
            (Theme::VibrantBold, VisualRole::AccentPrimary) => "accent-vibrant-bold",
            (Theme::VibrantBold, VisualRole::AccentSecondary) => "accent-second-vibrant-bold",
            (Theme::VibrantBold, VisualRole::AccentTertiary) => "accent-third-vibrant-bold",
            (Theme::VibrantBold, VisualRole::TextPrimary) => "text-main-vibrant-bold",
            (Theme::VibrantBold, VisualRole::TextSecondary) => "text-soft-vibrant-bold",
            (Theme::VibrantBold, VisualRole::Border) => "border-vibrant-bold",
        }
    }
}

impl VisualRole {
    pub const ALL: [VisualRole; 7] = [
        VisualRole::BackgroundSurface,
        VisualRole::AccentPrimary,
        VisualRole::AccentSecondary,
        VisualRole::AccentTertiary,
        VisualRole::TextPrimary,
        VisualRole::TextSecondary,
        VisualRole::Border,
    ];
}

/// All seven role tokens resolved for one theme. Recomputed per render,
/// cheap enough that caching would buy nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBundle {
    pub surface: StyleToken,
    pub accent: StyleToken,
    pub accent_second: StyleToken,
    pub accent_third: StyleToken,
    pub text_main: StyleToken,
    pub text_soft: StyleToken,
    pub border: StyleToken,
}

impl StyleBundle {
    pub fn resolve(theme: Theme) -> Self {
        Self {
            surface: theme.resolve(VisualRole::BackgroundSurface),
            accent: theme.resolve(VisualRole::AccentPrimary),
            accent_second: theme.resolve(VisualRole::AccentSecondary),
            accent_third: theme.resolve(VisualRole::AccentTertiary),
            text_main: theme.resolve(VisualRole::TextPrimary),
            text_soft: theme.resolve(VisualRole::TextSecondary),
            border: theme.resolve(VisualRole::Border),
        }
    }
}

/// Stylesheet behind every token class, for all themes at once. Token
/// classes are scoped by element kind where the same role paints
/// differently (section stripe vs card, badge vs solid button).
pub fn theme_styles() -> Html {
    html! {
        <style>
            {r#"
            /* background surfaces */
            .content-section.surface-dark-glossy { background: rgba(31, 41, 55, 0.45); }
            .content-section.surface-light-clean { background: #f9fafb; }
            .content-section.surface-vibrant-bold { background: rgba(31, 41, 55, 0.45); }

            .card.surface-dark-glossy { background: rgba(255, 255, 255, 0.05); backdrop-filter: blur(4px); }
            .card.surface-light-clean { background: #ffffff; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08); }
            .card.surface-vibrant-bold { background: rgba(255, 255, 255, 0.05); backdrop-filter: blur(4px); }

            .landing-page.surface-dark-glossy { background: #0b1120; }
            .landing-page.surface-light-clean { background: #ffffff; }
            .landing-page.surface-vibrant-bold { background: #0b1120; }

            /* primary accent: badge form, solid form, dot form */
            .accent-dark-glossy { background: rgba(59, 130, 246, 0.2); color: #60a5fa; }
            .accent-light-clean { background: #dbeafe; color: #2563eb; }
            .accent-vibrant-bold { background: rgba(236, 72, 153, 0.2); color: #f472b6; }

            .solid.accent-dark-glossy { background: #3b82f6; color: #ffffff; box-shadow: 0 10px 20px rgba(59, 130, 246, 0.25); }
            .solid.accent-light-clean { background: #2563eb; color: #ffffff; box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15); }
            .solid.accent-vibrant-bold { background: #ec4899; color: #ffffff; box-shadow: 0 10px 20px rgba(236, 72, 153, 0.25); }

            .dot.accent-dark-glossy { background: #60a5fa; }
            .dot.accent-light-clean { background: #2563eb; }
            .dot.accent-vibrant-bold { background: #f472b6; }

            /* secondary and tertiary accents, badge form */
            .accent-second-dark-glossy { background: rgba(34, 197, 94, 0.2); color: #4ade80; }
            .accent-second-light-clean { background: #dcfce7; color: #16a34a; }
            .accent-second-vibrant-bold { background: rgba(34, 197, 94, 0.2); color: #4ade80; }

            .accent-third-dark-glossy { background: rgba(168, 85, 247, 0.2); color: #c084fc; }
            .accent-third-light-clean { background: #f3e8ff; color: #9333ea; }
            .accent-third-vibrant-bold { background: rgba(168, 85, 247, 0.2); color: #c084fc; }

            /* accent used as plain text, no fill */
            .plain.accent-dark-glossy, .plain.accent-light-clean, .plain.accent-vibrant-bold {
                background: transparent;
            }

            /* text */
            .text-main-dark-glossy { color: #ffffff; }
            .text-main-light-clean { color: #111827; }
            .text-main-vibrant-bold { color: #ffffff; }

            .text-soft-dark-glossy { color: #d1d5db; }
            .text-soft-light-clean { color: #4b5563; }
            .text-soft-vibrant-bold { color: #d1d5db; }

            /* borders, elements set their own width and style */
            .border-dark-glossy { border-color: rgba(255, 255, 255, 0.1); }
            .border-light-clean { border-color: #e5e7eb; }
            .border-vibrant-bold { border-color: rgba(255, 255, 255, 0.1); }
            "#}
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_pair_resolves_to_a_token() {
        for theme in Theme::ALL {
            for role in VisualRole::ALL {
                assert!(!theme.resolve(role).is_empty(), "{theme:?}/{role:?}");
            }
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        for theme in Theme::ALL {
            for role in VisualRole::ALL {
                assert_eq!(theme.resolve(role), theme.resolve(role));
            }
        }
    }

    #[test]
    fn tokens_are_distinct_across_pairs() {
        let mut seen = HashSet::new();
        for theme in Theme::ALL {
            for role in VisualRole::ALL {
                assert!(seen.insert(theme.resolve(role)), "{theme:?}/{role:?}");
            }
        }
        assert_eq!(seen.len(), Theme::ALL.len() * VisualRole::ALL.len());
    }

    #[test]
    fn bundle_matches_per_role_resolution() {
        for theme in Theme::ALL {
            let bundle = StyleBundle::resolve(theme);
            assert_eq!(bundle.surface, theme.resolve(VisualRole::BackgroundSurface));
            assert_eq!(bundle.accent, theme.resolve(VisualRole::AccentPrimary));
            assert_eq!(bundle.accent_second, theme.resolve(VisualRole::AccentSecondary));
            assert_eq!(bundle.accent_third, theme.resolve(VisualRole::AccentTertiary));
            assert_eq!(bundle.text_main, theme.resolve(VisualRole::TextPrimary));
            assert_eq!(bundle.text_soft, theme.resolve(VisualRole::TextSecondary));
            assert_eq!(bundle.border, theme.resolve(VisualRole::Border));
        }
    }

    #[test]
    fn theme_names_parse_from_document_strings() {
        for (name, theme) in [
            ("\"dark-glossy\"", Theme::DarkGlossy),
            ("\"light-clean\"", Theme::LightClean),
            ("\"vibrant-bold\"", Theme::VibrantBold),
        ] {
            let parsed: Theme = serde_json::from_str(name).unwrap();
            assert_eq!(parsed, theme);
        }
    }
}
