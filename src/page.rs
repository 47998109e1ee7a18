use yew::prelude::*;

use crate::content::ContentDocument;
use crate::reveal::reveal_styles;
use crate::sections::about::About;
use crate::sections::contact::Contact;
use crate::sections::faq::Faq;
use crate::sections::testimonials::Testimonials;
use crate::theme::{theme_styles, StyleBundle};

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    pub document: ContentDocument,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let doc = &props.document;
    let bundle = StyleBundle::resolve(doc.theme);

    html! {
        <div class={classes!("landing-page", bundle.surface, bundle.text_main)}>
            { theme_styles() }
            { reveal_styles() }

            <About
                theme={doc.theme}
                about={doc.about.clone()}
                business_analysis={doc.business_analysis.clone()}
            />
            <Testimonials theme={doc.theme} social_proof={doc.social_proof.clone()} />
            <Faq theme={doc.theme} faqs={doc.faqs.clone()} />
            <Contact theme={doc.theme} contact={doc.contact.clone()} />

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif;
                }

                .content-section {
                    padding: 6rem 2rem;
                }

                .section-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .section-inner.narrow {
                    max-width: 800px;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-header h2 {
                    font-size: 2.5rem;
                    margin: 0 0 1.25rem;
                }

                .section-lede {
                    font-size: 1.2rem;
                    max-width: 640px;
                    margin: 0 auto;
                    line-height: 1.6;
                }

                .icon-badge {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    font-size: 1.6rem;
                    margin-bottom: 1.5rem;
                }

                @media (max-width: 768px) {
                    .content-section {
                        padding: 4rem 1rem;
                    }

                    .section-header {
                        margin-bottom: 2.5rem;
                    }

                    .section-header h2 {
                        font-size: 1.9rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
