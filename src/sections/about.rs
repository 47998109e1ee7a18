use yew::prelude::*;

use crate::content::{capped, present, BusinessAnalysis};
use crate::reveal::{use_reveal, Stagger, REVEAL_THRESHOLD};
use crate::theme::{StyleBundle, StyleToken, Theme};

const STAGGER_STEP_MS: u32 = 200;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub theme: Theme,
    pub about: Option<String>,
    pub business_analysis: Option<BusinessAnalysis>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let (root, revealed) = use_reveal(REVEAL_THRESHOLD);

    let has_analysis = props
        .business_analysis
        .as_ref()
        .map_or(false, |analysis| analysis.has_content());
    if !present(&props.about) && !has_analysis {
        return html! {};
    }

    let bundle = StyleBundle::resolve(props.theme);
    let mut stagger = Stagger::new(STAGGER_STEP_MS);

    let analysis = props.business_analysis.as_ref();
    let business_type = analysis
        .and_then(|a| a.business_type.as_ref())
        .filter(|v| !v.is_empty());
    let target_audience = analysis
        .and_then(|a| a.target_audience.as_ref())
        .filter(|v| !v.is_empty());
    let business_model = analysis
        .and_then(|a| a.business_model.as_ref())
        .filter(|v| !v.is_empty());
    let value_props = analysis.map(|a| a.value_props()).unwrap_or(&[]);
    let has_cards = business_type.is_some() || target_audience.is_some() || business_model.is_some();

    html! {
        <section
            ref={root}
            class={classes!(
                "about-section",
                "content-section",
                "reveal-group",
                bundle.surface,
                if revealed { "visible" } else { "" }
            )}
        >
            <div class="section-inner">
                <div class="section-header reveal-item" style={stagger.delay()}>
                    <span class={classes!("icon-badge", bundle.accent)}>{"ℹ️"}</span>
                    <h2 class={classes!(bundle.text_main)}>{"About Our Platform"}</h2>
                    <p class={classes!("section-lede", bundle.text_soft)}>
                        {"Learn more about our mission and what makes us different"}
                    </p>
                </div>

                {
                    if let Some(text) = props.about.as_ref().filter(|text| !text.is_empty()) {
                        html! {
                            <div class={classes!("about-prose", "reveal-item", bundle.text_soft)} style={stagger.delay()}>
                                { for text.split('\n').filter(|p| !p.is_empty()).map(|paragraph| html! {
                                    <p>{ paragraph }</p>
                                }) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if has_cards {
                        html! {
                            <div class="about-cards">
                                {
                                    if let Some(kind) = business_type {
                                        analysis_card(&bundle, bundle.accent, "🎯", "What We Are", kind, stagger.delay())
                                    } else {
                                        html! {}
                                    }
                                }
                                {
                                    if let Some(audience) = target_audience {
                                        analysis_card(&bundle, bundle.accent_second, "⚡", "Who We Serve", audience, stagger.delay())
                                    } else {
                                        html! {}
                                    }
                                }
                                {
                                    if let Some(model) = business_model {
                                        analysis_card(&bundle, bundle.accent_third, "🛡️", "How We Work", model, stagger.delay())
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if !value_props.is_empty() {
                        html! {
                            <div class="value-props reveal-item" style={stagger.delay()}>
                                <h3 class={classes!(bundle.text_main)}>{"Why Choose Us"}</h3>
                                <div class="value-prop-grid">
                                    { for capped(value_props).iter().map(|prop| html! {
                                        <div class={classes!("value-prop", "card", bundle.surface)}>
                                            <span class={classes!("dot", bundle.accent)}></span>
                                            <p class={classes!(bundle.text_soft)}>{ prop }</p>
                                        </div>
                                    }) }
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <style>
                {r#"
                .about-prose {
                    max-width: 760px;
                    margin: 0 auto 4rem;
                    font-size: 1.1rem;
                    line-height: 1.7;
                }

                .about-prose p {
                    margin-bottom: 1.5rem;
                }

                .about-cards {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                }

                .about-card {
                    padding: 1.5rem;
                    border-radius: 12px;
                    border: 1px solid;
                }

                .about-card .icon-badge {
                    width: 48px;
                    height: 48px;
                    font-size: 1.3rem;
                    margin-bottom: 1rem;
                }

                .about-card h3 {
                    font-size: 1.15rem;
                    margin: 0 0 0.75rem;
                }

                .about-card p {
                    font-size: 0.95rem;
                    line-height: 1.6;
                    margin: 0;
                }

                .value-props {
                    margin-top: 4rem;
                }

                .value-props h3 {
                    text-align: center;
                    font-size: 1.6rem;
                    margin-bottom: 2rem;
                }

                .value-prop-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1rem;
                }

                .value-prop {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    padding: 1rem;
                    border-radius: 8px;
                }

                .value-prop .dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    margin-top: 0.5rem;
                    flex-shrink: 0;
                }

                .value-prop p {
                    font-size: 0.95rem;
                    line-height: 1.6;
                    margin: 0;
                }

                @media (max-width: 768px) {
                    .about-prose {
                        margin-bottom: 2.5rem;
                    }

                    .value-props {
                        margin-top: 2.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

fn analysis_card(
    bundle: &StyleBundle,
    accent: StyleToken,
    icon: &str,
    title: &str,
    body: &str,
    delay: String,
) -> Html {
    html! {
        <div class={classes!("about-card", "card", "reveal-item", bundle.surface, bundle.border)} style={delay}>
            <span class={classes!("icon-badge", accent)}>{ icon }</span>
            <h3 class={classes!(bundle.text_main)}>{ title }</h3>
            <p class={classes!(bundle.text_soft)}>{ body }</p>
        </div>
    }
}
