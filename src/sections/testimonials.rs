use yew::prelude::*;

use crate::content::{capped, SocialProof};
use crate::reveal::{stagger_style, use_reveal, Stagger, REVEAL_THRESHOLD};
use crate::theme::{StyleBundle, Theme};

const STAGGER_STEP_MS: u32 = 200;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub theme: Theme,
    pub social_proof: Option<SocialProof>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let (root, revealed) = use_reveal(REVEAL_THRESHOLD);

    let proof = match props.social_proof.as_ref() {
        Some(proof) if proof.has_content() => proof,
        _ => return html! {},
    };

    let bundle = StyleBundle::resolve(props.theme);
    let mut stagger = Stagger::new(STAGGER_STEP_MS);

    // everything past the cap is simply not rendered
    let shown = capped(proof.testimonials());
    let stats = proof.stats();
    let logos = proof.logos();

    let header_delay = stagger.delay();
    let cards_base = stagger.position();
    stagger.skip(shown.len());

    html! {
        <section
            ref={root}
            class={classes!(
                "testimonials-section",
                "content-section",
                "reveal-group",
                bundle.surface,
                if revealed { "visible" } else { "" }
            )}
        >
            <div class="section-inner">
                <div class="section-header reveal-item" style={header_delay}>
                    <h2 class={classes!(bundle.text_main)}>{"What Our Users Say"}</h2>
                    <p class={classes!("section-lede", bundle.text_soft)}>
                        {"Join thousands of satisfied customers who trust our platform"}
                    </p>
                </div>

                <div class="testimonial-grid">
                    { for shown.iter().enumerate().map(|(index, testimonial)| {
                        let initial: String = testimonial.name.chars().take(1).collect();
                        html! {
                            <div
                                class={classes!("testimonial-card", "card", "reveal-item", bundle.surface, bundle.border)}
                                style={stagger_style(cards_base + index, STAGGER_STEP_MS)}
                            >
                                <span class={classes!("quote-mark", "plain", bundle.accent)}>{"❝"}</span>
                                <div class="star-row">{"★★★★★"}</div>
                                <blockquote class={classes!(bundle.text_soft)}>
                                    { format!("\u{201c}{}\u{201d}", testimonial.quote) }
                                </blockquote>
                                <div class="testimonial-author">
                                    <span class={classes!("author-avatar", "solid", bundle.accent)}>{ initial }</span>
                                    <div>
                                        <div class={classes!("author-name", bundle.text_main)}>
                                            { &testimonial.name }
                                        </div>
                                        <div class={classes!("author-role", bundle.text_soft)}>
                                            { format!("{} at {}", testimonial.role, testimonial.company) }
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                {
                    if !stats.is_empty() {
                        html! {
                            <div class="stats-grid reveal-item" style={stagger.delay()}>
                                { for stats.iter().map(|stat| html! {
                                    <div class={classes!("stat-card", "card", bundle.surface, bundle.border)}>
                                        <div class={classes!("stat-value", "plain", bundle.accent)}>{ &stat.value }</div>
                                        <div class={classes!("stat-label", bundle.text_soft)}>{ &stat.label }</div>
                                    </div>
                                }) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if !logos.is_empty() {
                        html! {
                            <div class="logo-strip reveal-item" style={stagger.delay()}>
                                <p class={classes!(bundle.text_soft)}>{"Powered by industry leaders"}</p>
                                <div class="logo-row">
                                    { for logos.iter().map(|logo| html! {
                                        <span class={classes!("logo-chip", "card", bundle.surface, bundle.text_soft)}>
                                            { logo }
                                        </span>
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
                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }

                .testimonial-card {
                    position: relative;
                    padding: 2rem;
                    border-radius: 16px;
                    border: 1px solid;
                }

                .quote-mark {
                    position: absolute;
                    top: 1.25rem;
                    right: 1.5rem;
                    font-size: 2rem;
                    opacity: 0.35;
                }

                .star-row {
                    color: #facc15;
                    letter-spacing: 0.2rem;
                    margin-bottom: 1rem;
                }

                .testimonial-card blockquote {
                    font-size: 1.05rem;
                    line-height: 1.7;
                    margin: 0 0 1.5rem;
                }

                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .author-avatar {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 600;
                    flex-shrink: 0;
                }

                .author-name {
                    font-weight: 600;
                }

                .author-role {
                    font-size: 0.85rem;
                }

                .stats-grid {
                    margin-top: 5rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 2rem;
                }

                .stat-card {
                    text-align: center;
                    padding: 1.5rem;
                    border-radius: 12px;
                    border: 1px solid;
                }

                .stat-value {
                    font-size: 2rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .stat-label {
                    font-size: 0.9rem;
                    font-weight: 500;
                }

                .logo-strip {
                    margin-top: 4rem;
                    text-align: center;
                }

                .logo-strip p {
                    font-size: 0.9rem;
                    font-weight: 500;
                    margin-bottom: 2rem;
                }

                .logo-row {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    align-items: center;
                    gap: 2rem;
                }

                .logo-chip {
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    font-weight: 500;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use crate::content::{capped, Testimonial};

    fn testimonial(n: usize) -> Testimonial {
        Testimonial {
            quote: format!("Quote {n}"),
            name: format!("Name {n}"),
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
        }
    }

    #[test]
    fn renders_at_most_six_testimonials_in_source_order() {
        let all: Vec<Testimonial> = (0..8).map(testimonial).collect();
        let shown = capped(&all);
        assert_eq!(shown.len(), 6);
        for (i, t) in shown.iter().enumerate() {
            assert_eq!(t.quote, format!("Quote {i}"));
        }
    }
}
