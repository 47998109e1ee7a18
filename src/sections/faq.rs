use yew::prelude::*;

use crate::content::FaqEntry;
use crate::reveal::{stagger_style, use_reveal, Stagger, REVEAL_THRESHOLD};
use crate::theme::{StyleBundle, Theme};

const STAGGER_STEP_MS: u32 = 100;

/// At most one item is open at a time. Selecting the open item closes it,
/// selecting any other item moves the open slot there.
fn toggle(open: Option<usize>, selected: usize) -> Option<usize> {
    if open == Some(selected) {
        None
    } else {
        Some(selected)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub theme: Theme,
    pub faqs: Option<Vec<FaqEntry>>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let (root, revealed) = use_reveal(REVEAL_THRESHOLD);
    let open = use_state(|| None::<usize>);

    let faqs = match props.faqs.as_ref() {
        Some(faqs) if !faqs.is_empty() => faqs,
        _ => return html! {},
    };

    let bundle = StyleBundle::resolve(props.theme);
    let mut stagger = Stagger::new(STAGGER_STEP_MS);

    let header_delay = stagger.delay();
    let items_base = stagger.position();
    stagger.skip(faqs.len());

    html! {
        <section
            ref={root}
            class={classes!(
                "faq-section",
                "content-section",
                "reveal-group",
                bundle.surface,
                if revealed { "visible" } else { "" }
            )}
        >
            <div class="section-inner narrow">
                <div class="section-header reveal-item" style={header_delay}>
                    <span class={classes!("icon-badge", bundle.accent)}>{"❓"}</span>
                    <h2 class={classes!(bundle.text_main)}>{"Frequently Asked Questions"}</h2>
                    <p class={classes!("section-lede", bundle.text_soft)}>
                        {"Everything you need to know about our platform"}
                    </p>
                </div>

                <div class="faq-list">
                    { for faqs.iter().enumerate().map(|(index, entry)| {
                        let is_open = *open == Some(index);
                        let onclick = {
                            let open = open.clone();
                            Callback::from(move |_| open.set(toggle(*open, index)))
                        };
                        html! {
                            <div
                                class={classes!(
                                    "faq-entry",
                                    "card",
                                    "reveal-item",
                                    bundle.surface,
                                    bundle.border,
                                    if is_open { "open" } else { "" }
                                )}
                                style={stagger_style(items_base + index, STAGGER_STEP_MS)}
                            >
                                <button class="faq-question" {onclick}>
                                    <span class={classes!("question-text", bundle.text_main)}>
                                        { &entry.question }
                                    </span>
                                    <span class={classes!("toggle-icon", "plain", bundle.accent)}>
                                        { if is_open { "−" } else { "+" } }
                                    </span>
                                </button>
                                <div class="faq-answer">
                                    <p class={classes!(bundle.text_soft)}>{ &entry.answer }</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="faq-cta reveal-item" style={stagger.delay()}>
                    <p class={classes!(bundle.text_soft)}>{"Still have questions?"}</p>
                    <button class={classes!("faq-cta-button", "solid", bundle.accent)}>
                        {"Contact Support"}
                    </button>
                </div>
            </div>

            <style>
                {r#"
                .faq-section .reveal-item {
                    transform: translateY(20px);
                    transition: opacity 0.5s ease-out, transform 0.5s ease-out;
                }

                .faq-section.visible .reveal-item {
                    transform: translateY(0);
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-entry {
                    border-radius: 12px;
                    border: 1px solid;
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    font: inherit;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }

                .question-text {
                    font-size: 1.1rem;
                    font-weight: 600;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    flex-shrink: 0;
                    transition: transform 0.3s ease;
                }

                .faq-entry.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    opacity: 0;
                    transition: max-height 0.3s ease-in-out, opacity 0.3s ease-in-out;
                    padding: 0 1.5rem;
                }

                .faq-entry.open .faq-answer {
                    max-height: 600px;
                    opacity: 1;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    margin: 0;
                    line-height: 1.7;
                }

                .faq-cta {
                    text-align: center;
                    margin-top: 4rem;
                }

                .faq-cta p {
                    font-size: 1.1rem;
                    margin-bottom: 1.5rem;
                }

                .faq-cta-button {
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 12px;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }

                .faq-cta-button:hover {
                    transform: scale(1.05);
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::toggle;

    #[test]
    fn opening_another_item_closes_the_previous_one() {
        let open = toggle(None, 0);
        assert_eq!(open, Some(0));

        let open = toggle(open, 1);
        assert_eq!(open, Some(1));
    }

    #[test]
    fn selecting_the_open_item_closes_it() {
        let open = toggle(Some(2), 2);
        assert_eq!(open, None);
    }

    #[test]
    fn at_most_one_item_open_across_a_click_sequence() {
        // three items: open the first, then the second, then close it
        let mut open = None;
        open = toggle(open, 0);
        assert_eq!(open, Some(0));
        open = toggle(open, 1);
        assert_eq!(open, Some(1));
        open = toggle(open, 1);
        assert_eq!(open, None);
    }
}
