use yew::prelude::*;

use crate::content::ContactInfo;
use crate::reveal::{use_reveal, Stagger, REVEAL_THRESHOLD};
use crate::theme::{StyleBundle, StyleToken, Theme};

const STAGGER_STEP_MS: u32 = 200;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub theme: Theme,
    pub contact: Option<ContactInfo>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let (root, revealed) = use_reveal(REVEAL_THRESHOLD);

    let info = match props.contact.as_ref() {
        Some(info) if info.has_content() => info,
        _ => return html! {},
    };

    let bundle = StyleBundle::resolve(props.theme);
    let mut stagger = Stagger::new(STAGGER_STEP_MS);

    let email = info.email.as_ref().filter(|v| !v.is_empty());
    let phone = info.phone.as_ref().filter(|v| !v.is_empty());
    let address = info.address.as_ref().filter(|v| !v.is_empty());

    html! {
        <section
            ref={root}
            class={classes!(
                "contact-section",
                "content-section",
                "reveal-group",
                bundle.surface,
                if revealed { "visible" } else { "" }
            )}
        >
            <div class="section-inner">
                <div class="section-header reveal-item" style={stagger.delay()}>
                    <span class={classes!("icon-badge", bundle.accent)}>{"💬"}</span>
                    <h2 class={classes!(bundle.text_main)}>{"Get In Touch"}</h2>
                    <p class={classes!("section-lede", bundle.text_soft)}>
                        {"Ready to get started? We'd love to hear from you."}
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="contact-info reveal-item" style={stagger.delay()}>
                        <h3 class={classes!(bundle.text_main)}>{"Contact Information"}</h3>
                        {
                            if let Some(email) = email {
                                contact_row(
                                    &bundle,
                                    bundle.accent,
                                    "✉️",
                                    "Email",
                                    html! {
                                        <a href={format!("mailto:{}", email)} class={classes!("contact-link", bundle.text_soft)}>
                                            { email }
                                        </a>
                                    },
                                )
                            } else {
                                html! {}
                            }
                        }
                        {
                            if let Some(phone) = phone {
                                contact_row(
                                    &bundle,
                                    bundle.accent_second,
                                    "📞",
                                    "Phone",
                                    html! {
                                        <a href={format!("tel:{}", phone)} class={classes!("contact-link", bundle.text_soft)}>
                                            { phone }
                                        </a>
                                    },
                                )
                            } else {
                                html! {}
                            }
                        }
                        {
                            if let Some(address) = address {
                                contact_row(
                                    &bundle,
                                    bundle.accent_third,
                                    "📍",
                                    "Location",
                                    html! { <p class={classes!(bundle.text_soft)}>{ address }</p> },
                                )
                            } else {
                                html! {}
                            }
                        }
                    </div>

                    // The form is presentational only, submission belongs to
                    // whoever embeds the page.
                    <div class={classes!("contact-form-card", "card", "reveal-item", bundle.surface, bundle.border)} style={stagger.delay()}>
                        <h3 class={classes!(bundle.text_main)}>{"Send us a message"}</h3>
                        <form class="contact-form">
                            <div class="form-row">
                                <div class="form-field">
                                    <label class={classes!(bundle.text_soft)}>{"Name"}</label>
                                    <input
                                        type="text"
                                        placeholder="Your name"
                                        class={classes!("form-input", bundle.border, bundle.text_main)}
                                    />
                                </div>
                                <div class="form-field">
                                    <label class={classes!(bundle.text_soft)}>{"Email"}</label>
                                    <input
                                        type="email"
                                        placeholder="your@email.com"
                                        class={classes!("form-input", bundle.border, bundle.text_main)}
                                    />
                                </div>
                            </div>
                            <div class="form-field">
                                <label class={classes!(bundle.text_soft)}>{"Message"}</label>
                                <textarea
                                    rows="4"
                                    placeholder="Tell us about your project..."
                                    class={classes!("form-input", bundle.border, bundle.text_main)}
                                />
                            </div>
                            <button type="submit" class={classes!("form-submit", "solid", bundle.accent)}>
                                {"Send Message"}
                            </button>
                        </form>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }

                .contact-info h3 {
                    font-size: 1.5rem;
                    margin: 0 0 1.5rem;
                }

                .contact-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }

                .contact-row .icon-badge {
                    width: 48px;
                    height: 48px;
                    font-size: 1.2rem;
                    flex-shrink: 0;
                }

                .contact-row h4 {
                    margin: 0 0 0.25rem;
                    font-size: 1rem;
                }

                .contact-row p {
                    margin: 0;
                }

                .contact-link {
                    text-decoration: none;
                    transition: opacity 0.3s ease;
                }

                .contact-link:hover {
                    opacity: 0.7;
                }

                .contact-form-card {
                    padding: 2rem;
                    border-radius: 16px;
                    border: 1px solid;
                }

                .contact-form-card h3 {
                    font-size: 1.5rem;
                    margin: 0 0 1.5rem;
                }

                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }

                .form-field {
                    margin-bottom: 1.5rem;
                }

                .form-field label {
                    display: block;
                    font-size: 0.9rem;
                    margin-bottom: 0.5rem;
                }

                .form-input {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    border: 1px solid;
                    background: transparent;
                    font: inherit;
                    box-sizing: border-box;
                    resize: none;
                }

                .form-submit {
                    width: 100%;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 8px;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }

                .form-submit:hover {
                    transform: scale(1.02);
                }

                @media (max-width: 900px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }

                    .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

fn contact_row(
    bundle: &StyleBundle,
    accent: StyleToken,
    icon: &str,
    label: &str,
    value: Html,
) -> Html {
    html! {
        <div class="contact-row">
            <span class={classes!("icon-badge", accent)}>{ icon }</span>
            <div>
                <h4 class={classes!(bundle.text_main)}>{ label }</h4>
                { value }
            </div>
        </div>
    }
}
