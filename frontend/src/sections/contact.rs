use yew::prelude::*;

use crate::components::icons::IconSvg;
use crate::components::reveal::{reveal_classes, RevealProps};
use crate::content::{tags, SITE_NAME, VISITOR_CARDS, VISITOR_INTRO};
use crate::navigator::Section;

#[function_component(Contact)]
pub fn contact(props: &RevealProps) -> Html {
    let viewport = &props.viewport;
    let header_visible = viewport.is_visible(tags::CONTACT_HEADER);

    html! {
        <section id={Section::Contact.id()} class="page-section">
            <div class="section-inner narrow centered">
                <div data-animate={tags::CONTACT_HEADER}>
                    <h2 class={classes!("section-title", reveal_classes(header_visible, "animate-fadeInUp"))}>
                        {"Visitor Information"}
                    </h2>
                    <p class={classes!("section-subtitle", "large", "delay-200", reveal_classes(header_visible, "animate-fadeInUp"))}>
                        {VISITOR_INTRO}
                    </p>
                </div>

                <div class="card-grid three">
                    { for VISITOR_CARDS.iter().enumerate().map(|(idx, card)| {
                        let tag = tags::indexed("contact", idx);
                        let animation = reveal_classes(viewport.is_visible(&tag), classes!("animate-scaleIn", card.delay));
                        html! {
                            <div key={idx} data-animate={tag} class={classes!("glass-card", "lift", "strong-lift", animation)}>
                                <div class="icon-tile centered-tile spin">
                                    <IconSvg icon={card.icon} />
                                </div>
                                <h3 class="card-title">{card.title}</h3>
                                <p class="contact-info">{card.desc}</p>
                            </div>
                        }
                    }) }
                </div>

                <div
                    data-animate={tags::FOOTER}
                    class={classes!("section-signoff", reveal_classes(viewport.is_visible(tags::FOOTER), "animate-fadeIn"))}
                >
                    <p>{format!("{SITE_NAME} \u{2014} Maintained by the Committee of Elders")}</p>
                </div>
            </div>
            <style>
                {r#"
                .centered-tile {
                    margin: 0 auto 0.75rem;
                }
                .glass-card:hover .icon-tile.spin {
                    transform: scale(1.1) rotate(12deg);
                }
                .glass-card.strong-lift:hover {
                    transform: scale(1.1);
                }
                .contact-info {
                    font-size: 0.875rem;
                    color: #9ca3af;
                    margin: 0;
                }
                .section-signoff {
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    color: #6b7280;
                    font-size: 0.875rem;
                    transition: all 0.7s ease;
                }
                "#}
            </style>
        </section>
    }
}
