use yew::prelude::*;

use crate::components::icons::IconSvg;
use crate::components::reveal::{reveal_classes, RevealProps};
use crate::content::{tags, DIFFERENCES, DIFFERENCE_TEXT, PRINCIPLES};
use crate::navigator::Section;

#[function_component(About)]
pub fn about(props: &RevealProps) -> Html {
    let viewport = &props.viewport;
    let header_visible = viewport.is_visible(tags::ABOUT_HEADER);

    html! {
        <section id={Section::About.id()} class="page-section tinted dot-pattern">
            <div class="section-inner">
                <div class="section-header" data-animate={tags::ABOUT_HEADER}>
                    <h2 class={classes!("section-title", reveal_classes(header_visible, "animate-fadeInUp"))}>
                        {"About Our Community"}
                    </h2>
                    <p class={classes!("section-subtitle", "delay-200", reveal_classes(header_visible, "animate-fadeInUp"))}>
                        {"The community is built on three core principles that maintain harmony and order"}
                    </p>
                </div>

                <div class="card-grid three">
                    { for PRINCIPLES.iter().enumerate().map(|(idx, card)| {
                        let tag = tags::indexed("card", idx);
                        let animation = reveal_classes(viewport.is_visible(&tag), classes!("animate-fadeInUp", card.delay));
                        html! {
                            <div key={idx} data-animate={tag} class={classes!("glass-card", "lift", animation)}>
                                <div class="icon-tile">
                                    <IconSvg icon={card.icon} />
                                </div>
                                <h3 class="card-title">{card.title}</h3>
                                <p class="card-text">{card.desc}</p>
                            </div>
                        }
                    }) }
                </div>

                <div
                    data-animate={tags::HIGHLIGHT_BOX}
                    class={classes!("glass-card", "highlight", reveal_classes(viewport.is_visible(tags::HIGHLIGHT_BOX), "animate-scaleIn"))}
                >
                    <h3 class="highlight-title">{"What Makes Us Different"}</h3>
                    <p class="card-text">{DIFFERENCE_TEXT}</p>
                    <ul class="bullet-list">
                        { for DIFFERENCES.iter().map(|item| html! {
                            <li key={*item}>
                                <span class="bullet">{"\u{2022}"}</span>
                                <span>{*item}</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}
