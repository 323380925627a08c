use yew::prelude::*;

use crate::components::icons::IconSvg;
use crate::components::reveal::{reveal_classes, RevealProps};
use crate::content::{tags, Entry, CEREMONIES, FACILITIES, SCHEDULE};
use crate::navigator::Section;

fn entry_list(entries: &[Entry]) -> Html {
    html! {
        <ul class="entry-list">
            { for entries.iter().map(|entry| html! {
                <li key={entry.title}>
                    <strong>{entry.title}{":"}</strong>{" "}{entry.desc}
                </li>
            }) }
        </ul>
    }
}

#[function_component(Life)]
pub fn life(props: &RevealProps) -> Html {
    let viewport = &props.viewport;
    let header_visible = viewport.is_visible(tags::LIFE_HEADER);

    html! {
        <section id={Section::Life.id()} class="page-section tinted dot-pattern">
            <div class="section-inner">
                <div class="section-header" data-animate={tags::LIFE_HEADER}>
                    <h2 class={classes!("section-title", reveal_classes(header_visible, "animate-fadeInUp"))}>
                        {"A Typical Day"}
                    </h2>
                    <p class={classes!("section-subtitle", "delay-200", reveal_classes(header_visible, "animate-fadeInUp"))}>
                        {"This is the daily schedule everyone follows. Consistency keeps the community functioning efficiently."}
                    </p>
                </div>

                <div class="schedule">
                    { for SCHEDULE.iter().enumerate().map(|(idx, block)| {
                        let tag = tags::indexed("schedule", idx);
                        let animation = reveal_classes(viewport.is_visible(&tag), classes!("animate-slideInRight", block.delay));
                        html! {
                            <div key={idx} data-animate={tag} class={classes!("glass-card", "compact", "schedule-row", animation)}>
                                <div class="icon-tile tilt">
                                    <IconSvg icon={block.icon} />
                                </div>
                                <div>
                                    <h3 class="card-title">{block.title}</h3>
                                    <p class="card-text">{block.desc}</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="card-grid two">
                    <div
                        data-animate={tags::CEREMONIES}
                        class={classes!("glass-card", "lift", reveal_classes(viewport.is_visible(tags::CEREMONIES), "animate-scaleIn"))}
                    >
                        <h3 class="card-title">{"Key Ceremonies"}</h3>
                        { entry_list(&CEREMONIES) }
                    </div>
                    <div
                        data-animate={tags::BUILDINGS}
                        class={classes!("glass-card", "lift", reveal_classes(viewport.is_visible(tags::BUILDINGS), "animate-scaleIn delay-200"))}
                    >
                        <h3 class="card-title">{"Essential Facilities"}</h3>
                        { entry_list(&FACILITIES) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .schedule {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .schedule-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                }
                .schedule-row:hover {
                    transform: translateX(0.5rem);
                }
                .glass-card:hover .icon-tile.tilt {
                    transform: scale(1.1) rotate(6deg);
                }
                .entry-list {
                    list-style: none;
                    padding: 0;
                    margin: 1rem 0 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    color: #d1d5db;
                }
                .entry-list li {
                    transition: all 0.5s ease-in-out;
                }
                .entry-list li:hover {
                    color: #fff;
                    transform: translateX(0.5rem);
                }
                .entry-list strong {
                    color: #fff;
                }
                "#}
            </style>
        </section>
    }
}
