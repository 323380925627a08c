use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::reveal::{reveal_classes, RevealProps};
use crate::content::{rule_delay, tags, RULES, VIOLATIONS_TEXT};
use crate::navigator::Section;

#[function_component(Rules)]
pub fn rules(props: &RevealProps) -> Html {
    let viewport = &props.viewport;
    let header_visible = viewport.is_visible(tags::RULES_HEADER);

    html! {
        <section id={Section::Rules.id()} class="page-section">
            <div class="section-inner">
                <div class="section-header" data-animate={tags::RULES_HEADER}>
                    <div class={classes!("pill", reveal_classes(header_visible, "animate-fadeIn"))}>
                        <IconSvg icon={Icon::AlertCircle} class={classes!("animate-pulse")} />
                        <span>{"Important Guidelines"}</span>
                    </div>
                    <h2 class={classes!("section-title", reveal_classes(header_visible, "animate-fadeInUp"))}>
                        {"Community Rules"}
                    </h2>
                    <p class={classes!("section-subtitle", "delay-200", reveal_classes(header_visible, "animate-fadeInUp"))}>
                        {"These are the essential rules everyone must follow. If you visit, you'll need to comply with these regulations."}
                    </p>
                </div>

                <div class="card-grid two">
                    { for RULES.iter().enumerate().map(|(idx, rule)| {
                        let tag = tags::indexed("rule", idx);
                        let animation = reveal_classes(viewport.is_visible(&tag), classes!("animate-slideInLeft", rule_delay(idx)));
                        html! {
                            <div key={idx} data-animate={tag} class={classes!("glass-card", "compact", "lift", animation)}>
                                <div class="rule-row">
                                    <div class="rule-number">{rule.num.to_string()}</div>
                                    <div>
                                        <h3 class="card-title small">{rule.title}</h3>
                                        <p class="card-text small">{rule.desc}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div
                    data-animate={tags::WARNING_BOX}
                    class={classes!("glass-card", "warning", reveal_classes(viewport.is_visible(tags::WARNING_BOX), "animate-scaleIn"))}
                >
                    <div class="rule-row">
                        <IconSvg icon={Icon::AlertCircle} class={classes!("warning-icon", "animate-pulse-slow")} />
                        <div>
                            <h4 class="warning-title">{"Consequences of Rule Violations"}</h4>
                            <p class="card-text">{VIOLATIONS_TEXT}</p>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .rule-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                }
                .rule-number {
                    width: 2rem;
                    height: 2rem;
                    flex-shrink: 0;
                    margin-top: 0.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.25rem;
                    background: rgba(255, 255, 255, 0.1);
                    font-size: 0.875rem;
                    font-weight: 700;
                    transition: all 0.3s ease;
                }
                .glass-card:hover .rule-number {
                    background: rgba(255, 255, 255, 0.2);
                    transform: scale(1.1);
                }
                .warning-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    flex-shrink: 0;
                    margin-top: 0.25rem;
                }
                .warning-title {
                    font-size: 1.125rem;
                    font-weight: 700;
                    margin: 0 0 0.5rem;
                }
                "#}
            </style>
        </section>
    }
}
