use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::content::{HERO_BADGE, HERO_INTRO, SITE_NAME};
use crate::navigator::{self, Section};

#[function_component(Hero)]
pub fn hero() -> Html {
    let learn_more = Callback::from(|_: MouseEvent| navigator::navigate(Section::About.id()));

    html! {
        <section class="hero">
            <div class="hero-glow"></div>
            <div class="hero-content">
                <div class="pill animate-fadeIn">
                    <IconSvg icon={Icon::Shield} class={classes!("animate-pulse-slow")} />
                    <span>{HERO_BADGE}</span>
                </div>
                <h1 class="hero-title animate-fadeInUp">
                    {"Welcome to"}<br />
                    <span class="hero-title-accent animate-pulse-slow">{SITE_NAME}</span>
                </h1>
                <p class="hero-intro animate-fadeInUp delay-200">{HERO_INTRO}</p>
                <button class="hero-cta animate-scaleIn delay-300" onclick={learn_more}>
                    <span>{"Learn More"}</span>
                    <IconSvg icon={Icon::ChevronDown} class={classes!("hero-cta-chevron")} />
                </button>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    overflow: hidden;
                    padding: 8rem 1.5rem 5rem;
                }
                .hero-glow {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(255, 255, 255, 0.05), transparent);
                    pointer-events: none;
                }
                .hero-content {
                    position: relative;
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .hero-title {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                @media (min-width: 768px) {
                    .hero-title {
                        font-size: 4.5rem;
                    }
                }
                .hero-title-accent {
                    background: linear-gradient(to right, #fff, #d1d5db, #fff);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-intro {
                    font-size: 1.25rem;
                    line-height: 1.75;
                    color: #d1d5db;
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                }
                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    background: #fff;
                    color: #000;
                    border: none;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .hero-cta:hover {
                    background: #e5e7eb;
                    transform: scale(1.05);
                }
                .hero-cta-chevron {
                    width: 1rem;
                    height: 1rem;
                    transition: transform 0.3s ease;
                }
                .hero-cta:hover .hero-cta-chevron {
                    transform: translateY(0.25rem);
                }
                "#}
            </style>
        </section>
    }
}
