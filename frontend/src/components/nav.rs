use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::content::{SITE_NAME, SITE_TAGLINE};
use crate::navigator::{self, Section};

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub scrolled: bool,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class={classes!("top-nav", props.scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-brand">
                    <div class="brand-mark">
                        <IconSvg icon={Icon::Building} />
                    </div>
                    <div>
                        <h1 class="brand-name">{SITE_NAME}</h1>
                        <p class="brand-tagline">{SITE_TAGLINE}</p>
                    </div>
                </div>
                <div class="nav-links">
                    { for Section::ALL.iter().map(|section| {
                        let id = section.id();
                        html! {
                            <button key={id} class="nav-link" onclick={Callback::from(move |_: MouseEvent| navigator::navigate(id))}>
                                {section.label()}
                                <span class="nav-underline"></span>
                            </button>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: transparent;
                    border-bottom: 1px solid transparent;
                    transition: all 0.5s ease;
                }
                .top-nav.scrolled {
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(24px);
                    border-bottom-color: rgba(255, 255, 255, 0.1);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                }
                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    transition: transform 0.3s ease;
                }
                .nav-brand:hover {
                    transform: scale(1.05);
                }
                .brand-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    background: #fff;
                    color: #000;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .brand-mark .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }
                .brand-name {
                    font-size: 1.125rem;
                    font-weight: 700;
                    margin: 0;
                }
                .brand-tagline {
                    font-size: 0.75rem;
                    color: #9ca3af;
                    margin: 0;
                }
                .nav-links {
                    display: none;
                    gap: 1.5rem;
                }
                @media (min-width: 768px) {
                    .nav-links {
                        display: flex;
                    }
                }
                .nav-link {
                    position: relative;
                    background: none;
                    border: none;
                    color: #9ca3af;
                    font-size: 0.875rem;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: #fff;
                }
                .nav-underline {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 0;
                    height: 2px;
                    background: #fff;
                    transition: width 0.3s ease;
                }
                .nav-link:hover .nav-underline {
                    width: 100%;
                }
                "#}
            </style>
        </nav>
    }
}
