use chrono::Datelike;
use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::content::{FOOTER_BLURB, FOOTER_COMMUNITY, FOOTER_NOTES, FOOTER_PRINCIPLES, SITE_NAME, SITE_TAGLINE};
use crate::navigator::{self, Section};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="section-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="nav-brand">
                            <div class="brand-mark">
                                <IconSvg icon={Icon::Building} />
                            </div>
                            <div>
                                <h3 class="brand-name">{SITE_NAME}</h3>
                                <p class="brand-tagline muted">{SITE_TAGLINE}</p>
                            </div>
                        </div>
                        <p class="footer-blurb">{FOOTER_BLURB}</p>
                    </div>

                    <div>
                        <h4 class="footer-heading">{"Quick Links"}</h4>
                        <ul class="footer-list">
                            { for Section::ALL.iter().map(|section| {
                                let id = section.id();
                                html! {
                                    <li key={id}>
                                        <button class="footer-link" onclick={Callback::from(move |_: MouseEvent| navigator::navigate(id))}>
                                            {section.label()}
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4 class="footer-heading">{"Community"}</h4>
                        <ul class="footer-list">
                            { for FOOTER_COMMUNITY.iter().map(|line| html! { <li key={*line}>{*line}</li> }) }
                        </ul>
                    </div>

                    <div>
                        <h4 class="footer-heading">{"Core Principles"}</h4>
                        <ul class="footer-list">
                            { for FOOTER_PRINCIPLES.iter().map(|(icon, text)| html! {
                                <li key={*text} class="footer-principle">
                                    <IconSvg icon={*icon} class={classes!("footer-principle-icon")} />
                                    <span>{*text}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("\u{a9} {year} {SITE_NAME}. Maintained by the Committee of Elders.")}</p>
                    <div class="footer-notes">
                        { for FOOTER_NOTES.iter().map(|note| html! { <span key={*note}>{*note}</span> }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 1.5rem;
                    background: #000;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .footer-grid {
                    display: grid;
                    gap: 2rem;
                    margin-bottom: 2rem;
                }
                @media (min-width: 768px) {
                    .footer-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                .brand-tagline.muted {
                    color: #6b7280;
                }
                .footer-blurb {
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: #9ca3af;
                }
                .footer-heading {
                    font-size: 0.875rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .footer-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                .footer-list li,
                .footer-notes span {
                    transition: color 0.3s ease;
                }
                .footer-list li:hover,
                .footer-notes span:hover {
                    color: #fff;
                }
                .footer-link {
                    background: none;
                    border: none;
                    padding: 0;
                    color: inherit;
                    font-size: inherit;
                    cursor: pointer;
                }
                .footer-principle {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.5rem;
                }
                .footer-principle-icon {
                    width: 1rem;
                    height: 1rem;
                    flex-shrink: 0;
                    margin-top: 0.125rem;
                    color: #6b7280;
                }
                .footer-bottom {
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .footer-bottom p {
                    margin: 0;
                }
                .footer-notes {
                    display: flex;
                    gap: 1.5rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </footer>
    }
}
