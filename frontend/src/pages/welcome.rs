use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav::NavBar;
use crate::hooks::use_viewport_watcher;
use crate::sections::{about::About, contact::Contact, hero::Hero, life::Life, rules::Rules};

#[function_component(Welcome)]
pub fn welcome() -> Html {
    let viewport = use_viewport_watcher();

    html! {
        <div class="welcome-page">
            <NavBar scrolled={viewport.scrolled()} />
            <Hero />
            <About viewport={viewport.clone()} />
            <Rules viewport={viewport.clone()} />
            <Life viewport={viewport.clone()} />
            <Contact viewport={viewport.clone()} />
            <Footer />
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #000;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
                }
                .welcome-page {
                    min-height: 100vh;
                    background: #000;
                    color: #fff;
                }
                .icon {
                    width: 1rem;
                    height: 1rem;
                }
                .pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    margin-bottom: 1.5rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                    font-size: 0.875rem;
                    color: #d1d5db;
                    transition: all 0.3s ease;
                }
                .pill:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                .page-section {
                    position: relative;
                    padding: 4rem 1.5rem;
                }
                .page-section.tinted {
                    background: rgba(255, 255, 255, 0.05);
                }
                .dot-pattern {
                    background-image: radial-gradient(rgba(255, 255, 255, 0.08) 1px, transparent 1px);
                    background-size: 24px 24px;
                }
                .section-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .section-inner.narrow {
                    max-width: 56rem;
                }
                .centered,
                .section-header {
                    text-align: center;
                }
                .section-header {
                    margin-bottom: 3rem;
                }
                .section-title {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin: 0 0 0.75rem;
                    transition: all 0.7s ease;
                }
                @media (min-width: 768px) {
                    .section-title {
                        font-size: 3rem;
                    }
                }
                .section-subtitle {
                    font-size: 1.125rem;
                    color: #d1d5db;
                    transition: all 0.7s ease;
                }
                .section-subtitle.large {
                    font-size: 1.25rem;
                    margin-bottom: 2.5rem;
                }
                .card-grid {
                    display: grid;
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }
                @media (min-width: 768px) {
                    .card-grid.two {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .card-grid.three {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                .glass-card {
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                    transition: all 0.5s ease-in-out;
                }
                .glass-card.compact {
                    padding: 1.25rem;
                }
                .glass-card:hover {
                    background: rgba(255, 255, 255, 0.1);
                    border-color: rgba(255, 255, 255, 0.2);
                }
                .glass-card.lift:hover {
                    transform: scale(1.05);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                }
                .glass-card.highlight {
                    padding: 2rem;
                    background: rgba(255, 255, 255, 0.1);
                    border-color: rgba(255, 255, 255, 0.2);
                }
                .glass-card.highlight:hover {
                    background: rgba(255, 255, 255, 0.15);
                    transform: scale(1.02);
                }
                .glass-card.warning {
                    border-color: rgba(255, 255, 255, 0.2);
                }
                .highlight-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .icon-tile {
                    width: 3rem;
                    height: 3rem;
                    flex-shrink: 0;
                    margin-bottom: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    transition: all 0.5s ease;
                }
                .icon-tile .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }
                .glass-card:hover .icon-tile {
                    background: rgba(255, 255, 255, 0.2);
                    transform: scale(1.1);
                }
                .card-title {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 0.5rem;
                }
                .card-title.small {
                    font-size: 1rem;
                }
                .card-text {
                    color: #d1d5db;
                    line-height: 1.6;
                    margin: 0 0 1rem;
                }
                .card-text.small {
                    font-size: 0.875rem;
                    margin: 0;
                }
                .bullet-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    color: #d1d5db;
                }
                .bullet-list li {
                    display: flex;
                    gap: 0.5rem;
                    transition: all 0.5s ease-in-out;
                }
                .bullet-list li:hover {
                    color: #fff;
                    transform: translateX(0.5rem);
                }
                .bullet {
                    color: #fff;
                }

                .opacity-0 {
                    opacity: 0;
                }
                .animate-fadeIn {
                    animation: fadeIn 0.8s ease-out both;
                }
                .animate-fadeInUp {
                    animation: fadeInUp 0.8s ease-out both;
                }
                .animate-scaleIn {
                    animation: scaleIn 0.6s ease-out both;
                }
                .animate-slideInLeft {
                    animation: slideInLeft 0.7s ease-out both;
                }
                .animate-slideInRight {
                    animation: slideInRight 0.7s ease-out both;
                }
                .animate-pulse {
                    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }
                .animate-pulse-slow {
                    animation: pulse 3s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }
                .delay-0 { animation-delay: 0ms; }
                .delay-100 { animation-delay: 100ms; }
                .delay-200 { animation-delay: 200ms; }
                .delay-300 { animation-delay: 300ms; }
                .delay-400 { animation-delay: 400ms; }
                .delay-500 { animation-delay: 500ms; }

                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes fadeInUp {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes scaleIn {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                @keyframes slideInLeft {
                    from { opacity: 0; transform: translateX(-50px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes slideInRight {
                    from { opacity: 0; transform: translateX(50px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                "#}
            </style>
        </div>
    }
}
