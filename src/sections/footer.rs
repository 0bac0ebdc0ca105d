use chrono::{Datelike, Local};
use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::reveal::{Entrance, Reveal};
use crate::contexts::page::use_page;
use crate::motion::timeline::{Stagger, Transition};

struct FooterLink {
    name: &'static str,
    href: &'static str,
    glyph: &'static str,
}

const QUICK_LINKS: &[FooterLink] = &[
    FooterLink { name: "Home", href: "/", glyph: "" },
    FooterLink { name: "About", href: "#about", glyph: "" },
    FooterLink { name: "Team", href: "#team", glyph: "" },
    FooterLink { name: "Roadmap", href: "#roadmap", glyph: "" },
];

const SOCIAL: &[FooterLink] = &[
    FooterLink { name: "Twitter", href: "#", glyph: "𝕏" },
    FooterLink { name: "Discord", href: "#", glyph: "💬" },
    FooterLink { name: "Instagram", href: "#", glyph: "📷" },
];

const COLUMNS: Stagger = Stagger::new(0.0, 0.1);

fn item(index: usize) -> Transition {
    COLUMNS.apply(index, Transition::default())
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);
    let page = use_page();
    let year = Local::now().year();

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_subscribe = {
        let email = email.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("newsletter subscribe clicked for {:?}", *email);
        })
    };

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        color: #fff;
                        overflow: hidden;
                        background: linear-gradient(to bottom, #05171a, #011219);
                    }
                    .site-footer .glow {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 50% -20%, rgba(114, 211, 245, 0.15), rgba(1, 18, 25, 0));
                    }
                    .footer-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .footer-top {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        align-items: center;
                        padding: 3rem 0;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .footer-top h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .footer-muted { color: #9ca3af; }
                    .newsletter {
                        position: relative;
                        max-width: 28rem;
                        margin-left: auto;
                    }
                    .newsletter input {
                        width: 100%;
                        padding: 1rem 1.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #fff;
                        outline: none;
                        transition: border-color 0.3s;
                    }
                    .newsletter input:focus { border-color: #72d3f5; }
                    .newsletter button {
                        position: absolute;
                        right: 0.5rem;
                        top: 50%;
                        transform: translateY(-50%);
                        padding: 0.5rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: linear-gradient(to right, #72d3f5, #a5f7ff);
                        color: #011219;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.2s, box-shadow 0.3s;
                    }
                    .newsletter button:hover {
                        transform: translateY(-50%) scale(1.02);
                        box-shadow: 0 10px 15px rgba(114, 211, 245, 0.2);
                    }
                    .footer-main {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        padding: 3rem 0;
                    }
                    .footer-main h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin-bottom: 1.5rem;
                    }
                    .footer-main ul { list-style: none; padding: 0; }
                    .footer-main li { margin-bottom: 0.75rem; transition: transform 0.2s; }
                    .footer-main li:hover { transform: translateX(5px); }
                    .footer-main a {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .footer-main a:hover { color: #72d3f5; }
                    .footer-logo {
                        width: 120px;
                        border-radius: 0.375rem;
                        margin-bottom: 1.5rem;
                    }
                    .social {
                        display: flex;
                        gap: 1rem;
                    }
                    .social a {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(255, 255, 255, 0.05);
                        transition: background 0.3s, transform 0.2s;
                    }
                    .social a:hover {
                        background: rgba(114, 211, 245, 0.2);
                        transform: scale(1.1);
                    }
                    .sr-only {
                        position: absolute;
                        width: 1px;
                        height: 1px;
                        overflow: hidden;
                        clip: rect(0, 0, 0, 0);
                    }
                    .footer-bottom {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.5rem 0;
                        margin-top: 3rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        font-size: 0.875rem;
                    }
                    .footer-bottom a {
                        color: #9ca3af;
                        margin-left: 1.5rem;
                        text-decoration: none;
                    }
                    .footer-bottom a:hover { color: #72d3f5; }
                    @media (max-width: 1024px) {
                        .footer-top { grid-template-columns: 1fr; text-align: center; }
                        .newsletter { margin: 0 auto; }
                        .footer-main { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 768px) {
                        .footer-main { grid-template-columns: 1fr; text-align: center; }
                        .social { justify-content: center; }
                        .footer-bottom { flex-direction: column; gap: 1rem; }
                    }
                "#}
            </style>
            <div class="glow"></div>
            <div class="footer-inner">
                <div class="footer-top">
                    <Reveal entrance={Entrance::Up(20.0)} transition={item(0)}>
                        <h2>{"Join Our Community"}</h2>
                        <p class="footer-muted">
                            {"Stay updated with the latest NFT drops, exclusive offers, and community events."}
                        </p>
                    </Reveal>
                    <Reveal entrance={Entrance::Up(20.0)} transition={item(1)}>
                        <div class="newsletter">
                            <input
                                type="email"
                                placeholder="Enter your email"
                                value={(*email).clone()}
                                oninput={on_email}
                            />
                            <button onclick={on_subscribe}>{"Subscribe"}</button>
                        </div>
                    </Reveal>
                </div>

                <div class="footer-main">
                    <Reveal entrance={Entrance::Up(20.0)} transition={item(0)}>
                        <a href="/"><img class="footer-logo" src="/image/logo.png" alt="NFT Platform" /></a>
                        <p class="footer-muted">
                            {"Discover, collect, and trade extraordinary NFTs in our revolutionary platform."}
                        </p>
                        {
                            if page.sol_price > 0.0 {
                                html! { <p class="footer-muted">{ format!("SOL ${:.2}", page.sol_price) }</p> }
                            } else {
                                html! {}
                            }
                        }
                    </Reveal>
                    <Reveal entrance={Entrance::Up(20.0)} transition={item(1)}>
                        <h3>{"Quick Links"}</h3>
                        <ul>
                            { for QUICK_LINKS.iter().map(|link| html! {
                                <li><a href={link.href}>{ link.name }</a></li>
                            }) }
                        </ul>
                    </Reveal>
                    <Reveal entrance={Entrance::Up(20.0)} transition={item(2)}>
                        <h3>{"Connect"}</h3>
                        <div class="social">
                            { for SOCIAL.iter().map(|link| html! {
                                <a href={link.href}>
                                    <span class="sr-only">{ link.name }</span>
                                    { link.glyph }
                                </a>
                            }) }
                        </div>
                    </Reveal>
                    <Reveal entrance={Entrance::Up(20.0)} transition={item(3)}>
                        <h3>{"Contact"}</h3>
                        <ul class="footer-muted">
                            <li>{"support@nftplatform.com"}</li>
                            <li>{"+1 (555) 123-4567"}</li>
                            <li>{"123 Crypto Street, Digital City"}</li>
                        </ul>
                    </Reveal>
                </div>

                <div class="footer-bottom">
                    <p class="footer-muted">{ format!("© {} NFT Platform. All rights reserved.", year) }</p>
                    <div>
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#terms">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
