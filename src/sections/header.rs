use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{self, NAV_ITEMS};
use crate::motion::timeline::Stagger;

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_bool_toggle(false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::HEADER_COMPACT_AFTER;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let mobile_stagger = Stagger::new(0.0, 0.1);

    html! {
        <div class="top-nav-wrapper">
            <style>
                {r#"
                    .top-nav-wrapper {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        display: flex;
                        justify-content: center;
                    }
                    .top-nav {
                        width: 700px;
                        max-width: 100%;
                        margin-top: 1.25rem;
                        padding: 0.75rem 3rem;
                        background: rgba(0, 0, 0, 0.2);
                        backdrop-filter: blur(4px);
                        border: 1px solid #72d2f52c;
                        border-radius: 9999px;
                        transition: all 0.2s;
                        animation: nav-drop 0.6s cubic-bezier(0.34, 1.3, 0.64, 1) both;
                    }
                    .top-nav.scrolled {
                        margin-top: 0;
                        border-radius: 0 0 9999px 9999px;
                    }
                    @keyframes nav-drop {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }
                    .nav-logo {
                        position: relative;
                        width: 3rem;
                        height: 3rem;
                    }
                    .nav-logo img {
                        width: 100%;
                        height: 100%;
                        border-radius: 50%;
                        object-fit: cover;
                        position: relative;
                        z-index: 1;
                    }
                    .nav-logo .ring {
                        position: absolute;
                        inset: -4px;
                        border: 2px dashed #72d3f5;
                        border-radius: 50%;
                        animation: logo-spin 8s linear infinite;
                    }
                    .nav-logo .halo {
                        position: absolute;
                        inset: 0;
                        border-radius: 50%;
                        animation: logo-glow 2s ease-in-out infinite;
                    }
                    @keyframes logo-spin { to { transform: rotate(360deg); } }
                    @keyframes logo-glow {
                        0%, 100% { box-shadow: 0 0 10px #72d3f5; }
                        50% { box-shadow: 0 0 20px #72d3f5; }
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                        animation: fade-in 0.4s 0.2s both;
                    }
                    .nav-link {
                        position: relative;
                        color: #fff;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .nav-link:hover { color: #72d3f5; }
                    .nav-link::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        bottom: -4px;
                        width: 0;
                        height: 2px;
                        background: #72d3f5;
                        transition: width 0.3s;
                    }
                    .nav-link:hover::after { width: 100%; }
                    @keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 1.5rem;
                        height: 2px;
                        margin: 0.45rem 0;
                        background: #fff;
                        transition: transform 0.3s, opacity 0.3s;
                    }
                    .burger-menu.open span:nth-child(1) { transform: translateY(8px) rotate(45deg); }
                    .burger-menu.open span:nth-child(2) { opacity: 0; }
                    .burger-menu.open span:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }
                    .mobile-menu {
                        padding: 1rem 0;
                        text-align: center;
                    }
                    .mobile-menu .nav-link {
                        display: block;
                        padding: 0.5rem 0;
                        animation: menu-item 0.3s ease-out both;
                    }
                    @keyframes menu-item {
                        from { transform: translateX(-20px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @media (max-width: 768px) {
                        .top-nav, .top-nav.scrolled {
                            width: 100%;
                            margin-top: 0;
                            padding: 0.5rem 1.5rem;
                            border-radius: 0;
                            border-width: 0 0 1px 0;
                        }
                        .nav-links { display: none; }
                        .burger-menu { display: block; }
                    }
                "#}
            </style>
            <header class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="/" class="nav-logo">
                        <img src="/image/logo.png" alt="Logo" />
                        <div class="ring"></div>
                        <div class="halo"></div>
                    </a>
                    <nav class="nav-links">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <a href={item.href} class="nav-link">{ item.title }</a>
                        }) }
                    </nav>
                    <button class={classes!("burger-menu", (*menu_open).then(|| "open"))} onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
                {
                    if *menu_open {
                        html! {
                            <div class="mobile-menu">
                                { for NAV_ITEMS.iter().enumerate().map(|(index, item)| html! {
                                    <a
                                        href={item.href}
                                        class="nav-link"
                                        style={format!("animation-delay: {}s;", mobile_stagger.delay_for(index))}
                                        onclick={close_menu.clone()}
                                    >
                                        { item.title }
                                    </a>
                                }) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </header>
        </div>
    }
}
