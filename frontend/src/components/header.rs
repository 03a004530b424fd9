use yew::prelude::*;

use crate::config::MOBILE_BREAKPOINT_PX;
use crate::content::{Asset, BRAND_ALT};
use crate::navigation::{MenuState, NavLink, Section, HEADER_LINKS};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub menu: MenuState,
    pub on_toggle: Callback<MouseEvent>,
}

fn nav_links(links: &[NavLink], link_class: &'static str, cta_class: &'static str) -> Html {
    let last = links.len().saturating_sub(1);
    html! {
        <>
            { for links.iter().enumerate().map(|(i, link)| {
                let class = if i == last { cta_class } else { link_class };
                html! { <a href={link.target.href()} class={class}>{link.label}</a> }
            }) }
        </>
    }
}

fn menu_icon(open: bool) -> Html {
    if open {
        html! {
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"
                fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </svg>
        }
    } else {
        html! {
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"
                fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <line x1="4" x2="20" y1="12" y2="12" />
                <line x1="4" x2="20" y1="6" y2="6" />
                <line x1="4" x2="20" y1="18" y2="18" />
            </svg>
        }
    }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let open = props.menu.is_open();

    let responsive = format!(
        "@media (max-width: {}px) {{ .desktop-nav {{ display: none; }} .menu-toggle {{ display: block; }} }} \
         @media (min-width: {}px) {{ .mobile-menu {{ display: none; }} }}",
        MOBILE_BREAKPOINT_PX - 1,
        MOBILE_BREAKPOINT_PX
    );

    html! {
        <header class="site-header">
            <div class="header-inner">
                <a href={Section::Hero.href()} class="header-logo">
                    <img src={Asset::Logo.url()} alt={BRAND_ALT} />
                </a>
                <nav class="desktop-nav">
                    { nav_links(&HEADER_LINKS, "nav-link", "nav-cta") }
                </nav>
                <button class="menu-toggle" onclick={props.on_toggle.clone()} aria-label="Toggle menu">
                    { menu_icon(open) }
                </button>
                {
                    if open {
                        html! {
                            <div class="mobile-menu">
                                <nav class="mobile-nav">
                                    { nav_links(&HEADER_LINKS, "mobile-link", "mobile-cta") }
                                </nav>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        background: #fff;
                        z-index: 30;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .header-inner {
                        position: relative;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .header-logo img {
                        height: 3rem;
                        width: auto;
                    }
                    .desktop-nav {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link, .mobile-link {
                        color: #374151;
                        text-decoration: none;
                    }
                    .nav-link:hover, .mobile-link:hover {
                        color: #ef4444;
                    }
                    .nav-cta, .mobile-cta {
                        background: #ef4444;
                        color: #fff;
                        padding: 0.5rem 1rem;
                        border-radius: 0.375rem;
                        text-decoration: none;
                        transition: background 0.2s;
                    }
                    .nav-cta:hover, .mobile-cta:hover {
                        background: #dc2626;
                    }
                    .menu-toggle {
                        display: none;
                        position: relative;
                        background: none;
                        border: none;
                        cursor: pointer;
                        z-index: 40;
                    }
                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        background: #fff;
                        z-index: 30;
                        padding: 5rem 1rem 0;
                    }
                    .mobile-nav {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        font-size: 1.125rem;
                    }
                    .mobile-link {
                        padding: 0.5rem 0;
                    }
                    .mobile-cta {
                        text-align: center;
                        margin-top: 1rem;
                    }
                "#}
                { responsive }
            </style>
        </header>
    }
}
