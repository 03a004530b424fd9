use chrono::Datelike;
use yew::prelude::*;

use crate::content::{copyright_line, Asset, StaticLink, BRAND_ALT, FOOTER_ABOUT, FOOTER_RESOURCES};
use crate::navigation::{Section, FOOTER_COMPANY_LINKS};

fn static_links(links: &[StaticLink]) -> Html {
    html! {
        <ul class="footer-links">
            { for links.iter().map(|link| html! {
                <li><a href={link.href} class="footer-link">{link.label}</a></li>
            }) }
        </ul>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-heading">{"COMPANY"}</h3>
                        <ul class="footer-links">
                            { for FOOTER_COMPANY_LINKS.iter().map(|link| html! {
                                <li><a href={link.target.href()} class="footer-link">{link.label}</a></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h3 class="footer-heading">{"RESOURCES"}</h3>
                        { static_links(&FOOTER_RESOURCES) }
                    </div>
                    <div>
                        <h3 class="footer-heading">{"ABOUT"}</h3>
                        { static_links(&FOOTER_ABOUT) }
                    </div>
                    <div>
                        <a href={Section::Hero.href()} class="footer-logo">
                            <img src={Asset::Logo.url()} alt={BRAND_ALT} />
                        </a>
                    </div>
                </div>
                <div class="footer-copyright">{copyright_line(year)}</div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: #fff;
                        padding: 4rem 0 2rem;
                        border-top: 1px solid #f3f4f6;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        margin-bottom: 2rem;
                    }
                    .footer-heading {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .footer-links {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .footer-link {
                        color: #4b5563;
                        text-decoration: none;
                    }
                    .footer-link:hover {
                        color: #ef4444;
                    }
                    .footer-logo img {
                        height: 5rem;
                        width: auto;
                    }
                    .footer-copyright {
                        text-align: center;
                        color: #6b7280;
                        font-size: 0.875rem;
                        padding-top: 2rem;
                        border-top: 1px solid #f3f4f6;
                    }
                    @media (max-width: 767px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
