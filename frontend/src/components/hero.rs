use yew::prelude::*;

use crate::content::{Asset, BRAND_ALT};
use crate::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let get_started = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Subscribe))
    };

    html! {
        <section id={Section::Hero.id()} class="hero">
            <div class="container two-col">
                <div>
                    <h1 class="hero-title">{"Learn to Cook Bengali Delights with Pro Chefs!"}</h1>
                    <p class="hero-subtitle">
                        {"Video Tutorials, Recipes, and Grocery Shopping - All in One App. \
                          The all-in-one Bengali cooking app - Learn, Cook, and Shop groceries."}
                    </p>
                    <button class="hero-cta" onclick={get_started}>{"Get Started"}</button>
                </div>
                <div class="hero-image">
                    <img src={Asset::HeroBanner.url()} alt={BRAND_ALT} width="300" height="500" />
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        background: linear-gradient(to bottom, #fff, #fef2f2);
                        padding: 4rem 0;
                    }
                    .hero-title {
                        font-size: 3rem;
                        font-weight: 700;
                        color: #ef4444;
                        line-height: 1.25;
                        margin: 0;
                    }
                    .hero-subtitle {
                        margin-top: 1rem;
                        color: #374151;
                        font-size: 1.125rem;
                    }
                    .hero-cta {
                        margin-top: 2rem;
                        background: #ef4444;
                        color: #fff;
                        border: none;
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.375rem;
                        cursor: pointer;
                        font-size: 1rem;
                        transition: background 0.2s;
                    }
                    .hero-cta:hover {
                        background: #dc2626;
                    }
                    .hero-image {
                        display: flex;
                        justify-content: center;
                    }
                    .hero-image img {
                        width: 100%;
                        max-width: 24rem;
                        height: auto;
                    }
                    @media (max-width: 767px) {
                        .hero-title {
                            font-size: 2.25rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
