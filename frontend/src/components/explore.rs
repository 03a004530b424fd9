use yew::prelude::*;

use crate::content::{PLACEHOLDER_INTRO, SCREENSHOTS};
use crate::navigation::Section;

#[function_component(Explore)]
pub fn explore() -> Html {
    html! {
        <section id={Section::Explore.id()} class="explore">
            <div class="container centered">
                <h2 class="section-title">{"Explore eRadhuni"}</h2>
                <p class="section-intro">{PLACEHOLDER_INTRO}</p>
                <div class="grid three-col">
                    { for SCREENSHOTS.iter().map(|shot| html! {
                        <div class="screenshot-card">
                            <img src={shot.asset.url()} alt={shot.alt} width="250" height="400" />
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .explore {
                        background: #fef2f2;
                        padding: 4rem 0;
                    }
                    .screenshot-card {
                        background: #fff;
                        border-radius: 0.75rem;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        overflow: hidden;
                    }
                    .screenshot-card img {
                        display: block;
                        width: 100%;
                        height: auto;
                    }
                "#}
            </style>
        </section>
    }
}
