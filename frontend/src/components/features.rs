use yew::prelude::*;

use crate::content::{FEATURES, PLACEHOLDER_INTRO};
use crate::navigation::Section;

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id={Section::Features.id()} class="features">
            <div class="container centered">
                <h2 class="section-title">{"Why Choose E-Radhuni?"}</h2>
                <p class="section-intro">{PLACEHOLDER_INTRO}</p>
                <div class="grid four-col">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <div class="feature-icon">
                                <img src={feature.icon.url()} alt={feature.title} />
                            </div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .features {
                        padding: 4rem 0;
                    }
                    .feature-card {
                        padding: 1.5rem;
                    }
                    .feature-icon {
                        width: 8rem;
                        height: 8rem;
                        margin: 0 auto 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .feature-icon img {
                        width: 100%;
                        height: auto;
                    }
                    .feature-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .feature-card p {
                        color: #4b5563;
                    }
                "#}
            </style>
        </section>
    }
}
