use yew::prelude::*;

use crate::content::{Asset, ABOUT_TEXT, PLACEHOLDER_INTRO, TEAM};
use crate::navigation::Section;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="about">
            <div class="container two-col">
                <div class="about-photo">
                    <img src={Asset::AboutCooking.url()} alt="About E-Radhuni" width="500" height="300" />
                </div>
                <div>
                    <h2 class="section-title">{"About E-Radhuni"}</h2>
                    <p class="about-text">{ABOUT_TEXT}</p>
                </div>
            </div>
            <style>
                {r#"
                    .about {
                        background: #fff;
                        padding: 4rem 0;
                    }
                    .about-photo {
                        background: #e5e7eb;
                        border-radius: 0.5rem;
                        overflow: hidden;
                    }
                    .about-photo img {
                        display: block;
                        width: 100%;
                        height: auto;
                    }
                    .about-text {
                        color: #374151;
                        margin-bottom: 1rem;
                    }
                "#}
            </style>
        </section>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    html! {
        <section id={Section::Team.id()} class="team">
            <div class="container centered">
                <h2 class="section-title">{"Our Team"}</h2>
                <p class="section-intro">{PLACEHOLDER_INTRO}</p>
                <div class="grid three-col">
                    { for TEAM.iter().enumerate().map(|(i, member)| html! {
                        <div class="team-card">
                            <div class="team-photo">
                                <img
                                    src={Asset::TeamPlaceholder.url()}
                                    alt={format!("Team Member {}", i + 1)}
                                    width="128"
                                    height="128"
                                />
                            </div>
                            <h3>{member.name}</h3>
                            <p class="team-role">{member.role}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .team {
                        background: #fff;
                        padding: 4rem 0;
                    }
                    .team-card {
                        padding: 1rem;
                    }
                    .team-photo {
                        background: #dbeafe;
                        width: 8rem;
                        height: 8rem;
                        border-radius: 9999px;
                        margin: 0 auto 1rem;
                        overflow: hidden;
                    }
                    .team-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .team-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin: 0;
                    }
                    .team-role {
                        color: #ef4444;
                    }
                "#}
            </style>
        </section>
    }
}
