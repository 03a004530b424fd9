use log::{debug, info};
use yew::prelude::*;

use crate::click_delegate::{DocumentClicks, ListenerGuard};
use crate::components::{
    about::{About, Team},
    explore::Explore,
    features::Features,
    footer::Footer,
    header::Header,
    hero::Hero,
    subscribe::Subscribe,
};
use crate::navigation::{navigate, navigate_in_page, DomPage, MenuState, Section};

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let menu = use_state(MenuState::default);

    // One click listener on the document for every in-page link, released on unmount
    {
        let set_menu = menu.setter();
        use_effect_with_deps(
            move |_| {
                let guard = DomPage::current().map(|page| {
                    let document = page.document().clone();
                    ListenerGuard::attach(DocumentClicks::new(document, move |id| {
                        navigate(&page, &page, id, |state| set_menu.set(state));
                    }))
                });
                info!("Landing page mounted");

                move || drop(guard)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = (*menu).toggle();
            debug!("Menu {:?} -> {:?}", *menu, next);
            menu.set(next);
        })
    };

    let on_navigate = {
        let set_menu = menu.setter();
        Callback::from(move |section: Section| {
            navigate_in_page(section.id(), |state| set_menu.set(state));
        })
    };

    html! {
        <div class="landing-page">
            <Header menu={*menu} on_toggle={toggle_menu} />

            // Keeps the hero clear of the fixed header
            <div class="header-spacer"></div>

            <Hero on_navigate={on_navigate} />
            <Explore />
            <Features />
            <About />
            <Team />
            <Subscribe />
            <Footer />

            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        font-family: system-ui, -apple-system, sans-serif;
                        color: #111827;
                    }
                    .header-spacer {
                        height: 4rem;
                    }
                    .landing-page section {
                        scroll-margin-top: 4rem;
                    }
                    .container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .centered {
                        text-align: center;
                    }
                    .two-col {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                        align-items: center;
                    }
                    .grid {
                        display: grid;
                        gap: 2rem;
                    }
                    .three-col {
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .four-col {
                        grid-template-columns: repeat(4, 1fr);
                    }
                    .section-title {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #ef4444;
                        margin-bottom: 1rem;
                    }
                    .section-intro {
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                        color: #4b5563;
                    }
                    @media (max-width: 1023px) {
                        .four-col {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 767px) {
                        .two-col, .three-col, .four-col {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::fragment_target;

    async fn render_page() -> String {
        yew::LocalServerRenderer::<LandingPage>::new().render().await
    }

    /// Named `href="#..."` targets in rendered markup, in document order.
    fn fragment_links(html: &str) -> Vec<String> {
        html.split("href=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .filter_map(fragment_target)
            .map(str::to_string)
            .collect()
    }

    #[tokio::test(flavor = "current_thread")]
    async fn rendered_fragment_links_have_matching_sections() {
        let html = render_page().await;
        let links = fragment_links(&html);

        assert!(!links.is_empty());
        for id in &links {
            assert!(
                html.contains(&format!("id=\"{}\"", id)),
                "link #{} has no element with that id",
                id
            );
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn every_section_is_rendered_and_linked() {
        let html = render_page().await;
        let links = fragment_links(&html);

        for section in Section::ALL {
            assert!(html.contains(&format!("id=\"{}\"", section.id())), "{:?} not rendered", section);
        }
        // Logo links in header and footer both point back to the hero
        assert!(links.iter().filter(|id| id.as_str() == "hero").count() >= 2);
        assert!(links.iter().any(|id| id == "team"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn placeholder_links_are_rendered_but_not_fragments() {
        let html = render_page().await;

        assert!(html.contains("href=\"#\""));
        assert!(!fragment_links(&html).iter().any(|id| id.is_empty()));
    }

    #[test]
    fn fragment_links_ignore_bare_hash_and_urls() {
        let html = r##"<a href="#about">a</a><a href="#">b</a><a href="https://x.io/#team">c</a>"##;
        assert_eq!(fragment_links(html), vec!["about".to_string()]);
    }
}
