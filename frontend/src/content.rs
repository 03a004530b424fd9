//! Page copy and the image assets it references.

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asset {
    Logo,
    HeroBanner,
    ScreenHome,
    ScreenGroceries,
    ScreenRecipe,
    IconPlaylist,
    IconParty,
    IconNaturalFood,
    IconRocket,
    AboutCooking,
    TeamPlaceholder,
}

impl Asset {
    pub fn file_name(self) -> &'static str {
        match self {
            Asset::Logo => "logo.png",
            Asset::HeroBanner => "hero-banner.png",
            Asset::ScreenHome => "Home.jpg",
            Asset::ScreenGroceries => "Groceries.jpg",
            Asset::ScreenRecipe => "RecipeView.jpg",
            Asset::IconPlaylist => "play-list.png",
            Asset::IconParty => "party.png",
            Asset::IconNaturalFood => "natural-food.png",
            Asset::IconRocket => "rocket-01.png",
            Asset::AboutCooking => "Cooking.jpg",
            Asset::TeamPlaceholder => "people.png",
        }
    }

    pub fn url(self) -> String {
        config::asset_url(self.file_name())
    }
}

pub const BRAND_ALT: &str = "E-Radhuni App Screenshot";

pub const PLACEHOLDER_INTRO: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
    Suspendisse tincidunt sagittis eros. Duis quis euismod lorem.";

pub struct Screenshot {
    pub asset: Asset,
    pub alt: &'static str,
}

pub const SCREENSHOTS: [Screenshot; 3] = [
    Screenshot { asset: Asset::ScreenHome, alt: "App Screenshot 1" },
    Screenshot { asset: Asset::ScreenGroceries, alt: "App Screenshot 2" },
    Screenshot { asset: Asset::ScreenRecipe, alt: "App Screenshot 3" },
];

pub struct Feature {
    pub icon: Asset,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: Asset::IconPlaylist,
        title: "Chef-Led Video Tutorials",
        description: "Learn Shariah Safe, Halal, and More!",
    },
    Feature {
        icon: Asset::IconParty,
        title: "Recipes for Every Occasion",
        description: "From Daily Meals to Eid Specials.",
    },
    Feature {
        icon: Asset::IconNaturalFood,
        title: "Shop Ingredients",
        description: "Get Mustard Oil, Hilsa Fish, and More Delivered.",
    },
    Feature {
        icon: Asset::IconRocket,
        title: "Pro Subscription",
        description: "Ad-Free Experience, Exclusive Recipes.",
    },
];

pub const ABOUT_TEXT: &str = "E-Radhuni is a Bengali cooking platform, bringing authentic \
    recipes and chef-led videos to your fingertips. Based in Bangladesh, we're passionate \
    about making cooking easy, fun and accessible. Our mission is to preserve our rich \
    heritage, a better alternative, and a community where food lovers can connect.";

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

// Placeholders until real profiles are supplied; all share Asset::TeamPlaceholder.
pub const TEAM: [TeamMember; 3] = [
    TeamMember { name: "Full name", role: "Position & UI Designer" },
    TeamMember { name: "Full name", role: "Position & UI Designer" },
    TeamMember { name: "Full name", role: "Position & UI Designer" },
];

/// Footer link that goes nowhere yet.
pub struct StaticLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FOOTER_RESOURCES: [StaticLink; 4] = [
    StaticLink { label: "Blog post name goes here", href: "#" },
    StaticLink { label: "Blog post name goes here", href: "#" },
    StaticLink { label: "Blog post name goes here", href: "#" },
    StaticLink { label: "See all resources", href: "#" },
];

pub const FOOTER_ABOUT: [StaticLink; 2] = [
    StaticLink { label: "Terms & Conditions", href: "#" },
    StaticLink { label: "Privacy Policy", href: "#" },
];

pub fn copyright_line(year: i32) -> String {
    format!("Copyright © {} Company name", year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::fragment_target;

    #[test]
    fn assets_resolve_under_asset_base() {
        assert_eq!(Asset::Logo.url(), "/assets/logo.png");
        assert_eq!(Asset::ScreenRecipe.url(), "/assets/RecipeView.jpg");
    }

    #[test]
    fn static_footer_links_are_not_intercepted() {
        for link in FOOTER_RESOURCES.iter().chain(FOOTER_ABOUT.iter()) {
            assert_eq!(fragment_target(link.href), None, "{} would scroll", link.label);
        }
    }

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(copyright_line(2026), "Copyright © 2026 Company name");
    }
}
