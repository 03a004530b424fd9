use log::Level;

/// Height of the fixed header; section scrolls land this far above the section top.
pub const HEADER_OFFSET: f64 = 80.0;

/// Below this width the desktop nav collapses into the toggle button.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

pub const ASSET_BASE: &str = "/assets";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose navigation logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_url(file: &str) -> String {
    format!("{}/{}", ASSET_BASE, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_base_and_file() {
        assert_eq!(asset_url("logo.png"), "/assets/logo.png");
    }
}
