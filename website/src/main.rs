use gateway_landing_core::SiteConfig;
use gateway_landing_website::{logging, site_config, App};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = site_config::load();
    logging::init(loaded.as_ref().map_or("info", |c| c.log_level.as_str()));

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Ignoring embedded site.toml: {e}");
        SiteConfig::default()
    });

    mount_to_body(move || view! { <App config /> });
}
