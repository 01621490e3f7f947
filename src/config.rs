//! Site profile shown in the navigation, contact section and footer

pub const BRAND: &str = "KATIE JONES READS";
pub const SITE_TITLE: &str = "Katie Jones Reads - eBook Promotion Specialist";
pub const SITE_DESCRIPTION: &str =
    "eBook formatting, cover design, launch strategy and book club campaigns for authors";

pub const CONTACT_EMAIL: &str = "katiejones.reads@gmail.com";
pub const CONTACT_PHONE: &str = "3178158";
pub const LOCATION_TAG: &str = "eBook Specialist";

/// Default `RUST_LOG` filter for the server when none is set
#[cfg(feature = "ssr")]
pub const DEFAULT_LOG_FILTER: &str = "info,kjreads=debug,tower_http=info";
