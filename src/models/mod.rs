mod content;
mod lead;
pub mod package;

pub use content::{Service, Testimonial, SERVICES, TESTIMONIAL, WORKS};
pub use lead::{LeadField, LeadForm};
pub use package::{PackageBadge, PackageOffer};
