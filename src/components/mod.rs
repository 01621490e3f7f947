mod footer;
mod lead_form;
mod nav;
mod packages;

pub use footer::Footer;
pub use lead_form::{lead_form_signal, LeadFormPanel, LeadFormSignal};
pub use nav::Nav;
pub use packages::PackageGrid;
