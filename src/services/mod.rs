pub mod lead_form;
pub mod lead_sink;
pub mod navigator;
pub mod scroll;

pub use lead_form::{FormPhase, LeadFormController, SubmitOutcome};
pub use lead_sink::{Ack, LeadSink, LocalAcknowledgement, SubmissionError};
pub use navigator::{Document, Section, SectionHost};
pub use scroll::{ScrollObserver, ScrollSource, Subscription, WindowScroll};
