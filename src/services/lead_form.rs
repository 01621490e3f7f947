//! Lead capture form state machine
//!
//! `Empty -> Editing` on any update. A submit missing a required field leaves
//! the form `Editing` untouched; a delivered submit resets it to `Empty`.

use crate::models::{package, LeadField, LeadForm};
use crate::services::lead_sink::{Ack, LeadSink, SubmissionError};
use crate::services::navigator::{self, Section, SectionHost};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Empty,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The sink accepted the lead and the form was reset
    Submitted { lead: LeadForm, ack: Ack },
    /// Required fields were blank; nothing was sent. The browser reports
    /// these to the visitor through native `required` validation.
    Invalid { missing: Vec<LeadField> },
    /// The sink refused or could not take the lead; the form keeps its input
    Failed(SubmissionError),
}

#[derive(Debug, Clone)]
pub struct LeadFormController<S> {
    form: LeadForm,
    phase: FormPhase,
    sink: S,
}

impl<S: LeadSink> LeadFormController<S> {
    pub fn new(sink: S) -> Self {
        Self {
            form: LeadForm::default(),
            phase: FormPhase::Empty,
            sink,
        }
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn value(&self, field: LeadField) -> &str {
        self.form.get(field)
    }

    pub fn update_field(&mut self, name: &str, value: impl Into<String>) {
        self.form.update_field(name, value);
        self.phase = FormPhase::Editing;
    }

    /// Pick a package from its card, then bring the contact form into view
    pub fn select_package(&mut self, name: &str, host: &impl SectionHost) {
        debug_assert!(
            package::find(name).is_some(),
            "unknown package `{name}`"
        );
        self.update_field(LeadField::Package.as_str(), name);
        navigator::go_to_section(host, Section::Contact);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let missing = self.form.missing_required();
        if !missing.is_empty() {
            tracing::debug!(?missing, "lead submit blocked by required fields");
            return SubmitOutcome::Invalid { missing };
        }

        match self.sink.submit(&self.form) {
            Ok(ack) => {
                let lead = std::mem::take(&mut self.form);
                self.phase = FormPhase::Empty;
                tracing::info!(
                    package = %lead.package,
                    has_message = !lead.message.is_empty(),
                    "lead submitted"
                );
                SubmitOutcome::Submitted { lead, ack }
            }
            Err(e) => {
                tracing::warn!(error = %e, "lead submission failed");
                SubmitOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::services::lead_sink::LocalAcknowledgement;
    use crate::services::navigator::testing::FakeDocument;

    /// Records every lead it is given and answers with a canned result
    struct RecordingSink {
        received: RefCell<Vec<LeadForm>>,
        fail_with: Option<SubmissionError>,
    }

    impl RecordingSink {
        fn accepting() -> Self {
            Self {
                received: RefCell::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(err: SubmissionError) -> Self {
            Self {
                received: RefCell::new(Vec::new()),
                fail_with: Some(err),
            }
        }
    }

    impl LeadSink for RecordingSink {
        fn submit(&self, lead: &LeadForm) -> Result<Ack, SubmissionError> {
            self.received.borrow_mut().push(lead.clone());
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(Ack {
                    message: "ok".into(),
                }),
            }
        }
    }

    fn filled(controller: &mut LeadFormController<impl LeadSink>) {
        controller.update_field("firstName", "Jane");
        controller.update_field("lastName", "Doe");
        controller.update_field("email", "jane@example.com");
        controller.update_field("phone", "555-0100");
        controller.update_field("message", "My debut novel\nneeds a launch plan");
        controller.update_field("package", "Growth Package");
    }

    #[test]
    fn starts_empty() {
        let controller = LeadFormController::new(LocalAcknowledgement::default());
        assert_eq!(controller.phase(), FormPhase::Empty);
        assert!(controller.form().is_empty());
    }

    #[test]
    fn any_update_enters_editing() {
        let mut controller = LeadFormController::new(LocalAcknowledgement::default());
        controller.update_field("message", "");
        assert_eq!(controller.phase(), FormPhase::Editing);
    }

    #[test]
    fn submit_without_first_name_is_rejected() {
        let sink = RecordingSink::accepting();
        let mut controller = LeadFormController::new(&sink);
        controller.update_field("firstName", "");
        controller.update_field("email", "a@b.com");
        let before = controller.form().clone();

        let outcome = controller.submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Invalid {
                missing: vec![LeadField::FirstName]
            }
        );
        assert_eq!(controller.phase(), FormPhase::Editing);
        assert_eq!(controller.form(), &before);
        assert!(sink.received.borrow().is_empty());
    }

    #[test]
    fn submit_without_email_is_rejected() {
        let sink = RecordingSink::accepting();
        let mut controller = LeadFormController::new(&sink);
        controller.update_field("firstName", "Jane");

        assert!(matches!(
            controller.submit(),
            SubmitOutcome::Invalid { missing } if missing == vec![LeadField::Email]
        ));
        assert_eq!(controller.value(LeadField::FirstName), "Jane");
    }

    #[test]
    fn minimal_submit_resets_to_empty() {
        let mut controller = LeadFormController::new(LocalAcknowledgement::default());
        controller.update_field("firstName", "Jane");
        controller.update_field("email", "jane@example.com");

        let SubmitOutcome::Submitted { lead, ack } = controller.submit() else {
            panic!("expected submission");
        };

        assert_eq!(lead.first_name, "Jane");
        assert_eq!(lead.email, "jane@example.com");
        assert!(ack.message.starts_with("Thank you, Jane!"));
        assert_eq!(controller.phase(), FormPhase::Empty);
        assert_eq!(controller.form(), &LeadForm::default());
    }

    #[test]
    fn sink_receives_every_field_verbatim() {
        let sink = RecordingSink::accepting();
        let mut controller = LeadFormController::new(&sink);
        filled(&mut controller);
        let expected = controller.form().clone();

        assert!(matches!(controller.submit(), SubmitOutcome::Submitted { .. }));
        assert_eq!(*sink.received.borrow(), vec![expected]);
        assert!(controller.form().is_empty());
    }

    #[test]
    fn form_is_reusable_after_submission() {
        let sink = RecordingSink::accepting();
        let mut controller = LeadFormController::new(&sink);
        filled(&mut controller);
        controller.submit();

        controller.update_field("firstName", "Sam");
        controller.update_field("email", "sam@example.com");
        assert!(matches!(controller.submit(), SubmitOutcome::Submitted { .. }));
        assert_eq!(sink.received.borrow().len(), 2);
        assert_eq!(sink.received.borrow()[1].first_name, "Sam");
        assert_eq!(sink.received.borrow()[1].package, "");
    }

    #[test]
    fn failed_delivery_keeps_input() {
        let sink = RecordingSink::failing(SubmissionError::Unavailable("offline".into()));
        let mut controller = LeadFormController::new(&sink);
        filled(&mut controller);
        let before = controller.form().clone();

        let outcome = controller.submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(SubmissionError::Unavailable("offline".into()))
        );
        assert_eq!(controller.form(), &before);
        assert_eq!(controller.phase(), FormPhase::Editing);
    }

    #[test]
    fn select_package_sets_field_and_scrolls_to_contact() {
        let doc = FakeDocument::with_ids(&["packages", "contact"]);
        let mut controller = LeadFormController::new(LocalAcknowledgement::default());
        controller.update_field("firstName", "Jane");

        controller.select_package("Prime Exposure", &doc);

        assert_eq!(controller.value(LeadField::Package), "Prime Exposure");
        assert_eq!(controller.value(LeadField::FirstName), "Jane");
        assert_eq!(*doc.scrolled.borrow(), vec!["contact".to_string()]);
    }

    #[test]
    fn select_package_without_contact_section_still_selects() {
        let doc = FakeDocument::default();
        let mut controller = LeadFormController::new(LocalAcknowledgement::default());

        controller.select_package("Starter Package", &doc);

        assert_eq!(controller.value(LeadField::Package), "Starter Package");
        assert!(doc.scrolled.borrow().is_empty());
    }
}
