//! State behind the "Get Started" booking form.
//!
//! The form never leaves the browser: a submission is logged and the fields
//! are cleared. Required-ness is only surfaced as the HTML `required`
//! attribute, the browser does the rest.

use serde::Serialize;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingMode {
    Purchase,
    Rent,
    Doctor,
}

impl BookingMode {
    pub const ALL: [BookingMode; 3] = [BookingMode::Purchase, BookingMode::Rent, BookingMode::Doctor];

    pub fn id(self) -> &'static str {
        match self {
            BookingMode::Purchase => "purchase",
            BookingMode::Rent => "rent",
            BookingMode::Doctor => "doctor",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingMode::Purchase => "Purchase Exoskeleton",
            BookingMode::Rent => "Rent Exoskeleton",
            BookingMode::Doctor => "Doctor Order",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            BookingMode::Purchase => "Submit Purchase Request",
            BookingMode::Rent => "Submit Rental Request",
            BookingMode::Doctor => "Submit Doctor Order",
        }
    }

    /// Inputs shown below the shared contact block for this mode.
    pub fn extra_fields(self) -> &'static [FieldSpec] {
        match self {
            BookingMode::Purchase => PURCHASE_FIELDS,
            BookingMode::Rent => RENT_FIELDS,
            BookingMode::Doctor => DOCTOR_FIELDS,
        }
    }

    // Doctor orders leave the contact name optional.
    pub fn is_required(self, field: Field) -> bool {
        !(self == BookingMode::Doctor && field == Field::Name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Date,
    Address,
    Duration,
    Hours,
    PatientName,
    Hospital,
    Diagnosis,
}

impl Field {
    /// The `name` attribute of the rendered input.
    pub fn html_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Date => "date",
            Field::Address => "address",
            Field::Duration => "duration",
            Field::Hours => "hours",
            Field::PatientName => "patientName",
            Field::Hospital => "hospital",
            Field::Diagnosis => "diagnosis",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Date,
    TextArea,
}

impl InputKind {
    pub fn html_type(self) -> &'static str {
        match self {
            InputKind::Text | InputKind::TextArea => "text",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
            InputKind::Date => "date",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub label: &'static str,
    pub kind: InputKind,
    pub placeholder: &'static str,
    pub icon: &'static str,
}

const fn spec(
    field: Field,
    label: &'static str,
    kind: InputKind,
    placeholder: &'static str,
    icon: &'static str,
) -> FieldSpec {
    FieldSpec { field, label, kind, placeholder, icon }
}

pub const SHARED_FIELDS: &[FieldSpec] = &[
    spec(Field::Name, "Full Name", InputKind::Text, "Full Name", "👤"),
    spec(Field::Email, "Email", InputKind::Email, "you@example.com", "✉️"),
    spec(Field::Phone, "Phone", InputKind::Tel, "+91 9876543210", "📞"),
    spec(Field::Date, "Preferred Date", InputKind::Date, "", "📅"),
];

const PURCHASE_FIELDS: &[FieldSpec] = &[spec(
    Field::Address,
    "Shipping Address",
    InputKind::Text,
    "123 Main St, City, Country",
    "🏠",
)];

const RENT_FIELDS: &[FieldSpec] = &[
    spec(Field::Duration, "Rental Duration (e.g., Months)", InputKind::Text, "e.g., 3 Months", "⏱️"),
    spec(Field::Hours, "Hours per Day", InputKind::Text, "e.g., 6 hours/day", "⏱️"),
];

const DOCTOR_FIELDS: &[FieldSpec] = &[
    spec(Field::PatientName, "Patient Name", InputKind::Text, "Enter Patient's Full Name", "👤"),
    spec(Field::Hospital, "Hospital / Clinic", InputKind::Text, "Hospital or Clinic Name", "🏥"),
    spec(
        Field::Diagnosis,
        "Diagnosis / Notes",
        InputKind::TextArea,
        "Brief description of patient condition",
        "📝",
    ),
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub address: String,
    pub duration: String,
    pub hours: String,
    pub patient_name: String,
    pub hospital: String,
    pub diagnosis: String,
}

impl BookingForm {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Date => &mut self.date,
            Field::Address => &mut self.address,
            Field::Duration => &mut self.duration,
            Field::Hours => &mut self.hours,
            Field::PatientName => &mut self.patient_name,
            Field::Hospital => &mut self.hospital,
            Field::Diagnosis => &mut self.diagnosis,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Date => &self.date,
            Field::Address => &self.address,
            Field::Duration => &self.duration,
            Field::Hours => &self.hours,
            Field::PatientName => &self.patient_name,
            Field::Hospital => &self.hospital,
            Field::Diagnosis => &self.diagnosis,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        *self.slot(field) = value;
    }
}

/// What gets written to the console when the form is sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub mode: BookingMode,
    pub form: BookingForm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Booking {
    pub mode: BookingMode,
    pub form: BookingForm,
    toast_remaining_ms: u32,
}

impl Default for Booking {
    fn default() -> Self {
        Self {
            mode: BookingMode::Purchase,
            form: BookingForm::default(),
            toast_remaining_ms: 0,
        }
    }
}

impl Booking {
    /// Switching modes starts from a blank form.
    pub fn select_mode(&mut self, mode: BookingMode) {
        self.mode = mode;
        self.form = BookingForm::default();
    }

    pub fn update(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    pub fn submit(&mut self) -> Submission {
        let form = std::mem::take(&mut self.form);
        self.toast_remaining_ms = config::TOAST_MS;
        Submission { mode: self.mode, form }
    }

    pub fn toast_visible(&self) -> bool {
        self.toast_remaining_ms > 0
    }

    /// Counts the confirmation toast down; it hides once `TOAST_MS` has passed since the last submit.
    pub fn elapse(&mut self, elapsed_ms: u32) {
        self.toast_remaining_ms = self.toast_remaining_ms.saturating_sub(elapsed_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(mode: BookingMode) -> Booking {
        let mut booking = Booking::default();
        booking.select_mode(mode);
        for spec in SHARED_FIELDS.iter().chain(mode.extra_fields()) {
            booking.update(spec.field, format!("{} value", spec.label));
        }
        booking
    }

    #[test]
    fn test_submit_resets_form_and_shows_toast() {
        let mut booking = filled(BookingMode::Rent);
        assert_eq!(booking.form.hours, "Hours per Day value");

        let submission = booking.submit();

        assert_eq!(submission.mode, BookingMode::Rent);
        assert_eq!(submission.form.duration, "Rental Duration (e.g., Months) value");
        assert_eq!(booking.form, BookingForm::default());
        assert_eq!(booking.mode, BookingMode::Rent);
        assert!(booking.toast_visible());
    }

    #[test]
    fn test_toast_hides_after_fixed_duration() {
        let mut booking = filled(BookingMode::Purchase);
        assert!(!booking.toast_visible());
        booking.submit();

        booking.elapse(config::TOAST_MS - 1);
        assert!(booking.toast_visible());

        booking.elapse(1);
        assert!(!booking.toast_visible());

        booking.elapse(500);
        assert!(!booking.toast_visible());
    }

    #[test]
    fn test_second_submission_restarts_toast_countdown() {
        let mut booking = filled(BookingMode::Rent);
        booking.submit();
        booking.elapse(config::TOAST_MS - 100);

        booking.submit();
        booking.elapse(config::TOAST_MS - 1);
        assert!(booking.toast_visible());

        booking.elapse(1);
        assert!(!booking.toast_visible());
    }

    #[test]
    fn test_switching_mode_clears_fields() {
        let mut booking = filled(BookingMode::Purchase);
        assert!(!booking.form.address.is_empty());

        booking.select_mode(BookingMode::Doctor);
        assert_eq!(booking.mode, BookingMode::Doctor);
        assert_eq!(booking.form, BookingForm::default());
    }

    #[test]
    fn test_mode_specific_fields() {
        let fields = |mode: BookingMode| -> Vec<Field> {
            mode.extra_fields().iter().map(|s| s.field).collect()
        };
        assert_eq!(fields(BookingMode::Purchase), vec![Field::Address]);
        assert_eq!(fields(BookingMode::Rent), vec![Field::Duration, Field::Hours]);
        assert_eq!(
            fields(BookingMode::Doctor),
            vec![Field::PatientName, Field::Hospital, Field::Diagnosis]
        );
    }

    #[test]
    fn test_name_optional_only_for_doctor_orders() {
        assert!(BookingMode::Purchase.is_required(Field::Name));
        assert!(BookingMode::Rent.is_required(Field::Name));
        assert!(!BookingMode::Doctor.is_required(Field::Name));
        assert!(BookingMode::Doctor.is_required(Field::Diagnosis));
    }

    #[test]
    fn test_mode_ids_and_labels() {
        assert_eq!(BookingMode::from_id("rent"), Some(BookingMode::Rent));
        assert_eq!(BookingMode::from_id("lease"), None);
        assert_eq!(BookingMode::Doctor.submit_label(), "Submit Doctor Order");
    }

    #[test]
    fn test_submission_serializes_with_dom_names() {
        let mut booking = filled(BookingMode::Doctor);
        let json = serde_json::to_value(booking.submit()).unwrap();
        assert_eq!(json["mode"], "doctor");
        assert_eq!(json["form"]["patientName"], "Patient Name value");
    }
}
