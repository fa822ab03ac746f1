use super::kind::RecordKind;

/// The two intake forms. Each form owns one draft slot in the key-value
/// namespace, keyed by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormType {
    Measurement,
    Appointment,
}

impl FormType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Measurement => "measurement",
            FormType::Appointment => "appointment",
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            FormType::Measurement => RecordKind::Measurements,
            FormType::Appointment => RecordKind::Appointments,
        }
    }

    /// Key holding the draft field map.
    pub fn draft_key(&self) -> String {
        format!("autosave:{}", self.as_str())
    }

    /// Paired key holding the draft save instant (millis since epoch).
    pub fn draft_timestamp_key(&self) -> String {
        format!("autosave:{}_timestamp", self.as_str())
    }

    /// All fields the form carries, in document order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            FormType::Measurement => &[
                "Name",
                "Email",
                "Contact Number",
                "Bust",
                "Waist",
                "Shoulder Width",
                "Sleeve Length",
                "Service Type",
                "Notes",
            ],
            FormType::Appointment => &[
                "Name",
                "Email",
                "Contact Number",
                "Preferred Date",
                "Preferred Time",
                "Service Type",
                "Notes",
            ],
        }
    }

    /// Fields a submission cannot omit, in document order.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            FormType::Measurement => &[
                "Name",
                "Email",
                "Contact Number",
                "Bust",
                "Waist",
                "Shoulder Width",
                "Sleeve Length",
                "Service Type",
            ],
            FormType::Appointment => &[
                "Name",
                "Email",
                "Contact Number",
                "Preferred Date",
                "Service Type",
            ],
        }
    }
}
