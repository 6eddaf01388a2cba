use serde::Serialize;

/// A logged work unit is either half a day or a full day.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventKind {
    HalfDay,
    FullDay,
}

impl EventKind {
    /// Classify a CSV "Tipo" cell: any text containing "inteiro" or "full"
    /// (case-insensitive) is a full day, everything else a half day.
    pub fn classify(label: &str) -> Self {
        let l = label.to_lowercase();
        if l.contains("inteiro") || l.contains("full") {
            EventKind::FullDay
        } else {
            EventKind::HalfDay
        }
    }

    /// Parse the CLI argument of `add`.
    pub fn from_cli(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "half" | "half_day" | "meio" => Some(EventKind::HalfDay),
            "full" | "full_day" | "inteiro" => Some(EventKind::FullDay),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::HalfDay => "half_day",
            EventKind::FullDay => "full_day",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "half_day" => Some(EventKind::HalfDay),
            "full_day" => Some(EventKind::FullDay),
            _ => None,
        }
    }

    /// Label written by the personal CSV exporter.
    pub fn label_pt(&self) -> &'static str {
        match self {
            EventKind::HalfDay => "Meio Dia",
            EventKind::FullDay => "Dia Inteiro",
        }
    }

    /// Short label used in the payroll listing.
    pub fn payroll_label_pt(&self) -> &'static str {
        match self {
            EventKind::HalfDay => "Meio",
            EventKind::FullDay => "Integral",
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, EventKind::FullDay)
    }
}
