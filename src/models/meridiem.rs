use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    /// Helper: convert user input (lowercase, uppercase, dotted "p.m.")
    pub fn from_code(code: &str) -> Option<Self> {
        let cleaned: String = code
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '.')
            .collect::<String>()
            .to_uppercase();

        match cleaned.as_str() {
            "AM" | "A" => Some(Meridiem::Am),
            "PM" | "P" => Some(Meridiem::Pm),
            _ => None,
        }
    }

    pub fn is_pm(&self) -> bool {
        matches!(self, Meridiem::Pm)
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
