use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Tenure status codes as published in the university salary book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TenureCode {
    /// A
    Indefinite,
    /// M
    MultiYear,
    /// N
    InitialPartial,
    /// P
    Probationary,
    /// Q
    SpecifiedTerm,
    /// T
    Terminal,
    /// W
    SpecialAgreement,
}

impl TenureCode {
    pub const ALL: [TenureCode; 7] = [
        TenureCode::Indefinite,
        TenureCode::MultiYear,
        TenureCode::InitialPartial,
        TenureCode::Probationary,
        TenureCode::SpecifiedTerm,
        TenureCode::Terminal,
        TenureCode::SpecialAgreement,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TenureCode::Indefinite => "A",
            TenureCode::MultiYear => "M",
            TenureCode::InitialPartial => "N",
            TenureCode::Probationary => "P",
            TenureCode::SpecifiedTerm => "Q",
            TenureCode::Terminal => "T",
            TenureCode::SpecialAgreement => "W",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TenureCode::Indefinite => "Indefinite tenure",
            TenureCode::MultiYear => "Multi-Year Contract Agreement",
            TenureCode::InitialPartial => "Initial/Partial Term",
            TenureCode::Probationary => "Probationary Term",
            TenureCode::SpecifiedTerm => "Specified Term Appointment",
            TenureCode::Terminal => "Terminal Contract",
            TenureCode::SpecialAgreement => {
                "Special Agreement to Accept Academic Appointment and Reappointment for Definite Term"
            }
        }
    }
}

impl fmt::Display for TenureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl FromStr for TenureCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        TenureCode::ALL
            .into_iter()
            .find(|tenure| tenure.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ModelError::UnknownTenureCode(code.to_string()))
    }
}

/// Maps a raw tenure code to its description; unknown or blank codes map to "".
pub fn tenure_description(code: &str) -> &'static str {
    code.parse::<TenureCode>()
        .map(|tenure| tenure.description())
        .unwrap_or("")
}
