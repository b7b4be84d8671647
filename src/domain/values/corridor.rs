use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A US-outbound remittance corridor, identified by the destination country code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Corridor {
    #[default]
    Mx,
    Co,
    Br,
    Ar,
    Ve,
    Cl,
    Pe,
    Bo,
    Gt,
    Do,
    Sv,
}

impl Corridor {
    pub const ALL: [Corridor; 11] = [
        Corridor::Mx,
        Corridor::Co,
        Corridor::Br,
        Corridor::Ar,
        Corridor::Ve,
        Corridor::Cl,
        Corridor::Pe,
        Corridor::Bo,
        Corridor::Gt,
        Corridor::Do,
        Corridor::Sv,
    ];

    /// Two-letter code used in request paths.
    pub fn code(&self) -> &'static str {
        match self {
            Corridor::Mx => "MX",
            Corridor::Co => "CO",
            Corridor::Br => "BR",
            Corridor::Ar => "AR",
            Corridor::Ve => "VE",
            Corridor::Cl => "CL",
            Corridor::Pe => "PE",
            Corridor::Bo => "BO",
            Corridor::Gt => "GT",
            Corridor::Do => "DO",
            Corridor::Sv => "SV",
        }
    }

    pub fn country_name(&self) -> &'static str {
        match self {
            Corridor::Mx => "Mexico",
            Corridor::Co => "Colombia",
            Corridor::Br => "Brazil",
            Corridor::Ar => "Argentina",
            Corridor::Ve => "Venezuela",
            Corridor::Cl => "Chile",
            Corridor::Pe => "Peru",
            Corridor::Bo => "Bolivia",
            Corridor::Gt => "Guatemala",
            Corridor::Do => "Dominican Republic",
            Corridor::Sv => "El Salvador",
        }
    }

    /// ISO 4217 code of the currency the recipient is paid in.
    pub fn currency(&self) -> &'static str {
        match self {
            Corridor::Mx => "MXN",
            Corridor::Co => "COP",
            Corridor::Br => "BRL",
            Corridor::Ar => "ARS",
            Corridor::Ve => "VES",
            Corridor::Cl => "CLP",
            Corridor::Pe => "PEN",
            Corridor::Bo => "BOB",
            Corridor::Gt => "GTQ",
            Corridor::Do => "DOP",
            Corridor::Sv => "USD",
        }
    }
}

impl fmt::Display for Corridor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Corridor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Corridor::ALL
            .into_iter()
            .find(|c| c.code() == wanted)
            .ok_or_else(|| format!("Unknown corridor: {s}"))
    }
}

/// Reference row describing a corridor, as shown to presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorridorInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub currency: &'static str,
}

impl From<Corridor> for CorridorInfo {
    fn from(c: Corridor) -> Self {
        Self {
            code: c.code(),
            name: c.country_name(),
            currency: c.currency(),
        }
    }
}
