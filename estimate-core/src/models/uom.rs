use serde::{Deserialize, Serialize};

/// Unit of measure for a line item.
///
/// A closed set of codes; serialized form matches [`UnitOfMeasure::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitOfMeasure {
    #[default]
    #[serde(rename = "EA")]
    Each,
    #[serde(rename = "HR")]
    Hour,
    #[serde(rename = "DAY")]
    Day,
    #[serde(rename = "WK")]
    Week,
    #[serde(rename = "LF")]
    LinearFoot,
    #[serde(rename = "SF")]
    SquareFoot,
    #[serde(rename = "SY")]
    SquareYard,
    #[serde(rename = "CY")]
    CubicYard,
    #[serde(rename = "GAL")]
    Gallon,
    #[serde(rename = "LB")]
    Pound,
    #[serde(rename = "BOX")]
    Box,
    #[serde(rename = "LS")]
    LumpSum,
}

impl UnitOfMeasure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Each => "EA",
            Self::Hour => "HR",
            Self::Day => "DAY",
            Self::Week => "WK",
            Self::LinearFoot => "LF",
            Self::SquareFoot => "SF",
            Self::SquareYard => "SY",
            Self::CubicYard => "CY",
            Self::Gallon => "GAL",
            Self::Pound => "LB",
            Self::Box => "BOX",
            Self::LumpSum => "LS",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "EA" => Some(Self::Each),
            "HR" => Some(Self::Hour),
            "DAY" => Some(Self::Day),
            "WK" => Some(Self::Week),
            "LF" => Some(Self::LinearFoot),
            "SF" => Some(Self::SquareFoot),
            "SY" => Some(Self::SquareYard),
            "CY" => Some(Self::CubicYard),
            "GAL" => Some(Self::Gallon),
            "LB" => Some(Self::Pound),
            "BOX" => Some(Self::Box),
            "LS" => Some(Self::LumpSum),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Each => "Each",
            Self::Hour => "Hour",
            Self::Day => "Day",
            Self::Week => "Week",
            Self::LinearFoot => "Linear Foot",
            Self::SquareFoot => "Square Foot",
            Self::SquareYard => "Square Yard",
            Self::CubicYard => "Cubic Yard",
            Self::Gallon => "Gallon",
            Self::Pound => "Pound",
            Self::Box => "Box",
            Self::LumpSum => "Lump Sum",
        }
    }

    /// The full set, in display order.
    pub fn all() -> &'static [UnitOfMeasure] {
        &[
            UnitOfMeasure::Each,
            UnitOfMeasure::Hour,
            UnitOfMeasure::Day,
            UnitOfMeasure::Week,
            UnitOfMeasure::LinearFoot,
            UnitOfMeasure::SquareFoot,
            UnitOfMeasure::SquareYard,
            UnitOfMeasure::CubicYard,
            UnitOfMeasure::Gallon,
            UnitOfMeasure::Pound,
            UnitOfMeasure::Box,
            UnitOfMeasure::LumpSum,
        ]
    }
}
