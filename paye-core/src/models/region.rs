use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    England,
    Scotland,
    Wales,
    NorthernIreland,
}

/// Which band schedule a region resolves to. England, Wales and Northern
/// Ireland share one schedule; Scotland sets its own rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleVariant {
    EnglandWalesNi,
    Scotland,
}

impl Region {
    pub fn schedule_variant(&self) -> ScheduleVariant {
        match self {
            Self::Scotland => ScheduleVariant::Scotland,
            Self::England | Self::Wales | Self::NorthernIreland => ScheduleVariant::EnglandWalesNi,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::England => "England",
            Self::Scotland => "Scotland",
            Self::Wales => "Wales",
            Self::NorthernIreland => "NorthernIreland",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "England" => Some(Self::England),
            "Scotland" => Some(Self::Scotland),
            "Wales" => Some(Self::Wales),
            "NorthernIreland" => Some(Self::NorthernIreland),
            _ => None,
        }
    }
}
