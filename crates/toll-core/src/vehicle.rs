//! Vehicle type enum shared by accounts, the map renderer, and reports.

/// The kind of vehicle registered to a user account.
///
/// Unknown kinds from scenario files are kept verbatim in `Other` so reports
/// can still show them; they render with the generic icon.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum VehicleKind {
    Truck,
    Car,
    Other(String),
}

impl VehicleKind {
    /// Font Awesome icon name used for map markers.  Total over all variants;
    /// anything that is not a truck gets the generic `car` icon.
    pub fn icon(&self) -> &'static str {
        match self {
            VehicleKind::Truck    => "truck",
            VehicleKind::Car      => "car",
            VehicleKind::Other(_) => "car",
        }
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(&self) -> &str {
        match self {
            VehicleKind::Truck    => "truck",
            VehicleKind::Car      => "car",
            VehicleKind::Other(s) => s,
        }
    }
}

impl From<&str> for VehicleKind {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "truck" => VehicleKind::Truck,
            "car"   => VehicleKind::Car,
            _       => VehicleKind::Other(s.to_owned()),
        }
    }
}

impl From<String> for VehicleKind {
    fn from(s: String) -> Self {
        VehicleKind::from(s.as_str())
    }
}

impl From<VehicleKind> for String {
    fn from(kind: VehicleKind) -> String {
        kind.as_str().to_owned()
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
