use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Renovation project categories offered on the estimator form.
///
/// `Adu` and `AccessoryDwellingUnit` are separate entries because the form
/// lists both labels; they carry identical coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProjectType {
    Bathroom,
    Kitchen,
    RoofReplacement,
    WindowReplacement,
    GarageDoorReplacement,
    DeckAddition,
    AtticInsulation,
    SidingReplacement,
    RoomAddition,
    AccessoryDwellingUnit,
    Adu,
    Landscaping,
    SolarPanelInstallation,
}

impl ProjectType {
    /// Every project type, in the order the form presents them.
    pub const ALL: [ProjectType; 13] = [
        Self::Bathroom,
        Self::Kitchen,
        Self::RoofReplacement,
        Self::WindowReplacement,
        Self::GarageDoorReplacement,
        Self::DeckAddition,
        Self::AtticInsulation,
        Self::SidingReplacement,
        Self::RoomAddition,
        Self::AccessoryDwellingUnit,
        Self::Adu,
        Self::Landscaping,
        Self::SolarPanelInstallation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bathroom => "Bathroom",
            Self::Kitchen => "Kitchen",
            Self::RoofReplacement => "Roof Replacement",
            Self::WindowReplacement => "Window Replacement",
            Self::GarageDoorReplacement => "Garage Door Replacement",
            Self::DeckAddition => "Deck Addition",
            Self::AtticInsulation => "Attic Insulation",
            Self::SidingReplacement => "Siding Replacement",
            Self::RoomAddition => "Room Addition",
            Self::AccessoryDwellingUnit => "Accessory Dwelling Unit",
            Self::Adu => "ADU",
            Self::Landscaping => "Landscaping",
            Self::SolarPanelInstallation => "Solar Panel Installation",
        }
    }

    /// Looks up a project type by its form label.
    ///
    /// Surrounding whitespace is ignored; the label itself must match exactly.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|p| p.label() == s)
    }

    /// Position of this project type in [`ProjectType::ALL`].
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ProjectType {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ProjectType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::parse(&label).ok_or_else(|| {
            serde::de::Error::custom(format!("unrecognised project type '{label}'"))
        })
    }
}
