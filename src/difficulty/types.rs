use serde::{Deserialize, Serialize};

/// Colour of a regular hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HitType {
    Centre,
    Rim,
}

impl HitType {
    pub fn opposite(self) -> Self {
        match self {
            HitType::Centre => HitType::Rim,
            HitType::Rim => HitType::Centre,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectKind {
    Hit,
    DrumRoll,
    DrumRollTick,
    Swell,
    SwellTick,
}

impl ObjectKind {
    /// Only regular hits carry colour information.
    pub fn is_hit(self) -> bool {
        matches!(self, ObjectKind::Hit)
    }
}

/// One preprocessed object of the difficulty stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyEvent {
    pub kind: ObjectKind,
    /// Kind of the object immediately before this one.
    pub last_kind: ObjectKind,
    #[serde(default)]
    pub hit_type: Option<HitType>,
    /// Milliseconds since the previous object.
    pub delta_time: f64,
}

impl DifficultyEvent {
    pub fn new(
        kind: ObjectKind,
        last_kind: ObjectKind,
        hit_type: Option<HitType>,
        delta_time: f64,
    ) -> Self {
        Self {
            kind,
            last_kind,
            hit_type,
            delta_time,
        }
    }

    /// A regular hit that follows another regular hit.
    pub fn hit(hit_type: HitType, delta_time: f64) -> Self {
        Self::new(ObjectKind::Hit, ObjectKind::Hit, Some(hit_type), delta_time)
    }

    pub fn follows_hit(&self) -> bool {
        self.kind.is_hit() && self.last_kind.is_hit()
    }
}
