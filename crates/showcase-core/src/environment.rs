use crate::constants::*;
use glam::Vec3;

/// Which of the two environments is meant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EnvVariant {
    #[default]
    A,
    B,
}

impl EnvVariant {
    pub fn toggled(self) -> Self {
        match self {
            EnvVariant::A => EnvVariant::B,
            EnvVariant::B => EnvVariant::A,
        }
    }

    /// 1-based map number used in logs and the page (`map1`, `map2`).
    pub fn map_number(self) -> u8 {
        match self {
            EnvVariant::A => 1,
            EnvVariant::B => 2,
        }
    }

    pub fn index(self) -> usize {
        self.map_number() as usize - 1
    }
}

/// Two environment slots with exactly one active.
#[derive(Clone, Debug)]
pub struct EnvironmentPair<T> {
    a: T,
    b: T,
    active: EnvVariant,
}

impl<T> EnvironmentPair<T> {
    pub fn new(a: T, b: T) -> Self {
        Self {
            a,
            b,
            active: EnvVariant::A,
        }
    }

    pub fn active_variant(&self) -> EnvVariant {
        self.active
    }

    pub fn get(&self, variant: EnvVariant) -> &T {
        match variant {
            EnvVariant::A => &self.a,
            EnvVariant::B => &self.b,
        }
    }

    pub fn get_mut(&mut self, variant: EnvVariant) -> &mut T {
        match variant {
            EnvVariant::A => &mut self.a,
            EnvVariant::B => &mut self.b,
        }
    }

    /// Make the other slot active; returns the newly active variant.
    pub(crate) fn swap(&mut self) -> EnvVariant {
        self.active = self.active.toggled();
        self.active
    }
}

/// Load status of one environment slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SlotStatus {
    #[default]
    Pending,
    Ready,
    Failed(String),
}

/// A cubemap set identified by its directory, plus its load status.
#[derive(Clone, Debug)]
pub struct EnvironmentSet {
    pub dir: String,
    pub status: SlotStatus,
}

impl EnvironmentSet {
    pub fn new(dir: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            status: SlotStatus::Pending,
        }
    }
}

/// Where the ring and decoy sphere sit while a given environment is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeleportPlacement {
    pub ring: Vec3,
    pub sphere: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeleportLayout {
    pub a: TeleportPlacement,
    pub b: TeleportPlacement,
}

impl Default for TeleportLayout {
    fn default() -> Self {
        Self {
            a: TeleportPlacement {
                ring: RING_POSITION_A,
                sphere: SPHERE_POSITION_A,
            },
            b: TeleportPlacement {
                ring: RING_POSITION_B,
                sphere: SPHERE_POSITION_B,
            },
        }
    }
}

impl TeleportLayout {
    pub fn placement(&self, variant: EnvVariant) -> TeleportPlacement {
        match variant {
            EnvVariant::A => self.a,
            EnvVariant::B => self.b,
        }
    }
}
