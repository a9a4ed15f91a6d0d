// SDL2 subsystem-initialization flags
// Values mirror the SDL_INIT_* constants and must match the SDL ABI exactly

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// Set of SDL2 subsystems, as passed to `SDL_Init` / `SDL_InitSubSystem`.
///
/// Wraps the raw `Uint32` flag word in a dedicated type so subsystem sets
/// cannot be mixed up with unrelated integer flags. Values combine with the
/// usual bitwise operators and stay in this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Subsystems(u32);

impl Subsystems {
    /// No subsystems; the zero value and the identity for `|` and `^`.
    pub const NONE: Subsystems = Subsystems(0x0000_0000);
    /// Timer subsystem (`SDL_INIT_TIMER`).
    pub const TIMER: Subsystems = Subsystems(0x0000_0001);
    /// Audio subsystem (`SDL_INIT_AUDIO`).
    pub const AUDIO: Subsystems = Subsystems(0x0000_0010);
    /// Video subsystem (`SDL_INIT_VIDEO`); implies events.
    pub const VIDEO: Subsystems = Subsystems(0x0000_0020);
    /// Joystick subsystem (`SDL_INIT_JOYSTICK`); implies events.
    pub const JOYSTICK: Subsystems = Subsystems(0x0000_0200);
    /// Haptic (force feedback) subsystem (`SDL_INIT_HAPTIC`).
    pub const HAPTIC: Subsystems = Subsystems(0x0000_1000);
    /// Game controller subsystem (`SDL_INIT_GAMECONTROLLER`); implies joystick.
    pub const GAME_CONTROLLER: Subsystems = Subsystems(0x0000_2000);
    /// Events subsystem (`SDL_INIT_EVENTS`).
    pub const EVENTS: Subsystems = Subsystems(0x0000_4000);

    /// Sensor subsystem (`SDL_INIT_SENSOR`), available since SDL 2.0.9.
    #[cfg(feature = "sensor")]
    pub const SENSOR: Subsystems = Subsystems(0x0000_8000);

    /// Crash-parachute opt-out (`SDL_INIT_NOPARACHUTE`).
    #[deprecated(note = "kept for compatibility; SDL 2.0.4 and later ignore this flag")]
    pub const NO_PARACHUTE: Subsystems = Subsystems(0x0010_0000);

    /// All meaningful subsystems (`SDL_INIT_EVERYTHING`). Does not include
    /// `NO_PARACHUTE`, so this is not an all-bits-set value.
    #[cfg(feature = "sensor")]
    pub const EVERYTHING: Subsystems = Subsystems(0x0000_f231);
    /// All meaningful subsystems (`SDL_INIT_EVERYTHING`). Does not include
    /// `NO_PARACHUTE`, so this is not an all-bits-set value.
    #[cfg(not(feature = "sensor"))]
    pub const EVERYTHING: Subsystems = Subsystems(0x0000_7231);

    /// Every bit with a defined meaning, including the deprecated one.
    #[allow(deprecated)]
    const KNOWN: Subsystems = Subsystems(Self::EVERYTHING.0 | Self::NO_PARACHUTE.0);

    /// Reconstruct a flag set from a raw `Uint32`, e.g. the return value of
    /// `SDL_WasInit`. Bits without a defined meaning are kept as-is.
    pub fn from_u32(bits: u32) -> Subsystems {
        Subsystems(bits)
    }

    /// The raw `Uint32` representation for the SDL interface.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    pub fn contains(self, other: Subsystems) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether `self` and `other` share any bit.
    pub fn intersects(self, other: Subsystems) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether no subsystem is selected.
    pub fn is_none(self) -> bool {
        self == Subsystems::NONE
    }

    /// Restrict to bits with a defined meaning. Complementing a flag set
    /// turns on undefined high bits; mask through here before rendering or
    /// handing the value to SDL.
    pub fn known(self) -> Subsystems {
        Subsystems(self.0 & Self::KNOWN.0)
    }

    /// Display names and flag values of the active subsystems, in the
    /// canonical rendering order. Undefined bits are skipped.
    pub fn iter_names(self) -> impl Iterator<Item = (&'static str, Subsystems)> {
        let mut active = Vec::new();
        let mut push = |name, flag| {
            if self.intersects(flag) {
                active.push((name, flag));
            }
        };

        push("Timer", Self::TIMER);
        push("Audio", Self::AUDIO);
        push("Video", Self::VIDEO);
        push("Joystick", Self::JOYSTICK);
        push("Haptic", Self::HAPTIC);
        push("Game Controller", Self::GAME_CONTROLLER);
        push("Events", Self::EVENTS);

        #[cfg(feature = "sensor")]
        push("Sensor", Self::SENSOR);

        #[cfg(feature = "legacy-no-parachute")]
        #[allow(deprecated)]
        push("No Parachute", Self::NO_PARACHUTE);

        active.into_iter()
    }
}

impl Not for Subsystems {
    type Output = Subsystems;

    /// Flips every bit of the representation, including undefined ones;
    /// see [`Subsystems::known`].
    fn not(self) -> Subsystems {
        Subsystems(!self.0)
    }
}

impl BitOr for Subsystems {
    type Output = Subsystems;

    fn bitor(self, rhs: Subsystems) -> Subsystems {
        Subsystems(self.0 | rhs.0)
    }
}

impl BitAnd for Subsystems {
    type Output = Subsystems;

    fn bitand(self, rhs: Subsystems) -> Subsystems {
        Subsystems(self.0 & rhs.0)
    }
}

impl BitXor for Subsystems {
    type Output = Subsystems;

    fn bitxor(self, rhs: Subsystems) -> Subsystems {
        Subsystems(self.0 ^ rhs.0)
    }
}

impl BitOrAssign for Subsystems {
    fn bitor_assign(&mut self, rhs: Subsystems) {
        *self = *self | rhs;
    }
}

impl BitAndAssign for Subsystems {
    fn bitand_assign(&mut self, rhs: Subsystems) {
        *self = *self & rhs;
    }
}

impl BitXorAssign for Subsystems {
    fn bitxor_assign(&mut self, rhs: Subsystems) {
        *self = *self ^ rhs;
    }
}

impl fmt::Display for Subsystems {
    /// Renders as `[<names>]`: `[None]` for the zero value, `[Everything]`
    /// for the full set, otherwise the active flag names in canonical order
    /// joined by `", "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;

        if *self == Subsystems::NONE {
            write!(f, "None")?;
        } else if *self == Subsystems::EVERYTHING {
            write!(f, "Everything")?;
        } else {
            for (i, (name, _)) in self.iter_names().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", name)?;
            }
        }

        write!(f, "]")
    }
}
