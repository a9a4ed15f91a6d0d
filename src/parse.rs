// Subsystem name parsing for config files and command lines

use std::str::FromStr;

use thiserror::Error;

use crate::subsystems::Subsystems;

/// Error type for parsing subsystem names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSubsystemsError {
    /// The name does not match any subsystem flag
    #[error("unknown subsystem name: {0:?}")]
    UnknownName(String),
    /// The input contained no names at all
    #[error("empty subsystem list")]
    Empty,
}

fn parse_one(name: &str) -> Result<Subsystems, ParseSubsystemsError> {
    let flag = match name.to_ascii_lowercase().as_str() {
        "none" => Subsystems::NONE,
        "timer" => Subsystems::TIMER,
        "audio" => Subsystems::AUDIO,
        "video" => Subsystems::VIDEO,
        "joystick" => Subsystems::JOYSTICK,
        "haptic" => Subsystems::HAPTIC,
        "game_controller" => Subsystems::GAME_CONTROLLER,
        "events" => Subsystems::EVENTS,
        #[cfg(feature = "sensor")]
        "sensor" => Subsystems::SENSOR,
        #[allow(deprecated)]
        "no_parachute" => Subsystems::NO_PARACHUTE,
        "everything" => Subsystems::EVERYTHING,
        _ => return Err(ParseSubsystemsError::UnknownName(name.to_string())),
    };
    Ok(flag)
}

impl FromStr for Subsystems {
    type Err = ParseSubsystemsError;

    /// Parse a `'+'`-separated list of lowercase subsystem names, e.g.
    /// `"video+audio+game_controller"`. Whitespace around names is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseSubsystemsError::Empty);
        }

        let mut set = Subsystems::NONE;
        for name in s.split('+') {
            set |= parse_one(name.trim())?;
        }
        Ok(set)
    }
}
