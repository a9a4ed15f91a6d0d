// SDL2 subsystem flags library
// Type-safe wrapper around the SDL_INIT_* initialization constants

pub mod parse;
pub mod subsystems;

pub use parse::ParseSubsystemsError;
pub use subsystems::Subsystems;
