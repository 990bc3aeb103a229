use std::fmt;

/// Startup configuration problems.  Raised by `Settings::validate` before the
/// first tick; nothing inside the simulation step returns an error.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NonPositiveScreen { width: i32, height: i32 },
    NonPositiveSprite { name: &'static str, width: i32, height: i32 },
    TooLarge { name: &'static str, width: i32, height: i32, max: i32 },
    NonPositiveSpeed { name: &'static str, value: f32 },
    NonPositiveScale { name: &'static str, value: f32 },
    NoBulletsAllowed,
    NoLives,
    EmptyFleet { rows: i32, columns: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScreen { width, height } => {
                write!(f, "screen must be positive, got {width}x{height}")
            }
            Self::NonPositiveSprite { name, width, height } => {
                write!(f, "{name} sprite must be positive, got {width}x{height}")
            }
            Self::TooLarge { name, width, height, max } => {
                write!(f, "{name} is {width}x{height}, at most {max} per side")
            }
            Self::NonPositiveSpeed { name, value } => {
                write!(f, "{name} must be > 0, got {value}")
            }
            Self::NonPositiveScale { name, value } => {
                write!(f, "{name} must be > 0, got {value}")
            }
            Self::NoBulletsAllowed => write!(f, "bullets_allowed must be at least 1"),
            Self::NoLives => write!(f, "ship_limit must be at least 1"),
            Self::EmptyFleet { rows, columns } => write!(
                f,
                "screen too small for a fleet: {rows} rows x {columns} columns"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
