//! Footballer roles as interchangeable strategies.
//!
//! A `Footballer` holds its role as a trait object chosen when the player is
//! built, so adding a role is a new `FootballerRole` impl and nothing else.

use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SquadError {
    #[error("Unsupported footballer role: {0}")]
    UnsupportedRole(String),
}

pub trait FootballerRole: Send + Sync {
    fn role(&self) -> &str;

    fn describe(&self, name: &str, age: u32) -> String {
        format!("The footballer, {} {} is a {}", name, age, self.role())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Goalkeeper;

impl FootballerRole for Goalkeeper {
    fn role(&self) -> &str {
        "goalkeeper"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Defender;

impl FootballerRole for Defender {
    fn role(&self) -> &str {
        "defender"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Midfielder;

impl FootballerRole for Midfielder {
    fn role(&self) -> &str {
        "midfielder"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Forward;

impl FootballerRole for Forward {
    fn role(&self) -> &str {
        "forward"
    }

    fn describe(&self, name: &str, age: u32) -> String {
        format!(
            "The footballer, {} {} plays in the forward line",
            name, age
        )
    }
}

/// Role tags accepted from text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RoleKind {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl RoleKind {
    pub fn parse(tag: &str) -> Result<Self, SquadError> {
        RoleKind::from_str(tag).map_err(|_| SquadError::UnsupportedRole(tag.to_string()))
    }

    pub fn into_role(self) -> Box<dyn FootballerRole> {
        match self {
            RoleKind::Goalkeeper => Box::new(Goalkeeper),
            RoleKind::Defender => Box::new(Defender),
            RoleKind::Midfielder => Box::new(Midfielder),
            RoleKind::Forward => Box::new(Forward),
        }
    }
}

pub struct Footballer {
    name: String,
    age: u32,
    role: Box<dyn FootballerRole>,
}

impl Footballer {
    pub fn new(name: &str, age: u32, role: Box<dyn FootballerRole>) -> Self {
        Self {
            name: name.to_string(),
            age,
            role,
        }
    }

    pub fn from_tag(name: &str, age: u32, tag: &str) -> Result<Self, SquadError> {
        Ok(Self::new(name, age, RoleKind::parse(tag)?.into_role()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn role(&self) -> &str {
        self.role.role()
    }

    pub fn describe(&self) -> String {
        self.role.describe(&self.name, self.age)
    }
}

impl fmt::Debug for Footballer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Footballer")
            .field("name", &self.name)
            .field("age", &self.age)
            .field("role", &self.role.role())
            .finish()
    }
}
