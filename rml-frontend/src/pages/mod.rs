mod home;
mod loos;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Home,
    Loos,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Loos => "/loos",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Map",
            Self::Loos => "Nearby",
        }
    }
}

pub use self::{home::*, loos::*};
