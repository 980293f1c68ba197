use super::constants::{
    NEON_WHITE_INTENSITY, PROJECT_CARD_COUNT, SIGN_INTENSITY_HOVER, SIGN_INTENSITY_IDLE,
};
use super::focus::FocusTarget;
use fnv::FnvHashMap;

pub const EMAIL_LINK: &str = "mailto:vivitruong1506@gmail.com";
pub const LINKEDIN_LINK: &str = "https://www.linkedin.com/in/vi-truong-421698253";
pub const GITHUB_LINK: &str = "https://github.com/vivitruong";
pub const PROJECT_LINKS: [&str; PROJECT_CARD_COUNT] = [
    "https://vivi-portfolio.vercel.app/",
    "https://tradix.onrender.com/",
    "https://vivi-projects.onrender.com/",
    "https://gegrooves.onrender.com",
];

const CARD_NAMES: [&str; PROJECT_CARD_COUNT] = ["project1", "project2", "project3", "project4"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown scene object `{0}`")]
    UnknownObject(String),
    #[error("project card index {0} out of range")]
    CardOutOfRange(usize),
}

/// The five neon signs on the RV.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Projects,
    About,
    Email,
    Linkedin,
    Github,
}

impl Sign {
    pub const ALL: [Sign; 5] = [
        Sign::Projects,
        Sign::About,
        Sign::Email,
        Sign::Linkedin,
        Sign::Github,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Project card slot on the projects monitor, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardIndex(u8);

impl CardIndex {
    pub fn new(i: usize) -> Result<Self, SceneError> {
        if i < PROJECT_CARD_COUNT {
            Ok(Self(i as u8))
        } else {
            Err(SceneError::CardOutOfRange(i))
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

/// Every scene object that reacts to pointer events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneObject {
    Sign(Sign),
    ProjectCard(CardIndex),
    GoBack(FocusTarget),
}

/// What a click on an object asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectAction {
    Focus(FocusTarget),
    OpenLink { url: &'static str, new_tab: bool },
    GoBack,
}

impl SceneObject {
    pub fn name(self) -> &'static str {
        match self {
            SceneObject::Sign(Sign::Projects) => "projectsSign",
            SceneObject::Sign(Sign::About) => "aboutSign",
            SceneObject::Sign(Sign::Email) => "emailSign",
            SceneObject::Sign(Sign::Linkedin) => "linkedinSign",
            SceneObject::Sign(Sign::Github) => "githubSign",
            SceneObject::ProjectCard(c) => CARD_NAMES[c.get()],
            SceneObject::GoBack(FocusTarget::About) => "aboutGoBack",
            SceneObject::GoBack(FocusTarget::Project) => "projectGoBack",
        }
    }

    pub fn action(self) -> ObjectAction {
        match self {
            SceneObject::Sign(Sign::Projects) => ObjectAction::Focus(FocusTarget::Project),
            SceneObject::Sign(Sign::About) => ObjectAction::Focus(FocusTarget::About),
            SceneObject::Sign(Sign::Email) => ObjectAction::OpenLink {
                url: EMAIL_LINK,
                new_tab: false,
            },
            SceneObject::Sign(Sign::Linkedin) => ObjectAction::OpenLink {
                url: LINKEDIN_LINK,
                new_tab: true,
            },
            SceneObject::Sign(Sign::Github) => ObjectAction::OpenLink {
                url: GITHUB_LINK,
                new_tab: true,
            },
            SceneObject::ProjectCard(c) => ObjectAction::OpenLink {
                url: PROJECT_LINKS[c.get()],
                new_tab: true,
            },
            SceneObject::GoBack(_) => ObjectAction::GoBack,
        }
    }

    /// Every interactive object, in registry order.
    pub fn all() -> impl Iterator<Item = SceneObject> {
        let signs = Sign::ALL.into_iter().map(SceneObject::Sign);
        let cards = (0..PROJECT_CARD_COUNT)
            .filter_map(|i| CardIndex::new(i).ok())
            .map(SceneObject::ProjectCard);
        let backs = [FocusTarget::About, FocusTarget::Project]
            .into_iter()
            .map(SceneObject::GoBack);
        signs.chain(cards).chain(backs)
    }
}

/// Name → object lookup for pointer events tagged with mesh names.
#[derive(Clone, Debug)]
pub struct ObjectRegistry {
    by_name: FnvHashMap<&'static str, SceneObject>,
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        let by_name = SceneObject::all().map(|o| (o.name(), o)).collect();
        Self { by_name }
    }
}

impl ObjectRegistry {
    pub fn lookup(&self, name: &str) -> Result<SceneObject, SceneError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| SceneError::UnknownObject(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Auto,
    Pointer,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Auto => "auto",
            Cursor::Pointer => "pointer",
        }
    }
}

/// Pointer-over flags for every interactive object.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
    signs: [bool; 5],
    cards: [bool; PROJECT_CARD_COUNT],
    go_back: [bool; 2],
}

impl HoverState {
    pub fn set(&mut self, object: SceneObject, hovered: bool) {
        match object {
            SceneObject::Sign(s) => self.signs[s.index()] = hovered,
            SceneObject::ProjectCard(c) => self.cards[c.get()] = hovered,
            SceneObject::GoBack(FocusTarget::About) => self.go_back[0] = hovered,
            SceneObject::GoBack(FocusTarget::Project) => self.go_back[1] = hovered,
        }
    }

    pub fn is_hovered(&self, object: SceneObject) -> bool {
        match object {
            SceneObject::Sign(s) => self.signs[s.index()],
            SceneObject::ProjectCard(c) => self.cards[c.get()],
            SceneObject::GoBack(FocusTarget::About) => self.go_back[0],
            SceneObject::GoBack(FocusTarget::Project) => self.go_back[1],
        }
    }

    pub fn card_hovered(&self, card: usize) -> bool {
        self.cards.get(card).copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.signs.iter().chain(&self.cards).chain(&self.go_back).any(|h| *h)
    }

    /// Emissive scale for a sign: a hard switch, never blended.
    pub fn intensity(&self, sign: Sign) -> f32 {
        if self.signs[sign.index()] {
            SIGN_INTENSITY_HOVER
        } else {
            SIGN_INTENSITY_IDLE
        }
    }

    /// Neon color for a sign; hovering dims green and blue toward red.
    pub fn sign_color(&self, sign: Sign) -> [f32; 3] {
        let k = self.intensity(sign);
        [
            NEON_WHITE_INTENSITY,
            NEON_WHITE_INTENSITY * k,
            NEON_WHITE_INTENSITY * k,
        ]
    }
}
