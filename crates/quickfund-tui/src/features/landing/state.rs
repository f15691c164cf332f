use quickfund_core::content::FEATURES;
use quickfund_core::i18n::{Language, translate};

/// Landing page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Features,
    HowItWorks,
    Benefits,
    Contact,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::About,
            Section::Features,
            Section::HowItWorks,
            Section::Benefits,
            Section::Contact,
        ]
    }

    pub fn index(self) -> usize {
        Section::all().iter().position(|s| *s == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        let all = Section::all();
        all[(self.index() + 1) % all.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let all = Section::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    /// Section for a `1`-based number key.
    pub fn from_number(n: u32) -> Option<Self> {
        let index = usize::try_from(n.checked_sub(1)?).ok()?;
        Section::all().get(index).copied()
    }

    /// Tab label. Sections without a translation key stay in English.
    pub fn label(self, language: Language) -> &'static str {
        match self {
            Section::Home => translate(language, "nav.home"),
            Section::About => translate(language, "nav.about"),
            Section::Features => translate(language, "nav.features"),
            Section::HowItWorks => "How It Works",
            Section::Benefits => "Benefits",
            Section::Contact => translate(language, "nav.contact"),
        }
    }
}

#[derive(Debug, Default)]
pub struct LandingState {
    pub section: Section,
    /// Highlighted card in the Features section.
    pub feature: usize,
    /// Vertical scroll of the current section body.
    pub scroll: u16,
}

impl LandingState {
    pub fn go_to(&mut self, section: Section) {
        if self.section != section {
            self.section = section;
            self.scroll = 0;
        }
    }

    pub fn next_feature(&mut self) {
        self.feature = (self.feature + 1) % FEATURES.len();
    }

    pub fn prev_feature(&mut self) {
        self.feature = (self.feature + FEATURES.len() - 1) % FEATURES.len();
    }

    /// Scrolls by `delta` lines, staying within `0..=max`.
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        let next = i32::from(self.scroll) + delta;
        self.scroll = u16::try_from(next.clamp(0, i32::from(max))).unwrap_or(0);
    }
}
