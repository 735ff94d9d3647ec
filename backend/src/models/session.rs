//! Detail-panel selection shared across the three category tabs.
//!
//! Only one category's detail panel can be expanded at a time. Activating a
//! panel from any tab closes the other two.

use serde::{Deserialize, Serialize};

use super::video::Category;

/// Which detail panel is expanded, if any.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivePanel {
    #[default]
    Idle,
    GamingDetail,
    MoviesDetail,
    MusicDetail,
}

impl ActivePanel {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Gaming => ActivePanel::GamingDetail,
            Category::Movies => ActivePanel::MoviesDetail,
            Category::Music => ActivePanel::MusicDetail,
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            ActivePanel::Idle => None,
            ActivePanel::GamingDetail => Some(Category::Gaming),
            ActivePanel::MoviesDetail => Some(Category::Movies),
            ActivePanel::MusicDetail => Some(Category::Music),
        }
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.category() == Some(category)
    }

    pub fn flags(&self) -> PanelFlags {
        PanelFlags {
            gaming: self.is_active(Category::Gaming),
            movies: self.is_active(Category::Movies),
            music: self.is_active(Category::Music),
        }
    }
}

/// Boolean view of [`ActivePanel`], one flag per category. At most one is set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelFlags {
    pub gaming: bool,
    pub movies: bool,
    pub music: bool,
}

/// Per-session state handed to each render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionContext {
    active_panel: ActivePanel,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_panel(&self) -> ActivePanel {
        self.active_panel
    }

    /// Expand the detail panel of `category`, collapsing any other.
    pub fn activate(&mut self, category: Category) -> ActivePanel {
        self.active_panel = ActivePanel::for_category(category);
        self.active_panel
    }

    /// Collapse every detail panel.
    pub fn reset(&mut self) {
        self.active_panel = ActivePanel::Idle;
    }
}
