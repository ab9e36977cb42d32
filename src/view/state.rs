use std::path::Path;

use anyhow::Context as _;

use crate::{
    catalog::model::Catalog,
    catalog::tier::Tier,
    foundation::core::AtomId,
    foundation::error::{JungleError, JungleResult},
    layout::grid::LayoutConfig,
    view::input::{InputEvent, ViewportController},
    view::scene::Scene,
    view::viewport::ViewportConfig,
};

/// Tunables for the whole view; every field has a default.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct JungleConfig {
    pub layout: LayoutConfig,
    pub viewport: ViewportConfig,
}

impl JungleConfig {
    pub fn from_path(path: &Path) -> JungleResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        serde_json::from_str(&text)
            .map_err(|e| JungleError::serde(format!("parse config '{}': {e}", path.display())))
    }
}

/// User intents that change view state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Toggle the tier filter: selecting the active tier shows everything again.
    SelectTier(Tier),
    ShowAll,
    /// Toggle selection of an atom in the current view.
    ClickAtom(AtomId),
    CloseDetail,
    ToggleSidebar,
    Input(InputEvent),
}

/// Explicit state of one view session.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewState {
    pub active_tier: Option<Tier>,
    pub selected: Option<AtomId>,
    pub viewport: ViewportController,
    pub sidebar_collapsed: bool,
}

impl ViewState {
    pub fn new(config: &JungleConfig) -> Self {
        Self {
            viewport: ViewportController::new(config.viewport),
            ..Self::default()
        }
    }

    pub fn scene(&self, catalog: &Catalog, cfg: &LayoutConfig) -> Scene {
        Scene::build(catalog, self.active_tier, self.selected, cfg)
    }
}

/// Apply one action and return the next state.
///
/// Changing the tier filter always clears the selection. Clicks on atoms outside the current
/// filtered view are ignored.
pub fn update(mut state: ViewState, catalog: &Catalog, action: Action) -> ViewState {
    match action {
        Action::SelectTier(tier) => {
            state.active_tier = if state.active_tier == Some(tier) {
                None
            } else {
                Some(tier)
            };
            state.selected = None;
        }
        Action::ShowAll => {
            state.active_tier = None;
            state.selected = None;
        }
        Action::ClickAtom(id) => {
            let visible = catalog
                .get(id)
                .is_some_and(|a| state.active_tier.is_none_or(|t| a.tier == t));
            if !visible {
                tracing::debug!(%id, "ignoring click on atom outside the current view");
                return state;
            }
            state.selected = if state.selected == Some(id) {
                None
            } else {
                Some(id)
            };
        }
        Action::CloseDetail => state.selected = None,
        Action::ToggleSidebar => state.sidebar_collapsed = !state.sidebar_collapsed,
        Action::Input(event) => state.viewport.handle(event),
    }
    state
}

/// Fold a sequence of actions over an initial state.
pub fn replay<I>(state: ViewState, catalog: &Catalog, actions: I) -> ViewState
where
    I: IntoIterator<Item = Action>,
{
    actions
        .into_iter()
        .fold(state, |s, action| update(s, catalog, action))
}

#[cfg(test)]
#[path = "../../tests/unit/view/state.rs"]
mod tests;
