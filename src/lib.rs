//! Headless engine for the AI Atom Jungle diagram.
//!
//! A fixed catalog of "atoms" (conceptual ML-architecture building blocks) is laid out in four
//! tiered grids, connected by bond lines, and viewed through a pannable, zoomable viewport.
//!
//! # Pipeline overview
//!
//! 1. **Filter**: `Catalog + Option<Tier> -> Vec<&Atom>` (catalog order preserved)
//! 2. **Layout**: `atoms -> Layout` (per-tier grids stacked vertically, see [`layout_atoms`])
//! 3. **Bonds**: `atoms + Layout -> Vec<BondSegment>` (deduplicated by lower id, see [`resolve_bonds`])
//! 4. **View**: [`ViewState`] is updated by pure [`update`] calls; [`ViewState::scene`] derives a
//!    render-ready [`Scene`]
//! 5. **Snapshot** (optional): [`render_svg`] and [`rasterize_svg`] for headless output
//!
//! Layout, bond resolution and viewport updates are deterministic and infallible. Errors only
//! come from loading catalogs/config and from rasterization.
#![forbid(unsafe_code)]

mod catalog;
mod foundation;
mod layout;
mod render;
mod view;

pub use catalog::model::{Atom, BondType, Catalog, Molecule, Thermodynamics};
pub use catalog::tier::Tier;
pub use foundation::core::{Affine, AtomId, Hsl, Point, Vec2};
pub use foundation::error::{JungleError, JungleResult};
pub use layout::bonds::{BondSegment, NODE_CENTER, resolve_bonds};
pub use layout::grid::{Layout, LayoutConfig, TierBlock, layout_atoms};
pub use render::raster::{rasterize_svg, write_png};
pub use render::svg::{SvgOptions, render_svg};
pub use view::input::{DragState, InputEvent, Key, NavButton, ViewportController};
pub use view::scene::{DetailPanel, MAX_ORBIT_RINGS, Scene, SceneNode, TierLabel};
pub use view::state::{Action, JungleConfig, ViewState, replay, update};
pub use view::viewport::{Viewport, ViewportConfig};
