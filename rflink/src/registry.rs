//! Towers, links and the link selection state machine.
//!
//! [`LinkRegistry`] is the single owner of everything a planner UI
//! edits. The UI holds it (or a reference to it) and mutates it only
//! through the methods here.

use crate::{
    ellipse::{project_to_screen, EllipseConfig, ScreenEllipse},
    link::{compute_link_geometry, FresnelGeometry},
    math::distance_m,
    viewport::Viewport,
    GeoPoint, LinkRejection, RfLinkError,
};
use log::debug;
use std::fmt;

/// Two frequencies closer than this (GHz) are the same channel.
pub const FREQ_TOLERANCE_GHZ: f64 = 1e-6;

/// Frequency given to towers placed by clicking the map.
pub const DEFAULT_FREQ_GHZ: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TowerId(u64);

impl fmt::Display for TowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tower-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkId(u64);

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "link-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tower {
    pub id: TowerId,
    pub position: GeoPoint,
    pub freq_ghz: f64,
    pub name: String,
}

/// A link between two towers.
///
/// `freq_ghz` is copied from the first tower when the link is made and
/// does not follow later edits to either tower.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub id: LinkId,
    pub tower_a: TowerId,
    pub tower_b: TowerId,
    pub freq_ghz: f64,
}

impl Link {
    pub fn references(&self, tower: TowerId) -> bool {
        self.tower_a == tower || self.tower_b == tower
    }
}

/// Partial tower edit; `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TowerPatch {
    pub freq_ghz: Option<f64>,
    pub name: Option<String>,
}

impl TowerPatch {
    pub fn freq(freq_ghz: f64) -> Self {
        Self {
            freq_ghz: Some(freq_ghz),
            ..Self::default()
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Where the two-click linking gesture is at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkSelection {
    #[default]
    Idle,
    Pending(TowerId),
}

/// Result of clicking a tower, see [`LinkRegistry::select_tower`].
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOutcome {
    /// The tower is now the pending end of a new link.
    Started(TowerId),
    Linked(LinkId),
    Rejected(LinkRejection),
}

/// A link flattened for list display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkSummary {
    pub id: LinkId,
    pub tower_a_name: Option<String>,
    pub tower_b_name: Option<String>,
    pub freq_ghz: f64,
    /// `None` when an endpoint no longer exists.
    pub length_m: Option<f64>,
}

impl fmt::Display for LinkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.tower_a_name.as_deref().unwrap_or("?");
        let b = self.tower_b_name.as_deref().unwrap_or("?");
        write!(f, "{a} ↔ {b} · {} GHz · ", self.freq_ghz)?;
        match self.length_m {
            Some(meters) => write!(f, "{:.2} km", meters / 1e3),
            None => write!(f, "—"),
        }
    }
}

/// Parses a user-entered frequency, in GHz.
///
/// Input fields are permissive: the longest leading number is used
/// (`"5.8GHz"` is `5.8`), and anything without a finite, non-negative
/// leading number becomes `0.0` instead of an error.
pub fn parse_frequency(input: &str) -> f64 {
    let input = input.trim_start();
    let leading = (1..=input.len())
        .rev()
        .filter(|&end| input.is_char_boundary(end))
        .find_map(|end| input[..end].parse::<f64>().ok());
    match leading {
        Some(freq) if freq.is_finite() && freq >= 0.0 => freq,
        _ => 0.0,
    }
}

/// Owned planner state: towers, links, the pending link selection and
/// the link whose fresnel zone is being shown.
#[derive(Debug, Clone, Default)]
pub struct LinkRegistry {
    towers: Vec<Tower>,
    links: Vec<Link>,
    selection: LinkSelection,
    active_link: Option<LinkId>,
    next_tower: u64,
    next_link: u64,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a registry holding the planner's initial tower.
    pub fn with_seed_tower() -> Self {
        let mut registry = Self::new();
        registry.add_tower(
            GeoPoint::new(28.6139, 77.2090),
            DEFAULT_FREQ_GHZ,
            "Tower A (Delhi)",
        );
        registry
    }

    pub fn towers(&self) -> &[Tower] {
        &self.towers
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn tower(&self, id: TowerId) -> Option<&Tower> {
        self.towers.iter().find(|tower| tower.id == id)
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.iter().find(|link| link.id == id)
    }

    pub fn selection(&self) -> LinkSelection {
        self.selection
    }

    pub fn active_link(&self) -> Option<LinkId> {
        self.active_link
    }

    pub fn add_tower(&mut self, position: GeoPoint, freq_ghz: f64, name: impl Into<String>) -> TowerId {
        let id = TowerId(self.next_tower);
        self.next_tower += 1;
        let name = name.into();
        debug!("add {id} '{name}' at {position:?}, {freq_ghz} GHz");
        self.towers.push(Tower {
            id,
            position,
            freq_ghz,
            name,
        });
        id
    }

    /// Adds a tower with default frequency and a numbered name, as
    /// clicking an empty spot on the map does.
    pub fn place_tower(&mut self, position: GeoPoint) -> TowerId {
        let name = format!("Tower {}", self.towers.len() + 1);
        self.add_tower(position, DEFAULT_FREQ_GHZ, name)
    }

    /// Merges `patch` into tower `id`. Unknown ids are ignored.
    pub fn update_tower(&mut self, id: TowerId, patch: TowerPatch) {
        let Some(tower) = self.towers.iter_mut().find(|tower| tower.id == id) else {
            debug!("update of unknown {id} ignored");
            return;
        };
        if let Some(freq_ghz) = patch.freq_ghz {
            tower.freq_ghz = freq_ghz;
        }
        if let Some(name) = patch.name {
            tower.name = name;
        }
    }

    /// Removes tower `id` along with every link touching it.
    pub fn remove_tower(&mut self, id: TowerId) {
        let before = (self.towers.len(), self.links.len());
        self.towers.retain(|tower| tower.id != id);
        self.links.retain(|link| !link.references(id));
        if let Some(active) = self.active_link {
            if self.link(active).is_none() {
                self.active_link = None;
            }
        }
        self.selection = LinkSelection::Idle;
        debug!(
            "remove {id}; towers: {}, links removed: {}",
            before.0 - self.towers.len(),
            before.1 - self.links.len()
        );
    }

    /// Makes `tower` the pending end of a new link, replacing any prior
    /// selection. Unknown ids are ignored.
    pub fn begin_link(&mut self, tower: TowerId) {
        if self.tower(tower).is_some() {
            self.selection = LinkSelection::Pending(tower);
        } else {
            debug!("begin_link with unknown {tower} ignored");
        }
    }

    /// Attempts to link the pending tower to `tower`.
    ///
    /// Whatever the outcome, the selection is back to
    /// [`LinkSelection::Idle`] afterwards.
    pub fn complete_link(&mut self, tower: TowerId) -> Result<LinkId, LinkRejection> {
        let selection = std::mem::take(&mut self.selection);
        let result = self.try_link(selection, tower);
        if let Err(rejection) = &result {
            debug!("link to {tower} rejected: {rejection}");
        }
        result
    }

    fn try_link(&mut self, selection: LinkSelection, tower: TowerId) -> Result<LinkId, LinkRejection> {
        let LinkSelection::Pending(pending) = selection else {
            return Err(LinkRejection::NoPendingSelection);
        };
        if pending == tower {
            return Err(LinkRejection::SelfLink(tower));
        }
        let a = self.tower(pending).ok_or(LinkRejection::NotFound(pending))?;
        let b = self.tower(tower).ok_or(LinkRejection::NotFound(tower))?;
        if (a.freq_ghz - b.freq_ghz).abs() > FREQ_TOLERANCE_GHZ {
            return Err(LinkRejection::FrequencyMismatch {
                a: a.freq_ghz,
                b: b.freq_ghz,
            });
        }
        let link = Link {
            id: LinkId(self.next_link),
            tower_a: a.id,
            tower_b: b.id,
            freq_ghz: a.freq_ghz,
        };
        self.next_link += 1;
        debug!("add {} between {} and {}", link.id, link.tower_a, link.tower_b);
        self.links.push(link);
        Ok(link.id)
    }

    /// Handles a click on `tower`: starts a link when idle, otherwise
    /// tries to finish one.
    pub fn select_tower(&mut self, tower: TowerId) -> SelectOutcome {
        match self.selection {
            LinkSelection::Idle if self.tower(tower).is_none() => {
                SelectOutcome::Rejected(LinkRejection::NotFound(tower))
            }
            LinkSelection::Idle => {
                self.selection = LinkSelection::Pending(tower);
                SelectOutcome::Started(tower)
            }
            LinkSelection::Pending(_) => match self.complete_link(tower) {
                Ok(link) => SelectOutcome::Linked(link),
                Err(rejection) => SelectOutcome::Rejected(rejection),
            },
        }
    }

    pub fn cancel_link(&mut self) {
        self.selection = LinkSelection::Idle;
    }

    pub fn remove_link(&mut self, id: LinkId) {
        self.links.retain(|link| link.id != id);
        if self.active_link == Some(id) {
            self.active_link = None;
        }
    }

    /// Sets which link's fresnel zone is shown. Unknown ids clear it.
    pub fn set_active_link(&mut self, id: Option<LinkId>) {
        self.active_link = id.filter(|&id| self.link(id).is_some());
    }

    /// Shows link `id`, or hides it if it is already shown.
    pub fn toggle_active_link(&mut self, id: LinkId) {
        if self.active_link == Some(id) {
            self.active_link = None;
        } else {
            self.set_active_link(Some(id));
        }
    }

    /// Removes all towers and links. Ids are not reused.
    pub fn clear(&mut self) {
        self.towers.clear();
        self.links.clear();
        self.selection = LinkSelection::Idle;
        self.active_link = None;
    }

    fn endpoints(&self, link: &Link) -> Option<(&Tower, &Tower)> {
        Some((self.tower(link.tower_a)?, self.tower(link.tower_b)?))
    }

    /// Fresnel geometry of link `id` from its towers' current
    /// positions, or `None` if the link or either tower is gone.
    pub fn link_geometry(&self, id: LinkId) -> Option<Result<FresnelGeometry, RfLinkError>> {
        let link = self.link(id)?;
        let (a, b) = self.endpoints(link)?;
        Some(compute_link_geometry(a.position, b.position, link.freq_ghz))
    }

    /// Screen ellipse for the active link under `viewport`.
    pub fn active_ellipse<V>(
        &self,
        viewport: &V,
        config: &EllipseConfig,
    ) -> Option<Result<ScreenEllipse, RfLinkError>>
    where
        V: Viewport + ?Sized,
    {
        let link = self.link(self.active_link?)?;
        let (a, b) = self.endpoints(link)?;
        Some(
            compute_link_geometry(a.position, b.position, link.freq_ghz).map(|geometry| {
                project_to_screen(&geometry, a.position, b.position, viewport, config)
            }),
        )
    }

    pub fn link_summaries(&self) -> Vec<LinkSummary> {
        self.links
            .iter()
            .map(|link| {
                let a = self.tower(link.tower_a);
                let b = self.tower(link.tower_b);
                LinkSummary {
                    id: link.id,
                    tower_a_name: a.map(|tower| tower.name.clone()),
                    tower_b_name: b.map(|tower| tower.name.clone()),
                    freq_ghz: link.freq_ghz,
                    length_m: a.zip(b).map(|(a, b)| distance_m(a.position, b.position)),
                }
            })
            .collect()
    }
}
