use crate::color::Color;
use crate::shade::ShadeRamp;

/// A saved primary/secondary pair together with its shade colors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    pub name: String,
    pub primary: Color,
    pub secondary: Color,
    /// Primary ramp overlaid by the secondary ramp. Both use the same keys, so
    /// every entry ends up holding the secondary shade.
    pub colors: ShadeRamp,
}

impl Palette {
    pub fn new(name: impl Into<String>, primary: Color, secondary: Color) -> Self {
        let colors = ShadeRamp::from_color(primary).merged(&ShadeRamp::from_color(secondary));
        Self { name: name.into(), primary, secondary, colors }
    }
}

/// Ordered list of saved palettes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PaletteBook {
    palettes: Vec<Palette>,
}

impl PaletteBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a palette. A blank `name` is skipped and yields `None`.
    ///
    /// The name is stored as given; only the blank check trims it.
    pub fn save(&mut self, name: &str, primary: Color, secondary: Color) -> Option<&Palette> {
        if name.trim().is_empty() {
            log::debug!("palette save skipped: blank name");
            return None;
        }
        self.palettes.push(Palette::new(name, primary, secondary));
        log::debug!(
            "saved palette {:?} ({} / {}), {} total",
            name,
            primary,
            secondary,
            self.palettes.len()
        );
        self.palettes.last()
    }

    /// Removes by position. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<Palette> {
        if index >= self.palettes.len() {
            return None;
        }
        let removed = self.palettes.remove(index);
        log::debug!("removed palette {:?} at {}", removed.name, index);
        Some(removed)
    }

    pub fn get(&self, index: usize) -> Option<&Palette> {
        self.palettes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Palette> {
        self.palettes.iter()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}
