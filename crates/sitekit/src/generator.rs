use sitekit_palette::{Color, ColorError, HarmonyMode, Palette, PaletteBook, ShadeRamp};

/// Initial primary color.
pub const DEFAULT_PRIMARY: Color = Color::rgb(0x3b, 0x82, 0xf6);

/// State behind the palette generator panel.
///
/// The secondary color is re-derived whenever the primary or the harmony mode
/// changes. Loading a saved palette restores both colors verbatim.
#[derive(Debug, Clone)]
pub struct PaletteGenerator {
    primary: Color,
    mode: HarmonyMode,
    secondary: Color,
    palette_name: String,
    book: PaletteBook,
}

impl Default for PaletteGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY, HarmonyMode::default())
    }
}

impl PaletteGenerator {
    pub fn new(primary: Color, mode: HarmonyMode) -> Self {
        Self {
            primary,
            mode,
            secondary: primary.secondary(mode),
            palette_name: String::new(),
            book: PaletteBook::new(),
        }
    }

    pub fn primary(&self) -> Color {
        self.primary
    }

    pub fn secondary(&self) -> Color {
        self.secondary
    }

    pub fn mode(&self) -> HarmonyMode {
        self.mode
    }

    pub fn palette_name(&self) -> &str {
        &self.palette_name
    }

    pub fn book(&self) -> &PaletteBook {
        &self.book
    }

    /// Parses and applies a new primary. On error the state is unchanged.
    pub fn set_primary(&mut self, hex: &str) -> Result<(), ColorError> {
        self.primary = Color::from_hex(hex)?;
        self.secondary = self.primary.secondary(self.mode);
        Ok(())
    }

    pub fn set_mode(&mut self, mode: HarmonyMode) {
        self.mode = mode;
        self.secondary = self.primary.secondary(mode);
    }

    pub fn primary_shades(&self) -> ShadeRamp {
        ShadeRamp::from_color(self.primary)
    }

    pub fn secondary_shades(&self) -> ShadeRamp {
        ShadeRamp::from_color(self.secondary)
    }

    pub fn set_palette_name(&mut self, name: impl Into<String>) {
        self.palette_name = name.into();
    }

    /// Saves the current pair under the pending name and clears the name.
    /// Does nothing while the name is blank.
    pub fn save_palette(&mut self) -> Option<&Palette> {
        if self.palette_name.trim().is_empty() {
            return None;
        }
        let name = std::mem::take(&mut self.palette_name);
        self.book.save(&name, self.primary, self.secondary)
    }

    /// Restores a saved pair. Returns `false` if `index` is out of range.
    pub fn load_palette(&mut self, index: usize) -> bool {
        match self.book.get(index) {
            Some(palette) => {
                self.primary = palette.primary;
                self.secondary = palette.secondary;
                true
            }
            None => false,
        }
    }

    pub fn remove_palette(&mut self, index: usize) -> Option<Palette> {
        self.book.remove(index)
    }
}
