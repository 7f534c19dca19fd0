//! Grid cells and glyph canonicalization.

use std::collections::BTreeSet;

/// The glyph a wildcard cell displays.
pub const WILD_DISPLAY: char = '*';

/// Returns the canonical display glyph for `glyph`.
///
/// The glyph is uppercased, then Latin-1 accented letters fold to their base letter. Anything
/// else maps to itself uppercased.
pub fn canonicalize(glyph: char) -> char {
    // Multi-char uppercase expansions (e.g. 'ß' -> "SS") keep only their first char.
    let upper = glyph.to_uppercase().next().unwrap_or(glyph);

    match upper {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'Ç' => 'C',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'Ð' | 'Þ' => 'D',
        'Ñ' => 'N',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'Ý' => 'Y',
        'ß' => 'S',
        other => other,
    }
}

/// A grid position's content: one display glyph standing for one or more actual glyphs.
///
/// Several words may share a cell as long as their letters canonicalize to the same display,
/// so a cell remembers every actual letter written into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    /// A regular letter cell.
    Normal {
        /// The canonical glyph shared by every actual.
        display: char,
        /// The source letters this cell can represent.
        actuals: BTreeSet<char>,
    },

    /// A cell that matches any glyph, keeping the letters it replaced.
    Wild {
        /// The source letters of the cell this wildcard replaced.
        actuals: BTreeSet<char>,
    },
}

impl Cell {
    /// Creates a normal cell holding exactly `actual`.
    pub fn new(actual: char) -> Self {
        Cell::Normal {
            display: canonicalize(actual),
            actuals: BTreeSet::from([actual]),
        }
    }

    /// Turns `cell` into a wildcard carrying all of its actual glyphs.
    pub fn wild_from(cell: &Cell) -> Self {
        Cell::Wild {
            actuals: cell.actuals().clone(),
        }
    }

    /// The glyph presented to the player.
    pub fn display(&self) -> char {
        match self {
            Cell::Normal { display, .. } => *display,
            Cell::Wild { .. } => WILD_DISPLAY,
        }
    }

    /// The source glyphs this cell can stand for.
    pub fn actuals(&self) -> &BTreeSet<char> {
        match self {
            Cell::Normal { actuals, .. } | Cell::Wild { actuals } => actuals,
        }
    }

    fn actuals_mut(&mut self) -> &mut BTreeSet<char> {
        match self {
            Cell::Normal { actuals, .. } | Cell::Wild { actuals } => actuals,
        }
    }

    /// Whether `glyph` canonicalizes to this cell's display. Wildcards match everything.
    pub fn matches_display(&self, glyph: char) -> bool {
        match self {
            Cell::Normal { display, .. } => *display == canonicalize(glyph),
            Cell::Wild { .. } => true,
        }
    }

    /// Adds `glyph` as an actual if it matches the display.
    ///
    /// Returns `true` only when a new element was added, so a mismatching glyph and an
    /// already present glyph both return `false`.
    pub fn try_add_actual(&mut self, glyph: char) -> bool {
        self.matches_display(glyph) && self.actuals_mut().insert(glyph)
    }

    /// Removes `glyph` from the actuals.
    pub fn remove_actual(&mut self, glyph: char) {
        self.actuals_mut().remove(&glyph);
    }

    /// Whether this is a wildcard cell.
    pub fn is_wild(&self) -> bool {
        matches!(self, Cell::Wild { .. })
    }

    /// Score contribution of this cell when part of a found word.
    pub fn points(&self) -> u32 {
        match self {
            Cell::Normal { .. } => 1,
            Cell::Wild { .. } => 2,
        }
    }
}
