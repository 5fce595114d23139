// SPDX-License-Identifier: MPL-2.0
//! Glyph font lookup for the raster icons.
//!
//! The requested family is tried first, then the database's sans-serif
//! family, then any face at all. With an empty database the icon is drawn
//! without glyphs.

use resvg::usvg::fontdb::{Database, Family, Query, ID};
use std::sync::Arc;

/// Font database plus the family the glyphs will be drawn with.
#[derive(Debug, Clone)]
pub struct GlyphFont {
    database: Arc<Database>,
    family: Option<String>,
}

impl GlyphFont {
    /// Loads the system fonts and resolves `requested` against them.
    #[must_use]
    pub fn load(requested: &str) -> Self {
        let mut database = Database::new();
        database.load_system_fonts();
        log::debug!("loaded {} system font faces", database.len());
        Self::from_database(database, requested)
    }

    #[must_use]
    pub fn from_database(database: Database, requested: &str) -> Self {
        let family = resolve_family(&database, requested);
        Self {
            database: Arc::new(database),
            family,
        }
    }

    /// Family used for glyphs, `None` when no font is available.
    #[must_use]
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    #[must_use]
    pub fn database(&self) -> Arc<Database> {
        Arc::clone(&self.database)
    }
}

/// Picks the family name to draw glyphs with.
#[must_use]
pub fn resolve_family(database: &Database, requested: &str) -> Option<String> {
    if query(database, Family::Name(requested)).is_some() {
        log::debug!("using font family {requested}");
        return Some(requested.to_string());
    }

    let fallback = query(database, Family::SansSerif)
        .and_then(|id| family_name(database, id))
        .or_else(|| {
            database
                .faces()
                .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        });

    match &fallback {
        Some(name) => log::warn!("font family {requested} not found, using {name}"),
        None => log::warn!("no fonts available, icons will be drawn without glyphs"),
    }
    fallback
}

fn query(database: &Database, family: Family<'_>) -> Option<ID> {
    database.query(&Query {
        families: &[family],
        ..Query::default()
    })
}

fn family_name(database: &Database, id: ID) -> Option<String> {
    database
        .face(id)
        .and_then(|face| face.families.first())
        .map(|(name, _)| name.clone())
}
