use serde::Serialize;

/// The regional data providers whose records the client understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    /// Catalonia; XML-derived Catalan field names.
    Cat,
    /// Galicia; CSV-derived Galician field names.
    Gal,
    /// Comunitat Valenciana; JSON-derived field names.
    Cv,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Cat, Region::Gal, Region::Cv];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Region::Cat => "CAT",
            Region::Gal => "GAL",
            Region::Cv => "CV",
        }
    }

    /// The `fuente` label the load service expects for this region's file.
    #[must_use]
    pub fn source_format(self) -> &'static str {
        match self {
            Region::Cat => "CAT XML",
            Region::Gal => "GAL CSV",
            Region::Cv => "CV JSON",
        }
    }

    /// Keys that only appear in this region's native schema.
    #[must_use]
    pub fn marker_keys(self) -> &'static [&'static str] {
        match self {
            Region::Cat => &["estaci", "municipi", "serveis_territorials", "adrea"],
            Region::Gal => &["NOME DA ESTACIÓN", "CONCELLO", "ENDEREZO", "CÓDIGO POSTAL"],
            Region::Cv => &["N ESTACIN", "MUNICIPIO", "DIRECCIN", "C.POSTAL"],
        }
    }

    /// Guesses the originating region from the keys a record carries.
    ///
    /// Regions are tried in declaration order; records that carry none of the
    /// marker keys (e.g. already-canonical search results) yield `None`.
    pub fn detect<F>(has_key: F) -> Option<Region>
    where
        F: Fn(&str) -> bool,
    {
        Self::ALL
            .into_iter()
            .find(|region| region.marker_keys().iter().any(|key| has_key(key)))
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
