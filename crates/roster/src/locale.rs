//! Display strings for supported languages.
//!
//! Locale only changes text shown to the user. Matching, ordering and
//! pagination are the same in every language.

use std::fmt;
use std::str::FromStr;

use roster_render::template::render_str;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Display language of a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// French.
    Fr,
}

/// Every user-visible string of a view in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub no_data_title: &'static str,
    pub no_data_body: &'static str,
    pub no_results_title: &'static str,
    pub no_results_body: &'static str,
    pub error_title: &'static str,
    pub error_body: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub show_more: &'static str,
    pub all_option: &'static str,
    pub search_label: &'static str,
    pub search_placeholder: &'static str,
    pub loading: &'static str,
    page_template: &'static str,
    range_template: &'static str,
}

const EN: Strings = Strings {
    no_data_title: "No data available",
    no_data_body: "There is nothing to show here yet.",
    no_results_title: "No results found",
    no_results_body: "Try adjusting your search or filters.",
    error_title: "Unable to load data",
    error_body: "Something went wrong while loading this list.",
    previous: "Previous",
    next: "Next",
    show_more: "Show more",
    all_option: "All",
    search_label: "Search",
    search_placeholder: "Search...",
    loading: "Loading…",
    page_template: "Page {{ page }} of {{ total }}",
    range_template: "{{ first }}-{{ last }} of {{ total }}",
};

const FR: Strings = Strings {
    no_data_title: "Aucune donnée disponible",
    no_data_body: "Il n'y a encore rien à afficher ici.",
    no_results_title: "Aucun résultat trouvé",
    no_results_body: "Essayez de modifier votre recherche ou vos filtres.",
    error_title: "Impossible de charger les données",
    error_body: "Une erreur est survenue lors du chargement de cette liste.",
    previous: "Précédent",
    next: "Suivant",
    show_more: "Voir plus",
    all_option: "Tous",
    search_label: "Recherche",
    search_placeholder: "Rechercher...",
    loading: "Chargement…",
    page_template: "Page {{ page }} sur {{ total }}",
    range_template: "{{ first }}-{{ last }} sur {{ total }}",
};

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    /// Language code, as written in configuration.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// The string table for this locale.
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::En => &EN,
            Locale::Fr => &FR,
        }
    }

    /// "Page 2 of 5" in this locale.
    pub fn page_label(self, page: usize, total: usize) -> String {
        self.fill(
            self.strings().page_template,
            json!({"page": page, "total": total}),
        )
    }

    /// "11-20 of 43" in this locale.
    pub fn range_label(self, first: usize, last: usize, total: usize) -> String {
        self.fill(
            self.strings().range_template,
            json!({"first": first, "last": last, "total": total}),
        )
    }

    // Label sources are static; a failure here is a broken string table.
    fn fill(self, source: &str, context: serde_json::Value) -> String {
        render_str(source, context).unwrap_or_else(|err| {
            log::warn!("{} label '{}' failed to render: {}", self, source, err);
            String::new()
        })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Accepts a bare code or a region-tagged one (`fr-FR`, `en_GB`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s.split(['-', '_']).next().unwrap_or_default();
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(lang))
            .ok_or_else(|| format!("unsupported locale '{}'. Expected one of: en, fr", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::default().strings().no_data_title, "No data available");
    }

    #[test]
    fn french_strings() {
        let fr = Locale::Fr.strings();
        assert_eq!(fr.no_results_title, "Aucun résultat trouvé");
        assert_eq!(fr.all_option, "Tous");
        assert_eq!(Locale::Fr.page_label(2, 3), "Page 2 sur 3");
    }

    #[test]
    fn empty_states_differ_in_every_locale() {
        for locale in Locale::ALL {
            let s = locale.strings();
            assert_ne!(s.no_data_title, s.no_results_title);
            assert_ne!(s.no_data_title, s.error_title);
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Locale::En.page_label(1, 1), "Page 1 of 1");
        assert_eq!(Locale::En.range_label(11, 20, 43), "11-20 of 43");
    }

    #[test]
    fn label_templates_render_in_every_locale() {
        for locale in Locale::ALL {
            let page = locale.page_label(12, 40);
            assert!(page.contains("12") && page.contains("40"), "{}", page);
            assert!(!page.contains('{'), "{}", page);

            let range = locale.range_label(111, 120, 397);
            assert!(range.starts_with("111-120 "), "{}", range);
            assert!(range.ends_with(" 397"), "{}", range);
        }
    }

    #[test]
    fn parse_codes() {
        assert_eq!("fr".parse::<Locale>(), Ok(Locale::Fr));
        assert_eq!("fr-FR".parse::<Locale>(), Ok(Locale::Fr));
        assert_eq!("EN_gb".parse::<Locale>(), Ok(Locale::En));
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::Fr).unwrap(), r#""fr""#);
        let locale: Locale = serde_yaml::from_str("en").unwrap();
        assert_eq!(locale, Locale::En);
    }
}
