//! Search filters entered by the user.

/// Query-string keys understood by the search orchestrator.
pub const LOCALITY_PARAM: &str = "localidad";
pub const POSTAL_CODE_PARAM: &str = "cp";
pub const PROVINCE_PARAM: &str = "provincia";
pub const KIND_PARAM: &str = "tipo";

/// Four independent, optional search filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub locality: Option<String>,
    pub postal_code: Option<String>,
    pub province: Option<String>,
    pub kind: Option<String>,
}

impl SearchCriteria {
    /// Returns the query pairs in wire order.
    ///
    /// Absent filters are sent as empty strings; the orchestrator expects every
    /// key to be present.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, &str); 4] {
        [
            (LOCALITY_PARAM, self.locality.as_deref().unwrap_or("")),
            (POSTAL_CODE_PARAM, self.postal_code.as_deref().unwrap_or("")),
            (PROVINCE_PARAM, self.province.as_deref().unwrap_or("")),
            (KIND_PARAM, self.kind.as_deref().unwrap_or("")),
        ]
    }

    /// Returns `true` when no filter carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query_pairs().iter().all(|(_, v)| v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_criteria_serialize_as_empty_strings() {
        let criteria = SearchCriteria {
            locality: Some("Vigo".to_owned()),
            ..SearchCriteria::default()
        };
        assert_eq!(
            criteria.query_pairs(),
            [
                ("localidad", "Vigo"),
                ("cp", ""),
                ("provincia", ""),
                ("tipo", ""),
            ]
        );
    }

    #[test]
    fn default_criteria_is_empty() {
        assert!(SearchCriteria::default().is_empty());
    }

    #[test]
    fn blank_value_counts_as_empty() {
        let criteria = SearchCriteria {
            kind: Some(String::new()),
            ..SearchCriteria::default()
        };
        assert!(criteria.is_empty());
    }
}
