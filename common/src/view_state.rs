//! Lookup outcomes and what the quotation view shows for them.

use serde::{Deserialize, Serialize};

use crate::display_model::DisplayModel;

/// Result of looking a quotation up by identifier.
///
/// Absence and failure are kept apart here for diagnostics even though the
/// view shows both the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuotationLookup {
    Found(DisplayModel),
    NotFound,
    FetchFailed(String),
}

impl QuotationLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, QuotationLookup::Found(_))
    }

    /// Outcome known without asking the server: an empty identifier can never match.
    pub fn without_fetch(quotation_id: &str) -> Option<QuotationLookup> {
        quotation_id.is_empty().then_some(QuotationLookup::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuotationViewState {
    Loading,
    Loaded(DisplayModel),
    NotFound,
}

impl From<Option<QuotationLookup>> for QuotationViewState {
    /// `None` means the lookup has not completed yet.
    fn from(lookup: Option<QuotationLookup>) -> Self {
        match lookup {
            None => QuotationViewState::Loading,
            Some(QuotationLookup::Found(model)) => QuotationViewState::Loaded(model),
            Some(QuotationLookup::NotFound) | Some(QuotationLookup::FetchFailed(_)) => {
                QuotationViewState::NotFound
            }
        }
    }
}

/// A finished lookup together with the identifier it was made for.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLookup {
    pub quotation_id: String,
    pub lookup: QuotationLookup,
}

impl QuotationViewState {
    /// What the view shows for `current_id`.
    ///
    /// A lookup still in flight, or one resolved for another identifier, is
    /// loading: the previous quotation is never shown under a new identifier.
    pub fn for_current(current_id: &str, pending: bool, resolved: Option<&ResolvedLookup>) -> Self {
        match resolved {
            Some(resolved) if !pending && resolved.quotation_id == current_id => {
                QuotationViewState::from(Some(resolved.lookup.clone()))
            }
            _ => QuotationViewState::Loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotation::QuotationRecord;

    fn found(quotation_id: &str, customer: &str) -> ResolvedLookup {
        let record: QuotationRecord = serde_json::from_value(serde_json::json!({
            "_id": quotation_id,
            "customerName": customer
        }))
        .unwrap();
        ResolvedLookup {
            quotation_id: quotation_id.to_string(),
            lookup: QuotationLookup::Found(DisplayModel::from(record)),
        }
    }

    #[test]
    fn resolved_lookup_for_current_id_is_shown() {
        let resolved = found("aaa111", "Jane Doe");
        let QuotationViewState::Loaded(model) =
            QuotationViewState::for_current("aaa111", false, Some(&resolved))
        else {
            panic!("expected the quotation to be shown");
        };
        assert_eq!(model.customer().name, "Jane Doe");
    }

    #[test]
    fn previous_quotation_is_not_shown_after_id_change() {
        let previous = found("aaa111", "Jane Doe");
        // restart already flagged
        assert_eq!(
            QuotationViewState::for_current("bbb222", true, Some(&previous)),
            QuotationViewState::Loading
        );
        // value kept from before the restart
        assert_eq!(
            QuotationViewState::for_current("bbb222", false, Some(&previous)),
            QuotationViewState::Loading
        );
    }

    #[test]
    fn refetch_of_same_id_is_loading() {
        let resolved = found("aaa111", "Jane Doe");
        assert_eq!(
            QuotationViewState::for_current("aaa111", true, Some(&resolved)),
            QuotationViewState::Loading
        );
        assert_eq!(QuotationViewState::for_current("aaa111", false, None), QuotationViewState::Loading);
    }

    #[test]
    fn resolved_failure_for_current_id_is_not_found() {
        let resolved = ResolvedLookup {
            quotation_id: "bbb222".to_string(),
            lookup: QuotationLookup::FetchFailed("timed out".into()),
        };
        assert_eq!(
            QuotationViewState::for_current("bbb222", false, Some(&resolved)),
            QuotationViewState::NotFound
        );
    }

    #[test]
    fn empty_id_resolves_without_fetch() {
        assert_eq!(QuotationLookup::without_fetch(""), Some(QuotationLookup::NotFound));
        assert_eq!(QuotationLookup::without_fetch("aaa111"), None);

        let resolved = ResolvedLookup {
            quotation_id: String::new(),
            lookup: QuotationLookup::NotFound,
        };
        assert_eq!(QuotationViewState::for_current("", false, Some(&resolved)), QuotationViewState::NotFound);
    }

    #[test]
    fn pending_lookup_is_loading() {
        assert_eq!(QuotationViewState::from(None), QuotationViewState::Loading);
    }

    #[test]
    fn failures_collapse_into_not_found() {
        assert_eq!(
            QuotationViewState::from(Some(QuotationLookup::FetchFailed("connection refused".into()))),
            QuotationViewState::NotFound
        );
        assert_eq!(
            QuotationViewState::from(Some(QuotationLookup::NotFound)),
            QuotationViewState::NotFound
        );
    }

    #[test]
    fn found_lookup_is_loaded() {
        let record: QuotationRecord =
            serde_json::from_value(serde_json::json!({ "_id": "abc123" })).unwrap();
        let model = DisplayModel::from(record);
        let lookup = QuotationLookup::Found(model.clone());
        assert!(lookup.is_found());
        assert_eq!(QuotationViewState::from(Some(lookup)), QuotationViewState::Loaded(model));
    }
}
