use uuid::Uuid;

/// Tagged classification of a lookup term. The decision is purely
/// syntactic: a term that parses as a uuid is a primary-key lookup,
/// anything else probes the secondary keys (title or slug). Exactly one
/// branch is taken per call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupTerm {
    ById(Uuid),
    BySecondary(String),
}

impl LookupTerm {
    pub fn classify(term: &str) -> Self {
        match Uuid::parse_str(term) {
            Ok(id) => LookupTerm::ById(id),
            Err(_) => LookupTerm::BySecondary(term.to_string()),
        }
    }
}
