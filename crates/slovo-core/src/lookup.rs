/// Identifies the query a lookup was issued for.
///
/// A finished lookup carries its ticket back to the display side, which
/// compares it against the query currently typed in before showing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    generation: u64,
    query: String,
}

impl LookupTicket {
    pub fn new(generation: u64, query: impl Into<String>) -> Self {
        Self {
            generation,
            query: query.into(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a response for this ticket may replace the displayed document.
    ///
    /// `live_query` must be preprocessed the same way the ticket's query was.
    pub fn is_current(&self, live_query: &str) -> bool {
        !live_query.is_empty() && self.query == live_query
    }
}

/// Hands out tickets in issue order
#[derive(Debug, Default)]
pub struct TicketIssuer {
    issued: u64,
}

impl TicketIssuer {
    pub fn issue(&mut self, query: impl Into<String>) -> LookupTicket {
        self.issued += 1;
        LookupTicket::new(self.issued, query)
    }

    /// Generation of the most recently issued ticket, 0 before the first one
    pub fn latest(&self) -> u64 {
        self.issued
    }
}
