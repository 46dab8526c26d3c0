use slovo_core::{LookupTicket, RenderedDocument};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Input line changed; carries the preprocessed query
    TextInput(String),
    /// Input emptied, drop whatever is in flight
    ClearInput,
    /// Finished lookup, shown only while its ticket is current
    ShowDocument {
        ticket: LookupTicket,
        document: RenderedDocument,
    },
    Quit,
}
