use crate::lookup::{LookupTicket, TicketIssuer};
use crate::preprocess::{Preprocessor, QueryPreprocessor};

#[test]
fn test_tickets_increase_in_issue_order() {
    let mut issuer = TicketIssuer::default();
    assert_eq!(issuer.latest(), 0);

    let first = issuer.issue("с");
    let second = issuer.issue("ст");

    assert!(second.generation() > first.generation());
    assert_eq!(issuer.latest(), second.generation());
    assert_eq!(second.query(), "ст");
}

#[test]
fn test_ticket_matches_only_its_query() {
    let ticket = LookupTicket::new(3, "стол");

    assert!(ticket.is_current("стол"));
    assert!(!ticket.is_current("сто"));
    assert!(!ticket.is_current("столы"));
    assert!(!ticket.is_current(""));
}

#[test]
fn test_preprocessor_trims_and_drops_line_breaks() {
    let preprocessor = QueryPreprocessor;

    assert_eq!(preprocessor.process("  стол\r\n"), "стол");
    assert_eq!(preprocessor.process("   "), "");
}

#[test]
fn test_preprocessor_composes_cyrillic() {
    let preprocessor = QueryPreprocessor;

    // и + combining breve
    assert_eq!(preprocessor.process("чаи\u{0306}"), "ча\u{0439}");
}
