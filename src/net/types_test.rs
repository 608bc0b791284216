use super::*;

// =============================================================
// Case
// =============================================================

#[test]
fn case_deserializes_with_only_required_fields() {
    let case: Case = serde_json::from_value(serde_json::json!({
        "case_name": "Bank v. Doe",
        "docket_number": "MMX-CV-24-1234567-S"
    }))
    .expect("sparse case");
    assert_eq!(case.case_name, "Bank v. Doe");
    assert_eq!(case.docket_number, "MMX-CV-24-1234567-S");
    assert!(case.town.is_none());
    assert!(case.address.is_none());
}

#[test]
fn case_display_helpers_substitute_na() {
    let case = Case {
        case_name: "Bank v. Doe".to_owned(),
        docket_number: "D-1".to_owned(),
        town: Some("Middletown".to_owned()),
        address: None,
        zip_code: Some(String::new()),
        ..Case::default()
    };
    assert_eq!(case.town_display(), "Middletown");
    assert_eq!(case.address_display(), "N/A");
    assert_eq!(case.zip_code_display(), "N/A");
    assert_eq!(case.defendant_display(), "N/A");
}

// =============================================================
// CaseListEnvelope::case_count
// =============================================================

#[test]
fn case_count_prefers_numeric_total() {
    let envelope: CaseListEnvelope = serde_json::from_value(serde_json::json!({
        "items": [{"case_name": "a", "docket_number": "1"}],
        "total": 42
    }))
    .expect("envelope");
    assert_eq!(envelope.case_count(), 42);
}

#[test]
fn case_count_falls_back_to_item_length_for_non_numeric_total() {
    let envelope: CaseListEnvelope = serde_json::from_value(serde_json::json!({
        "items": [
            {"case_name": "a", "docket_number": "1"},
            {"case_name": "b", "docket_number": "2"}
        ],
        "total": "not-a-number"
    }))
    .expect("envelope");
    assert_eq!(envelope.case_count(), 2);
}

#[test]
fn case_count_is_zero_for_empty_envelope() {
    let envelope: CaseListEnvelope =
        serde_json::from_value(serde_json::json!({})).expect("empty envelope");
    assert_eq!(envelope.case_count(), 0);
}

// =============================================================
// TownCasesEnvelope
// =============================================================

#[test]
fn town_cases_envelope_tolerates_missing_fields() {
    let envelope: TownCasesEnvelope =
        serde_json::from_value(serde_json::json!({})).expect("empty envelope");
    assert!(envelope.cases.is_empty());
    assert!(envelope.total.is_none());
}

// =============================================================
// ScrapeOutcome
// =============================================================

#[test]
fn scrape_outcome_defaults_missing_fields() {
    let outcome: ScrapeOutcome =
        serde_json::from_value(serde_json::json!({"message": "ok"})).expect("outcome");
    assert_eq!(outcome.message, "ok");
    assert_eq!(outcome.cases_found, 0);
}

// =============================================================
// TownSkipTraceStats derivations
// =============================================================

#[test]
fn untraced_for_display_is_derived_from_totals() {
    let stats = TownSkipTraceStats {
        town: "Middletown".to_owned(),
        scraped: true,
        total_cases: 10,
        traced_cases: 3,
        untraced_cases: 5, // inconsistent on purpose; display must not trust it
        error: None,
    };
    assert_eq!(stats.untraced_for_display(), 7);
}

#[test]
fn untraced_for_display_saturates() {
    let stats = TownSkipTraceStats {
        total_cases: 3,
        traced_cases: 9,
        ..TownSkipTraceStats::default()
    };
    assert_eq!(stats.untraced_for_display(), 0);
}

#[test]
fn action_unavailable_when_not_scraped() {
    let stats = TownSkipTraceStats {
        scraped: false,
        total_cases: 10,
        traced_cases: 0,
        ..TownSkipTraceStats::default()
    };
    assert!(!stats.action_available());
}

#[test]
fn action_unavailable_when_everything_traced() {
    let stats = TownSkipTraceStats {
        scraped: true,
        total_cases: 4,
        traced_cases: 4,
        ..TownSkipTraceStats::default()
    };
    assert!(!stats.action_available());
}

#[test]
fn action_available_when_scraped_with_untraced_cases() {
    let stats = TownSkipTraceStats {
        scraped: true,
        total_cases: 10,
        traced_cases: 3,
        ..TownSkipTraceStats::default()
    };
    assert!(stats.action_available());
}
