//! Tests for pagination module

use super::*;
use pretty_assertions::assert_eq;
use url::Url;

fn params(cursor: &PaginationCursor) -> Vec<(String, String)> {
    cursor.request_parameters()
}

fn pair(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}

// ============================================================================
// PaginationConfig Tests
// ============================================================================

#[test]
fn test_pagination_config_default() {
    let config = PaginationConfig::default();
    assert_eq!(config.page_size, 20);
    assert_eq!(config.results_field, "results");
    assert_eq!(config.count_field, "count");
    assert_eq!(config.style, PageStyle::limit_offset("offset", "limit"));
}

#[test]
fn test_pagination_config_builders() {
    let config = PaginationConfig::page_number(50)
        .with_results_field("items")
        .with_count_field("total");

    assert_eq!(config.page_size, 50);
    assert_eq!(config.results_field, "items");
    assert_eq!(config.count_field, "total");
    assert_eq!(
        config.style,
        PageStyle::page_number_with_size("page", "page_size", 1)
    );

    let config = PaginationConfig::limit_offset(10).with_style(PageStyle::limit_offset("skip", "take"));
    assert_eq!(config.style, PageStyle::limit_offset("skip", "take"));
}

// ============================================================================
// Cursor State Tests
// ============================================================================

#[test]
fn test_cursor_initial_state() {
    let cursor = PaginationCursor::new(&PaginationConfig::limit_offset(2));
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.total(), None);
    assert_eq!(cursor.last_page_count(), 0);
    assert_eq!(cursor.page_size(), 2);
    assert!(!cursor.is_exhausted());
}

#[test]
fn test_cursor_zero_page_size_is_clamped() {
    let cursor = PaginationCursor::new(&PaginationConfig::limit_offset(0));
    assert_eq!(cursor.page_size(), 1);
}

#[test]
fn test_cursor_seek() {
    let mut cursor = PaginationCursor::new(&PaginationConfig::limit_offset(2));
    cursor.seek(7);
    assert_eq!(cursor.position(), 7);
    assert_eq!(params(&cursor), vec![pair("offset", "7"), pair("limit", "2")]);
}

#[test]
fn test_cursor_seek_clamps_to_known_total() {
    let mut cursor = PaginationCursor::new(&PaginationConfig::limit_offset(2));
    cursor.record_response(Some(5), 2);
    cursor.seek(9);
    assert_eq!(cursor.position(), 5);
    assert!(cursor.is_exhausted());
}

// ============================================================================
// record_response Tests
// ============================================================================

#[test]
fn test_record_response_advances_and_continues() {
    let mut cursor = PaginationCursor::new(&PaginationConfig::limit_offset(2));

    assert!(cursor.record_response(Some(5), 2));
    assert_eq!(cursor.position(), 2);
    assert_eq!(cursor.total(), Some(5));
    assert_eq!(cursor.last_page_count(), 2);

    assert!(cursor.record_response(Some(5), 2));
    assert_eq!(cursor.position(), 4);

    assert!(!cursor.record_response(Some(5), 1));
    assert_eq!(cursor.position(), 5);
    assert!(cursor.is_exhausted());
}

#[test]
fn test_record_response_first_total_wins() {
    let mut cursor = PaginationCursor::new(&PaginationConfig::limit_offset(2));
    cursor.record_response(Some(10), 2);
    cursor.record_response(Some(3), 2);
    assert_eq!(cursor.total(), Some(10));
}

#[test]
fn test_record_response_total_learned_late() {
    let mut cursor = PaginationCursor::new(&PaginationConfig::limit_offset(2));
    assert!(cursor.record_response(None, 2));
    assert_eq!(cursor.total(), None);
    assert!(!cursor.record_response(Some(4), 2));
    assert_eq!(cursor.total(), Some(4));
}

#[test]
fn test_record_response_stops_on_empty_page() {
    let mut cursor = PaginationCursor::new(&PaginationConfig::limit_offset(2));
    assert!(cursor.record_response(None, 2));
    assert!(!cursor.record_response(None, 0));
    assert_eq!(cursor.position(), 2);
}

#[test]
fn test_record_response_unknown_total_keeps_going() {
    let mut cursor = PaginationCursor::new(&PaginationConfig::limit_offset(2));
    for _ in 0..10 {
        assert!(cursor.record_response(None, 2));
    }
    assert_eq!(cursor.position(), 20);
}

#[test]
fn test_record_response_position_never_exceeds_total() {
    let mut cursor = PaginationCursor::new(&PaginationConfig::limit_offset(10));
    assert!(!cursor.record_response(Some(3), 10));
    assert_eq!(cursor.position(), 3);
}

// ============================================================================
// Request Parameter Tests
// ============================================================================

#[test]
fn test_limit_offset_parameters_follow_position() {
    let mut cursor = PaginationCursor::new(&PaginationConfig::limit_offset(25));
    assert_eq!(params(&cursor), vec![pair("offset", "0"), pair("limit", "25")]);

    cursor.record_response(None, 25);
    assert_eq!(params(&cursor), vec![pair("offset", "25"), pair("limit", "25")]);
    assert_eq!(cursor.leading_skip(), 0);
}

#[test]
fn test_page_number_parameters_follow_position() {
    let mut cursor = PaginationCursor::new(&PaginationConfig::page_number(10));
    assert_eq!(params(&cursor), vec![pair("page", "1"), pair("page_size", "10")]);

    cursor.record_response(None, 10);
    assert_eq!(params(&cursor), vec![pair("page", "2"), pair("page_size", "10")]);
}

#[test]
fn test_page_number_without_size_param() {
    let config = PaginationConfig::limit_offset(5).with_style(PageStyle::page_number("p", 0));
    let mut cursor = PaginationCursor::new(&config);
    cursor.seek(10);
    assert_eq!(params(&cursor), vec![pair("p", "2")]);
}

#[test]
fn test_page_number_unaligned_seek_reports_skip() {
    let mut cursor = PaginationCursor::new(&PaginationConfig::page_number(4));
    cursor.seek(6);
    assert_eq!(params(&cursor), vec![pair("page", "2"), pair("page_size", "4")]);
    assert_eq!(cursor.leading_skip(), 2);

    cursor.record_response(None, 2);
    assert_eq!(cursor.position(), 8);
    assert_eq!(cursor.leading_skip(), 0);
    assert_eq!(params(&cursor), vec![pair("page", "3"), pair("page_size", "4")]);
}

#[test]
fn test_page_number_counts_pages_not_records() {
    // Configured for 5 per page; the server serves 3
    let config = PaginationConfig::page_number(5).with_style(PageStyle::page_number("page", 1));
    let mut cursor = PaginationCursor::new(&config);
    cursor.seek(0);

    assert!(cursor.record_response(Some(9), 3));
    assert_eq!(params(&cursor), vec![pair("page", "2")]);
    assert_eq!(cursor.leading_skip(), 0);

    assert!(cursor.record_response(Some(9), 3));
    assert_eq!(params(&cursor), vec![pair("page", "3")]);
    assert_eq!(cursor.position(), 6);
}

#[test]
fn test_seek_past_end_before_total_is_pulled_back() {
    let mut cursor = PaginationCursor::new(&PaginationConfig::limit_offset(2));
    cursor.seek(8);
    assert_eq!(cursor.position(), 8);

    assert!(!cursor.record_response(Some(3), 0));
    assert_eq!(cursor.position(), 3);
    assert!(cursor.is_exhausted());
}

// ============================================================================
// URL Tests
// ============================================================================

#[test]
fn test_page_url_appends_parameters() {
    let endpoint = Url::parse("https://api.example.com/users/").unwrap();
    let mut cursor = PaginationCursor::new(&PaginationConfig::limit_offset(2));
    cursor.seek(4);

    let url = cursor.page_url(&endpoint);
    assert_eq!(
        url.as_str(),
        "https://api.example.com/users/?offset=4&limit=2"
    );
}

#[test]
fn test_page_url_keeps_existing_query() {
    let endpoint = Url::parse("https://api.example.com/users/?active=true&limit=99").unwrap();
    let cursor = PaginationCursor::new(&PaginationConfig::limit_offset(2));

    let url = cursor.page_url(&endpoint);
    assert_eq!(
        url.as_str(),
        "https://api.example.com/users/?active=true&offset=0&limit=2"
    );
}
