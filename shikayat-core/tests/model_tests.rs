// File: shikayat-core/tests/model_tests.rs

use shikayat_core::Error;
use shikayat_core::models::{ComplaintFilter, NewComplaint};

#[test]
fn test_new_complaint_trims_and_validates() {
    let c = NewComplaint::new(
        "  Asha Verma  ",
        " asha@example.com ",
        "Tenant",
        "  No water ",
        " Tap has been dry all day. ",
        Some("  "),
        Some(" Block B "),
    )
    .expect("valid submission");

    assert_eq!(c.name, "Asha Verma");
    assert_eq!(c.email, "asha@example.com");
    assert_eq!(c.title, "No water");
    assert_eq!(c.description, "Tap has been dry all day.");
    assert_eq!(c.category, None);
    assert_eq!(c.location.as_deref(), Some("Block B"));
}

#[test]
fn test_new_complaint_rejects_blank_required_fields() {
    for (name, email, role, title, description) in [
        ("", "a@b.c", "Tenant", "t", "d"),
        ("n", "   ", "Tenant", "t", "d"),
        ("n", "a@b.c", "", "t", "d"),
        ("n", "a@b.c", "Tenant", " \t ", "d"),
        ("n", "a@b.c", "Tenant", "t", ""),
    ] {
        let err = NewComplaint::new(name, email, role, title, description, None, None)
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}

#[test]
fn test_validation_error_names_every_missing_field() {
    let err = NewComplaint::new("", "", "Tenant", "", "d", None, None).unwrap_err();
    let Error::Validation(msg) = err else {
        panic!("expected validation error");
    };
    assert!(msg.contains("name"));
    assert!(msg.contains("email"));
    assert!(msg.contains("title"));
    assert!(!msg.contains("description"));
}

#[test]
fn test_filter_params_normalize_blanks() {
    let f = ComplaintFilter::from_params(
        Some("  leak ".into()),
        Some(String::new()),
        Some("   ".into()),
    );
    assert_eq!(f.q.as_deref(), Some("leak"));
    assert_eq!(f.status, None);
    assert_eq!(f.role, None);
    assert!(!f.is_empty());

    assert!(ComplaintFilter::from_params(None, None, None).is_empty());
}
