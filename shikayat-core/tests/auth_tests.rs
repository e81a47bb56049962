// File: shikayat-core/tests/auth_tests.rs

use shikayat_core::auth::{AdminGate, SessionSigner};

#[test]
fn test_gate_requires_exact_password() {
    let gate = AdminGate::new("s3cret");
    assert!(gate.verify("s3cret"));
    assert!(!gate.verify("s3cret "));
    assert!(!gate.verify("S3CRET"));
    assert!(!gate.verify(""));
}

#[test]
fn test_issued_cookie_round_trips() {
    let signer = SessionSigner::new("signing-key");
    let cookie = signer.issue_admin();
    assert!(signer.is_admin(&cookie));
}

#[test]
fn test_fresh_or_garbage_values_are_not_admin() {
    let signer = SessionSigner::new("signing-key");
    assert!(!signer.is_admin(""));
    assert!(!signer.is_admin("admin"));
    assert!(!signer.is_admin("admin."));
    assert!(!signer.is_admin("not-even-a-cookie"));
    assert!(!signer.is_admin("admin.%%%not-base64%%%"));
}

#[test]
fn test_tampered_signature_is_rejected() {
    let signer = SessionSigner::new("signing-key");
    let cookie = signer.issue_admin();
    let (payload, sig) = cookie.split_once('.').unwrap();

    // Flip the first character of the signature.
    let mut chars: Vec<char> = sig.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    let forged: String = chars.into_iter().collect();
    assert!(!signer.is_admin(&format!("{payload}.{forged}")));
}

#[test]
fn test_cookie_is_bound_to_the_secret() {
    let signer = SessionSigner::new("signing-key");
    let other = SessionSigner::new("different-key");
    let cookie = signer.issue_admin();
    assert!(!other.is_admin(&cookie));
}
