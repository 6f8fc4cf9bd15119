use super::*;

#[test]
fn lease_follows_latest_claim() {
    let lease = ButtonLease::new();
    let first = lease.claim();
    assert!(lease.holds(first));

    let second = lease.claim();
    assert!(!lease.holds(first));
    assert!(lease.holds(second));
}

#[test]
fn cleanup_of_an_older_page_keeps_newer_button() {
    let lease = ButtonLease::default();
    let outgoing = lease.claim();
    let incoming = lease.claim();
    // The outgoing page's cleanup runs after the incoming page showed its button.
    assert!(!lease.holds(outgoing));
    assert!(lease.holds(incoming));
}
