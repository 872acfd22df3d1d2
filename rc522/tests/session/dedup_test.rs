#[path = "../common/mod.rs"]
mod common;

use rc522::session::Deduplicator;
use rc522::Uid;

#[test]
fn default_threshold_forgets_after_a_thousand_and_one_cycles() {
    let uid = Uid::from_slice(&common::single_uid()).unwrap();
    let mut d = Deduplicator::new(rc522::session::config::DEDUP_RESET_CYCLES);
    assert!(d.observe(&uid));
    for _ in 0..1000 {
        assert!(!d.tick());
    }
    assert!(!d.observe(&uid));
    assert!(d.tick());
    assert!(d.observe(&uid));
}

#[test]
fn alternating_cards_each_announced() {
    let a = Uid::from_slice(&common::single_uid()).unwrap();
    let b = Uid::from_slice(&common::double_uid()).unwrap();
    let mut d = Deduplicator::new(1000);
    let announced = [a, b, a, a, b]
        .iter()
        .filter(|uid| d.observe(uid))
        .count();
    assert_eq!(announced, 4);
}
