#[path = "../common/mod.rs"]
mod common;

use std::cell::RefCell;
use std::rc::Rc;

use rc522::session::{CancellationToken, Session, SessionConfig};
use rc522::transport::mock::CardReply;
use rc522::{Error, Status, Uid};

type Seen = Rc<RefCell<Vec<Uid>>>;

fn recording_sink(seen: &Seen) -> impl FnMut(&Uid) + use<> {
    let seen = Rc::clone(seen);
    move |uid: &Uid| seen.borrow_mut().push(*uid)
}

#[test]
fn card_left_in_field_is_reannounced_after_threshold() {
    common::init_logging();
    let (_shared, reader) = common::reader_with(common::card_present(&common::single_uid(), 6));
    let seen: Seen = Rc::default();
    let config = SessionConfig {
        dedup_reset_cycles: 2,
        ..SessionConfig::default()
    };
    let mut session = Session::new(reader, config, recording_sink(&seen));

    for _ in 0..6 {
        assert_eq!(session.poll_once().unwrap(), Status::Ok);
    }
    // Cycles 1 and 4 announce; the counter clears after cycles 3 and 6
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn card_swap_announces_both() {
    let mut replies = common::card_present(&common::single_uid(), 2);
    replies.extend(common::card_present(&common::double_uid(), 2));
    let (_shared, reader) = common::reader_with(replies);
    let seen: Seen = Rc::default();
    let mut session = Session::new(reader, SessionConfig::default(), recording_sink(&seen));

    session.run_for(4).unwrap();
    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].as_bytes(), &common::single_uid());
    assert_eq!(seen[1].as_bytes(), &common::double_uid());
}

#[test]
fn empty_cycles_between_reads_do_not_reset_dedup() {
    let mut replies = common::card_present(&common::single_uid(), 1);
    replies.push(CardReply::Silence);
    replies.extend(common::card_present(&common::single_uid(), 1));
    let (_shared, reader) = common::reader_with(replies);
    let seen: Seen = Rc::default();
    let mut session = Session::new(reader, SessionConfig::default(), recording_sink(&seen));

    let statuses: Vec<Status> = (0..3).map(|_| session.poll_once().unwrap()).collect();
    assert_eq!(statuses, vec![Status::Ok, Status::NoTag, Status::Ok]);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn sink_can_cancel_the_loop() {
    let (_shared, reader) = common::reader_with(common::card_present(&common::single_uid(), 1));
    let token = CancellationToken::new();
    let stop = token.clone();
    let mut session = Session::new(reader, SessionConfig::default(), move |_: &Uid| stop.cancel());

    session.run(&token).unwrap();
    assert_eq!(
        session.last_announced().map(|u| u.to_le_integer()),
        Some(0x2B8A_3F04)
    );
}

#[test]
fn fatal_transport_error_propagates() {
    let (shared, reader) = common::reader_with(Vec::new());
    let mut session = Session::new(reader, SessionConfig::default(), |_: &Uid| {});
    shared.borrow_mut().fail_after = Some(0);
    assert!(matches!(session.poll_once(), Err(Error::Transport(_))));
}
