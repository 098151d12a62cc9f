// tests/pager.rs
use vocab_search::pager::Pager;

#[test]
fn next_and_prev_wrap_around() {
    let mut p = Pager::new(3);
    assert_eq!(p.label(), "1/3");
    assert_eq!(p.prev(), 2);
    assert_eq!(p.label(), "3/3");
    assert_eq!(p.next(), 0);
    assert_eq!(p.next(), 1);
}

#[test]
fn empty_pager_stays_put() {
    let mut p = Pager::new(0);
    assert!(p.is_empty());
    assert_eq!(p.next(), 0);
    assert_eq!(p.prev(), 0);
    assert_eq!(p.label(), "0/0");
}

#[test]
fn go_to_ignores_out_of_range() {
    let mut p = Pager::new(4);
    p.go_to(2);
    assert_eq!(p.index(), 2);
    p.go_to(4);
    assert_eq!(p.index(), 2);
    assert_eq!(p.len(), 4);
}

#[test]
fn single_result_wraps_onto_itself() {
    let mut p = Pager::new(1);
    assert_eq!(p.next(), 0);
    assert_eq!(p.prev(), 0);
    assert_eq!(p.label(), "1/1");
}
