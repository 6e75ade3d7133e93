use super::*;
use crate::lang::{ast::Statement, Line};

fn listing(lines: &[&str]) -> Listing {
    let mut listing = Listing::default();
    for line in lines {
        listing.add_or_replace(Line::parse(line).unwrap().unwrap());
    }
    listing.initialize();
    listing
}

#[test]
fn test_neighbors_follow_edits() {
    let mut listing = listing(&["30 END", "10 PRINT 1", "20 PRINT 2"]);
    assert_eq!(listing.next_line(10).unwrap().number(), Some(20));
    assert_eq!(listing.previous_line(30).unwrap().number(), Some(20));
    assert!(listing.previous_line(10).is_none());
    assert!(listing.remove(20).is_some());
    assert_eq!(listing.next_line(10).unwrap().number(), Some(30));
    assert_eq!(listing.previous_line(30).unwrap().number(), Some(10));
    assert!(listing.next_line(30).is_none());
    let numbers: Vec<_> = listing.lines().map(|l| l.number()).collect();
    assert_eq!(numbers, vec![Some(10), Some(30)]);
}

#[test]
fn test_replace_keeps_one_line() {
    let mut listing = listing(&["10 PRINT 1"]);
    let old = listing.add_or_replace(Line::parse("10 PRINT 22").unwrap().unwrap());
    assert_eq!(&**old.unwrap().source(), "PRINT 1");
    assert_eq!(listing.len(), 1);
    assert_eq!(&**listing.line(10).unwrap().source(), "PRINT 22");
}

#[test]
fn test_executable_statement_skips_data() {
    let listing = listing(&["10 DATA 1,2", "20 DATA 3", "30 PRINT 1"]);
    let index = listing.get_executable_statement(10).unwrap();
    assert_eq!(index, 2);
    assert_eq!(listing.slot(index).unwrap().line_number, Some(30));
    assert_eq!(listing.get_executable_statement(25), Some(2));
    assert_eq!(listing.get_executable_statement(31), None);
    assert_eq!(listing.line_start(20), Some(1));
    assert_eq!(listing.line_start(25), None);
}

#[test]
fn test_size_counts_source_text() {
    let listing = listing(&["10 PRINT 1", "20 END"]);
    assert_eq!(listing.size(), 11 + 7);
}

#[test]
fn test_if_slots_skip_then_chain() {
    let listing = listing(&["10 IF A THEN PRINT 1:IF B THEN PRINT 2:PRINT 3", "20 END"]);
    assert_eq!(listing.end(), 6);
    assert!(matches!(*listing.slot(0).unwrap().statement, Statement::If(..)));
    assert_eq!(listing.slot(0).unwrap().skip, 5);
    assert!(matches!(*listing.slot(2).unwrap().statement, Statement::If(..)));
    assert_eq!(listing.slot(2).unwrap().skip, 5);
    assert_eq!(listing.slot(3).unwrap().skip, 4);
    assert_eq!(listing.line_start(20), Some(5));
}

#[test]
fn test_edit_then_run() {
    let mut r = Runtime::default();
    let s = exec(&mut r, &["10 PRINT 1", "20 PRINT 2", "RUN"]);
    assert_eq!(s, " 1 \n 2 \nREADY\n");
    let s = exec(&mut r, &["15 PRINT 9", "20", "RUN"]);
    assert_eq!(s, " 1 \n 9 \nREADY\n");
}
