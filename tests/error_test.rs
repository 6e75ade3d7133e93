mod common;
use basic::mach::{Runtime, MEM_BASELINE};
use common::*;

#[test]
fn test_what() {
    let mut r = Runtime::default();
    assert!(!r.enter("PRINT CHRIS"));
    assert_eq!(exec(&mut r), "WHAT?\nPRINT ?CHRIS\n");
    r.enter(r#"PRINT "HI"#);
    assert_eq!(exec(&mut r), "WHAT?\nPRINT ?\"HI\n");
    r.enter("PRINT (1");
    assert_eq!(exec(&mut r), "WHAT?\nPRINT (1?\n");
    r.enter("PRINT ABS(1,2)");
    assert_eq!(exec(&mut r), "WHAT?\nPRINT ?ABS(1,2)\n");
    r.enter(r#"PRINT "A"+"B""#);
    assert_eq!(exec(&mut r), "WHAT?\nPRINT \"A\"?+\"B\"\n");
    r.enter("RETURN");
    assert_eq!(exec(&mut r), "WHAT?\n?RETURN\n");
}

#[test]
fn test_how() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 PRINT 1/0", "RUN"]);
    assert_eq!(exec(&mut r), "HOW?\n 10  PRINT 1?/0\nREADY\n");
    enter_all(&mut r, &["10 GOTO 50", "RUN"]);
    assert_eq!(exec(&mut r), "HOW?\n 10  GOTO ?50\nREADY\n");
    r.enter(r#"A="XY""#);
    assert_eq!(exec(&mut r), "HOW?\n?A=\"XY\"\n");
}

#[test]
fn test_direct_errors() {
    let mut r = Runtime::default();
    r.enter("print 1/0");
    assert_eq!(exec(&mut r), "HOW?\nprint 1?/0\n");
    r.enter("print a(3963)");
    assert_eq!(exec(&mut r), "SORRY\nprint ?a(3963)\n");
}

#[test]
fn test_error_after_output() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 PRINT 1;", "20 PRINT 1/0", "RUN"]);
    assert_eq!(exec(&mut r), " 1 \nHOW?\n 20  PRINT 1?/0\nREADY\n");
}

#[test]
fn test_program_too_long() {
    let mut r = Runtime::default();
    let line = format!("10 REM {}", "X".repeat(MEM_BASELINE));
    assert!(!r.enter(&line));
    assert!(exec(&mut r).starts_with("SORRY\n"));
    assert!(r.listing().is_empty());
    assert_eq!(r.mem(), MEM_BASELINE);
}

#[test]
fn test_line_number_out_of_range() {
    let mut r = Runtime::default();
    assert!(!r.enter("40000 PRINT 1"));
    assert!(exec(&mut r).starts_with("WHAT?"));
    assert!(r.listing().is_empty());
}

#[test]
fn test_ok_lines_return_true() {
    let mut r = Runtime::default();
    assert!(r.enter("10 PRINT 1"));
    assert!(r.enter("RUN"));
    assert!(r.enter(""));
}
