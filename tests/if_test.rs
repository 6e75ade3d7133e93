mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_if_then() {
    let mut r = Runtime::default();
    r.enter(r#"if 1 then p."one""#);
    assert_eq!(exec(&mut r), "one\n");
    r.enter(r#"if 0 then p."one":p."two""#);
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_if_without_then() {
    let mut r = Runtime::default();
    r.enter("A=2:IF A>1 PRINT A");
    assert_eq!(exec(&mut r), " 2 \n");
}

#[test]
fn test_if_then_line_number() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 IF 1 THEN 30", "20 PRINT 2", "30 PRINT 3", "RUN"]);
    assert_eq!(exec(&mut r), " 3 \nREADY\n");
    enter_all(&mut r, &["10 IF 0 GOTO 30", "RUN"]);
    assert_eq!(exec(&mut r), " 2 \n 3 \nREADY\n");
}

#[test]
fn test_if_continues_after_then_chain() {
    let mut r = Runtime::default();
    enter_all(
        &mut r,
        &["10 FOR I=1 TO 3:IF I=2 THEN PRINT I;", "20 NEXT I", "RUN"],
    );
    assert_eq!(exec(&mut r), " 2 \nREADY\n");
}

#[test]
fn test_if_unquoted_string() {
    let mut r = Runtime::default();
    r.enter("A$=YES:IF A$=YES THEN PRINT 1");
    assert_eq!(exec(&mut r), " 1 \n");
    r.enter("IF A$<>NO THEN PRINT A$");
    assert_eq!(exec(&mut r), "YES\n");
}

#[test]
fn test_if_and_or() {
    let mut r = Runtime::default();
    r.enter("A=3:IF (A>1)*(A<5) THEN PRINT 1");
    assert_eq!(exec(&mut r), " 1 \n");
    r.enter("IF (A<1)+(A>5) THEN PRINT 2");
    assert_eq!(exec(&mut r), "");
}
