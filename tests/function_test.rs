mod common;
use basic::mach::{Display, Runtime};
use common::*;

#[test]
fn test_fn_abs_int() {
    let mut r = Runtime::default();
    r.enter("PRINT ABS(-3);A.(4);INT(-2.5);I.(2.7)");
    assert_eq!(exec(&mut r), " 3  4 -3  2 \n");
}

#[test]
fn test_fn_chr() {
    let mut r = Runtime::default();
    r.enter("PRINT CHR$(65);CHR$(66)");
    assert_eq!(exec(&mut r), "AB\n");
    r.enter("PRINT CHR$(300)");
    assert_eq!(exec(&mut r), "HOW?\nPRINT ?CHR$(300)\n");
}

#[test]
fn test_fn_rnd() {
    let mut r = Runtime::default();
    for _ in 0..20 {
        r.enter("R=RND(6):PRINT (R>=1)*(R<=6);R=INT(R)");
        assert_eq!(exec(&mut r), " 1  1 \n");
        r.enter("R=R.(0):PRINT (R>=0)*(R<1)");
        assert_eq!(exec(&mut r), " 1 \n");
    }
}

#[test]
fn test_fn_mem() {
    let mut r = Runtime::default();
    r.enter("PRINT MEM");
    assert_eq!(exec(&mut r), " 3583 \n");
    r.enter("10 PRINT 1");
    r.enter("PRINT M.");
    assert_eq!(exec(&mut r), " 3572 \n");
    r.enter("20 REM");
    r.enter("PRINT MEM");
    assert_eq!(exec(&mut r), " 3565 \n");
}

#[test]
fn test_graphics() {
    let mut r = Runtime::default();
    r.enter("SET(3,4):PRINT POINT(3,4);POINT(4,4)");
    assert_eq!(exec(&mut r), " 1  0 \n");
    assert!(r.display().point(3, 4));
    r.enter("R.(3,4):PRINT P.(3,4)");
    assert_eq!(exec(&mut r), " 0 \n");
    r.enter("S.(127,47):CLS:PRINT POINT(127,47)");
    assert_eq!(exec(&mut r), " 0 \n");
    r.enter("SET(128,0)");
    assert_eq!(exec(&mut r), "HOW?\n?SET(128,0)\n");
}

#[test]
fn test_print_zones() {
    let mut r = Runtime::default();
    r.enter("PRINT 1,2;3");
    assert_eq!(exec(&mut r), " 1              2  3 \n");
    r.enter(r#"PRINT "A","B","#);
    assert_eq!(exec(&mut r), format!("A{}B{}\n", " ".repeat(14), " ".repeat(14)));
}

#[test]
fn test_print_tab_and_at() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT TAB(5);"X""#);
    assert_eq!(exec(&mut r), "     X\n");
    r.enter(r#"PRINT "AB";TAB(1);"X""#);
    assert_eq!(exec(&mut r), "ABX\n");
    r.enter(r#"PRINT AT 70,TAB(10);"X";"#);
    assert_eq!(exec(&mut r), "    X\n");
    r.enter(r#"PRINT AT 1024,1"#);
    assert_eq!(exec(&mut r), "HOW?\nPRINT AT ?1024,1\n");
}
