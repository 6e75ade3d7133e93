mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_array_basics() {
    let mut r = Runtime::default();
    enter_all(
        &mut r,
        &["10 FOR I=0 TO 4:A(I)=I*I:NEXT I", "20 PRINT A(3);A(4);A(5)", "RUN"],
    );
    assert_eq!(exec(&mut r), " 9  16  0 \nREADY\n");
}

#[test]
fn test_array_capacity_follows_mem() {
    let mut r = Runtime::default();
    r.enter("A(895)=1");
    assert_eq!(exec(&mut r), "SORRY\n?A(895)=1\n");
    r.enter("A(894)=1:PRINT A(894)");
    assert_eq!(exec(&mut r), " 1 \n");
    r.enter("10 REM");
    r.enter("A(894)=1");
    assert_eq!(exec(&mut r), "SORRY\n?A(894)=1\n");
}

#[test]
fn test_array_negative_index() {
    let mut r = Runtime::default();
    r.enter("PRINT A(-1)");
    assert_eq!(exec(&mut r), "SORRY\nPRINT ?A(-1)\n");
}

#[test]
fn test_array_index_truncates() {
    let mut r = Runtime::default();
    r.enter("A(2.7)=5:PRINT A(2)");
    assert_eq!(exec(&mut r), " 5 \n");
}

#[test]
fn test_arrays_under_any_letter() {
    let mut r = Runtime::default();
    r.enter("B(2)=7:B=3:A(2)=1:PRINT B(2);B;A(2)");
    assert_eq!(exec(&mut r), " 7  3  1 \n");
}
