use super::*;

#[test]
fn test_breaking_out_of_loop_with_goto() {
    let mut r = Runtime::default();
    let s = exec(
        &mut r,
        &[
            "10fory=1to2",
            "20forx=8to9",
            "30printy;x",
            "40goto60",
            "50next",
            "60nexty",
            "run",
        ],
    );
    assert_eq!(s, " 1  8 \n 2  8 \nREADY\n");
}

#[test]
fn test_step_is_evaluated_after_assignment() {
    let mut r = Runtime::default();
    let s = exec(&mut r, &["I=1:FOR I=3 TO 9 STEP I:PRINT I;:NEXT"]);
    assert_eq!(s, " 3  6  9 \n");
}

#[test]
fn test_negative_step() {
    let mut r = Runtime::default();
    let s = exec(&mut r, &["FOR I=3 TO 1 STEP -1:PRINT I;:NEXT I"]);
    assert_eq!(s, " 3  2  1 \n");
}

#[test]
fn test_fractional_step() {
    let mut r = Runtime::default();
    let s = exec(&mut r, &["FOR I=0 TO 1 STEP .5:PRINT I;:NEXT"]);
    assert_eq!(s, " 0  0.5  1 \n");
}

#[test]
fn test_next_without_for() {
    let mut r = Runtime::default();
    let s = exec(&mut r, &["NEXT"]);
    assert_eq!(s, "WHAT?\n?NEXT\n");
}

#[test]
fn test_named_next_closes_inner_loops() {
    let mut r = Runtime::default();
    let s = exec(
        &mut r,
        &[
            "10 FOR I=1 TO 2",
            "20 FOR J=1 TO 5",
            "30 PRINT I;J;",
            "40 NEXT I",
            "50 NEXT J",
            "RUN",
        ],
    );
    assert_eq!(s, " 1  1  2  1 \nWHAT?\n 50  ?NEXT J\nREADY\n");
}

#[test]
fn test_reentered_loop_replaces_itself() {
    let mut r = Runtime::default();
    let s = exec(
        &mut r,
        &["10 N=N+1", "20 FOR I=1 TO 2", "30 IF N<70 THEN GOTO 10", "40 PRINT N", "RUN"],
    );
    assert_eq!(s, " 70 \nREADY\n");
}
