use super::*;

fn parse_str(s: &str) -> Vec<Statement> {
    Line::parse(s).unwrap().unwrap().statements().to_vec()
}

fn parse_one(s: &str) -> Statement {
    let mut v = parse_str(s);
    assert_eq!(v.len(), 1);
    v.pop().unwrap()
}

fn parse_err(s: &str) -> Error {
    Line::parse(s).unwrap_err()
}

fn plain(s: &str) -> Ident {
    Ident::Plain(s.into())
}

fn assigned(statement: Statement) -> Expression {
    match statement {
        Statement::Let(_, Expression::Assign(_, _, value)) => *value,
        other => panic!("not an assignment: {:?}", other),
    }
}

#[test]
fn test_implicit_let() {
    let answer = Statement::Let(
        0..1,
        Expression::Assign(
            1..2,
            Box::new(Expression::Identifier(0..1, plain("A"))),
            Box::new(Expression::Literal(2..4, Literal::Integer(12))),
        ),
    );
    assert_eq!(parse_one("A=12"), answer);
    assert_eq!(
        assigned(parse_one("LET A=12")),
        Expression::Literal(6..8, Literal::Integer(12))
    );
}

#[test]
fn test_precedence() {
    let answer = Expression::Binary(
        3..4,
        Box::new(Expression::Literal(2..3, Literal::Integer(1))),
        Operator::Plus,
        Box::new(Expression::Binary(
            5..6,
            Box::new(Expression::Literal(4..5, Literal::Integer(2))),
            Operator::Multiply,
            Box::new(Expression::Literal(6..7, Literal::Integer(3))),
        )),
    );
    assert_eq!(assigned(parse_one("X=1+2*3")), answer);
}

#[test]
fn test_unary_minus() {
    let value = assigned(parse_one("X=-2*3"));
    assert!(matches!(
        value,
        Expression::Binary(_, _, Operator::Multiply, _)
    ));
}

#[test]
fn test_line_number_alone_deletes() {
    let line = Line::parse("10").unwrap().unwrap();
    assert!(line.is_direct());
    assert_eq!(line.statements(), &[Statement::Delete(0..0, 10)]);
}

#[test]
fn test_line_number_out_of_range() {
    let e = parse_err("40000 PRINT");
    assert_eq!(e.code(), ErrorCode::InvalidLineNumber);
    assert_eq!(e.kind(), ErrorKind::Parse);
}

#[test]
fn test_print_separators() {
    let answer = Statement::Print(
        0..5,
        Print {
            at: None,
            tab: None,
            items: vec![
                Expression::Identifier(6..7, plain("A")),
                Expression::Call(7..8, Builtin::Zone, vec![]),
                Expression::Identifier(8..9, plain("B")),
            ],
            newline: false,
        },
    );
    assert_eq!(parse_one("PRINT A,B;"), answer);
    match parse_one("PRINT") {
        Statement::Print(_, print) => {
            assert!(print.items.is_empty());
            assert!(print.newline);
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_print_at_and_tab() {
    match parse_one("P.A.64;\"X\"") {
        Statement::Print(_, print) => {
            assert!(matches!(
                print.at,
                Some(Expression::Literal(_, Literal::Integer(64)))
            ));
            assert_eq!(print.items.len(), 1);
        }
        other => panic!("{:?}", other),
    }
    match parse_one("PRINT TAB(5);\"X\"") {
        Statement::Print(_, print) => {
            assert!(print.tab.is_some());
            assert_eq!(print.items.len(), 1);
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_overloaded_abbreviation() {
    assert!(matches!(
        assigned(parse_one("X=R.(9)")),
        Expression::Call(_, Builtin::Rnd, _)
    ));
    match parse_one("R.(3,4)") {
        Statement::Expression(_, Expression::Call(_, Builtin::Reset, args)) => {
            assert_eq!(args.len(), 2)
        }
        other => panic!("{:?}", other),
    }
    assert!(matches!(parse_one("R."), Statement::Run(_, None)));
    assert!(matches!(parse_one("S.(1,2)"), Statement::Expression(..)));
}

#[test]
fn test_zero_arity_without_parentheses() {
    assert_eq!(
        assigned(parse_one("X=MEM")),
        Expression::Call(2..5, Builtin::Mem, vec![])
    );
    assert!(matches!(
        assigned(parse_one("X=M.")),
        Expression::Call(_, Builtin::Mem, _)
    ));
}

#[test]
fn test_wrong_arity() {
    let e = parse_err("PRINT ABS(1,2)");
    assert_eq!(e.code(), ErrorCode::WrongArity);
    assert_eq!(e.column(), 6..9);
}

#[test]
fn test_if_then_line_number() {
    match parse_one("IF A=1 THEN 100") {
        Statement::If(_, _, then) => {
            assert_eq!(then.len(), 1);
            assert!(matches!(
                then[0],
                Statement::Goto(_, Expression::Literal(_, Literal::Integer(100)))
            ));
        }
        other => panic!("{:?}", other),
    }
    assert!(matches!(
        parse_one("IF A=1 GOTO 100"),
        Statement::If(_, _, ref then) if matches!(then[0], Statement::Goto(..))
    ));
}

#[test]
fn test_if_requires_then_before_line_number() {
    let e = parse_err("10 IF A=1 100");
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.line_number(), Some(10));
    assert_eq!(e.report(), "WHAT?\n 10  IF A=1 ?100");
}

#[test]
fn test_if_chain_runs_to_end_of_line() {
    match parse_one("IF A=1 THEN PRINT 1:PRINT 2") {
        Statement::If(_, _, then) => assert_eq!(then.len(), 2),
        other => panic!("{:?}", other),
    }
    match parse_one("IF A THEN 20:PRINT 2") {
        Statement::If(_, _, then) => assert_eq!(then.len(), 2),
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_for_step() {
    let answer = Statement::For(
        0..3,
        plain("I"),
        Expression::Literal(6..7, Literal::Integer(1)),
        Expression::Literal(11..13, Literal::Integer(10)),
        Some(Expression::Literal(19..20, Literal::Integer(2))),
    );
    assert_eq!(parse_one("FOR I=1 TO 10 STEP 2"), answer);
    assert!(matches!(
        parse_one("FOR I=1 TO 10"),
        Statement::For(_, _, _, _, None)
    ));
}

#[test]
fn test_next() {
    assert_eq!(parse_one("NEXT"), Statement::Next(0..4, None));
    assert_eq!(parse_one("NEXT I"), Statement::Next(0..4, Some(plain("I"))));
}

#[test]
fn test_on_gosub() {
    match parse_one("ON X GOSUB 100,200") {
        Statement::On(_, _, targets, is_gosub) => {
            assert_eq!(targets.len(), 2);
            assert!(is_gosub);
        }
        other => panic!("{:?}", other),
    }
    assert_eq!(parse_err("ON X 100").code(), ErrorCode::SyntaxError);
}

#[test]
fn test_unknown_identifier() {
    let e = parse_err("PRINT CHRIS");
    assert_eq!(e.code(), ErrorCode::UnknownIdentifier);
    assert_eq!(e.report(), "WHAT?\nPRINT ?CHRIS");
}

#[test]
fn test_unquoted_string_assignment() {
    assert_eq!(
        assigned(parse_one("A$=RADIO SHACK")),
        Expression::Literal(3..14, Literal::String("RADIO SHACK".into()))
    );
    assert_eq!(parse_err("A=RADIO").code(), ErrorCode::UnknownIdentifier);
}

#[test]
fn test_input_list() {
    let answer = Statement::Input(
        0..5,
        vec![
            Expression::Literal(6..12, Literal::String("NAME".into())),
            Expression::Identifier(13..15, Ident::String("A$".into())),
        ],
        true,
    );
    assert_eq!(parse_one("INPUT \"NAME\";A$"), answer);
    match parse_one("INPUT A,B") {
        Statement::Input(_, items, _) => assert_eq!(items.len(), 2),
        other => panic!("{:?}", other),
    }
    assert_eq!(parse_err("INPUT \"X\"").code(), ErrorCode::SyntaxError);
}

#[test]
fn test_array_target() {
    match parse_one("A(1+2)=5") {
        Statement::Let(_, Expression::Assign(_, target, _)) => {
            assert!(matches!(*target, Expression::ArrayAccess(ref col, _, _) if *col == (0..6)))
        }
        other => panic!("{:?}", other),
    }
    assert_eq!(parse_err("A$(1)=2").code(), ErrorCode::SyntaxError);
}

#[test]
fn test_data_and_read() {
    assert_eq!(
        parse_one("DATA 1,\"X\",Y"),
        Statement::Data(
            0..4,
            vec![
                Expression::Literal(5..6, Literal::Integer(1)),
                Expression::Literal(7..10, Literal::String("X".into())),
                Expression::Literal(11..12, Literal::String("Y".into())),
            ]
        )
    );
    match parse_one("READ A,B(2)") {
        Statement::Read(_, targets) => assert_eq!(targets.len(), 2),
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_file_statements() {
    assert!(matches!(
        parse_one("LOAD \"prog.bas\""),
        Statement::Load(_, Expression::Literal(_, Literal::String(_)))
    ));
    assert!(matches!(
        parse_one("SAVE PROG"),
        Statement::Save(_, Expression::Literal(_, Literal::String(_)))
    ));
}

#[test]
fn test_missing_parenthesis() {
    let e = parse_err("PRINT (1");
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.report(), "WHAT?\nPRINT (1?");
}

#[test]
fn test_statement_chain() {
    let v = parse_str("A=1:B=2::PRINT A+B");
    assert_eq!(v.len(), 3);
    assert_eq!(v[2].column(), 9..14);
}
