/*!
# Statements

Statements on one line are separated by `:`. The short form of each
keyword is shown after it; any longer prefix ending in `.` works too.
*/

pub mod CLS {
    /*!
    ## `CLS` Clears the screen and the graphics.
    */
}

pub mod CONT {
    /*!
    ## `CONT` `C.` Continues after `STOP` or CTRL-C.
    Editing the program in between makes `CONT` fail with `HOW?`.
    */
}

pub mod DATA {
    /*!
    ## `DATA <constant>[,<constant>...]` `D.`
    Values for `READ`. Strings may be unquoted. `DATA` lines are skipped
    when the program runs through them.
    */
}

pub mod END {
    /*!
    ## `END` `E.` Stops the program.
    Running past the last line does the same.
    */
}

pub mod FOR {
    /*!
    ## `FOR <variable>=<start> TO <end> [STEP <increment>]` `F.` `S.`
    Starts a loop closed by `NEXT`. The body always runs at least once.
    `<end>` and `<increment>` are evaluated after `<variable>` is set, so
    `FOR I=3 TO 9 STEP I` steps by 3.
    ```text
    FOR I=10 TO 1 STEP -3:PRINT I;:NEXT
     10  7  4  1
    ```
    */
}

pub mod GOSUB {
    /*!
    ## `GOSUB <line number>` `GOS.`
    Runs a subroutine until `RETURN`. The line must exist or `HOW?` is
    reported. Subroutines may nest 256 deep.
    */
}

pub mod GOTO {
    /*!
    ## `GOTO <line number>` `G.`
    Continues at the line. The line number may be an expression.
    ```text
    10 GOTO 30
    20 PRINT "THIS WILL NOT PRINT"
    30 PRINT "THIS WILL PRINT"
    ```
    */
}

pub mod IF {
    /*!
    ## `IF <expression> THEN <statements>` `IF <expression> GOTO <line>`
    The rest of the line runs only when the expression is not zero.
    A line number alone after `THEN` is a `GOTO`.
    ```text
    IF A=1 THEN 100
    IF A$=NO THEN PRINT "BYE":END
    ```
    */
}

pub mod INPUT {
    /*!
    ## `INPUT ["<prompt>";]<variable>[,<variable>...]` `IN.`
    Prints `? ` and waits for a value for each variable. A number that
    cannot be stored prints `HOW?` and asks again. Typing the name of a
    variable enters its value.
    */
}

pub mod LET {
    /*!
    ## `[LET] <variable>=<expression>`
    The word `LET` is optional.
    */
}

pub mod LIST {
    /*!
    ## `LIST [<line number>]` `L.`
    Shows the program from the line on, waiting for a key after every
    twelve lines.
    */
}

pub mod LOAD {
    /*!
    ## `LOAD "<file>"` `MERGE "<file>"`
    `LOAD` replaces the program with the one in the file; `MERGE` adds
    its lines to the current program. Every line in the file must be
    numbered.
    */
}

pub mod NEW {
    /*!
    ## `NEW` Erases the program and all variables.
    */
}

pub mod NEXT {
    /*!
    ## `NEXT [<variable>]` `N.`
    Closes the innermost `FOR`, or the loop of `<variable>` after
    discarding the loops inside it.
    */
}

pub mod ON {
    /*!
    ## `ON <expression> GOTO|GOSUB <line>[,<line>...]`
    Jumps to the nth line of the list. Out of range values continue with
    the next statement.
    */
}

pub mod PRINT {
    /*!
    ## `PRINT [AT <position>,] [TAB(<column>)] [<items>]` `P.` `A.` `T.`
    A comma moves to the next 15 column zone, a semicolon keeps the
    cursor where it is. `AT` places the cursor at `row*64+column`.
    ```text
    PRINT 1,2;3
     1              2  3
    ```
    */
}

pub mod READ {
    /*!
    ## `READ <variable>[,<variable>...]` `REA.`
    Takes the next values from the `DATA` statements of the program.
    Running out is a `WHAT?`.
    */
}

pub mod REM {
    /*!
    ## `REM <anything>` The rest of the line is a remark.
    */
}

pub mod RESTORE {
    /*!
    ## `RESTORE` `REST.` `READ` starts over with the first `DATA`.
    */
}

pub mod RETURN {
    /*!
    ## `RETURN` `RET.` Continues after the last `GOSUB`.
    */
}

pub mod RUN {
    /*!
    ## `RUN [<line number>]` `R.`
    Clears the variables and runs the program.
    */
}

pub mod SAVE {
    /*!
    ## `SAVE "<file>"` Writes the program as text.
    */
}

pub mod STOP {
    /*!
    ## `STOP` `ST.` Prints `BREAK AT <line>`. `CONT` resumes.
    */
}
