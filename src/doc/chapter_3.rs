/*!
# Functions
*/

pub mod ABS {
    /*!
    ## `ABS(X)` `A.(X)` Returns the absolute value of X.
    ```text
    PRINT ABS(-3)
     3
    ```
    */
}

pub mod CHR {
    /*!
    ## `CHR$(X)` Returns the character with code X.
    */
}

pub mod INT {
    /*!
    ## `INT(X)` `I.(X)` Returns the largest integer not greater than X.
    ```text
    PRINT INT(-2.5)
    -3
    ```
    */
}

pub mod MEM {
    /*!
    ## `MEM` `M.` Returns the number of bytes free.
    */
}

pub mod POINT {
    /*!
    ## `POINT(X,Y)` `P.(X,Y)` Returns 1 if the pixel is lit.
    X runs 0 to 127 and Y runs 0 to 47.
    */
}

pub mod RESET {
    /*!
    ## `RESET(X,Y)` `R.(X,Y)` Turns a pixel off.
    */
}

pub mod RND {
    /*!
    ## `RND(X)` `R.(X)`
    `RND(0)` returns a number from 0 up to but not including 1.
    `RND(N)` returns a whole number from 1 to N.
    */
}

pub mod SET {
    /*!
    ## `SET(X,Y)` `S.(X,Y)` Turns a pixel on.
    */
}

pub mod TAB {
    /*!
    ## `TAB(X)` `T.(X)` Moves the cursor to column X when printed.
    */
}
