/*!
# Errors

Level I reports every problem with one of three words. The line is
echoed underneath with a `?` where the trouble was found.

```text
10 PRINT 1/0
RUN
HOW?
 10  PRINT 1?/0
```

## `WHAT?`
The line could not be understood. Misspelled keywords, missing
parentheses, functions with the wrong number of arguments, `NEXT`
without `FOR`, `RETURN` without `GOSUB` and `READ` past the last `DATA`
all report `WHAT?`.

## `HOW?`
The line was understood but cannot be carried out: division by zero,
`GOTO` or `GOSUB` to a line that does not exist, a number out of range,
a long string stored in a numeric variable, `CONT` with nothing to
continue and files that cannot be read or written.

## `SORRY`
Out of memory. The program is too long, an array index does not fit in
the memory left, or `FOR` and `GOSUB` nest too deep.

## `BREAK AT <line>`
Not an error. `STOP` or CTRL-C halted the program and `CONT` will
resume it.
*/
