/*!
# Expressions and Types

Level I has 26 numeric variables named `A` through `Z` and string
variables such as `A$` and `B$`. Numbers are integers until a
calculation needs a fraction or overflows, then they become single
precision floating point.

```text
A=5
B=A/2
PRINT A;B
 5  2.5
```

Quotes are optional when a string is assigned or compared, which is
how programs ask yes or no questions on a machine without much memory.

```text
A$=YES
IF A$=YES THEN PRINT "OK"
OK
```

Any letter can name an array, `A(n)` being the usual one. Arrays need
no `DIM`; they use whatever memory the program leaves free, so the
largest index shrinks as the program grows. `A` and `A(1)` are
different variables.

## Operators
From highest to lowest precedence:

| Operator | Meaning |
|----------|---------|
| `-` | Negation |
| `*` `/` | Multiply and divide |
| `+` `-` | Add and subtract |
| `=` `<>` `<` `<=` `>` `>=` | Comparison |

Comparisons yield 1 for true and 0 for false. There are no logical
operators; `*` acts as AND and `+` acts as OR on comparison results.

```text
IF (A>1)*(A<5) THEN PRINT "BETWEEN"
```

## Printing numbers
Non-negative numbers print with a leading space for the sign and every
number is followed by a space. Values smaller than 0.1 or of a million
and more print in scientific form.

```text
PRINT 1/3;1000000;.01
 0.33333  1E+06  1E-02
```
*/
