/*!
# Errors

Every error stops a load or a run. An error from a numbered line names the
line, and errors inside an expression also carry the columns of the
offending text, counted from the start of the statement.

```text
20 PRINT 10 / A
RUN
DIVISION BY ZERO IN 20 (9..10); DIVIDED BY ZERO
```

| Error | Raised when |
|-|-|
| `SYNTAX ERROR` | A statement doesn't match its form, for example `IF` without `THEN` |
| `TOKEN ERROR` | An expression contains a character that isn't part of the language |
| `UNDEFINED VARIABLE` | An expression reads a variable that was never declared |
| `UNDEFINED LINE` | A jump targets a line that doesn't exist, or a missing line is deleted |
| `INVALID EXPRESSION` | Unknown keyword, empty statement, or unbalanced parentheses |
| `INVALID LINE NUMBER` | A program line lacks a number, or numbers don't increase in a file |
| `DIVISION BY ZERO` | The right side of `/` or `MOD` is zero |
| `MISSING OPERAND` | An operator or `=` has nothing on one side |
| `MISSING OPERATOR` | Two operands appear with nothing between them |
| `MISSING END` | A program file has no `END` statement |

`TYPE ERROR`, `LABEL REDEFINITION` and `END WITHOUT IF` are reserved.
Nothing in the language raises them.

Numbers are the second class of error. They are not part of the table
above because they come from converting text to an integer:

| Error | Raised when |
|-|-|
| `NUMBER OUT OF RANGE` | A literal or input doesn't fit in 32 bits |
| `INVALID NUMBER` | The answer to `INPUT` isn't a decimal integer |

*/
