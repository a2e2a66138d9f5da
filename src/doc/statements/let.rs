/*!
# `LET <variable> = <expression>`

## Purpose
Assigns the value of an expression to a variable.

## Remarks
The word `LET` is required. The variable is created with a value of 0
when the line is parsed, before the line first runs. Assigning to a
variable does not count as a use of it.

`LET` works in direct mode.

## Example
```text
10 LET A = 5
20 LET B = A * (A + 1)
30 PRINT B
40 END
RUN
30
```

*/
