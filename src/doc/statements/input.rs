/*!
# `INPUT <variable>`

## Purpose
Suspends execution and awaits a whole number from the terminal.

## Remarks
The prompt is the variable name followed by `?`. Anything other than a
decimal integer, optionally signed, stops the program with an
`INVALID NUMBER` error. Receiving a value counts as a use of the variable.

## Example
```text
10 INPUT AGE
20 PRINT AGE + 1
30 END
RUN
AGE? 41
42
```

*/
