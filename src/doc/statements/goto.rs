/*!
# `GOTO <line number>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
If `<line number>` doesn't exist an `UNDEFINED LINE` error will occur.
The target is checked every time the line runs, so deleting a line that
is still the target of a `GOTO` fails only when that `GOTO` is reached.

## Example
```text
10 GOTO 30
20 PRINT 1
30 PRINT 2
40 END
RUN
2
```

*/
