/*!
# `END`

## Purpose
Immediately and unconditionally stop running the program
and return to the command prompt.

## Remarks
Variables are left intact for inspection with `VARS`.
Every program must contain at least one `END` to be loaded from a file.

## Example
```text
10 PRINT 1
20 END
30 PRINT 2
RUN
1
```

*/
