/*!
# `REM <anything>`

## Purpose
Embeds non-executing remarks into the program source code.

## Remarks
Remarks do nothing except count how often they were passed, which shows
up in the statistics tree.

## Example
```text
10 REM AUTHORED BY ZAPHOD
20 PRINT 42
30 END
RUN
42
```

*/
