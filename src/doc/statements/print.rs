/*!
# `PRINT <expression>`

## Purpose
Prints the value of one expression followed by a newline.

## Example
```text
PRINT 2 ** 3 ** 2
512
```

*/
