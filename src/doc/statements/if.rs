/*!
# `IF <expression> <comparison> <expression> THEN <line number>`

## Purpose
Jump to a line when a comparison holds.

## Remarks
The comparison is exactly one of `=`, `>` or `<`. There is no `ELSE`;
when the comparison doesn't hold, execution continues with the next line.
If `<line number>` doesn't exist an `UNDEFINED LINE` error will occur.

The statistics tree shows how many times the comparison held and how many
times it did not.

## Example
```text
10 LET A = 10
20 PRINT A
30 LET A = A + 10
40 IF A < 40 THEN 20
50 END
RUN
10
20
30
```

*/
