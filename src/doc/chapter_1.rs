/*!
# Expressions and Variables

GOTO BASIC has exactly one type of data: the 32-bit signed integer. There
are no strings, no floating point values and no arrays.

Variable names consist of an ASCII alphabetic character followed by
optional ASCII alphanumeric characters. Names are case sensitive and
keywords are upper case, so `COUNT` and `count` are different variables.

```text
LET A = 1
LET TOTAL2 = A + 1
```

A variable exists once a `LET` or `INPUT` naming it has been parsed. Its
value starts at 0. Reading a variable nobody declared is an
`UNDEFINED VARIABLE` error.

Every read of a variable counts as a use. Assigning does not count, but
receiving a value from `INPUT` does. The `VARS` command and the
statistics tree show the counts from the most recent run.

Literals are decimal integers. A minus sign directly in front of digits
is part of the literal, there is no unary negation. `-3` is the
number negative three, and `A - -3` subtracts negative three from `A`.
Negating a variable is written `0 - A`.

GOTO BASIC supports the following operators, listed in order of precedence.

| Precedence | Operators | Meaning |
|-|-|-|
| 3 | ** | Raise to a power |
| 2 | * / MOD | Multiplication, division and modulo |
| 1 | + - | Addition and subtraction |

Operators of the same precedence are evaluated left to right, except `**`
which is evaluated right to left. Parentheses group as usual.

```text
PRINT 3 + 2 * 4
11
PRINT (3 + 2) * 4
20
PRINT 2 ** 3 ** 2
512
```

Division truncates toward zero. `MOD` starts from the remainder of that
division. A negative divisor is always added to it once, and a negative
remainder from a positive divisor is raised by the divisor, so
`6 MOD -3` is -3 rather than 0.
Dividing by zero with either one is a `DIVISION BY ZERO` error.

```text
PRINT 7 / 2
3
PRINT -7 MOD 3
2
PRINT 7 MOD -3
-2
```

Addition, subtraction and multiplication wrap around at 32 bits. Raising
to a power is computed in floating point, so results beyond the integer
range are clamped to the largest or smallest integer and negative
exponents yield 0.

Comparisons only appear in `IF` and are one of `=`, `>` and `<`.

*/
