/*!
# Introductory Tutorial for GOTO BASIC

Begin by opening a terminal and running the executable. If you get the
following, you have achieved success and are ready for this tutorial.
Type CTRL-D or `QUIT` to exit.
<pre><code>&nbsp;  GOTO BASIC
&nbsp;  READY.
&nbsp;> █
</code></pre>

When you see the `READY.` prompt, GOTO BASIC is ready to accept a statement.
Keywords are upper case. For this tutorial, I'll mark lines that you type
with a "`>`".

<pre><code>&nbsp;> LET A = 6
&nbsp;> PRINT A * 7
&nbsp;  42
</code></pre>

Entering a statement which executes immediately is called direct mode.
Only `LET`, `PRINT` and `INPUT` work in direct mode. To do anything more
interesting, put statements in a program by giving each one a line number.

<pre><code>&nbsp;> 10 PRINT A * 7
&nbsp;> 20 END
&nbsp;> LIST
&nbsp;  10 PRINT A * 7
&nbsp;  20 END
&nbsp;> RUN
&nbsp;  <b>UNDEFINED VARIABLE IN 10 (6..7); A IS NOT DEFINED</b>
</code></pre>

`RUN` clears every variable first, so `A` from direct mode is gone. To edit
a line, type the line number and press TAB. The line will be loaded into
the input buffer for you to edit. Typing a line number by itself deletes
that line.

<pre><code>&nbsp;> 5<i>{TAB}</i>
&nbsp;> 5 LET A = 6
&nbsp;> RUN
&nbsp;  42
</code></pre>

Programs can also be loaded from a file with `LOAD hello.bas`, or named on
the command line. A file must have increasing line numbers and an `END`.

Two commands show what the interpreter sees. `TREE` prints the syntax
tree of every line. `STATS` prints the same tree after a run, with how
often each line ran, how often each `IF` jumped, and how often each
variable was used.

<pre><code>&nbsp;> STATS
&nbsp;  5 LET = 1
&nbsp;      A 1
&nbsp;      6
&nbsp;  10 PRINT 1
&nbsp;      *
&nbsp;          A 1
&nbsp;          7
&nbsp;  20 END 1
</code></pre>

A program that never reaches `END` can be stopped with CTRL-C.

*/
