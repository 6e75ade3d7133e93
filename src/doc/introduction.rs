/*!
# Introductory Tutorial for Level I BASIC

Start the executable from a terminal. If you get the following, you are
ready for this tutorial. Type CTRL-D to exit.
<pre><code>&nbsp;  LEVEL I BASIC
&nbsp;  READY
&nbsp;  █
</code></pre>

Stop a running program with CTRL-C. It prints `BREAK AT` and the line
number, and `CONT` picks up where it stopped.

A line typed without a line number runs as soon as you press ENTER.
In this tutorial the lines you type are marked with a "`>`".

<pre><code>&nbsp;> PRINT "HELLO WORLD"
&nbsp;  HELLO WORLD
</code></pre>

Give the line a number and it is stored in the program instead.
`LIST` shows the program and `RUN` starts it from the lowest line.

<pre><code>&nbsp;> 10 FOR I=1 TO 3
&nbsp;> 20 PRINT I;
&nbsp;> 30 NEXT I
&nbsp;> RUN
&nbsp;   1  2  3
&nbsp;  READY
</code></pre>

Typing a line number that already exists replaces that line. Typing the
number alone deletes it.

Level I was built for a 4K machine and every keyword has a short form.
`P.` is `PRINT`, `G.` is `GOTO`, `GOS.` is `GOSUB` and so on. Spaces are
optional, so the crunched `10FORI=1TO3` is the same line as above.

<pre><code>&nbsp;> P.MEM
&nbsp;   3583
</code></pre>

`MEM` is the number of bytes free. Each stored line costs four bytes
plus its text, and array elements take four bytes each out of what is
left.

When something goes wrong the machine answers with one of three words
and echoes the line with a `?` where it gave up.

<pre><code>&nbsp;> P.(1
&nbsp;  WHAT?
&nbsp;  P.(1?
</code></pre>

`WHAT?` means the line could not be understood, `HOW?` means it was
understood but cannot be done and `SORRY` means the machine ran out of
memory.
*/
