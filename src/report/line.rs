/// Rule width used for the banner around the report title
pub const DOUBLE_LINE_LENGTH: usize = 47;

/// Rule width used around every section table and above the footer URL
pub const SINGLE_LINE_LENGTH: usize = 80;

pub const DOUBLE_LINE_CHAR: char = '=';
pub const SINGLE_LINE_CHAR: char = '-';

/// Build a horizontal rule of `length + 1` copies of `ch`, newline-terminated.
pub fn draw_line(ch: char, length: usize) -> String {
    let mut line: String = std::iter::repeat(ch).take(length + 1).collect();
    line.push('\n');
    line
}

pub fn double_line() -> String {
    draw_line(DOUBLE_LINE_CHAR, DOUBLE_LINE_LENGTH)
}

pub fn single_line() -> String {
    draw_line(SINGLE_LINE_CHAR, SINGLE_LINE_LENGTH)
}
