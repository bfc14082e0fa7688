use crate::foundation::core::{BezPath, Point};

/// Interpret path mini-language text into absolute geometry.
///
/// Recognized commands: `M`/`m`, `L`/`l`, `H`/`h`, `V`/`v`, `C`/`c`,
/// `Z`/`z`. Each occurrence consumes a fixed arity of numeric operands,
/// separated by whitespace and/or commas; lowercase variants accumulate from
/// the current point. `Z` closes the subpath and returns the current point
/// to the subpath start.
///
/// The scan never aborts: unrecognized letters are skipped, and a command
/// with malformed or missing operands is dropped on its own while
/// interpretation continues from the next token. An input with no usable
/// commands yields an empty path, which rasterizes to nothing.
pub fn interpret_path_data(data: &str) -> BezPath {
    let mut scan = Scanner::new(data);
    let mut out = BezPath::new();

    let mut current = Point::ZERO;
    let mut subpath_start = Point::ZERO;
    let mut in_subpath = false;

    while let Some(cmd) = scan.next_command() {
        let relative = cmd.is_ascii_lowercase();
        match cmd.to_ascii_uppercase() {
            'M' => {
                let Some((x, y)) = scan.next_pair() else {
                    drop_command(cmd);
                    continue;
                };
                let p = if relative {
                    Point::new(current.x + x, current.y + y)
                } else {
                    Point::new(x, y)
                };
                out.move_to(p);
                current = p;
                subpath_start = p;
                in_subpath = true;
            }
            'L' => {
                let Some((x, y)) = scan.next_pair() else {
                    drop_command(cmd);
                    continue;
                };
                if !in_subpath {
                    drop_command(cmd);
                    continue;
                }
                let p = if relative {
                    Point::new(current.x + x, current.y + y)
                } else {
                    Point::new(x, y)
                };
                out.line_to(p);
                current = p;
            }
            'H' => {
                let Some(x) = scan.next_number() else {
                    drop_command(cmd);
                    continue;
                };
                if !in_subpath {
                    drop_command(cmd);
                    continue;
                }
                let p = Point::new(if relative { current.x + x } else { x }, current.y);
                out.line_to(p);
                current = p;
            }
            'V' => {
                let Some(y) = scan.next_number() else {
                    drop_command(cmd);
                    continue;
                };
                if !in_subpath {
                    drop_command(cmd);
                    continue;
                }
                let p = Point::new(current.x, if relative { current.y + y } else { y });
                out.line_to(p);
                current = p;
            }
            'C' => {
                let Some((x1, y1)) = scan.next_pair() else {
                    drop_command(cmd);
                    continue;
                };
                let Some((x2, y2)) = scan.next_pair() else {
                    drop_command(cmd);
                    continue;
                };
                let Some((x, y)) = scan.next_pair() else {
                    drop_command(cmd);
                    continue;
                };
                if !in_subpath {
                    drop_command(cmd);
                    continue;
                }
                let (cp1, cp2, end) = if relative {
                    (
                        Point::new(current.x + x1, current.y + y1),
                        Point::new(current.x + x2, current.y + y2),
                        Point::new(current.x + x, current.y + y),
                    )
                } else {
                    (Point::new(x1, y1), Point::new(x2, y2), Point::new(x, y))
                };
                out.curve_to(cp1, cp2, end);
                current = end;
            }
            'Z' => {
                if !in_subpath {
                    continue;
                }
                out.close_path();
                current = subpath_start;
            }
            _ => {
                // Unrecognized command letter: skip it and keep scanning.
                tracing::trace!(command = %cmd, "skipping unrecognized path command");
            }
        }
    }

    out
}

fn drop_command(cmd: char) {
    tracing::trace!(command = %cmd, "dropping path command with malformed operands");
}

/// Left-to-right token scanner over path data bytes.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(data: &'a str) -> Self {
        Self {
            bytes: data.as_bytes(),
            pos: 0,
        }
    }

    fn skip_separators(&mut self) {
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if b.is_ascii_whitespace() || b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Advance to the next ASCII letter and return it.
    ///
    /// Bytes that are neither separators nor letters (stray operands from a
    /// dropped command, garbage) are consumed one at a time so a single bad
    /// token can never stall the scan.
    fn next_command(&mut self) -> Option<char> {
        loop {
            self.skip_separators();
            let b = *self.bytes.get(self.pos)?;
            self.pos += 1;
            if b.is_ascii_alphabetic() {
                return Some(b as char);
            }
        }
    }

    /// Scan one numeric operand. Restores the position and returns `None`
    /// when the next token is not a number, so a following command letter is
    /// left in place for the main loop.
    fn next_number(&mut self) -> Option<f64> {
        self.skip_separators();
        let start = self.pos;
        let mut i = self.pos;

        if i < self.bytes.len() && matches!(self.bytes[i], b'+' | b'-') {
            i += 1;
        }
        let mut digits = 0;
        while i < self.bytes.len() && self.bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
        if i < self.bytes.len() && self.bytes[i] == b'.' {
            i += 1;
            while i < self.bytes.len() && self.bytes[i].is_ascii_digit() {
                i += 1;
                digits += 1;
            }
        }
        if digits == 0 {
            self.pos = start;
            return None;
        }
        // Exponent suffix; only consumed when complete.
        if i < self.bytes.len() && matches!(self.bytes[i], b'e' | b'E') {
            let mut j = i + 1;
            if j < self.bytes.len() && matches!(self.bytes[j], b'+' | b'-') {
                j += 1;
            }
            let exp_start = j;
            while j < self.bytes.len() && self.bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > exp_start {
                i = j;
            }
        }

        let text = std::str::from_utf8(&self.bytes[start..i]).ok()?;
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => {
                self.pos = i;
                Some(v)
            }
            _ => {
                self.pos = start;
                None
            }
        }
    }

    fn next_pair(&mut self) -> Option<(f64, f64)> {
        let x = self.next_number()?;
        let y = self.next_number()?;
        Some((x, y))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/markup/path_data.rs"]
mod tests;
