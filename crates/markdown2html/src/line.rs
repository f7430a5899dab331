use std::io::{self, BufRead};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub text: String,
    /// 1-based position in the source document.
    pub number: usize,
}

/// Reads newline-delimited records, dropping `\n` and `\r\n` terminators.
///
/// Input that is not valid UTF-8 fails with [`io::ErrorKind::InvalidData`].
pub fn read_lines<R: BufRead>(reader: &mut R) -> io::Result<Vec<LineRecord>> {
    let mut lines = Vec::new();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = reader.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }

        if buffer.ends_with('\n') {
            buffer.pop();

            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }

        lines.push(LineRecord {
            text: buffer.clone(),
            number: lines.len() + 1,
        });
    }

    Ok(lines)
}
