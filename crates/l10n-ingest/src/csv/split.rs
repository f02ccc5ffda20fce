//! Quote-aware splitting for delimiters longer than one byte.

/// Splits `text` into records using a multi-character `delimiter`.
///
/// A double quote at the start of a field groups it (so it may contain the
/// delimiter or line breaks) and `""` inside quotes is a literal quote. A
/// quote anywhere else in a field is kept as an ordinary character. `\n`
/// and `\r\n` end a record. Blank lines are skipped. An unterminated quote
/// runs to the end of the input instead of failing.
pub fn split_delimited(text: &str, delimiter: &str) -> Vec<Vec<String>> {
    debug_assert!(!delimiter.is_empty());
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut has_content = false;
    let mut field_started = false;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if in_quotes {
            if c == '"' {
                // Check for escaped quote ("")
                if matches!(chars.peek(), Some((_, '"'))) {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }
        match c {
            '"' if !field_started => {
                in_quotes = true;
                field_started = true;
                has_content = true;
            }
            '\r' if matches!(chars.peek(), Some((_, '\n'))) => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                if has_content {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
                has_content = false;
                field_started = false;
            }
            _ if text[idx..].starts_with(delimiter) => {
                record.push(std::mem::take(&mut field));
                has_content = true;
                field_started = false;
                let end = idx + delimiter.len();
                while chars.next_if(|(next, _)| *next < end).is_some() {}
            }
            _ => {
                field.push(c);
                has_content = true;
                field_started = true;
            }
        }
    }

    if has_content {
        record.push(field);
        records.push(record);
    }
    records
}
