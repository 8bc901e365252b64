use crate::types::RepairAction;

fn is_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\r' | b'\t')
}

fn is_word(b: u8) -> bool {
    (b as char).is_ascii_alphanumeric() || b == b'_'
}

/// Removes `//` to end of line, outside string literals only. Content on the
/// same line before the marker is kept.
fn strip_line_comments(text: &str) -> (String, Vec<RepairAction>) {
    let bytes = text.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut repairs = Vec::new();
    let mut i: usize = 0;
    let mut in_string: Option<u8> = None;
    let mut escape = false;
    while i < bytes.len() {
        let ch = bytes[i];
        if let Some(quote) = in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == b'\\' {
                escape = true;
            } else if ch == quote {
                in_string = None;
            }
            i += 1;
            continue;
        }

        if ch == b'"' || ch == b'\'' {
            in_string = Some(ch);
            out.push(ch);
            i += 1;
            continue;
        }

        if ch == b'/' && i + 1 < bytes.len() && bytes[i + 1] == b'/' {
            let start = i;
            i += 2;
            while i < bytes.len() && bytes[i] != b'\n' && bytes[i] != b'\r' {
                i += 1;
            }
            let mut a = RepairAction::new("strip_line_comment");
            a.at = Some(start);
            repairs.push(a);
            continue;
        }

        out.push(ch);
        i += 1;
    }
    (String::from_utf8_lossy(&out).to_string(), repairs)
}

/// Folds stray literal spellings onto the reader's dialect on whole-word
/// boundaries: `True`/`False`/`None`/`undefined`. Identifier substrings such
/// as `nullable` are never rewritten, and string content is untouched.
fn normalize_literals(text: &str) -> (String, Vec<RepairAction>) {
    let bytes = text.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut repairs = Vec::new();
    let mut i: usize = 0;
    let mut in_string: Option<u8> = None;
    let mut escape = false;
    while i < bytes.len() {
        let ch = bytes[i];
        if let Some(quote) = in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == b'\\' {
                escape = true;
            } else if ch == quote {
                in_string = None;
            }
            i += 1;
            continue;
        }

        if ch == b'"' || ch == b'\'' {
            in_string = Some(ch);
            out.push(ch);
            i += 1;
            continue;
        }

        if (ch as char).is_ascii_alphabetic() || ch == b'_' {
            let start = i;
            i += 1;
            while i < bytes.len() && is_word(bytes[i]) {
                i += 1;
            }
            let word = &text[start..i];
            let mapped = match word {
                "True" => Some("true"),
                "False" => Some("false"),
                "None" => Some("null"),
                "undefined" => Some("null"),
                _ => None,
            };
            if let Some(m) = mapped {
                out.extend_from_slice(m.as_bytes());
                let mut a = RepairAction::new("normalize_literal");
                a.at = Some(start);
                a.note = Some(format!("{word}->{m}"));
                repairs.push(a);
            } else {
                out.extend_from_slice(word.as_bytes());
            }
            continue;
        }

        out.push(ch);
        i += 1;
    }
    (String::from_utf8_lossy(&out).to_string(), repairs)
}

/// Double-quotes a bare word that sits outside string literals and is
/// followed by optional whitespace and a colon. Quoted keys are inside
/// string state and therefore never re-quoted; URL schemes live inside
/// quoted values and are never reached.
fn quote_bare_keys(text: &str) -> (String, Vec<RepairAction>) {
    let bytes = text.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut repairs = Vec::new();
    let mut i: usize = 0;
    let mut in_string: Option<u8> = None;
    let mut escape = false;
    while i < bytes.len() {
        let ch = bytes[i];
        if let Some(quote) = in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == b'\\' {
                escape = true;
            } else if ch == quote {
                in_string = None;
            }
            i += 1;
            continue;
        }

        if ch == b'"' || ch == b'\'' {
            in_string = Some(ch);
            out.push(ch);
            i += 1;
            continue;
        }

        if is_word(ch) {
            let start = i;
            i += 1;
            while i < bytes.len() && is_word(bytes[i]) {
                i += 1;
            }
            let word = &text[start..i];
            let mut j = i;
            while j < bytes.len() && is_ws(bytes[j]) {
                j += 1;
            }
            if bytes.get(j) == Some(&b':') {
                out.push(b'"');
                out.extend_from_slice(word.as_bytes());
                out.push(b'"');
                let mut a = RepairAction::new("quote_bare_key");
                a.at = Some(start);
                a.note = Some(word.to_string());
                repairs.push(a);
            } else {
                out.extend_from_slice(word.as_bytes());
            }
            continue;
        }

        out.push(ch);
        i += 1;
    }
    (String::from_utf8_lossy(&out).to_string(), repairs)
}

/// Rewrites a captured array literal into the reader's dialect. Order
/// matters: comments first, then literal keywords, then bare keys. Every
/// pass is idempotent and leaves string-valued content intact. Structural
/// validation is deferred to the reader.
pub fn repair_literal(raw: &str) -> (String, Vec<RepairAction>) {
    let mut text = raw.to_string();
    let mut repairs: Vec<RepairAction> = Vec::new();

    let (t2, r2) = strip_line_comments(&text);
    if t2 != text {
        text = t2;
        repairs.extend(r2);
    }

    let (t2, r2) = normalize_literals(&text);
    if t2 != text {
        text = t2;
        repairs.extend(r2);
    }

    let (t2, r2) = quote_bare_keys(&text);
    if t2 != text {
        text = t2;
        repairs.extend(r2);
    }

    (text, repairs)
}
