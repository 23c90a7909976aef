// src/core/sanitize.rs

/// Decode the entities the sheet export emits: the XML five, `&nbsp;`,
/// and numeric references. Unknown or malformed references pass through.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s!(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        // References are short; don't scan a whole paragraph for ';'
        let semi = tail.bytes().take(12).position(|b| b == b';');
        let decoded = semi.and_then(|end| decode_one(&tail[1..end]).map(|c| (c, end)));

        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_one(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}
