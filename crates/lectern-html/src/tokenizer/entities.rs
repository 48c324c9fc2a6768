/// Longest reference name we bother looking up (`&#x10FFFF;` is the widest).
const MAX_REFERENCE_LEN: usize = 10;

fn named_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{00A0}'),
        _ => None,
    }
}

fn numeric_reference(body: &str) -> Option<char> {
    let code = if let Some(hex) = body.strip_prefix('x').or_else(|| body.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<u32>().ok()?
    };
    char::from_u32(code).filter(|&c| c != '\0')
}

/// Decode the character references `&amp; &lt; &gt; &quot; &apos; &nbsp;`
/// and `&#NN;` / `&#xHH;`.
///
/// Anything that is not a terminated, recognised reference is kept verbatim,
/// so stray ampersands in URLs survive untouched.
#[must_use]
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest[1..]
            .find(';')
            .filter(|&end| end > 0 && end <= MAX_REFERENCE_LEN)
            .and_then(|end| {
                let body = &rest[1..=end];
                let c = match body.strip_prefix('#') {
                    Some(number) => numeric_reference(number),
                    None => named_reference(body),
                }?;
                Some((c, end + 2))
            });

        match decoded {
            Some((c, consumed)) => {
                out.push(c);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
