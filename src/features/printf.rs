//! Runtime printf-style formatting for templates that are only known at run
//! time, such as the `base56 hash` command line.
//!
//! Arguments arrive as strings. String verbs (`%s`, `%v`, `%q`) use them as
//! is; integer verbs (`%d`, `%b`, `%o`, `%x`, `%X`, `%c`) parse them as signed
//! decimal integers. `%x` and `%X` fall back to a hex dump of the string's
//! bytes when the argument is not a number, and `%q` quotes with Go escapes
//! (`\x01`, `\u00a0`). The `#` flag adds the `0b`, `0`, `0x` or `0X` prefix.
//! Like Go's `fmt`, problems never abort formatting; they are reported inline:
//!
//! | Problem                | Output               |
//! |------------------------|----------------------|
//! | argument not a number  | `%!d(string=abc)`    |
//! | unknown verb           | `%!z(string=abc)`    |
//! | too few arguments      | `%!s(MISSING)`       |
//! | too many arguments     | `%!(EXTRA string=x)` |
//! | `%` at end of template | `%!(NOVERB)`         |

use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    sharp: bool,
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Formats `template`, substituting `args` in order.
///
/// ```
/// use base56::features::printf::sprintf;
///
/// assert_eq!(
///     sprintf("%s:%04X:%08X", &["one", "2", "123456789"]),
///     "one:0002:075BCD15"
/// );
/// ```
pub fn sprintf(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let spec = parse_spec(&mut chars);
        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };

        if verb == '%' {
            out.push('%');
            continue;
        }

        match args.get(next_arg) {
            Some(arg) => {
                next_arg += 1;
                format_arg(&mut out, verb, arg, &spec);
            }
            None => {
                out.push_str("%!");
                out.push(verb);
                out.push_str("(MISSING)");
            }
        }
    }

    if next_arg < args.len() {
        let extra: Vec<String> = args[next_arg..]
            .iter()
            .map(|arg| format!("string={}", arg))
            .collect();
        out.push_str("%!(EXTRA ");
        out.push_str(&extra.join(", "));
        out.push(')');
    }

    out
}

fn parse_spec(chars: &mut Peekable<Chars<'_>>) -> Spec {
    let mut spec = Spec::default();

    while let Some(&c) = chars.peek() {
        match c {
            '#' => spec.sharp = true,
            '-' => spec.minus = true,
            '+' => spec.plus = true,
            ' ' => spec.space = true,
            '0' => spec.zero = true,
            _ => break,
        }
        chars.next();
    }

    spec.width = parse_number(chars);

    if chars.peek() == Some(&'.') {
        chars.next();
        spec.precision = Some(parse_number(chars).unwrap_or(0));
    }

    spec
}

fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut number: Option<usize> = None;

    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        number = Some(
            number
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
    }

    number
}

fn format_arg(out: &mut String, verb: char, arg: &str, spec: &Spec) {
    match verb {
        's' | 'v' => {
            let text: String = match spec.precision {
                Some(p) => arg.chars().take(p).collect(),
                None => arg.to_string(),
            };
            pad_text(out, &text, spec);
        }
        'q' => pad_text(out, &quote(arg), spec),
        'd' | 'b' | 'o' | 'x' | 'X' => match arg.parse::<i128>() {
            Ok(n) => format_integer(out, verb, n, spec),
            Err(_) if verb == 'x' || verb == 'X' => {
                pad_text(out, &hex_dump(arg.as_bytes(), verb == 'X', spec), spec)
            }
            Err(_) => bad_verb(out, verb, arg),
        },
        'c' => match arg
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
        {
            Some(c) => pad_text(out, &c.to_string(), spec),
            None => bad_verb(out, verb, arg),
        },
        _ => bad_verb(out, verb, arg),
    }
}

/// Double-quoted string literal with the escapes of Go's `strconv.Quote`.
fn quote(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\x07' => quoted.push_str("\\a"),
            '\x08' => quoted.push_str("\\b"),
            '\x0c' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\x0b' => quoted.push_str("\\v"),
            c if c.is_ascii_control() => {
                quoted.push_str(&format!("\\x{:02x}", c as u32));
            }
            // Go prints U+0020 as the only printable space.
            c if c.is_control() || (c.is_whitespace() && c != ' ') => {
                if (c as u32) < 0x10000 {
                    quoted.push_str(&format!("\\u{:04x}", c as u32));
                } else {
                    quoted.push_str(&format!("\\U{:08x}", c as u32));
                }
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Hex dump of `bytes`: precision limits the byte count, the space flag
/// separates bytes and `#` prefixes them with `0x`.
fn hex_dump(bytes: &[u8], upper: bool, spec: &Spec) -> String {
    let len = spec.precision.map_or(bytes.len(), |p| p.min(bytes.len()));
    let prefix = if upper { "0X" } else { "0x" };
    let mut dump = String::with_capacity(len * 3 + 2);

    for (i, byte) in bytes[..len].iter().enumerate() {
        if i == 0 || spec.space {
            if i > 0 {
                dump.push(' ');
            }
            if spec.sharp {
                dump.push_str(prefix);
            }
        }
        if upper {
            dump.push_str(&format!("{:02X}", byte));
        } else {
            dump.push_str(&format!("{:02x}", byte));
        }
    }

    dump
}

fn bad_verb(out: &mut String, verb: char, arg: &str) {
    out.push_str("%!");
    out.push(verb);
    out.push_str("(string=");
    out.push_str(arg);
    out.push(')');
}

fn format_integer(out: &mut String, verb: char, n: i128, spec: &Spec) {
    let magnitude = n.unsigned_abs();
    let mut digits = match verb {
        'b' => format!("{:b}", magnitude),
        'o' => format!("{:o}", magnitude),
        'x' => format!("{:x}", magnitude),
        'X' => format!("{:X}", magnitude),
        _ => magnitude.to_string(),
    };
    let signed = n < 0 || spec.plus || spec.space;

    // Zero padding fills the width with digits and is disabled by an
    // explicit precision or left alignment. The prefix is added after.
    let min_digits = match spec.precision {
        Some(0) if magnitude == 0 => {
            pad_text(out, "", &Spec { zero: false, ..*spec });
            return;
        }
        Some(precision) => precision,
        None if spec.zero && !spec.minus => {
            let width = spec.width.unwrap_or(0);
            if signed { width.saturating_sub(1) } else { width }
        }
        None => 0,
    };
    if digits.len() < min_digits {
        digits.insert_str(0, &"0".repeat(min_digits - digits.len()));
    }

    let prefix = match verb {
        'b' if spec.sharp => "0b",
        'o' if spec.sharp && !digits.starts_with('0') => "0",
        'x' if spec.sharp => "0x",
        'X' if spec.sharp => "0X",
        _ => "",
    };

    let sign = if n < 0 {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    };

    pad_text(
        out,
        &format!("{}{}{}", sign, prefix, digits),
        &Spec { zero: false, ..*spec },
    );
}

fn pad_text(out: &mut String, text: &str, spec: &Spec) {
    let width = spec.width.unwrap_or(0);
    let len = text.chars().count();
    if len >= width {
        out.push_str(text);
        return;
    }

    let fill = width - len;
    if spec.minus {
        out.push_str(text);
        out.push_str(&" ".repeat(fill));
    } else {
        let pad = if spec.zero { "0" } else { " " };
        out.push_str(&pad.repeat(fill));
        out.push_str(text);
    }
}
