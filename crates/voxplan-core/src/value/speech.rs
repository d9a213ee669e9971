//! English word expansion for numeric payloads.
//!
//! The spoken form of a plan narrates numbers as words; the short form
//! keeps literal digits. Both must stay deterministic for a given value.

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// Group scales for magnitudes below 10^21. i64 payloads always fit.
const SCALES: [(u128, &str); 6] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Spell a signed integer as English words.
#[must_use]
pub fn spell_integer(n: i128) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut words = Vec::new();
    if n < 0 {
        words.push("minus".to_string());
    }

    let mut rest = n.unsigned_abs();
    if rest >= 1_000_000_000_000_000_000_000 {
        // beyond the scale table; narrate digit by digit
        let mut out = if n < 0 { String::from("minus ") } else { String::new() };
        out.push_str(&spell_digits(&rest.to_string()));
        return out;
    }

    for (scale, name) in SCALES {
        if rest >= scale {
            spell_below_thousand((rest / scale) as u16, &mut words);
            words.push(name.to_string());
            rest %= scale;
        }
    }
    spell_below_thousand(rest as u16, &mut words);

    words.join(" ")
}

/// Spell a decimal literal (optional sign, digits, optional fraction) as
/// English words: "-12.5" becomes "minus twelve point five".
///
/// Integer parts too large for the scale table fall back to digit-by-digit
/// narration, which keeps the expansion total.
#[must_use]
pub fn spell_decimal(literal: &str) -> String {
    let (sign, unsigned) = match literal.strip_prefix('-') {
        Some(rest) => ("minus ", rest),
        None => ("", literal),
    };

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::from(sign);
    match whole.parse::<i128>() {
        Ok(n) if whole.len() <= 21 => out.push_str(&spell_integer(n)),
        _ => out.push_str(&spell_digits(whole)),
    }

    if let Some(fraction) = fraction {
        out.push_str(" point ");
        out.push_str(&spell_digits(fraction));
    }

    out
}

fn spell_below_thousand(n: u16, words: &mut Vec<String>) {
    debug_assert!(n < 1000);
    if n == 0 {
        return;
    }

    let mut rest = n;
    if rest >= 100 {
        words.push(format!("{} hundred", ONES[(rest / 100) as usize]));
        rest %= 100;
    }

    match rest {
        0 => {}
        1..=19 => words.push(ONES[rest as usize].to_string()),
        _ => {
            let tens = TENS[(rest / 10) as usize];
            let ones = rest % 10;
            if ones == 0 {
                words.push(tens.to_string());
            } else {
                words.push(format!("{tens}-{}", ONES[ones as usize]));
            }
        }
    }
}

fn spell_digits(digits: &str) -> String {
    let words: Vec<&str> = digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| ONES[d as usize])
        .collect();

    words.join(" ")
}
