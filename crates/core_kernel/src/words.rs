//! Spelling monetary totals in words
//!
//! Printed documents carry the rounded total spelled out ("Five Hundred And
//! One Riyals Only") next to the exact numeric total. The spelled form is
//! purely documentary; the two may disagree by the rounding remainder.

const ONES: [&str; 20] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const SCALES: [(i64, &str); 3] = [
    (1_000_000_000, "Billion"),
    (1_000_000, "Million"),
    (1_000, "Thousand"),
];

/// Spells a whole amount in title-cased English words with a currency
/// suffix, e.g. `amount_in_words(501, "Riyals Only")` yields
/// `"Five Hundred And One Riyals Only"`.
pub fn amount_in_words(whole: i64, suffix: &str) -> String {
    let spelled = spell(whole);
    if suffix.is_empty() {
        spelled
    } else {
        format!("{spelled} {suffix}")
    }
}

fn spell(n: i64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }
    if n < 0 {
        return format!("Minus {}", spell(-n));
    }

    let mut remaining = n;
    let mut groups: Vec<String> = Vec::new();
    for (scale, name) in SCALES {
        if remaining >= scale {
            groups.push(format!("{} {name}", spell_below_thousand(remaining / scale)));
            remaining %= scale;
        }
    }
    if remaining > 0 {
        groups.push(spell_below_thousand(remaining));
    }
    groups.join(", ")
}

fn spell_below_thousand(n: i64) -> String {
    debug_assert!((1..1000).contains(&n));
    let hundreds = n / 100;
    let rest = n % 100;
    match (hundreds, rest) {
        (0, r) => spell_below_hundred(r),
        (h, 0) => format!("{} Hundred", ONES[h as usize]),
        (h, r) => format!("{} Hundred And {}", ONES[h as usize], spell_below_hundred(r)),
    }
}

fn spell_below_hundred(n: i64) -> String {
    if n < 20 {
        ONES[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{}-{}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
    }
}
