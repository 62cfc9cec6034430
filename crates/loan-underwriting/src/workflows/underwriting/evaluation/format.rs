/// `$1,234.56`: two decimals, comma thousands separators, sign ahead of the digits.
pub(crate) fn currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let rounds_to_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if amount.is_sign_negative() && !rounds_to_zero {
        "-"
    } else {
        ""
    };

    format!("${sign}{grouped}.{cents}")
}

/// Ratio rendered as a percentage with one decimal: `0.125` becomes `12.5%`.
pub(crate) fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
