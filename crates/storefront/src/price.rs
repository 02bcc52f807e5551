//! Won Formatting

/// Thousands separated with commas, the way ko-KR formats integers
pub fn format_won(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `12,000원`
pub fn won(value: u64) -> String {
    format!("{}원", format_won(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_won() {
        assert_eq!(format_won(0), "0");
        assert_eq!(format_won(999), "999");
        assert_eq!(format_won(1000), "1,000");
        assert_eq!(format_won(53000), "53,000");
        assert_eq!(format_won(1234567), "1,234,567");
        assert_eq!(won(3000), "3,000원");
    }
}
