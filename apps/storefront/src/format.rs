//! Display formatting helpers.

/// Format a whole-rupee amount for display.
pub fn rupees(amount: i64) -> String {
    format!("\u{20b9}{amount}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupees() {
        assert_eq!(rupees(699), "₹699");
        assert_eq!(rupees(0), "₹0");
    }
}
