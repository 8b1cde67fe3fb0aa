// pt-BR display formatting for report output.

pub mod brazilian_format {
    /// Formats `value` with `decimals` fraction digits, `.` grouping thousands and `,` as decimal mark.
    pub fn format_decimal(value: f64, decimals: usize) -> String {
        let formatted = format!("{:.decimals$}", value.abs(), decimals = decimals);
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (formatted.as_str(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
        let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };

        match frac_part {
            Some(frac) => format!("{}{},{}", sign, grouped, frac),
            None => format!("{}{}", sign, grouped),
        }
    }

    /// BRL currency display, e.g. `R$ 1.234,56`.
    pub fn format_currency(value: f64) -> String {
        let body = format_decimal(value, 2);
        match body.strip_prefix('-') {
            Some(abs) => format!("-R$ {}", abs),
            None => format!("R$ {}", body),
        }
    }

}
