// Rendering of the ranked technology report.

/// Renders ranked (label, count) pairs as a two-column text table.
/// Column widths are presentation only; ordering and counts carry the meaning.
pub fn render_table(entries: &[(String, usize)]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<25} | {:<10}\n", "Technology", "Occurrences"));
    out.push_str(&"-".repeat(40));
    out.push('\n');
    for (label, count) in entries {
        out.push_str(&format!("{:<25} | {:<10}\n", label, count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_rows_in_order() {
        let entries = vec![("AWS".to_string(), 3), ("Kubernetes".to_string(), 2)];
        let rendered = render_table(&entries);
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("Technology"));
        assert!(lines[2].starts_with("AWS"));
        assert!(lines[2].contains('3'));
        assert!(lines[3].starts_with("Kubernetes"));
    }

    #[test]
    fn empty_report_is_just_the_header() {
        let rendered = render_table(&[]);
        assert_eq!(rendered.lines().count(), 2);
    }
}
