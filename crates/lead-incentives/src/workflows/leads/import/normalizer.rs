pub(crate) fn normalize_header(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}', '_'], " ");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_lose_bom_case_and_spacing() {
        assert_eq!(normalize_header("\u{feff}Lead  Type"), "lead type");
        assert_eq!(normalize_header("attendees_count"), "attendees count");
    }
}
