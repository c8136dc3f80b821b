use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

// Zero-padded ISO-8601 calendar dates. Lexicographic comparison of the
// stored text is chronological, which the due-date queries rely on.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn date_to_text(date: Date) -> anyhow::Result<String> {
    Ok(date.format(&DATE_FORMAT)?)
}

pub fn date_from_text(text: &str) -> anyhow::Result<Date> {
    Ok(Date::parse(text, &DATE_FORMAT)?)
}
