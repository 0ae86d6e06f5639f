//! Terminal renditions of the portal page.
//!
//! Alerts go to stderr so that piped table output stays clean; collection
//! views print plain-text tables to stdout. The rendering is stable text,
//! not a canonical format.

use std::sync::atomic::{AtomicBool, Ordering};

use astropost::{AlertSink, CollectionView, Navigator, Severity};
use astropost_api::{Address, CreditCard, Feedback};

/// Issuer column text; the portal does not record the issuer.
const CARD_ISSUER: &str = "MarsCard";

/// Expiry column text; the portal does not expose expiry dates.
const CARD_VALID_THROUGH: &str = "TODO";

// --- alerts ------------------------------------------------------------------

/// Alerts rendered to stderr, one block per notice.
#[derive(Debug, Default)]
pub struct TerminalAlerts {
    saw_danger: AtomicBool,
}

impl TerminalAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once any danger alert was shown. Drives the process exit code.
    pub fn saw_danger(&self) -> bool {
        self.saw_danger.load(Ordering::SeqCst)
    }
}

impl AlertSink for TerminalAlerts {
    fn show(&self, severity: Severity, message: &str, title: Option<&str>) {
        debug_assert!(!message.is_empty());
        if severity == Severity::Danger {
            self.saw_danger.store(true, Ordering::SeqCst);
        }
        eprintln!("{}", format_alert(severity, message, title));
    }
}

/// One alert as `[severity] Heading message`, heading defaulting per
/// severity.
fn format_alert(severity: Severity, message: &str, title: Option<&str>) -> String {
    match title.or_else(|| severity.heading()) {
        Some(heading) => format!("[{severity}] {heading} {message}"),
        None => format!("[{severity}] {message}"),
    }
}

// --- navigation --------------------------------------------------------------

/// A terminal has no location bar; navigation is reported as a line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn replace(&self, location: &str) {
        println!("→ {location}");
    }
}

// --- collection views --------------------------------------------------------

/// Address table: one row per address, all postal components.
#[derive(Debug, Default, Clone, Copy)]
pub struct AddressTable;

impl CollectionView<Address> for AddressTable {
    fn replace_all(&self, items: &[Address]) {
        print!("{}", render_addresses(items));
    }
}

/// Credit card table. Only the number is on file; issuer and expiry render
/// as fixed placeholders, matching the portal page.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardTable;

impl CollectionView<CreditCard> for CreditCardTable {
    fn replace_all(&self, items: &[CreditCard]) {
        print!("{}", render_credit_cards(items));
    }
}

/// Feedback feed: star rating, author, date, then an excerpt of the text.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeedbackList;

impl CollectionView<Feedback> for FeedbackList {
    fn replace_all(&self, items: &[Feedback]) {
        print!("{}", render_feedback(items));
    }
}

fn render_addresses(addresses: &[Address]) -> String {
    let rows: Vec<Vec<String>> = addresses
        .iter()
        .map(|address| {
            vec![
                address.street.clone(),
                address.zip.clone(),
                address.city.clone(),
                address.country.clone(),
                address.planet.clone(),
            ]
        })
        .collect();
    render_table(
        "Delivery addresses",
        &["Street", "Zip", "City", "Country", "Planet"],
        &rows,
    )
}

fn render_credit_cards(cards: &[CreditCard]) -> String {
    let rows: Vec<Vec<String>> = cards
        .iter()
        .map(|card| {
            vec![
                CARD_ISSUER.to_string(),
                card.number.clone(),
                CARD_VALID_THROUGH.to_string(),
            ]
        })
        .collect();
    render_table(
        "Credit cards",
        &["Issuer", "Number", "Valid through"],
        &rows,
    )
}

/// ```text
/// Recent feedback  2 entries
/// ──────────────────────────
///
/// ★★★★★  ada  Mon, 02 Jan 2006 15:04:05 MST
///   "package arrived before I ordered it"
/// ```
fn render_feedback(entries: &[Feedback]) -> String {
    let header = format!("Recent feedback  {}", count_entries(entries.len()));
    let rule = "─".repeat(header.chars().count());
    let mut out = format!("{header}\n{rule}\n");

    for entry in entries {
        out.push('\n');
        out.push_str(&format!(
            "{}  {}  {}\n",
            stars(entry.rating),
            entry.author,
            entry.date_posted
        ));
        out.push_str(&format!("  \"{}\"\n", excerpt(&entry.text, 72)));
    }
    out
}

// --- helpers -----------------------------------------------------------------

/// Render a padded text table with a title line and column headings.
fn render_table(title: &str, columns: &[&str], rows: &[Vec<String>]) -> String {
    let header = format!("{title}  {}", count_entries(rows.len()));
    let rule = "─".repeat(header.chars().count());
    let mut out = format!("{header}\n{rule}\n");
    if rows.is_empty() {
        return out;
    }

    let mut widths: Vec<usize> = columns.iter().map(|column| column.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let headings: Vec<String> = columns.iter().map(|column| column.to_string()).collect();
    out.push('\n');
    out.push_str(&format_row(&headings, &widths));
    for row in rows {
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        line.push_str("  ");
        line.push_str(cell);
        if i + 1 < cells.len() {
            let pad = widths[i].saturating_sub(cell.chars().count());
            line.push_str(&" ".repeat(pad));
        }
    }
    line.push('\n');
    line
}

fn count_entries(n: usize) -> String {
    format!("{} entr{}", n, if n == 1 { "y" } else { "ies" })
}

/// Five-star scale; ratings above five render as full.
fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

fn excerpt(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max - 1).collect();
    format!("{cut}…")
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn mars_address() -> Address {
        Address::new("1 Olympus Mons Rd", "0001", "New Elysium", "Tharsis", "Mars")
    }

    #[test]
    fn address_table_lists_every_component() {
        let rendered = render_addresses(&[mars_address()]);
        assert!(rendered.contains("Delivery addresses  1 entry"));
        assert!(rendered.contains("Planet"));
        assert!(rendered.contains("1 Olympus Mons Rd"));
        assert!(rendered.contains("Mars"));
    }

    #[test]
    fn card_table_fills_unrecorded_columns_with_placeholders() {
        let rendered = render_credit_cards(&[CreditCard::new("9440 1337 0042 7777")]);
        assert!(rendered.contains("MarsCard"));
        assert!(rendered.contains("9440 1337 0042 7777"));
        assert!(rendered.contains("TODO"));
    }

    #[test]
    fn empty_table_renders_header_only() {
        let rendered = render_addresses(&[]);
        assert!(rendered.contains("Delivery addresses  0 entries"));
        assert!(!rendered.contains("Street"));
    }

    #[test]
    fn table_columns_align_across_rows() {
        let rendered = render_addresses(&[
            mars_address(),
            Address::new("7 Valles Marineris", "0042", "Coprates", "Tharsis", "Mars"),
        ]);
        let cities: Vec<usize> = rendered
            .lines()
            .filter(|line| line.contains("Tharsis") || line.contains("Country"))
            .map(|line| {
                line.find("Tharsis")
                    .or_else(|| line.find("Country"))
                    .unwrap()
            })
            .collect();
        assert_eq!(cities.len(), 3);
        assert!(cities.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn feedback_shows_stars_and_excerpt() {
        let entry = Feedback {
            author: "ada".into(),
            rating: 3,
            text: "solid interplanetary handling".into(),
            date_posted: "Mon, 02 Jan 2006 15:04:05 MST".into(),
        };
        let rendered = render_feedback(&[entry]);
        assert!(rendered.contains("★★★☆☆"));
        assert!(rendered.contains("ada"));
        assert!(rendered.contains("solid interplanetary handling"));
    }

    #[test]
    fn long_feedback_text_is_truncated() {
        let entry = Feedback {
            author: "grace".into(),
            rating: 5,
            text: "x".repeat(200),
            date_posted: "Mon, 02 Jan 2006 15:04:05 MST".into(),
        };
        let rendered = render_feedback(&[entry]);
        assert!(rendered.contains('…'));
        assert!(!rendered.contains(&"x".repeat(100)));
    }

    #[test]
    fn stars_cap_at_five() {
        assert_eq!(stars(7), "★★★★★");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }

    #[test]
    fn alerts_use_default_headings() {
        assert_eq!(
            format_alert(Severity::Danger, "boom", None),
            "[danger] An error has occurred! boom"
        );
        assert_eq!(format_alert(Severity::Success, "saved", None), "[success] saved");
        assert_eq!(
            format_alert(Severity::Warning, "careful", Some("Heads up")),
            "[warning] Heads up careful"
        );
    }

    #[test]
    fn danger_alerts_set_the_exit_flag() {
        let alerts = TerminalAlerts::new();
        assert!(!alerts.saw_danger());
        alerts.show(Severity::Success, "fine", None);
        assert!(!alerts.saw_danger());
        alerts.show(Severity::Danger, "boom", None);
        assert!(alerts.saw_danger());
    }
}
