use super::Action;
use colored::Colorize;
use contacts::api::{CmdMessage, CmdResult, MessageLevel};
use contacts::error::ContactsError;
use contacts::model::Contact;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 5] = ["(index)", "id", "name", "email", "phone"];

pub fn print_result(action: Action, result: &CmdResult) {
    match action {
        Action::List if !result.listed_contacts.is_empty() => {
            print!("{}", format_table(&result.listed_contacts));
        }
        Action::Get | Action::Add => {
            for contact in &result.affected_contacts {
                println!("{}", format_contact(contact));
            }
        }
        _ => {}
    }
    print_messages(&result.messages);
}

pub fn print_error(error: &ContactsError) {
    let message = match error {
        ContactsError::UnknownAction(_) => CmdMessage::warning(error.to_string()),
        _ => CmdMessage::error(error.to_string()),
    };
    print_messages(&[message]);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn format_contact(contact: &Contact) -> String {
    format!(
        "{{ id: '{}', name: '{}', email: '{}', phone: '{}' }}",
        contact.id, contact.name, contact.email, contact.phone
    )
}

/// Renders contacts as a bordered table, one row per contact, keyed by
/// position in the collection.
fn format_table(contacts: &[Contact]) -> String {
    let rows: Vec<[String; 5]> = contacts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            [
                i.to_string(),
                c.id.to_string(),
                c.name.clone(),
                c.email.clone(),
                c.phone.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!(" {}{} ", cell, " ".repeat(w - cell.width())))
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let mut out = rule("┌", "┬", "┐");
    out.push_str(&line(&HEADERS.map(String::from)[..]));
    out.push_str(&rule("├", "┼", "┤"));
    for row in &rows {
        out.push_str(&line(&row[..]));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacts::model::ContactId;

    fn ada() -> Contact {
        Contact::new(ContactId::new(1), "Ada", "ada@example.com", "555-0100")
    }

    #[test]
    fn table_has_header_and_one_row_per_contact() {
        let bob = Contact::new(ContactId::new(2), "Bob", "b@x.com", "2");
        let table = format_table(&[ada(), bob]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("(index)"));
        assert!(lines[3].contains("ada@example.com"));
        assert!(lines[4].starts_with("│ 1 "));
    }

    #[test]
    fn table_columns_align_on_display_width() {
        let wide = Contact::new(ContactId::new(10), "山田太郎", "yamada@example.jp", "03-0000");
        let table = format_table(&[ada(), wide]);

        let widths: Vec<usize> = table.lines().map(UnicodeWidthStr::width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn contact_renders_all_fields() {
        assert_eq!(
            format_contact(&ada()),
            "{ id: '1', name: 'Ada', email: 'ada@example.com', phone: '555-0100' }"
        );
    }
}
